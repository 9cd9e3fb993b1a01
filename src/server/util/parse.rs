use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from a string slice
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Parses a Discord snowflake, rejecting zero which serenity ids cannot represent.
///
/// # Arguments
/// - `value` - Stored snowflake string
///
/// # Returns
/// - `Some(u64)` - Non-zero snowflake
/// - `None` - Not a number or zero
pub fn parse_snowflake(value: &str) -> Option<u64> {
    parse_u64_from_string(value).ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_string() {
        assert_eq!(parse_u64_from_string("123456789").unwrap(), 123456789);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let result = parse_u64_from_string("abc");

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }

    #[test]
    fn snowflake_rejects_zero() {
        assert_eq!(parse_snowflake("0"), None);
        assert_eq!(parse_snowflake(""), None);
        assert_eq!(parse_snowflake("42"), Some(42));
    }
}
