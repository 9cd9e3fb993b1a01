//! Validated inbound events from the demo service.

use crate::{
    model::webhook::{DemoParsedDto, DemoReadyDto},
    server::error::validation::ValidationError,
};

/// Demo file for a match is downloaded and available.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReadyEvent {
    pub share_code: String,
    pub demo_path: String,
}

impl TryFrom<DemoReadyDto> for DemoReadyEvent {
    type Error = ValidationError;

    fn try_from(dto: DemoReadyDto) -> Result<Self, Self::Error> {
        if !dto.success {
            return Err(ValidationError::Unsuccessful(dto.message));
        }

        let share_code = dto.data.share_code.trim().to_string();
        if share_code.is_empty() {
            return Err(ValidationError::MissingField("share_code"));
        }

        let demo_path = dto.data.demo_path.trim().to_string();
        if demo_path.is_empty() {
            return Err(ValidationError::MissingField("demo_path"));
        }

        Ok(Self {
            share_code,
            demo_path,
        })
    }
}

/// Demo for a match has been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoParsedEvent {
    pub share_code: String,
    /// May be empty; an existing asset reference is then kept.
    pub demo_path: String,
    pub stats: Option<serde_json::Value>,
    pub steam_ids: Vec<String>,
}

impl TryFrom<DemoParsedDto> for DemoParsedEvent {
    type Error = ValidationError;

    fn try_from(dto: DemoParsedDto) -> Result<Self, Self::Error> {
        if !dto.success {
            return Err(ValidationError::Unsuccessful(dto.message));
        }

        let share_code = dto.data.share_code.trim().to_string();
        if share_code.is_empty() {
            return Err(ValidationError::MissingField("share_code"));
        }

        let steam_ids = dto
            .data
            .steam_ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        Ok(Self {
            share_code,
            demo_path: dto.data.demo_path.trim().to_string(),
            stats: dto.data.stats.filter(|stats| !stats.is_null()),
            steam_ids,
        })
    }
}
