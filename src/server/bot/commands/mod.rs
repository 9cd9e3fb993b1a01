//! Slash commands.
//!
//! Commands are registered globally on ready and dispatched from `interaction_create`.
//! Each command returns a [`CommandReply`]; errors a user can act on are shown to them,
//! anything else is logged and replaced with a generic message. Error replies are always
//! ephemeral.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, ResolvedOption, ResolvedValue,
};

use crate::server::error::AppError;

pub mod account;
pub mod guild;

/// Text sent back for a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub content: String,
    /// Only visible to the invoking user.
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

/// Definitions of every slash command the bot handles.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        account::register_definition(),
        account::remove_definition(),
        account::users_definition(),
        guild::set_channel_definition(),
        guild::stats_definition(),
        guild::matches_definition(),
    ]
}

/// Runs a slash command and responds to the interaction.
///
/// # Arguments
/// - `db` - Database connection used by the command
/// - `ctx` - Discord context for responding
/// - `command` - Command interaction
pub async fn handle_command(db: &DatabaseConnection, ctx: Context, command: CommandInteraction) {
    let name = command.data.name.clone();

    tracing::debug!("Command /{} from user {}", name, command.user.id);

    let result = match name.as_str() {
        "register" => account::register(db, &command).await,
        "remove" => account::remove(db, &command).await,
        "users" => account::users(db, &command).await,
        "set_channel" => guild::set_channel(db, &command).await,
        "stats" => guild::stats(db, &command).await,
        "matches" => guild::matches(db, &command).await,
        _ => Err(AppError::BadRequest(format!("Unknown command /{}", name))),
    };

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => CommandReply::private(error_message(&name, &e)),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", name, e);
    }
}

/// Message shown to the user for a failed command.
pub fn error_message(command: &str, error: &AppError) -> String {
    match error {
        AppError::BadRequest(msg) | AppError::NotFound(msg) => format!("❌ {}", msg),
        err => {
            tracing::error!("Command /{} failed: {}", command, err);
            "❌ Something went wrong, please try again later.".to_string()
        }
    }
}

/// Value of a string option, if it was supplied.
pub fn string_option(options: &[ResolvedOption<'_>], name: &str) -> Option<String> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::String(value) if option.name == name => Some(value.to_string()),
        _ => None,
    })
}

/// Value of a required string option.
///
/// # Returns
/// - `Err(AppError::BadRequest)` - Option missing
pub fn required_string(options: &[ResolvedOption<'_>], name: &str) -> Result<String, AppError> {
    string_option(options, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing option `{}`", name)))
}

/// Guild the command was used in.
///
/// # Returns
/// - `Err(AppError::BadRequest)` - Command used outside a server
pub fn guild_id(command: &CommandInteraction) -> Result<String, AppError> {
    command
        .guild_id
        .map(|id| id.get().to_string())
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_shown() {
        let message = error_message(
            "register",
            &AppError::BadRequest("Auth code is required".to_string()),
        );

        assert_eq!(message, "❌ Auth code is required");
    }

    #[test]
    fn internal_errors_are_hidden() {
        let message = error_message("users", &AppError::InternalError("boom".to_string()));

        assert!(!message.contains("boom"));
    }

    #[test]
    fn every_command_is_defined() {
        assert_eq!(definitions().len(), 6);
    }
}
