//! Account commands: `/register`, `/remove` and `/users`.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::commands::{guild_id, required_string, CommandReply},
    error::AppError,
    model::user::{RegisterUserParam, User},
    service::user::UserService,
};

/// Members listed by `/users`.
pub const USER_LIST_LIMIT: u64 = 25;

pub fn register_definition() -> CreateCommand {
    CreateCommand::new("register")
        .description("Register a Steam account to have its matches tracked")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "steam_id", "Your SteamID64")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "auth_code",
                "Your match history authentication code",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "last_share_code",
                "Share code of your most recent match (CSGO-...)",
            )
            .required(true),
        )
}

pub fn remove_definition() -> CreateCommand {
    CreateCommand::new("remove")
        .description("Stop tracking a Steam account")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "steam_id",
                "Steam ID of the account to remove",
            )
            .required(true),
        )
}

pub fn users_definition() -> CreateCommand {
    CreateCommand::new("users").description("List the accounts registered in this server")
}

/// Registers or updates an account and adds it to the current guild.
///
/// An unknown guild is created with the current channel for notifications.
pub async fn register(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let guild_id = guild_id(command)?;
    let options = command.data.options();

    let param = RegisterUserParam {
        steam_id: required_string(&options, "steam_id")?,
        auth_code: required_string(&options, "auth_code")?,
        last_share_code: required_string(&options, "last_share_code")?,
        discord_user_id: Some(command.user.id.get().to_string()),
    };

    let channel_id = command.channel_id.get().to_string();
    let user = UserService::new(db)
        .register(&guild_id, Some(&channel_id), param)
        .await?;

    Ok(CommandReply::private(format!(
        "✅ Registered!\n**Steam ID:** {}\n**Last Share Code:** `{}`",
        user.steam_id, user.last_share_code
    )))
}

/// Removes an account from every guild.
pub async fn remove(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let options = command.data.options();
    let steam_id = required_string(&options, "steam_id")?;

    UserService::new(db).remove(&steam_id).await?;

    Ok(CommandReply::private(format!(
        "✅ Steam account {} has been removed",
        steam_id.trim()
    )))
}

/// Lists the guild's registered accounts.
pub async fn users(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let guild_id = guild_id(command)?;

    let (users, total) = UserService::new(db)
        .list_for_guild(&guild_id, USER_LIST_LIMIT)
        .await?;

    Ok(CommandReply::public(format_user_list(&users, total)))
}

/// Renders the `/users` reply.
pub fn format_user_list(users: &[User], total: u64) -> String {
    if users.is_empty() {
        return "No accounts are registered in this server yet. Use `/register` to add one."
            .to_string();
    }

    let mut lines = vec![format!("**Registered accounts ({})**", total)];
    lines.extend(users.iter().map(|user| {
        format!(
            "• **{}** - Last: `{}`",
            user.steam_id, user.last_share_code
        )
    }));

    let hidden = total.saturating_sub(users.len() as u64);
    if hidden > 0 {
        lines.push(format!("... and {} more", hidden));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(steam_id: &str, last_share_code: &str) -> User {
        User {
            id: 1,
            steam_id: steam_id.to_string(),
            auth_code: "AAAA-BBBBB-CCCC".to_string(),
            last_share_code: last_share_code.to_string(),
            discord_user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn lists_accounts_without_auth_codes() {
        let text = format_user_list(&[user("100", "CSGO-1"), user("200", "CSGO-2")], 2);

        assert!(text.starts_with("**Registered accounts (2)**"));
        assert!(text.contains("• **100** - Last: `CSGO-1`"));
        assert!(!text.contains("AAAA-BBBBB-CCCC"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn notes_accounts_beyond_the_limit() {
        let text = format_user_list(&[user("100", "CSGO-1")], 30);

        assert!(text.ends_with("... and 29 more"));
    }

    #[test]
    fn empty_guild_points_to_register() {
        assert!(format_user_list(&[], 0).contains("/register"));
    }
}
