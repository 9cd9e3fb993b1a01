//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Adds a user to a guild's member set.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Internal guild row id
/// - `user_id` - Internal user row id
///
/// # Returns
/// - `Ok(entity::guild_user::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert (including duplicate membership)
pub async fn add_member(
    db: &DatabaseConnection,
    guild_id: i32,
    user_id: i32,
) -> Result<entity::guild_user::Model, DbErr> {
    entity::guild_user::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Records a steam account as a participant of a game.
///
/// # Arguments
/// - `db` - Database connection
/// - `game_id` - Internal game row id
/// - `steam_id` - Steam ID of the participant, registered or not
///
/// # Returns
/// - `Ok(entity::game_player::Model)` - Created participant row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_player(
    db: &DatabaseConnection,
    game_id: i32,
    steam_id: impl Into<String>,
) -> Result<entity::game_player::Model, DbErr> {
    entity::game_player::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        steam_id: ActiveValue::Set(steam_id.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
