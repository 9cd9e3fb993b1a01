//! Game factory for creating test match entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::game::DemoStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .share_code("CSGO-aaaaa-bbbbb-ccccc-ddddd-eeeee")
///     .status(DemoStatus::Parsed)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    share_code: String,
    demo_name: String,
    status: DemoStatus,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - share_code: `"CSGO-GAME-{id}"` where id is auto-incremented
    /// - demo_name: `""`
    /// - status: `DemoStatus::Requested`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            share_code: format!("CSGO-GAME-{}", id),
            demo_name: String::new(),
            status: DemoStatus::Requested,
        }
    }

    /// Sets the match share code.
    pub fn share_code(mut self, share_code: impl Into<String>) -> Self {
        self.share_code = share_code.into();
        self
    }

    /// Sets the demo asset reference.
    pub fn demo_name(mut self, demo_name: impl Into<String>) -> Self {
        self.demo_name = demo_name.into();
        self
    }

    /// Sets the stored demo status.
    pub fn status(mut self, status: DemoStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            share_code: ActiveValue::Set(self.share_code),
            demo_name: ActiveValue::Set(self.demo_name),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::add_player;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_game_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Game).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let game = create_game(db).await?;

        assert!(game.share_code.starts_with("CSGO-"));
        assert_eq!(game.status, DemoStatus::Requested);
        assert!(game.demo_name.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn records_players_for_game() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Game)
            .with_table(GamePlayer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let game = create_game(db).await?;
        let player = add_player(db, game.id, "76561198000000001").await?;

        assert_eq!(player.game_id, game.id);
        assert_eq!(player.steam_id, "76561198000000001");

        Ok(())
    }
}
