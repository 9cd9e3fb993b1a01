//! Match domain models and the asset state transition parameters.

use chrono::{DateTime, Utc};

pub use entity::game::DemoStatus;

use crate::model::game::GameDto;

/// Match identified by its share code.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub share_code: String,
    /// Asset reference; empty until the demo service reports a location.
    pub demo_name: String,
    pub status: DemoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            share_code: entity.share_code,
            demo_name: entity.demo_name,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Match with its known participants.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub game: Game,
    /// Participant Steam IDs, ascending.
    pub players: Vec<String>,
}

impl GameDetail {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.game.id,
            share_code: self.game.share_code,
            demo_name: self.game.demo_name,
            status: self.game.status.as_str().to_string(),
            steam_ids: self.players,
            created_at: self.game.created_at,
            updated_at: self.game.updated_at,
        }
    }
}

/// Request to move a match's asset forward in its lifecycle.
#[derive(Debug, Clone)]
pub struct AssetTransition {
    pub share_code: String,
    pub target: DemoStatus,
    /// New asset location, if the event carries one.
    pub demo_name: Option<String>,
    /// Participants to record. Ignored once the match is parsed.
    pub players: Vec<String>,
}

/// What an `AssetTransition` did to the stored match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The match did not exist and was created directly in the target state.
    Created,
    /// The match moved forward into the target state.
    Advanced,
    /// The match was already in or past the target state.
    Unchanged,
}
