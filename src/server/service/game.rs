//! Match lifecycle service.
//!
//! Every event that touches a match (discovery by the poller, demo ready, demo parsed)
//! goes through [`GameService::advance`], which creates the match if needed and moves its
//! state forward without ever moving it back.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::{internal::InternalError, AppError},
    model::game::{AssetTransition, DemoStatus, Game, GameDetail, TransitionOutcome},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies an asset state transition to a match.
    ///
    /// Inserts the match directly in the target state if it does not exist. Otherwise the
    /// state is advanced only from an earlier state. Participants are recorded unless the
    /// match had already been parsed before this call.
    ///
    /// # Arguments
    /// - `transition` - Share code, target state, optional asset reference and participants
    ///
    /// # Returns
    /// - `Ok((Game, TransitionOutcome))` - Stored match after the transition
    /// - `Err(AppError::InternalErr)` - Match missing when read back
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn advance(
        &self,
        transition: AssetTransition,
    ) -> Result<(Game, TransitionOutcome), AppError> {
        let game_repo = GameRepository::new(self.db);
        let demo_name = transition.demo_name.as_deref().unwrap_or_default();

        let outcome = if game_repo
            .insert_if_absent(&transition.share_code, transition.target, demo_name)
            .await?
        {
            TransitionOutcome::Created
        } else if game_repo
            .advance_status(
                &transition.share_code,
                transition.target,
                transition.demo_name.as_deref(),
            )
            .await?
        {
            TransitionOutcome::Advanced
        } else {
            TransitionOutcome::Unchanged
        };

        let game = game_repo
            .find_by_share_code(&transition.share_code)
            .await?
            .ok_or_else(|| InternalError::MissingGame {
                share_code: transition.share_code.clone(),
            })?;

        let frozen = outcome == TransitionOutcome::Unchanged && game.status == DemoStatus::Parsed;
        if !frozen && !transition.players.is_empty() {
            game_repo.add_players(game.id, &transition.players).await?;
        }

        tracing::debug!(
            "Match {} -> {} ({:?})",
            game.share_code,
            game.status.as_str(),
            outcome
        );

        Ok((game, outcome))
    }

    /// Gets a match with its participants.
    ///
    /// # Returns
    /// - `Ok(GameDetail)` - Match found
    /// - `Err(AppError::NotFound)` - No match with that share code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_detail(&self, share_code: &str) -> Result<GameDetail, AppError> {
        let game_repo = GameRepository::new(self.db);

        let game = game_repo
            .find_by_share_code(share_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", share_code)))?;
        let players = game_repo.get_players(game.id).await?;

        Ok(GameDetail { game, players })
    }
}
