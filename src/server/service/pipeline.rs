//! Match processing pipeline from discovery to notification.
//!
//! A match is discovered by the poller, its demo is requested from the demo service, the
//! demo service calls back when the demo is ready, parsing is requested, and the parsed
//! callback fans the summary out to guilds. Outbound requests are guarded so each share
//! code is requested at most once per stage while the request is outstanding.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    model::{
        event::{DemoParsedEvent, DemoReadyEvent},
        game::{AssetTransition, DemoStatus, Game, TransitionOutcome},
        notification::FanoutReport,
        user::User,
    },
    service::{
        dedup::ShareCodeGuard,
        game::GameService,
        notification::{fanout::MatchFanout, MatchNotifier},
        provider::DemoApi,
    },
};

pub const DEMO_READY_PATH: &str = "webhooks/demoReady";
pub const DEMO_PARSED_PATH: &str = "webhooks/demoParsed";

/// Public URLs the demo service calls back into.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackUrls {
    pub demo_ready: String,
    pub demo_parsed: String,
}

impl CallbackUrls {
    /// Builds the callback URLs from the public base URL of this server.
    ///
    /// # Returns
    /// - `Ok(CallbackUrls)` - Callback URLs under `base_url`
    /// - `Err(ConfigError::InvalidUrl)` - Base URL cannot be parsed or joined
    pub fn from_base(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let demo_ready = base
            .join(DEMO_READY_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let demo_parsed = base
            .join(DEMO_PARSED_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            demo_ready: demo_ready.into(),
            demo_parsed: demo_parsed.into(),
        })
    }
}

/// What happened to a request for the next provider stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The request was sent and accepted.
    Dispatched,
    /// Another caller holds the request for this share code.
    AlreadyClaimed,
    /// The match is already past the stage; nothing was sent.
    NotNeeded,
    /// The request failed and its claim was released.
    Failed,
}

/// Orchestrates match state, outbound demo requests and notifications.
///
/// Cloning is cheap; clones share the deduplication guards.
#[derive(Clone)]
pub struct MatchPipeline {
    db: DatabaseConnection,
    demo_api: Arc<dyn DemoApi>,
    notifier: Arc<dyn MatchNotifier>,
    download_guard: ShareCodeGuard,
    parse_guard: ShareCodeGuard,
    callbacks: CallbackUrls,
}

impl MatchPipeline {
    pub fn new(
        db: DatabaseConnection,
        demo_api: Arc<dyn DemoApi>,
        notifier: Arc<dyn MatchNotifier>,
        callbacks: CallbackUrls,
    ) -> Self {
        Self {
            db,
            demo_api,
            notifier,
            download_guard: ShareCodeGuard::new(),
            parse_guard: ShareCodeGuard::new(),
            callbacks,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Handles a share code reported by one or more accounts in the same poll cycle.
    ///
    /// Advances every reporter's last share code, records the match with the reporters
    /// as participants, links it to their accounts and requests the demo once.
    ///
    /// # Arguments
    /// - `share_code` - Newly discovered share code
    /// - `reporters` - Accounts whose next share code was `share_code`
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome)` - Whether a download request was sent
    /// - `Err(AppError::ProviderErr)` - Download request failed; the claim was released
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn process_discovery(
        &self,
        share_code: &str,
        reporters: &[User],
    ) -> Result<DispatchOutcome, AppError> {
        let user_repo = UserRepository::new(&self.db);

        let reporter_ids: Vec<i32> = reporters.iter().map(|u| u.id).collect();
        user_repo
            .update_last_share_codes(&reporter_ids, share_code)
            .await?;

        let (game, _) = GameService::new(&self.db)
            .advance(AssetTransition {
                share_code: share_code.to_string(),
                target: DemoStatus::Requested,
                demo_name: None,
                players: reporters.iter().map(|u| u.steam_id.clone()).collect(),
            })
            .await?;

        for user_id in reporter_ids {
            user_repo.add_game(user_id, game.id).await?;
        }

        if game.status != DemoStatus::Requested {
            tracing::debug!(
                "Match {} is already {}, skipping download",
                share_code,
                game.status.as_str()
            );
            return Ok(DispatchOutcome::NotNeeded);
        }

        self.dispatch_download(share_code).await
    }

    async fn dispatch_download(&self, share_code: &str) -> Result<DispatchOutcome, AppError> {
        if !self.download_guard.try_claim(share_code).await {
            tracing::debug!("Download for {} already requested", share_code);
            return Ok(DispatchOutcome::AlreadyClaimed);
        }

        if let Err(e) = self
            .demo_api
            .request_download(share_code, &self.callbacks.demo_ready)
            .await
        {
            self.download_guard.release(share_code).await;
            return Err(e.into());
        }

        tracing::info!("Requested demo download for {}", share_code);

        Ok(DispatchOutcome::Dispatched)
    }

    /// Handles the demo service reporting that a demo was downloaded.
    ///
    /// Stores the asset reference and requests parsing. A failed parse request is logged
    /// and its claim released; the event itself still succeeds because local state was
    /// persisted.
    ///
    /// # Returns
    /// - `Ok((Game, DispatchOutcome))` - Stored match and parse request outcome
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn handle_demo_ready(
        &self,
        event: DemoReadyEvent,
    ) -> Result<(Game, DispatchOutcome), AppError> {
        let (game, _) = GameService::new(&self.db)
            .advance(AssetTransition {
                share_code: event.share_code.clone(),
                target: DemoStatus::Ready,
                demo_name: Some(event.demo_path),
                players: Vec::new(),
            })
            .await?;

        if game.status == DemoStatus::Parsed {
            return Ok((game, DispatchOutcome::NotNeeded));
        }

        if !self.parse_guard.try_claim(&game.share_code).await {
            return Ok((game, DispatchOutcome::AlreadyClaimed));
        }

        let outcome = match self
            .demo_api
            .request_parse(&game.share_code, &self.callbacks.demo_parsed)
            .await
        {
            Ok(()) => {
                tracing::info!("Requested demo parsing for {}", game.share_code);
                DispatchOutcome::Dispatched
            }
            Err(e) => {
                tracing::error!("Failed to request parsing for {}: {}", game.share_code, e);
                self.parse_guard.release(&game.share_code).await;
                DispatchOutcome::Failed
            }
        };

        Ok((game, outcome))
    }

    /// Handles the demo service reporting that a demo was parsed.
    ///
    /// Stores the final state and notifies guilds. A repeated parsed event for a match
    /// that was already parsed leaves the match as it is and only notifies guilds an
    /// earlier fan-out did not reach, so a delivery interrupted by a storage failure is
    /// completed by the redelivered event.
    ///
    /// # Returns
    /// - `Ok((Game, FanoutReport))` - Stored match and delivery report
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn handle_demo_parsed(
        &self,
        event: DemoParsedEvent,
    ) -> Result<(Game, FanoutReport), AppError> {
        let demo_name = Some(event.demo_path).filter(|path| !path.is_empty());

        let (game, outcome) = GameService::new(&self.db)
            .advance(AssetTransition {
                share_code: event.share_code.clone(),
                target: DemoStatus::Parsed,
                demo_name,
                players: event.steam_ids,
            })
            .await?;

        if outcome == TransitionOutcome::Unchanged {
            tracing::debug!(
                "Match {} was already parsed, notifying remaining guilds",
                game.share_code
            );
        }

        let report = MatchFanout::new(&self.db, self.notifier.as_ref())
            .deliver(&game.share_code, event.stats)
            .await?;

        Ok((game, report))
    }

    /// Clears the deduplication guards if they grew past their high-water mark.
    pub async fn prune_guards(&self) {
        self.download_guard.prune().await;
        self.parse_guard.prune().await;
    }
}
