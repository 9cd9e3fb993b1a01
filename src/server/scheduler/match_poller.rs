//! Periodic discovery of new matches through the Steam Web API.
//!
//! Each cycle asks Steam for the next share code of every pollable account, groups the
//! accounts that report the same share code and hands each group to the pipeline once.
//! Cycles never overlap; a tick that fires while a cycle is still running is skipped.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use futures_util::{stream, StreamExt};
use tokio::sync::{watch, Mutex};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    service::{
        pipeline::{DispatchOutcome, MatchPipeline},
        provider::{is_new_match, MatchHistoryApi},
    },
};

/// Maximum number of Steam requests in flight during a cycle.
const DEFAULT_CONCURRENCY: usize = 8;

/// Counters for a completed poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Accounts queried.
    pub polled: usize,
    /// Accounts whose query failed.
    pub failed: usize,
    /// Distinct new share codes found.
    pub discovered: usize,
    /// Share codes a download request was sent for.
    pub dispatched: usize,
}

/// Polls Steam for every pollable account and feeds new matches into the pipeline.
///
/// Cloning is cheap; clones share the single-flight lock.
#[derive(Clone)]
pub struct MatchPoller {
    steam: Arc<dyn MatchHistoryApi>,
    pipeline: MatchPipeline,
    cycle: Arc<Mutex<()>>,
    concurrency: usize,
}

impl MatchPoller {
    pub fn new(steam: Arc<dyn MatchHistoryApi>, pipeline: MatchPipeline) -> Self {
        Self {
            steam,
            pipeline,
            cycle: Arc::new(Mutex::new(())),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets how many Steam requests may run at once.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Runs one poll cycle unless one is already running.
    ///
    /// A failed Steam query only skips that account. A failed download request is logged
    /// and retried when the share code is discovered again.
    ///
    /// # Returns
    /// - `Ok(Some(CycleReport))` - Cycle completed
    /// - `Ok(None)` - Another cycle was in progress; nothing was done
    /// - `Err(AppError::DbErr)` - Loading accounts failed
    pub async fn run_cycle(&self) -> Result<Option<CycleReport>, AppError> {
        let Ok(_running) = self.cycle.try_lock() else {
            tracing::debug!("Previous poll cycle still running, skipping tick");
            return Ok(None);
        };

        let users = UserRepository::new(self.pipeline.db())
            .get_pollable()
            .await?;

        let mut report = CycleReport {
            polled: users.len(),
            ..Default::default()
        };

        if users.is_empty() {
            return Ok(Some(report));
        }

        tracing::debug!("Polling Steam for {} account(s)", users.len());

        let results: Vec<(User, Result<String, _>)> = stream::iter(users)
            .map(|user| async move {
                let next = self.steam.next_share_code(&user).await;
                (user, next)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut discovered: BTreeMap<String, Vec<User>> = BTreeMap::new();
        for (user, result) in results {
            match result {
                Ok(next_code) if is_new_match(&next_code, &user.last_share_code) => {
                    tracing::info!("New match {} for {}", next_code, user.steam_id);
                    discovered.entry(next_code).or_default().push(user);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Failed to poll Steam for {}: {}", user.steam_id, e);
                    report.failed += 1;
                }
            }
        }

        report.discovered = discovered.len();

        for (share_code, mut reporters) in discovered {
            reporters.sort_by_key(|user| user.id);
            match self
                .pipeline
                .process_discovery(&share_code, &reporters)
                .await
            {
                Ok(DispatchOutcome::Dispatched) => report.dispatched += 1,
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to process match {}: {}", share_code, e),
            }
        }

        self.pipeline.prune_guards().await;

        Ok(Some(report))
    }

    /// Waits for an in-flight cycle to finish.
    pub async fn wait_idle(&self) {
        let _idle = self.cycle.lock().await;
    }
}

/// Starts the match polling scheduler.
///
/// Runs [`MatchPoller::run_cycle`] every `interval` until `shutdown` flips to `true`,
/// then stops the scheduler and waits for the cycle in progress.
///
/// # Arguments
/// - `poller` - Poller shared with the job
/// - `interval` - Time between cycle starts
/// - `shutdown` - Receives `true` when the process is shutting down
///
/// # Returns
/// - `Ok(())` - Scheduler stopped cleanly
/// - `Err(AppError::SchedulerErr)` - Scheduler could not be created, started or stopped
pub async fn start_scheduler(
    poller: MatchPoller,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), AppError> {
    let mut scheduler = JobScheduler::new().await?;

    let job_poller = poller.clone();
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let poller = job_poller.clone();

        Box::pin(async move {
            match poller.run_cycle().await {
                Ok(Some(report)) if report.discovered > 0 || report.failed > 0 => {
                    tracing::info!(
                        "Poll cycle: {} polled, {} failed, {} new, {} requested",
                        report.polled,
                        report.failed,
                        report.discovered,
                        report.dispatched
                    );
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error running poll cycle: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Match poller started, polling every {:?}", interval);

    while !*shutdown.borrow() {
        if shutdown.changed().await.is_err() {
            break;
        }
    }

    scheduler.shutdown().await?;
    poller.wait_idle().await;

    tracing::info!("Match poller stopped");

    Ok(())
}
