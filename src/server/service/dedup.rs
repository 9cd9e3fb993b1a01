//! In-memory at-most-once guard for outbound demo requests.
//!
//! A share code is claimed before its request is sent and released again if the request
//! fails, so only one download (or parse) request is in flight per share code and a failed
//! request is retried on a later discovery. The set is process-local and starts empty on
//! restart.

use std::{collections::HashSet, sync::Arc};
use tokio::sync::RwLock;

/// Claimed share codes are forgotten once the set grows past this size.
pub const DEFAULT_HIGH_WATER: usize = 1000;

/// Set of share codes with an outstanding or completed request.
///
/// Cloning is cheap; clones share the same set.
#[derive(Clone)]
pub struct ShareCodeGuard {
    claimed: Arc<RwLock<HashSet<String>>>,
    high_water: usize,
}

impl ShareCodeGuard {
    /// Creates an empty guard that clears itself above [`DEFAULT_HIGH_WATER`] entries.
    pub fn new() -> Self {
        Self::with_high_water(DEFAULT_HIGH_WATER)
    }

    /// Creates an empty guard that clears itself above `high_water` entries.
    pub fn with_high_water(high_water: usize) -> Self {
        Self {
            claimed: Arc::new(RwLock::new(HashSet::new())),
            high_water,
        }
    }

    /// Claims a share code for the caller.
    ///
    /// Takes a read lock for the common already-claimed case and only re-checks under the
    /// write lock when the code looks free.
    ///
    /// # Returns
    /// - `true` - The caller owns the request for this share code
    /// - `false` - Another caller already claimed it
    pub async fn try_claim(&self, share_code: &str) -> bool {
        if self.claimed.read().await.contains(share_code) {
            return false;
        }

        self.claimed.write().await.insert(share_code.to_string())
    }

    /// Releases a claim after a failed request so a later discovery can retry.
    pub async fn release(&self, share_code: &str) {
        self.claimed.write().await.remove(share_code);
    }

    /// Whether a share code is currently claimed.
    pub async fn is_claimed(&self, share_code: &str) -> bool {
        self.claimed.read().await.contains(share_code)
    }

    /// Number of claimed share codes.
    pub async fn len(&self) -> usize {
        self.claimed.read().await.len()
    }

    /// Clears the whole set once it exceeds the high-water mark.
    ///
    /// Durable match states keep cleared share codes from being requested again.
    ///
    /// # Returns
    /// - `true` - The set was cleared
    /// - `false` - The set was below the high-water mark
    pub async fn prune(&self) -> bool {
        let mut claimed = self.claimed.write().await;
        if claimed.len() <= self.high_water {
            return false;
        }

        let cleared = claimed.len();
        claimed.clear();
        tracing::info!("Cleared {} claimed share codes", cleared);

        true
    }
}

impl Default for ShareCodeGuard {
    fn default() -> Self {
        Self::new()
    }
}
