//! The match feed controller.
//!
//! Owns the HTTP client and the latest [`FeedSnapshot`]. Refresh cycles are
//! single-flight: a cycle requested while another one is still running is
//! skipped rather than queued, so completions can never land out of order.

mod scheduler;
mod snapshot;

pub use scheduler::{spawn_refresh, spawn_refresh_loop};
pub use snapshot::FeedSnapshot;

use crate::config::Config;
use crate::data_fetcher::api::{FetchOutcome, create_http_client_with_timeout, fetch_matches};
use crate::error::AppError;
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// What a call to [`MatchFeed::refresh`] did.
#[derive(Debug, Clone)]
pub enum RefreshResult {
    /// A new snapshot was committed.
    Completed(Arc<FeedSnapshot>),
    /// Another cycle was already in flight; nothing was fetched.
    Skipped,
}

/// Holds the in-flight flag for the lifetime of one cycle.
///
/// Dropping it (including when the owning task is cancelled) releases the flag.
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct MatchFeed {
    client: Client,
    config: Config,
    in_flight: AtomicBool,
    generation: AtomicU64,
    latest: RwLock<Option<Arc<FeedSnapshot>>>,
}

impl MatchFeed {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// Builds the feed together with its HTTP client.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Claims the single in-flight slot, or returns `None` if it is taken.
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generation of the latest committed snapshot; 0 before the first commit.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Latest committed snapshot, if any cycle has finished yet.
    pub async fn snapshot(&self) -> Option<Arc<FeedSnapshot>> {
        self.latest.read().await.clone()
    }

    /// Replaces the current snapshot with the outcome of a finished cycle.
    pub async fn commit(&self, outcome: FetchOutcome) -> Arc<FeedSnapshot> {
        let mut latest = self.latest.write().await;
        let generation = self.generation.load(Ordering::Acquire) + 1;
        let snapshot = Arc::new(FeedSnapshot::new(
            generation,
            outcome.matches,
            outcome.source,
        ));
        *latest = Some(Arc::clone(&snapshot));
        self.generation.store(generation, Ordering::Release);

        info!(
            "Committed snapshot generation {} with {} matches ({:?})",
            generation,
            snapshot.matches.len(),
            snapshot.source
        );
        snapshot
    }

    /// Runs one fetch cycle unless one is already running.
    pub async fn refresh(&self) -> RefreshResult {
        let Some(_guard) = self.try_begin() else {
            debug!("Refresh skipped: previous cycle still in flight");
            return RefreshResult::Skipped;
        };

        let outcome = fetch_matches(&self.client, &self.config).await;
        RefreshResult::Completed(self.commit(outcome).await)
    }
}
