//! Periodic scheduling of fetch cycles.

use super::{MatchFeed, RefreshResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Runs one refresh on its own task.
pub fn spawn_refresh(feed: Arc<MatchFeed>) -> JoinHandle<RefreshResult> {
    tokio::spawn(async move { feed.refresh().await })
}

/// Starts the recurring refresh: one cycle immediately, then one per `period`.
///
/// Each tick spawns its cycle without awaiting it. Ticks that arrive while a
/// cycle is still running are dropped by the feed's single-flight guard.
/// Abort the returned handle to stop.
pub fn spawn_refresh_loop(feed: Arc<MatchFeed>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            tracing::debug!("Refresh tick (generation {})", feed.generation());
            spawn_refresh(Arc::clone(&feed));
        }
    })
}
