//! Rate limiting for manual refreshes

use std::time::{Duration, Instant};

/// Lets a manual refresh through at most once per cooldown period.
#[derive(Debug)]
pub struct ManualRefresh {
    cooldown: Duration,
    last: Option<Instant>,
}

impl ManualRefresh {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    /// Records a refresh at `now` if the cooldown has passed.
    pub fn try_trigger(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last
            && now.saturating_duration_since(last) < self.cooldown
        {
            tracing::debug!(
                "Manual refresh ignored, cooldown has {}s left",
                (self.cooldown - now.saturating_duration_since(last)).as_secs()
            );
            return false;
        }
        self.last = Some(now);
        true
    }
}
