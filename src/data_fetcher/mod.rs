pub mod api;
pub mod models;
pub mod processors;

pub use api::{FetchOutcome, fetch_matches};
pub use models::{BettingInfo, DataSource, FallbackReason, Match, MatchId, TeamStats};
pub use processors::{fallback_matches, transform_event};
