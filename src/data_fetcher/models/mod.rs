pub mod events;
pub mod fixture;
pub mod source;

pub use events::{ApiEvent, EventsResponse};
pub use fixture::{BettingInfo, Match, MatchId, TeamStats, assign_ids};
pub use source::{DataSource, FallbackReason};
