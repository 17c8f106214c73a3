//! Peruvian Liga 1 upcoming-matches feed
//!
//! This library polls TheSportsDB for the next fixtures of a football league,
//! falls back to built-in fixtures when the service is unavailable or empty,
//! and renders a league-grouped list and a per-match detail page in a
//! teletext style.
//!
//! # Examples
//!
//! ```rust,no_run
//! use liga1_feed::config::Config;
//! use liga1_feed::error::AppError;
//! use liga1_feed::feed::{MatchFeed, RefreshResult};
//! use liga1_feed::teletext_ui::populate_matches;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let feed = MatchFeed::from_config(Config::load().await?)?;
//!
//!     // Run one fetch cycle; failures fall back to built-in fixtures
//!     if let RefreshResult::Completed(snapshot) = feed.refresh().await {
//!         let page = populate_matches(&snapshot.matches).to_page(None);
//!         let mut stdout = std::io::stdout();
//!         page.render_buffered(&mut stdout, false)?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod feed;
pub mod teletext_ui;
pub mod ui;

// Re-export commonly used types for convenience
pub use analysis::{SafeBet, safe_bet};
pub use config::Config;
pub use data_fetcher::api::{FetchOutcome, fetch_matches};
pub use data_fetcher::models::{BettingInfo, DataSource, FallbackReason, Match, MatchId, TeamStats};
pub use error::AppError;
pub use feed::{FeedSnapshot, MatchFeed, RefreshResult};
pub use teletext_ui::{MatchDetailView, MatchListView, TeletextPage, populate_matches, show_detail};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
