use crate::config::Config;
use crate::data_fetcher::models::{DataSource, EventsResponse, FallbackReason, Match};
use crate::data_fetcher::processors::{fallback_matches, transform_events};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_next_events_url;

/// Result of one fetch cycle. Always carries a renderable collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub matches: Vec<Match>,
    pub source: DataSource,
}

impl FetchOutcome {
    pub fn live(matches: Vec<Match>) -> Self {
        Self {
            matches,
            source: DataSource::Live,
        }
    }

    pub fn fallback(reason: FallbackReason) -> Self {
        Self {
            matches: fallback_matches(),
            source: DataSource::Fallback(reason),
        }
    }
}

/// Fetches the raw upcoming-events document for the configured league.
pub async fn fetch_next_events(client: &Client, config: &Config) -> Result<EventsResponse, AppError> {
    let url = build_next_events_url(
        &config.normalized_base_url(),
        config.api_key.trim(),
        config.league_id,
    );
    fetch::<EventsResponse>(client, &url).await
}

/// Turns the raw fetch result into a renderable outcome.
///
/// Every failure family (status, transport, payload) and an empty event list
/// converge on the fallback fixtures.
pub fn resolve_outcome(result: Result<EventsResponse, AppError>) -> FetchOutcome {
    match result {
        Ok(response) => match response.into_events() {
            Some(events) => {
                let matches = transform_events(&events);
                info!("Fetched {} upcoming matches", matches.len());
                FetchOutcome::live(matches)
            }
            None => {
                warn!("No events available, using fallback matches");
                FetchOutcome::fallback(FallbackReason::NoEvents)
            }
        },
        Err(e) => {
            let reason = FallbackReason::from_error(&e);
            warn!("Fetching matches failed ({reason}): {e}. Using fallback matches");
            FetchOutcome::fallback(reason)
        }
    }
}

/// Runs one fetch cycle against the live API. Never fails.
#[instrument(skip(client, config), fields(league_id = config.league_id))]
pub async fn fetch_matches(client: &Client, config: &Config) -> FetchOutcome {
    resolve_outcome(fetch_next_events(client, config).await)
}
