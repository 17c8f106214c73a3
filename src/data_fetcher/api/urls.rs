//! URL building utilities for API endpoints

/// Builds the URL of the upcoming-events endpoint for one league.
///
/// # Arguments
/// * `api_base_url` - The API base URL without trailing slash
/// * `api_key` - The API key path segment
/// * `league_id` - The league identifier
///
/// # Example
/// ```
/// use liga1_feed::data_fetcher::api::build_next_events_url;
///
/// let url = build_next_events_url("https://www.thesportsdb.com/api/v1/json", "1", 4391);
/// assert_eq!(
///     url,
///     "https://www.thesportsdb.com/api/v1/json/1/eventsnextleague.php?id=4391"
/// );
/// ```
pub fn build_next_events_url(api_base_url: &str, api_key: &str, league_id: u32) -> String {
    format!("{api_base_url}/{api_key}/eventsnextleague.php?id={league_id}")
}
