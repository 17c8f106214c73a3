use crate::cli::Args;
use liga1_feed::config::Config;
use liga1_feed::error::AppError;
use liga1_feed::feed::MatchFeed;
use liga1_feed::ui;
use std::sync::Arc;

/// Run the interactive application flow.
///
/// - Builds the match feed from the effective configuration
/// - Runs the interactive UI, which owns terminal setup and cleanup
pub async fn run_interactive(args: &Args, config: Config) -> Result<(), AppError> {
    let feed = Arc::new(MatchFeed::from_config(config)?);
    ui::run_interactive_ui(feed, args.plain, args.debug).await
}
