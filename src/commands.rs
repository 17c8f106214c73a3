use crate::cli::Args;
use liga1_feed::config::Config;
use liga1_feed::constants::refresh::MIN_INTERVAL_SECONDS;
use liga1_feed::error::AppError;
use liga1_feed::feed::{FeedSnapshot, MatchFeed, RefreshResult};
use liga1_feed::teletext_ui::{TeletextPage, populate_matches, show_detail};
use std::io::stdout;
use std::path::Path;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible or out-of-range arguments are used.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.detail == Some(0) {
        return Err(AppError::config_error(
            "--detail counts matches from 1 in list order",
        ));
    }
    if let Some(interval) = args.interval
        && interval < MIN_INTERVAL_SECONDS
    {
        return Err(AppError::config_error(format!(
            "--interval must be at least {MIN_INTERVAL_SECONDS} seconds"
        )));
    }
    if args.league_id == Some(0) {
        return Err(AppError::config_error("--league-id must not be 0"));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Applies per-run overrides from the command line on top of the loaded config.
pub fn apply_arg_overrides(mut config: Config, args: &Args) -> Result<Config, AppError> {
    if let Some(league_id) = args.league_id {
        config.league_id = league_id;
    }
    if let Some(interval) = args.interval {
        config.refresh_interval_seconds = interval;
    }
    config.validate()?;
    Ok(config)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-url, --set-log-file, --clear-log-file).
///
/// Starts from the saved file (not environment overrides), so only the
/// requested fields change.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    let config = update_config(config, args)?;
    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the configuration-update flags and validates the result.
pub fn update_config(mut config: Config, args: &Args) -> Result<Config, AppError> {
    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    Ok(config)
}

/// Builds the page `--once` prints: the list, or the detail page of the
/// `detail`-th card (1-based, list order).
pub fn build_once_page(snapshot: &FeedSnapshot, detail: Option<usize>) -> Result<TeletextPage, AppError> {
    let list = populate_matches(&snapshot.matches);

    let Some(number) = detail else {
        return Ok(list.to_page(None));
    };

    let entry = number
        .checked_sub(1)
        .and_then(|index| list.entry_at(index))
        .ok_or_else(|| {
            AppError::config_error(format!(
                "No match number {number}; the list has {} matches",
                list.len()
            ))
        })?;

    show_detail(snapshot, entry.id)
        .map(|view| view.to_page())
        .ok_or_else(|| AppError::config_error(format!("Match {} not found", entry.id)))
}

/// Handles the --once command (quick view mode).
///
/// Runs a single fetch cycle, prints the list or detail page and exits.
pub async fn handle_once_command(args: &Args, config: Config) -> Result<(), AppError> {
    let feed = MatchFeed::from_config(config)?;

    let snapshot = match feed.refresh().await {
        RefreshResult::Completed(snapshot) => snapshot,
        RefreshResult::Skipped => {
            return Err(AppError::config_error("Refresh unexpectedly skipped"));
        }
    };
    tracing::info!(
        "Showing {} matches ({:?})",
        snapshot.matches.len(),
        snapshot.source
    );

    let mut page = build_once_page(&snapshot, args.detail)?;
    page.set_updated_at(snapshot.fetched_at);
    page.render_buffered(&mut stdout(), args.plain)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use liga1_feed::data_fetcher::models::ApiEvent;
    use liga1_feed::data_fetcher::processors::transform_events;
    use liga1_feed::data_fetcher::{DataSource, FallbackReason, fallback_matches};
    use liga1_feed::teletext_ui::PageRow;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    fn fallback_snapshot() -> FeedSnapshot {
        FeedSnapshot::new(
            1,
            fallback_matches(),
            DataSource::Fallback(FallbackReason::NoEvents),
        )
    }

    #[test]
    fn test_validate_args() {
        assert!(validate_args(&args(&["liga1_feed"])).is_ok());
        assert!(validate_args(&args(&["liga1_feed", "-o", "--detail", "0"])).is_err());
        assert!(validate_args(&args(&["liga1_feed", "--interval", "1"])).is_err());
        assert!(validate_args(&args(&["liga1_feed", "--interval", "5"])).is_ok());
        assert!(validate_args(&args(&["liga1_feed", "--league-id", "0"])).is_err());
        assert!(
            validate_args(&args(&[
                "liga1_feed",
                "--set-log-file",
                "/tmp/x.log",
                "--clear-log-file"
            ]))
            .is_err()
        );
    }

    #[test]
    fn test_apply_arg_overrides() {
        let config = apply_arg_overrides(
            Config::default(),
            &args(&["liga1_feed", "--league-id", "4328", "--interval", "120"]),
        )
        .unwrap();
        assert_eq!(config.league_id, 4328);
        assert_eq!(config.refresh_interval_seconds, 120);
        assert_eq!(config.api_key, Config::default().api_key);
    }

    #[test]
    fn test_update_config() {
        let config = update_config(
            Config::default(),
            &args(&["liga1_feed", "--set-api-url", "sports.example.com/api"]),
        )
        .unwrap();
        assert_eq!(config.normalized_base_url(), "https://sports.example.com/api");

        let mut with_log = Config::default();
        with_log.log_file_path = Some("/tmp/liga1.log".to_string());
        let cleared = update_config(with_log, &args(&["liga1_feed", "--clear-log-file"])).unwrap();
        assert_eq!(cleared.log_file_path, None);
    }

    #[test]
    fn test_once_list_page() {
        let page = build_once_page(&fallback_snapshot(), None).unwrap();
        let text = page.to_plain_lines().join("\n");
        assert!(text.contains("Universitario vs. Sporting Cristal"));
        assert!(text.contains("Alianza Lima vs. Melgar"));
    }

    #[test]
    fn test_once_detail_page_is_one_based() {
        let page = build_once_page(&fallback_snapshot(), Some(2)).unwrap();
        assert_eq!(page.subheader(), "ALIANZA LIMA VS. MELGAR");
        assert!(page.rows().contains(&PageRow::Label {
            label: "Ganador Seguro".to_string(),
            value: "Empate".to_string(),
        }));
    }

    #[test]
    fn test_once_detail_out_of_range() {
        assert!(build_once_page(&fallback_snapshot(), Some(3)).is_err());
        assert!(build_once_page(&fallback_snapshot(), Some(0)).is_err());
    }

    #[test]
    fn test_once_detail_of_repeated_placeholder_fixture() {
        let events = [
            ApiEvent {
                str_event: Some("Primer partido".to_string()),
                ..ApiEvent::default()
            },
            ApiEvent {
                str_event: Some("Segundo partido".to_string()),
                ..ApiEvent::default()
            },
        ];
        let snapshot = FeedSnapshot::new(1, transform_events(&events), DataSource::Live);

        let page = build_once_page(&snapshot, Some(2)).unwrap();
        assert!(page.rows().contains(&PageRow::Text(
            "Análisis en vivo: Segundo partido. Se espera un encuentro competitivo.".to_string()
        )));
    }
}
