use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (run once and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_command(args)
}

/// True when the run only reads or updates the configuration file.
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Peruvian Liga 1 upcoming matches in a teletext-style terminal view
///
/// Lists the next fixtures of the league grouped by competition, with a
/// detail page per match showing team statistics, betting notes and a
/// "safe bet" line. When TheSportsDB is unavailable or has no fixtures,
/// built-in sample fixtures are shown instead.
///
/// In interactive mode (default):
/// - Use ↑/↓ or k/j to select a match
/// - Press Enter to open the detail page, Esc/Backspace/b to go back
/// - Press 'r' to refresh data (10s cooldown between refreshes)
/// - Press 'q' to quit
///
/// Data refreshes automatically every minute (see --interval).
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch once, print the match list and exit.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// With --once, print the detail page of the N-th match in list order (starting at 1).
    #[arg(long = "detail", value_name = "N", requires = "once", help_heading = "Display Options")]
    pub detail: Option<usize>,

    /// Plain text output without colours.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// TheSportsDB league id for this run (default: configured value, 4391 for Liga 1).
    #[arg(long = "league-id", value_name = "ID", help_heading = "Display Options")]
    pub league_id: Option<u32>,

    /// Seconds between automatic refreshes for this run (minimum 5).
    #[arg(long = "interval", value_name = "SECONDS", help_heading = "Display Options")]
    pub interval: Option<u64>,

    /// Update the API base URL in config.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode, which keeps the normal screen and prints each page
    /// below the previous one. Logs are written to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}
