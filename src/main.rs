// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use liga1_feed::config::Config;
use liga1_feed::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if cli::is_config_command(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let config = commands::apply_arg_overrides(Config::load().await?, &args)?;
    tracing::info!(
        "Using league {} from {}",
        config.league_id,
        config.normalized_base_url()
    );

    if cli::is_noninteractive_mode(&args) {
        commands::handle_once_command(&args, config).await
    } else {
        app::run_interactive(&args, config).await
    }
}
