//! Main loop of the interactive UI.

use super::event_handler::{EventResult, POLL_INTERVAL, poll_event};
use super::input_handler::{KeyBindings, UiAction};
use super::refresh_manager::ManualRefresh;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use super::view_state::ViewState;
use crate::constants::refresh::MANUAL_COOLDOWN_SECONDS;
use crate::error::AppError;
use crate::feed::{MatchFeed, spawn_refresh, spawn_refresh_loop};
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Runs the interactive UI until the user quits.
///
/// Refresh cycles run on their own tasks: one immediately, then every
/// configured interval. The loop picks up each committed snapshot by
/// watching the feed's generation.
pub async fn run_interactive_ui(
    feed: Arc<MatchFeed>,
    plain: bool,
    debug_mode: bool,
) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig { debug_mode });
    let mut stdout = terminal.setup_terminal()?;

    let period = Duration::from_secs(feed.config().refresh_interval_seconds);
    tracing::info!(
        "Starting interactive UI, refreshing every {}s",
        period.as_secs()
    );
    let refresh_loop = spawn_refresh_loop(Arc::clone(&feed), period);

    let result = event_loop(&feed, &mut stdout, plain, debug_mode).await;

    refresh_loop.abort();
    terminal.cleanup_terminal(stdout)?;
    result
}

async fn event_loop(
    feed: &Arc<MatchFeed>,
    stdout: &mut Stdout,
    plain: bool,
    debug_mode: bool,
) -> Result<(), AppError> {
    let bindings = KeyBindings::default();
    let mut state = ViewState::new();
    let mut manual_refresh = ManualRefresh::new(Duration::from_secs(MANUAL_COOLDOWN_SECONDS));
    let mut seen_generation = 0;
    let mut was_refreshing = false;
    let mut needs_render = true;

    loop {
        let generation = feed.generation();
        if generation != seen_generation {
            if let Some(snapshot) = feed.snapshot().await {
                tracing::debug!(
                    "Observed snapshot generation {} ({} matches)",
                    snapshot.generation,
                    snapshot.matches.len()
                );
                needs_render |= state.adopt_snapshot(snapshot);
            }
            seen_generation = generation;
        }

        let refreshing = feed.is_refreshing();
        if refreshing != was_refreshing {
            was_refreshing = refreshing;
            needs_render = true;
        }

        if needs_render {
            // Debug mode prints pages one after another on the normal screen
            let mut page = if debug_mode {
                state.build_page()
            } else {
                state.build_page().for_terminal()
            };
            page.set_refreshing(refreshing);
            state.clamp_scroll(page.max_scroll());
            page.render_buffered(stdout, plain)?;
            needs_render = false;
        }

        match poll_event(&bindings, POLL_INTERVAL)? {
            EventResult::Action(UiAction::Quit) => {
                tracing::info!("Quit requested");
                break;
            }
            EventResult::Action(UiAction::Refresh) => {
                if manual_refresh.try_trigger(Instant::now()) {
                    tracing::info!("Manual refresh requested");
                    spawn_refresh(Arc::clone(feed));
                }
            }
            EventResult::Action(action) => {
                needs_render |= state.apply(action);
            }
            EventResult::Resize => needs_render = true,
            EventResult::Continue => {}
        }
    }

    Ok(())
}
