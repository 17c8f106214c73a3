//! Terminal event polling for the interactive UI

use super::input_handler::{KeyBindings, UiAction};
use crate::error::AppError;
use crossterm::event::{self, Event};
use std::time::Duration;

/// How long one loop iteration waits for input.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What one poll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// A bound key was pressed.
    Action(UiAction),
    /// The terminal was resized; the page must be laid out again.
    Resize,
    /// Nothing relevant happened within the poll interval.
    Continue,
}

/// Waits up to `timeout` for one terminal event and translates it.
pub fn poll_event(bindings: &KeyBindings, timeout: Duration) -> Result<EventResult, AppError> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(translate_event(bindings, event::read()?))
}

pub fn translate_event(bindings: &KeyBindings, event: Event) -> EventResult {
    match event {
        Event::Key(key_event) => match bindings.action_for(&key_event) {
            Some(action) => {
                tracing::debug!("Key {:?} -> {:?}", key_event.code, action);
                EventResult::Action(action)
            }
            None => EventResult::Continue,
        },
        Event::Resize(width, height) => {
            tracing::debug!("Terminal resized to {width}x{height}");
            EventResult::Resize
        }
        _ => EventResult::Continue,
    }
}
