//! Interactive UI module for the liga1_feed application
//!
//! This module is organized into focused submodules:
//! - `view_state`: Which page is shown and which snapshot it renders
//! - `input_handler`: Key bindings
//! - `event_handler`: Terminal event polling
//! - `refresh_manager`: Manual refresh cooldown
//! - `terminal_manager`: Raw mode and alternate screen
//! - `core`: Main interactive UI loop

mod core;
mod event_handler;
pub mod input_handler;
mod refresh_manager;
mod terminal_manager;
pub mod view_state;

pub use self::core::run_interactive_ui;
pub use input_handler::{KeyBindings, UiAction};
pub use view_state::{ViewMode, ViewState};
