pub mod interactive;

pub use interactive::{KeyBindings, UiAction, ViewMode, ViewState, run_interactive_ui};
