//! Terminal management for interactive UI
//!
//! This module handles all terminal setup and cleanup operations including:
//! - Raw mode enabling/disabling
//! - Alternate screen management
//! - Window title

use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

pub const WINDOW_TITLE: &str = "Liga 1 - Próximos partidos";

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    /// Keeps the normal screen and cooked mode so log output stays readable.
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
#[derive(Debug, Default)]
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();

        if !self.config.debug_mode {
            // Enable raw mode for immediate key processing
            enable_raw_mode()?;

            // Enter alternate screen to preserve terminal content
            execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
        }

        Ok(stdout)
    }

    /// Cleanup terminal after interactive mode
    /// Restores terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            // Disable raw mode to restore normal terminal behavior
            disable_raw_mode()?;

            // Leave alternate screen to restore original content
            execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}
