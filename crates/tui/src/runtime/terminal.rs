//! Terminal setup and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen on startup.
//! - Restore the terminal on exit, including during panics, via Drop.
//!
//! Invariants:
//! - The guard is created right after setup and lives for the whole session.
//! - Drop must not panic.

use std::io::Stdout;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type WizardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Switch the terminal into raw mode and the alternate screen.
    ///
    /// Returns the guard together with the ratatui terminal. Keep the guard
    /// alive until the terminal is no longer needed.
    pub fn setup() -> Result<(Self, WizardTerminal)> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        // From here on the guard undoes raw mode even if the next calls fail.
        let guard = Self { _private: () };
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
    }
}
