//! Application state and logic for the index pattern wizard.
//!
//! Responsibilities:
//! - Own the [`WizardState`] and route actions and key presses through it.
//! - Render the current state into a ratatui frame.
//!
//! Does NOT handle:
//! - Backend calls (see `runtime::side_effects`).
//! - Terminal setup (see `runtime::terminal`).
//!
//! Submodules:
//! - `pattern`: pattern validation and text editing rules.
//! - `state`: the wizard state and its derived queries.
//! - `reducer`: `WizardState::reduce`, the only place state changes.
//! - `input`: `WizardState::handle_key`.
//! - `view`: pure view model consumed by `ui`.

pub mod input;
pub mod pattern;
pub mod reducer;
pub mod state;
pub mod view;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::action::Action;

pub use pattern::{PatternError, validate_pattern};
pub use reducer::MISSING_INDICES_MESSAGE;
pub use state::{IndexPatternDraft, Notice, NoticeLevel, WizardState, WizardStep, detail_route};
pub use view::{WizardBody, WizardView, view_model};

/// The wizard application.
#[derive(Debug, Default)]
pub struct App {
    pub state: WizardState,
}

impl App {
    /// Create the app. `id` pins the saved object id of the new pattern.
    pub fn new(id: Option<String>, include_system_indices: bool) -> Self {
        Self {
            state: WizardState::new(id, include_system_indices),
        }
    }

    /// Apply an action to the state.
    pub fn update(&mut self, action: &Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Map a key press to an action, if any.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        self.state.handle_key(key)
    }

    pub fn render(&self, f: &mut Frame) {
        crate::ui::render(f, &view_model(&self.state));
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Route of the created index pattern, once creation succeeded.
    pub fn navigate_to(&self) -> Option<&str> {
        self.state.navigate_to.as_deref()
    }
}
