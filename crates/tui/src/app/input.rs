//! Keyboard handling.
//!
//! Maps a key press to at most one [`Action`] based on the current state.
//! No state is changed here; the caller feeds the action to the reducer and
//! to the side effect handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kbn_client::{CreateIndexPatternParams, TimeFieldOption};

use super::pattern;
use super::state::{WizardState, WizardStep};
use crate::action::Action;

impl WizardState {
    /// Translate a key press into an action.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.fatal_error.is_some() {
            return Some(Action::Quit);
        }

        if key.code == KeyCode::Esc && self.notice.is_some() {
            return Some(Action::DismissNotice);
        }

        match self.step {
            WizardStep::IndexPattern => self.handle_index_pattern_key(key),
            WizardStep::TimeField => self.handle_time_field_key(key),
        }
    }

    fn handle_index_pattern_key(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::Quit);
        }
        if key.code == KeyCode::Tab {
            return Some(Action::ToggleIncludeSystemIndices);
        }
        if self.is_fetching_existing_indices {
            return None;
        }
        if !self.has_indices() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Enter => Some(Action::FetchExistingIndices),
                _ => None,
            };
        }

        let len = self.query.chars().count();
        match key.code {
            KeyCode::Enter => self
                .can_go_to_time_field_step()
                .then(|| Action::GoToTimeFieldStep {
                    pattern: self.query.clone(),
                }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let (query, cursor) = pattern::insert_char(&self.query, self.cursor, c);
                Some(Action::QueryChanged { query, cursor })
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let (query, cursor) = pattern::backspace(&self.query, self.cursor);
                Some(Action::QueryChanged { query, cursor })
            }
            KeyCode::Delete if self.cursor < len => {
                let (query, cursor) = pattern::delete(&self.query, self.cursor);
                Some(Action::QueryChanged { query, cursor })
            }
            KeyCode::Left => Some(Action::MoveCursor(self.cursor.saturating_sub(1))),
            KeyCode::Right => Some(Action::MoveCursor((self.cursor + 1).min(len))),
            KeyCode::Home => Some(Action::MoveCursor(0)),
            KeyCode::End => Some(Action::MoveCursor(len)),
            _ => None,
        }
    }

    fn handle_time_field_key(&self, key: KeyEvent) -> Option<Action> {
        if self.is_creating_index_pattern {
            return None;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::GoToIndexPatternStep),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousTimeField),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextTimeField),
            KeyCode::Enter if !self.is_fetching_time_field_options => {
                let time_field = self
                    .draft
                    .time_field_option
                    .clone()
                    .unwrap_or(TimeFieldOption::NoTimeField);
                Some(Action::CreateIndexPattern(CreateIndexPatternParams {
                    id: self.draft.id.clone(),
                    name: self.draft.name.clone(),
                    time_field,
                }))
            }
            _ => None,
        }
    }
}
