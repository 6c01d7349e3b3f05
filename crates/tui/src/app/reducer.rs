//! State transitions.
//!
//! Responsibilities:
//! - Apply one [`Action`] to a [`WizardState`] and return the next state.
//! - Drop results that no longer match what is on screen.
//! - Classify failures as inline notices or fatal errors.
//!
//! Does NOT handle:
//! - Starting backend calls (see `runtime::side_effects`).
//! - Mapping keys to actions (see `app::input`).
//!
//! Invariants:
//! - Loading flags are reset by the matching result action, success or not.
//! - "No indices match" failures never become fatal.

use tracing::debug;

use super::state::{Notice, WizardState, WizardStep, detail_route};
use crate::action::{Action, ApiResult};

/// Inline message shown when a pattern matches no index at create time.
pub const MISSING_INDICES_MESSAGE: &str =
    "Couldn't locate any indices matching that pattern. Please add the index to Elasticsearch";

impl WizardState {
    /// Apply `action` and return the next state.
    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Tick => {
                if self.is_busy() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
            Action::Input(_) | Action::Resize(..) => {}

            Action::QueryChanged { query, cursor } => self.on_query_changed(query, *cursor),
            Action::MoveCursor(cursor) => {
                self.cursor = (*cursor).min(self.query.chars().count());
            }
            Action::ToggleIncludeSystemIndices => {
                if self.is_system_indices_toggle_visible() {
                    self.does_include_system_indices = !self.does_include_system_indices;
                    self.update_whitelisted_indices();
                }
            }
            Action::SelectNextTimeField => self.move_time_field_selection(1),
            Action::SelectPreviousTimeField => self.move_time_field_selection(-1),
            Action::GoToIndexPatternStep => {
                if self.step == WizardStep::TimeField && !self.is_creating_index_pattern {
                    self.step = WizardStep::IndexPattern;
                    self.time_field_options.clear();
                    self.selected_time_field = 0;
                    self.draft.time_field_option = None;
                    self.is_fetching_time_field_options = false;
                    self.notice = None;
                }
            }
            Action::DismissNotice => self.notice = None,

            Action::FetchExistingIndices => self.is_fetching_existing_indices = true,
            Action::GoToTimeFieldStep { pattern } => {
                if self.can_go_to_time_field_step() {
                    self.step = WizardStep::TimeField;
                    self.draft.name = pattern.clone();
                    self.draft.time_field_option = None;
                    self.time_field_options.clear();
                    self.selected_time_field = 0;
                    self.is_fetching_time_field_options = true;
                    self.notice = None;
                }
            }
            Action::CreateIndexPattern(_) => {
                self.is_creating_index_pattern = true;
                self.notice = None;
            }

            Action::ExistingIndicesLoaded(result) => {
                self.is_fetching_existing_indices = false;
                match result {
                    Ok(indices) => {
                        self.raw_all_indices = indices.clone();
                        self.update_whitelisted_indices();
                    }
                    Err(e) => self.notice = Some(Notice::error(e.to_string())),
                }
            }
            Action::MatchingIndicesLoaded { query, result } => {
                if *query != self.query {
                    debug!(
                        stale = %query,
                        current = %self.query,
                        "Dropping stale matching indices"
                    );
                    return self;
                }
                self.is_fetching_matching_indices = false;
                match result {
                    Ok(matching) => {
                        self.raw_matching_indices = matching.exact.clone();
                        self.raw_partial_matching_indices = if query.ends_with('*') {
                            Vec::new()
                        } else {
                            matching.partial.clone()
                        };
                    }
                    Err(e) => {
                        self.raw_matching_indices.clear();
                        self.raw_partial_matching_indices.clear();
                        self.notice = Some(Notice::error(e.to_string()));
                    }
                }
                self.update_whitelisted_indices();
            }
            Action::TimeFieldOptionsLoaded { pattern, result } => {
                if self.step != WizardStep::TimeField || *pattern != self.draft.name {
                    debug!(stale = %pattern, "Dropping stale time field options");
                    return self;
                }
                self.is_fetching_time_field_options = false;
                match result {
                    Ok(options) => {
                        self.time_field_options = options.clone();
                        self.selected_time_field = 0;
                        self.draft.time_field_option = options.first().cloned();
                    }
                    Err(e) if e.is_missing_indices() => {
                        self.notice = Some(Notice::warning(MISSING_INDICES_MESSAGE));
                    }
                    Err(e) => self.fatal_error = Some(e.to_string()),
                }
            }
            Action::IndexPatternCreated(result) => {
                self.is_creating_index_pattern = false;
                self.on_index_pattern_created(result);
            }
        }
        self
    }

    fn on_query_changed(&mut self, query: &str, cursor: usize) {
        if self.step != WizardStep::IndexPattern {
            return;
        }
        self.query = query.to_string();
        self.cursor = cursor.min(self.query.chars().count());

        // Matches always belong to the current query.
        self.raw_matching_indices.clear();
        self.raw_partial_matching_indices.clear();
        self.update_whitelisted_indices();
        self.is_fetching_matching_indices = self.is_query_valid();
    }

    fn move_time_field_selection(&mut self, delta: isize) {
        if self.step != WizardStep::TimeField || self.time_field_options.is_empty() {
            return;
        }
        let last = self.time_field_options.len() - 1;
        self.selected_time_field = self
            .selected_time_field
            .saturating_add_signed(delta)
            .min(last);
        self.draft.time_field_option = self.selected_time_field_option().cloned();
    }

    fn on_index_pattern_created(&mut self, result: &ApiResult<Option<String>>) {
        match result {
            Ok(Some(id)) => {
                self.navigate_to = Some(detail_route(id));
                self.draft = Default::default();
                self.should_quit = true;
            }
            Ok(None) => debug!("Create returned no id, staying in the wizard"),
            Err(e) if e.is_missing_indices() => {
                self.notice = Some(Notice::warning(MISSING_INDICES_MESSAGE));
            }
            Err(e) => self.fatal_error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MatchingIndices;
    use kbn_client::{ClientError, MatchedIndex, TimeFieldOption};
    use std::sync::Arc;

    fn indices(names: &[&str]) -> Vec<MatchedIndex> {
        names.iter().map(|n| MatchedIndex::new(*n)).collect()
    }

    fn typed(state: WizardState, query: &str) -> WizardState {
        state.reduce(&Action::QueryChanged {
            query: query.to_string(),
            cursor: query.chars().count(),
        })
    }

    fn matched(state: WizardState, query: &str, exact: &[&str], partial: &[&str]) -> WizardState {
        state.reduce(&Action::MatchingIndicesLoaded {
            query: query.to_string(),
            result: Ok(MatchingIndices {
                exact: indices(exact),
                partial: indices(partial),
            }),
        })
    }

    #[test]
    fn test_new_state_is_fetching_existing_indices() {
        let state = WizardState::new(None, false);
        assert_eq!(state.step, WizardStep::IndexPattern);
        assert!(state.is_fetching_existing_indices);
    }

    #[test]
    fn test_existing_indices_are_whitelisted() {
        let state = WizardState::new(None, false).reduce(&Action::ExistingIndicesLoaded(Ok(
            indices(&[".kibana", "logs-a", "logs-b"]),
        )));
        assert!(!state.is_fetching_existing_indices);
        assert_eq!(state.all_indices, indices(&["logs-a", "logs-b"]));
    }

    #[test]
    fn test_existing_indices_error_resets_flag() {
        let err = Arc::new(ClientError::MaxRetriesExceeded(2));
        let state = WizardState::new(None, false).reduce(&Action::ExistingIndicesLoaded(Err(err)));
        assert!(!state.is_fetching_existing_indices);
        assert!(state.notice.is_some());
        assert!(state.fatal_error.is_none());
    }

    #[test]
    fn test_toggle_rewhitelists_without_fetch() {
        let state = WizardState::new(None, false)
            .reduce(&Action::ExistingIndicesLoaded(Ok(indices(&[".kibana", "logs-a"]))));
        let state = typed(state, "*");
        let state = matched(state, "*", &[".kibana", "logs-a"], &[]);
        assert_eq!(state.matching_indices, indices(&["logs-a"]));

        let state = state.reduce(&Action::ToggleIncludeSystemIndices);
        assert!(state.does_include_system_indices);
        assert_eq!(state.all_indices, indices(&[".kibana", "logs-a"]));
        assert_eq!(state.matching_indices, indices(&[".kibana", "logs-a"]));
        assert!(!state.is_fetching_matching_indices);
    }

    #[test]
    fn test_stale_matching_results_are_dropped() {
        let state = typed(WizardState::new(None, false), "lo*");
        let state = typed(state, "log*");
        let state = matched(state, "lo*", &["logs-a"], &[]);
        assert!(state.matching_indices.is_empty());
        assert!(state.is_fetching_matching_indices);

        let state = matched(state, "log*", &["logs-b"], &[]);
        assert_eq!(state.matching_indices, indices(&["logs-b"]));
        assert!(!state.is_fetching_matching_indices);
    }

    #[test]
    fn test_partial_results_cleared_for_wildcard_query() {
        let state = typed(WizardState::new(None, false), "logs");
        let state = matched(state, "logs", &[], &["logs-a"]);
        assert_eq!(state.partial_matching_indices, indices(&["logs-a"]));

        let state = typed(state, "logs*");
        let state = matched(state, "logs*", &["logs-a"], &["ignored"]);
        assert!(state.partial_matching_indices.is_empty());
    }

    #[test]
    fn test_invalid_query_clears_matches() {
        let state = typed(WizardState::new(None, false), "logs*");
        let state = matched(state, "logs*", &["logs-a"], &[]);
        let state = typed(state, "logs *");
        assert!(state.matching_indices.is_empty());
        assert!(!state.is_fetching_matching_indices);
        assert!(!state.can_go_to_time_field_step());
    }

    #[test]
    fn test_next_step_requires_matches() {
        let state = typed(WizardState::new(None, false), "nope*");
        let state = matched(state, "nope*", &[], &[]);
        let state = state.reduce(&Action::GoToTimeFieldStep {
            pattern: "nope*".to_string(),
        });
        assert_eq!(state.step, WizardStep::IndexPattern);
    }

    #[test]
    fn test_next_step_blocked_until_new_query_matches() {
        let state = typed(WizardState::new(None, false), "logs*");
        let state = matched(state, "logs*", &["logs-a"], &[]);
        assert!(state.can_go_to_time_field_step());

        let state = typed(state, "zzz*");
        assert!(state.is_fetching_matching_indices);
        assert!(state.matching_indices.is_empty());
        assert!(!state.can_go_to_time_field_step());

        let state = state.reduce(&Action::GoToTimeFieldStep {
            pattern: "zzz*".to_string(),
        });
        assert_eq!(state.step, WizardStep::IndexPattern);
        assert_eq!(state.draft.name, "");
    }

    fn at_time_field_step() -> WizardState {
        let state = typed(WizardState::new(None, false), "logs*");
        let state = matched(state, "logs*", &["logs-a"], &[]);
        state.reduce(&Action::GoToTimeFieldStep {
            pattern: "logs*".to_string(),
        })
    }

    #[test]
    fn test_time_field_step_transitions() {
        let state = at_time_field_step();
        assert_eq!(state.step, WizardStep::TimeField);
        assert_eq!(state.draft.name, "logs*");
        assert!(state.is_fetching_time_field_options);
        assert!(!state.is_system_indices_toggle_visible());

        let state = state.reduce(&Action::ToggleIncludeSystemIndices);
        assert!(!state.does_include_system_indices);

        let state = state.reduce(&Action::GoToIndexPatternStep);
        assert_eq!(state.step, WizardStep::IndexPattern);
        assert_eq!(state.query, "logs*");
        assert!(!state.is_fetching_time_field_options);
    }

    #[test]
    fn test_time_field_options_preselect_first() {
        let state = at_time_field_step().reduce(&Action::TimeFieldOptionsLoaded {
            pattern: "logs*".to_string(),
            result: Ok(vec![
                TimeFieldOption::Field("@timestamp".to_string()),
                TimeFieldOption::NoTimeField,
            ]),
        });
        assert_eq!(
            state.draft.time_field_option,
            Some(TimeFieldOption::Field("@timestamp".to_string()))
        );

        let state = state
            .reduce(&Action::SelectNextTimeField)
            .reduce(&Action::SelectNextTimeField);
        assert_eq!(state.selected_time_field, 1);
        assert_eq!(state.draft.time_field_option, Some(TimeFieldOption::NoTimeField));

        let state = state
            .reduce(&Action::SelectPreviousTimeField)
            .reduce(&Action::SelectPreviousTimeField);
        assert_eq!(state.selected_time_field, 0);
    }

    #[test]
    fn test_time_field_missing_indices_is_recoverable() {
        let err = Arc::new(ClientError::MissingIndices("logs*".to_string()));
        let state = at_time_field_step().reduce(&Action::TimeFieldOptionsLoaded {
            pattern: "logs*".to_string(),
            result: Err(err),
        });
        assert_eq!(state.step, WizardStep::TimeField);
        assert!(state.fatal_error.is_none());
        assert!(!state.is_fetching_time_field_options);
        assert_eq!(
            state.notice.map(|n| n.message),
            Some(MISSING_INDICES_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_create_success_navigates() {
        let state = at_time_field_step()
            .reduce(&Action::IndexPatternCreated(Ok(Some("abc".to_string()))));
        assert_eq!(state.navigate_to.as_deref(), Some("/management/kibana/indices/abc"));
        assert!(state.should_quit);
        assert!(!state.is_creating_index_pattern);
        assert_eq!(state.draft, Default::default());
    }

    #[test]
    fn test_create_without_id_stays() {
        let state = at_time_field_step().reduce(&Action::IndexPatternCreated(Ok(None)));
        assert!(state.navigate_to.is_none());
        assert!(!state.should_quit);
        assert_eq!(state.step, WizardStep::TimeField);
    }

    #[test]
    fn test_create_other_error_is_fatal() {
        let err = Arc::new(ClientError::ApiError {
            status: 500,
            url: "http://localhost:5601/api/saved_objects/index-pattern".to_string(),
            message: "boom".to_string(),
            cause_type: None,
        });
        let state = at_time_field_step().reduce(&Action::IndexPatternCreated(Err(err)));
        assert!(state.fatal_error.is_some());
        assert!(!state.is_creating_index_pattern);
    }
}
