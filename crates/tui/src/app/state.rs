//! Wizard state.
//!
//! Responsibilities:
//! - Hold everything the wizard shows: step, draft, index lists, loading flags.
//! - Keep the whitelisted lists in sync with the raw query results.
//!
//! Does NOT handle:
//! - State transitions (see `app::reducer`).
//! - Rendering (see `app::view` and `ui`).
//!
//! Invariants:
//! - `all_indices`, `matching_indices` and `partial_matching_indices` are
//!   always the raw lists passed through the whitelist rule.

use kbn_client::{MatchedIndex, TimeFieldOption, whitelist_indices};

use super::pattern::validate_pattern;

/// Wizard steps. Successful creation ends the wizard; it is not a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    IndexPattern,
    TimeField,
}

/// The index pattern being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPatternDraft {
    /// Fixed id in edit mode.
    pub id: Option<String>,
    /// Pattern chosen in the first step.
    pub name: String,
    pub time_field_option: Option<TimeFieldOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Inline, recoverable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: IndexPatternDraft,

    /// Pattern text in the first step.
    pub query: String,
    /// Char offset of the cursor in `query`.
    pub cursor: usize,

    pub is_fetching_existing_indices: bool,
    pub is_fetching_matching_indices: bool,
    pub is_fetching_time_field_options: bool,
    pub is_creating_index_pattern: bool,
    pub does_include_system_indices: bool,

    pub(crate) raw_all_indices: Vec<MatchedIndex>,
    pub(crate) raw_matching_indices: Vec<MatchedIndex>,
    pub(crate) raw_partial_matching_indices: Vec<MatchedIndex>,

    pub all_indices: Vec<MatchedIndex>,
    pub matching_indices: Vec<MatchedIndex>,
    pub partial_matching_indices: Vec<MatchedIndex>,

    pub time_field_options: Vec<TimeFieldOption>,
    pub selected_time_field: usize,

    pub notice: Option<Notice>,
    /// Unrecoverable error; the wizard only offers to quit.
    pub fatal_error: Option<String>,
    /// Route to report after a successful create.
    pub navigate_to: Option<String>,
    pub should_quit: bool,

    pub spinner_frame: usize,
}

impl WizardState {
    /// Fresh wizard. `id` pins the saved object id (edit mode).
    pub fn new(id: Option<String>, include_system_indices: bool) -> Self {
        Self {
            draft: IndexPatternDraft {
                id,
                ..Default::default()
            },
            does_include_system_indices: include_system_indices,
            is_fetching_existing_indices: true,
            ..Default::default()
        }
    }

    pub(crate) fn update_whitelisted_indices(&mut self) {
        let include = self.does_include_system_indices;
        self.all_indices = whitelist_indices(&self.raw_all_indices, include);
        self.matching_indices = whitelist_indices(&self.raw_matching_indices, include);
        self.partial_matching_indices =
            whitelist_indices(&self.raw_partial_matching_indices, include);
    }

    pub fn has_indices(&self) -> bool {
        !self.all_indices.is_empty()
    }

    pub fn is_query_valid(&self) -> bool {
        validate_pattern(&self.query).is_ok()
    }

    /// "Next step" needs a valid pattern that matches at least one index.
    pub fn can_go_to_time_field_step(&self) -> bool {
        self.step == WizardStep::IndexPattern
            && self.is_query_valid()
            && !self.matching_indices.is_empty()
    }

    pub fn is_system_indices_toggle_visible(&self) -> bool {
        self.step == WizardStep::IndexPattern
    }

    pub fn selected_time_field_option(&self) -> Option<&TimeFieldOption> {
        self.time_field_options.get(self.selected_time_field)
    }

    pub fn is_busy(&self) -> bool {
        self.is_fetching_existing_indices
            || self.is_fetching_matching_indices
            || self.is_fetching_time_field_options
            || self.is_creating_index_pattern
    }
}

/// Detail route of a created index pattern.
pub fn detail_route(id: &str) -> String {
    format!("/management/kibana/indices/{id}")
}
