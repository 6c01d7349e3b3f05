//! View model: a pure function from [`WizardState`] to what the screen shows.

use kbn_client::MatchedIndex;

use super::pattern::validate_pattern;
use super::state::{Notice, WizardState, WizardStep};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub title: String,
    pub step_label: &'static str,
    pub body: WizardBody,
    /// `Some(included)` when the system index toggle is shown.
    pub system_indices_toggle: Option<bool>,
    pub notice: Option<Notice>,
    pub footer_hints: Vec<(&'static str, &'static str)>,
    /// Current frame of the busy indicator.
    pub spinner: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardBody {
    Loading {
        message: String,
    },
    NoData,
    IndexPattern {
        query: String,
        cursor: usize,
        validation_error: Option<String>,
        status: String,
        indices: Vec<String>,
        is_fetching: bool,
        can_go_next: bool,
    },
    TimeField {
        pattern: String,
        options: Vec<String>,
        selected: usize,
        is_loading: bool,
        is_creating: bool,
    },
    Fatal {
        message: String,
    },
}

fn spinner(state: &WizardState) -> &'static str {
    SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()]
}

fn pluralize(count: usize) -> String {
    if count == 1 {
        "1 index".to_string()
    } else {
        format!("{count} indices")
    }
}

/// Status line above the index list, and the list it describes.
fn matched_summary(state: &WizardState) -> (String, Vec<String>) {
    let names = |list: &[MatchedIndex]| -> Vec<String> {
        list.iter().map(|i| i.name.clone()).collect()
    };
    let all = state.all_indices.len();

    if state.query.is_empty() {
        return (
            format!("Your index pattern can match any of your {}, below.", pluralize(all)),
            names(&state.all_indices),
        );
    }
    if !state.matching_indices.is_empty() {
        return (
            format!(
                "Success! Your index pattern matches {}.",
                pluralize(state.matching_indices.len())
            ),
            names(&state.matching_indices),
        );
    }
    if !state.partial_matching_indices.is_empty() {
        return (
            format!(
                "Your index pattern doesn't match any indices, but you have {} which look{} similar.",
                pluralize(state.partial_matching_indices.len()),
                if state.partial_matching_indices.len() == 1 { "s" } else { "" }
            ),
            names(&state.partial_matching_indices),
        );
    }
    (
        format!(
            "The index pattern you've entered doesn't match any indices. You can match any of your {}, below.",
            pluralize(all)
        ),
        names(&state.all_indices),
    )
}

/// Build the view for `state`.
pub fn view_model(state: &WizardState) -> WizardView {
    let title = match &state.draft.id {
        Some(id) => format!("Create index pattern ({id})"),
        None => "Create index pattern".to_string(),
    };

    if let Some(message) = &state.fatal_error {
        return WizardView {
            title,
            step_label: "Error",
            body: WizardBody::Fatal {
                message: message.clone(),
            },
            system_indices_toggle: None,
            notice: None,
            footer_hints: vec![("any key", "Quit")],
            spinner: spinner(state),
        };
    }

    let system_indices_toggle = state
        .is_system_indices_toggle_visible()
        .then_some(state.does_include_system_indices);

    let (step_label, body, footer_hints) = match state.step {
        WizardStep::IndexPattern => index_pattern_body(state),
        WizardStep::TimeField => time_field_body(state),
    };

    WizardView {
        title,
        step_label,
        body,
        system_indices_toggle,
        notice: state.notice.clone(),
        footer_hints,
        spinner: spinner(state),
    }
}

type StepParts = (&'static str, WizardBody, Vec<(&'static str, &'static str)>);

fn index_pattern_body(state: &WizardState) -> StepParts {
    let step_label = "Step 1 of 2: Define index pattern";

    if state.is_fetching_existing_indices {
        let body = WizardBody::Loading {
            message: format!("{} Checking for Elasticsearch data", spinner(state)),
        };
        return (step_label, body, vec![("Esc", "Quit")]);
    }

    if !state.has_indices() {
        let hints = vec![("r", "Check for new data"), ("Tab", "System indices"), ("Esc", "Quit")];
        return (step_label, WizardBody::NoData, hints);
    }

    let validation_error = match validate_pattern(&state.query) {
        Err(e) if !state.query.is_empty() => Some(e.to_string()),
        _ => None,
    };
    let (status, indices) = matched_summary(state);
    let can_go_next = state.can_go_to_time_field_step();

    let mut hints = vec![("Tab", "System indices"), ("Esc", "Quit")];
    if can_go_next {
        hints.insert(0, ("Enter", "Next step"));
    }

    let body = WizardBody::IndexPattern {
        query: state.query.clone(),
        cursor: state.cursor,
        validation_error,
        status,
        indices,
        is_fetching: state.is_fetching_matching_indices,
        can_go_next,
    };
    (step_label, body, hints)
}

fn time_field_body(state: &WizardState) -> StepParts {
    let step_label = "Step 2 of 2: Configure settings";

    let body = WizardBody::TimeField {
        pattern: state.draft.name.clone(),
        options: state
            .time_field_options
            .iter()
            .map(ToString::to_string)
            .collect(),
        selected: state.selected_time_field,
        is_loading: state.is_fetching_time_field_options,
        is_creating: state.is_creating_index_pattern,
    };

    let hints = if state.is_creating_index_pattern {
        vec![("Ctrl+C", "Quit")]
    } else {
        vec![
            ("↑/↓", "Select time field"),
            ("Enter", "Create index pattern"),
            ("Esc", "Back"),
        ]
    };
    (step_label, body, hints)
}
