//! Action protocol for async TUI event handling.
//!
//! Actions represent both user intents and the results of async backend
//! calls. Every state change goes through [`crate::app::WizardState::reduce`].
//!
//! # Action Categories
//!
//! - **System**: lifecycle and terminal events (Quit, Tick, Input, Resize)
//! - **Wizard input**: intents derived from key presses
//! - **API triggers**: actions that also start a backend call in
//!   `runtime::side_effects`
//! - **API results**: responses sent back by spawned tasks
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `app::reducer`)
//! - Async task execution (see `runtime::side_effects`)

use std::fmt;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use kbn_client::{ClientError, CreateIndexPatternParams, MatchedIndex, TimeFieldOption};

/// Result type carried by API result actions. Errors are shared so actions stay `Clone`.
pub type ApiResult<T> = Result<T, Arc<ClientError>>;

/// Exact and partial results of one pattern query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingIndices {
    /// Indices matching the query as typed.
    pub exact: Vec<MatchedIndex>,
    /// Indices matching the query with `*` appended.
    pub partial: Vec<MatchedIndex>,
}

#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    Tick,
    Input(KeyEvent),
    Resize(u16, u16),

    // Wizard input
    /// The pattern text changed. `cursor` is a char offset into `query`.
    QueryChanged { query: String, cursor: usize },
    MoveCursor(usize),
    ToggleIncludeSystemIndices,
    SelectNextTimeField,
    SelectPreviousTimeField,
    GoToIndexPatternStep,
    DismissNotice,

    // API triggers
    FetchExistingIndices,
    GoToTimeFieldStep { pattern: String },
    CreateIndexPattern(CreateIndexPatternParams),

    // API results
    ExistingIndicesLoaded(ApiResult<Vec<MatchedIndex>>),
    MatchingIndicesLoaded {
        query: String,
        result: ApiResult<MatchingIndices>,
    },
    TimeFieldOptionsLoaded {
        pattern: String,
        result: ApiResult<Vec<TimeFieldOption>>,
    },
    IndexPatternCreated(ApiResult<Option<String>>),
}

impl Action {
    /// Short name for logging, without payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Tick => "Tick",
            Self::Input(_) => "Input",
            Self::Resize(..) => "Resize",
            Self::QueryChanged { .. } => "QueryChanged",
            Self::MoveCursor(_) => "MoveCursor",
            Self::ToggleIncludeSystemIndices => "ToggleIncludeSystemIndices",
            Self::SelectNextTimeField => "SelectNextTimeField",
            Self::SelectPreviousTimeField => "SelectPreviousTimeField",
            Self::GoToIndexPatternStep => "GoToIndexPatternStep",
            Self::DismissNotice => "DismissNotice",
            Self::FetchExistingIndices => "FetchExistingIndices",
            Self::GoToTimeFieldStep { .. } => "GoToTimeFieldStep",
            Self::CreateIndexPattern(_) => "CreateIndexPattern",
            Self::ExistingIndicesLoaded(_) => "ExistingIndicesLoaded",
            Self::MatchingIndicesLoaded { .. } => "MatchingIndicesLoaded",
            Self::TimeFieldOptionsLoaded { .. } => "TimeFieldOptionsLoaded",
            Self::IndexPatternCreated(_) => "IndexPatternCreated",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
