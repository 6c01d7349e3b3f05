//! Terminal wizard for creating Kibana index patterns.
//!
//! The wizard walks through two steps: pick an index pattern that matches
//! existing Elasticsearch indices, then pick the time field. On success it
//! reports the route of the new index pattern.
//!
//! # Example
//!
//! ```rust
//! use kbn_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(None, false);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Esc)) {
//!     app.update(&action);
//! }
//! assert!(app.should_quit());
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, WizardState, WizardStep};
