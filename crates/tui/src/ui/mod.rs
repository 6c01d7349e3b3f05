//! UI rendering for the wizard.
//!
//! Rendering reads only the [`crate::app::WizardView`] view model; it never
//! touches the wizard state directly.

mod render;
pub mod theme;

pub use render::render;
pub use theme::Theme;
