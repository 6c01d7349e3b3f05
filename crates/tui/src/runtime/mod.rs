//! Runtime components for the wizard.
//!
//! - Terminal management (`TerminalGuard`)
//! - Client creation
//! - Configuration loading
//! - Async side effect handlers for backend calls
//!
//! Does NOT handle:
//! - Wizard state or rendering (see `app` and `ui`).
//! - HTTP details (see `kbn_client`).

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
