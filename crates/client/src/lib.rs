//! Elasticsearch and Kibana client for the index pattern wizard.
//!
//! This crate provides a type-safe client for the handful of calls the wizard
//! needs: listing indices that match a wildcard pattern, reading field
//! capabilities, creating index-pattern saved objects, and reading or writing
//! the `defaultIndex` advanced setting.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod indices;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::KbnClient;
pub use client::builder::KbnClientBuilder;
pub use error::{ClientError, Result};
pub use indices::{is_system_index, whitelist_indices};
pub use models::{
    CreateIndexPatternParams, IndexPattern, IndexPatternAttributes, MatchedIndex, NO_TIME_FIELD,
    TimeFieldOption,
};
