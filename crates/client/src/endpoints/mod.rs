//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, a base URL and the auth
//! strategy explicitly, so they can be tested against a mock server without
//! building a full [`crate::KbnClient`].

mod field_caps;
mod request;
mod saved_objects;
mod search;
mod settings;
pub mod url_encoding;

pub use field_caps::get_field_caps;
pub use request::send_request_with_retry;
pub use saved_objects::{create_index_pattern_object, get_index_pattern_object};
pub use search::search_indices;
pub use settings::{get_settings, set_setting};
pub use url_encoding::{encode_index_pattern, encode_path_segment};

/// Header Kibana requires on every mutating API request.
pub const KBN_XSRF_HEADER: &str = "kbn-xsrf";
