//! Request authentication.
//!
//! Elasticsearch and Kibana accept the same credentials, so one strategy is
//! applied to every request the client sends.

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

pub use kbn_config::AuthStrategy;

/// Attach credentials for `strategy` to a request.
pub(crate) fn apply_auth(builder: RequestBuilder, strategy: &AuthStrategy) -> RequestBuilder {
    match strategy {
        AuthStrategy::None => builder,
        AuthStrategy::Basic { username, password } => {
            builder.basic_auth(username, Some(password.expose_secret()))
        }
        AuthStrategy::ApiKey { key } => {
            builder.header("Authorization", format!("ApiKey {}", key.expose_secret()))
        }
    }
}
