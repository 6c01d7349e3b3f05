//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - One mock server plays both Elasticsearch and Kibana; their paths never overlap
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use kbn_client::testing::load_fixture;

#[allow(unused_imports)]
pub use kbn_client::{ClientError, KbnClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at `server` for both backends, with a single retry.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> KbnClient {
    KbnClient::builder()
        .elasticsearch_url(server.uri())
        .kibana_url(server.uri())
        .max_retries(1)
        .build()
        .expect("client should build")
}
