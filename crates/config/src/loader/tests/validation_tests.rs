//! Validation tests for `ConfigLoader::build`.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

#[test]
fn test_rejects_non_http_scheme() {
    let err = ConfigLoader::new()
        .with_elasticsearch_url("ftp://es.example.com".to_string())
        .build()
        .unwrap_err();

    match err {
        ConfigError::InvalidValue { var, message } => {
            assert_eq!(var, "elasticsearch_url");
            assert!(message.contains("ftp"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_rejects_relative_url() {
    let err = ConfigLoader::new()
        .with_kibana_url("kibana.local".to_string())
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "kibana_url"));
}

#[test]
fn test_blank_url_is_missing() {
    let err = ConfigLoader::new()
        .with_kibana_url("   ".to_string())
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::MissingUrl { .. }));
}

#[test]
fn test_trailing_slashes_are_stripped() {
    let config = ConfigLoader::new()
        .with_kibana_url("https://kibana.example.com/base//".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.kibana_url, "https://kibana.example.com/base");
}

#[test]
fn test_username_without_password_is_error() {
    let err = ConfigLoader::new()
        .with_username("elastic".to_string())
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::IncompleteAuth(_)));
}

#[test]
fn test_zero_timeout_is_error() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_timeout_above_maximum_is_error() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(3601))
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_max_retries_above_bound_is_error() {
    let err = ConfigLoader::new().with_max_retries(11).build().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidMaxRetries { .. }));
}

#[test]
fn test_reasonable_wait_above_bound_is_error() {
    let err = ConfigLoader::new()
        .with_reasonable_wait_ms(60_000)
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidReasonableWait { .. }));
}
