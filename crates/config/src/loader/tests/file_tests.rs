//! Config file tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use serial_test::serial;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use super::{env_lock, with_kbn_env};

/// Writes a config file with basic auth and non-default wizard settings.
pub fn create_test_config_file(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    let content = r#"{
        "elasticsearch_url": "https://es.internal:9200",
        "kibana_url": "https://kibana.internal:5601",
        "username": "kibana_admin",
        "password": "file-password",
        "timeout_seconds": 45,
        "include_system_indices": true,
        "reasonable_wait_ms": 250
    }"#;
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_applied() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(temp_dir.path());

    with_kbn_env(&[], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.elasticsearch_url, "https://es.internal:9200");
        assert_eq!(config.connection.kibana_url, "https://kibana.internal:5601");
        assert_eq!(config.connection.timeout, Duration::from_secs(45));
        assert!(config.wizard.include_system_indices);
        assert_eq!(config.wizard.reasonable_wait_ms, 250);
        assert!(matches!(config.auth.strategy, AuthStrategy::Basic { .. }));
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(temp_dir.path());

    with_kbn_env(
        &[
            ("KBN_KIBANA_URL", "https://override.kibana:5601"),
            ("KBN_INCLUDE_SYSTEM_INDICES", "false"),
        ],
        || {
            let config = ConfigLoader::new()
                .with_config_path(path.clone())
                .from_file()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.kibana_url, "https://override.kibana:5601");
            assert!(!config.wizard.include_system_indices);
            assert_eq!(config.connection.elasticsearch_url, "https://es.internal:9200");
        },
    );
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let result = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("missing.json"))
        .from_file();

    assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
}

#[test]
#[serial]
fn test_unparsable_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = ConfigLoader::new().with_config_path(path).from_file();

    assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
}
