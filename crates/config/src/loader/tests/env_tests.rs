//! Environment variable tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::{env_lock, with_op5_env};

#[test]
#[serial]
fn test_env_provides_complete_config() {
    let _lock = env_lock().lock().unwrap();

    with_op5_env(
        &[
            ("OP5_BASE_URL", "https://op5.example.com/api/"),
            ("OP5_USERNAME", "monitor"),
            ("OP5_PASSWORD", "hunter2"),
            ("OP5_MAX_RETRIES", "5"),
            ("OP5_RETRY_WAIT", "2"),
            ("OP5_DRY_RUN", "true"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.base_url, "https://op5.example.com/api");
            assert_eq!(config.auth.username, "monitor");
            assert_eq!(config.auth.password.expose_secret(), "hunter2");
            assert_eq!(config.connection.max_retries, 5);
            assert_eq!(config.connection.retry_wait, Duration::from_secs(2));
            assert!(config.connection.dry_run);
            assert!(!config.connection.debug);
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    with_op5_env(
        &[
            ("OP5_BASE_URL", "https://op5.example.com/api"),
            ("OP5_USERNAME", "   "),
            ("OP5_PASSWORD", ""),
        ],
        || {
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingAuth)));
        },
    );
}

#[test]
#[serial]
fn test_invalid_numeric_env_var_names_variable() {
    let _lock = env_lock().lock().unwrap();

    with_op5_env(&[("OP5_RETRY_WAIT", "soon")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, "OP5_RETRY_WAIT"),
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_bool_env_var() {
    let _lock = env_lock().lock().unwrap();

    with_op5_env(&[("OP5_SKIP_VERIFY", "maybe")], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    with_op5_env(
        &[
            ("OP5_BASE_URL", "https://env.example.com/api"),
            ("OP5_USERNAME", "env-user"),
            ("OP5_PASSWORD", "env-pass"),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.example.com/api".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.example.com/api");
            assert_eq!(config.auth.username, "env-user");
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("OP5_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("OP5_TEST_TRIM").as_deref(), Some("value"));
    });
    temp_env::with_var("OP5_TEST_TRIM", Some(" \t "), || {
        assert_eq!(env_var_or_none("OP5_TEST_TRIM"), None);
    });
}
