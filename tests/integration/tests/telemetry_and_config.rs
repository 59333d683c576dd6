//! Telemetry and configuration smoke tests
//!
//! The global tracing subscriber can only be installed once per process,
//! so the init/double-init behavior lives in one test function.

use innkeep_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};

#[test]
fn tracing_initializes_once_then_refuses() {
    let first = try_init_tracing_with_config(TracingConfig::development());
    assert!(first.is_ok());

    let second = try_init_tracing_with_config(TracingConfig::default());
    assert!(second.is_err());
}

#[test]
fn config_defaults_without_environment() {
    // No INNKEEP_* variables are set in the test environment
    let config = AppConfig::from_env().expect("defaults always load");
    assert_eq!(config.app.name, "innkeep");
    assert_eq!(config.app.env, Environment::Development);
    assert_eq!(config.log.level, "info");
    assert!(!config.log.json);
}
