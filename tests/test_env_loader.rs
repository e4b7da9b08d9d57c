//! Unit tests for environment variable configuration loading

use medialive_model::config::{Config, ConfigBuilder, ConfigLoader, LogFormat, WireFormat};
use std::sync::Mutex;

// Environment variables are process-wide, so parallel tests can interfere with each other
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: &[&str] = &[
    "MEDIALIVE_WIRE_FORMAT",
    "MEDIALIVE_PRETTY",
    "MEDIALIVE_MAX_DOCUMENT_BYTES",
    "MEDIALIVE_LOG_FORMAT",
];

fn clear_medialive_env_vars() {
    for var in ENV_VARS {
        // SAFETY: every test touching the environment holds ENV_MUTEX.
        unsafe { std::env::remove_var(var) };
    }
}

fn set_env(var: &str, value: &str) {
    // SAFETY: every test touching the environment holds ENV_MUTEX.
    unsafe { std::env::set_var(var, value) };
}

#[test]
fn test_load_from_env_with_all_vars() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_medialive_env_vars();

    set_env("MEDIALIVE_WIRE_FORMAT", "yaml");
    set_env("MEDIALIVE_PRETTY", "true");
    set_env("MEDIALIVE_MAX_DOCUMENT_BYTES", "65536");
    set_env("MEDIALIVE_LOG_FORMAT", "json");

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config.wire_format, WireFormat::Yaml);
    assert!(config.pretty);
    assert_eq!(config.max_document_bytes, 65536);
    assert_eq!(config.log_format, LogFormat::Json);

    clear_medialive_env_vars();
}

#[test]
fn test_load_from_env_with_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_medialive_env_vars();

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_env_with_invalid_values() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_medialive_env_vars();

    // Unparsable values are ignored
    set_env("MEDIALIVE_WIRE_FORMAT", "xml");
    set_env("MEDIALIVE_PRETTY", "sometimes");
    set_env("MEDIALIVE_MAX_DOCUMENT_BYTES", "lots");

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config.wire_format, WireFormat::Json);
    assert!(!config.pretty);
    assert_eq!(config.max_document_bytes, 4 * 1024 * 1024);

    clear_medialive_env_vars();
}

#[test]
fn test_load_from_env_rejects_invalid_limit() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_medialive_env_vars();

    set_env("MEDIALIVE_MAX_DOCUMENT_BYTES", "0");

    assert!(ConfigLoader::from_env().is_err());

    clear_medialive_env_vars();
}

#[test]
fn test_load_prefers_provided_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_medialive_env_vars();

    set_env("MEDIALIVE_WIRE_FORMAT", "yaml");

    let provided = ConfigBuilder::new()
        .wire_format(WireFormat::Json)
        .pretty(true)
        .build()
        .unwrap();
    let config = ConfigLoader::load(Some(provided.clone())).unwrap();
    assert_eq!(config, provided);

    let config = ConfigLoader::load(None).unwrap();
    assert_eq!(config.wire_format, WireFormat::Yaml);

    clear_medialive_env_vars();
}
