//! Unit tests for configuration validation

use medialive_model::config::{Config, ConfigBuilder, LogFormat, MAX_DOCUMENT_BYTES_LIMIT, WireFormat};
use medialive_model::error::ConfigError;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.wire_format, WireFormat::Json);
    assert!(!config.pretty);
    assert_eq!(config.max_document_bytes, 4 * 1024 * 1024);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_sets_every_field() {
    let config = ConfigBuilder::new()
        .wire_format(WireFormat::Yaml)
        .pretty(true)
        .max_document_bytes(1024)
        .log_format(LogFormat::Json)
        .build()
        .unwrap();

    assert_eq!(config.wire_format, WireFormat::Yaml);
    assert!(config.pretty);
    assert_eq!(config.max_document_bytes, 1024);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_zero_document_limit_rejected() {
    let result = ConfigBuilder::new().max_document_bytes(0).build();

    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn test_document_limit_upper_bound() {
    assert!(
        ConfigBuilder::new()
            .max_document_bytes(MAX_DOCUMENT_BYTES_LIMIT)
            .build()
            .is_ok()
    );

    let result = ConfigBuilder::new()
        .max_document_bytes(MAX_DOCUMENT_BYTES_LIMIT + 1)
        .build();
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn test_wire_format_parsing() {
    assert_eq!("json".parse::<WireFormat>().unwrap(), WireFormat::Json);
    assert_eq!("YAML".parse::<WireFormat>().unwrap(), WireFormat::Yaml);
    assert_eq!("yml".parse::<WireFormat>().unwrap(), WireFormat::Yaml);
    assert!(matches!(
        "xml".parse::<WireFormat>(),
        Err(ConfigError::InvalidValue(_))
    ));
    assert_eq!(WireFormat::Yaml.to_string(), "yaml");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("pretty".parse::<LogFormat>().is_err());
}
