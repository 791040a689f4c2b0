//! Loading configuration from files on disk.

use std::io::Write;

use tempfile::{Builder, NamedTempFile};
use trellis_config::{ConfigError, ConfigLoader, LogFormat, TrellisConfig};

fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_toml_file() {
    let file = config_file(
        ".toml",
        r#"
        [router]
        reject_duplicates = true

        [logging]
        level = "debug"
        format = "pretty"
        "#,
    );

    let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

    assert!(config.router.reject_duplicates);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn loads_json_file() {
    let file = config_file(".json", r#"{"router": {"reject_duplicates": true}}"#);

    let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

    assert!(config.router.reject_duplicates);
    assert_eq!(config.logging, TrellisConfig::default().logging);
}

#[test]
fn optional_file_is_loaded_when_present() {
    let file = config_file(".toml", "[logging]\nenabled = false\n");

    let config = ConfigLoader::new()
        .with_optional_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    assert!(!config.logging.enabled);
}

#[test]
fn unknown_extension_is_rejected() {
    let file = config_file(".yaml", "router:\n  reject_duplicates: true\n");

    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn missing_extension_is_rejected() {
    let file = config_file("", "[router]\n");

    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let file = config_file(".toml", "[router\nreject_duplicates = true\n");

    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::TomlError(_))));
}

#[test]
fn unknown_field_in_file_is_rejected() {
    let file = config_file(".json", r#"{"logging": {"colour": true}}"#);

    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::JsonError(_))));
}

#[test]
fn file_can_be_validated_after_loading() {
    let file = config_file(".toml", "[logging]\nlevel = \"trellis=loudest\"\n");

    let result = ConfigLoader::new().with_file(file.path()).unwrap().load();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
