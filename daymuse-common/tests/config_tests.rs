//! Configuration resolution tests
//!
//! Covers the priority order (command line > environment > TOML file >
//! compiled default) and graceful degradation on missing or broken files.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate DAYMUSE_* variables are marked with #[serial].

use daymuse_common::config::{
    resolve_storage_base_url, CatalogConfig, ConfigOverrides, TomlConfig, APP_URL_ENV,
    DEFAULT_APP_URL, DEFAULT_COVER_EXTENSION, DEFAULT_MANIFEST_PATH, DEFAULT_STORAGE_BASE_URL,
    STORAGE_BASE_URL_ENV,
};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var(STORAGE_BASE_URL_ENV);
    env::remove_var(APP_URL_ENV);
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(content.as_bytes()).expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let config = CatalogConfig::resolve(&ConfigOverrides::default(), &TomlConfig::default());

    assert_eq!(config.storage_base_url, DEFAULT_STORAGE_BASE_URL);
    assert_eq!(config.app_url, DEFAULT_APP_URL);
    assert_eq!(config.cover_extension, DEFAULT_COVER_EXTENSION);
    assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
    assert!(!config.strict_manifest);
}

#[test]
#[serial]
fn test_env_var_overrides_file_value() {
    clear_env();
    env::set_var(STORAGE_BASE_URL_ENV, "https://env.test/bucket/");

    let file = TomlConfig {
        storage_base_url: Some("https://file.test/bucket".to_string()),
        ..TomlConfig::default()
    };
    let config = CatalogConfig::resolve(&ConfigOverrides::default(), &file);

    // Trailing slash is normalized away
    assert_eq!(config.storage_base_url, "https://env.test/bucket");

    clear_env();
}

#[test]
#[serial]
fn test_blank_env_var_is_ignored() {
    clear_env();
    env::set_var(STORAGE_BASE_URL_ENV, "   ");

    assert_eq!(resolve_storage_base_url(None, None), DEFAULT_STORAGE_BASE_URL);
    assert_eq!(
        resolve_storage_base_url(None, Some("https://file.test")),
        "https://file.test"
    );

    clear_env();
}

#[test]
#[serial]
fn test_cli_takes_precedence_over_env() {
    clear_env();
    env::set_var(STORAGE_BASE_URL_ENV, "https://env.test");

    let cli = ConfigOverrides {
        storage_base_url: Some("https://cli.test".to_string()),
        manifest_path: Some(PathBuf::from("/tmp/manifest.json")),
        ..ConfigOverrides::default()
    };
    let config = CatalogConfig::resolve(&cli, &TomlConfig::default());

    assert_eq!(config.storage_base_url, "https://cli.test");
    assert_eq!(config.manifest_path, PathBuf::from("/tmp/manifest.json"));

    clear_env();
}

#[test]
#[serial]
fn test_toml_file_values_applied() {
    clear_env();
    let file = write_config(
        r#"
storage_base_url = "https://file.test/releases"
manifest_path = "data/manifest.json"
overrides_path = "data/overrides.json"
cover_extension = "jpg"
strict_manifest = true
app_url = "https://app.test"

[logging]
level = "debug"
"#,
    );

    let toml = TomlConfig::from_file(file.path()).expect("config should parse");
    assert_eq!(toml.logging.level, "debug");

    let config = CatalogConfig::resolve(&ConfigOverrides::default(), &toml);
    assert_eq!(config.storage_base_url, "https://file.test/releases");
    assert_eq!(config.manifest_path, PathBuf::from("data/manifest.json"));
    assert_eq!(config.overrides_path, PathBuf::from("data/overrides.json"));
    assert_eq!(config.cover_extension, "jpg");
    assert!(config.strict_manifest);
    assert_eq!(config.app_url, "https://app.test");
}

#[test]
fn test_missing_explicit_file_degrades_to_defaults() {
    let config = TomlConfig::load_or_default(Some(&PathBuf::from(
        "/nonexistent/daymuse/config.toml",
    )));

    assert!(config.storage_base_url.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_file_degrades_to_defaults() {
    let file = write_config("storage_base_url = [not toml");

    assert!(TomlConfig::from_file(file.path()).is_err());

    let config = TomlConfig::load_or_default(Some(file.path()));
    assert!(config.storage_base_url.is_none());
}
