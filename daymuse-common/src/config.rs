//! Configuration loading and storage base URL resolution
//!
//! Settings sources, highest priority first:
//! 1. Command-line arguments
//! 2. Environment variables (`DAYMUSE_STORAGE_BASE_URL`, `DAYMUSE_APP_URL`)
//! 3. TOML configuration file
//! 4. Compiled defaults
//!
//! A missing or unreadable config file never stops startup: a warning is
//! logged and the compiled defaults apply.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Remote object-storage root that audio and cover paths are joined onto
pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://pznmptudgicrmljjafex.supabase.co/storage/v1/object/public/releaseready";

/// Environment variable overriding the storage base URL
pub const STORAGE_BASE_URL_ENV: &str = "DAYMUSE_STORAGE_BASE_URL";

/// Environment variable overriding the public app URL
pub const APP_URL_ENV: &str = "DAYMUSE_APP_URL";

/// Image extension used for derived cover paths
pub const DEFAULT_COVER_EXTENSION: &str = "png";

pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_MANIFEST_PATH: &str = "public/release-manifest.json";
pub const DEFAULT_OVERRIDES_PATH: &str = "public/content-overrides.json";

/// Settings read from the TOML config file
///
/// Every field is optional; anything left out falls through to the
/// environment or the compiled default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// Storage root for audio and cover files
    #[serde(default)]
    pub storage_base_url: Option<String>,

    /// Release manifest JSON path
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,

    /// Editorial overrides JSON path
    #[serde(default)]
    pub overrides_path: Option<PathBuf>,

    /// Extension for derived cover art paths (without the dot)
    #[serde(default)]
    pub cover_extension: Option<String>,

    /// Reject manifests with unknown months, zero indexes or duplicate days
    #[serde(default)]
    pub strict_manifest: bool,

    /// Public URL of the hosting app (fallback images)
    #[serde(default)]
    pub app_url: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a config file, failing on I/O or syntax errors
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<TomlConfig>(&content)?;
        Ok(config)
    }

    /// Load the config file, degrading to defaults on any failure
    ///
    /// An explicit path is used as given; otherwise the platform config
    /// location is searched.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_file() {
                Ok(path) => path,
                Err(e) => {
                    debug!("No config file in use: {}", e);
                    return Self::default();
                }
            },
        };

        match Self::from_file(&path) {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Values supplied on the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub storage_base_url: Option<String>,
    pub manifest_path: Option<PathBuf>,
    pub overrides_path: Option<PathBuf>,
    pub app_url: Option<String>,
}

/// Fully resolved catalog configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub storage_base_url: String,
    pub manifest_path: PathBuf,
    pub overrides_path: PathBuf,
    pub cover_extension: String,
    pub strict_manifest: bool,
    pub app_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            overrides_path: PathBuf::from(DEFAULT_OVERRIDES_PATH),
            cover_extension: DEFAULT_COVER_EXTENSION.to_string(),
            strict_manifest: false,
            app_url: DEFAULT_APP_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Merge command-line values, environment, and the TOML file
    pub fn resolve(cli: &ConfigOverrides, file: &TomlConfig) -> Self {
        let storage_base_url = resolve_setting(
            cli.storage_base_url.as_deref(),
            STORAGE_BASE_URL_ENV,
            file.storage_base_url.as_deref(),
            DEFAULT_STORAGE_BASE_URL,
        );
        let app_url = resolve_setting(
            cli.app_url.as_deref(),
            APP_URL_ENV,
            file.app_url.as_deref(),
            DEFAULT_APP_URL,
        );

        let cover_extension = file
            .cover_extension
            .as_deref()
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_COVER_EXTENSION)
            .to_string();

        Self {
            storage_base_url: trim_trailing_slashes(&storage_base_url),
            manifest_path: cli
                .manifest_path
                .clone()
                .or_else(|| file.manifest_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH)),
            overrides_path: cli
                .overrides_path
                .clone()
                .or_else(|| file.overrides_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERRIDES_PATH)),
            cover_extension,
            strict_manifest: file.strict_manifest,
            app_url: trim_trailing_slashes(&app_url),
        }
    }
}

/// Resolve the storage base URL alone
///
/// Same priority order as [`CatalogConfig::resolve`]: command line,
/// environment variable, config file value, compiled default.
pub fn resolve_storage_base_url(cli_arg: Option<&str>, file_value: Option<&str>) -> String {
    let url = resolve_setting(cli_arg, STORAGE_BASE_URL_ENV, file_value, DEFAULT_STORAGE_BASE_URL);
    trim_trailing_slashes(&url)
}

/// Priority lookup for one string setting; blank values are skipped
fn resolve_setting(
    cli_arg: Option<&str>,
    env_var_name: &str,
    file_value: Option<&str>,
    default: &str,
) -> String {
    if let Some(value) = non_blank(cli_arg) {
        return value;
    }

    if let Ok(value) = std::env::var(env_var_name) {
        if let Some(value) = non_blank(Some(&value)) {
            return value;
        }
    }

    if let Some(value) = non_blank(file_value) {
        return value;
    }

    default.to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn trim_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Get default configuration file path for the platform
fn default_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/daymuse/config.toml first, then /etc/daymuse/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("daymuse").join("config.toml"));
        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/daymuse/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let path = dirs::config_dir()
        .map(|d| d.join("daymuse").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}
