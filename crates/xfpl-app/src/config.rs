// Configuration loading and parsing (config/xfpl.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use xfpl_core::recommend::captain::DEFAULT_MAX_CAPTAINS;
use xfpl_core::recommend::transfers::DEFAULT_MAX_TRANSFERS;

/// Name of the config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "xfpl.toml";

/// Number of gameweeks in a Premier League season.
pub const SEASON_GAMEWEEKS: u32 = 38;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// xfpl.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub data_paths: DataPaths,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Root of the FPL API, without a trailing slash.
    pub base_url: String,
    /// The gameweek whose picks define the current squad.
    pub gameweek: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
    pub predictions: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_max_transfers")]
    pub max_transfers: usize,
    #[serde(default = "default_max_captains")]
    pub max_captains: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        RecommendationConfig {
            max_transfers: DEFAULT_MAX_TRANSFERS,
            max_captains: DEFAULT_MAX_CAPTAINS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_transfers() -> usize {
    DEFAULT_MAX_TRANSFERS
}

fn default_max_captains() -> usize {
    DEFAULT_MAX_CAPTAINS
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/xfpl.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` handles that.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// Copy any file in `defaults/` that is missing from `config/`.
/// Returns the files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }
        std::fs::copy(&path, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {} to {}: {e}", path.display(), target.display()),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validation_error(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(validation_error("api.base_url", "must not be empty"));
    }

    let gw = config.api.gameweek;
    if !(1..=SEASON_GAMEWEEKS).contains(&gw) {
        return Err(validation_error(
            "api.gameweek",
            format!("must be between 1 and {SEASON_GAMEWEEKS}, got {gw}"),
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(validation_error("api.timeout_secs", "must be > 0"));
    }

    let rec = &config.recommendations;
    for (name, val) in [
        ("recommendations.max_transfers", rec.max_transfers),
        ("recommendations.max_captains", rec.max_captains),
    ] {
        if val == 0 {
            return Err(validation_error(name, "must be > 0"));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
