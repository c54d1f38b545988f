//! Configuration file loading with precedence handling.

use crate::model::{SettleMotion, Side, SwipeConfig, SwipeError};
use crate::state::parent_lock::DEFAULT_TOUCH_SLOP;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "SWIPEABLE_CONFIG";
/// Environment variable overriding the swipe direction.
pub const ENV_DIRECTION: &str = "SWIPEABLE_DIRECTION";
/// Environment variable overriding the swipe range.
pub const ENV_RANGE: &str = "SWIPEABLE_RANGE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override holds a value that cannot be parsed.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/swipeable/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Side that receives the swipe range ("left" or "right").
    #[serde(default)]
    pub direction: Option<Side>,

    /// Swipe range in `[0, 1]`.
    #[serde(default)]
    pub swipe_range: Option<f32>,

    /// Container width used for the initial layout.
    #[serde(default)]
    pub container_width: Option<i32>,

    /// Distance after which the parent must stop intercepting touches.
    #[serde(default)]
    pub touch_slop: Option<i32>,

    /// Settle smoothing in `[0, 1)`.
    #[serde(default)]
    pub settle_smoothing: Option<f32>,

    /// Smallest settle step in pixels.
    #[serde(default)]
    pub settle_min_step: Option<i32>,

    /// Largest settle step in pixels.
    #[serde(default)]
    pub settle_max_step: Option<i32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. Values are
/// validated only when turned into domain types.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Side that receives the swipe range.
    pub direction: Side,
    /// Swipe range; validated by `swipe_config`.
    pub swipe_range: f32,
    /// Width for the initial layout.
    pub container_width: i32,
    /// Parent-intercept slop in pixels.
    pub touch_slop: i32,
    /// Settle smoothing; validated by `settle_motion`.
    pub settle_smoothing: f32,
    /// Smallest settle step.
    pub settle_min_step: i32,
    /// Largest settle step.
    pub settle_max_step: i32,
    /// Log file written by the tracing subscriber.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let motion = SettleMotion::default();
        Self {
            direction: Side::Right,
            swipe_range: 1.0,
            container_width: 375,
            touch_slop: DEFAULT_TOUCH_SLOP,
            settle_smoothing: motion.smoothing(),
            settle_min_step: motion.min_step(),
            settle_max_step: motion.max_step(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate into the state machine configuration.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::InvalidConfiguration` for an out-of-range swipe range.
    pub fn swipe_config(&self) -> Result<SwipeConfig, SwipeError> {
        SwipeConfig::new(self.direction, self.swipe_range)
    }

    /// Validate into the settle motion.
    ///
    /// # Errors
    ///
    /// Returns `SwipeError::InvalidConfiguration` for bad settle parameters.
    pub fn settle_motion(&self) -> Result<SettleMotion, SwipeError> {
        SettleMotion::new(
            self.settle_smoothing,
            self.settle_min_step,
            self.settle_max_step,
        )
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/swipeable/swipeable.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("swipeable").join("swipeable.log")
    } else {
        PathBuf::from("swipeable.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/swipeable/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("swipeable").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `SWIPEABLE_CONFIG` environment variable
/// 3. Default path `~/.config/swipeable/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        direction: config.direction.unwrap_or(defaults.direction),
        swipe_range: config.swipe_range.unwrap_or(defaults.swipe_range),
        container_width: config.container_width.unwrap_or(defaults.container_width),
        touch_slop: config.touch_slop.unwrap_or(defaults.touch_slop),
        settle_smoothing: config.settle_smoothing.unwrap_or(defaults.settle_smoothing),
        settle_min_step: config.settle_min_step.unwrap_or(defaults.settle_min_step),
        settle_max_step: config.settle_max_step.unwrap_or(defaults.settle_max_step),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SWIPEABLE_DIRECTION`: Override direction
/// - `SWIPEABLE_RANGE`: Override swipe range
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` when a variable is set to an unparsable value.
pub fn apply_env_overrides(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    apply_env_overrides_from(config, |var| std::env::var(var).ok())
}

/// Apply overrides read through `lookup` instead of the process environment.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` when a variable is set to an unparsable value.
pub fn apply_env_overrides_from<F>(
    mut config: ResolvedConfig,
    lookup: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_DIRECTION) {
        config.direction = value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: ENV_DIRECTION,
            value: value.clone(),
        })?;
    }

    if let Some(value) = lookup(ENV_RANGE) {
        config.swipe_range = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: ENV_RANGE,
                value: value.clone(),
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    direction_override: Option<Side>,
    range_override: Option<f32>,
    width_override: Option<i32>,
) -> ResolvedConfig {
    if let Some(direction) = direction_override {
        config.direction = direction;
    }

    if let Some(range) = range_override {
        config.swipe_range = range;
    }

    if let Some(width) = width_override {
        config.container_width = width;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
