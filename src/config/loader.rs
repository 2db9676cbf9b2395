//! Configuration file loading with precedence handling.
//!
//! Precedence chain (lowest to highest): defaults → config file → env vars →
//! CLI args.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Env var naming an explicit config file.
pub const ENV_CONFIG: &str = "LOGVIEW_CONFIG";
/// Env var overriding follow mode.
pub const ENV_FOLLOW: &str = "LOGVIEW_FOLLOW";
/// Env var overriding line wrapping.
pub const ENV_LINE_WRAP: &str = "LOGVIEW_LINE_WRAP";
/// Env var overriding table view.
pub const ENV_TABLE_VIEW: &str = "LOGVIEW_TABLE_VIEW";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/logview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start with the selection tracking new records.
    #[serde(default)]
    pub follow: Option<bool>,

    /// Wrap long records.
    #[serde(default)]
    pub line_wrap: Option<bool>,

    /// Start in table view.
    #[serde(default)]
    pub table_view: Option<bool>,

    /// Minimum milliseconds between follow-triggered redraws.
    #[serde(default)]
    pub redraw_interval_ms: Option<u64>,

    /// Milliseconds before a filter task completes.
    #[serde(default)]
    pub filter_delay_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Follow mode.
    pub follow: bool,
    /// Line wrapping.
    pub line_wrap: bool,
    /// Table view.
    pub table_view: bool,
    /// Minimum milliseconds between follow-triggered redraws.
    pub redraw_interval_ms: u64,
    /// Milliseconds before a filter task completes.
    pub filter_delay_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            follow: true,
            line_wrap: true,
            table_view: false,
            redraw_interval_ms: 100,
            filter_delay_ms: 300,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Redraw interval as a duration.
    pub fn redraw_interval(&self) -> Duration {
        Duration::from_millis(self.redraw_interval_ms)
    }

    /// Filter delay as a duration.
    pub fn filter_delay(&self) -> Duration {
        Duration::from_millis(self.filter_delay_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/logview/logview.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("logview").join("logview.log")
    } else {
        PathBuf::from("logview.log")
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
/// Returns `~/.config/logview/config.toml` on Linux, appropriate path on other
/// platforms. Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOGVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/logview/config.toml`
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

/// Parse a boolean env value: `1/true/yes/on` or `0/false/no/off`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `LOGVIEW_FOLLOW`, `LOGVIEW_LINE_WRAP` and `LOGVIEW_TABLE_VIEW`.
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_with(config, |name| std::env::var(name).ok())
}

/// Apply environment overrides read through `lookup`.
///
/// Unparsable values are ignored with a warning.
pub fn apply_env_overrides_with(
    mut config: ResolvedConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let targets: [(&str, &mut bool); 3] = [
        (ENV_FOLLOW, &mut config.follow),
        (ENV_LINE_WRAP, &mut config.line_wrap),
        (ENV_TABLE_VIEW, &mut config.table_view),
    ];

    for (name, field) in targets {
        let Some(raw) = lookup(name) else {
            continue;
        };
        match parse_bool(&raw) {
            Some(value) => *field = value,
            None => warn!(var = name, value = %raw, "ignoring unrecognized boolean"),
        }
    }

    config
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
        follow: config.follow.unwrap_or(defaults.follow),
        line_wrap: config.line_wrap.unwrap_or(defaults.line_wrap),
        table_view: config.table_view.unwrap_or(defaults.table_view),
        redraw_interval_ms: config
            .redraw_interval_ms
            .unwrap_or(defaults.redraw_interval_ms),
        filter_delay_ms: config.filter_delay_ms.unwrap_or(defaults.filter_delay_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// CLI flags that override the resolved config when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--no-follow` ⇒ `Some(false)`.
    pub follow: Option<bool>,
    /// `--no-wrap` ⇒ `Some(false)`.
    pub line_wrap: Option<bool>,
    /// `--table` ⇒ `Some(true)`.
    pub table_view: Option<bool>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user set apply.
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(follow) = overrides.follow {
        config.follow = follow;
    }
    if let Some(line_wrap) = overrides.line_wrap {
        config.line_wrap = line_wrap;
    }
    if let Some(table_view) = overrides.table_view {
        config.table_view = table_view;
    }
    config
}

/// Run the whole precedence chain.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed.
pub fn resolve(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file));
    Ok(apply_cli_overrides(config, overrides))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
