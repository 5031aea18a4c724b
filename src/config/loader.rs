//! Configuration file loading with precedence handling.

use crate::engine::ViewportConfig;
use crate::state::{MotionConfig, MotionSpec, WrapPolicy};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
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

    /// A value parsed but is not usable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/carousel/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Idle time before autoplay advances, in milliseconds.
    #[serde(default)]
    pub autoplay_delay_ms: Option<u64>,

    /// Slide transition length, in milliseconds.
    #[serde(default)]
    pub transition_speed_ms: Option<u64>,

    /// Wrap past the ends of the deck.
    #[serde(default)]
    pub loop_enabled: Option<bool>,

    /// Allow mouse drags to move slides.
    #[serde(default)]
    pub drag_enabled: Option<bool>,

    /// Wrap-around direction policy ("endpoints" or "shortest").
    #[serde(default)]
    pub wrap_policy: Option<WrapPolicy>,

    /// Overlay container travel distance (1000 = one viewport width).
    #[serde(default)]
    pub container_offset: Option<f32>,

    /// Nested text/button group travel distance.
    #[serde(default)]
    pub item_offset: Option<f32>,

    /// Overlay container animation length, in milliseconds.
    #[serde(default)]
    pub container_duration_ms: Option<u64>,

    /// Nested group animation length, in milliseconds.
    #[serde(default)]
    pub item_duration_ms: Option<u64>,

    /// Deck file to show instead of the built-in deck.
    #[serde(default)]
    pub deck: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Autoplay delay.
    pub autoplay_delay_ms: u64,
    /// Transition speed.
    pub transition_speed_ms: u64,
    /// Looping.
    pub loop_enabled: bool,
    /// Drag gestures.
    pub drag_enabled: bool,
    /// Wrap policy.
    pub wrap_policy: WrapPolicy,
    /// Container travel distance.
    pub container_offset: f32,
    /// Nested group travel distance.
    pub item_offset: f32,
    /// Container animation length.
    pub container_duration_ms: u64,
    /// Nested group animation length.
    pub item_duration_ms: u64,
    /// Deck file, `None` for the built-in deck.
    pub deck: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 5000,
            transition_speed_ms: 900,
            loop_enabled: true,
            drag_enabled: true,
            wrap_policy: WrapPolicy::Endpoints,
            container_offset: 1000.0,
            item_offset: 500.0,
            container_duration_ms: 900,
            item_duration_ms: 700,
            deck: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Engine configuration.
    pub fn viewport_config(&self) -> ViewportConfig {
        ViewportConfig {
            loop_enabled: self.loop_enabled,
            autoplay_delay: Duration::from_millis(self.autoplay_delay_ms),
            transition_speed: Duration::from_millis(self.transition_speed_ms),
            drag_enabled: self.drag_enabled,
        }
    }

    /// Overlay motion configuration.
    pub fn motion_config(&self) -> MotionConfig {
        let container = Duration::from_millis(self.container_duration_ms);
        let item = Duration::from_millis(self.item_duration_ms);
        MotionConfig {
            container: MotionSpec {
                distance: self.container_offset,
                enter: container,
                leave: container,
            },
            item: MotionSpec {
                distance: self.item_offset,
                enter: item,
                leave: item,
            },
        }
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// `InvalidValue` for a zero autoplay delay or a negative / non-finite
    /// offset.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.autoplay_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "autoplay_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        for (key, value) in [
            ("container_offset", self.container_offset),
            ("item_offset", self.item_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(self)
    }
}

/// CLI-provided overrides. `None` leaves the lower-precedence value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `[DECK]` positional argument.
    pub deck: Option<PathBuf>,
    /// `--autoplay-ms`.
    pub autoplay_delay_ms: Option<u64>,
    /// `--speed-ms`.
    pub transition_speed_ms: Option<u64>,
    /// `--no-loop` (only ever disables).
    pub loop_enabled: Option<bool>,
    /// `--no-drag` (only ever disables).
    pub drag_enabled: Option<bool>,
    /// `--wrap-policy`.
    pub wrap_policy: Option<WrapPolicy>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/carousel/carousel.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("carousel").join("carousel.log")
    } else {
        PathBuf::from("carousel.log")
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
/// Returns `~/.config/carousel/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carousel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `CAROUSEL_CONFIG` environment variable
/// 3. Default path `~/.config/carousel/config.toml`
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

    if let Ok(env_path) = std::env::var("CAROUSEL_CONFIG") {
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
        autoplay_delay_ms: config
            .autoplay_delay_ms
            .unwrap_or(defaults.autoplay_delay_ms),
        transition_speed_ms: config
            .transition_speed_ms
            .unwrap_or(defaults.transition_speed_ms),
        loop_enabled: config.loop_enabled.unwrap_or(defaults.loop_enabled),
        drag_enabled: config.drag_enabled.unwrap_or(defaults.drag_enabled),
        wrap_policy: config.wrap_policy.unwrap_or(defaults.wrap_policy),
        container_offset: config.container_offset.unwrap_or(defaults.container_offset),
        item_offset: config.item_offset.unwrap_or(defaults.item_offset),
        container_duration_ms: config
            .container_duration_ms
            .unwrap_or(defaults.container_duration_ms),
        item_duration_ms: config.item_duration_ms.unwrap_or(defaults.item_duration_ms),
        deck: config.deck.or(defaults.deck),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAROUSEL_AUTOPLAY_MS`: Override autoplay delay (ignored if not a number)
/// - `CAROUSEL_DECK`: Override deck file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("CAROUSEL_AUTOPLAY_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.autoplay_delay_ms = ms,
            Err(e) => tracing::warn!("Ignoring CAROUSEL_AUTOPLAY_MS={raw:?}: {e}"),
        }
    }

    if let Ok(deck) = std::env::var("CAROUSEL_DECK") {
        config.deck = Some(PathBuf::from(deck));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(deck) = cli.deck {
        config.deck = Some(deck);
    }
    if let Some(ms) = cli.autoplay_delay_ms {
        config.autoplay_delay_ms = ms;
    }
    if let Some(ms) = cli.transition_speed_ms {
        config.transition_speed_ms = ms;
    }
    if let Some(loop_enabled) = cli.loop_enabled {
        config.loop_enabled = loop_enabled;
    }
    if let Some(drag_enabled) = cli.drag_enabled {
        config.drag_enabled = drag_enabled;
    }
    if let Some(policy) = cli.wrap_policy {
        config.wrap_policy = policy;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
