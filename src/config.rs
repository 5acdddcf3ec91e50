//! Editor configuration.
//!
//! Hosts can export and import editor settings; the structure is
//! versioned and every field carries a serde default so older files keep
//! loading as the format grows.

use serde::{Deserialize, Serialize};

use crate::constants::{history, spawn};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Spawn region preferences for newly placed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPrefs {
    /// Inclusive lower bound of the spawn offset on both axes.
    #[serde(default = "default_spawn_min")]
    pub offset_min: f32,
    /// Inclusive upper bound of the spawn offset on both axes.
    #[serde(default = "default_spawn_max")]
    pub offset_max: f32,
}

fn default_spawn_min() -> f32 {
    spawn::OFFSET_MIN
}

fn default_spawn_max() -> f32 {
    spawn::OFFSET_MAX
}

impl Default for SpawnPrefs {
    fn default() -> Self {
        Self {
            offset_min: default_spawn_min(),
            offset_max: default_spawn_max(),
        }
    }
}

/// Undo history preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPrefs {
    /// Maximum number of undo steps kept per session.
    #[serde(default = "default_max_undo")]
    pub max_undo: usize,
}

fn default_max_undo() -> usize {
    history::MAX_UNDO
}

impl Default for HistoryPrefs {
    fn default() -> Self {
        Self {
            max_undo: default_max_undo(),
        }
    }
}

/// Editor configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format.
    pub version: u32,

    /// Application name (for identification).
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Spawn region for newly placed items.
    #[serde(default)]
    pub spawn: SpawnPrefs,

    /// Undo history limits.
    #[serde(default)]
    pub history: HistoryPrefs,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_app_name() -> String {
    "Lookbook".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            spawn: SpawnPrefs::default(),
            history: HistoryPrefs::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl EditorConfig {
    /// Serialize to pretty JSON for export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a configuration from JSON.
    ///
    /// Returns None if the version is newer than this build understands;
    /// missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Option<Self>, serde_json::Error> {
        let config: EditorConfig = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            log::warn!(
                "Config version {} is newer than supported version {}",
                config.version,
                CONFIG_VERSION
            );
            return Ok(None);
        }
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = EditorConfig::default();
        let json = config.to_json().expect("export config");
        let parsed = EditorConfig::from_json(&json)
            .expect("parse config")
            .expect("compatible version");
        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.spawn.offset_min, 50.0);
        assert_eq!(parsed.history.max_undo, 100);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = EditorConfig::from_json(r#"{ "version": 1 }"#)
            .expect("parse config")
            .expect("compatible version");
        assert_eq!(parsed.app_name, "Lookbook");
        assert_eq!(parsed.spawn.offset_max, 250.0);
        assert_eq!(parsed.log_level, LogLevel::Info);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        assert!(EditorConfig::from_json(&json).expect("parse").is_none());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::all().len(), 5);
        assert_eq!(LogLevel::Warn.name(), "Warn");
    }
}
