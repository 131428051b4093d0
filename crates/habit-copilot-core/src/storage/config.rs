//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default accent color and the preset palette for new habits
//! - How many days the recent-history strip shows
//! - Whether the best streak is shown next to the current one
//!
//! Configuration is stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::habit::{DEFAULT_COLOR, PRESET_COLORS};

/// Habit creation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitsConfig {
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

/// Upper bound for `display.calendar_days`.
pub const MAX_CALENDAR_DAYS: u32 = 366;

/// Listing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days shown in the recent-history strip, today included. At most
    /// [`MAX_CALENDAR_DAYS`].
    #[serde(default = "default_calendar_days")]
    pub calendar_days: u32,
    /// Show the best streak when it is longer than the current one.
    #[serde(default = "default_true")]
    pub show_longest: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub habits: HabitsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_color() -> String {
    DEFAULT_COLOR.into()
}
fn default_palette() -> Vec<String> {
    PRESET_COLORS.iter().map(|c| c.to_string()).collect()
}
fn default_calendar_days() -> u32 {
    14
}
fn default_true() -> bool {
    true
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            palette: default_palette(),
        }
    }
}

impl HabitsConfig {
    /// Color for a new habit.
    ///
    /// `None` gives the default color. A number picks that entry of the
    /// palette, counting from 1. Anything else is taken as the color itself.
    ///
    /// # Errors
    ///
    /// Returns an error if a palette index is out of range.
    pub fn resolve_color(&self, choice: Option<&str>) -> Result<String, ConfigError> {
        let Some(choice) = choice else {
            return Ok(self.default_color.clone());
        };
        match choice.trim().parse::<usize>() {
            Ok(index) => index
                .checked_sub(1)
                .and_then(|i| self.palette.get(i))
                .cloned()
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "habits.palette".into(),
                    message: format!(
                        "no palette entry {index} (palette has {} colors)",
                        self.palette.len()
                    ),
                }),
            Err(_) => Ok(choice.to_string()),
        }
    }
}

impl DisplayConfig {
    /// Strip length to render, capped for hand-edited files.
    pub fn calendar_window(&self) -> usize {
        self.calendar_days.min(MAX_CALENDAR_DAYS) as usize
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            calendar_days: default_calendar_days(),
            show_longest: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Array(_) => {
                        let items = value
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(|s| serde_json::Value::String(s.to_string()))
                            .collect();
                        serde_json::Value::Array(items)
                    }
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or the defaults
    /// cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Array values are given as a
    /// comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        if updated.display.calendar_days > MAX_CALENDAR_DAYS {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("must be at most {MAX_CALENDAR_DAYS}"),
            }
            .into());
        }
        *self = updated;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
