mod config;
pub mod database;
pub mod habit_store;

pub use config::{Config, DisplayConfig, HabitsConfig, MAX_CALENDAR_DAYS};
pub use database::Database;
pub use habit_store::{HabitStore, STORAGE_KEY};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the directory holding the database and config file.
///
/// `HABIT_COPILOT_DATA_DIR` wins when set. Otherwise this is
/// `~/.config/habit-copilot[-dev]/`, with the `-dev` suffix when
/// `HABIT_COPILOT_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABIT_COPILOT_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABIT_COPILOT_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habit-copilot-dev")
            } else {
                base_dir.join("habit-copilot")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
