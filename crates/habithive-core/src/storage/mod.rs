//! Persistence layer: data directory, habit storage slot, configuration.

mod config;
mod habits;

pub use config::Config;
pub use habits::HabitStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/habithive[-dev]/` based on HABITHIVE_ENV.
///
/// Set HABITHIVE_ENV=dev to use the development data directory, or
/// HABITHIVE_DATA_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var("HABITHIVE_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITHIVE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habithive-dev")
            } else {
                base_dir.join("habithive")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
