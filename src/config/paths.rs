//! Path management for spese
//!
//! Resolves where the two data files live. Paths are explicit configuration
//! passed into the storage layer, one instance per process invocation.
//!
//! ## Path Resolution Order
//!
//! 1. `SPESE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spese` or `~/.config/spese`
//! 3. Windows: `%APPDATA%\spese`

use std::path::PathBuf;

use crate::error::SpeseError;

/// Manages all paths used by spese
#[derive(Debug, Clone)]
pub struct SpesePaths {
    /// Base directory for all spese data
    base_dir: PathBuf,
}

impl SpesePaths {
    /// Create a new SpesePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpeseError> {
        let base_dir = if let Ok(custom) = std::env::var("SPESE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpesePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to budget.json
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpeseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpeseError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpeseError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SpeseError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("spese"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpeseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpeseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spese"))
}
