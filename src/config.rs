//! Keypad configuration and where it lives on disk
//!
//! Everything sits under one directory:
//! - `$XDG_CONFIG_HOME/amountpad/`, falling back to `~/.config/amountpad/`
//! - `%APPDATA%\amountpad\` on Windows
//!
//! holding `config.yaml`, an optional user `keymap.yaml` and `logs/`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR: &str = "amountpad";

/// Base directory for amountpad files, None when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        dirs::config_dir()
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|xdg| !xdg.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|base| base.join(APP_DIR))
}

fn app_path(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn config_file() -> Option<PathBuf> {
    app_path("config.yaml")
}

/// User keymap merged over the embedded defaults
pub fn keymap_file() -> Option<PathBuf> {
    app_path("keymap.yaml")
}

pub fn logs_dir() -> Option<PathBuf> {
    app_path("logs")
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

/// Keypad configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadConfig {
    /// Confirm button enabled at startup
    #[serde(default = "default_affirm_enabled")]
    pub affirm_enabled: bool,

    /// Print the buffer after every input line in the terminal driver
    #[serde(default)]
    pub echo_state: bool,
}

fn default_affirm_enabled() -> bool {
    true
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            affirm_enabled: default_affirm_enabled(),
            echo_state: false,
        }
    }
}

impl KeypadConfig {
    /// Load `config.yaml`, or return defaults if there is none
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeypadConfig::default();
        assert!(config.affirm_enabled);
        assert!(!config.echo_state);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: KeypadConfig = serde_yaml::from_str("echo_state: true").unwrap();
        assert!(config.affirm_enabled);
        assert!(config.echo_state);
    }
}
