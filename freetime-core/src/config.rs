//! Global freetime configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::projector::DisplayMode;

static DEFAULT_DATA_FILE: &str = "~/.local/share/freetime/timetable.toml";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/freetime/config.toml
///
/// Every key can also be set from the environment, e.g. `FREETIME_DATA_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FreetimeConfig {
    /// Where the timetable records are stored.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Start `show` in free-time mode.
    #[serde(default)]
    pub free_time_by_default: bool,
}

impl Default for FreetimeConfig {
    fn default() -> Self {
        FreetimeConfig {
            data_file: default_data_file(),
            log_level: default_log_level(),
            free_time_by_default: false,
        }
    }
}

impl FreetimeConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("freetime");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("FREETIME"))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn log_level(&self) -> ScheduleResult<slog::Level> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => Ok(slog::Level::Error),
            "warn" | "warning" => Ok(slog::Level::Warning),
            "info" => Ok(slog::Level::Info),
            "debug" => Ok(slog::Level::Debug),
            "trace" => Ok(slog::Level::Trace),
            other => Err(ScheduleError::Config(format!(
                "Unknown log level '{}'. Expected error, warn, info, debug or trace",
                other
            ))),
        }
    }

    pub fn initial_mode(&self) -> DisplayMode {
        if self.free_time_by_default {
            DisplayMode::FreeTime
        } else {
            DisplayMode::Normal
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# freetime configuration

# Where your timetable is stored:
# data_file = \"{}\"

# One of error, warn, info, debug, trace:
# log_level = \"{}\"

# Show free time instead of classes when the grid opens:
# free_time_by_default = false
",
            DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freetime/config.toml");
        FreetimeConfig::create_default_config(&path).unwrap();

        let config = FreetimeConfig::load_from(&path).unwrap();
        assert_eq!(config.data_file, default_data_file());
        assert_eq!(config.log_level().unwrap(), slog::Level::Warning);
        assert_eq!(config.initial_mode(), DisplayMode::Normal);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/tt.toml\"\nlog_level = \"debug\"\nfree_time_by_default = true\n",
        )
        .unwrap();

        let config = FreetimeConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/tt.toml"));
        assert_eq!(config.log_level().unwrap(), slog::Level::Debug);
        assert_eq!(config.initial_mode(), DisplayMode::FreeTime);
    }

    #[test]
    fn test_tilde_is_expanded_in_data_path() {
        let config = FreetimeConfig::default();
        assert!(!config.data_path().starts_with("~"));
        assert!(config.data_path().ends_with("freetime/timetable.toml"));
    }

    #[test]
    fn test_unknown_log_level_is_a_config_error() {
        let config = FreetimeConfig {
            log_level: "loud".into(),
            ..FreetimeConfig::default()
        };
        assert!(matches!(config.log_level(), Err(ScheduleError::Config(_))));
    }
}
