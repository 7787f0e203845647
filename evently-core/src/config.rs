//! evently configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{EventlyError, EventlyResult};
use crate::recurrence::OCCURRENCE_LIMIT;

/// Prefix of environment variables that override the config file.
pub const ENV_PREFIX: &str = "EVENTLY";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("evently"))
        .unwrap_or_else(|| PathBuf::from("~/.evently"))
}

fn default_occurrence_count() -> usize {
    OCCURRENCE_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration at ~/.config/evently/config.toml, overridable with
/// `EVENTLY_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct EventlyConfig {
    /// Directory holding `user.json` and `events.json`. `~` is expanded.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// How many upcoming occurrences `show` lists.
    #[serde(default = "default_occurrence_count")]
    pub occurrence_count: usize,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EventlyConfig {
    fn default() -> Self {
        EventlyConfig {
            data_dir: default_data_dir(),
            occurrence_count: default_occurrence_count(),
            log_level: default_log_level(),
        }
    }
}

impl EventlyConfig {
    pub fn config_path() -> EventlyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventlyError::Config("Could not determine config directory".into()))?
            .join("evently");

        Ok(config_dir.join("config.toml"))
    }

    /// Layer the config file (if any) and the environment over the defaults.
    pub fn load_from(path: &Path) -> EventlyResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| EventlyError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventlyError::Config(e.to_string()))
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> EventlyResult<()> {
        let contents = format!(
            "\
# evently configuration

# Where your user and events are stored:
# data_dir = \"{}\"

# Number of upcoming occurrences shown by `evently show`:
# occurrence_count = {}

# Log level when RUST_LOG is unset (error, warn, info, debug, trace):
# log_level = \"{}\"
",
            default_data_dir().display(),
            OCCURRENCE_LIMIT,
            default_log_level(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventlyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventlyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `data_dir` with a leading `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Tests that call `load_from` read the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn missing_file_gives_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let config = EventlyConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.occurrence_count, OCCURRENCE_LIMIT);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn default_file_is_all_comments() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evently/config.toml");

        EventlyConfig::create_default_config(&path).unwrap();
        let config = EventlyConfig::load_from(&path).unwrap();

        assert_eq!(config.occurrence_count, OCCURRENCE_LIMIT);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn file_values_override_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/evently-data\"\noccurrence_count = 10\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = EventlyConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/tmp/evently-data"));
        assert_eq!(config.occurrence_count, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn environment_overrides_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/from-file\"\noccurrence_count = 3\n").unwrap();

        // SAFETY: ENV_LOCK serializes every test in this module that reads these variables.
        unsafe {
            std::env::set_var("EVENTLY_OCCURRENCE_COUNT", "7");
            std::env::set_var("EVENTLY_DATA_DIR", "/tmp/from-env");
        }
        let loaded = EventlyConfig::load_from(&path);
        unsafe {
            std::env::remove_var("EVENTLY_OCCURRENCE_COUNT");
            std::env::remove_var("EVENTLY_DATA_DIR");
        }

        let config = loaded.unwrap();
        assert_eq!(config.occurrence_count, 7);
        assert_eq!(config.data_path(), PathBuf::from("/tmp/from-env"));
    }

    #[test]
    fn tilde_is_expanded() {
        let config = EventlyConfig {
            data_dir: PathBuf::from("~/events"),
            ..Default::default()
        };
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
