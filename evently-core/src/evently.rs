//! Root handle: configuration plus the stores it points at.

use std::path::PathBuf;

use crate::config::EventlyConfig;
use crate::error::EventlyResult;
use crate::store::{EventStore, FileStore, UserStore};

#[derive(Clone)]
pub struct Evently {
    config: EventlyConfig,
}

impl Evently {
    /// Load configuration, writing a commented default config on first run.
    pub fn load() -> EventlyResult<Self> {
        let config_path = EventlyConfig::config_path()?;

        if !config_path.exists() {
            EventlyConfig::create_default_config(&config_path)?;
        }

        let config = EventlyConfig::load_from(&config_path)?;
        tracing::debug!(config = ?config, "Configuration loaded");

        Ok(Evently { config })
    }

    pub fn with_config(config: EventlyConfig) -> Self {
        Evently { config }
    }

    /// Point storage at another directory.
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.config.data_dir = dir;
        self
    }

    pub fn config(&self) -> &EventlyConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.data_path()
    }

    pub fn storage(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    pub fn events(&self) -> EventStore<FileStore> {
        EventStore::new(self.storage())
    }

    pub fn users(&self) -> UserStore<FileStore> {
        UserStore::new(self.storage())
    }
}
