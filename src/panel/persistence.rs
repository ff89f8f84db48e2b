//! # Panel Persistence
//!
//! The host-facing configuration seam. A panel exposes its persisted
//! state as string key/value pairs; a `ConfigStore` moves those pairs to
//! and from disk. This panel persists exactly one key, `"Topic"`.

use anyhow::{Context, Result};
use ini::Ini;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration key under which the destination topic is persisted
pub const TOPIC_KEY: &str = "Topic";

/// INI section holding the panel's keys
const PANEL_SECTION: &str = "panel";

/// String key/value configuration handed between host and panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelConfig {
    values: HashMap<String, String>,
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.values.iter()
    }
}

/// Capability interface the host calls to persist and restore a panel
///
/// `load` must leave the panel's bound channel consistent with whatever
/// it displays: implementations rebind before reflecting restored text.
pub trait Panel {
    /// Write the panel's persisted keys into `config`
    fn save(&self, config: &mut PanelConfig);

    /// Restore the panel from `config`; absent keys leave state untouched
    fn load(&mut self, config: &PanelConfig);
}

/// Store moving a `PanelConfig` to and from the host's storage
pub trait ConfigStore {
    /// Load the stored configuration; a missing store yields an empty one
    fn load(&self) -> Result<PanelConfig>;

    /// Persist the configuration
    fn save(&self, config: &PanelConfig) -> Result<()>;
}

/// `ConfigStore` backed by an INI file
///
/// The panel's keys live in a `[panel]` section. A missing file is not an
/// error; it loads as an empty configuration, leaving the panel unbound.
pub struct IniConfigStore {
    path: PathBuf,
}

impl IniConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for IniConfigStore {
    fn load(&self) -> Result<PanelConfig> {
        if !self.path.exists() {
            tracing::debug!("no config file at {:?}, starting unconfigured", self.path);
            return Ok(PanelConfig::new());
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("failed to read config file {:?}", self.path))?;

        let mut config = PanelConfig::new();
        if let Some(section) = ini.section(Some(PANEL_SECTION)) {
            for (key, value) in section.iter() {
                config.set(key, value);
            }
        }
        Ok(config)
    }

    fn save(&self, config: &PanelConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }

        let mut ini = Ini::new();
        let mut section = ini.with_section(Some(PANEL_SECTION));
        for (key, value) in config.iter() {
            section.set(key, value);
        }
        ini.write_to_file(&self.path)
            .with_context(|| format!("failed to write config file {:?}", self.path))?;

        tracing::debug!("configuration saved to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn panel_config_should_store_and_retrieve_values() {
        let mut config = PanelConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.get(TOPIC_KEY), None);

        config.set(TOPIC_KEY, "robot1");
        assert_eq!(config.get(TOPIC_KEY), Some("robot1"));
    }

    #[test]
    fn missing_file_should_load_as_empty_config() {
        let dir = TempDir::new().unwrap();
        let store = IniConfigStore::new(dir.path().join("panel"));

        let config = store.load().unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn save_and_load_should_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = IniConfigStore::new(dir.path().join("panel"));

        let mut config = PanelConfig::new();
        config.set(TOPIC_KEY, "robot1/cmd");
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get(TOPIC_KEY), Some("robot1/cmd"));
    }

    #[test]
    fn save_should_create_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = IniConfigStore::new(dir.path().join("nested/dir/panel"));

        let mut config = PanelConfig::new();
        config.set(TOPIC_KEY, "robot1");
        store.save(&config).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn save_should_overwrite_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = IniConfigStore::new(dir.path().join("panel"));

        let mut config = PanelConfig::new();
        config.set(TOPIC_KEY, "robot1");
        store.save(&config).unwrap();

        config.set(TOPIC_KEY, "robot2");
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get(TOPIC_KEY), Some("robot2"));
    }
}
