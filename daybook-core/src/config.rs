//! Configuration at ~/.config/daybook/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DaybookError, DaybookResult};
use crate::slot::SlotWindow;

/// Global daybook configuration.
///
/// ```toml
/// [slots]
/// start_hour = 8
/// end_hour = 20
/// step_minutes = 30
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct DaybookConfig {
    #[serde(default)]
    pub slots: SlotWindow,
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> DaybookResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: DaybookConfig =
            toml::from_str(&content).map_err(|e| DaybookError::Config(e.to_string()))?;
        config.slots.check()?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> DaybookResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
