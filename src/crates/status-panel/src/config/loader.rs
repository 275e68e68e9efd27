//! Configuration loader with dual-location support

use crate::config::schema::PanelConfig;
use crate::config::{CONFIG_DIR, CONFIG_FILE};
use crate::{PanelError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Configuration loader that handles both user and project configs
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    user_config_path: Option<PathBuf>,
    project_config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for `~/.status-panel/config.toml` and
    /// `./.status-panel/config.toml`
    pub fn new() -> Self {
        Self {
            user_config_path: dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE)),
            project_config_path: PathBuf::from(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    /// Create a loader for explicit locations
    pub fn with_paths(user_config_path: Option<PathBuf>, project_config_path: PathBuf) -> Self {
        Self {
            user_config_path,
            project_config_path,
        }
    }

    /// Load configuration: defaults, then user file, then project file.
    ///
    /// Keys are merged individually, so a project file that only sets
    /// `ui.locale` keeps the user's probe URL. Missing files are skipped;
    /// unreadable or malformed ones are errors.
    pub async fn load(&self) -> Result<PanelConfig> {
        let mut merged = toml::Table::new();

        if let Some(user_path) = &self.user_config_path {
            if let Some(table) = Self::read_table(user_path).await? {
                merge_tables(&mut merged, table);
            }
        }

        if let Some(table) = Self::read_table(&self.project_config_path).await? {
            merge_tables(&mut merged, table);
        }

        let config: PanelConfig = toml::Value::Table(merged).try_into()?;
        Ok(config)
    }

    /// Load only the user-level config
    pub async fn load_user_config(&self) -> Result<PanelConfig> {
        match &self.user_config_path {
            Some(path) => Self::load_from_path(path).await,
            None => Err(PanelError::Config(
                "No home directory for user config".to_string(),
            )),
        }
    }

    /// Load only the project-level config
    pub async fn load_project_config(&self) -> Result<PanelConfig> {
        Self::load_from_path(&self.project_config_path).await
    }

    pub fn get_user_config_path(&self) -> Option<&PathBuf> {
        self.user_config_path.as_ref()
    }

    pub fn get_project_config_path(&self) -> &PathBuf {
        &self.project_config_path
    }

    async fn load_from_path(path: &Path) -> Result<PanelConfig> {
        if !path.exists() {
            return Err(PanelError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        let config: PanelConfig = toml::from_str(&content)?;
        Ok(config)
    }

    async fn read_table(path: &Path) -> Result<Option<toml::Table>> {
        if !path.exists() {
            debug!("No config at {}", path.display());
            return Ok(None);
        }

        debug!("Reading config from {}", path.display());
        let content = fs::read_to_string(path).await?;
        let table: toml::Table = toml::from_str(&content)?;
        Ok(Some(table))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively merge `overlay` into `base`, overlay winning on conflicts
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
