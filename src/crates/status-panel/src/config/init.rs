//! Default configuration file creation

use crate::config::{CONFIG_DIR, CONFIG_FILE};
use crate::{PanelError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"# status-panel configuration
#
# Project-level config (./.status-panel/config.toml) overrides
# user-level config (~/.status-panel/config.toml).
# STATUS_PANEL_URL and --url override probe.url.

[probe]
url = "http://127.0.0.1:8000/api/test/"

[ui]
locale = "en"                 # en, fr
log_level = "warn"            # trace, debug, info, warn, error
tick_rate_ms = 100            # milliseconds
"#;

/// Write the default config into `./.status-panel/config.toml`
pub async fn init_project_config() -> Result<PathBuf> {
    init_config_in(Path::new(".")).await
}

/// Write the default config into `<root>/.status-panel/config.toml`.
///
/// An existing file is left untouched and reported as an error.
pub async fn init_config_in(root: &Path) -> Result<PathBuf> {
    let config_dir = root.join(CONFIG_DIR);
    fs::create_dir_all(&config_dir).await?;

    let config_path = config_dir.join(CONFIG_FILE);
    if config_path.exists() {
        return Err(PanelError::Config(format!(
            "Config file already exists: {}",
            config_path.display()
        )));
    }

    fs::write(&config_path, DEFAULT_CONFIG).await?;
    tracing::info!("Created config file: {}", config_path.display());
    Ok(config_path)
}
