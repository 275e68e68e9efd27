//! Configuration management for the status panel
//!
//! Supports dual-location configuration:
//! - User-level: ~/.status-panel/config.toml
//! - Project-level: ./.status-panel/config.toml
//!
//! Project-level config overrides user-level config key by key.

mod init;
mod loader;
mod schema;

pub use init::{init_config_in, init_project_config};
pub use loader::ConfigLoader;
pub use schema::{PanelConfig, ProbeConfig, UiConfig};

pub(crate) const CONFIG_DIR: &str = ".status-panel";
pub(crate) const CONFIG_FILE: &str = "config.toml";
