//! Configuration schema for the status panel

use crate::error::{PanelError, Result};
use crate::locale::Locale;
use crate::probe::DEFAULT_PROBE_URL;
use serde::{Deserialize, Serialize};

/// Main status panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    /// Probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Backend test endpoint
    pub url: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROBE_URL.to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language of the static strings
    pub locale: Locale,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Redraw interval of the terminal UI in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            log_level: "warn".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl PanelConfig {
    /// Apply command-line/environment overrides on top of the file config
    pub fn apply_overrides(&mut self, url: Option<String>, locale: Option<Locale>) {
        if let Some(url) = url {
            self.probe.url = url;
        }
        if let Some(locale) = locale {
            self.ui.locale = locale;
        }
    }

    /// Reject values the panel cannot run with
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.probe.url).map_err(|e| {
            PanelError::Config(format!("invalid probe url '{}': {}", self.probe.url, e))
        })?;

        if self.ui.log_level.parse::<tracing::Level>().is_err() {
            return Err(PanelError::Config(format!(
                "invalid log level '{}'",
                self.ui.log_level
            )));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(PanelError::Config(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
