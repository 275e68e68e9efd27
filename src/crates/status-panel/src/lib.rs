//! status-panel library
//!
//! A terminal status panel: on mount it issues one `GET` against a backend
//! test endpoint and shows the returned `message`, or a fixed failure string
//! when the backend cannot be reached.

pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod panel;
pub mod probe;
pub mod tui;
pub mod version;

pub use config::{ConfigLoader, PanelConfig};
pub use error::{PanelError, ProbeError, Result};
pub use locale::{Locale, PanelStrings};
pub use panel::{PanelState, StatusPanel};
pub use probe::{HttpProbe, Probe, DEFAULT_PROBE_URL};
pub use tui::TuiConfig;
