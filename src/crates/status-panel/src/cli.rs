//! Command-line interface definition
//!
//! `--url` falls back to `STATUS_PANEL_URL`; either one, when present, wins
//! over the config files.

use crate::config::PanelConfig;
use crate::locale::Locale;
use clap::{Parser, Subcommand};
use tracing::Level;

/// Terminal status panel for a backend test endpoint
#[derive(Parser, Debug)]
#[command(name = "status-panel")]
#[command(version = crate::version::VERSION)]
#[command(long_version = crate::version::VERSION_INFO)]
#[command(about = "Probe a backend test endpoint and display its message", long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Probe URL (overrides config)
    #[arg(long, env = "STATUS_PANEL_URL", value_name = "URL")]
    pub url: Option<String>,

    /// Display language (overrides config)
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the interactive panel (default)
    Tui,
    /// Mount once, wait for the probe to settle, and print the result
    Once,
    /// Write a default project config file
    Init,
    /// Show the effective configuration
    Config,
}

impl Args {
    /// Subcommand to run, `tui` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or(Command::Tui)
    }

    /// Layer the command-line overrides on top of the file config
    pub fn apply_to(&self, config: &mut PanelConfig) {
        config.apply_overrides(self.url.clone(), self.locale);
    }

    /// `--verbose` forces DEBUG; otherwise the configured level, or WARN when
    /// that does not parse
    pub fn log_level(&self, config: &PanelConfig) -> Level {
        if self.verbose {
            return Level::DEBUG;
        }
        config.ui.log_level.parse().unwrap_or(Level::WARN)
    }
}
