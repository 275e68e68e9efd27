//! status-panel - CLI entry point

use clap::Parser;
use status_panel::cli::{Args, Command};
use status_panel::config::init_project_config;
use status_panel::{ConfigLoader, HttpProbe, PanelConfig, Result, StatusPanel, TuiConfig};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, load_error) = match ConfigLoader::new().load().await {
        Ok(config) => (config, None),
        Err(e) => (PanelConfig::default(), Some(e)),
    };
    args.apply_to(&mut config);

    tracing_subscriber::fmt()
        .with_max_level(args.log_level(&config))
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = load_error {
        warn!("Failed to load config: {}, using defaults", e);
    }
    info!("Starting status-panel version {}", status_panel::version::VERSION);

    match args.subcommand() {
        Command::Tui => {
            config.validate()?;
            let probe = Arc::new(HttpProbe::new(&config.probe.url)?);
            status_panel::tui::run(probe, TuiConfig::from_config(&config)).await?;
        }
        Command::Once => {
            config.validate()?;
            let probe = Arc::new(HttpProbe::new(&config.probe.url)?);
            let mut panel = StatusPanel::mount(probe, config.ui.locale);
            let text = match panel.settled().await {
                Some(text) => text,
                None => panel.strings().failure.to_string(),
            };
            println!("{}", text);
        }
        Command::Init => {
            let path = init_project_config().await?;
            println!("Created config file: {}", path.display());
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
