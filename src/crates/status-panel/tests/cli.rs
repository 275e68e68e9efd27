// Tests for command-line parsing and override precedence

use clap::Parser;
use status_panel::cli::{Args, Command};
use status_panel::{ConfigLoader, Locale, PanelConfig};
use tempfile::TempDir;
use tracing::Level;

const FILE_URL: &str = "http://10.0.0.5:8000/api/test/";
const ENV_URL: &str = "http://10.0.0.6:8000/api/test/";
const FLAG_URL: &str = "http://10.0.0.7:8000/api/test/";

async fn file_config(dir: &TempDir) -> PanelConfig {
    let project = dir.path().join("config.toml");
    tokio::fs::write(&project, format!("[probe]\nurl = \"{}\"\n", FILE_URL))
        .await
        .unwrap();
    ConfigLoader::with_paths(None, project).load().await.unwrap()
}

fn effective(argv: &[&str], file: &PanelConfig) -> PanelConfig {
    let args = Args::try_parse_from(argv).unwrap();
    let mut config = file.clone();
    args.apply_to(&mut config);
    config
}

// The only test in this binary that reads or writes STATUS_PANEL_URL
#[tokio::test]
async fn test_url_precedence_flag_over_env_over_file() {
    let dir = TempDir::new().unwrap();
    let file = file_config(&dir).await;

    std::env::remove_var("STATUS_PANEL_URL");
    assert_eq!(effective(&["status-panel"], &file).probe.url, FILE_URL);

    std::env::set_var("STATUS_PANEL_URL", ENV_URL);
    assert_eq!(effective(&["status-panel"], &file).probe.url, ENV_URL);
    assert_eq!(
        effective(&["status-panel", "--url", FLAG_URL], &file).probe.url,
        FLAG_URL
    );
    std::env::remove_var("STATUS_PANEL_URL");

    assert_eq!(
        effective(&["status-panel", "--url", FLAG_URL, "once"], &file).probe.url,
        FLAG_URL
    );
}

#[test]
fn test_default_subcommand_is_tui() {
    let args = Args::try_parse_from(["status-panel"]).unwrap();
    assert_eq!(args.command, None);
    assert_eq!(args.subcommand(), Command::Tui);
}

#[test]
fn test_explicit_subcommands() {
    for (name, expected) in [
        ("tui", Command::Tui),
        ("once", Command::Once),
        ("init", Command::Init),
        ("config", Command::Config),
    ] {
        let args = Args::try_parse_from(["status-panel", name]).unwrap();
        assert_eq!(args.subcommand(), expected);
    }
}

#[test]
fn test_locale_flag() {
    let args = Args::try_parse_from(["status-panel", "--locale", "fr"]).unwrap();
    assert_eq!(args.locale, Some(Locale::Fr));

    let mut config = PanelConfig::default();
    args.apply_to(&mut config);
    assert_eq!(config.ui.locale, Locale::Fr);
}

#[test]
fn test_invalid_locale_is_rejected() {
    assert!(Args::try_parse_from(["status-panel", "--locale", "de"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Args::try_parse_from(["status-panel", "serve"]).is_err());
}

#[test]
fn test_log_level() {
    let mut config = PanelConfig::default();
    let quiet = Args::try_parse_from(["status-panel"]).unwrap();
    assert_eq!(quiet.log_level(&config), Level::WARN);

    config.ui.log_level = "info".to_string();
    assert_eq!(quiet.log_level(&config), Level::INFO);

    config.ui.log_level = "chatty".to_string();
    assert_eq!(quiet.log_level(&config), Level::WARN);

    let verbose = Args::try_parse_from(["status-panel", "--verbose"]).unwrap();
    assert_eq!(verbose.log_level(&config), Level::DEBUG);
}
