//! Terminal UI for the status panel
//!
//! Provides the ratatui front-end: terminal setup, event loop, and rendering.

use crate::config::PanelConfig;
use crate::error::Result;
use crate::locale::Locale;
use crate::probe::Probe;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub mod app;
pub mod events;
pub mod ui;

pub use app::App;
pub use events::{is_quit_key, is_remount_key};
pub use ui::{draw, PanelView};

/// TUI configuration
#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub locale: Locale,
    pub tick_rate: Duration,
}

impl TuiConfig {
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            locale: config.ui.locale,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }
}

/// Run the TUI until the user quits.
///
/// Must be called on a multi-threaded tokio runtime: the event loop blocks
/// its thread while polling the terminal.
pub async fn run(probe: Arc<dyn Probe>, config: TuiConfig) -> Result<()> {
    info!("Starting TUI mode");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(probe, config.locale);
    app.mount();

    let result = event_loop(&mut terminal, &mut app, config.tick_rate);
    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI mode exited after {} mount(s)", app.mounts());
    result
}

/// Enter raw mode and the alternate screen, undoing both if any step fails
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    with_rollback(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Run `setup`; if it fails, run `rollback` before returning the error
fn with_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("Terminal setup failed, restoring terminal: {}", e);
            rollback();
            Err(e)
        }
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        let view = app.view();
        terminal.draw(|f| ui::draw(f, &view))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
