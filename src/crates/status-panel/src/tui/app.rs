//! Application state for the TUI

use super::events::{is_quit_key, is_remount_key};
use super::ui::PanelView;
use crate::locale::Locale;
use crate::panel::StatusPanel;
use crate::probe::Probe;
use crossterm::event::KeyEvent;
use std::sync::Arc;
use tracing::debug;

/// TUI application: owns the probe and the currently mounted panel
pub struct App {
    probe: Arc<dyn Probe>,
    locale: Locale,
    panel: Option<StatusPanel>,
    mounts: usize,
    should_quit: bool,
}

impl App {
    /// Create the app. Nothing is mounted, and no request is made, until
    /// [`App::mount`].
    pub fn new(probe: Arc<dyn Probe>, locale: Locale) -> Self {
        Self {
            probe,
            locale,
            panel: None,
            mounts: 0,
            should_quit: false,
        }
    }

    /// Mount the panel, unmounting any previous one first
    pub fn mount(&mut self) {
        if let Some(previous) = self.panel.take() {
            previous.unmount();
        }
        self.panel = Some(StatusPanel::mount(Arc::clone(&self.probe), self.locale));
        self.mounts += 1;
        debug!("Mount #{}", self.mounts);
    }

    pub fn unmount(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.unmount();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.panel.is_some()
    }

    /// Number of mounts so far
    pub fn mounts(&self) -> usize {
        self.mounts
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!("Key event: {:?}", key);

        if is_quit_key(key) {
            self.should_quit = true;
        } else if is_remount_key(key) {
            self.mount();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot of what should be drawn
    pub fn view(&self) -> PanelView {
        let strings = self.locale.strings();
        match &self.panel {
            Some(panel) => PanelView {
                strings,
                display_text: panel.display_text(),
            },
            None => PanelView {
                strings,
                display_text: strings.placeholder.to_string(),
            },
        }
    }
}
