//! The status panel component
//!
//! Mounting a [`StatusPanel`] spawns exactly one probe task. The task performs
//! the read, then publishes the settled state through a watch channel, unless
//! the panel was unmounted in the meantime, in which case the result is
//! dropped on the floor.

use crate::locale::{Locale, PanelStrings};
use crate::probe::Probe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Observable state of a panel.
///
/// Success and failure both settle into `display_text`; only whether the
/// probe has settled is tracked alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    settled: bool,
    display_text: String,
}

impl PanelState {
    fn pending(strings: &PanelStrings) -> Self {
        Self {
            settled: false,
            display_text: strings.placeholder.to_string(),
        }
    }

    fn settled_with(display_text: String) -> Self {
        Self {
            settled: true,
            display_text,
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// A mounted status panel.
///
/// Dropping the panel unmounts it.
#[derive(Debug)]
pub struct StatusPanel {
    locale: Locale,
    state: watch::Receiver<PanelState>,
    unmounted: Arc<AtomicBool>,
}

impl StatusPanel {
    /// Mount a panel and start its probe.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(probe: Arc<dyn Probe>, locale: Locale) -> Self {
        let strings = locale.strings();
        let (tx, rx) = watch::channel(PanelState::pending(strings));
        let unmounted = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&unmounted);
        tokio::spawn(async move {
            let display_text = match probe.fetch().await {
                Ok(text) => text,
                Err(e) => {
                    debug!("Backend probe failed: {}", e);
                    strings.failure.to_string()
                }
            };

            if flag.load(Ordering::SeqCst) {
                debug!("Panel unmounted before the probe settled, discarding result");
                return;
            }
            debug!("Panel settled");
            tx.send_replace(PanelState::settled_with(display_text));
        });

        debug!(%locale, "Panel mounted");
        Self {
            locale,
            state: rx,
            unmounted,
        }
    }

    pub fn strings(&self) -> &'static PanelStrings {
        self.locale.strings()
    }

    /// Current snapshot of the panel state
    pub fn state(&self) -> PanelState {
        self.state.borrow().clone()
    }

    pub fn display_text(&self) -> String {
        self.state.borrow().display_text().to_string()
    }

    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_settled()
    }

    /// A receiver that observes this panel's state changes
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.state.clone()
    }

    /// Wait until the probe settles and return the display text.
    ///
    /// Returns `None` if the probe task ended without publishing a state.
    pub async fn settled(&mut self) -> Option<String> {
        self.state
            .wait_for(PanelState::is_settled)
            .await
            .ok()
            .map(|state| state.display_text().to_string())
    }

    /// Unmount the panel. A probe still in flight will not update any state.
    pub fn unmount(self) {
        debug!("Panel unmounted");
    }
}

impl Drop for StatusPanel {
    fn drop(&mut self) {
        self.unmounted.store(true, Ordering::SeqCst);
    }
}
