//! Localized static strings for the panel

use serde::{Deserialize, Serialize};

/// Display language for the panel's static strings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Every static string the panel renders
#[derive(Debug, PartialEq, Eq)]
pub struct PanelStrings {
    pub heading: &'static str,
    pub label: &'static str,
    /// Shown from mount until the probe settles
    pub placeholder: &'static str,
    /// Shown when the probe fails for any reason
    pub failure: &'static str,
}

const EN: PanelStrings = PanelStrings {
    heading: "Architecture Test",
    label: "Message received from backend:",
    placeholder: "waiting for server response",
    failure: "connection error with backend",
};

const FR: PanelStrings = PanelStrings {
    heading: "Test d'Architecture",
    label: "Message reçu du Backend :",
    placeholder: "En attente du serveur...",
    failure: "❌ Erreur de connexion avec le backend",
};

impl Locale {
    pub fn strings(self) -> &'static PanelStrings {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}
