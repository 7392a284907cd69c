use std::sync::Arc;

use parking_lot::Mutex;

use crate::constants::{DARK_CLASS, DARK_MODE_KEY};
use crate::repositories::preferences::PreferenceStore;
use crate::web::document::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// The site-wide light/dark context. Views receive its `mode()`; only `toggle` writes.
pub struct ThemeState {
    mode: Mutex<ThemeMode>,
    store: Arc<dyn PreferenceStore>,
    document: Arc<dyn Document>,
}

impl ThemeState {
    /// Reads the persisted preference (light when absent) and applies it to the document root.
    pub fn init(store: Arc<dyn PreferenceStore>, document: Arc<dyn Document>) -> Self {
        let mode = match store.get(DARK_MODE_KEY).as_deref() {
            Some("true") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };
        document.set_root_class(DARK_CLASS, mode.is_dark());
        tracing::debug!(?mode, "theme initialised");

        ThemeState { mode: Mutex::new(mode), store, document }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.lock()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flips the theme, re-applies the root class and writes the preference through.
    pub fn toggle(&self) -> ThemeMode {
        let mode = {
            let mut mode = self.mode.lock();
            *mode = mode.flipped();
            *mode
        };

        self.document.set_root_class(DARK_CLASS, mode.is_dark());
        if let Err(e) = self.store.set(DARK_MODE_KEY, if mode.is_dark() { "true" } else { "false" }) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
        mode
    }
}
