//! Theme preference service.
//!
//! # Invariants
//! - The theme record lives under its own key and is loaded and written
//!   independently of the dashboard record.
//! - Write failures are logged; the in-memory value stays authoritative.

use crate::model::dashboard::Theme;
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::snapshot_repo::{load_theme, write_theme};
use log::{info, warn};

/// Light/dark preference backed by a key-value record.
pub struct ThemeService<S: KeyValueStore> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeService<S> {
    /// Loads the stored preference, `Theme::Dark` when absent or invalid.
    pub fn load(storage: S) -> Self {
        let theme = load_theme(&storage);
        Self { storage, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        match write_theme(&self.storage, theme) {
            Ok(()) => info!("event=theme_set module=theme status=ok theme={}", theme.as_str()),
            Err(err) => warn!(
                "event=theme_set module=theme status=error theme={} error={}",
                theme.as_str(),
                err
            ),
        }
    }

    /// Switches light <-> dark and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }
}
