//! Persist and restore the dark-mode preference across sessions.
//!
//! A small JSON file in the platform config dir (via the `directories`
//! crate). When no file exists, the OS light/dark preference applies.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

const FILE_NAME: &str = "theme.json";

/// The one persisted user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub dark: bool,
}

impl ThemePrefs {
    /// Load the saved preference, or `None` if the file doesn't exist or
    /// is invalid.
    pub fn load() -> Option<Self> {
        prefs_path().and_then(|path| Self::load_from(&path))
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Effective dark-mode flag: the saved preference when present,
    /// otherwise the OS preference (detection failure defaults to dark).
    pub fn effective() -> bool {
        match Self::load() {
            Some(prefs) => prefs.dark,
            None => system_prefers_dark(),
        }
    }

    /// Flip the effective flag and persist it. Returns the new flag.
    pub fn toggle() -> bool {
        let dark = !Self::effective();
        ThemePrefs { dark }.save();
        dark
    }

    /// Save to disk. Errors are logged but not propagated.
    pub fn save(&self) {
        if let Some(path) = prefs_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    warn!("Failed to save theme preference: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize theme preference: {e}"),
        }
    }
}

/// OS-level preference via the `dark-light` crate.
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

/// Path to the theme preference file.
fn prefs_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "rpcs3-roulette")
        .map(|dirs| dirs.config_dir().join(FILE_NAME))
}
