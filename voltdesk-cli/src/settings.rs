//! Console settings, persisted as JSON in the config directory.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voltdesk_lib::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_SIBLING_COUNT};

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-tunable console behaviour.
///
/// Every field falls back to its default individually, so older or partial
/// settings files keep working.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Records per page.
    pub page_size: u32,
    /// Sizes offered by the page size selector.
    pub page_size_options: Vec<u32>,
    /// Pages shown next to the current one.
    pub sibling_count: u32,
    /// Show First/Last jump buttons.
    pub show_edges: bool,
    /// Hide numbered page buttons when the terminal is narrower than this.
    pub compact_below: u16,
    /// Simulated backend latency.
    pub latency_ms: u64,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            sibling_count: DEFAULT_SIBLING_COUNT,
            show_edges: true,
            compact_below: 80,
            latency_ms: 250,
        }
    }
}

impl ConsoleSettings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings: Self = serde_json::from_str(&raw)?;
        Ok(settings.sanitized())
    }

    /// Write settings to `path`, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    /// Replace unusable values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.page_size == 0 {
            self.page_size = defaults.page_size;
        }
        self.page_size_options.retain(|size| *size > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
