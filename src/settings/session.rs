//! The state object the UI dispatcher owns: where the settings live, what they
//! currently say, and whether that has been saved.

use super::defaults::default_document;
use super::error::{SettingsError, SettingsResult};
use super::store::{Selection, SettingsStore, TypedSettings, read_settings};
use super::tracker::ChangeTracker;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub enum SettingsState {
    Ready(SettingsStore),
    /// The file could not be read. Nothing is editable or saveable until
    /// defaults are restored.
    Unavailable { reason: String },
}

#[derive(Debug)]
pub struct SettingsSession {
    path: PathBuf,
    state: SettingsState,
    tracker: ChangeTracker,
}

impl SettingsSession {
    /// Read `path` and build a clean session from it.
    pub fn open(path: PathBuf) -> Self {
        let state = match read_settings(&path) {
            Ok((text, encoding)) => {
                SettingsState::Ready(SettingsStore::load(&text).with_encoding(encoding))
            }
            Err(err) => {
                warn!(path = %path.display(), "Settings unavailable: {err}");
                SettingsState::Unavailable {
                    reason: err.to_string(),
                }
            }
        };
        SettingsSession {
            path,
            state,
            tracker: ChangeTracker::Clean,
        }
    }

    pub fn from_text(path: PathBuf, text: &str) -> Self {
        SettingsSession {
            path,
            state: SettingsState::Ready(SettingsStore::load(text)),
            tracker: ChangeTracker::Clean,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            SettingsState::Ready(_) => None,
            SettingsState::Unavailable { reason } => Some(reason.as_str()),
        }
    }

    pub fn store(&self) -> Option<&SettingsStore> {
        match &self.state {
            SettingsState::Ready(store) => Some(store),
            SettingsState::Unavailable { .. } => None,
        }
    }

    pub fn selections(&self) -> TypedSettings {
        self.store()
            .map(SettingsStore::selections)
            .unwrap_or_default()
    }

    /// CRLF text for the editor; empty while unavailable.
    pub fn editable_text(&self) -> String {
        self.store()
            .map(SettingsStore::to_editable)
            .unwrap_or_default()
    }

    /// The user typed into the raw editor.
    pub fn text_edited(&mut self, text: &str) {
        if let SettingsState::Ready(store) = &mut self.state {
            store.reload(text);
            self.tracker.mark_dirty();
        }
    }

    /// A typed widget changed. Returns `false` when there is nothing to apply
    /// it to.
    pub fn select(&mut self, selection: &Selection) -> bool {
        match &mut self.state {
            SettingsState::Ready(store) => {
                store.apply(selection);
                self.tracker.mark_dirty();
                true
            }
            SettingsState::Unavailable { .. } => false,
        }
    }

    pub fn save(&mut self) -> SettingsResult<()> {
        let result = match &self.state {
            SettingsState::Ready(store) => store.save(&self.path),
            SettingsState::Unavailable { .. } => Err(SettingsError::Unavailable),
        };
        self.tracker.record_save(&result);
        result
    }

    pub fn reset(&mut self) {
        info!("Restoring default settings");
        self.state = SettingsState::Ready(SettingsStore::from_document(default_document()));
        self.tracker.mark_dirty();
    }
}
