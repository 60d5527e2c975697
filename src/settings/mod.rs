//! Settings model for the game's `settings.ini`.
//!
//! The raw document is the single source of truth. Widgets read a typed
//! projection of it and write back through [`Selection`]s; the editor reads and
//! writes the raw text. Only the save path normalizes line endings.

mod catalog;
mod defaults;
mod document;
mod encoding;
mod error;
mod session;
mod store;
mod tracker;

pub use catalog::{
    DetectionSource, RESOLUTION_CHOICES, Resolution, ResolutionChoice, resolve_autodetect,
};
#[cfg(test)]
pub use defaults::DEFAULT_SETTINGS;
pub use error::{SettingsError, SettingsResult};
pub use session::SettingsSession;
pub use store::{LANGUAGES, Language, Selection, TypedSettings};
