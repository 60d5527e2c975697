//! Configuration for the launcher itself.
//!
//! Loaded from `conf/launcher.toml` if present. Any missing or invalid entries
//! fall back to defaults so the launcher can still start. This is unrelated to
//! the game's `settings.ini`, which lives in [`crate::settings`].

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel, ThemeMode};
