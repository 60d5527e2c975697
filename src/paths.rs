//! Where the game keeps its settings.

use crate::config::AppConfig;
use crate::settings::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::info;

/// Location below the per-user roaming config directory.
pub const SETTINGS_RELATIVE_PATH: &str =
    "LucasArts/The Secret of Monkey Island Special Edition/settings.ini";

/// Resolve the settings file, honoring a configured override.
pub fn resolve_settings_path(config: &AppConfig) -> SettingsResult<PathBuf> {
    if let Some(path) = config
        .settings_path
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty())
    {
        info!(path, "Using settings path from launcher config");
        return Ok(PathBuf::from(path));
    }
    settings_path_in(dirs::config_dir())
}

fn settings_path_in(config_dir: Option<PathBuf>) -> SettingsResult<PathBuf> {
    let dir = config_dir.ok_or(SettingsError::PathResolution)?;
    let path = dir.join(Path::new(SETTINGS_RELATIVE_PATH));
    info!(path = %path.display(), "Resolved per-user settings path");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let config = AppConfig {
            settings_path: Some("  /games/monkey/settings.ini ".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_settings_path(&config).expect("override"),
            PathBuf::from("/games/monkey/settings.ini")
        );
    }

    #[test]
    fn joins_relative_path_onto_config_dir() {
        let path = settings_path_in(Some(PathBuf::from("/home/guybrush/.config"))).expect("path");
        assert!(path.starts_with("/home/guybrush/.config/LucasArts"));
        assert!(path.ends_with("settings.ini"));
    }

    #[test]
    fn missing_config_dir_is_a_resolution_failure() {
        assert!(matches!(
            settings_path_in(None),
            Err(SettingsError::PathResolution)
        ));
    }
}
