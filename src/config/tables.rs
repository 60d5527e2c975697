use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `launcher.toml`.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    settings: SettingsFileConfig,
    #[serde(default)]
    launch: LaunchConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            log_level: tables.logging.log_level,
            settings_path: tables.settings.path,
            steam_app_id: tables.launch.steam_app_id,
            steam_executable: tables.launch.steam_executable,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct SettingsFileConfig {
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LaunchConfig {
    #[serde(default = "defaults::default_steam_app_id")]
    steam_app_id: u32,
    #[serde(default)]
    steam_executable: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            steam_app_id: defaults::default_steam_app_id(),
            steam_executable: None,
        }
    }
}
