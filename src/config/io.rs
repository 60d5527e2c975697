use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded launcher config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.steam_app_id, 32360);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn tables_override_defaults() {
        let config = parse_config(
            r#"
[appearance]
theme = "night"

[logging]
log_level = "debug"

[settings]
path = "/tmp/settings.ini"

[launch]
steam_executable = "/usr/bin/steam"
"#,
        )
        .expect("config parses");
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.settings_path.as_deref(), Some("/tmp/settings.ini"));
        assert_eq!(config.steam_executable.as_deref(), Some("/usr/bin/steam"));
        assert_eq!(config.steam_app_id, 32360);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "monkey-launcher-config-{}/absent.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
