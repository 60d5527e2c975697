//! Entry point for the Monkey Island Special Edition launcher.
//!
//! Responsibilities here are intentionally minimal:
//! - Load launcher configuration from `conf/launcher.toml`.
//! - Locate and read the game's `settings.ini`.
//! - Launch the GUI with the loaded settings.

mod app;
mod config;
mod launch;
mod paths;
mod settings;

use crate::app::run_app;
use crate::config::load_config;
use crate::paths::resolve_settings_path;
use crate::settings::SettingsSession;
use anyhow::{Context, Result};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/launcher.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        show_fatal_error(&err);
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        theme = %config.theme,
        app_id = config.steam_app_id,
        "Starting launcher"
    );

    let settings_path =
        resolve_settings_path(&config).context("Could not locate the game's settings file")?;
    let session = SettingsSession::open(settings_path);
    run_app(config, session).context("Failed to start the GUI")?;
    Ok(())
}

/// Startup failures happen before any window exists, so they get a native
/// message box.
fn show_fatal_error(err: &anyhow::Error) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Monkey Launcher")
        .set_description(fatal_description(err))
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn fatal_description(err: &anyhow::Error) -> String {
    format!("{err:#}\n\nThe launcher will now close.")
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsError;

    #[test]
    fn fatal_description_names_the_cause() {
        let err = anyhow::Error::new(SettingsError::PathResolution)
            .context("Could not locate the game's settings file");
        let description = fatal_description(&err);
        assert!(description.starts_with(
            "Could not locate the game's settings file: no per-user configuration directory"
        ));
        assert!(description.ends_with("The launcher will now close."));
    }
}
