//! Starts the game through the Steam client. Nothing here touches settings.

use crate::config::AppConfig;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub fn launch_url(app_id: u32) -> String {
    format!("steam://launch/{app_id}")
}

/// Program and arguments that open `url`.
pub fn launch_command(config: &AppConfig) -> (String, Vec<String>) {
    let url = launch_url(config.steam_app_id);
    if let Some(steam) = config
        .steam_executable
        .as_deref()
        .filter(|path| !path.trim().is_empty())
    {
        return (steam.to_string(), vec![url]);
    }
    platform_opener(url)
}

#[cfg(target_os = "windows")]
fn platform_opener(url: String) -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new(), url],
    )
}

#[cfg(target_os = "macos")]
fn platform_opener(url: String) -> (String, Vec<String>) {
    ("open".to_string(), vec![url])
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_opener(url: String) -> (String, Vec<String>) {
    ("xdg-open".to_string(), vec![url])
}

/// Spawn the launch command and return its pid without waiting for the game.
pub fn launch_game(config: &AppConfig) -> Result<u32, LaunchError> {
    let (program, args) = launch_command(config);
    info!(%program, ?args, "Launching game");
    let child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn { program, source })?;
    let pid = child.id();
    reap(child);
    Ok(pid)
}

/// Wait for the launch command on a detached thread so it is collected once
/// it exits instead of lingering until the launcher closes.
fn reap(mut child: Child) -> Option<JoinHandle<Option<ExitStatus>>> {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name("launch-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                debug!(pid, %status, "Launch command exited");
                Some(status)
            }
            Err(err) => {
                warn!(pid, "Failed to wait for launch command: {err}");
                None
            }
        });
    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            warn!(pid, "Could not start reaper thread: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_app_id() {
        assert_eq!(launch_url(32360), "steam://launch/32360");
    }

    #[test]
    fn explicit_steam_executable_gets_the_url() {
        let config = AppConfig {
            steam_executable: Some("/opt/steam/steam".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            launch_command(&config),
            (
                "/opt/steam/steam".to_string(),
                vec!["steam://launch/32360".to_string()]
            )
        );
    }

    #[test]
    fn platform_opener_receives_the_url() {
        let (_, args) = launch_command(&AppConfig::default());
        assert_eq!(args.last().map(String::as_str), Some("steam://launch/32360"));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let config = AppConfig {
            steam_executable: Some("/nonexistent/monkey-launcher/steam".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            launch_game(&config),
            Err(LaunchError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn finished_launch_command_is_collected() {
        let child = Command::new("true").spawn().expect("spawn true");
        let handle = reap(child).expect("reaper thread");
        let status = handle.join().expect("join reaper");
        assert!(status.is_some_and(|status| status.success()));
    }

    #[cfg(unix)]
    #[test]
    fn successful_launch_reports_pid() {
        let config = AppConfig {
            steam_executable: Some("true".to_string()),
            ..AppConfig::default()
        };
        assert!(launch_game(&config).is_ok_and(|pid| pid > 0));
    }
}
