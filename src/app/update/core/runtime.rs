use super::super::super::messages::Message;
use super::super::super::state::{App, StatusLine};
use super::super::Effect;
use crate::launch::launch_game;
use crate::settings::Resolution;
use display_info::DisplayInfo;
use iced::{Size, Task};
use tracing::{debug, error, info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveSettings => {
                self.save_settings();
                Task::none()
            }
            Effect::QueryDisplay => Task::perform(
                async { query_primary_display() },
                Message::DisplayQueried,
            ),
            Effect::LaunchGame => {
                self.launch();
                Task::none()
            }
            Effect::Exit => iced::exit(),
        }
    }

    fn save_settings(&mut self) {
        let path = self.session.path().display().to_string();
        self.status = Some(match self.session.save() {
            Ok(()) => {
                info!(%path, "Saved settings");
                StatusLine::info(format!("Saved {path}"))
            }
            Err(err) => {
                error!(%path, "Failed to save settings: {err}");
                StatusLine::error(format!("Save failed: {err}"))
            }
        });
    }

    fn launch(&mut self) {
        self.status = Some(match launch_game(&self.config) {
            Ok(pid) => {
                info!(pid, app_id = self.config.steam_app_id, "Launch requested");
                StatusLine::info("Launching the game through Steam")
            }
            Err(err) => {
                error!("Failed to launch game: {err}");
                StatusLine::error(format!("Launch failed: {err}"))
            }
        });
    }
}

/// Physical size of the primary display, or of the first one reported when
/// none is marked primary. Any failure resolves to `None`.
fn query_primary_display() -> Option<Resolution> {
    let displays = match DisplayInfo::all() {
        Ok(displays) => displays,
        Err(err) => {
            warn!("Display query failed: {err}");
            return None;
        }
    };
    let primary = displays
        .iter()
        .find(|display| display.is_primary)
        .or_else(|| displays.first())?;
    debug!(
        width = primary.width,
        height = primary.height,
        scale = primary.scale_factor,
        "Queried primary display"
    );
    physical_resolution(
        Size::new(primary.width as f32, primary.height as f32),
        reported_scale(primary.scale_factor),
    )
}

/// Display sizes come back in points on macOS and in pixels elsewhere.
fn reported_scale(scale_factor: f32) -> f32 {
    if cfg!(target_os = "macos") {
        scale_factor
    } else {
        1.0
    }
}

fn physical_resolution(logical: Size, scale: f32) -> Option<Resolution> {
    let width = (logical.width * scale).round();
    let height = (logical.height * scale).round();
    if width >= 1.0 && height >= 1.0 {
        Some(Resolution::new(width as u32, height as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_logical_monitor_size() {
        assert_eq!(
            physical_resolution(Size::new(1280.0, 720.0), 1.5),
            Some(Resolution::new(1920, 1080))
        );
        assert_eq!(
            physical_resolution(Size::new(2560.0, 1440.0), 1.0),
            Some(Resolution::new(2560, 1440))
        );
    }

    #[test]
    fn degenerate_display_size_is_a_failed_query() {
        assert_eq!(physical_resolution(Size::new(0.0, 0.0), 1.0), None);
        assert_eq!(physical_resolution(Size::new(f32::NAN, 1080.0), 1.0), None);
    }

    #[test]
    fn display_scale_applies_only_to_point_sizes() {
        let expected = if cfg!(target_os = "macos") { 2.0 } else { 1.0 };
        assert_eq!(reported_scale(2.0), expected);
    }
}
