mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use crate::settings::SettingsSession;
use iced::{Size, Theme, window};

/// Helper to launch the app with the loaded settings.
pub fn run_app(config: AppConfig, session: SettingsSession) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(state::WINDOW_WIDTH, state::WINDOW_HEIGHT),
        resizable: false,
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, session))
}
