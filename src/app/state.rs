use crate::config::AppConfig;
use crate::settings::{SettingsSession, TypedSettings};
use iced::Task;
use iced::widget::text_editor;
use tracing::info;

use super::messages::Message;

/// Fixed window size, matching the layout in `view`.
pub(crate) const WINDOW_WIDTH: f32 = 792.0;
pub(crate) const WINDOW_HEIGHT: f32 = 480.0;

/// One-line feedback shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

impl StatusLine {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        StatusLine {
            text: text.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        StatusLine {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Application state. The session owns the settings; everything else here is
/// presentation.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) session: SettingsSession,
    pub(super) editor: text_editor::Content,
    pub(super) selections: TypedSettings,
    pub(super) awaiting_display_query: bool,
    pub(super) status: Option<StatusLine>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig, session: SettingsSession) -> (App, Task<Message>) {
        let mut app = App {
            editor: text_editor::Content::with_text(&session.editable_text()),
            selections: TypedSettings::default(),
            config,
            session,
            awaiting_display_query: false,
            status: None,
        };
        app.refresh_selections();
        match app.session.unavailable_reason() {
            Some(reason) => {
                app.status = Some(StatusLine::error(format!(
                    "Settings unavailable ({reason}). Reset to defaults to recreate them."
                )));
            }
            None => {
                info!(
                    path = %app.session.path().display(),
                    selections = ?app.selections,
                    "Settings loaded"
                );
            }
        }
        (app, Task::none())
    }

    pub(super) fn title(&self) -> String {
        format!("Monkey Launcher - v{}", env!("CARGO_PKG_VERSION"))
    }

    /// Recompute the typed view after any document change.
    pub(super) fn refresh_selections(&mut self) {
        self.selections = self.session.selections();
    }

    /// Push the document back into the editor after a change that did not
    /// originate there.
    pub(super) fn refresh_editor(&mut self) {
        self.editor = text_editor::Content::with_text(&self.session.editable_text());
        self.refresh_selections();
    }
}
