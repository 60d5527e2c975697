use super::super::super::messages::Message;
use super::super::super::state::{App, StatusLine};
use super::super::Effect;
use crate::settings::{DetectionSource, Resolution, ResolutionChoice, Selection, resolve_autodetect};
use iced::widget::text_editor;
use tracing::{debug, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::EditorAction(action) => self.handle_editor_action(action),
            Message::LanguageSelected(language) => {
                self.apply_selection(Selection::Language(language));
            }
            Message::ResolutionSelected(choice) => {
                self.handle_resolution_selected(choice, &mut effects);
            }
            Message::DisplayQueried(live) => self.handle_display_queried(live),
            Message::ShadersToggled(enabled) => {
                self.apply_selection(Selection::Shaders(enabled));
            }
            Message::SubtitlesToggled(enabled) => {
                self.apply_selection(Selection::Subtitles(enabled));
            }
            Message::SaveRequested => effects.push(Effect::SaveSettings),
            Message::ResetRequested => self.handle_reset(),
            Message::LaunchRequested => effects.push(Effect::LaunchGame),
            Message::ExitRequested => {
                if self.session.is_dirty() {
                    info!("Exiting with unsaved changes");
                }
                effects.push(Effect::Exit);
            }
        }

        effects
    }

    fn handle_editor_action(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        if is_edit && self.session.unavailable_reason().is_some() {
            return;
        }
        self.editor.perform(action);
        if is_edit {
            self.session.text_edited(&self.editor.text());
            self.refresh_selections();
        }
    }

    fn handle_resolution_selected(&mut self, choice: ResolutionChoice, effects: &mut Vec<Effect>) {
        if self.session.unavailable_reason().is_some() {
            return;
        }
        if choice.autodetect {
            debug!("Autodetect selected; querying display");
            self.awaiting_display_query = true;
            effects.push(Effect::QueryDisplay);
        } else {
            self.apply_selection(Selection::display(choice, None));
        }
    }

    fn handle_display_queried(&mut self, live: Option<Resolution>) {
        if !self.awaiting_display_query {
            return;
        }
        self.awaiting_display_query = false;
        let detected = resolve_autodetect(live);
        let status = match detected.source {
            DetectionSource::Live => {
                StatusLine::info(format!("Resolution set to {} (full screen)", detected.resolution))
            }
            DetectionSource::Fallback => StatusLine::error(format!(
                "Could not read the display resolution; using {} (full screen)",
                detected.resolution
            )),
        };
        let applied = self.apply_selection(Selection::Display {
            resolution: detected.resolution,
            windowed: detected.windowed,
        });
        if applied {
            self.status = Some(status);
        }
    }

    fn handle_reset(&mut self) {
        self.session.reset();
        self.awaiting_display_query = false;
        self.refresh_editor();
        self.status = Some(StatusLine::info("Defaults restored. Remember to save!"));
    }

    /// Returns `false` when the session refused the change.
    fn apply_selection(&mut self, selection: Selection) -> bool {
        let applied = self.session.select(&selection);
        if applied {
            self.refresh_editor();
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::settings::{DEFAULT_SETTINGS, Language, RESOLUTION_CHOICES, SettingsSession};
    use std::path::PathBuf;

    fn build_test_app(text: &str) -> App {
        let path = PathBuf::from(format!(
            "/tmp/monkey-launcher-reducer-{}/settings.ini",
            std::process::id()
        ));
        let session = SettingsSession::from_text(path, text);
        let (app, _task) = App::bootstrap(AppConfig::default(), session);
        app
    }

    #[test]
    fn bootstrap_projects_document_and_is_clean() {
        let app = build_test_app(DEFAULT_SETTINGS);
        assert_eq!(app.selections.language, Some(Language::English));
        assert_eq!(app.selections.resolution, Some(RESOLUTION_CHOICES[1]));
        assert!(!app.session.is_dirty());
    }

    #[test]
    fn typed_selection_updates_document_and_editor() {
        let mut app = build_test_app(DEFAULT_SETTINGS);
        let effects = app.reduce(Message::LanguageSelected(Language::German));

        assert!(effects.is_empty());
        assert!(app.session.is_dirty());
        assert_eq!(app.selections.language, Some(Language::German));
        assert!(app.editor.text().contains("language=3"));
    }

    #[test]
    fn autodetect_waits_for_display_query() {
        let mut app = build_test_app(DEFAULT_SETTINGS);
        let effects = app.reduce(Message::ResolutionSelected(RESOLUTION_CHOICES[0]));
        assert_eq!(effects, vec![Effect::QueryDisplay]);
        assert!(!app.session.is_dirty());

        app.reduce(Message::DisplayQueried(Some(Resolution::new(2560, 1440))));
        assert!(app.session.is_dirty());
        assert_eq!(app.selections.resolution, Some(RESOLUTION_CHOICES[3]));
        assert!(app.status.as_ref().is_some_and(|status| !status.is_error));
    }

    #[test]
    fn failed_display_query_uses_fallback_and_says_so() {
        let mut app = build_test_app(DEFAULT_SETTINGS);
        app.reduce(Message::ResolutionSelected(RESOLUTION_CHOICES[0]));
        app.reduce(Message::DisplayQueried(None));

        assert_eq!(app.selections.resolution, Some(RESOLUTION_CHOICES[5]));
        assert!(app.status.as_ref().is_some_and(|status| status.is_error));
    }

    #[test]
    fn stray_display_result_is_ignored() {
        let mut app = build_test_app(DEFAULT_SETTINGS);
        app.reduce(Message::DisplayQueried(Some(Resolution::new(2560, 1440))));
        assert!(!app.session.is_dirty());
        assert_eq!(app.selections.resolution, Some(RESOLUTION_CHOICES[1]));
    }

    #[test]
    fn reset_marks_dirty_and_restores_defaults() {
        let mut app = build_test_app("[display]\nwindowed=1\n");
        app.reduce(Message::ResetRequested);
        assert!(app.session.is_dirty());
        assert_eq!(app.selections.subtitles, Some(true));
        assert_eq!(app.selections.resolution, Some(RESOLUTION_CHOICES[1]));
    }

    #[test]
    fn buttons_map_to_effects() {
        let mut app = build_test_app(DEFAULT_SETTINGS);
        assert_eq!(app.reduce(Message::SaveRequested), vec![Effect::SaveSettings]);
        assert_eq!(app.reduce(Message::LaunchRequested), vec![Effect::LaunchGame]);
        assert_eq!(app.reduce(Message::ExitRequested), vec![Effect::Exit]);
        assert!(!app.session.is_dirty());
    }

    #[test]
    fn unavailable_settings_ignore_typed_changes() {
        let path = std::env::temp_dir()
            .join(format!("monkey-launcher-reducer-missing-{}", std::process::id()))
            .join("settings.ini");
        let (mut app, _task) = App::bootstrap(AppConfig::default(), SettingsSession::open(path));
        let status = app.status.clone();
        assert!(status.as_ref().is_some_and(|status| status.is_error));

        assert!(app.reduce(Message::LanguageSelected(Language::German)).is_empty());
        assert!(app.reduce(Message::ShadersToggled(true)).is_empty());
        assert!(app.reduce(Message::ResolutionSelected(RESOLUTION_CHOICES[0])).is_empty());
        assert!(!app.awaiting_display_query);

        app.awaiting_display_query = true;
        app.reduce(Message::DisplayQueried(Some(Resolution::new(2560, 1440))));
        assert_eq!(app.status, status);
        assert!(!app.session.is_dirty());
        assert_eq!(app.editor.text().trim(), "");
    }
}
