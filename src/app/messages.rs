use crate::settings::{Language, Resolution, ResolutionChoice};
use iced::widget::text_editor;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    EditorAction(text_editor::Action),
    LanguageSelected(Language),
    ResolutionSelected(ResolutionChoice),
    /// Result of the live display query started for Autodetect.
    DisplayQueried(Option<Resolution>),
    ShadersToggled(bool),
    SubtitlesToggled(bool),
    SaveRequested,
    ResetRequested,
    LaunchRequested,
    ExitRequested,
}
