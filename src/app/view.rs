use super::messages::Message;
use super::state::App;
use crate::settings::{LANGUAGES, RESOLUTION_CHOICES};
use iced::alignment::Vertical;
use iced::widget::{
    Column, button, checkbox, column, container, horizontal_space, pick_list, row, text,
    text_editor,
};
use iced::{Color, Element, Font, Length};

const WARNING_COLOR: Color = Color::from_rgb(0.85, 0.15, 0.15);
const CONTROLS_WIDTH: f32 = 300.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let available = self.session.unavailable_reason().is_none();

        let mut editor = text_editor(&self.editor)
            .font(Font::MONOSPACE)
            .height(Length::Fill);
        if available {
            editor = editor.on_action(Message::EditorAction);
        }

        let path_label = text(format!("File: {}", self.session.path().display())).size(12);
        let body = row![
            column![path_label, editor]
                .spacing(6)
                .width(Length::Fill),
            self.controls_panel()
        ]
        .spacing(12)
        .height(Length::Fill);

        container(column![body, self.status_bar(), self.button_bar()].spacing(10))
            .padding(12)
            .into()
    }

    /// Pick lists stay interactive while the settings are unavailable; the
    /// reducer drops their selections.
    fn controls_panel(&self) -> Element<'_, Message> {
        let available = self.session.unavailable_reason().is_none();
        let language_picker = pick_list(
            LANGUAGES,
            self.selections.language,
            Message::LanguageSelected,
        )
        .placeholder("Unknown language")
        .width(Length::Fill);

        let resolution_picker = pick_list(
            RESOLUTION_CHOICES,
            self.selections.resolution,
            Message::ResolutionSelected,
        )
        .placeholder(if self.awaiting_display_query {
            "Detecting display..."
        } else {
            "Custom resolution"
        })
        .width(Length::Fill);

        let shaders = checkbox(
            flag_label("Shaders", self.selections.shaders),
            self.selections.shaders.unwrap_or(false),
        )
        .on_toggle_maybe(available.then_some(Message::ShadersToggled));
        let subtitles = checkbox(
            flag_label("Subtitles", self.selections.subtitles),
            self.selections.subtitles.unwrap_or(false),
        )
        .on_toggle_maybe(available.then_some(Message::SubtitlesToggled));

        let mut panel: Column<'_, Message> = column![
            text("Language"),
            language_picker,
            text("Resolution"),
            resolution_picker,
            shaders,
            subtitles,
        ]
        .spacing(8)
        .width(Length::Fixed(CONTROLS_WIDTH));

        if self.session.is_dirty() {
            panel = panel.push(text("Remember to save!").color(WARNING_COLOR));
        }

        panel.into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        match &self.status {
            Some(status) if status.is_error => {
                text(status.text.as_str()).color(WARNING_COLOR).into()
            }
            Some(status) => text(status.text.as_str()).into(),
            None => text("").into(),
        }
    }

    fn button_bar(&self) -> Element<'_, Message> {
        let available = self.session.unavailable_reason().is_none();
        row![
            button("Launch Game").on_press(Message::LaunchRequested),
            horizontal_space(),
            button("Save").on_press_maybe(available.then_some(Message::SaveRequested)),
            button("Reset to Defaults").on_press(Message::ResetRequested),
            button("Exit").on_press(Message::ExitRequested),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .into()
    }
}

fn flag_label(name: &str, value: Option<bool>) -> String {
    match value {
        Some(_) => name.to_string(),
        None => format!("{name} (not set)"),
    }
}
