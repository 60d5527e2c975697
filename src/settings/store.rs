//! Typed projection of the recognized keys and the file I/O around it.
//!
//! The document stays the system of record: [`SettingsStore::selections`] is
//! recomputed on demand and every typed change goes back through
//! [`SettingsStore::apply`].

use super::catalog::{Resolution, ResolutionChoice, match_choice, resolve_autodetect};
use super::document::{ConfigDocument, normalize_newlines};
use super::encoding::TextEncoding;
use super::error::{SettingsError, SettingsResult};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Keys projected onto widgets, with the section each one lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Language,
    Windowed,
    Shaders,
    Resolution,
    Subtitles,
}

impl SettingKey {
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Language => "language",
            SettingKey::Windowed => "windowed",
            SettingKey::Shaders => "shaders",
            SettingKey::Resolution => "resolution",
            SettingKey::Subtitles => "subtitles",
        }
    }

    pub fn section(self) -> &'static str {
        match self {
            SettingKey::Language => "localization",
            SettingKey::Windowed | SettingKey::Shaders | SettingKey::Resolution => "display",
            SettingKey::Subtitles => "audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
    Italian,
    German,
    Spanish,
}

/// Ordered by the digit the game stores.
pub const LANGUAGES: [Language; 5] = [
    Language::English,
    Language::French,
    Language::Italian,
    Language::German,
    Language::Spanish,
];

impl Language {
    pub fn index(self) -> u8 {
        match self {
            Language::English => 0,
            Language::French => 1,
            Language::Italian => 2,
            Language::German => 3,
            Language::Spanish => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        LANGUAGES.get(index as usize).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Language::English => "English",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::German => "German",
            Language::Spanish => "Spanish",
        };
        write!(f, "{}", label)
    }
}

/// Best-effort view of the recognized keys. `None` means absent or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedSettings {
    pub language: Option<Language>,
    pub resolution: Option<ResolutionChoice>,
    pub shaders: Option<bool>,
    pub subtitles: Option<bool>,
}

/// A typed change coming from a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Language(Language),
    /// Written as the `resolution` and `windowed` pair.
    Display {
        resolution: String,
        windowed: bool,
    },
    Shaders(bool),
    Subtitles(bool),
}

impl Selection {
    /// Resolve a catalog row into the pair it stores. `live` is only consulted
    /// for Autodetect.
    pub fn display(choice: ResolutionChoice, live: Option<Resolution>) -> Self {
        match choice.to_fields() {
            Some((resolution, windowed)) => Selection::Display {
                resolution,
                windowed,
            },
            None => {
                let detected = resolve_autodetect(live);
                Selection::Display {
                    resolution: detected.resolution,
                    windowed: detected.windowed,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    document: ConfigDocument,
    /// How the file was decoded; saving encodes the same way.
    encoding: TextEncoding,
}

impl SettingsStore {
    pub fn load(text: &str) -> Self {
        let document = ConfigDocument::parse(text);
        debug!(
            sections = document.sections().len(),
            "Parsed settings document"
        );
        SettingsStore {
            document,
            encoding: TextEncoding::default(),
        }
    }

    pub fn from_document(document: ConfigDocument) -> Self {
        SettingsStore {
            document,
            encoding: TextEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Reparse edited text, keeping the on-disk encoding.
    pub fn reload(&mut self, text: &str) {
        let encoding = self.encoding;
        *self = SettingsStore::load(text).with_encoding(encoding);
    }

    pub fn selections(&self) -> TypedSettings {
        let windowed = self.flag(SettingKey::Windowed);
        let resolution = self
            .raw(SettingKey::Resolution)
            .map(str::trim)
            .filter(|value| !value.is_empty());

        TypedSettings {
            language: self
                .single_char(SettingKey::Language)
                .and_then(|ch| ch.to_digit(10))
                .and_then(|digit| Language::from_index(digit as u8)),
            resolution: match (resolution, windowed) {
                (Some(resolution), Some(windowed)) => match_choice(resolution, windowed),
                _ => None,
            },
            shaders: self.flag(SettingKey::Shaders),
            subtitles: self.flag(SettingKey::Subtitles),
        }
    }

    pub fn apply(&mut self, selection: &Selection) {
        match selection {
            Selection::Language(language) => {
                self.write_key(SettingKey::Language, &language.index().to_string());
            }
            Selection::Display {
                resolution,
                windowed,
            } => {
                self.write_key(SettingKey::Resolution, resolution);
                self.write_key(SettingKey::Windowed, flag_text(*windowed));
            }
            Selection::Shaders(enabled) => {
                self.write_key(SettingKey::Shaders, flag_text(*enabled));
            }
            Selection::Subtitles(enabled) => {
                self.write_key(SettingKey::Subtitles, flag_text(*enabled));
            }
        }
        debug!(?selection, "Applied selection to settings document");
    }

    pub fn to_editable(&self) -> String {
        self.document.to_editable()
    }

    #[cfg(test)]
    pub fn to_disk(&self) -> String {
        self.document.to_disk()
    }

    /// Normalize and write the current document.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        write_settings(path, &self.to_editable(), self.encoding)
    }

    /// Home section first, then the first occurrence anywhere.
    fn raw(&self, key: SettingKey) -> Option<&str> {
        self.document
            .get(key.section(), key.name())
            .or_else(|| self.document.find(key.name()))
    }

    /// Flag fields are one character wide. Wider values are out of contract:
    /// only the first character is read, and the overflow is logged.
    fn single_char(&self, key: SettingKey) -> Option<char> {
        let value = self.raw(key)?;
        let mut chars = value.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            warn!(
                key = key.name(),
                value, "Value is wider than one character; reading the first character only"
            );
        }
        Some(first)
    }

    fn flag(&self, key: SettingKey) -> Option<bool> {
        match self.single_char(key)? {
            '1' => Some(true),
            '0' => Some(false),
            other => {
                debug!(key = key.name(), value = %other, "Ignoring malformed flag");
                None
            }
        }
    }

    fn write_key(&mut self, key: SettingKey, value: &str) {
        let in_home = self.document.get(key.section(), key.name()).is_some();
        if !in_home && self.document.set_existing(key.name(), value) {
            return;
        }
        self.document.set(key.section(), key.name(), value);
    }
}

fn flag_text(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Read the settings file. A failure is reported as such, never as content.
/// Bytes that are not UTF-8 are decoded as Latin-1 rather than rejected.
pub fn read_settings(path: &Path) -> SettingsResult<(String, TextEncoding)> {
    let bytes = fs::read(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let len = bytes.len();
    let (text, encoding) = TextEncoding::decode(bytes);
    if encoding == TextEncoding::Latin1 {
        warn!(path = %path.display(), "Settings file is not UTF-8; decoding as Latin-1");
    }
    info!(path = %path.display(), bytes = len, ?encoding, "Read settings file");
    Ok((text, encoding))
}

/// Normalize line endings and write. This is the only place normalization
/// happens.
pub fn write_settings(path: &Path, text: &str, encoding: TextEncoding) -> SettingsResult<()> {
    let to_error = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    let bytes = encoding.encode(&normalize_newlines(text));
    fs::write(path, &bytes).map_err(to_error)?;
    info!(path = %path.display(), bytes = bytes.len(), ?encoding, "Wrote settings file");
    Ok(())
}
