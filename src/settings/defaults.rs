use super::document::ConfigDocument;
use once_cell::sync::Lazy;

/// Factory settings, in the section layout the game writes itself.
pub const DEFAULT_SETTINGS: &str = "\
[localization]
language=0
[display]
windowed=0
shaders=1
resolution=3840x2160
[audio]
music=70
voice=80
sfx=70
subtitles=1
";

static DEFAULT_DOCUMENT: Lazy<ConfigDocument> =
    Lazy::new(|| ConfigDocument::parse(DEFAULT_SETTINGS));

pub fn default_document() -> ConfigDocument {
    DEFAULT_DOCUMENT.clone()
}
