//! Fixed catalog of display modes offered by the resolution picker.

use std::fmt;
use tracing::{info, warn};

/// Resolution used when Autodetect cannot query the display.
pub const AUTODETECT_FALLBACK: Resolution = Resolution::new(1920, 1080);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionChoice {
    pub label: &'static str,
    pub resolution: Resolution,
    pub windowed: bool,
    pub autodetect: bool,
}

impl ResolutionChoice {
    const fn fixed(label: &'static str, width: u32, height: u32, windowed: bool) -> Self {
        ResolutionChoice {
            label,
            resolution: Resolution::new(width, height),
            windowed,
            autodetect: false,
        }
    }

    /// Stored `(resolution, windowed)` pair, `None` for Autodetect.
    pub fn to_fields(&self) -> Option<(String, bool)> {
        if self.autodetect {
            None
        } else {
            Some((self.resolution.to_string(), self.windowed))
        }
    }
}

impl fmt::Display for ResolutionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Index 0 is Autodetect; the rest go from largest to smallest, full screen
/// before windowed. Picker indices depend on this order.
pub const RESOLUTION_CHOICES: [ResolutionChoice; 7] = [
    ResolutionChoice {
        label: "Autodetect/Recommend Resolution",
        resolution: AUTODETECT_FALLBACK,
        windowed: false,
        autodetect: true,
    },
    ResolutionChoice::fixed("4K UHD  - Full Screen (3840x2160)", 3840, 2160, false),
    ResolutionChoice::fixed("4K UHD  - Windowed    (3840x2160)", 3840, 2160, true),
    ResolutionChoice::fixed("QHD/2K  - Full Screen (2560x1440)", 2560, 1440, false),
    ResolutionChoice::fixed("QHD/2K  - Windowed    (2560x1440)", 2560, 1440, true),
    ResolutionChoice::fixed("Full HD - Full Screen (1920x1080)", 1920, 1080, false),
    ResolutionChoice::fixed("Full HD - Windowed    (1920x1080)", 1920, 1080, true),
];

/// Exact lookup of a stored pair. Autodetect never matches.
pub fn match_choice(resolution: &str, windowed: bool) -> Option<ResolutionChoice> {
    RESOLUTION_CHOICES
        .iter()
        .filter(|choice| !choice.autodetect)
        .find(|choice| choice.windowed == windowed && choice.resolution.to_string() == resolution)
        .copied()
}

/// Where an autodetected resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autodetected {
    pub resolution: String,
    pub windowed: bool,
    pub source: DetectionSource,
}

/// Autodetect always lands in full screen. A failed display query falls back
/// to [`AUTODETECT_FALLBACK`] and says so through [`DetectionSource::Fallback`].
pub fn resolve_autodetect(live: Option<Resolution>) -> Autodetected {
    match live {
        Some(resolution) => {
            info!(%resolution, "Autodetected display resolution");
            Autodetected {
                resolution: resolution.to_string(),
                windowed: false,
                source: DetectionSource::Live,
            }
        }
        None => {
            warn!(
                fallback = %AUTODETECT_FALLBACK,
                "Display query failed; using fallback resolution"
            );
            Autodetected {
                resolution: AUTODETECT_FALLBACK.to_string(),
                windowed: false,
                source: DetectionSource::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        assert!(RESOLUTION_CHOICES[0].autodetect);
        let pairs: Vec<_> = RESOLUTION_CHOICES[1..]
            .iter()
            .filter_map(ResolutionChoice::to_fields)
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("3840x2160".to_string(), false),
                ("3840x2160".to_string(), true),
                ("2560x1440".to_string(), false),
                ("2560x1440".to_string(), true),
                ("1920x1080".to_string(), false),
                ("1920x1080".to_string(), true),
            ]
        );
    }

    #[test]
    fn matches_full_hd_variants() {
        assert_eq!(match_choice("1920x1080", false), Some(RESOLUTION_CHOICES[5]));
        assert_eq!(match_choice("1920x1080", true), Some(RESOLUTION_CHOICES[6]));
    }

    #[test]
    fn unknown_resolution_has_no_match() {
        assert_eq!(match_choice("1280x720", false), None);
        assert_eq!(match_choice("1920X1080", false), None);
        assert_eq!(match_choice(" 1920x1080", false), None);
    }

    #[test]
    fn autodetect_has_no_stored_fields() {
        assert_eq!(RESOLUTION_CHOICES[0].to_fields(), None);
    }

    #[test]
    fn autodetect_uses_live_resolution_in_full_screen() {
        let detected = resolve_autodetect(Some(Resolution::new(2560, 1440)));
        assert_eq!(detected.resolution, "2560x1440");
        assert!(!detected.windowed);
        assert_eq!(detected.source, DetectionSource::Live);
    }

    #[test]
    fn autodetect_falls_back_to_full_hd() {
        let detected = resolve_autodetect(None);
        assert_eq!(detected.resolution, "1920x1080");
        assert!(!detected.windowed);
        assert_eq!(detected.source, DetectionSource::Fallback);
    }
}
