//! Quick-setting presets for common observing targets.
//!
//! Each preset maps to a recommended exit-pupil range. The table is static
//! reference data and does not depend on the calculator.

use crate::input::is_positive_finite;
use crate::telescope::TelescopeConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a preset identifier is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown quick setting '{0}' (expected planetary, lunar or deepSky)")]
    Unknown(String),
}

/// Observing target a preset is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum QuickSetting {
    /// Planets: high power, small exit pupil
    Planetary,
    /// The Moon: medium power
    Lunar,
    /// Galaxies and nebulae: low power, large exit pupil
    #[value(name = "deepSky", aliases = ["deep-sky", "deepsky"])]
    DeepSky,
}

impl QuickSetting {
    /// All presets in display order
    pub const ALL: [QuickSetting; 3] = [
        QuickSetting::Planetary,
        QuickSetting::Lunar,
        QuickSetting::DeepSky,
    ];

    /// Stable identifier used by the host UI
    pub fn id(&self) -> &'static str {
        match self {
            QuickSetting::Planetary => "planetary",
            QuickSetting::Lunar => "lunar",
            QuickSetting::DeepSky => "deepSky",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            QuickSetting::Planetary => "Planetary",
            QuickSetting::Lunar => "Lunar",
            QuickSetting::DeepSky => "Deep Sky",
        }
    }

    /// Recommended exit-pupil range as shown to the observer
    pub fn recommendation(&self) -> &'static str {
        match self {
            QuickSetting::Planetary => "Recommended exit pupil: 0.5-1 mm",
            QuickSetting::Lunar => "Recommended exit pupil: 1-2 mm",
            QuickSetting::DeepSky => "Recommended exit pupil: 2-7 mm",
        }
    }

    /// Recommended exit-pupil range (min, max) in millimeters
    pub fn exit_pupil_range_mm(&self) -> (f64, f64) {
        match self {
            QuickSetting::Planetary => (0.5, 1.0),
            QuickSetting::Lunar => (1.0, 2.0),
            QuickSetting::DeepSky => (2.0, 7.0),
        }
    }

    /// Eyepiece focal lengths that put the given telescope inside this
    /// preset's exit-pupil range
    ///
    /// Each bound is the exit pupil times the telescope's focal ratio.
    ///
    /// # Returns
    /// * `Some((min, max))` - Eyepiece focal lengths in millimeters
    /// * `None` - If the focal ratio is not a finite positive number
    ///
    /// # Examples
    /// ```rust
    /// use scope_optics::presets::QuickSetting;
    /// use scope_optics::telescope::TelescopeConfig;
    ///
    /// let dobsonian = TelescopeConfig::new("200/1200", 200.0, 1200.0);
    /// assert_eq!(
    ///     QuickSetting::Lunar.recommended_eyepiece_range_mm(&dobsonian),
    ///     Some((6.0, 12.0))
    /// );
    /// ```
    pub fn recommended_eyepiece_range_mm(
        &self,
        telescope: &TelescopeConfig,
    ) -> Option<(f64, f64)> {
        if !is_positive_finite(telescope.focal_ratio()) {
            return None;
        }

        let (min_pupil, max_pupil) = self.exit_pupil_range_mm();
        Some((
            telescope.eyepiece_focal_length_for_exit_pupil_mm(min_pupil),
            telescope.eyepiece_focal_length_for_exit_pupil_mm(max_pupil),
        ))
    }
}

impl fmt::Display for QuickSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuickSetting {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planetary" => Ok(QuickSetting::Planetary),
            "lunar" => Ok(QuickSetting::Lunar),
            "deepsky" | "deep-sky" => Ok(QuickSetting::DeepSky),
            _ => Err(PresetError::Unknown(s.to_string())),
        }
    }
}

/// Look up the recommendation string for a preset identifier
///
/// Identifiers are matched case-insensitively; `deep-sky` is accepted as an
/// alias for `deepSky`.
pub fn recommendation_for(id: &str) -> Result<&'static str, PresetError> {
    id.parse::<QuickSetting>().map(|preset| preset.recommendation())
}
