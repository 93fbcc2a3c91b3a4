//! Advisory warnings raised against computed optical metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dark-adapted human pupil diameter in millimeters. Exit pupils beyond this
/// waste light.
pub const MAX_EXIT_PUPIL_MM: f64 = 7.0;

/// Advisory condition detected for a telescope/eyepiece combination.
///
/// Warnings never block a result; they accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpticalWarning {
    /// Exit pupil is wider than the observer's dilated pupil
    ExitPupilTooLarge,
    /// Magnification exceeds the maximum useful magnification
    OverMagnification,
}

impl OpticalWarning {
    /// Human-readable banner text
    pub fn message(&self) -> &'static str {
        match self {
            OpticalWarning::ExitPupilTooLarge => {
                "Exit pupil exceeds 7 mm: wider than a dark-adapted eye, some light is wasted."
            }
            OpticalWarning::OverMagnification => {
                concat!(
                    "Magnification exceeds the maximum useful magnification: ",
                    "the image will be dim and blurry."
                )
            }
        }
    }
}

impl fmt::Display for OpticalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate warnings in their fixed order: exit pupil first, then
/// magnification. Equality at either threshold does not warn.
pub fn evaluate(
    magnification: f64,
    exit_pupil_mm: f64,
    max_useful_magnification: f64,
) -> Vec<OpticalWarning> {
    let mut warnings = Vec::with_capacity(2);

    if exit_pupil_mm > MAX_EXIT_PUPIL_MM {
        warnings.push(OpticalWarning::ExitPupilTooLarge);
    }

    if magnification > max_useful_magnification {
        warnings.push(OpticalWarning::OverMagnification);
    }

    warnings
}
