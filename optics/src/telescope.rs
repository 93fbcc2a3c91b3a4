//! Telescope and eyepiece optical configuration for visual observing.
//!
//! This module models the two halves of a visual telescope: the main optical
//! system (objective lens or primary mirror) and the eyepiece placed at its
//! focus. Lengths are plain millimeter values, the unit observers read off
//! their equipment. Fields of view are typed `uom` angles.
//!
//! # Physics Models
//!
//! Standard visual optics formulas:
//! - **Magnification**: M = F_scope / F_eyepiece
//! - **Exit pupil**: d = D / M
//! - **Maximum useful magnification**: M_max = 2 × D (D in mm)
//! - **True field of view**: TFOV = AFOV / M
//! - **Focal ratio**: N = F_scope / D
//!
//! # Examples
//!
//! ```rust
//! use scope_optics::telescope::{Eyepiece, TelescopeConfig};
//!
//! let telescope = TelescopeConfig::new("114/900 Newtonian", 114.0, 900.0);
//! let eyepiece = Eyepiece::new(10.0, Some(52.0));
//!
//! let magnification = telescope.magnification(&eyepiece);
//! println!("{magnification:.0}x, exit pupil {:.2} mm", telescope.exit_pupil_mm(&eyepiece));
//! ```

use crate::units::{Angle, AngleExt};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Empirical magnification ceiling per millimeter of aperture
pub const MAX_USEFUL_MAGNIFICATION_PER_MM: f64 = 2.0;

/// Main optical system of a visual telescope.
#[derive(Debug, Clone, PartialEq)]
pub struct TelescopeConfig {
    /// Clear aperture of the objective or primary mirror in millimeters
    pub aperture_mm: f64,
    /// Effective focal length of the main optical system in millimeters
    pub focal_length_mm: f64,
    /// Telescope model name or identifier
    pub name: String,
}

impl TelescopeConfig {
    /// Create a new telescope configuration
    pub fn new(name: impl Into<String>, aperture_mm: f64, focal_length_mm: f64) -> Self {
        Self {
            name: name.into(),
            aperture_mm,
            focal_length_mm,
        }
    }

    /// Focal ratio (f-number) of the main optics
    pub fn focal_ratio(&self) -> f64 {
        self.focal_length_mm / self.aperture_mm
    }

    /// Magnification produced with the given eyepiece
    pub fn magnification(&self, eyepiece: &Eyepiece) -> f64 {
        self.focal_length_mm / eyepiece.focal_length_mm
    }

    /// Diameter of the light beam leaving the eyepiece in millimeters
    ///
    /// The formula used is: d = D / M
    pub fn exit_pupil_mm(&self, eyepiece: &Eyepiece) -> f64 {
        self.aperture_mm / self.magnification(eyepiece)
    }

    /// Highest magnification that still reveals detail, 2x the aperture in mm
    pub fn max_useful_magnification(&self) -> f64 {
        MAX_USEFUL_MAGNIFICATION_PER_MM * self.aperture_mm
    }

    /// Actual sky angle visible through the eyepiece
    ///
    /// The formula used is: TFOV = AFOV / M
    ///
    /// # Returns
    /// * `Some(Angle)` - True field of view
    /// * `None` - If the eyepiece has no apparent field of view
    pub fn true_fov(&self, eyepiece: &Eyepiece) -> Option<Angle> {
        eyepiece
            .apparent_fov
            .map(|afov| afov / self.magnification(eyepiece))
    }

    /// Eyepiece focal length that yields the requested exit pupil
    ///
    /// Inverse of [`TelescopeConfig::exit_pupil_mm`]: f_eye = d × N
    pub fn eyepiece_focal_length_for_exit_pupil_mm(&self, exit_pupil_mm: f64) -> f64 {
        exit_pupil_mm * self.focal_ratio()
    }
}

/// Eyepiece placed at the telescope focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eyepiece {
    /// Eyepiece focal length in millimeters
    pub focal_length_mm: f64,
    /// Apparent field of view as specified by the manufacturer
    pub apparent_fov: Option<Angle>,
}

impl Eyepiece {
    /// Create an eyepiece from its focal length and optional apparent field
    ///
    /// # Arguments
    /// * `focal_length_mm` - Eyepiece focal length in millimeters
    /// * `apparent_fov_deg` - Apparent field of view in degrees, if known
    pub fn new(focal_length_mm: f64, apparent_fov_deg: Option<f64>) -> Self {
        Self {
            focal_length_mm,
            apparent_fov: apparent_fov_deg.map(Angle::from_degrees),
        }
    }
}

/// Serializable summary of a telescope, used by the CLI JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelescopeSummary {
    pub name: String,
    pub aperture_mm: f64,
    pub focal_length_mm: f64,
    pub focal_ratio: f64,
}

impl From<&TelescopeConfig> for TelescopeSummary {
    fn from(telescope: &TelescopeConfig) -> Self {
        Self {
            name: telescope.name.clone(),
            aperture_mm: telescope.aperture_mm,
            focal_length_mm: telescope.focal_length_mm,
            focal_ratio: telescope.focal_ratio(),
        }
    }
}


/// Common amateur telescope models
pub mod models {
    use super::*;

    /// 80mm f/5 short-tube refractor
    pub static REFRACTOR_80MM: Lazy<TelescopeConfig> =
        Lazy::new(|| TelescopeConfig::new("80/400 Refractor", 80.0, 400.0));

    /// 114mm f/7.9 Newtonian reflector
    pub static NEWTONIAN_114MM: Lazy<TelescopeConfig> =
        Lazy::new(|| TelescopeConfig::new("114/900 Newtonian", 114.0, 900.0));

    /// 8 inch f/6 Dobsonian
    pub static DOBSONIAN_200MM: Lazy<TelescopeConfig> =
        Lazy::new(|| TelescopeConfig::new("200/1200 Dobsonian", 200.0, 1200.0));

    /// 8 inch f/10 Schmidt-Cassegrain
    pub static SCT_203MM: Lazy<TelescopeConfig> =
        Lazy::new(|| TelescopeConfig::new("203/2032 SCT", 203.0, 2032.0));
}
