//! Optical calculator for telescope/eyepiece combinations.
//!
//! [`compute`] is the single entry point the host UI calls on every input
//! change. It is pure: identical inputs always produce identical reports, and
//! malformed input never produces an error, only absent results.
//!
//! # Examples
//!
//! ```rust
//! use scope_optics::calculator::compute;
//! use scope_optics::input::RawInputs;
//!
//! let report = compute(&RawInputs::new("1200", "114", "10", Some("52")).parse());
//! assert_eq!(report.results.magnification, Some(120.0));
//! assert!(report.warnings.is_empty());
//! ```

use crate::input::{is_positive_finite, OpticalInputs, RawInputs};
use crate::telescope::{Eyepiece, TelescopeConfig};
use crate::units::AngleExt;
use crate::warnings::{self, OpticalWarning};
use serde::{Deserialize, Serialize};

/// Derived metrics. `None` means the value could not be computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalResults {
    /// Telescope focal length over eyepiece focal length
    pub magnification: Option<f64>,
    /// Aperture over magnification, in millimeters
    pub exit_pupil_mm: Option<f64>,
    /// Twice the aperture in millimeters
    pub max_useful_magnification: Option<f64>,
    /// Apparent field over magnification, in degrees
    pub true_fov_deg: Option<f64>,
}

impl OpticalResults {
    /// All four results undefined
    pub fn undefined() -> Self {
        Self::default()
    }

    /// True when no result could be computed
    pub fn is_undefined(&self) -> bool {
        *self == Self::undefined()
    }
}

/// Calculator output: results plus ordered advisory warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalReport {
    pub results: OpticalResults,
    pub warnings: Vec<OpticalWarning>,
}

impl OpticalReport {
    fn undefined() -> Self {
        Self::default()
    }

    /// Whether `warning` was raised for this combination
    pub fn has_warning(&self, warning: OpticalWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

/// Compute magnification, exit pupil, maximum useful magnification and true
/// field of view, then evaluate warnings.
///
/// If the scope focal length, aperture or eyepiece focal length is not a
/// finite positive number every result is `None` and no warnings are
/// emitted. The same applies when magnification, exit pupil or maximum useful
/// magnification overflow or underflow to a value that is not finite and
/// positive. An unusable apparent field, or a true field that underflows,
/// only leaves `true_fov_deg` empty.
///
/// # Arguments
/// * `inputs` - Parsed form values, NaN for fields that did not parse
///
/// # Returns
/// An [`OpticalReport`]; never fails
pub fn compute(inputs: &OpticalInputs) -> OpticalReport {
    if !inputs.required_fields_valid() {
        log::debug!("Rejecting calculator inputs {inputs:?}");
        return OpticalReport::undefined();
    }

    let telescope = TelescopeConfig::new(
        "",
        inputs.aperture_diameter_mm,
        inputs.focal_length_scope_mm,
    );
    let eyepiece = Eyepiece::new(inputs.focal_length_eyepiece_mm, inputs.apparent_fov_deg());

    let magnification = telescope.magnification(&eyepiece);
    let exit_pupil_mm = telescope.exit_pupil_mm(&eyepiece);
    let max_useful_magnification = telescope.max_useful_magnification();

    if ![magnification, exit_pupil_mm, max_useful_magnification]
        .into_iter()
        .all(is_positive_finite)
    {
        log::debug!("Results out of range for inputs {inputs:?}");
        return OpticalReport::undefined();
    }

    let true_fov_deg = telescope
        .true_fov(&eyepiece)
        .map(|tfov| tfov.as_degrees())
        .filter(|&deg| is_positive_finite(deg));

    let warnings = warnings::evaluate(magnification, exit_pupil_mm, max_useful_magnification);

    let report = OpticalReport {
        results: OpticalResults {
            magnification: Some(magnification),
            exit_pupil_mm: Some(exit_pupil_mm),
            max_useful_magnification: Some(max_useful_magnification),
            true_fov_deg,
        },
        warnings,
    };
    log::debug!("Computed {report:?}");
    report
}

/// Parse raw form text and compute in one step
pub fn compute_raw(raw: &RawInputs) -> OpticalReport {
    compute(&raw.parse())
}
