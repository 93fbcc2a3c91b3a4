//! Raw form input handling.
//!
//! The host UI hands the calculator whatever the observer typed. Parsing never
//! fails loudly: anything that is not a number becomes `f64::NAN` and is later
//! rejected by validation.

use serde::{Deserialize, Serialize};

/// Parse a raw text field into a floating-point value.
///
/// Leading and trailing whitespace is ignored. Empty or non-numeric text
/// yields `f64::NAN`, as does text with trailing units such as `12mm`.
///
/// # Examples
/// ```rust
/// use scope_optics::input::parse_field;
///
/// assert_eq!(parse_field(" 1200 "), 1200.0);
/// assert!(parse_field("12mm").is_nan());
/// ```
pub fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an optional raw text field. Absent fields yield `f64::NAN`.
pub fn parse_optional_field(raw: Option<&str>) -> f64 {
    raw.map(parse_field).unwrap_or(f64::NAN)
}

/// Whether a parsed value is usable as a physical length or angle
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// The four form fields exactly as the observer entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Telescope focal length text (mm)
    pub focal_length_scope: String,
    /// Telescope aperture text (mm)
    pub aperture_diameter: String,
    /// Eyepiece focal length text (mm)
    pub focal_length_eyepiece: String,
    /// Eyepiece apparent field of view text (degrees), optional
    pub eyepiece_apparent_fov: Option<String>,
}

impl RawInputs {
    /// Create raw inputs from form text
    pub fn new(
        focal_length_scope: impl Into<String>,
        aperture_diameter: impl Into<String>,
        focal_length_eyepiece: impl Into<String>,
        eyepiece_apparent_fov: Option<impl Into<String>>,
    ) -> Self {
        Self {
            focal_length_scope: focal_length_scope.into(),
            aperture_diameter: aperture_diameter.into(),
            focal_length_eyepiece: focal_length_eyepiece.into(),
            eyepiece_apparent_fov: eyepiece_apparent_fov.map(Into::into),
        }
    }

    /// Parse every field, mapping unparseable text to NaN
    pub fn parse(&self) -> OpticalInputs {
        OpticalInputs {
            focal_length_scope_mm: parse_field(&self.focal_length_scope),
            aperture_diameter_mm: parse_field(&self.aperture_diameter),
            focal_length_eyepiece_mm: parse_field(&self.focal_length_eyepiece),
            eyepiece_apparent_fov_deg: parse_optional_field(
                self.eyepiece_apparent_fov.as_deref(),
            ),
        }
    }
}

/// Parsed calculator inputs. NaN marks a field that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalInputs {
    /// Telescope focal length in millimeters
    pub focal_length_scope_mm: f64,
    /// Objective or primary mirror diameter in millimeters
    pub aperture_diameter_mm: f64,
    /// Eyepiece focal length in millimeters
    pub focal_length_eyepiece_mm: f64,
    /// Eyepiece apparent field of view in degrees (NaN when absent)
    pub eyepiece_apparent_fov_deg: f64,
}

impl OpticalInputs {
    /// Create inputs from already-numeric values
    pub fn new(
        focal_length_scope_mm: f64,
        aperture_diameter_mm: f64,
        focal_length_eyepiece_mm: f64,
        eyepiece_apparent_fov_deg: Option<f64>,
    ) -> Self {
        Self {
            focal_length_scope_mm,
            aperture_diameter_mm,
            focal_length_eyepiece_mm,
            eyepiece_apparent_fov_deg: eyepiece_apparent_fov_deg.unwrap_or(f64::NAN),
        }
    }

    /// Copy of these inputs with a different eyepiece focal length
    pub fn with_eyepiece_focal_length(&self, focal_length_eyepiece_mm: f64) -> Self {
        Self {
            focal_length_eyepiece_mm,
            ..*self
        }
    }

    /// True when scope focal length, aperture and eyepiece focal length are
    /// all finite and strictly positive
    pub fn required_fields_valid(&self) -> bool {
        is_positive_finite(self.focal_length_scope_mm)
            && is_positive_finite(self.aperture_diameter_mm)
            && is_positive_finite(self.focal_length_eyepiece_mm)
    }

    /// Apparent field of view, if provided and usable
    pub fn apparent_fov_deg(&self) -> Option<f64> {
        let afov = self.eyepiece_apparent_fov_deg;
        is_positive_finite(afov).then_some(afov)
    }
}

impl From<&RawInputs> for OpticalInputs {
    fn from(raw: &RawInputs) -> Self {
        raw.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_numbers() {
        assert_eq!(parse_field("1200"), 1200.0);
        assert_eq!(parse_field("  2.86 "), 2.86);
        assert_eq!(parse_field("-50"), -50.0);
        assert_eq!(parse_field("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_field_garbage_is_nan() {
        assert!(parse_field("").is_nan());
        assert!(parse_field("   ").is_nan());
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("12mm").is_nan());
        assert!(parse_optional_field(None).is_nan());
    }

    #[test]
    fn test_required_fields_validation() {
        assert!(OpticalInputs::new(1200.0, 114.0, 10.0, None).required_fields_valid());
        assert!(!OpticalInputs::new(1200.0, 0.0, 10.0, None).required_fields_valid());
        assert!(!OpticalInputs::new(f64::NAN, 114.0, 10.0, None).required_fields_valid());
        assert!(!OpticalInputs::new(1200.0, 114.0, f64::INFINITY, None).required_fields_valid());
    }

    #[test]
    fn test_apparent_fov_optional() {
        assert_eq!(
            OpticalInputs::new(1200.0, 114.0, 10.0, Some(52.0)).apparent_fov_deg(),
            Some(52.0)
        );
        assert_eq!(OpticalInputs::new(1200.0, 114.0, 10.0, Some(0.0)).apparent_fov_deg(), None);
        assert_eq!(OpticalInputs::new(1200.0, 114.0, 10.0, None).apparent_fov_deg(), None);
    }

    #[test]
    fn test_raw_inputs_parse() {
        let raw = RawInputs::new("500", "50", "2.86", None::<String>);
        let parsed = raw.parse();
        assert_eq!(parsed.focal_length_scope_mm, 500.0);
        assert_eq!(parsed.aperture_diameter_mm, 50.0);
        assert_eq!(parsed.focal_length_eyepiece_mm, 2.86);
        assert!(parsed.eyepiece_apparent_fov_deg.is_nan());
    }
}
