//! Type-safe angular units for eyepiece fields of view
//!
//! This module wraps the `uom` crate so that apparent and true fields of view
//! carry their unit from the eyepiece through the calculator. Observers type
//! fields of view in degrees, so that is the only unit exposed.

use uom::si::angle::degree;

/// Type alias for angular measurements (fields of view)
pub type Angle = uom::si::f64::Angle;

/// Extension trait for angle conversions
pub trait AngleExt {
    /// Create angle from degrees
    fn from_degrees(deg: f64) -> Self;

    /// Get angle in degrees
    fn as_degrees(&self) -> f64;
}

impl AngleExt for Angle {
    fn from_degrees(deg: f64) -> Self {
        Angle::new::<degree>(deg)
    }

    fn as_degrees(&self) -> f64 {
        self.get::<degree>()
    }
}
