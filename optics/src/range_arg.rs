//! Type-safe range argument for eyepiece focal-length sweeps.
//!
//! Provides a clap-compatible `start:stop:step` type with parsing,
//! validation and display formatting.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a `start:stop:step` range is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("range must be in format 'start:stop:step'")]
    Format,
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("step cannot be zero")]
    ZeroStep,
    #[error("invalid range: stop ({stop}) > start ({start}) but step ({step}) is not positive")]
    ExpectedPositiveStep { start: f64, stop: f64, step: f64 },
    #[error("invalid range: stop ({stop}) < start ({start}) but step ({step}) is not negative")]
    ExpectedNegativeStep { start: f64, stop: f64, step: f64 },
    #[error("range spans more than {max} values")]
    TooManyValues { max: usize },
}

/// Largest number of values a range may expand to
pub const MAX_RANGE_VALUES: usize = 10_000;

/// Tolerance, as a fraction of the step, for accepting the stop value
const STOP_TOLERANCE: f64 = 1e-9;

/// Parse a colon-separated range specification.
///
/// Input format: "start:stop:step", stop inclusive. A zero step, or a step
/// pointing away from stop, is rejected. `start == stop` yields one value.
///
/// Valid: "4:40:2", "25:5:-5", "10:10:1"
/// Invalid: "4:40" (missing step), "4:40:0" (zero step), "40:4:2" (wrong direction)
pub fn parse_range(s: &str) -> Result<(f64, f64, f64), RangeError> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(RangeError::Format);
    }

    let parse = |field: &'static str, value: &str| {
        let value = value.trim();
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RangeError::InvalidNumber {
                field,
                value: value.to_string(),
            })
    };

    let start = parse("start", parts[0])?;
    let stop = parse("stop", parts[1])?;
    let step = parse("step", parts[2])?;

    validate(start, stop, step)?;
    Ok((start, stop, step))
}

fn validate(start: f64, stop: f64, step: f64) -> Result<(), RangeError> {
    if step == 0.0 {
        return Err(RangeError::ZeroStep);
    }

    if stop > start && step < 0.0 {
        return Err(RangeError::ExpectedPositiveStep { start, stop, step });
    }

    if stop < start && step > 0.0 {
        return Err(RangeError::ExpectedNegativeStep { start, stop, step });
    }

    Ok(())
}

/// Validated (start, stop, step) sweep specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeArg(pub f64, pub f64, pub f64);

impl FromStr for RangeArg {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, stop, step) = parse_range(s)?;
        Ok(RangeArg(start, stop, step))
    }
}

impl fmt::Display for RangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.0, self.1, self.2)
    }
}

impl RangeArg {
    /// Generate a vector of all values in the range.
    ///
    /// Values are computed as `start + i * step` so long sweeps do not
    /// accumulate rounding error.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)` - Values from start to stop (inclusive) by step
    /// * `Err(RangeError)` - If the step is zero or points away from stop, or
    ///   the range expands to more than [`MAX_RANGE_VALUES`] values
    pub fn to_vec(&self) -> Result<Vec<f64>, RangeError> {
        let (start, stop, step) = self.as_tuple();
        validate(start, stop, step)?;

        let too_many = RangeError::TooManyValues {
            max: MAX_RANGE_VALUES,
        };

        let span = ((stop - start) / step + STOP_TOLERANCE).floor();
        if !span.is_finite() || span >= MAX_RANGE_VALUES as f64 {
            return Err(too_many);
        }
        let count = (span as usize).checked_add(1).ok_or(too_many)?;

        Ok((0..count).map(|i| start + i as f64 * step).collect())
    }

    /// Convert to a raw (start, stop, step) tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.0, self.1, self.2)
    }
}
