//! Visual telescope optics calculator
//!
//! This crate computes the performance of a telescope/eyepiece combination
//! (magnification, exit pupil, maximum useful magnification and true field
//! of view) from raw form input, flags combinations that waste light or
//! over-magnify, and provides quick-setting presets for common targets.

pub mod calculator;
pub mod display;
pub mod input;
pub mod presets;
pub mod range_arg;
pub mod sweep;
pub mod telescope;
pub mod units;
pub mod warnings;

// Re-exports for easier access
pub use calculator::{compute, compute_raw, OpticalReport, OpticalResults};
pub use input::{OpticalInputs, RawInputs};
pub use presets::{PresetError, QuickSetting};
pub use range_arg::RangeArg;
pub use telescope::{Eyepiece, TelescopeConfig};
pub use warnings::OpticalWarning;
