//! Evaluate a telescope against a range of eyepiece focal lengths.

use crate::calculator::{compute, OpticalReport};
use crate::display;
use crate::input::OpticalInputs;
use crate::range_arg::{RangeArg, RangeError};
use crate::warnings::OpticalWarning;
use serde::{Deserialize, Serialize};

/// One eyepiece focal length and the calculator report for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub eyepiece_focal_length_mm: f64,
    pub report: OpticalReport,
}

/// Run the calculator for every eyepiece focal length in `range`.
///
/// The eyepiece focal length in `base` is ignored. Rows for unusable focal
/// lengths (zero or negative) carry undefined results like any other
/// calculator call.
///
/// # Arguments
/// * `base` - Telescope dimensions and apparent field shared by every row
/// * `range` - Eyepiece focal lengths in millimeters
///
/// # Returns
/// * `Ok(Vec<SweepRow>)` - One row per focal length, in range order
/// * `Err(RangeError)` - If the range is invalid or expands to too many values
pub fn sweep_eyepieces(
    base: &OpticalInputs,
    range: &RangeArg,
) -> Result<Vec<SweepRow>, RangeError> {
    let focal_lengths = range.to_vec()?;
    log::debug!("Sweeping {} eyepiece focal lengths over {range}", focal_lengths.len());

    Ok(focal_lengths
        .into_iter()
        .map(|focal_length| SweepRow {
            eyepiece_focal_length_mm: focal_length,
            report: compute(&base.with_eyepiece_focal_length(focal_length)),
        })
        .collect())
}

/// Render sweep rows as a fixed-width text table
///
/// The first line is a header; each row shows the eyepiece focal length,
/// magnification, exit pupil, true field and short warning tags.
pub fn render_table(rows: &[SweepRow]) -> String {
    let mut out = format!(
        "{:>10}  {:>8}  {:>10}  {:>8}  {}\n",
        "Eyepiece", "Mag", "Exit pupil", "TFOV", "Warnings"
    );

    for row in rows {
        let results = &row.report.results;
        let warnings = row
            .report
            .warnings
            .iter()
            .map(|w| match w {
                OpticalWarning::ExitPupilTooLarge => "exit-pupil",
                OpticalWarning::OverMagnification => "over-magnification",
            })
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!(
            "{:>10}  {:>8}  {:>10}  {:>8}  {}\n",
            format!("{:.1} mm", row.eyepiece_focal_length_mm),
            display::format_magnification(results.magnification),
            display::format_exit_pupil(results.exit_pupil_mm),
            display::format_true_fov(results.true_fov_deg),
            warnings
        ));
    }

    out
}
