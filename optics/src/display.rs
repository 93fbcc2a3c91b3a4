//! Fixed formatting of calculator results for display.
//!
//! Magnifications are shown as whole numbers with a "×" suffix, exit pupil
//! and true field with two decimals and "mm" / "°" suffixes. Undefined
//! values show a dash.

use crate::calculator::{OpticalReport, OpticalResults};
use crate::warnings::OpticalWarning;

/// Placeholder for a result that could not be computed
pub const UNDEFINED: &str = "—";

/// Format a magnification rounded to a whole number, e.g. `120×`
///
/// # Examples
/// ```rust
/// use scope_optics::display::{format_magnification, UNDEFINED};
///
/// assert_eq!(format_magnification(Some(174.8)), "175×");
/// assert_eq!(format_magnification(None), UNDEFINED);
/// ```
pub fn format_magnification(value: Option<f64>) -> String {
    value
        .map(|m| format!("{:.0}×", m.round()))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// Exit pupil with two decimals, e.g. `0.95 mm`
pub fn format_exit_pupil(value: Option<f64>) -> String {
    value
        .map(|mm| format!("{mm:.2} mm"))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// True field in degrees with two decimals, e.g. `0.43°`
pub fn format_true_fov(value: Option<f64>) -> String {
    value
        .map(|deg| format!("{deg:.2}°"))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// Alert banner line for a warning
pub fn format_warning(warning: &OpticalWarning) -> String {
    format!("⚠ {warning}")
}

/// Labelled result lines in display order
pub fn result_lines(results: &OpticalResults) -> Vec<(&'static str, String)> {
    vec![
        ("Magnification", format_magnification(results.magnification)),
        ("Exit Pupil", format_exit_pupil(results.exit_pupil_mm)),
        (
            "Max Useful Magnification",
            format_magnification(results.max_useful_magnification),
        ),
        ("True Field of View", format_true_fov(results.true_fov_deg)),
    ]
}

/// Render a full report: result lines followed by warning banners
pub fn render_report(report: &OpticalReport) -> String {
    let lines = result_lines(&report.results);
    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in &lines {
        out.push_str(&format!("{label:<width$}  {value}\n"));
    }
    for warning in &report.warnings {
        out.push_str(&format_warning(warning));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::input::OpticalInputs;

    #[test]
    fn test_magnification_format() {
        assert_eq!(format_magnification(Some(120.0)), "120×");
        assert_eq!(format_magnification(Some(174.825)), "175×");
        assert_eq!(format_magnification(None), UNDEFINED);
    }

    #[test]
    fn test_two_decimal_formats() {
        assert_eq!(format_exit_pupil(Some(0.95)), "0.95 mm");
        assert_eq!(format_exit_pupil(Some(2.0)), "2.00 mm");
        assert_eq!(format_true_fov(Some(52.0 / 120.0)), "0.43°");
        assert_eq!(format_true_fov(None), UNDEFINED);
    }

    #[test]
    fn test_render_report_with_warning() {
        let report = compute(&OpticalInputs::new(1200.0, 114.0, 2.0, Some(52.0)));
        let rendered = render_report(&report);

        assert!(rendered.contains("600×"));
        assert!(rendered.contains("228×"));
        assert!(rendered.contains("0.19 mm"));
        assert!(rendered.contains("0.09°"));
        assert!(rendered.contains(&format_warning(&OpticalWarning::OverMagnification)));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_render_undefined_report() {
        let report = compute(&OpticalInputs::new(1000.0, -50.0, 25.0, Some(52.0)));
        let rendered = render_report(&report);
        assert_eq!(rendered.matches(UNDEFINED).count(), 4);
        assert!(!rendered.contains('⚠'));
    }
}
