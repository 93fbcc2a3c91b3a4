//! End-to-end checks of the calculator against worked observing examples

use approx::assert_relative_eq;
use scope_optics::display::{format_exit_pupil, format_magnification, format_true_fov};
use scope_optics::range_arg::{RangeError, MAX_RANGE_VALUES};
use scope_optics::sweep::sweep_eyepieces;
use scope_optics::{compute, compute_raw, OpticalInputs, OpticalWarning, RangeArg, RawInputs};

fn raw(scope: &str, aperture: &str, eyepiece: &str, afov: Option<&str>) -> RawInputs {
    RawInputs::new(scope, aperture, eyepiece, afov)
}

#[test]
fn test_newtonian_with_10mm_eyepiece() {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = compute_raw(&raw("1200", "114", "10", Some("52")));
    let results = report.results;

    assert_relative_eq!(results.magnification.unwrap(), 120.0);
    assert_relative_eq!(results.exit_pupil_mm.unwrap(), 0.95, epsilon = 1e-9);
    assert_relative_eq!(results.max_useful_magnification.unwrap(), 228.0);
    assert_relative_eq!(results.true_fov_deg.unwrap(), 0.4333, epsilon = 1e-4);
    assert!(report.warnings.is_empty());

    assert_eq!(format_magnification(results.magnification), "120×");
    assert_eq!(format_exit_pupil(results.exit_pupil_mm), "0.95 mm");
    assert_eq!(format_true_fov(results.true_fov_deg), "0.43°");
}

#[test]
fn test_newtonian_with_2mm_eyepiece_over_magnifies() {
    let report = compute_raw(&raw("1200", "114", "2", Some("52")));
    let results = report.results;

    assert_relative_eq!(results.magnification.unwrap(), 600.0);
    assert_relative_eq!(results.exit_pupil_mm.unwrap(), 0.19, epsilon = 1e-9);
    assert_relative_eq!(results.max_useful_magnification.unwrap(), 228.0);
    assert_relative_eq!(results.true_fov_deg.unwrap(), 0.0867, epsilon = 1e-4);
    assert_eq!(report.warnings, vec![OpticalWarning::OverMagnification]);
}

#[test]
fn test_fast_reflector_no_warnings() {
    let report = compute_raw(&raw("400", "200", "4", Some("60")));
    let results = report.results;

    assert_relative_eq!(results.magnification.unwrap(), 100.0);
    assert_relative_eq!(results.exit_pupil_mm.unwrap(), 2.0);
    assert_relative_eq!(results.max_useful_magnification.unwrap(), 400.0);
    assert_relative_eq!(results.true_fov_deg.unwrap(), 0.6, epsilon = 1e-12);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_small_refractor_without_afov() {
    let report = compute_raw(&raw("500", "50", "2.86", None));
    let results = report.results;

    assert_relative_eq!(results.magnification.unwrap(), 174.8, epsilon = 0.1);
    assert_relative_eq!(results.exit_pupil_mm.unwrap(), 0.286, epsilon = 1e-9);
    assert_relative_eq!(results.max_useful_magnification.unwrap(), 100.0);
    assert!(results.true_fov_deg.is_none());
    assert_eq!(report.warnings, vec![OpticalWarning::OverMagnification]);
}

#[test]
fn test_negative_aperture_invalidates_everything() {
    let report = compute_raw(&raw("1000", "-50", "25", Some("52")));
    assert!(report.results.magnification.is_none());
    assert!(report.results.exit_pupil_mm.is_none());
    assert!(report.results.max_useful_magnification.is_none());
    assert!(report.results.true_fov_deg.is_none());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_any_bad_required_field_invalidates_everything() {
    let cases = [
        raw("", "114", "10", Some("52")),
        raw("1200", "abc", "10", Some("52")),
        raw("1200", "114", "0", Some("52")),
        raw("-1200", "114", "10", Some("52")),
        raw("1200", "114", "   ", Some("52")),
    ];

    for case in &cases {
        let report = compute_raw(case);
        assert!(report.results.is_undefined(), "{case:?}");
        assert!(report.warnings.is_empty(), "{case:?}");
    }
}

#[test]
fn test_bad_afov_only_drops_true_fov() {
    for afov in [None, Some(""), Some("0"), Some("-52"), Some("wide")] {
        let report = compute_raw(&raw("1200", "114", "10", afov));
        assert!(report.results.true_fov_deg.is_none(), "{afov:?}");
        assert_eq!(report.results.magnification, Some(120.0));
        assert_eq!(report.results.max_useful_magnification, Some(228.0));
        assert!(report.results.exit_pupil_mm.is_some());
    }
}

#[test]
fn test_exit_pupil_formula_across_inputs() {
    for (scope, aperture, eyepiece) in [
        (400.0, 80.0, 32.0),
        (900.0, 114.0, 25.0),
        (2032.0, 203.0, 40.0),
        (1200.0, 200.0, 6.0),
    ] {
        let report = compute(&OpticalInputs::new(scope, aperture, eyepiece, None));
        let results = report.results;
        assert_relative_eq!(results.magnification.unwrap(), scope / eyepiece, epsilon = 1e-9);
        assert_relative_eq!(
            results.exit_pupil_mm.unwrap(),
            aperture * eyepiece / scope,
            epsilon = 1e-9
        );
        assert_relative_eq!(results.max_useful_magnification.unwrap(), 2.0 * aperture);
    }
}

#[test]
fn test_large_exit_pupil_warns() {
    // 80/400 refractor with a 40mm eyepiece: 10x, 8mm pupil
    let report = compute(&OpticalInputs::new(400.0, 80.0, 40.0, Some(68.0)));
    assert_eq!(report.warnings, vec![OpticalWarning::ExitPupilTooLarge]);
    assert_relative_eq!(report.results.true_fov_deg.unwrap(), 6.8, epsilon = 1e-12);
}

#[test]
fn test_extreme_but_valid_inputs_give_no_results() {
    // Every field parses as finite and positive, but the derived metrics
    // overflow or underflow
    let cases = [
        raw("1e300", "100", "1e-300", Some("52")),
        raw("1e-300", "100", "1e300", Some("52")),
        raw("1000", "1e308", "10", Some("52")),
    ];

    for case in &cases {
        let report = compute_raw(case);
        assert!(report.results.is_undefined(), "{case:?}");
        assert!(report.warnings.is_empty(), "{case:?}");
    }
}

#[test]
fn test_results_are_finite_whenever_present() {
    for (scope, aperture, eyepiece, afov) in [
        (1e200, 1e-200, 1e-200, Some(1e-300)),
        (1e10, 1e9, 1.0, Some(1e-320)),
        (1200.0, 114.0, 10.0, Some(1e308)),
    ] {
        let results = compute(&OpticalInputs::new(scope, aperture, eyepiece, afov)).results;
        for value in [
            results.magnification,
            results.exit_pupil_mm,
            results.max_useful_magnification,
            results.true_fov_deg,
        ]
        .into_iter()
        .flatten()
        {
            assert!(value.is_finite() && value > 0.0, "{scope} {aperture} {eyepiece}");
        }
    }
}

#[test]
fn test_sweep_rejects_oversized_ranges() {
    let base = OpticalInputs::new(1200.0, 114.0, f64::NAN, Some(52.0));

    for range in ["0:1e300:1e-300", "1:1e12:1"] {
        let range: RangeArg = range.parse().unwrap();
        assert_eq!(
            sweep_eyepieces(&base, &range),
            Err(RangeError::TooManyValues {
                max: MAX_RANGE_VALUES
            })
        );
    }

    let rows = sweep_eyepieces(&base, &"4:40:2".parse().unwrap()).unwrap();
    assert_eq!(rows.len(), 19);
}
