//! Assertion helpers for fit results.

use autofit_core::{FitConstraint, FitResult};
use autofit_text::TextMeasurer;
use autofit_ui_graphics::Size;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that `fit` is the largest fitting size for `text`: it fits, and
/// growing it by `precision` would overflow. Only meaningful for fits below
/// the request's maximum size.
pub fn assert_tight_fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    bounds: Size,
    constraint: FitConstraint,
    precision: f32,
    fit: FitResult,
) {
    assert!(fit.fits, "expected {text:?} to fit {bounds:?}, got {fit:?}");
    let at = |size: f32| {
        let metrics = measurer
            .measure(text, size)
            .unwrap_or_else(|err| panic!("measuring {text:?} at {size} failed: {err}"));
        constraint.admits(metrics.size(), bounds)
    };
    assert!(
        at(fit.resolved_size),
        "{text:?} overflows {bounds:?} at resolved size {}",
        fit.resolved_size
    );
    assert!(
        !at(fit.resolved_size + precision),
        "{text:?} still fits {bounds:?} at {}; solver stopped early",
        fit.resolved_size + precision
    );
}

/// Line-limited counterpart of [`assert_tight_fit`]: `text` is measured
/// wrapped at the box width, the way a paragraph renders it, and must also
/// stay within `max_lines`.
pub fn assert_tight_wrapped_fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    bounds: Size,
    constraint: FitConstraint,
    max_lines: usize,
    precision: f32,
    fit: FitResult,
) {
    assert_wrapped_fit_holds(measurer, text, bounds, constraint, max_lines, fit);
    let grown = fit.resolved_size + precision;
    assert!(
        !wrapped_fits(measurer, text, bounds, constraint, max_lines, grown),
        "{text:?} still fits {bounds:?} in {max_lines} lines at {grown}; solver stopped early"
    );
}

/// Assert that a fit reported for a line-limited request really fits when
/// the text is wrapped at the box width.
pub fn assert_wrapped_fit_holds<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    bounds: Size,
    constraint: FitConstraint,
    max_lines: usize,
    fit: FitResult,
) {
    assert!(fit.fits, "expected {text:?} to fit {bounds:?}, got {fit:?}");
    assert!(
        wrapped_fits(measurer, text, bounds, constraint, max_lines, fit.resolved_size),
        "{text:?} overflows {bounds:?} in {max_lines} lines at resolved size {}",
        fit.resolved_size
    );
}

fn wrapped_fits<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    bounds: Size,
    constraint: FitConstraint,
    max_lines: usize,
    size: f32,
) -> bool {
    let metrics = measurer
        .measure_wrapped(text, size, bounds.width)
        .unwrap_or_else(|err| panic!("measuring {text:?} at {size} failed: {err}"));
    metrics.line_count <= max_lines && constraint.admits(metrics.size(), bounds)
}
