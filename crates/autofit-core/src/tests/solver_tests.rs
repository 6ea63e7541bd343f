use std::cell::Cell;

use autofit_text::{MonospacedTextMeasurer, TextMetrics};
use autofit_ui_graphics::Size;

use super::*;
use crate::request::FitConstraint;

/// Advance 0.5 and line height 1.0: "Hi" at size S measures S x S.
fn square_measurer() -> MonospacedTextMeasurer {
    MonospacedTextMeasurer::new(0.5, 1.0)
}

struct CountingMeasurer {
    inner: MonospacedTextMeasurer,
    calls: Cell<usize>,
}

impl TextMeasurer for CountingMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.measure(text, font_size)
    }
}

struct BrokenMeasurer;

impl TextMeasurer for BrokenMeasurer {
    fn measure(&self, _text: &str, _font_size: f32) -> Result<TextMetrics, MeasurementError> {
        Err(MeasurementError::FontUnavailable("no font loaded".into()))
    }
}

fn request(text: &str, bounds: Size, constraint: FitConstraint) -> FitRequest<'_> {
    FitRequest::new(text, bounds, 8.0, 96.0, constraint, 0.5).unwrap()
}

fn fits_at(text: &str, size: f32, bounds: Size, constraint: FitConstraint) -> bool {
    let metrics = MonospacedTextMeasurer::default().measure(text, size).unwrap();
    constraint.admits(metrics.size(), bounds)
}

#[test]
fn hi_in_100_by_50_converges_to_largest_fitting_size() {
    let bounds = Size::new(100.0, 50.0);
    let request = request("Hi", bounds, FitConstraint::Both);
    let result = FitSolver::new()
        .solve(&request, &MonospacedTextMeasurer::default())
        .unwrap();

    assert!(result.fits);
    assert!(fits_at("Hi", result.resolved_size, bounds, FitConstraint::Both));
    assert!(!fits_at("Hi", result.resolved_size + 0.5, bounds, FitConstraint::Both));
}

#[test]
fn box_equal_to_measurement_at_max_resolves_to_max() {
    let request = FitRequest::new("Hi", Size::new(40.0, 40.0), 4.0, 40.0, FitConstraint::Both, 0.5)
        .unwrap();
    let result = FitSolver::new().solve(&request, &square_measurer()).unwrap();

    assert_eq!(result, FitResult::fitting(40.0));
}

#[test]
fn box_smaller_than_min_measurement_does_not_fit() {
    let request = request("Hi", Size::new(5.0, 5.0), FitConstraint::Both);
    let result = FitSolver::new().solve(&request, &square_measurer()).unwrap();

    assert_eq!(result, FitResult::overflowing(8.0));
}

#[test]
fn resolved_size_stays_within_range() {
    let measurer = square_measurer();
    for width in [0.0, 3.0, 8.0, 25.0, 60.0, 96.0, 500.0] {
        let request = request("Hi", Size::new(width, 1000.0), FitConstraint::Width);
        let result = FitSolver::new().solve(&request, &measurer).unwrap();
        assert!(result.resolved_size >= 8.0, "width {width}: {result:?}");
        assert!(result.resolved_size <= 96.0, "width {width}: {result:?}");
    }
}

#[test]
fn growing_the_box_never_shrinks_the_text() {
    let measurer = MonospacedTextMeasurer::default();
    for constraint in [FitConstraint::Width, FitConstraint::Height, FitConstraint::Both] {
        let mut previous = 0.0;
        for step in 0..40 {
            let side = 5.0 + step as f32 * 7.5;
            let request = request("Monotonic", Size::new(side, side / 2.0), constraint);
            let size = FitSolver::new().solve(&request, &measurer).unwrap().resolved_size;
            assert!(size >= previous, "{constraint:?} shrank at side {side}");
            previous = size;
        }
    }
}

#[test]
fn solving_twice_gives_identical_results() {
    let request = request("Repeatable", Size::new(120.0, 40.0), FitConstraint::Both);
    let measurer = MonospacedTextMeasurer::default();
    let first = FitSolver::new().solve(&request, &measurer).unwrap();
    let second = FitSolver::new().solve(&request, &measurer).unwrap();
    assert_eq!(first, second);
}

#[test]
fn width_constraint_ignores_height() {
    let bounds = Size::new(200.0, 1.0);
    let result = FitSolver::new()
        .solve(&request("Hi", bounds, FitConstraint::Width), &square_measurer())
        .unwrap();
    assert_eq!(result, FitResult::fitting(96.0));

    let result = FitSolver::new()
        .solve(&request("Hi", bounds, FitConstraint::Height), &square_measurer())
        .unwrap();
    assert!(!result.fits);
}

#[test]
fn height_constraint_ignores_width() {
    let bounds = Size::new(1.0, 30.0);
    let result = FitSolver::new()
        .solve(&request("Hi", bounds, FitConstraint::Height), &square_measurer())
        .unwrap();
    assert!(result.fits);
    assert!(result.resolved_size <= 30.0 && result.resolved_size > 29.5);
}

#[test]
fn measurement_count_is_logarithmic() {
    let measurer = CountingMeasurer {
        inner: MonospacedTextMeasurer::default(),
        calls: Cell::new(0),
    };
    let request = request("Logarithmic", Size::new(150.0, 60.0), FitConstraint::Both);
    FitSolver::new().solve(&request, &measurer).unwrap();

    // (96 - 8) / 0.5 = 176 -> at most 8 bisection steps plus two bound probes.
    assert!(measurer.calls.get() <= 10, "took {} measurements", measurer.calls.get());
}

#[test]
fn fitting_at_max_needs_a_single_measurement() {
    let measurer = CountingMeasurer {
        inner: square_measurer(),
        calls: Cell::new(0),
    };
    let request = request("Hi", Size::new(500.0, 500.0), FitConstraint::Both);
    assert_eq!(FitSolver::new().solve(&request, &measurer).unwrap(), FitResult::fitting(96.0));
    assert_eq!(measurer.calls.get(), 1);
}

#[test]
fn equal_min_and_max_short_circuit() {
    let overflowing =
        FitRequest::new("Hi", Size::new(1.0, 1.0), 12.0, 12.0, FitConstraint::Both, 0.5).unwrap();
    assert_eq!(
        FitSolver::new().solve(&overflowing, &square_measurer()).unwrap(),
        FitResult::overflowing(12.0)
    );

    let fitting =
        FitRequest::new("Hi", Size::new(50.0, 50.0), 12.0, 12.0, FitConstraint::Both, 0.5).unwrap();
    assert_eq!(
        FitSolver::new().solve(&fitting, &square_measurer()).unwrap(),
        FitResult::fitting(12.0)
    );
}

#[test]
fn tiny_precision_still_terminates() {
    let request =
        FitRequest::new("Hi", Size::new(33.3, 33.3), 1.0, 96.0, FitConstraint::Both, 1e-12).unwrap();
    let result = FitSolver::new().solve(&request, &square_measurer()).unwrap();
    assert!(result.fits);
    assert!(result.resolved_size <= 33.3);
    assert!(result.resolved_size > 33.29);
}

#[test]
fn measurement_errors_propagate_unchanged() {
    let request = request("Hi", Size::new(10.0, 10.0), FitConstraint::Both);
    let err = FitSolver::new().solve(&request, &BrokenMeasurer).unwrap_err();
    assert_eq!(err, MeasurementError::FontUnavailable("no font loaded".into()));
}

#[test]
fn line_limit_allows_wrapping_up_to_max_lines() {
    let measurer = square_measurer();
    let bounds = Size::new(40.0, 1000.0);
    let single = FitRequest::builder("aaaa bbbb", bounds)
        .size_range(1.0, 50.0)
        .max_lines(Some(1))
        .build()
        .unwrap();
    let double = FitRequest::builder("aaaa bbbb", bounds)
        .size_range(1.0, 50.0)
        .max_lines(Some(2))
        .build()
        .unwrap();

    // One line: 4.5 * S <= 40.
    let one_line = FitSolver::new().solve(&single, &measurer).unwrap();
    assert!(one_line.fits);
    assert!(one_line.resolved_size <= 40.0 / 4.5);
    assert!(one_line.resolved_size > 40.0 / 4.5 - 0.5);

    // Two lines of four characters: 2 * S <= 40.
    let two_lines = FitSolver::new().solve(&double, &measurer).unwrap();
    assert!(two_lines.fits);
    assert!(two_lines.resolved_size <= 20.0);
    assert!(two_lines.resolved_size > 19.5);
}

#[test]
fn hard_breaks_beyond_line_limit_never_fit() {
    let request = FitRequest::builder("a\nb\nc", Size::new(1000.0, 1000.0))
        .max_lines(Some(2))
        .build()
        .unwrap();
    let result = FitSolver::new().solve(&request, &square_measurer()).unwrap();
    assert_eq!(result, FitResult::overflowing(crate::DEFAULT_MIN_TEXT_SIZE));
}

#[test]
fn line_limit_measures_whitespace_runs_as_written() {
    let measurer = square_measurer();
    let text = format!("a{}b", " ".repeat(20));
    let bounds = Size::new(100.0, 500.0);
    let request = FitRequest::builder(&text, bounds)
        .size_range(8.0, 96.0)
        .max_lines(Some(1))
        .build()
        .unwrap();

    let fit = FitSolver::new().solve(&request, &measurer).unwrap();

    // 22 characters on one line: 11 * S <= 100.
    assert!(fit.fits);
    let rendered = measurer.measure(&text, fit.resolved_size).unwrap();
    assert!(rendered.width <= bounds.width, "{fit:?} renders {rendered:?}");
    assert!(fit.resolved_size > 100.0 / 11.0 - 0.5);
}

#[test]
fn line_limit_keeps_leading_whitespace() {
    let measurer = square_measurer();
    let bounds = Size::new(30.0, 500.0);
    let request = FitRequest::builder("    Hi", bounds)
        .size_range(1.0, 50.0)
        .max_lines(Some(1))
        .build()
        .unwrap();

    let fit = FitSolver::new().solve(&request, &measurer).unwrap();

    // Six characters: 3 * S <= 30.
    assert!(fit.fits);
    let rendered = measurer.measure("    Hi", fit.resolved_size).unwrap();
    assert!(rendered.width <= bounds.width, "{fit:?} renders {rendered:?}");
    assert!(fit.resolved_size > 9.5);
}
