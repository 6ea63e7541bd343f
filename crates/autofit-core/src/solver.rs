use autofit_text::{MeasurementError, TextMeasurer};

use crate::request::{FitRequest, FitResult};

/// Binary search for the largest font size that satisfies a [`FitRequest`].
///
/// The returned size has always been measured and accepted, so rendering at
/// it never clips. The search stops once the bracket is narrower than the
/// request's precision, which bounds the number of measurements to
/// `2 + ceil(log2((max - min) / precision))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitSolver;

impl FitSolver {
    pub const fn new() -> Self {
        Self
    }

    pub fn solve<M>(
        &self,
        request: &FitRequest<'_>,
        measurer: &M,
    ) -> Result<FitResult, MeasurementError>
    where
        M: TextMeasurer + ?Sized,
    {
        let max = request.max_size();
        let min = request.min_size();

        if self.probe(request, measurer, max)? {
            return Ok(FitResult::fitting(max));
        }
        if min >= max || !self.probe(request, measurer, min)? {
            log::debug!(
                "text does not fit {}x{} even at {}px",
                request.bounds().width,
                request.bounds().height,
                min
            );
            return Ok(FitResult::overflowing(min));
        }

        // Invariant: `lo` fits, `hi` overflows.
        let mut lo = min;
        let mut hi = max;
        while hi - lo >= request.precision() {
            let mid = (lo + hi) / 2.0;
            if mid <= lo || mid >= hi {
                // f32 cannot split the bracket any further.
                break;
            }
            if self.probe(request, measurer, mid)? {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Ok(FitResult::fitting(lo))
    }

    fn probe<M>(
        &self,
        request: &FitRequest<'_>,
        measurer: &M,
        font_size: f32,
    ) -> Result<bool, MeasurementError>
    where
        M: TextMeasurer + ?Sized,
    {
        let bounds = request.bounds();
        let metrics = match request.max_lines() {
            Some(_) => measurer.measure_wrapped(request.text(), font_size, bounds.width)?,
            None => measurer.measure(request.text(), font_size)?,
        };
        let within_lines = request
            .max_lines()
            .map_or(true, |max_lines| metrics.line_count <= max_lines);
        let fits = within_lines && request.constraint().admits(metrics.size(), bounds);

        log::trace!(
            "probe size={} measured={}x{} lines={} fits={}",
            font_size,
            metrics.width,
            metrics.height,
            metrics.line_count,
            fits
        );
        Ok(fits)
    }
}

#[cfg(test)]
#[path = "tests/solver_tests.rs"]
mod tests;
