//! Deterministic measurers for tests.

use std::cell::{Cell, RefCell};

use autofit_text::{validate_font_size, MeasurementError, TextMeasurer, TextMetrics};

/// Every character is `advance * size` wide and every line `line_height *
/// size` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMeasurer {
    pub advance: f32,
    pub line_height: f32,
}

impl LinearMeasurer {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// "Hi" at size `s` measures exactly `s` x `s`.
    pub const fn square() -> Self {
        Self::new(0.5, 1.0)
    }
}

impl TextMeasurer for LinearMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        validate_font_size(font_size)?;
        let line_count = text.split('\n').count().max(1);
        let widest = text
            .split('\n')
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_height = self.line_height * font_size;
        Ok(TextMetrics {
            width: widest as f32 * self.advance * font_size,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        })
    }
}

/// Wraps a measurer and records every size it was asked about.
pub struct CountingMeasurer<M> {
    inner: M,
    calls: Cell<usize>,
    sizes: RefCell<Vec<f32>>,
}

impl<M: TextMeasurer> CountingMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            sizes: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Font sizes probed so far, in call order.
    pub fn sizes(&self) -> Vec<f32> {
        self.sizes.borrow().clone()
    }

    pub fn reset(&self) {
        self.calls.set(0);
        self.sizes.borrow_mut().clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for CountingMeasurer<M> {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        self.calls.set(self.calls.get() + 1);
        self.sizes.borrow_mut().push(font_size);
        self.inner.measure(text, font_size)
    }
}

/// Always fails, as a measurer without a loaded font would.
#[derive(Clone, Debug, Default)]
pub struct FailingMeasurer {
    pub reason: String,
}

impl FailingMeasurer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TextMeasurer for FailingMeasurer {
    fn measure(&self, _text: &str, _font_size: f32) -> Result<TextMetrics, MeasurementError> {
        Err(MeasurementError::FontUnavailable(self.reason.clone()))
    }
}
