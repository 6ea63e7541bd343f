use std::rc::Rc;
use std::sync::Arc;

use autofit_ui_graphics::Size;

use crate::error::MeasurementError;
use crate::wrap::wrap_lines;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

impl TextMetrics {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

pub trait TextMeasurer {
    /// Returns the bounds `text` occupies when rendered at `font_size` pixels.
    ///
    /// Hard line breaks (`'\n'`) start a new line; no soft wrapping happens.
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError>;

    /// Measures `text` after greedily breaking it at whitespace so each line
    /// fits `wrap_width`. Lines keep their original spacing; see
    /// [`wrap_lines`]. A single word wider than `wrap_width` keeps its own
    /// line and reports its full width.
    fn measure_wrapped(
        &self,
        text: &str,
        font_size: f32,
        wrap_width: f32,
    ) -> Result<TextMetrics, MeasurementError> {
        let lines = wrap_lines(text, wrap_width, |line| {
            self.measure(line, font_size).map(|metrics| metrics.width)
        })?;
        self.measure(&lines.join("\n"), font_size)
    }
}

/// Rejects sizes a font backend cannot lay out.
pub fn validate_font_size(font_size: f32) -> Result<(), MeasurementError> {
    if font_size.is_finite() && font_size > 0.0 {
        Ok(())
    } else {
        Err(MeasurementError::InvalidFontSize(font_size))
    }
}

/// Measurer that gives every character the same advance.
///
/// Useful for headless runs and tests: width grows linearly with the font
/// size, which keeps fitting results predictable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    /// Character advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl MonospacedTextMeasurer {
    pub const DEFAULT_ADVANCE_RATIO: f32 = 0.6;
    pub const DEFAULT_LINE_HEIGHT_RATIO: f32 = 1.2;

    pub const fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO, Self::DEFAULT_LINE_HEIGHT_RATIO)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        validate_font_size(font_size)?;

        let advance = font_size * self.advance_ratio;
        let line_height = font_size * self.line_height_ratio;

        // Split by newlines to handle multiline
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        // Width is the max width of any line
        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * advance)
            .fold(0.0_f32, f32::max);

        Ok(TextMetrics {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        })
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        (**self).measure(text, font_size)
    }

    fn measure_wrapped(
        &self,
        text: &str,
        font_size: f32,
        wrap_width: f32,
    ) -> Result<TextMetrics, MeasurementError> {
        (**self).measure_wrapped(text, font_size, wrap_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        (**self).measure(text, font_size)
    }

    fn measure_wrapped(
        &self,
        text: &str,
        font_size: f32,
        wrap_width: f32,
    ) -> Result<TextMetrics, MeasurementError> {
        (**self).measure_wrapped(text, font_size, wrap_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Rc<M> {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        (**self).measure(text, font_size)
    }

    fn measure_wrapped(
        &self,
        text: &str,
        font_size: f32,
        wrap_width: f32,
    ) -> Result<TextMetrics, MeasurementError> {
        (**self).measure_wrapped(text, font_size, wrap_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Arc<M> {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        (**self).measure(text, font_size)
    }

    fn measure_wrapped(
        &self,
        text: &str,
        font_size: f32,
        wrap_width: f32,
    ) -> Result<TextMetrics, MeasurementError> {
        (**self).measure_wrapped(text, font_size, wrap_width)
    }
}

#[cfg(test)]
#[path = "tests/measurer_tests.rs"]
mod tests;
