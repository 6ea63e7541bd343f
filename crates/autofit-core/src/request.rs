//! Fit requests and results

use autofit_ui_graphics::Size;

use crate::error::ConfigurationError;
use crate::{DEFAULT_MAX_TEXT_SIZE, DEFAULT_MIN_TEXT_SIZE, DEFAULT_PRECISION};

/// Which box dimension(s) bound the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitConstraint {
    #[default]
    Width,
    Height,
    Both,
}

impl FitConstraint {
    /// Returns true if `measured` stays inside `bounds` along the constrained
    /// axes.
    pub fn admits(self, measured: Size, bounds: Size) -> bool {
        match self {
            FitConstraint::Width => measured.width <= bounds.width,
            FitConstraint::Height => measured.height <= bounds.height,
            FitConstraint::Both => bounds.contains(measured),
        }
    }
}

/// Validated input of a single fitting pass. All sizes are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FitRequest<'a> {
    text: &'a str,
    bounds: Size,
    min_size: f32,
    max_size: f32,
    constraint: FitConstraint,
    precision: f32,
    max_lines: Option<usize>,
}

impl<'a> FitRequest<'a> {
    pub fn new(
        text: &'a str,
        bounds: Size,
        min_size: f32,
        max_size: f32,
        constraint: FitConstraint,
        precision: f32,
    ) -> Result<Self, ConfigurationError> {
        Self::builder(text, bounds)
            .size_range(min_size, max_size)
            .constraint(constraint)
            .precision(precision)
            .build()
    }

    pub fn builder(text: &'a str, bounds: Size) -> FitRequestBuilder<'a> {
        FitRequestBuilder {
            text,
            bounds,
            min_size: DEFAULT_MIN_TEXT_SIZE,
            max_size: DEFAULT_MAX_TEXT_SIZE,
            constraint: FitConstraint::default(),
            precision: DEFAULT_PRECISION,
            max_lines: None,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    pub fn max_size(&self) -> f32 {
        self.max_size
    }

    pub fn constraint(&self) -> FitConstraint {
        self.constraint
    }

    pub fn precision(&self) -> f32 {
        self.precision
    }

    /// Line limit. When set, text wraps at the box width and must not need
    /// more lines than this.
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }
}

#[derive(Clone, Debug)]
pub struct FitRequestBuilder<'a> {
    text: &'a str,
    bounds: Size,
    min_size: f32,
    max_size: f32,
    constraint: FitConstraint,
    precision: f32,
    max_lines: Option<usize>,
}

impl<'a> FitRequestBuilder<'a> {
    pub fn size_range(mut self, min_size: f32, max_size: f32) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn constraint(mut self, constraint: FitConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    pub fn max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn build(self) -> Result<FitRequest<'a>, ConfigurationError> {
        check_positive("min size", self.min_size)?;
        check_positive("max size", self.max_size)?;
        if self.min_size > self.max_size {
            return Err(ConfigurationError::MinExceedsMax {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(ConfigurationError::InvalidPrecision(self.precision));
        }
        if !self.bounds.is_valid() {
            return Err(ConfigurationError::InvalidBox(self.bounds));
        }
        if let Some(0) = self.max_lines {
            return Err(ConfigurationError::InvalidMaxLines(0));
        }

        Ok(FitRequest {
            text: self.text,
            bounds: self.bounds,
            min_size: self.min_size,
            max_size: self.max_size,
            constraint: self.constraint,
            precision: self.precision,
            max_lines: self.max_lines,
        })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositiveSize { name, value })
    }
}

/// Outcome of a fitting pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// Font size in pixels the text should be rendered at.
    pub resolved_size: f32,
    /// False when the text overflows even at the minimum size. The caller
    /// picks the fallback (clamp, truncate, ellipsize).
    pub fits: bool,
}

impl FitResult {
    pub const fn fitting(resolved_size: f32) -> Self {
        Self {
            resolved_size,
            fits: true,
        }
    }

    pub const fn overflowing(min_size: f32) -> Self {
        Self {
            resolved_size: min_size,
            fits: false,
        }
    }
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
