use autofit_ui_graphics::{Density, Size, Sp};

use crate::error::ConfigurationError;
use crate::request::{FitConstraint, FitRequest};
use crate::{DEFAULT_MAX_TEXT_SIZE, DEFAULT_MIN_TEXT_SIZE, DEFAULT_PRECISION};

/// Per-host fitting configuration.
///
/// Text sizes are scale-independent and resolved against `density` when a
/// request is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoFitConfig {
    pub min_text_size: Sp,
    pub max_text_size: Sp,
    /// Search tolerance in pixels. Lower is more exact and measures more.
    pub precision: f32,
    pub constraint: FitConstraint,
    pub max_lines: Option<usize>,
    pub density: Density,
}

impl Default for AutoFitConfig {
    fn default() -> Self {
        Self {
            min_text_size: Sp(DEFAULT_MIN_TEXT_SIZE),
            max_text_size: Sp(DEFAULT_MAX_TEXT_SIZE),
            precision: DEFAULT_PRECISION,
            constraint: FitConstraint::Width,
            max_lines: None,
            density: Density::default(),
        }
    }
}

impl AutoFitConfig {
    pub fn with_text_size_range(mut self, min: Sp, max: Sp) -> Self {
        self.min_text_size = min;
        self.max_text_size = max;
        self
    }

    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_constraint(mut self, constraint: FitConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn min_text_size_px(&self) -> f32 {
        self.min_text_size.resolve(self.density).0
    }

    pub fn max_text_size_px(&self) -> f32 {
        self.max_text_size.resolve(self.density).0
    }

    /// Builds the pixel-space request for `text` inside `bounds`.
    pub fn request<'a>(
        &self,
        text: &'a str,
        bounds: Size,
    ) -> Result<FitRequest<'a>, ConfigurationError> {
        FitRequest::builder(text, bounds)
            .size_range(self.min_text_size_px(), self.max_text_size_px())
            .constraint(self.constraint)
            .precision(self.precision)
            .max_lines(self.max_lines)
            .build()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.request("", Size::ZERO).map(|_| ())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
