use std::fmt;

use autofit_text::MeasurementError;
use autofit_ui_graphics::{EdgeInsets, Size};

/// A fit request or host configuration that can never be solved.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    MinExceedsMax { min: f32, max: f32 },
    NonPositiveSize { name: &'static str, value: f32 },
    InvalidPrecision(f32),
    InvalidBox(Size),
    InvalidPadding(EdgeInsets),
    InvalidMaxLines(usize),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MinExceedsMax { min, max } => {
                write!(f, "minimum text size {min} exceeds maximum {max}")
            }
            ConfigurationError::NonPositiveSize { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            ConfigurationError::InvalidPrecision(precision) => {
                write!(f, "precision must be positive and finite, got {precision}")
            }
            ConfigurationError::InvalidBox(size) => write!(
                f,
                "box {}x{} must have finite, non-negative dimensions",
                size.width, size.height
            ),
            ConfigurationError::InvalidPadding(insets) => write!(
                f,
                "padding {}/{}/{}/{} must be finite and non-negative",
                insets.left, insets.top, insets.right, insets.bottom
            ),
            ConfigurationError::InvalidMaxLines(lines) => {
                write!(f, "max lines must be at least 1, got {lines}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Error returned by host operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    Configuration(ConfigurationError),
    Measurement(MeasurementError),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::Configuration(err) => write!(f, "invalid fit configuration: {err}"),
            FitError::Measurement(err) => write!(f, "text measurement failed: {err}"),
        }
    }
}

impl std::error::Error for FitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FitError::Configuration(err) => Some(err),
            FitError::Measurement(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for FitError {
    fn from(err: ConfigurationError) -> Self {
        FitError::Configuration(err)
    }
}

impl From<MeasurementError> for FitError {
    fn from(err: MeasurementError) -> Self {
        FitError::Measurement(err)
    }
}
