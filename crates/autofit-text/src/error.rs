use std::fmt;

/// Failure reported by a [`TextMeasurer`](crate::TextMeasurer).
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// The font size was zero, negative or not a finite number.
    InvalidFontSize(f32),
    /// The font or other rendering resources could not be loaded.
    FontUnavailable(String),
}

impl fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementError::InvalidFontSize(size) => {
                write!(f, "invalid font size {size}; expected a positive finite value")
            }
            MeasurementError::FontUnavailable(reason) => {
                write!(f, "font unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for MeasurementError {}
