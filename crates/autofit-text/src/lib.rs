//! Text measurement contracts for Autofit
//!
//! A [`TextMeasurer`] reports how much room a string takes at a given font
//! size. The solver in `autofit-core` only ever talks to this trait, so any
//! font backend can be plugged in.

mod error;
mod measurer;
mod wrap;

pub use error::MeasurementError;
pub use measurer::*;
pub use wrap::wrap_lines;

pub mod prelude {
    pub use crate::error::MeasurementError;
    pub use crate::measurer::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
}
