//! Testing utilities for Autofit

pub mod assertions;
pub mod measurers;

pub use assertions::*;
pub use measurers::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::measurers::{CountingMeasurer, FailingMeasurer, LinearMeasurer};
}
