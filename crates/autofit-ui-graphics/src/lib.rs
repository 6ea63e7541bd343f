//! Pure math/data for sizes, insets & units in Autofit
//!
//! This crate contains the geometry primitives and unit types that the
//! measurer, the solver and the hosts exchange.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Size};
    pub use crate::unit::{Density, Dp, Px, Sp};
}
