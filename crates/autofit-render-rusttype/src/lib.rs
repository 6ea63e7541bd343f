//! TrueType text measurement for Autofit
//!
//! [`RusttypeTextMeasurer`] lays text out with `rusttype` and measures the
//! pixel bounding boxes of the glyphs. Metrics are memoised per
//! `(text, font size)` in an LRU cache, since the fitting search measures
//! the same string at many sizes and then again on every unrelated refit.

mod measurer;

pub use measurer::{RusttypeTextMeasurer, DEFAULT_CACHE_CAPACITY};
