//! Font size fitting for Autofit
//!
//! [`FitSolver`] binary-searches the largest font size at which a string
//! still fits a box. [`AutoFitTextHost`] keeps the inputs of one text surface
//! and re-solves synchronously whenever one of them changes. [`TextSource`]
//! fans a single input out to any number of hosts, and [`AutoFitGroup`]
//! manages hosts that share one configuration.

mod config;
mod error;
mod group;
mod host;
mod request;
mod solver;
mod source;

pub use autofit_text::{MeasurementError, MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use autofit_ui_graphics::{Density, EdgeInsets, Size, Sp};

pub use config::AutoFitConfig;
pub use error::{ConfigurationError, FitError};
pub use group::AutoFitGroup;
pub use host::{AutoFitTextHost, ListenerId, TextSizeChange};
pub use request::{FitConstraint, FitRequest, FitRequestBuilder, FitResult};
pub use solver::FitSolver;
pub use source::{ObserverId, TextSource};

/// Smallest text size in scale-independent pixels a host shrinks to by default.
pub const DEFAULT_MIN_TEXT_SIZE: f32 = 10.0;
/// Largest text size in scale-independent pixels a host grows to by default.
pub const DEFAULT_MAX_TEXT_SIZE: f32 = 96.0;
/// Default search tolerance in pixels.
pub const DEFAULT_PRECISION: f32 = 0.5;

pub mod prelude {
    pub use crate::config::AutoFitConfig;
    pub use crate::host::AutoFitTextHost;
    pub use crate::request::{FitConstraint, FitRequest, FitResult};
    pub use crate::solver::FitSolver;
    pub use crate::source::TextSource;
    pub use autofit_text::TextMeasurer;
    pub use autofit_ui_graphics::{EdgeInsets, Size, Sp};
}
