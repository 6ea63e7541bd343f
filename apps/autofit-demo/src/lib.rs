//! Sample screens for the Autofit library.
//!
//! Each screen has one input field whose text is mirrored into a plain label
//! and into three auto-fit labels, one per [`FitConstraint`].

pub mod screens;

pub use autofit_core::FitConstraint;
pub use screens::{LabelState, Screen, ScreenKind};
