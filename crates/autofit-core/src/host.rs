//! Stateful auto-fit wrapper around one text surface.

use std::rc::Rc;

use autofit_text::TextMeasurer;
use autofit_ui_graphics::{EdgeInsets, Size, Sp};

use crate::config::AutoFitConfig;
use crate::error::{ConfigurationError, FitError};
use crate::request::{FitConstraint, FitResult};
use crate::solver::FitSolver;

/// Notification sent to listeners when the resolved text size changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSizeChange {
    pub old_size: f32,
    pub new_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holds the text, bounds and configuration of a renderable text surface and
/// keeps the fitted font size current.
///
/// Every setter that changes an input re-solves before returning, so the
/// caller can re-render with [`current_fit`](Self::current_fit) right away.
/// Setting a value equal to the stored one measures nothing.
pub struct AutoFitTextHost {
    measurer: Rc<dyn TextMeasurer>,
    solver: FitSolver,
    config: AutoFitConfig,
    text: String,
    bounds: Size,
    padding: EdgeInsets,
    fit: Option<FitResult>,
    text_size: f32,
    listeners: Vec<(ListenerId, Rc<dyn Fn(TextSizeChange)>)>,
    next_listener_id: u64,
}

impl AutoFitTextHost {
    /// Creates a host with empty text and empty bounds.
    pub fn new(measurer: Rc<dyn TextMeasurer>, config: AutoFitConfig) -> Result<Self, FitError> {
        Self::with_bounds(measurer, config, Size::ZERO)
    }

    pub fn with_bounds(
        measurer: Rc<dyn TextMeasurer>,
        config: AutoFitConfig,
        bounds: Size,
    ) -> Result<Self, FitError> {
        config.validate()?;
        check_bounds(bounds)?;
        let mut host = Self {
            measurer,
            solver: FitSolver::new(),
            text_size: config.max_text_size_px(),
            config,
            text: String::new(),
            bounds,
            padding: EdgeInsets::default(),
            fit: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        host.refit()?;
        Ok(host)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Outer bounds of the surface, padding included.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    /// The box text is fitted into: bounds minus padding.
    pub fn content_box(&self) -> Size {
        self.bounds.deflate(self.padding)
    }

    pub fn config(&self) -> &AutoFitConfig {
        &self.config
    }

    pub fn constraint(&self) -> FitConstraint {
        self.config.constraint
    }

    /// Font size in pixels of the last successful fit.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), FitError> {
        if self.text == text {
            return Ok(());
        }
        self.text.clear();
        self.text.push_str(text);
        self.refit().map(|_| ())
    }

    pub fn set_box(&mut self, bounds: Size) -> Result<(), FitError> {
        if self.bounds == bounds {
            return Ok(());
        }
        check_bounds(bounds)?;
        self.bounds = bounds;
        self.refit().map(|_| ())
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) -> Result<(), FitError> {
        if self.padding == padding {
            return Ok(());
        }
        if !padding.is_valid() {
            return Err(ConfigurationError::InvalidPadding(padding).into());
        }
        self.padding = padding;
        self.refit().map(|_| ())
    }

    pub fn set_constraint(&mut self, constraint: FitConstraint) -> Result<(), FitError> {
        self.set_config(self.config.with_constraint(constraint))
    }

    pub fn set_max_lines(&mut self, max_lines: Option<usize>) -> Result<(), FitError> {
        self.set_config(self.config.with_max_lines(max_lines))
    }

    pub fn set_precision(&mut self, precision: f32) -> Result<(), FitError> {
        self.set_config(self.config.with_precision(precision))
    }

    pub fn set_text_size_range(&mut self, min: Sp, max: Sp) -> Result<(), FitError> {
        self.set_config(self.config.with_text_size_range(min, max))
    }

    /// Replaces the whole configuration. Invalid configurations are rejected
    /// and leave the host untouched.
    pub fn set_config(&mut self, config: AutoFitConfig) -> Result<(), FitError> {
        if self.config == config {
            return Ok(());
        }
        config.validate()?;
        self.config = config;
        self.refit().map(|_| ())
    }

    /// Returns the fit for the current inputs.
    ///
    /// Normally served from cache. If the last recomputation failed, the solve
    /// is retried here and its error returned again if it persists.
    pub fn current_fit(&mut self) -> Result<FitResult, FitError> {
        match self.fit {
            Some(fit) => Ok(fit),
            None => self.refit(),
        }
    }

    /// Registers a callback for resolved size changes.
    ///
    /// Listeners run inside the setter that caused the change, while the host
    /// is still mutably borrowed. A listener must not borrow a host shared
    /// through `Rc<RefCell<_>>` (as [`TextSource::bind_host`] shares it); the
    /// [`TextSizeChange`] it receives carries the new size.
    ///
    /// [`TextSource::bind_host`]: crate::TextSource::bind_host
    pub fn add_text_size_listener(
        &mut self,
        listener: impl Fn(TextSizeChange) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn remove_text_size_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn refit(&mut self) -> Result<FitResult, FitError> {
        self.fit = None;
        let content = self.content_box();
        let request = self.config.request(&self.text, content)?;
        let fit = self.solver.solve(&request, self.measurer.as_ref())?;
        self.fit = Some(fit);

        log::debug!(
            "refit {} chars into {}x{} -> {}px (fits: {})",
            self.text.chars().count(),
            content.width,
            content.height,
            fit.resolved_size,
            fit.fits
        );

        if fit.resolved_size != self.text_size {
            let change = TextSizeChange {
                old_size: self.text_size,
                new_size: fit.resolved_size,
            };
            self.text_size = fit.resolved_size;
            for (_, listener) in &self.listeners {
                listener(change);
            }
        }
        Ok(fit)
    }
}

fn check_bounds(bounds: Size) -> Result<(), ConfigurationError> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidBox(bounds))
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
