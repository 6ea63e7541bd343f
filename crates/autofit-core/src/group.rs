use std::cell::RefCell;
use std::rc::Rc;

use autofit_text::TextMeasurer;
use autofit_ui_graphics::Size;

use crate::config::AutoFitConfig;
use crate::error::FitError;
use crate::host::AutoFitTextHost;
use crate::request::FitConstraint;

/// A container of hosts that share a measurer and one configuration.
///
/// Only the constraint is chosen per child; size range, precision, line
/// limit and density come from the group.
pub struct AutoFitGroup {
    measurer: Rc<dyn TextMeasurer>,
    config: AutoFitConfig,
    hosts: Vec<Rc<RefCell<AutoFitTextHost>>>,
}

impl AutoFitGroup {
    pub fn new(measurer: Rc<dyn TextMeasurer>, config: AutoFitConfig) -> Result<Self, FitError> {
        config.validate()?;
        Ok(Self {
            measurer,
            config,
            hosts: Vec::new(),
        })
    }

    pub fn config(&self) -> &AutoFitConfig {
        &self.config
    }

    /// Adds a child host and returns its index.
    pub fn add_host(&mut self, bounds: Size, constraint: FitConstraint) -> Result<usize, FitError> {
        let host = AutoFitTextHost::with_bounds(
            Rc::clone(&self.measurer),
            self.config.with_constraint(constraint),
            bounds,
        )?;
        self.hosts.push(Rc::new(RefCell::new(host)));
        Ok(self.hosts.len() - 1)
    }

    pub fn host(&self, index: usize) -> Option<Rc<RefCell<AutoFitTextHost>>> {
        self.hosts.get(index).cloned()
    }

    pub fn hosts(&self) -> &[Rc<RefCell<AutoFitTextHost>>] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Pushes `text` to every child.
    pub fn set_text(&mut self, text: &str) -> Result<(), FitError> {
        self.for_each_host(|host| host.set_text(text))
    }

    /// Applies `config` to every child, keeping each child's constraint.
    pub fn set_config(&mut self, config: AutoFitConfig) -> Result<(), FitError> {
        config.validate()?;
        self.config = config;
        self.for_each_host(|host| {
            let constraint = host.constraint();
            host.set_config(config.with_constraint(constraint))
        })
    }

    fn for_each_host(
        &self,
        mut apply: impl FnMut(&mut AutoFitTextHost) -> Result<(), FitError>,
    ) -> Result<(), FitError> {
        let mut first_error = None;
        for host in &self.hosts {
            if let Err(err) = apply(&mut host.borrow_mut()) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
#[path = "tests/group_tests.rs"]
mod tests;
