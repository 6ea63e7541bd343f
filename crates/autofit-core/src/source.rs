//! Single upstream text value observed by many consumers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::FitError;
use crate::host::AutoFitTextHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&str) -> Result<(), FitError>>;

/// An input field's text, fanned out to observers.
///
/// Each distinct value reaches every observer exactly once, in registration
/// order. Writing the current value again notifies nobody.
#[derive(Default)]
pub struct TextSource {
    text: String,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl TextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn observe(
        &mut self,
        observer: impl FnMut(&str) -> Result<(), FitError> + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Registers `host` and brings it up to date with the current text.
    pub fn bind_host(
        &mut self,
        host: Rc<RefCell<AutoFitTextHost>>,
    ) -> Result<ObserverId, FitError> {
        host.borrow_mut().set_text(&self.text)?;
        Ok(self.observe(move |text| host.borrow_mut().set_text(text)))
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Stores `text` and notifies every observer.
    ///
    /// A failing observer does not stop the fan-out; the first error is
    /// returned once all observers have run.
    pub fn set_text(&mut self, text: &str) -> Result<(), FitError> {
        if self.text == text {
            return Ok(());
        }
        self.text.clear();
        self.text.push_str(text);

        let mut first_error = None;
        for (id, observer) in &mut self.observers {
            if let Err(err) = observer(&self.text) {
                log::warn!("text observer {:?} failed: {}", id, err);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
