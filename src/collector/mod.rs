//! Term collector: degree input, field generation and submission
//!
//! The collector moves between two states:
//!
//! - `Idle`: no fields rendered
//! - `FieldsShown`: a valid degree was accepted, one field per exponent
//!
//! Every "Go" re-validates the degree. A successful check replaces the field
//! list wholesale; a failed one sets the error banner.

mod degree;
mod extract;

pub use degree::{Degree, DegreeError};
pub use extract::{extract, resolve_entry, EntryError, SubmitError};

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::CollectorConfig;
use crate::sequence::CoefficientSequence;
use crate::term::{FieldId, TermField};

/// Receiver of the coefficient sequence on a valid submission.
///
/// Implemented for every `FnMut(&CoefficientSequence)`.
pub trait SubmitHandler {
    /// Called once per successful submission
    fn on_submit(&mut self, coefficients: &CoefficientSequence);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&CoefficientSequence),
{
    fn on_submit(&mut self, coefficients: &CoefficientSequence) {
        (*self)(coefficients)
    }
}

/// Collector state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    /// No fields rendered
    Idle,
    /// Fields rendered for the contained degree
    FieldsShown(Degree),
}

/// Errors addressing fields through the collector
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectorError {
    /// No rendered field has this identifier
    #[error("no field {0} is shown")]
    UnknownField(FieldId),
}

/// Owns the degree input, the rendered fields and the submit handler
pub struct TermCollector {
    config: CollectorConfig,
    degree_input: String,
    degree: Option<Degree>,
    error: Option<String>,
    /// Render order: highest exponent first
    slots: Vec<FieldId>,
    fields: HashMap<FieldId, TermField>,
    on_submit: Option<Box<dyn SubmitHandler>>,
}

impl fmt::Debug for TermCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermCollector")
            .field("config", &self.config)
            .field("degree_input", &self.degree_input)
            .field("degree", &self.degree)
            .field("error", &self.error)
            .field("slots", &self.slots)
            .field("has_on_submit", &self.on_submit.is_some())
            .finish_non_exhaustive()
    }
}

impl TermCollector {
    /// Create an idle collector
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            degree_input: String::new(),
            degree: None,
            error: None,
            slots: Vec::new(),
            fields: HashMap::new(),
            on_submit: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Register the handler invoked on valid submissions, replacing any previous one
    pub fn set_on_submit(&mut self, handler: impl SubmitHandler + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    /// Drop the submit handler
    pub fn clear_on_submit(&mut self) {
        self.on_submit = None;
    }

    /// Store the degree text. Nothing is validated until [`go`](Self::go).
    pub fn set_degree_input(&mut self, text: impl Into<String>) {
        self.degree_input = text.into();
    }

    /// Current degree text
    pub fn degree_input(&self) -> &str {
        &self.degree_input
    }

    /// Validate the degree input and regenerate the fields.
    ///
    /// Regeneration is all-or-nothing: on failure no new field is created.
    pub fn go(&mut self) -> Result<Degree, DegreeError> {
        match Degree::parse(
            &self.degree_input,
            self.config.min_degree,
            self.config.max_degree,
        ) {
            Ok(degree) => {
                self.error = None;
                self.regenerate(degree);
                Ok(degree)
            }
            Err(err) => {
                warn!(input = %self.degree_input, "degree rejected: {}", err);
                self.error = Some(self.config.degree_error_message());
                if !self.config.keep_fields_on_error {
                    self.clear_fields();
                }
                Err(err)
            }
        }
    }

    fn regenerate(&mut self, degree: Degree) {
        let mut previous = std::mem::take(&mut self.fields);
        let carry = self.config.carry_over_entries;

        let slots: Vec<FieldId> = degree.exponents().map(FieldId::new).collect();
        let fields: HashMap<FieldId, TermField> = slots
            .iter()
            .map(|&id| {
                let mut field = TermField::with_id(id);
                if carry {
                    if let Some(old) = previous.remove(&id) {
                        field.set_entry(old.entry());
                    }
                }
                (id, field)
            })
            .collect();

        debug!(degree = degree.get(), fields = slots.len(), "regenerated term fields");
        self.slots = slots;
        self.fields = fields;
        self.degree = Some(degree);
    }

    fn clear_fields(&mut self) {
        self.slots.clear();
        self.fields.clear();
        self.degree = None;
    }

    /// Current state
    pub fn state(&self) -> CollectorState {
        match self.degree {
            Some(degree) => CollectorState::FieldsShown(degree),
            None => CollectorState::Idle,
        }
    }

    /// Banner text from the last failed degree check, if not dismissed
    pub fn validation_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Slot identifiers in render order
    pub fn slots(&self) -> &[FieldId] {
        &self.slots
    }

    /// Rendered fields, highest exponent first
    pub fn fields(&self) -> impl Iterator<Item = &TermField> + '_ {
        self.slots.iter().filter_map(|id| self.fields.get(id))
    }

    /// Number of rendered fields
    pub fn field_count(&self) -> usize {
        self.slots.len()
    }

    /// Look up a rendered field
    pub fn field(&self, id: FieldId) -> Option<&TermField> {
        self.fields.get(&id)
    }

    /// Replace the text of one field
    pub fn set_entry(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), CollectorError> {
        let field = self
            .fields
            .get_mut(&id)
            .ok_or(CollectorError::UnknownField(id))?;
        field.set_entry(text);
        Ok(())
    }

    /// Extract the coefficient sequence and hand it to the submit handler.
    ///
    /// Blank entries count as zero. A non-numeric entry aborts the whole
    /// submission and the handler is not called.
    pub fn submit(&mut self) -> Result<CoefficientSequence, SubmitError> {
        let degree = self.degree.ok_or(SubmitError::NoFields)?;

        let sequence = extract(degree, &self.slots, &self.fields).map_err(|err| {
            error!("submission aborted: {}", err);
            err
        })?;

        debug!(degree = degree.get(), "coefficients submitted");
        if let Some(handler) = self.on_submit.as_mut() {
            handler.on_submit(&sequence);
        }
        Ok(sequence)
    }
}

impl Default for TermCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shown(collector: &TermCollector) -> Vec<u32> {
        collector
            .fields()
            .map(|f| f.checked_exponent().get())
            .collect()
    }

    #[test]
    fn test_starts_idle() {
        let collector = TermCollector::default();
        assert_eq!(collector.state(), CollectorState::Idle);
        assert_eq!(collector.field_count(), 0);
        assert!(collector.validation_error().is_none());
    }

    #[test]
    fn test_go_renders_descending_fields() {
        let mut collector = TermCollector::default();
        collector.set_degree_input("4");
        let degree = collector.go().unwrap();

        assert_eq!(collector.state(), CollectorState::FieldsShown(degree));
        assert_eq!(shown(&collector), vec![4, 3, 2, 1, 0]);
        assert_eq!(collector.slots()[0].to_string(), "x^4");
    }

    #[test]
    fn test_failed_go_clears_fields_by_default() {
        let mut collector = TermCollector::default();
        collector.set_degree_input("4");
        collector.go().unwrap();

        collector.set_degree_input("3.14");
        assert!(collector.go().is_err());
        assert_eq!(collector.state(), CollectorState::Idle);
        assert_eq!(collector.field_count(), 0);
        assert!(collector
            .validation_error()
            .unwrap()
            .starts_with("Error"));
    }

    #[test]
    fn test_failed_go_can_keep_fields() {
        let config = CollectorConfig::default().with_keep_fields_on_error(true);
        let mut collector = TermCollector::new(config);
        collector.set_degree_input("4");
        collector.go().unwrap();
        collector.set_entry(FieldId::new(0), "9").unwrap();

        collector.set_degree_input("1");
        assert!(collector.go().is_err());
        assert_eq!(collector.field_count(), 5);
        assert!(collector.validation_error().is_some());
        assert_eq!(collector.field(FieldId::new(0)).unwrap().entry(), "9");
    }

    #[test]
    fn test_successful_go_clears_error() {
        let mut collector = TermCollector::default();
        collector.set_degree_input("");
        assert_eq!(collector.go(), Err(DegreeError::Empty));
        assert!(collector.validation_error().is_some());

        collector.set_degree_input("3");
        collector.go().unwrap();
        assert!(collector.validation_error().is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut collector = TermCollector::default();
        collector.set_degree_input("x");
        let _ = collector.go();
        collector.dismiss_error();
        assert!(collector.validation_error().is_none());
    }

    #[test]
    fn test_regeneration_discards_entries_by_default() {
        let mut collector = TermCollector::default();
        collector.set_degree_input("3");
        collector.go().unwrap();
        collector.set_entry(FieldId::new(1), "5").unwrap();

        collector.set_degree_input("4");
        collector.go().unwrap();
        assert_eq!(collector.field(FieldId::new(1)).unwrap().entry(), "");
    }

    #[test]
    fn test_regeneration_can_carry_entries_over() {
        let config = CollectorConfig::default().with_carry_over_entries(true);
        let mut collector = TermCollector::new(config);
        collector.set_degree_input("4");
        collector.go().unwrap();
        collector.set_entry(FieldId::new(4), "1").unwrap();
        collector.set_entry(FieldId::new(1), "5").unwrap();

        collector.set_degree_input("3");
        collector.go().unwrap();
        assert!(collector.field(FieldId::new(4)).is_none());
        assert_eq!(collector.field(FieldId::new(1)).unwrap().entry(), "5");
    }

    #[test]
    fn test_set_entry_unknown_field() {
        let mut collector = TermCollector::default();
        assert_eq!(
            collector.set_entry(FieldId::new(0), "1"),
            Err(CollectorError::UnknownField(FieldId::new(0)))
        );
    }

    #[test]
    fn test_submit_while_idle() {
        let mut collector = TermCollector::default();
        assert_eq!(collector.submit(), Err(SubmitError::NoFields));
    }

    #[test]
    fn test_handler_not_called_on_failure() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);

        let mut collector = TermCollector::default();
        collector.set_on_submit(move |_: &CoefficientSequence| *counter.borrow_mut() += 1);
        collector.set_degree_input("3");
        collector.go().unwrap();
        collector.set_entry(FieldId::new(2), "abc").unwrap();

        assert!(matches!(
            collector.submit(),
            Err(SubmitError::NonNumeric { .. })
        ));
        assert_eq!(*calls.borrow(), 0);

        collector.set_entry(FieldId::new(2), "").unwrap();
        collector.submit().unwrap();
        assert_eq!(*calls.borrow(), 1);
    }
}
