//! Submission-time extraction
//!
//! Walks the collector's slot list (never the render tree) and places each
//! resolved value at the exponent encoded in the slot's identifier.

use std::collections::HashMap;

use thiserror::Error;

use super::degree::Degree;
use crate::sequence::CoefficientSequence;
use crate::term::{FieldId, TermField};

/// Errors resolving a single entry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Entry is neither blank nor a finite number
    #[error("'{0}' is not a number")]
    NonNumeric(String),
}

/// Errors that abort a submission
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No valid degree has been entered yet
    #[error("no coefficient fields are shown")]
    NoFields,

    /// An entry could not be resolved to a number
    #[error("entry for {id} is invalid: {source}")]
    NonNumeric {
        /// Slot holding the bad entry
        id: FieldId,
        /// Underlying resolution failure
        #[source]
        source: EntryError,
    },

    /// A slot has no backing field
    #[error("slot {0} has no field")]
    MissingField(FieldId),

    /// A slot names an exponent above the current degree
    #[error("slot {id} does not fit degree {degree}")]
    SlotOutOfRange {
        /// Offending slot
        id: FieldId,
        /// Degree the sequence was sized for
        degree: u32,
    },
}

/// Resolve raw entry text: blank is zero, otherwise it must be a finite number.
pub fn resolve_entry(text: &str) -> Result<f64, EntryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EntryError::NonNumeric(trimmed.to_string())),
    }
}

/// Build the coefficient sequence for `degree` from the slots in `slots`.
///
/// Every slot must have a field in `fields`; the collector builds both
/// together, so a missing one is reported rather than read as zero.
pub fn extract(
    degree: Degree,
    slots: &[FieldId],
    fields: &HashMap<FieldId, TermField>,
) -> Result<CoefficientSequence, SubmitError> {
    let mut values = vec![0.0; degree.term_count()];

    for &id in slots {
        let field = fields.get(&id).ok_or(SubmitError::MissingField(id))?;
        let value =
            resolve_entry(field.entry()).map_err(|source| SubmitError::NonNumeric { id, source })?;
        let slot = values
            .get_mut(id.exponent() as usize)
            .ok_or(SubmitError::SlotOutOfRange {
                id,
                degree: degree.get(),
            })?;
        *slot = value;
    }

    Ok(CoefficientSequence::new(values))
}
