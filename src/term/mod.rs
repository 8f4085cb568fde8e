//! Term fields: one entry slot per exponent
//!
//! A field owns its exponent label and its raw text. Nothing is parsed
//! until the collector extracts values on submission.

mod exponent;
mod field;

pub use exponent::{normalize, Adjustment, CheckedExponent};
pub use field::{FieldId, FieldIdError, Label, TermField};
