//! # Coefficient collection for polynomial factoring
//!
//! This library implements the input stage of a polynomial-factoring form:
//! the user picks a degree, fills in one coefficient per exponent and
//! submits. The factoring itself happens in an external collaborator.
//!
//! ## Flow
//!
//! 1. **Degree check**: "Go" validates the degree (integer, at least the
//!    configured minimum)
//! 2. **Field generation**: one [`TermField`] per exponent, highest first
//! 3. **Label normalization**: each field rounds and flips its exponent into
//!    a non-negative label, logging every correction
//! 4. **Extraction**: on submit, blanks become 0, non-numeric text aborts,
//!    and values land at the exponent named by each field's identifier
//!
//! ## Usage Example
//!
//! ```
//! use termform::{CoefficientSequence, CollectorConfig, FieldId, TermCollector};
//!
//! let mut collector = TermCollector::new(CollectorConfig::default());
//! collector.set_degree_input("3");
//! collector.go()?;
//! collector.set_entry(FieldId::new(3), "1")?;
//! collector.set_entry(FieldId::new(0), "-6")?;
//! collector.set_on_submit(|coefficients: &CoefficientSequence| {
//!     println!("{}", coefficients.to_query());
//! });
//!
//! let sequence = collector.submit()?;
//! assert_eq!(sequence.as_slice(), &[-6.0, 0.0, 0.0, 1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod collector; // Degree input, field list and submission
pub mod config;    // Collector configuration
pub mod outcome;   // Result-display contract
pub mod sequence;  // Coefficient sequence and its encodings
pub mod term;      // Single entry slot and exponent normalization

// Re-exports for convenience
pub use collector::{
    CollectorError, CollectorState, Degree, DegreeError, EntryError, SubmitError, SubmitHandler,
    TermCollector,
};
pub use config::CollectorConfig;
pub use outcome::{FactorOutcome, FactorReport, Factored, OutcomeError};
pub use sequence::{CoefficientSequence, FactorInputError};
pub use term::{Adjustment, CheckedExponent, FieldId, Label, TermField};
