//! Factoring results as consumed by the result display
//!
//! Mirrors the factoring API's JSON:
//! `{"result": "full", "factored": {"expression": "...", "intercepts": [...]}}`.
//! `not` and `error` carry no factored expression.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors reading or validating a [`FactorReport`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// Tag is not one of `full | quadratic | partial | not | error`
    #[error("unknown factoring result '{0}'")]
    UnknownTag(String),

    /// A successful result arrived without its expression
    #[error("result '{0}' requires a factored expression")]
    MissingFactored(FactorOutcome),

    /// A failed result arrived with an expression
    #[error("result '{0}' must not carry a factored expression")]
    UnexpectedFactored(FactorOutcome),
}

/// Outcome tag reported by the factoring collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FactorOutcome {
    /// Fully factored by grouping or the rational root theorem
    Full,
    /// Fully factored using the quadratic formula
    Quadratic,
    /// Some factors found, a remainder could not be factored
    Partial,
    /// Could not be factored
    Not,
    /// The factoring service failed
    Error,
}

impl FactorOutcome {
    /// All tags, in display order
    pub const ALL: [FactorOutcome; 5] = [
        FactorOutcome::Full,
        FactorOutcome::Quadratic,
        FactorOutcome::Partial,
        FactorOutcome::Not,
        FactorOutcome::Error,
    ];

    /// Wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            FactorOutcome::Full => "full",
            FactorOutcome::Quadratic => "quadratic",
            FactorOutcome::Partial => "partial",
            FactorOutcome::Not => "not",
            FactorOutcome::Error => "error",
        }
    }

    /// Sentence shown in the result header
    pub fn summary(self) -> &'static str {
        match self {
            FactorOutcome::Full => "The polynomial was fully factored.",
            FactorOutcome::Quadratic => {
                "The polynomial was fully factored using the quadratic formula."
            }
            FactorOutcome::Partial => "The polynomial was partially factored.",
            FactorOutcome::Not => "The polynomial could not be factored.",
            FactorOutcome::Error => "An error occurred and the polynomial could not be factored.",
        }
    }

    /// `not` and `error` end without an expression
    pub fn is_failure(self) -> bool {
        matches!(self, FactorOutcome::Not | FactorOutcome::Error)
    }
}

impl fmt::Display for FactorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorOutcome {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FactorOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.as_str() == s)
            .ok_or_else(|| OutcomeError::UnknownTag(s.to_string()))
    }
}

/// Factored form of a polynomial
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factored {
    /// Factored expression, e.g. `(x + 2)(x - 1)(x - 3)`
    pub expression: String,
    /// x-intercepts as display strings
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub intercepts: Vec<String>,
}

/// Tagged outcome plus, for successful tags, the factored form
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorReport {
    /// Outcome tag
    pub result: FactorOutcome,
    /// Present exactly when `result` is not a failure
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub factored: Option<Factored>,
}

impl FactorReport {
    /// Report for `not` or `error`
    pub fn failed(result: FactorOutcome) -> Self {
        Self {
            result,
            factored: None,
        }
    }

    /// Report for a successful tag
    pub fn factored(
        result: FactorOutcome,
        expression: impl Into<String>,
        intercepts: Vec<String>,
    ) -> Self {
        Self {
            result,
            factored: Some(Factored {
                expression: expression.into(),
                intercepts,
            }),
        }
    }

    /// Check that `factored` is present exactly for the successful tags
    pub fn validate(&self) -> Result<(), OutcomeError> {
        match (self.result.is_failure(), self.factored.is_some()) {
            (true, true) => Err(OutcomeError::UnexpectedFactored(self.result)),
            (false, false) => Err(OutcomeError::MissingFactored(self.result)),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for FactorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RESULT: {}", self.result.summary())?;
        if let Some(factored) = self.factored.as_ref().filter(|_| !self.result.is_failure()) {
            write!(f, "\nExpression: {}", factored.expression)?;
            write!(f, "\nIntercepts: {}", factored.intercepts.join(", "))?;
        }
        Ok(())
    }
}
