//! Coefficient sequences handed to the factoring collaborator
//!
//! Values are indexed by exponent: index 0 is the constant term and the last
//! index is the leading coefficient. The encodings below are the shapes the
//! collaborator has historically consumed.

use std::collections::BTreeMap;

use thiserror::Error;

/// Input rules enforced by the factoring API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactorInputError {
    /// The API only factors degree 2 and above
    #[error("degree {0} is below 2")]
    DegreeTooSmall(u32),

    /// Constant or leading coefficient is zero
    #[error("x^{0} must not be 0")]
    ZeroCoefficient(u32),
}

/// Coefficients of one submitted polynomial, indexed by exponent
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CoefficientSequence(Vec<f64>);

impl CoefficientSequence {
    /// Wrap values ordered by exponent (`values[0]` is the constant term)
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Highest exponent, or `None` for an empty sequence
    pub fn degree(&self) -> Option<u32> {
        self.0.len().checked_sub(1).map(|d| d as u32)
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no coefficients
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coefficient of `x^exponent`
    pub fn get(&self, exponent: u32) -> Option<f64> {
        self.0.get(exponent as usize).copied()
    }

    /// Values indexed by exponent
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// `(exponent, coefficient)` pairs, highest exponent first
    pub fn iter_descending(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .rev()
            .map(|(exponent, &value)| (exponent as u32, value))
    }

    /// Mapping keyed by exponent
    pub fn to_exponent_map(&self) -> BTreeMap<u32, f64> {
        self.0
            .iter()
            .enumerate()
            .map(|(exponent, &value)| (exponent as u32, value))
            .collect()
    }

    /// URL-encoded query string for the factoring API:
    /// `degree=<d>&x%5E0=<c0>&…&x%5E<d>=<cd>`
    ///
    /// Parameter names are `x^<n>` with the `^` percent-encoded, so the
    /// result can be appended to a request URL as is.
    pub fn to_query(&self) -> String {
        let mut query = format!("degree={}", self.degree().unwrap_or(0));
        for (exponent, value) in self.0.iter().enumerate() {
            query.push_str(&format!("&x%5E{}={}", exponent, value));
        }
        query
    }

    /// Check the polynomial against the factoring API's input rules
    pub fn check_factorable(&self) -> Result<(), FactorInputError> {
        let degree = self.degree().unwrap_or(0);
        if degree < 2 {
            return Err(FactorInputError::DegreeTooSmall(degree));
        }
        for exponent in [0, degree] {
            if self.get(exponent) == Some(0.0) {
                return Err(FactorInputError::ZeroCoefficient(exponent));
            }
        }
        Ok(())
    }
}

impl From<Vec<f64>> for CoefficientSequence {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
