//! Degree validation for the "Go" step

use std::fmt;

use thiserror::Error;

/// Errors produced while validating a requested degree
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DegreeError {
    /// Nothing was entered (treated as not-a-number)
    #[error("no degree was entered")]
    Empty,

    /// Input is not a number
    #[error("degree '{0}' is not a number")]
    NotANumber(String),

    /// Input has a fractional part
    #[error("degree {0} is not an integer")]
    NotAnInteger(f64),

    /// Input is an integer below the configured threshold
    #[error("degree {value} is below the minimum of {min}")]
    BelowMinimum {
        /// Degree that was requested
        value: f64,
        /// Smallest accepted degree
        min: u32,
    },

    /// Input is above the configured maximum (or infinite)
    #[error("degree {0} is out of range")]
    OutOfRange(f64),
}

/// Validated polynomial degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u32);

impl Degree {
    /// Parse and validate user input against `min_degree..=max_degree`.
    ///
    /// Surrounding whitespace is ignored. The value must be a finite
    /// integer that is at least `min_degree` and at most `max_degree`.
    pub fn parse(input: &str, min_degree: u32, max_degree: u32) -> Result<Self, DegreeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DegreeError::Empty);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| DegreeError::NotANumber(trimmed.to_string()))?;
        if value.is_nan() {
            return Err(DegreeError::NotANumber(trimmed.to_string()));
        }

        Self::from_value(value, min_degree, max_degree)
    }

    /// Validate an already-numeric degree against `min_degree..=max_degree`.
    pub fn from_value(value: f64, min_degree: u32, max_degree: u32) -> Result<Self, DegreeError> {
        if value.is_nan() {
            return Err(DegreeError::NotANumber(value.to_string()));
        }
        if value.is_infinite() {
            return Err(DegreeError::OutOfRange(value));
        }
        if value.fract() != 0.0 {
            return Err(DegreeError::NotAnInteger(value));
        }
        if value < min_degree as f64 {
            return Err(DegreeError::BelowMinimum {
                value,
                min: min_degree,
            });
        }
        if value > max_degree as f64 {
            return Err(DegreeError::OutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    /// Highest exponent
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of coefficient slots (`degree + 1`)
    pub fn term_count(self) -> usize {
        self.0 as usize + 1
    }

    /// Exponents in render order: `degree, degree - 1, …, 0`
    pub fn exponents(self) -> impl Iterator<Item = u32> {
        (0..=self.0).rev()
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
