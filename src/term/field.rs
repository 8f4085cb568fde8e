//! A single coefficient-entry slot

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use super::exponent::{normalize, Adjustment, CheckedExponent};

/// Stable identifier of a slot, derived from its exponent at creation.
///
/// Renders as `x^<n>`, the same name the factoring API uses for the
/// coefficient of `x^n`, and parses back to the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u32);

impl FieldId {
    /// Identifier for the slot holding the coefficient of `x^exponent`
    pub fn new(exponent: u32) -> Self {
        Self(exponent)
    }

    /// Exponent encoded in the identifier
    pub fn exponent(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x^{}", self.0)
    }
}

/// Errors parsing a [`FieldId`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldIdError {
    /// Text is not of the form `x^<n>`
    #[error("malformed field id '{0}', expected x^<n>")]
    Malformed(String),
}

impl FromStr for FieldId {
    type Err = FieldIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("x^")
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(FieldId)
            .ok_or_else(|| FieldIdError::Malformed(s.to_string()))
    }
}

/// Variable label rendered next to the entry, as TeX
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(u32);

impl Label {
    /// Exponent shown by the label
    pub fn exponent(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "x"),
            n => write!(f, "x^{{{}}}", n),
        }
    }
}

/// One numeric entry for a fixed exponent
#[derive(Debug, Clone)]
pub struct TermField {
    id: Option<FieldId>,
    exponent: f64,
    checked: CheckedExponent,
    diagnostics: Vec<Adjustment>,
    entry: String,
}

impl TermField {
    /// Field for `exponent`, without an identifier
    pub fn new(exponent: f64) -> Self {
        let mut field = Self {
            id: None,
            exponent,
            checked: CheckedExponent::default(),
            diagnostics: Vec::new(),
            entry: String::new(),
        };
        field.recompute();
        field
    }

    /// Field addressed by `id`; its exponent is the one encoded in the id
    pub fn with_id(id: FieldId) -> Self {
        let mut field = Self::new(id.exponent() as f64);
        field.id = Some(id);
        field
    }

    /// Identifier assigned by the collector, if any
    pub fn id(&self) -> Option<FieldId> {
        self.id
    }

    /// Exponent as supplied
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Change the exponent. Normalization reruns only when the value differs.
    pub fn set_exponent(&mut self, exponent: f64) {
        if exponent.to_bits() == self.exponent.to_bits() {
            return;
        }
        self.exponent = exponent;
        self.recompute();
    }

    fn recompute(&mut self) {
        let (checked, diagnostics) = normalize(self.exponent);
        for adjustment in &diagnostics {
            warn!(exponent = self.exponent, "{}", adjustment);
        }
        self.checked = checked;
        self.diagnostics = diagnostics;
    }

    /// Normalized exponent used for display
    pub fn checked_exponent(&self) -> CheckedExponent {
        self.checked
    }

    /// Corrections made by the most recent normalization
    pub fn diagnostics(&self) -> &[Adjustment] {
        &self.diagnostics
    }

    /// Label to render, or `None` for the constant term
    pub fn label(&self) -> Option<Label> {
        if self.checked.is_constant() {
            None
        } else {
            Some(Label(self.checked.get()))
        }
    }

    /// Raw text currently in the entry
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Replace the entry text. Any text is accepted here.
    pub fn set_entry(&mut self, text: impl Into<String>) {
        self.entry = text.into();
    }

    /// Whether the entry is blank (and will resolve to zero)
    pub fn is_blank(&self) -> bool {
        self.entry.trim().is_empty()
    }
}
