//! Exponent normalization
//!
//! Any `f64` converges to a non-negative integer label:
//! 1. round to nearest (ties toward +∞)
//! 2. absolute value
//!
//! Every step that changes the value is reported as an [`Adjustment`].

use std::fmt;

/// Exponent after round/absolute-value normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CheckedExponent(u32);

impl CheckedExponent {
    /// Wrap an exponent that is already a non-negative integer
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Underlying value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Constant terms carry no variable symbol
    pub fn is_constant(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CheckedExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One correction applied while normalizing an exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Non-integral value rounded to the nearest integer
    Rounded {
        /// Value as supplied
        from: f64,
        /// Rounded value
        to: f64,
    },

    /// Negative value replaced by its absolute value
    Flipped {
        /// Value after rounding, before the flip
        from: f64,
        /// Absolute value
        to: f64,
    },

    /// Value with no `u32` counterpart (NaN, infinities, overflow)
    Saturated {
        /// Value before saturation
        from: f64,
        /// Value actually used
        to: u32,
    },
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Adjustment::Rounded { from, to } => write!(
                f,
                "exponent '{}' was rounded to '{}'",
                format_two_places(from),
                format_two_places(to)
            ),
            Adjustment::Flipped { from, to } => write!(
                f,
                "exponent '{}' was flipped to '{}'",
                format_two_places(from),
                format_two_places(to)
            ),
            Adjustment::Saturated { from, to } => write!(
                f,
                "exponent '{}' was replaced with '{}'",
                format_two_places(from),
                to
            ),
        }
    }
}

/// Normalize `exponent`, returning the label value and every correction made.
///
/// Never fails; the adjustments are informational.
pub fn normalize(exponent: f64) -> (CheckedExponent, Vec<Adjustment>) {
    let mut adjustments = Vec::new();

    if !exponent.is_finite() {
        let to = if exponent.is_nan() { 0 } else { u32::MAX };
        adjustments.push(Adjustment::Saturated { from: exponent, to });
        return (CheckedExponent(to), adjustments);
    }

    let mut value = exponent;

    let rounded = round_half_up(value);
    if rounded != value {
        adjustments.push(Adjustment::Rounded {
            from: value,
            to: rounded,
        });
        value = rounded;
    }

    // -0.0 compares equal to 0.0 and is left alone
    if value < 0.0 {
        let flipped = value.abs();
        adjustments.push(Adjustment::Flipped {
            from: value,
            to: flipped,
        });
        value = flipped;
    }

    if value > u32::MAX as f64 {
        adjustments.push(Adjustment::Saturated {
            from: value,
            to: u32::MAX,
        });
        return (CheckedExponent(u32::MAX), adjustments);
    }

    (CheckedExponent(value as u32), adjustments)
}

/// Round to nearest, ties toward positive infinity (so -2.5 → -2)
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// At most two decimals, trailing zeros dropped: 3.1415 → "3.14", -3.0 → "-3"
///
/// Halves round away from zero (0.125 → "0.13"); `{:.2}` alone would
/// round them to even.
pub(crate) fn format_two_places(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = (value.abs() * 100.0 + 0.5).floor();
    let magnitude = if scaled.is_finite() {
        scaled / 100.0
    } else {
        value.abs()
    };
    let fixed = format!("{:.2}", magnitude.copysign(value));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
