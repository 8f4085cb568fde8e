//! Collector configuration
//!
//! The canonical form accepts degrees from 3 upwards; the legacy form
//! (the one that also fed trinomials to the factoring API) accepts 2.

/// Minimum degree accepted by the canonical form.
pub const DEFAULT_MIN_DEGREE: u32 = 3;

/// Minimum degree accepted by the legacy form.
pub const LEGACY_MIN_DEGREE: u32 = 2;

/// Largest degree accepted unless configured otherwise
pub const DEFAULT_MAX_DEGREE: u32 = 1024;

/// Configuration parameters for a [`TermCollector`](crate::TermCollector)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Smallest degree the "Go" step accepts
    pub min_degree: u32,

    /// Largest degree the "Go" step accepts; bounds the field list
    pub max_degree: u32,

    /// Keep the rendered fields when a later "Go" fails validation.
    /// Off by default: a failed check drops back to `Idle`.
    pub keep_fields_on_error: bool,

    /// Preserve entries for exponents shared by the old and new degree
    /// when the field list is regenerated. Off by default.
    pub carry_over_entries: bool,
}

impl CollectorConfig {
    /// Canonical configuration (minimum degree 3, discard on regeneration)
    pub fn new() -> Self {
        Self {
            min_degree: DEFAULT_MIN_DEGREE,
            max_degree: DEFAULT_MAX_DEGREE,
            keep_fields_on_error: false,
            carry_over_entries: false,
        }
    }

    /// Legacy configuration accepting quadratics
    pub fn legacy() -> Self {
        Self {
            min_degree: LEGACY_MIN_DEGREE,
            ..Self::new()
        }
    }

    /// Override the minimum degree.
    pub fn with_min_degree(mut self, min_degree: u32) -> Self {
        self.min_degree = min_degree;
        self
    }

    /// Override the maximum degree.
    pub fn with_max_degree(mut self, max_degree: u32) -> Self {
        self.max_degree = max_degree;
        self
    }

    /// Toggle whether fields survive a failed degree check.
    pub fn with_keep_fields_on_error(mut self, keep: bool) -> Self {
        self.keep_fields_on_error = keep;
        self
    }

    /// Toggle carrying entries over across regenerations.
    pub fn with_carry_over_entries(mut self, carry: bool) -> Self {
        self.carry_over_entries = carry;
        self
    }

    /// Fixed banner text shown whenever the degree check fails
    pub fn degree_error_message(&self) -> String {
        format!(
            "Error: the degree must be an integer between {} and {}",
            self.min_degree, self.max_degree
        )
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
