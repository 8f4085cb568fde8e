//! Property tests for the collector and term fields
//!
//! Degree checks, exponent normalization and submission placement over
//! generated inputs.

use proptest::prelude::*;
use termform::{Adjustment, CollectorConfig, FieldId, TermCollector, TermField};

proptest! {
    #[test]
    fn valid_degree_renders_one_field_per_exponent(degree in 3u32..64) {
        let mut collector = TermCollector::default();
        collector.set_degree_input(degree.to_string());
        prop_assert!(collector.go().is_ok());
        prop_assert_eq!(collector.field_count(), degree as usize + 1);
        prop_assert!(collector.validation_error().is_none());

        let exponents: Vec<u32> = collector.slots().iter().map(|id| id.exponent()).collect();
        let expected: Vec<u32> = (0..=degree).rev().collect();
        prop_assert_eq!(exponents, expected, "fields must render highest exponent first");
    }

    #[test]
    fn small_degree_renders_nothing(degree in -50i64..3) {
        let mut collector = TermCollector::default();
        collector.set_degree_input(degree.to_string());
        prop_assert!(collector.go().is_err());
        prop_assert_eq!(collector.field_count(), 0);
        prop_assert!(!collector.validation_error().unwrap_or("").is_empty());
    }

    #[test]
    fn fractional_degree_renders_nothing(whole in 3u32..100, frac in 0.01f64..0.99) {
        let mut collector = TermCollector::default();
        collector.set_degree_input(format!("{}", whole as f64 + frac));
        prop_assert!(collector.go().is_err());
        prop_assert_eq!(collector.field_count(), 0);
        prop_assert!(collector.validation_error().is_some());
    }

    #[test]
    fn checked_exponent_is_non_negative_integer(exponent in -1.0e6f64..1.0e6) {
        let field = TermField::new(exponent);
        let checked = field.checked_exponent().get() as f64;
        prop_assert!((checked - exponent.abs()).abs() <= 1.0);

        let unchanged = exponent.fract() == 0.0 && exponent >= 0.0;
        prop_assert_eq!(
            field.diagnostics().is_empty(),
            unchanged,
            "diagnostics must be reported exactly when {} is adjusted",
            exponent
        );
        if unchanged {
            prop_assert_eq!(checked, exponent);
        }
    }

    #[test]
    fn oversized_exponent_saturates(exponent in 4.3e9f64..1.0e15) {
        let field = TermField::new(exponent);
        prop_assert_eq!(field.checked_exponent().get(), u32::MAX);
        let saturated = matches!(
            field.diagnostics().last(),
            Some(Adjustment::Saturated { to: u32::MAX, .. })
        );
        prop_assert!(saturated);
    }

    #[test]
    fn integral_exponent_needs_no_correction(exponent in 0u32..100_000) {
        let field = TermField::new(exponent as f64);
        prop_assert_eq!(field.checked_exponent().get(), exponent);
        prop_assert!(field.diagnostics().is_empty());
    }

    #[test]
    fn submission_places_values_by_exponent(
        values in proptest::collection::vec(-1000i32..1000, 4..12)
    ) {
        let degree = values.len() - 1;
        let mut collector = TermCollector::new(CollectorConfig::default());
        collector.set_degree_input(degree.to_string());
        prop_assert!(collector.go().is_ok());

        for (exponent, value) in values.iter().enumerate() {
            prop_assert!(collector.set_entry(FieldId::new(exponent as u32), value.to_string()).is_ok());
        }

        let sequence = collector.submit().expect("integer entries are numeric");
        let expected: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }
}
