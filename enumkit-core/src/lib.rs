//! enumkit Core - Closed Scalar Enums
//!
//! An enum type is a fixed, ordered set of named scalar constants. This crate
//! provides the declaration contract ([`EnumType`]), the validated value type
//! ([`EnumValue`]) and the lazily populated, process-wide definition cache
//! behind them. It holds no I/O and never installs a tracing subscriber.

mod config;
mod definition;
mod error;
mod macros;
pub mod registry;
mod scalar;
mod value;

pub use config::{EnumOptions, MatchMode};
pub use definition::EnumDefinition;
pub use error::{ConfigError, EnumError, EnumResult};
pub use scalar::Scalar;
pub use value::{EnumType, EnumValue};

// Re-exported so downstream signatures can name the mapping type.
pub use indexmap::IndexMap;

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    crate::scalar_enum! {
        struct Sample {
            FOO = "foo",
            BAR = "bar",
            NUMBER = 42,
        }
    }

    fn arb_member() -> impl Strategy<Value = (&'static str, Scalar)> {
        prop_oneof![
            Just(("FOO", Scalar::str("foo"))),
            Just(("BAR", Scalar::str("bar"))),
            Just(("NUMBER", Scalar::int(42))),
        ]
    }

    fn arb_non_member() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            "[a-z]{0,8}"
                .prop_filter("declared value", |s| s != "foo" && s != "bar")
                .prop_map(Scalar::from),
            any::<i64>()
                .prop_filter("declared value", |i| *i != 42)
                .prop_map(Scalar::Int),
            any::<bool>().prop_map(Scalar::Bool),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Constructing from any declared value keeps that value.
        #[test]
        fn prop_construct_keeps_declared_value((key, value) in arb_member()) {
            let built = EnumValue::<Sample>::new(value.clone()).unwrap();
            prop_assert_eq!(built.value(), &value);
            prop_assert_eq!(built.key(), key);
            prop_assert_eq!(built.to_string(), value.to_string());
        }

        /// Any scalar outside the declared set is rejected.
        #[test]
        fn prop_construct_rejects_non_members(value in arb_non_member()) {
            let result = EnumValue::<Sample>::new(value.clone());
            let is_invalid_value = matches!(result, Err(EnumError::InvalidValue { .. }));
            prop_assert!(is_invalid_value);
            prop_assert!(!Sample::is_valid(&value));
        }

        /// Named construction agrees with value construction.
        #[test]
        fn prop_from_name_agrees_with_new((key, value) in arb_member()) {
            prop_assert_eq!(
                Sample::from_name(key).unwrap(),
                EnumValue::<Sample>::new(value).unwrap()
            );
        }

        /// Only declared names are valid keys.
        #[test]
        fn prop_unknown_names_are_rejected(name in "[A-Za-z_]{1,10}") {
            let declared = ["FOO", "BAR", "NUMBER"].contains(&name.as_str());
            prop_assert_eq!(Sample::is_valid_key(&name), declared);
            prop_assert_eq!(Sample::from_name(&name).is_ok(), declared);
        }

        /// Listing is stable across calls.
        #[test]
        fn prop_listing_is_stable(_dummy in any::<u8>()) {
            prop_assert_eq!(Sample::keys(), vec!["FOO", "BAR", "NUMBER"]);
            prop_assert!(std::ptr::eq(Sample::values(), Sample::values()));
        }
    }
}
