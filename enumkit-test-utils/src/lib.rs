//! enumkit Test Utilities
//!
//! Centralized test infrastructure for the enumkit workspace:
//! - Reference fixture enums
//! - Proptest generators for members and non-members
//! - Custom assertions for enumkit-specific validation
//! - Test-scoped tracing setup

// Re-export core types for convenience
pub use enumkit_core::{
    scalar_enum, EnumDefinition, EnumError, EnumOptions, EnumResult, EnumType, EnumValue,
    MatchMode, Scalar,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a test-writer subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `enumkit_core=trace`. Returns `false` when
/// another subscriber was already installed.
pub fn init_test_tracing() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enumkit_core=trace"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Reference enum types used across the test suites.

    use super::*;

    scalar_enum! {
        /// The reference enum: two string members and one integer member.
        pub struct Fixture {
            FOO = "foo",
            BAR = "bar",
            NUMBER = 42,
        }
    }

    scalar_enum! {
        /// Same members as [`Fixture`], compared with coercive equality.
        pub struct LooseFixture [EnumOptions::loose()] {
            FOO = "foo",
            BAR = "bar",
            NUMBER = 42,
        }
    }

    scalar_enum! {
        /// Boolean and integer members, trimming text input.
        pub struct Switch [EnumOptions::strict().with_trim_input(true)] {
            ENABLED = true,
            DISABLED = false,
            UNKNOWN = -1,
        }
    }

    /// Declared `(name, value)` pairs of [`Fixture`], in declaration order.
    pub fn fixture_members() -> Vec<(&'static str, Scalar)> {
        vec![
            ("FOO", Scalar::str("foo")),
            ("BAR", Scalar::str("bar")),
            ("NUMBER", Scalar::int(42)),
        ]
    }
}

// ============================================================================
// GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest generators for enumkit types.

    use super::fixtures::Fixture;
    use super::*;
    use proptest::prelude::*;

    /// Generate any scalar.
    pub fn arb_scalar() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            any::<bool>().prop_map(Scalar::Bool),
            any::<i64>().prop_map(Scalar::Int),
            ".{0,16}".prop_map(Scalar::from),
        ]
    }

    /// Generate a declared `(name, value)` pair of [`Fixture`].
    pub fn arb_fixture_member() -> impl Strategy<Value = (&'static str, Scalar)> {
        prop::sample::select(fixtures::fixture_members())
    }

    /// Generate a [`Fixture`] value.
    pub fn arb_fixture_value() -> impl Strategy<Value = EnumValue<Fixture>> {
        prop_oneof![
            Just(Fixture::FOO()),
            Just(Fixture::BAR()),
            Just(Fixture::NUMBER()),
        ]
    }

    /// Generate a scalar that is not a strict member of [`Fixture`].
    pub fn arb_invalid_scalar() -> impl Strategy<Value = Scalar> {
        arb_scalar().prop_filter("declared Fixture value", |value| {
            !fixtures::fixture_members()
                .iter()
                .any(|(_, member)| member == value)
        })
    }

    /// Generate a name that is not a declared [`Fixture`] constant.
    pub fn arb_unknown_name() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_]{0,12}".prop_filter("declared Fixture name", |name| {
            !matches!(name.as_str(), "FOO" | "BAR" | "NUMBER")
        })
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for enumkit-specific validation.

    use super::*;

    /// Assert that a result is an `InvalidValue` error for `enum_name`.
    #[track_caller]
    pub fn assert_invalid_value<T: std::fmt::Debug>(result: &EnumResult<T>, enum_name: &str) {
        match result {
            Err(EnumError::InvalidValue { enum_name: name, .. }) => {
                assert_eq!(name, enum_name, "Wrong enum name in InvalidValue error");
            }
            other => panic!("Expected InvalidValue error for {}, got: {:?}", enum_name, other),
        }
    }

    /// Assert that a result is an `UnknownMember` error for `name`.
    #[track_caller]
    pub fn assert_unknown_member<T: std::fmt::Debug>(result: &EnumResult<T>, name: &str) {
        match result {
            Err(EnumError::UnknownMember { name: got, .. }) => {
                assert_eq!(got, name, "Wrong member name in UnknownMember error");
            }
            other => panic!("Expected UnknownMember error for {}, got: {:?}", name, other),
        }
    }

    /// Assert that `T` declares exactly `expected`, in order.
    #[track_caller]
    pub fn assert_members<T: EnumType>(expected: &[(&str, Scalar)]) {
        let actual: Vec<(&str, &Scalar)> = T::members().map(|(k, v)| (*k, v)).collect();
        let expected: Vec<(&str, &Scalar)> = expected.iter().map(|(k, v)| (*k, v)).collect();
        assert_eq!(actual, expected, "Members of {} differ", T::NAME);
    }
}

// ============================================================================
// TESTS
// ============================================================================
