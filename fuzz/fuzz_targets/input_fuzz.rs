//! Fuzz test for untrusted enum input
//!
//! Feeds arbitrary bytes through every boundary that turns outside input
//! into an enum value (text parsing, JSON, value construction, named
//! lookup) and checks that accepted input always yields a declared member.
//!
//! Run with: cargo +nightly fuzz run input_fuzz -- -max_total_time=60

#![no_main]

use enumkit_test_utils::fixtures::{Fixture, LooseFixture};
use enumkit_test_utils::{EnumType, EnumValue, Scalar};
use libfuzzer_sys::fuzz_target;

fn check_member<T: EnumType>(value: &EnumValue<T>) {
    let declared = T::values().get(value.key());
    assert_eq!(declared, Some(value.value()), "Accepted value must be declared");
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(value) = input.parse::<EnumValue<Fixture>>() {
            check_member(&value);
        }
        if let Ok(value) = EnumValue::<LooseFixture>::new(Scalar::from(input)) {
            check_member(&value);
        }
        if let Ok(value) = Fixture::from_name(input) {
            assert_eq!(value.key(), input);
        }
        assert_eq!(Fixture::is_valid_key(input), Fixture::from_name(input).is_ok());
    }

    if let Ok(value) = serde_json::from_slice::<EnumValue<Fixture>>(data) {
        check_member(&value);
    }
});
