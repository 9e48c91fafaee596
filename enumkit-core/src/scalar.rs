//! Scalar member values

use crate::MatchMode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The underlying value of an enum member.
///
/// String members listed in an enum's `declare()` usually borrow `'static`
/// literals; scalars built from untrusted input own their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Str(Cow<'static, str>),
}

impl Scalar {
    /// Build a string scalar in `const` context.
    pub const fn str(value: &'static str) -> Self {
        Scalar::Str(Cow::Borrowed(value))
    }

    /// Build an integer scalar in `const` context.
    pub const fn int(value: i64) -> Self {
        Scalar::Int(value)
    }

    /// Build a boolean scalar in `const` context.
    pub const fn bool(value: bool) -> Self {
        Scalar::Bool(value)
    }

    /// Short name of the scalar kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Str(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Compare two scalars under the given match mode.
    pub fn matches(&self, other: &Scalar, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Strict => self == other,
            MatchMode::Loose => self.loosely_eq(other),
        }
    }

    /// Coercive equality across scalar kinds.
    ///
    /// Integers equal numeric strings, booleans equal the truthiness of
    /// the other side. Same-kind comparison is plain equality.
    pub fn loosely_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Int(i), Scalar::Str(s)) | (Scalar::Str(s), Scalar::Int(i)) => {
                s.trim().parse::<i64>().map(|n| n == *i).unwrap_or(false)
            }
            (Scalar::Bool(b), Scalar::Int(i)) | (Scalar::Int(i), Scalar::Bool(b)) => {
                (*i != 0) == *b
            }
            (Scalar::Bool(b), Scalar::Str(s)) | (Scalar::Str(s), Scalar::Bool(b)) => {
                str_truthy(s) == *b
            }
            _ => self == other,
        }
    }

    /// Whether `text` is the textual form of this scalar.
    ///
    /// Strings match exactly, integers by decimal parse, booleans by
    /// `true`/`false`.
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            Scalar::Str(s) => s == text,
            Scalar::Int(i) => text.parse::<i64>().map(|n| n == *i).unwrap_or(false),
            Scalar::Bool(b) => match text {
                "true" => *b,
                "false" => !*b,
                _ => false,
            },
        }
    }
}

fn str_truthy(s: &str) -> bool {
    !(s.is_empty() || s == "0")
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(Cow::Owned(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_textual_form() {
        assert_eq!(Scalar::int(42).to_string(), "42");
        assert_eq!(Scalar::str("foo").to_string(), "foo");
        assert_eq!(Scalar::bool(false).to_string(), "false");
    }

    #[test]
    fn test_borrowed_and_owned_strings_are_equal() {
        assert_eq!(Scalar::str("foo"), Scalar::from("foo".to_string()));
    }

    #[test]
    fn test_strict_match_distinguishes_kinds() {
        assert!(!Scalar::int(42).matches(&Scalar::from("42"), MatchMode::Strict));
        assert!(Scalar::int(42).matches(&Scalar::from(42), MatchMode::Strict));
    }

    #[test]
    fn test_loose_match_int_and_numeric_string() {
        assert!(Scalar::int(42).matches(&Scalar::from("42"), MatchMode::Loose));
        assert!(Scalar::from(" 42 ").loosely_eq(&Scalar::int(42)));
        assert!(!Scalar::int(42).loosely_eq(&Scalar::from("42abc")));
        assert!(!Scalar::int(42).loosely_eq(&Scalar::from("")));
    }

    #[test]
    fn test_loose_match_bool_truthiness() {
        assert!(Scalar::bool(true).loosely_eq(&Scalar::int(7)));
        assert!(Scalar::bool(false).loosely_eq(&Scalar::int(0)));
        assert!(Scalar::bool(false).loosely_eq(&Scalar::from("0")));
        assert!(Scalar::bool(true).loosely_eq(&Scalar::from("foo")));
        assert!(!Scalar::bool(true).loosely_eq(&Scalar::from("")));
    }

    #[test]
    fn test_loose_match_same_kind_is_plain_equality() {
        assert!(!Scalar::str("foo").loosely_eq(&Scalar::str("bar")));
        assert!(Scalar::str("foo").loosely_eq(&Scalar::from("foo")));
    }

    #[test]
    fn test_matches_text() {
        assert!(Scalar::str("foo").matches_text("foo"));
        assert!(!Scalar::str("foo").matches_text("FOO"));
        assert!(Scalar::int(42).matches_text("42"));
        assert!(!Scalar::int(42).matches_text(" 42"));
        assert!(Scalar::bool(true).matches_text("true"));
        assert!(!Scalar::bool(true).matches_text("1"));
    }

    #[test]
    fn test_json_is_untagged() {
        let json = serde_json::to_string(&vec![
            Scalar::str("foo"),
            Scalar::int(42),
            Scalar::bool(true),
        ])
        .unwrap();
        assert_eq!(json, r#"["foo",42,true]"#);

        let back: Vec<Scalar> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[1], Scalar::int(42));
        assert_eq!(back[0].kind(), "string");
    }
}
