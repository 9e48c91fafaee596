//! Enum types and validated values

use crate::{registry, EnumDefinition, EnumError, EnumOptions, EnumResult, Scalar};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// A closed set of named scalar constants.
///
/// Implementors declare their members once, in order; everything else is
/// derived from that declaration, which is discovered on first use and then
/// cached for the life of the process. Use [`scalar_enum!`](crate::scalar_enum)
/// rather than implementing this by hand.
pub trait EnumType: Sized + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Declared members, in declaration order.
    fn declare() -> Vec<(&'static str, Scalar)>;

    fn options() -> EnumOptions {
        EnumOptions::default()
    }

    /// The cached member definition for this type.
    fn definition() -> &'static EnumDefinition {
        registry::definition_of::<Self>()
    }

    /// Declared constant names in declaration order.
    fn keys() -> Vec<&'static str> {
        Self::definition().keys()
    }

    /// Name to value mapping in declaration order.
    fn values() -> &'static IndexMap<&'static str, Scalar> {
        Self::definition().values()
    }

    fn members() -> indexmap::map::Iter<'static, &'static str, Scalar> {
        Self::definition().values().iter()
    }

    /// Whether `value` is one of the declared values, under this type's
    /// match mode.
    fn is_valid(value: &Scalar) -> bool {
        Self::definition().contains_value(value, Self::options().match_mode)
    }

    /// Whether `key` is exactly one of the declared names.
    fn is_valid_key(key: &str) -> bool {
        Self::definition().contains_key(key)
    }

    /// Construct a value from a declared constant name.
    fn from_name(name: &str) -> EnumResult<EnumValue<Self>> {
        EnumValue::from_name(name)
    }
}

/// One validated member of `T`. Immutable once built.
pub struct EnumValue<T: EnumType> {
    value: Scalar,
    key: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T: EnumType> EnumValue<T> {
    /// Construct from a candidate value, failing with
    /// [`EnumError::InvalidValue`] if it is not a declared member.
    ///
    /// Under loose matching the stored value is the declared one, not the
    /// candidate.
    pub fn new(value: impl Into<Scalar>) -> EnumResult<Self> {
        let candidate = value.into();
        match T::definition().find(&candidate, T::options().match_mode) {
            Some((key, member)) => Ok(Self::from_member(key, member)),
            None => {
                tracing::trace!(
                    enum_name = T::NAME,
                    value = %candidate,
                    kind = candidate.kind(),
                    "Rejected enum value"
                );
                Err(EnumError::invalid_value(T::NAME, candidate.to_string()))
            }
        }
    }

    /// Construct from possibly absent input. `None` is never a member.
    pub fn from_option(value: Option<Scalar>) -> EnumResult<Self> {
        match value {
            Some(value) => Self::new(value),
            None => {
                tracing::trace!(enum_name = T::NAME, "Rejected absent enum value");
                Err(EnumError::invalid_value(T::NAME, "null"))
            }
        }
    }

    /// Construct from a declared constant name, failing with
    /// [`EnumError::UnknownMember`] otherwise.
    pub fn from_name(name: &str) -> EnumResult<Self> {
        let definition = T::definition();
        match definition.values().get_key_value(name) {
            Some((key, member)) => Ok(Self::from_member(*key, member)),
            None => {
                tracing::trace!(enum_name = T::NAME, name, "Rejected enum member name");
                Err(EnumError::unknown_member(T::NAME, name))
            }
        }
    }

    /// Accessor used by [`scalar_enum!`](crate::scalar_enum).
    ///
    /// `(key, value)` must be a declared member of `T`; this is checked in
    /// debug builds only.
    #[doc(hidden)]
    pub fn __declared(key: &'static str, value: Scalar) -> Self {
        debug_assert!(
            T::definition().get(key) == Some(&value),
            "{}::{} is not declared with value {}",
            T::NAME,
            key,
            value
        );
        Self {
            value,
            key,
            _type: PhantomData,
        }
    }

    fn from_member(key: &'static str, member: &Scalar) -> Self {
        Self {
            value: member.clone(),
            key,
            _type: PhantomData,
        }
    }

    /// The wrapped scalar.
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    pub fn into_value(self) -> Scalar {
        self.value
    }

    /// The declared name the value was resolved to.
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: EnumType> Clone for EnumValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            key: self.key,
            _type: PhantomData,
        }
    }
}

impl<T: EnumType> PartialEq for EnumValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: EnumType> Eq for EnumValue<T> {}

impl<T: EnumType> Hash for EnumValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: EnumType> fmt::Debug for EnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}({:?})", T::NAME, self.key, self.value)
    }
}

impl<T: EnumType> fmt::Display for EnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: EnumType> AsRef<Scalar> for EnumValue<T> {
    fn as_ref(&self) -> &Scalar {
        &self.value
    }
}

impl<T: EnumType> TryFrom<Scalar> for EnumValue<T> {
    type Error = EnumError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T: EnumType> From<EnumValue<T>> for Scalar {
    fn from(value: EnumValue<T>) -> Self {
        value.value
    }
}

/// Parse the textual form of a member value (not its name).
impl<T: EnumType> FromStr for EnumValue<T> {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = if T::options().trim_input { s.trim() } else { s };
        match T::definition().find_text(text) {
            Some((key, member)) => Ok(Self::from_member(key, member)),
            None => {
                tracing::trace!(enum_name = T::NAME, text, "Rejected enum text");
                Err(EnumError::invalid_value(T::NAME, s))
            }
        }
    }
}

impl<T: EnumType> Serialize for EnumValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: EnumType> Deserialize<'de> for EnumValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Self::from_option(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
