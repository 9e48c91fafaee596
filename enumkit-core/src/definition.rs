//! Ordered member tables

use crate::{MatchMode, Scalar};
use indexmap::IndexMap;

/// The declared members of one enum type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    name: &'static str,
    members: IndexMap<&'static str, Scalar>,
}

impl EnumDefinition {
    /// Build a definition from declared `(name, value)` pairs.
    ///
    /// A repeated name keeps its first declaration.
    pub fn discover<I>(name: &'static str, declared: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Scalar)>,
    {
        let mut members = IndexMap::new();
        for (key, value) in declared {
            if members.contains_key(key) {
                tracing::warn!(
                    enum_name = name,
                    member = key,
                    "Dropping repeated enum member declaration"
                );
                continue;
            }
            members.insert(key, value);
        }
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Declared names in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.members.keys().copied().collect()
    }

    /// Name to value mapping in declaration order.
    pub fn values(&self) -> &IndexMap<&'static str, Scalar> {
        &self.members
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.members.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// First member whose value matches `value` under `mode`.
    pub fn find(&self, value: &Scalar, mode: MatchMode) -> Option<(&'static str, &Scalar)> {
        self.members
            .iter()
            .find(|(_, member)| member.matches(value, mode))
            .map(|(key, member)| (*key, member))
    }

    pub fn contains_value(&self, value: &Scalar, mode: MatchMode) -> bool {
        self.find(value, mode).is_some()
    }

    /// First member whose textual form is exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<(&'static str, &Scalar)> {
        self.members
            .iter()
            .find(|(_, member)| member.matches_text(text))
            .map(|(key, member)| (*key, member))
    }
}

// ============================================================================
// TESTS
// ============================================================================
