//! Per-type behaviour options

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How candidate values are compared against declared members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Kind and value must both match
    #[default]
    Strict,
    /// Coercive comparison across scalar kinds (see [`crate::Scalar::loosely_eq`])
    Loose,
}

/// Options a concrete enum type can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnumOptions {
    pub match_mode: MatchMode,
    /// Trim surrounding whitespace before parsing text input.
    pub trim_input: bool,
}

impl EnumOptions {
    pub const fn strict() -> Self {
        Self {
            match_mode: MatchMode::Strict,
            trim_input: false,
        }
    }

    pub const fn loose() -> Self {
        Self {
            match_mode: MatchMode::Loose,
            trim_input: false,
        }
    }

    pub const fn with_trim_input(mut self, trim_input: bool) -> Self {
        self.trim_input = trim_input;
        self
    }
}

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MatchMode::Strict => "Strict",
            MatchMode::Loose => "Loose",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "strict" | "exact" => Ok(MatchMode::Strict),
            "loose" | "coercive" => Ok(MatchMode::Loose),
            _ => Err(ConfigError::InvalidValue {
                field: "match_mode".to_string(),
                value: s.to_string(),
                reason: "expected strict or loose".to_string(),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
