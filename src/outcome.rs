//! Validation outcome and failure message types.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

/// Identifier attached to a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Fewer enabled categories were found than the policy requires.
    NotEnoughCharacterSets,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::NotEnoughCharacterSets => "NOT_ENOUGH_CHARACTER_SETS",
        }
    }

    /// Message used when no override is configured.
    pub fn default_message(self) -> &'static str {
        match self {
            ReasonCode::NotEnoughCharacterSets => {
                "The password does not contain enough character sets."
            }
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasonCode {
    type Err = ConfigError;

    /// Accepts the canonical identifier and the legacy `msgNotEnoughCharacterSets` key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_ENOUGH_CHARACTER_SETS" | "msgNotEnoughCharacterSets" => {
                Ok(ReasonCode::NotEnoughCharacterSets)
            }
            other => Err(ConfigError::UnknownReasonCode(other.to_string())),
        }
    }
}

/// Caller-supplied message overrides, keyed by reason code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    overrides: HashMap<ReasonCode, String>,
}

impl MessageTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the message reported for `code`.
    pub fn with(mut self, code: ReasonCode, message: impl Into<String>) -> Self {
        self.overrides.insert(code, message.into());
        self
    }

    /// Returns the override for `code`, or its default message.
    pub fn message_for(&self, code: ReasonCode) -> &str {
        self.overrides
            .get(&code)
            .map(String::as_str)
            .unwrap_or_else(|| code.default_message())
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// A single reason a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: ReasonCode,
    pub message: String,
}

/// Result of checking one candidate against a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    matched_count: usize,
    required_count: usize,
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) fn new(
        matched_count: usize,
        required_count: usize,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            matched_count,
            required_count,
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of enabled categories observed in the candidate.
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Violations in the order they were raised. Empty when valid.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn codes(&self) -> Vec<ReasonCode> {
        self.violations.iter().map(|v| v.code).collect()
    }

    /// Code to message view of the violations.
    pub fn messages(&self) -> BTreeMap<ReasonCode, &str> {
        self.violations
            .iter()
            .map(|v| (v.code, v.message.as_str()))
            .collect()
    }
}
