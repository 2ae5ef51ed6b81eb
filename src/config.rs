//! Policy configuration.
//!
//! [`PolicyConfig`] is the typed form the checker runs on. [`PolicyOptions`] is
//! the string-keyed document form, loadable from JSON:
//!
//! ```json
//! {
//!   "characterSets": ["DIGIT", "LETTER"],
//!   "numberOfRequiredCharacterSets": 2,
//!   "messageTemplates": { "NOT_ENOUGH_CHARACTER_SETS": "custom text" }
//! }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::category::CharacterCategory;
use crate::outcome::{MessageTemplates, ReasonCode};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Policy options file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy options file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse policy options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Number of required character sets must not be negative, got {0}")]
    NegativeRequiredCount(i64),
    #[error("Unknown character category: {0}")]
    UnknownCategory(String),
    #[error("Unknown reason code: {0}")]
    UnknownReasonCode(String),
}

/// Which categories are counted and how many must be present.
///
/// `required_count` is not bounded by the number of enabled categories. A
/// policy that asks for more than it enables rejects every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    enabled_categories: BTreeSet<CharacterCategory>,
    required_count: usize,
}

impl PolicyConfig {
    pub fn new<I>(categories: I, required_count: usize) -> Self
    where
        I: IntoIterator<Item = CharacterCategory>,
    {
        Self {
            enabled_categories: categories.into_iter().collect(),
            required_count,
        }
    }

    pub fn enabled_categories(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        self.enabled_categories.iter().copied()
    }

    pub fn is_enabled(&self, category: CharacterCategory) -> bool {
        self.enabled_categories.contains(&category)
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Returns `false` when no candidate can ever pass.
    pub fn is_satisfiable(&self) -> bool {
        self.required_count <= self.enabled_categories.len()
    }
}

/// String-keyed options, as found in configuration documents.
///
/// A missing or `null` key takes its default. A `characterSets` value that is
/// not an array is skipped, as are non-string entries inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyOptions {
    #[serde(deserialize_with = "character_sets_or_empty")]
    pub character_sets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_required_character_sets: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub message_templates: HashMap<String, String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn character_sets_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        Value::Null => Vec::new(),
        _other => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring non-array characterSets option: {}", _other);
            Vec::new()
        }
    };
    Ok(ids)
}

impl PolicyOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is not a valid options document
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy options loading FAILED: FileNotFound {:?}", path);
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Policy options loaded from {:?}: {} character sets, {} required",
            path,
            options.character_sets.len(),
            options.number_of_required_character_sets
        );

        Ok(options)
    }

    /// Converts to the typed configuration and message overrides.
    ///
    /// Unrecognized category identifiers are skipped, so they are simply not
    /// enabled. A negative required count or an unknown message key is an error.
    pub fn into_parts(self) -> Result<(PolicyConfig, MessageTemplates), ConfigError> {
        let count = self.number_of_required_character_sets;
        if count < 0 {
            return Err(ConfigError::NegativeRequiredCount(count));
        }
        let required_count = usize::try_from(count).unwrap_or(usize::MAX);

        let categories = self.character_sets.iter().filter_map(|id| {
            match id.parse::<CharacterCategory>() {
                Ok(category) => Some(category),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring character set option: {}", _e);
                    None
                }
            }
        });
        let config = PolicyConfig::new(categories, required_count);

        let mut messages = MessageTemplates::new();
        for (key, text) in self.message_templates {
            let code: ReasonCode = key.parse()?;
            messages = messages.with(code, text);
        }

        Ok((config, messages))
    }
}
