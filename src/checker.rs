//! Password policy checker - counts character categories against the policy.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{ConfigError, PolicyConfig, PolicyOptions};
use crate::outcome::{MessageTemplates, ReasonCode, ValidationResult, Violation};

/// Checks candidates against a fixed [`PolicyConfig`].
///
/// The checker is immutable after construction and can be shared between
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPolicyChecker {
    config: PolicyConfig,
    messages: MessageTemplates,
}

impl PasswordPolicyChecker {
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_messages(config, MessageTemplates::default())
    }

    pub fn with_messages(config: PolicyConfig, messages: MessageTemplates) -> Self {
        Self { config, messages }
    }

    /// Builds a checker from string-keyed options.
    ///
    /// # Errors
    ///
    /// Returns error if the required count is negative or a message key is
    /// not a known reason code.
    pub fn from_options(options: PolicyOptions) -> Result<Self, ConfigError> {
        let (config, messages) = options.into_parts()?;

        #[cfg(feature = "tracing")]
        {
            if !config.is_satisfiable() {
                tracing::warn!(
                    "Password policy requires {} of {} enabled character sets, all passwords fail",
                    config.required_count(),
                    config.enabled_categories().count()
                );
            }
        }

        Ok(Self::with_messages(config, messages))
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn messages(&self) -> &MessageTemplates {
        &self.messages
    }

    /// Checks `candidate` against the policy.
    ///
    /// # Returns
    /// A [`ValidationResult`] that is valid when at least `required_count`
    /// enabled categories occur in `candidate`, or carries a
    /// `NOT_ENOUGH_CHARACTER_SETS` violation otherwise.
    pub fn check(&self, candidate: &str) -> ValidationResult {
        let matched_count = self
            .config
            .enabled_categories()
            .filter(|category| category.is_present_in(candidate))
            .count();
        let required_count = self.config.required_count();

        let mut violations = Vec::new();
        if matched_count < required_count {
            let code = ReasonCode::NotEnoughCharacterSets;
            violations.push(Violation {
                code,
                message: self.messages.message_for(code).to_string(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password policy check: {} of {} required character sets present",
            matched_count,
            required_count
        );

        ValidationResult::new(matched_count, required_count, violations)
    }

    /// Same as [`check`](Self::check) for a candidate held as a secret.
    pub fn check_secret(&self, candidate: &SecretString) -> ValidationResult {
        self.check(candidate.expose_secret())
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.check(candidate).is_valid()
    }
}
