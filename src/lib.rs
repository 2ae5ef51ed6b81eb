//! Password character-set policy library
//!
//! This library checks whether a password contains enough distinct
//! character categories (digits, lowercase letters, uppercase letters,
//! special characters) to satisfy a configurable policy.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_charset::{CharacterCategory, PasswordPolicyChecker, PolicyConfig};
//!
//! let checker = PasswordPolicyChecker::new(PolicyConfig::new(
//!     CharacterCategory::ALL,
//!     3,
//! ));
//!
//! let result = checker.check("fooBar123");
//! assert!(result.is_valid());
//!
//! let result = checker.check("fooBar");
//! assert!(!result.is_valid());
//! println!("Reasons: {:?}", result.messages());
//! ```
//!
//! Policies can also be loaded from a JSON options document, see
//! [`PolicyOptions`].

// Internal modules
mod category;
mod checker;
mod config;
mod outcome;

// Public API
pub use category::CharacterCategory;
pub use checker::PasswordPolicyChecker;
pub use config::{ConfigError, PolicyConfig, PolicyOptions};
pub use outcome::{MessageTemplates, ReasonCode, ValidationResult, Violation};
