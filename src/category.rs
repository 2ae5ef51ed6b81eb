//! Character categories and their membership rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Lowercase letters outside ASCII that still count as letters.
const LOWER_DIACRITICS: [char; 3] = ['ä', 'ü', 'ö'];
/// Uppercase letters outside ASCII that still count as capital letters.
const UPPER_DIACRITICS: [char; 3] = ['Ä', 'Ü', 'Ö'];

/// A class of characters whose presence is counted by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterCategory {
    /// ASCII digits `0-9`.
    Digit,
    /// `a-z` plus `ä`, `ü`, `ö`.
    Letter,
    /// `A-Z` plus `Ä`, `Ü`, `Ö`.
    CapitalLetter,
    /// Everything that is neither an ASCII letter/digit nor one of `äüöÄÜÖ`.
    SpecialCharacter,
}

impl CharacterCategory {
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Digit,
        CharacterCategory::Letter,
        CharacterCategory::CapitalLetter,
        CharacterCategory::SpecialCharacter,
    ];

    /// Returns `true` if `c` belongs to this category.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterCategory::Digit => c.is_ascii_digit(),
            CharacterCategory::Letter => c.is_ascii_lowercase() || LOWER_DIACRITICS.contains(&c),
            CharacterCategory::CapitalLetter => {
                c.is_ascii_uppercase() || UPPER_DIACRITICS.contains(&c)
            }
            CharacterCategory::SpecialCharacter => {
                !(c.is_ascii_alphanumeric()
                    || LOWER_DIACRITICS.contains(&c)
                    || UPPER_DIACRITICS.contains(&c))
            }
        }
    }

    /// Returns `true` if at least one character of `candidate` belongs to this category.
    pub fn is_present_in(self, candidate: &str) -> bool {
        candidate.chars().any(|c| self.matches(c))
    }

    /// Stable identifier, as used in option documents.
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterCategory::Digit => "DIGIT",
            CharacterCategory::Letter => "LETTER",
            CharacterCategory::CapitalLetter => "CAPITAL_LETTER",
            CharacterCategory::SpecialCharacter => "SPECIAL_CHARACTER",
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_matches_ascii_only() {
        assert!(CharacterCategory::Digit.is_present_in("abc7"));
        assert!(!CharacterCategory::Digit.is_present_in("abc"));
        // Arabic-Indic digit is not ASCII
        assert!(!CharacterCategory::Digit.is_present_in("٣"));
    }

    #[test]
    fn test_letter_includes_lower_diacritics() {
        for c in ['a', 'z', 'ä', 'ü', 'ö'] {
            assert!(CharacterCategory::Letter.matches(c), "{c} should be a letter");
        }
        assert!(!CharacterCategory::Letter.matches('A'));
        assert!(!CharacterCategory::Letter.matches('é'));
    }

    #[test]
    fn test_capital_letter_includes_upper_diacritics() {
        for c in ['A', 'Z', 'Ä', 'Ü', 'Ö'] {
            assert!(CharacterCategory::CapitalLetter.matches(c), "{c} should be a capital");
        }
        assert!(!CharacterCategory::CapitalLetter.matches('a'));
        assert!(!CharacterCategory::CapitalLetter.matches('É'));
    }

    #[test]
    fn test_special_character_excludes_diacritics() {
        for c in ['!', ' ', '?', 'é', 'ß', '€', '_'] {
            assert!(CharacterCategory::SpecialCharacter.matches(c), "{c} should be special");
        }
        for c in ['a', 'Z', '0', 'ä', 'Ü'] {
            assert!(!CharacterCategory::SpecialCharacter.matches(c), "{c} should not be special");
        }
    }

    #[test]
    fn test_from_str_known_identifiers() {
        for category in CharacterCategory::ALL {
            assert_eq!(category.as_str().parse::<CharacterCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_from_str_unknown_identifier() {
        let result = "digit".parse::<CharacterCategory>();
        assert!(matches!(result, Err(ConfigError::UnknownCategory(ref s)) if s == "digit"));
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&CharacterCategory::CapitalLetter).unwrap();
        assert_eq!(json, "\"CAPITAL_LETTER\"");
        let parsed: CharacterCategory = serde_json::from_str("\"SPECIAL_CHARACTER\"").unwrap();
        assert_eq!(parsed, CharacterCategory::SpecialCharacter);
    }
}
