//! Passphrase strength grading.
//!
//! Strength here is purely educational: every passphrase collapses to one
//! of 26 shifts regardless of grade.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::text::{char_len, trim_text};

/// Passphrases shorter than this (after trimming) are graded weak.
const MEDIUM_MIN_LEN: usize = 3;

/// Passphrases at least this long (after trimming) are graded good.
const GOOD_MIN_LEN: usize = 8;

/// Character classes needed to promote the grade.
const VARIETY_THRESHOLD: usize = 3;

/// Grade assigned by [`validate_passphrase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassphraseStrength {
    /// No passphrase supplied.
    #[default]
    None,
    Weak,
    Medium,
    Good,
    Excellent,
}

impl fmt::Display for PassphraseStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PassphraseStrength::None => "none",
            PassphraseStrength::Weak => "weak",
            PassphraseStrength::Medium => "medium",
            PassphraseStrength::Good => "good",
            PassphraseStrength::Excellent => "excellent",
        };
        f.write_str(label)
    }
}

/// Outcome of [`validate_passphrase`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassphraseReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub strength: PassphraseStrength,
}

/// Counts how many of digit, uppercase, lowercase and other classes appear.
fn variety(passphrase: &str) -> usize {
    let digits = passphrase.chars().any(|c| c.is_ascii_digit());
    let upper = passphrase.chars().any(|c| c.is_ascii_uppercase());
    let lower = passphrase.chars().any(|c| c.is_ascii_lowercase());
    let other = passphrase.chars().any(|c| !c.is_ascii_alphanumeric());
    [digits, upper, lower, other].into_iter().filter(|b| *b).count()
}

/// Grades a passphrase. Passphrases are never invalid, only weak.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{validate_passphrase, PassphraseStrength};
///
/// assert_eq!(validate_passphrase("").strength, PassphraseStrength::None);
/// assert_eq!(validate_passphrase("abcd").strength, PassphraseStrength::Medium);
/// assert_eq!(validate_passphrase("Abcdefg1").strength, PassphraseStrength::Excellent);
/// ```
pub fn validate_passphrase(passphrase: &str) -> PassphraseReport {
    let mut report = PassphraseReport {
        is_valid: true,
        ..PassphraseReport::default()
    };

    let trimmed = trim_text(passphrase);
    if trimmed.is_empty() {
        report
            .warnings
            .push("No password set - using shift of 0".to_string());
        return report;
    }

    let len = char_len(trimmed);
    report.strength = if len < MEDIUM_MIN_LEN {
        report
            .warnings
            .push("Short passwords create predictable shifts".to_string());
        PassphraseStrength::Weak
    } else if len < GOOD_MIN_LEN {
        PassphraseStrength::Medium
    } else {
        PassphraseStrength::Good
    };

    if variety(trimmed) >= VARIETY_THRESHOLD {
        report.strength = match report.strength {
            PassphraseStrength::Good => PassphraseStrength::Excellent,
            _ => PassphraseStrength::Good,
        };
    }

    debug!(strength = %report.strength, "graded passphrase");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passphrase() {
        for p in ["", "   ", "\t\n"] {
            let report = validate_passphrase(p);
            assert!(report.is_valid);
            assert_eq!(report.strength, PassphraseStrength::None);
            assert_eq!(report.warnings, vec!["No password set - using shift of 0"]);
        }
    }

    #[test]
    fn test_short_passphrase_is_weak() {
        let report = validate_passphrase("ab");
        assert!(report.is_valid);
        assert_eq!(report.strength, PassphraseStrength::Weak);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("predictable"));
    }

    #[test]
    fn test_length_grades() {
        assert_eq!(validate_passphrase("abc").strength, PassphraseStrength::Medium);
        assert_eq!(validate_passphrase("abcdefg").strength, PassphraseStrength::Medium);
        assert_eq!(validate_passphrase("abcdefgh").strength, PassphraseStrength::Good);
    }

    #[test]
    fn test_trimmed_before_grading() {
        assert_eq!(validate_passphrase("  ab  ").strength, PassphraseStrength::Weak);
    }

    #[test]
    fn test_variety_promotes() {
        // Medium length but three classes: promoted to good.
        let report = validate_passphrase("a1!");
        assert_eq!(report.strength, PassphraseStrength::Good);

        assert_eq!(validate_passphrase("aB1").strength, PassphraseStrength::Good);
        assert_eq!(
            validate_passphrase("Secret99!").strength,
            PassphraseStrength::Excellent
        );
    }

    #[test]
    fn test_short_varied_keeps_warning() {
        let report = validate_passphrase("A1");
        assert_eq!(report.strength, PassphraseStrength::Weak);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_two_classes_not_promoted() {
        assert_eq!(validate_passphrase("password1").strength, PassphraseStrength::Good);
    }

    #[test]
    fn test_inner_space_counts_as_other() {
        assert_eq!(validate_passphrase("Ab c").strength, PassphraseStrength::Good);
    }

    #[test]
    fn test_bom_only_is_empty() {
        let report = validate_passphrase("\u{FEFF} ");
        assert_eq!(report.strength, PassphraseStrength::None);
    }

    #[test]
    fn test_astral_chars_count_once() {
        // Two emoji are two characters, not four UTF-16 units.
        let report = validate_passphrase("\u{1F600}\u{1F600}");
        assert_eq!(report.strength, PassphraseStrength::Weak);
    }

    #[test]
    fn test_strength_serializes_lowercase() {
        let value = serde_json::to_value(validate_passphrase("Secret99!")).unwrap();
        assert_eq!(value["strength"], "excellent");
        assert_eq!(value["isValid"], true);
    }
}
