//! Message length and character-set checks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::count_words;
use crate::config::EngineConfig;
use crate::utils::text::{char_len, has_non_ascii};

/// Size figures reported alongside message validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    /// Characters in the message.
    pub length: usize,
    /// Whitespace-delimited words.
    pub word_count: usize,
}

/// Outcome of [`validate_message`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: MessageStats,
}

/// Checks a message against a maximum length, using the default
/// long-message ratio.
///
/// # Examples
///
/// ```
/// use caesarcrypt::validate_message;
///
/// assert!(validate_message("", 1000).is_valid);
/// let report = validate_message("too long", 4);
/// assert!(!report.is_valid);
/// assert_eq!(report.stats.length, 8);
/// ```
pub fn validate_message(text: &str, max_length: usize) -> MessageReport {
    let config = EngineConfig {
        max_message_length: max_length,
        ..EngineConfig::default()
    };
    validate_message_with(text, &config)
}

/// Checks a message against the limits in `config`.
pub fn validate_message_with(text: &str, config: &EngineConfig) -> MessageReport {
    let length = char_len(text);
    let mut report = MessageReport {
        is_valid: true,
        stats: MessageStats {
            length,
            word_count: count_words(text),
        },
        ..MessageReport::default()
    };

    // Nothing to encrypt is not an error.
    if text.is_empty() {
        return report;
    }

    let max = config.max_message_length;
    if length > max {
        report.is_valid = false;
        report.errors.push(format!(
            "Message exceeds maximum length of {max} characters (current: {length})"
        ));
    }

    if length as f64 > config.long_message_threshold() {
        report
            .warnings
            .push(format!("Message is getting long ({length}/{max} characters)"));
    }

    if has_non_ascii(text) {
        report.warnings.push(
            "Message contains non-ASCII characters - only A-Z and a-z will be encrypted"
                .to_string(),
        );
    }

    debug!(
        length,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated message"
    );
    report
}
