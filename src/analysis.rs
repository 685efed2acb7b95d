//! Character-class statistics for a piece of text.

use serde::{Deserialize, Serialize};

/// Counts of each character class in a text.
///
/// Classes are mutually exclusive. Characters that fit none of them, such as
/// tabs, underscores or non-Latin letters, only contribute to `total_chars`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Unicode scalar values in the text.
    pub total_chars: usize,
    /// ASCII letters `A-Z` and `a-z`.
    pub letters: usize,
    /// U+0020 spaces only.
    pub spaces: usize,
    /// Neither a word character nor whitespace.
    pub punctuation: usize,
    /// ASCII digits.
    pub numbers: usize,
    /// Whitespace-delimited words.
    pub words: usize,
}

fn is_punctuation(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_' || c.is_whitespace())
}

/// Word count used by both analysis and message validation.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Computes [`TextStatistics`] for `text`.
///
/// # Examples
///
/// ```
/// use caesarcrypt::analyze;
///
/// let stats = analyze("Hello, World! 123");
/// assert_eq!(stats.letters, 10);
/// assert_eq!(stats.punctuation, 2);
/// assert_eq!(stats.words, 3);
/// ```
pub fn analyze(text: &str) -> TextStatistics {
    let mut stats = TextStatistics {
        words: count_words(text),
        ..TextStatistics::default()
    };

    for c in text.chars() {
        stats.total_chars += 1;
        if c.is_ascii_alphabetic() {
            stats.letters += 1;
        } else if c == ' ' {
            stats.spaces += 1;
        } else if c.is_ascii_digit() {
            stats.numbers += 1;
        } else if is_punctuation(c) {
            stats.punctuation += 1;
        }
    }
    stats
}
