//! Character-counting helpers.
//!
//! Lengths are measured in Unicode scalar values, never bytes, so a message
//! of accented or non-Latin characters is limited by what the user sees.
//! Shift derivation is the one exception: it weights UTF-16 code units, so a
//! character outside the Basic Multilingual Plane counts once here but twice
//! there. Two emoji are a 2-character (weak) passphrase and a 600-emoji
//! message has length 600, even though derivation sees 4 and 1200 units.

/// Strips leading and trailing whitespace, including the U+FEFF byte order
/// mark, which `str::trim` keeps.
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Returns `true` if `text` has nothing left after [`trim_text`].
pub(crate) fn is_blank(text: &str) -> bool {
    trim_text(text).is_empty()
}

/// Number of characters in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns `true` if any character lies outside 7-bit ASCII.
pub(crate) fn has_non_ascii(text: &str) -> bool {
    !text.is_ascii()
}

/// Returns `text` cut to `limit` characters, with `marker` appended if
/// anything was cut.
pub(crate) fn preview(text: &str, limit: usize, marker: &str) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + marker.len());
            out.push_str(&text[..cut]);
            out.push_str(marker);
            out
        }
        None => text.to_owned(),
    }
}
