//! ShiftCodec: the Caesar substitution transform.
//!
//! Moves every Latin letter a fixed number of positions along its own
//! alphabet, wrapping at the boundary. Upper and lower case are rotated
//! independently; every other character passes through untouched.

use tracing::trace;

use crate::shift::{ShiftAmount, ShiftValue, ALPHABET_LEN};
use crate::utils::text::is_blank;

/// Shifts a single character by an already-normalized amount.
///
/// # Parameters
/// - `c`: The character to shift.
/// - `shift`: Shift in [0, 25].
///
/// # Returns
/// The shifted letter, or `c` itself if it is not an ASCII Latin letter.
pub(crate) fn shift_char(c: char, shift: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN;
    char::from(base + offset)
}

fn apply(text: &str, shift: ShiftValue) -> String {
    if shift.is_identity() {
        return text.to_owned();
    }
    text.chars().map(|c| shift_char(c, shift.get())).collect()
}

/// Encrypts text with a Caesar shift.
///
/// The shift is normalized first (see [`ShiftAmount`]): negative amounts act
/// as 0, fractions are floored and everything is reduced modulo 26. Empty
/// input yields an empty string.
///
/// # Examples
///
/// ```
/// use caesarcrypt::encode;
///
/// assert_eq!(encode("Hello, World! 123", 3), "Khoor, Zruog! 123");
/// assert_eq!(encode("XYZ", 29), "ABC");
/// assert_eq!(encode("ABC", -1), "ABC");
/// ```
pub fn encode<S: ShiftAmount>(text: &str, shift: S) -> String {
    let shift = ShiftValue::normalize(shift);
    trace!(len = text.len(), shift = shift.get(), "encode");
    apply(text, shift)
}

/// Decrypts text produced by [`encode`] with the same nominal shift.
///
/// Equivalent to encoding with `(26 - normalized) mod 26`.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{decode, encode};
///
/// assert_eq!(decode("DEF", 3), "ABC");
/// assert_eq!(decode(&encode("Secret Message!", 7), 7), "Secret Message!");
/// ```
pub fn decode<S: ShiftAmount>(text: &str, shift: S) -> String {
    let shift = ShiftValue::normalize(shift).inverse();
    trace!(len = text.len(), inverse_shift = shift.get(), "decode");
    apply(text, shift)
}

/// Encrypts a user message, treating whitespace-only input as nothing to do.
///
/// # Examples
///
/// ```
/// use caesarcrypt::encode_message;
///
/// assert_eq!(encode_message("   ", 3), "");
/// assert_eq!(encode_message(" ab ", 1), " bc ");
/// ```
pub fn encode_message<S: ShiftAmount>(text: &str, shift: S) -> String {
    if is_blank(text) {
        return String::new();
    }
    encode(text, shift)
}

/// Decrypts a user message, treating whitespace-only input as nothing to do.
pub fn decode_message<S: ShiftAmount>(text: &str, shift: S) -> String {
    if is_blank(text) {
        return String::new();
    }
    decode(text, shift)
}

/// Applies ROT13, which is its own inverse.
///
/// # Examples
///
/// ```
/// use caesarcrypt::rot13;
///
/// assert_eq!(rot13("Hello"), "Uryyb");
/// assert_eq!(rot13(&rot13("Hello")), "Hello");
/// ```
pub fn rot13(text: &str) -> String {
    encode(text, ShiftValue::ROT13)
}
