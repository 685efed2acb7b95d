//! Exhaustive search over all 26 shifts.
//!
//! The keyspace is small enough that every candidate decryption can be
//! listed at once, which is the whole point of showing it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::shift::ShiftValue;
use crate::shift_codec::decode;
use crate::utils::text::preview;

/// One possible decryption of a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BruteForceCandidate {
    /// Shift assumed for this candidate.
    pub shift: ShiftValue,
    /// Full decoded text.
    pub text: String,
    /// Bounded prefix of `text` for display.
    pub preview: String,
}

/// Decodes `cipher_text` under every shift, ascending from 0 to 25.
///
/// Empty input yields an empty list.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{brute_force, encode};
///
/// let candidates = brute_force(&encode("HELLO", 5));
/// assert_eq!(candidates.len(), 26);
/// assert_eq!(candidates[5].text, "HELLO");
/// ```
pub fn brute_force(cipher_text: &str) -> Vec<BruteForceCandidate> {
    brute_force_with(cipher_text, &EngineConfig::default())
}

/// Same as [`brute_force`], with preview length and marker from `config`.
pub fn brute_force_with(cipher_text: &str, config: &EngineConfig) -> Vec<BruteForceCandidate> {
    if cipher_text.is_empty() {
        return Vec::new();
    }

    debug!(len = cipher_text.len(), "enumerating all shifts");
    ShiftValue::all()
        .map(|shift| {
            let text = decode(cipher_text, shift);
            let preview = preview(&text, config.preview_length, &config.preview_marker);
            BruteForceCandidate {
                shift,
                text,
                preview,
            }
        })
        .collect()
}
