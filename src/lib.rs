//! caesarcrypt: an educational Caesar cipher engine.
//!
//! Derives a shift from a passphrase, applies and reverses the Caesar
//! substitution, and provides the diagnostics that show why the cipher is
//! insecure: text statistics, the full alphabet mapping, and brute-force
//! enumeration of all 26 possible decryptions.
//!
//! This is **not** a secure cipher and makes no confidentiality claim.
//!
//! # Architecture
//!
//! ```text
//! validation  (message / passphrase / shift reports; never calls the cipher)
//!
//! shift       (ShiftValue, ShiftAmount normalization, passphrase derivation)
//!     ↓
//! ShiftCodec  (encode / decode over A-Z and a-z, everything else untouched)
//!     ↓
//! mapping, brute_force, analysis  (diagnostics)
//! ```
//!
//! Every operation is a pure function over value types. Transforms never
//! fail: malformed input degrades to a safe default. Validators are strict
//! and report problems as errors and warnings for the caller to surface.
//!
//! # Examples
//!
//! Encrypt and decrypt with a passphrase-derived shift:
//!
//! ```
//! use caesarcrypt::{decode, derive_shift, encode};
//!
//! let shift = derive_shift("my passphrase");
//! let secret = encode("Meet me at noon!", shift);
//! assert_eq!(decode(&secret, shift), "Meet me at noon!");
//! ```
//!
//! Recover the plaintext without the key:
//!
//! ```
//! use caesarcrypt::{brute_force, encode};
//!
//! let candidates = brute_force(&encode("HELLO", 5));
//! assert!(candidates.iter().any(|c| c.shift.get() == 5 && c.text == "HELLO"));
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod validation;

mod analysis;
mod brute_force;
mod mapping;
mod shift;
mod shift_codec;
pub(crate) mod utils;

pub use analysis::{analyze, TextStatistics};
pub use brute_force::{brute_force, brute_force_with, BruteForceCandidate};
pub use config::EngineConfig;
pub use error::{CipherError, Result};
pub use mapping::{build_mapping, build_mapping_from_value, AlphabetMapping};
pub use shift::{
    derive_shift, effective_shift, is_valid_shift, shift_from_value, ShiftAmount, ShiftValue,
    ALPHABET_LEN,
};
pub use shift_codec::{decode, decode_message, encode, encode_message, rot13};
pub use validation::{
    validate_inputs, validate_inputs_with, validate_message, validate_message_with,
    validate_passphrase, validate_shift, validate_shift_number, InputState, InputValidation,
    MessageReport, MessageStats, PassphraseReport, PassphraseStrength, ShiftReport,
    ValidationReport,
};
