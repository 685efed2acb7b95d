//! Shift values and passphrase-based shift derivation.
//!
//! A [`ShiftValue`] is the checked form of a Caesar shift, always in [0, 25].
//! The transforms accept anything implementing [`ShiftAmount`], which folds
//! arbitrary numbers into that range without ever failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{CipherError, Result};
use crate::utils::text::trim_text;

/// Number of letters in the Latin alphabet handled by the cipher.
pub const ALPHABET_LEN: u8 = 26;

/// A Caesar shift in the range [0, 25].
///
/// # Examples
///
/// ```
/// use caesarcrypt::ShiftValue;
///
/// let shift = ShiftValue::new(3).unwrap();
/// assert_eq!(shift.get(), 3);
/// assert_eq!(shift.inverse().get(), 23);
/// assert!(ShiftValue::new(26).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct ShiftValue(u8);

impl ShiftValue {
    /// The identity shift: no letter moves.
    pub const ZERO: ShiftValue = ShiftValue(0);

    /// The self-inverse shift of 13.
    pub const ROT13: ShiftValue = ShiftValue(13);

    /// The largest valid shift.
    pub const MAX: ShiftValue = ShiftValue(ALPHABET_LEN - 1);

    /// Creates a shift, rejecting values above 25.
    ///
    /// # Errors
    /// Returns [`CipherError::ShiftOutOfRange`] if `value > 25`.
    pub fn new(value: u8) -> Result<Self> {
        if value >= ALPHABET_LEN {
            return Err(CipherError::ShiftOutOfRange {
                value: i64::from(value),
            });
        }
        Ok(ShiftValue(value))
    }

    /// Folds any shift amount into range using the transform's lenient rules.
    pub fn normalize<S: ShiftAmount>(amount: S) -> Self {
        ShiftValue(amount.normalized())
    }

    /// Returns the raw shift.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the shift that undoes this one: `(26 - s) mod 26`.
    pub fn inverse(self) -> Self {
        ShiftValue((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }

    /// Returns `true` for the identity shift.
    pub fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for ROT13.
    pub fn is_rot13(self) -> bool {
        self == Self::ROT13
    }

    /// Iterates every shift in ascending order, 0 through 25.
    pub fn all() -> impl Iterator<Item = ShiftValue> {
        (0..ALPHABET_LEN).map(ShiftValue)
    }
}

impl fmt::Display for ShiftValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShiftValue> for u8 {
    fn from(shift: ShiftValue) -> u8 {
        shift.0
    }
}

impl TryFrom<i64> for ShiftValue {
    type Error = CipherError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v < ALPHABET_LEN)
            .map(ShiftValue)
            .ok_or(CipherError::ShiftOutOfRange { value })
    }
}

impl FromStr for ShiftValue {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| CipherError::InvalidShiftLiteral(s.to_string()))?;
        ShiftValue::try_from(value)
    }
}

/// Anything that can be used as a shift by [`encode`](crate::encode) and
/// [`decode`](crate::decode).
///
/// Normalization never fails: negative and non-finite amounts become 0,
/// fractional amounts are floored, and the result is reduced modulo 26.
pub trait ShiftAmount: Copy {
    /// Folds the amount into [0, 25].
    fn normalized(self) -> u8;
}

impl ShiftAmount for ShiftValue {
    fn normalized(self) -> u8 {
        self.0
    }
}

macro_rules! impl_shift_amount_signed {
    ($($t:ty),*) => {$(
        impl ShiftAmount for $t {
            fn normalized(self) -> u8 {
                if self < 0 {
                    return 0;
                }
                (self as i128 % i128::from(ALPHABET_LEN)) as u8
            }
        }
    )*};
}

macro_rules! impl_shift_amount_unsigned {
    ($($t:ty),*) => {$(
        impl ShiftAmount for $t {
            fn normalized(self) -> u8 {
                (self as u128 % u128::from(ALPHABET_LEN)) as u8
            }
        }
    )*};
}

macro_rules! impl_shift_amount_float {
    ($($t:ty),*) => {$(
        impl ShiftAmount for $t {
            fn normalized(self) -> u8 {
                if !self.is_finite() || self < 0.0 {
                    return 0;
                }
                (self.floor() % <$t>::from(ALPHABET_LEN)) as u8
            }
        }
    )*};
}

impl_shift_amount_signed!(i8, i16, i32, i64, isize);
impl_shift_amount_unsigned!(u8, u16, u32, u64, usize);
impl_shift_amount_float!(f32, f64);

/// Derives a shift from a passphrase.
///
/// The passphrase is trimmed of whitespace and byte order marks; an empty result yields shift 0. Otherwise each
/// UTF-16 code unit is weighted by its one-based position and the weighted sum
/// is reduced modulo 26, so rearranging the same characters changes the shift.
///
/// This is deterministic and carries no cryptographic strength.
///
/// # Examples
///
/// ```
/// use caesarcrypt::derive_shift;
///
/// assert_eq!(derive_shift("   ").get(), 0);
/// assert_eq!(derive_shift("a").get(), 19);
/// assert_ne!(derive_shift("ab"), derive_shift("ba"));
/// ```
pub fn derive_shift(passphrase: &str) -> ShiftValue {
    let trimmed = trim_text(passphrase);
    if trimmed.is_empty() {
        return ShiftValue::ZERO;
    }

    let modulus = u64::from(ALPHABET_LEN);
    let sum = trimmed
        .encode_utf16()
        .enumerate()
        .fold(0u64, |acc, (i, unit)| {
            let weight = (i as u64 + 1) % modulus;
            (acc + (u64::from(unit) % modulus) * weight) % modulus
        });

    // Only the length is logged; the passphrase itself is never recorded.
    debug!(
        passphrase_len = trimmed.chars().count(),
        shift = sum,
        "derived shift from passphrase"
    );
    ShiftValue(sum as u8)
}

/// Resolves the shift actually applied by an encryption session.
///
/// A manual override takes precedence and is floored then clamped into
/// [0, 25]. A missing or NaN override falls back to the passphrase.
///
/// # Examples
///
/// ```
/// use caesarcrypt::effective_shift;
///
/// assert_eq!(effective_shift(Some(30.0), "ignored").get(), 25);
/// assert_eq!(effective_shift(Some(-4.0), "ignored").get(), 0);
/// assert_eq!(effective_shift(None, "a").get(), 19);
/// ```
pub fn effective_shift(manual: Option<f64>, passphrase: &str) -> ShiftValue {
    match manual {
        Some(value) if !value.is_nan() => {
            let clamped = value.floor().clamp(0.0, f64::from(ShiftValue::MAX.get()));
            ShiftValue(clamped as u8)
        }
        _ => derive_shift(passphrase),
    }
}

/// Reads a loosely-typed value as a shift, if it is a whole number in [0, 25].
///
/// Integral floats such as `3.0` are accepted; strings, booleans, fractions
/// and out-of-range numbers are not.
pub fn shift_from_value(value: &Value) -> Option<ShiftValue> {
    let number = value.as_f64()?;
    if number.fract() != 0.0 || !(0.0..f64::from(ALPHABET_LEN)).contains(&number) {
        return None;
    }
    Some(ShiftValue(number as u8))
}

/// Returns `true` if `value` is a whole number in [0, 25].
///
/// # Examples
///
/// ```
/// use caesarcrypt::is_valid_shift;
/// use serde_json::json;
///
/// assert!(is_valid_shift(&json!(25)));
/// assert!(!is_valid_shift(&json!(3.5)));
/// assert!(!is_valid_shift(&json!("5")));
/// assert!(!is_valid_shift(&json!(null)));
/// ```
pub fn is_valid_shift(value: &Value) -> bool {
    shift_from_value(value).is_some()
}
