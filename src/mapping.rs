//! Full alphabet substitution table for a given shift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shift::{shift_from_value, ShiftValue};
use crate::shift_codec::shift_char;

/// Maps each of the 52 Latin letters to its shifted counterpart.
///
/// Iteration is deterministic: `A` through `Z`, then `a` through `z`.
/// Serializes as a JSON object keyed by the plain letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlphabetMapping(BTreeMap<char, char>);

impl AlphabetMapping {
    fn for_shift(shift: ShiftValue) -> Self {
        let table = ('A'..='Z')
            .chain('a'..='z')
            .map(|c| (c, shift_char(c, shift.get())))
            .collect();
        AlphabetMapping(table)
    }

    /// Returns the substitute for `letter`, if it is a Latin letter.
    pub fn get(&self, letter: char) -> Option<char> {
        self.0.get(&letter).copied()
    }

    /// Number of entries: 52 for a valid shift, 0 otherwise.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(plain, cipher)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Builds the substitution table for an integer shift in [0, 25].
///
/// Any other value yields an empty mapping.
///
/// # Examples
///
/// ```
/// use caesarcrypt::build_mapping;
///
/// let mapping = build_mapping(3);
/// assert_eq!(mapping.len(), 52);
/// assert_eq!(mapping.get('Z'), Some('C'));
/// assert!(build_mapping(26).is_empty());
/// ```
pub fn build_mapping(shift: i64) -> AlphabetMapping {
    ShiftValue::try_from(shift)
        .map(AlphabetMapping::for_shift)
        .unwrap_or_default()
}

/// Builds the substitution table from loosely-typed input.
///
/// Strings, fractions, `null` and out-of-range numbers all yield an empty
/// mapping.
pub fn build_mapping_from_value(shift: &Value) -> AlphabetMapping {
    shift_from_value(shift)
        .map(AlphabetMapping::for_shift)
        .unwrap_or_default()
}
