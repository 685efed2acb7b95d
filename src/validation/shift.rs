//! Strict checks for a manually entered shift.
//!
//! Unlike the transforms, which silently fold any number into range, this
//! validator reports every malformed shift as an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::shift::{ShiftValue, ALPHABET_LEN};

const NOT_A_NUMBER: &str = "Shift must be a number";
const NOT_WHOLE: &str = "Shift must be a whole number";
const NEGATIVE: &str = "Shift cannot be negative";
const TOO_LARGE: &str = "Shift cannot be greater than 25";
const IDENTITY_WARNING: &str = "Shift of 0 means no encryption";
const ROT13_WARNING: &str = "Shift of 13 is ROT13 - a well-known cipher";

/// Outcome of [`validate_shift`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ShiftReport {
    fn valid() -> Self {
        ShiftReport {
            is_valid: true,
            ..ShiftReport::default()
        }
    }

    fn invalid(error: &str) -> Self {
        ShiftReport {
            is_valid: false,
            errors: vec![error.to_string()],
            warnings: Vec::new(),
        }
    }
}

/// Validates a loosely-typed shift as received from a form or JSON payload.
///
/// An absent or `null` shift is valid: the caller falls back to the
/// passphrase. Checks run in order (type, whole number, sign, upper bound)
/// and stop at the first failure.
///
/// # Examples
///
/// ```
/// use caesarcrypt::validate_shift;
/// use serde_json::json;
///
/// assert!(validate_shift(None).is_valid);
/// assert!(validate_shift(Some(&json!(13))).warnings[0].contains("ROT13"));
/// assert!(!validate_shift(Some(&json!(26))).is_valid);
/// assert!(!validate_shift(Some(&json!("5"))).is_valid);
/// ```
pub fn validate_shift(shift: Option<&Value>) -> ShiftReport {
    match shift {
        None | Some(Value::Null) => ShiftReport::valid(),
        Some(value) => match value.as_f64() {
            Some(number) => check_number(number),
            None => {
                debug!("rejected non-numeric shift");
                ShiftReport::invalid(NOT_A_NUMBER)
            }
        },
    }
}

/// Validates a numeric shift; `None` is valid.
///
/// # Examples
///
/// ```
/// use caesarcrypt::validate_shift_number;
///
/// assert_eq!(validate_shift_number(Some(3.5)).errors, vec!["Shift must be a whole number"]);
/// assert_eq!(validate_shift_number(Some(-1.0)).errors, vec!["Shift cannot be negative"]);
/// ```
pub fn validate_shift_number(shift: Option<f64>) -> ShiftReport {
    shift.map_or_else(ShiftReport::valid, check_number)
}

fn check_number(number: f64) -> ShiftReport {
    let error = if !number.is_finite() || number.fract() != 0.0 {
        Some(NOT_WHOLE)
    } else if number < 0.0 {
        Some(NEGATIVE)
    } else if number >= f64::from(ALPHABET_LEN) {
        Some(TOO_LARGE)
    } else {
        None
    };

    if let Some(error) = error {
        debug!(error, "rejected shift");
        return ShiftReport::invalid(error);
    }

    let mut report = ShiftReport::valid();
    let shift = ShiftValue::normalize(number);
    if shift.is_identity() {
        report.warnings.push(IDENTITY_WARNING.to_string());
    }
    if shift.is_rot13() {
        report.warnings.push(ROT13_WARNING.to_string());
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_valid() {
        let report = validate_shift(None);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(validate_shift(Some(&Value::Null)).is_valid);
        assert!(validate_shift_number(None).is_valid);
    }

    #[test]
    fn test_type_error() {
        for v in [json!("5"), json!(true), json!([1]), json!({"shift": 1})] {
            let report = validate_shift(Some(&v));
            assert!(!report.is_valid);
            assert_eq!(report.errors, vec![NOT_A_NUMBER]);
        }
    }

    #[test]
    fn test_whole_number_checked_before_sign() {
        // -1.5 is both fractional and negative; only the first failure is reported.
        assert_eq!(validate_shift(Some(&json!(-1.5))).errors, vec![NOT_WHOLE]);
        assert_eq!(validate_shift(Some(&json!(3.5))).errors, vec![NOT_WHOLE]);
    }

    #[test]
    fn test_non_finite_is_not_whole() {
        assert_eq!(validate_shift_number(Some(f64::NAN)).errors, vec![NOT_WHOLE]);
        assert_eq!(
            validate_shift_number(Some(f64::NEG_INFINITY)).errors,
            vec![NOT_WHOLE]
        );
    }

    #[test]
    fn test_negative() {
        let report = validate_shift(Some(&json!(-1)));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![NEGATIVE]);
    }

    #[test]
    fn test_upper_bound() {
        let report = validate_shift(Some(&json!(26)));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![TOO_LARGE]);
    }

    #[test]
    fn test_valid_range() {
        for i in 1..=25 {
            let report = validate_shift(Some(&json!(i)));
            assert!(report.is_valid, "shift {i} rejected");
            assert!(report.errors.is_empty());
        }
    }

    #[test]
    fn test_integral_float_accepted() {
        assert!(validate_shift(Some(&json!(7.0))).is_valid);
    }

    #[test]
    fn test_zero_warns() {
        let report = validate_shift(Some(&json!(0)));
        assert!(report.is_valid);
        assert_eq!(report.warnings, vec![IDENTITY_WARNING]);
    }

    #[test]
    fn test_rot13_warns() {
        let report = validate_shift(Some(&json!(13)));
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("ROT13"));
    }

    #[test]
    fn test_plain_shift_no_warnings() {
        assert!(validate_shift(Some(&json!(3))).warnings.is_empty());
    }
}
