//! Combined validation of everything an encryption attempt needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::{validate_message_with, MessageReport};
use super::passphrase::{validate_passphrase, PassphraseReport};
use super::shift::{validate_shift, ShiftReport};
use crate::config::EngineConfig;
use crate::shift::{effective_shift, ShiftValue};
use crate::utils::text::is_blank;

/// The inputs of one encryption attempt, as held by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputState {
    /// Text to encrypt.
    pub message: String,
    /// Passphrase the shift is derived from.
    pub passphrase: String,
    /// Optional manual override of the derived shift, as entered.
    pub manual_shift: Option<Value>,
}

impl InputState {
    /// Shift that would be applied: the manual override when numeric,
    /// otherwise the passphrase-derived shift.
    pub fn effective_shift(&self) -> ShiftValue {
        let manual = self.manual_shift.as_ref().and_then(Value::as_f64);
        effective_shift(manual, &self.passphrase)
    }
}

/// Reports from all three validators plus derived readiness flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValidation {
    /// All three reports are valid.
    pub is_valid: bool,
    pub message: MessageReport,
    pub passphrase: PassphraseReport,
    pub shift: ShiftReport,
    /// The message has non-whitespace content.
    pub can_encrypt: bool,
    /// The passphrase has non-whitespace content.
    pub has_key: bool,
}

/// Validates `state` with the default limits.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{validate_inputs, InputState};
///
/// let state = InputState {
///     message: "Hello".into(),
///     passphrase: "secret".into(),
///     manual_shift: None,
/// };
/// let result = validate_inputs(&state);
/// assert!(result.is_valid && result.can_encrypt && result.has_key);
/// ```
pub fn validate_inputs(state: &InputState) -> InputValidation {
    validate_inputs_with(state, &EngineConfig::default())
}

/// Validates `state` with the limits in `config`.
pub fn validate_inputs_with(state: &InputState, config: &EngineConfig) -> InputValidation {
    let message = validate_message_with(&state.message, config);
    let passphrase = validate_passphrase(&state.passphrase);
    let shift = validate_shift(state.manual_shift.as_ref());

    InputValidation {
        is_valid: message.is_valid && passphrase.is_valid && shift.is_valid,
        can_encrypt: !is_blank(&state.message),
        has_key: !is_blank(&state.passphrase),
        message,
        passphrase,
        shift,
    }
}
