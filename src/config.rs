//! Tunable limits for validation and brute-force output.
//!
//! Every field has a default, so an empty JSON object (or
//! [`EngineConfig::default`]) is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Default maximum message length, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;

/// Fraction of the maximum length above which a message draws a warning.
pub const DEFAULT_LONG_MESSAGE_RATIO: f64 = 0.8;

/// Characters kept in each brute-force preview.
pub const DEFAULT_PREVIEW_LENGTH: usize = 50;

/// Marker appended to truncated previews.
pub const DEFAULT_PREVIEW_MARKER: &str = "...";

/// Engine configuration supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Messages longer than this fail validation.
    pub max_message_length: usize,

    /// Messages longer than `max_message_length * long_message_ratio` warn.
    pub long_message_ratio: f64,

    /// Characters of decoded text shown per brute-force candidate.
    pub preview_length: usize,

    /// Appended to a preview when the decoded text was cut.
    pub preview_marker: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            long_message_ratio: DEFAULT_LONG_MESSAGE_RATIO,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            preview_marker: DEFAULT_PREVIEW_MARKER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if the JSON is malformed, has
    /// unknown fields, or fails [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{"maxMessageLength": 280}"#).unwrap();
    /// assert_eq!(config.max_message_length, 280);
    /// assert_eq!(config.preview_length, 50);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| CipherError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the limits are usable.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if the maximum length or preview
    /// length is zero, or the long-message ratio is outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.max_message_length == 0 {
            return Err(CipherError::InvalidConfig(
                "maxMessageLength must be positive".into(),
            ));
        }
        let ratio = self.long_message_ratio;
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(CipherError::InvalidConfig(format!(
                "longMessageRatio must be in (0, 1], got {ratio}"
            )));
        }
        if self.preview_length == 0 {
            return Err(CipherError::InvalidConfig(
                "previewLength must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Length above which a message is considered long.
    pub(crate) fn long_message_threshold(&self) -> f64 {
        self.max_message_length as f64 * self.long_message_ratio
    }
}
