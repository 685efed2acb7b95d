//! Error types for the caesarcrypt library.
//!
//! The cipher transforms themselves never fail. Errors only surface at the
//! typed edges of the crate: building a [`ShiftValue`](crate::ShiftValue)
//! from an arbitrary number or string, and loading an
//! [`EngineConfig`](crate::EngineConfig).

use thiserror::Error;

/// Errors produced by the caesarcrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Shift value is outside the valid range [0, 25].
    #[error("Shift value {value} is outside the valid range 0-25")]
    ShiftOutOfRange { value: i64 },

    /// Text could not be parsed as a whole-number shift.
    #[error("Invalid shift literal: {0:?}")]
    InvalidShiftLiteral(String),

    /// Engine configuration is malformed or inconsistent.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
