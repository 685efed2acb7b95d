//! Validation gate for user-supplied cipher inputs.
//!
//! Each validator is a pure function returning a report. Reports carry
//! errors, which make the input invalid, and warnings, which are advisory and
//! coexist with validity. Validators never call the cipher transforms.

mod inputs;
mod message;
mod passphrase;
mod shift;

pub use inputs::{validate_inputs, validate_inputs_with, InputState, InputValidation};
pub use message::{validate_message, validate_message_with, MessageReport, MessageStats};
pub use passphrase::{validate_passphrase, PassphraseReport, PassphraseStrength};
pub use shift::{validate_shift, validate_shift_number, ShiftReport};

/// Common read access to every validation report.
pub trait ValidationReport {
    /// `true` when no errors were recorded.
    fn is_valid(&self) -> bool;

    /// Errors in the order they were detected.
    fn errors(&self) -> &[String];

    /// Advisory warnings in the order they were detected.
    fn warnings(&self) -> &[String];

    /// `true` if any warning contains `needle`.
    fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|w| w.contains(needle))
    }
}

macro_rules! impl_validation_report {
    ($($t:ty),*) => {$(
        impl ValidationReport for $t {
            fn is_valid(&self) -> bool {
                self.is_valid
            }

            fn errors(&self) -> &[String] {
                &self.errors
            }

            fn warnings(&self) -> &[String] {
                &self.warnings
            }
        }
    )*};
}

impl_validation_report!(MessageReport, PassphraseReport, ShiftReport);
