//! Hydraulic calculation errors.

use pf_core::PfError;
use thiserror::Error;

/// Result type for hydraulic operations.
pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

/// Errors that can occur while sizing a pipe or evaluating losses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// Value makes a formula undefined (Q <= 0, V <= 0, D <= 0, Re <= 0).
    #[error("Value out of physical domain for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Malformed or out-of-range user input (lengths, hours, prices, counts).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// NaN or infinity where a finite value is required.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<PfError> for HydraulicsError {
    fn from(err: PfError) -> Self {
        match err {
            PfError::NonFinite { what, value } => HydraulicsError::NonFinite { what, value },
            PfError::InvalidArg { what } => HydraulicsError::InvalidInput { what },
            PfError::Invariant { what } => HydraulicsError::InvalidInput { what },
        }
    }
}
