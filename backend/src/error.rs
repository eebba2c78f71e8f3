//! Error types for the pricing core
//!
//! Every failure the engine can report is a rejected input. There is nothing
//! to retry: the optimizer is deterministic and total over valid arguments.

use thiserror::Error;

/// Coarse classification of a [`ForecastError`]
///
/// Callers map this onto their own validation responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted domain
    InvalidArgument,
}

/// Errors that can occur while forecasting or pricing a line item
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Duration must be at least 1 day, got {days}")]
    InvalidDuration { days: i64 },

    #[error("Duration of {days} days exceeds the configured maximum of {max}")]
    DurationTooLong { days: i64, max: u32 },

    #[error("Rate {field} must be non-negative, got {value}")]
    NegativeRate { field: &'static str, value: i64 },

    #[error("Unit cost must be non-negative, got {value}")]
    NegativeUnitCost { value: i64 },

    #[error("Rental line item has no duration and no forecast override")]
    MissingDuration,
}

impl ForecastError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::InvalidDuration { .. }
            | ForecastError::DurationTooLong { .. }
            | ForecastError::NegativeRate { .. }
            | ForecastError::NegativeUnitCost { .. }
            | ForecastError::MissingDuration => ErrorKind::InvalidArgument,
        }
    }
}
