//! Error types for Evapo

use thiserror::Error;

/// Result type alias for Evapo operations
pub type Result<T> = std::result::Result<T, EvapoError>;

/// Main error type for Evapo
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvapoError {
    /// A model quantity evaluated to NaN or infinity
    #[error("Model produced a non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl EvapoError {
    /// Fails with [`EvapoError::NonFinite`] unless `value` is finite.
    pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }
}
