//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and Greeks operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every public pricing operation reports failures through this type,
/// synchronously and without partial results.
///
/// # Variants
/// - `InvalidOptionType`: Option flag does not resolve to a call or a put
/// - `InvalidInput`: Non-positive expiry/volatility/spot/strike or non-finite input
/// - `UnknownQuantity`: Requested quantity is not one of the six known keys
///
/// # Examples
/// ```
/// use premia_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("ttm must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: ttm must be positive");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Option type flag does not resolve to exactly one of call or put.
    #[error("Invalid option type: '{0}' (expected 'c', 'call', 'p' or 'put')")]
    InvalidOptionType(String),

    /// Invalid market input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested quantity is not a recognised key.
    #[error("Unknown quantity: '{0}' (expected one of price, delta, gamma, theta, vega, rho)")]
    UnknownQuantity(String),
}

impl PricingError {
    /// Returns whether this error was caused by invalid market input.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}
