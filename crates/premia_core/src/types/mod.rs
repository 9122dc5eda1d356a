//! Core option and error types.
//!
//! This module provides:
//! - `option_type`: The two-way call/put flag, parsed case-insensitively
//! - `error`: Structured error type for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;

pub use error::PricingError;
pub use option_type::OptionType;
