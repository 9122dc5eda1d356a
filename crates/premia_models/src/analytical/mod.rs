//! Analytical Black-Scholes-Merton formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - `params`: Option inputs ([`OptionSpec`])
//! - `terms`: Shared d1/d2, discount and probability terms ([`BsmTerms`])
//! - `black_scholes_merton`: Price ([`BlackScholesMerton`])
//! - `greeks`: Delta, Gamma, Theta, Vega, Rho on the same model
//!
//! ## Design Principles
//!
//! - **Terms computed once**: the model derives [`BsmTerms`] on construction
//!   and every formula reads from them
//! - **Enum-based option type**: each formula matches on call/put once
//! - **Numerical Stability**: erfc-based CDF, reflected CDFs for puts

pub mod black_scholes_merton;
pub mod error;
pub mod greeks;
pub mod params;
pub mod terms;

// Re-export main types at module level
pub use black_scholes_merton::BlackScholesMerton;
pub use error::AnalyticalError;
pub use params::OptionSpec;
pub use terms::BsmTerms;
