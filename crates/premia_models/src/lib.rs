//! # premia_models: Black-Scholes-Merton Analytics (L2)
//!
//! Closed-form price and first-order Greeks of European options on an
//! underlying with a continuous dividend yield.
//!
//! This crate provides:
//! - Analytical model: [`analytical::BlackScholesMerton`] with price, delta,
//!   gamma, theta, vega and rho in raw analytical units
//! - Selective evaluation: [`greeks::evaluate`] for any subset of quantities
//!   from one set of shared terms, [`greeks::evaluate_batch`] for many options
//! - Reporting conventions: [`greeks::GreeksConvention`]
//! - Flag-based functions: [`black_scholes_merton`] (`price`, `delta`, ...,
//!   `price_greeks`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use premia_models::black_scholes_merton::price_greeks;
//!
//! let result = price_greeks("c", 100.0, 120.0, 5.0, 0.3, 0.01, 0.0, None).unwrap();
//! for (quantity, value) in result.iter() {
//!     assert!(value.is_finite(), "{}", quantity);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation of specs and results, TOML conventions
//! - `parallel` (default): Rayon-backed [`greeks::evaluate_batch`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod black_scholes_merton;
pub mod greeks;
