//! # premia_core: Foundation for Black-Scholes-Merton Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! premia_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Option type flag with case-insensitive parsing (`types::option_type`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other premia_* crates:
//! - statrs: double-precision complementary error function
//! - thiserror: error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use premia_core::math::distributions::{norm_cdf, norm_pdf};
//! use premia_core::types::OptionType;
//!
//! let option_type: OptionType = "Call".parse().unwrap();
//! assert_eq!(option_type, OptionType::Call);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!(norm_pdf(0.0) > 0.39);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
