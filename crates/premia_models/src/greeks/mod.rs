//! Selective price/Greeks evaluation.
//!
//! - `quantity`: The six reportable keys ([`Quantity`])
//! - `selection`: Which keys a request asks for ([`Selection`])
//! - `result`: Insertion-ordered results ([`GreekResult`])
//! - `convention`: Reporting units for theta, vega and rho ([`GreeksConvention`])
//! - `dispatcher`: [`evaluate`] and [`evaluate_batch`]

pub mod convention;
pub mod dispatcher;
pub mod quantity;
pub mod result;
pub mod selection;

pub use convention::{
    ConventionError, GreeksConvention, GreeksConventionBuilder, SensitivityUnit, ThetaUnit,
};
pub use dispatcher::{evaluate, evaluate_batch};
pub use quantity::Quantity;
pub use result::GreekResult;
pub use selection::Selection;
