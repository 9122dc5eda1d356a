//! Selective evaluation of price and Greeks.
//!
//! [`evaluate`] derives the shared BSM terms once and reports only the
//! requested quantities. [`evaluate_batch`] runs independent evaluations,
//! in parallel when the `parallel` feature is enabled.

use premia_core::types::PricingError;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analytical::{BlackScholesMerton, OptionSpec};

use super::convention::GreeksConvention;
use super::quantity::Quantity;
use super::result::GreekResult;
use super::selection::Selection;

/// Evaluates the selected quantities for one option.
///
/// Each quantity is computed once, in request order, from a single
/// [`BlackScholesMerton`] model. Theta, vega and rho are reported in the
/// units of `convention`.
///
/// # Errors
/// - [`PricingError::InvalidInput`] if the spec or the convention is invalid.
///
/// No partial result is ever returned.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
/// use premia_models::analytical::OptionSpec;
/// use premia_models::greeks::{evaluate, GreeksConvention, Quantity, Selection};
///
/// let spec = OptionSpec::new(OptionType::Call, 60.0, 65.0, 0.25, 0.3, 0.08);
/// let selection = Selection::from_names(["price", "delta"]).unwrap();
///
/// let result = evaluate(&spec, &selection, &GreeksConvention::default()).unwrap();
/// assert_eq!(result.len(), 2);
/// assert!((result.get(Quantity::Price).unwrap() - 2.1333684449).abs() < 1e-9);
/// ```
pub fn evaluate(
    spec: &OptionSpec,
    selection: &Selection,
    convention: &GreeksConvention,
) -> Result<GreekResult, PricingError> {
    convention.validate()?;

    let quantities = selection.quantities();
    debug!(
        option_type = %spec.option_type,
        quantities = quantities.len(),
        "evaluating BSM quantities"
    );

    let model = BlackScholesMerton::new(*spec).map_err(|err| {
        debug!(error = %err, "rejected BSM inputs");
        err
    })?;

    let mut result = GreekResult::with_capacity(quantities.len());
    for quantity in quantities {
        let value = compute(&model, quantity, convention);
        trace!(quantity = %quantity, value, "computed");
        result.insert(quantity, value);
    }

    Ok(result)
}

/// Evaluates one quantity for one option, without building a result map.
pub(crate) fn evaluate_quantity(
    spec: &OptionSpec,
    quantity: Quantity,
    convention: &GreeksConvention,
) -> Result<f64, PricingError> {
    convention.validate()?;

    let model = BlackScholesMerton::new(*spec).map_err(|err| {
        debug!(error = %err, quantity = %quantity, "rejected BSM inputs");
        err
    })?;

    let value = compute(&model, quantity, convention);
    trace!(quantity = %quantity, value, "computed");
    Ok(value)
}

/// Evaluates the same selection for many options.
///
/// The output has one entry per input spec, in input order. Each entry
/// succeeds or fails on its own.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
/// use premia_models::analytical::OptionSpec;
/// use premia_models::greeks::{evaluate_batch, GreeksConvention, Selection};
///
/// let good = OptionSpec::new(OptionType::Put, 100.0, 95.0, 0.5, 0.2, 0.1);
/// let expired = OptionSpec::new(OptionType::Put, 100.0, 95.0, 0.0, 0.2, 0.1);
///
/// let results = evaluate_batch(&[good, expired], &Selection::All, &GreeksConvention::default());
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn evaluate_batch(
    specs: &[OptionSpec],
    selection: &Selection,
    convention: &GreeksConvention,
) -> Vec<Result<GreekResult, PricingError>> {
    debug!(options = specs.len(), "evaluating BSM batch");

    #[cfg(feature = "parallel")]
    let results: Vec<_> = specs
        .par_iter()
        .map(|spec| evaluate(spec, selection, convention))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = specs
        .iter()
        .map(|spec| evaluate(spec, selection, convention))
        .collect();

    results
}

/// Computes one quantity in reporting units.
#[inline]
fn compute(model: &BlackScholesMerton, quantity: Quantity, convention: &GreeksConvention) -> f64 {
    match quantity {
        Quantity::Price => model.price(),
        Quantity::Delta => model.delta(),
        Quantity::Gamma => model.gamma(),
        Quantity::Theta => convention.report_theta(model.theta()),
        Quantity::Vega => convention.report_vega(model.vega()),
        Quantity::Rho => convention.report_rho(model.rho()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use premia_core::types::OptionType;

    use crate::greeks::convention::{SensitivityUnit, ThetaUnit};

    fn call_spec() -> OptionSpec {
        OptionSpec::new(OptionType::Call, 60.0, 65.0, 0.25, 0.30, 0.08)
    }

    // ========================================
    // Selection handling
    // ========================================

    #[test]
    fn test_all_selection_has_six_keys_in_order() {
        let result = evaluate(&call_spec(), &Selection::All, &GreeksConvention::default()).unwrap();
        assert_eq!(
            result.keys().collect::<Vec<_>>(),
            ["price", "delta", "gamma", "theta", "vega", "rho"]
        );
    }

    #[test]
    fn test_subset_in_request_order() {
        let selection = Selection::from_names(["rho", "price"]).unwrap();
        let result = evaluate(&call_spec(), &selection, &GreeksConvention::default()).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), ["rho", "price"]);
    }

    #[test]
    fn test_duplicates_computed_once() {
        let selection = Selection::from_names(["delta", "delta", "gamma"]).unwrap();
        let result = evaluate(&call_spec(), &selection, &GreeksConvention::default()).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), ["delta", "gamma"]);
    }

    #[test]
    fn test_empty_selection_gives_empty_result() {
        let result = evaluate(
            &call_spec(),
            &Selection::Only(Vec::new()),
            &GreeksConvention::default(),
        )
        .unwrap();
        assert!(result.is_empty());
    }

    // ========================================
    // Values and conventions
    // ========================================

    #[test]
    fn test_values_match_model() {
        let spec = call_spec();
        let model = BlackScholesMerton::new(spec).unwrap();
        let result = evaluate(&spec, &Selection::All, &GreeksConvention::raw()).unwrap();

        assert_eq!(result.get(Quantity::Price), Some(model.price()));
        assert_eq!(result.get(Quantity::Delta), Some(model.delta()));
        assert_eq!(result.get(Quantity::Gamma), Some(model.gamma()));
        assert_eq!(result.get(Quantity::Theta), Some(model.theta()));
        assert_eq!(result.get(Quantity::Vega), Some(model.vega()));
        assert_eq!(result.get(Quantity::Rho), Some(model.rho()));
    }

    #[test]
    fn test_default_convention_scales_vega_and_rho() {
        let result = evaluate(&call_spec(), &Selection::All, &GreeksConvention::default()).unwrap();
        assert_relative_eq!(result.get(Quantity::Theta).unwrap(), -8.428174386737375, epsilon = 1e-9);
        assert_relative_eq!(result.get(Quantity::Vega).unwrap(), 0.11351544053522, epsilon = 1e-9);
        assert_relative_eq!(result.get(Quantity::Rho).unwrap(), 0.050538998582005445, epsilon = 1e-9);
    }

    #[test]
    fn test_per_day_convention() {
        let convention = GreeksConvention::builder()
            .theta_unit(ThetaUnit::PerDay)
            .vega_unit(SensitivityUnit::PerUnit)
            .build()
            .unwrap();
        let selection = Selection::from_names(["theta", "vega"]).unwrap();
        let result = evaluate(&call_spec(), &selection, &convention).unwrap();

        assert_relative_eq!(
            result.get(Quantity::Theta).unwrap(),
            -8.428174386737375 / 365.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.get(Quantity::Vega).unwrap(), 11.351544053522, epsilon = 1e-8);
    }

    // ========================================
    // Errors
    // ========================================

    #[test]
    fn test_invalid_spec_rejected() {
        let spec = OptionSpec::new(OptionType::Call, 60.0, 65.0, 0.25, 0.0, 0.08);
        let err = evaluate(&spec, &Selection::All, &GreeksConvention::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_single_quantity_matches_selection() {
        let spec = call_spec();
        let convention = GreeksConvention::default();
        let all = evaluate(&spec, &Selection::All, &convention).unwrap();
        for quantity in Quantity::ALL {
            assert_eq!(
                evaluate_quantity(&spec, quantity, &convention).ok(),
                all.get(quantity)
            );
        }

        let expired = OptionSpec { ttm: 0.0, ..spec };
        let err = evaluate_quantity(&expired, Quantity::Rho, &convention).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_convention_rejected() {
        let convention = GreeksConvention {
            days_per_year: 0.0,
            ..GreeksConvention::default()
        };
        let err = evaluate(&call_spec(), &Selection::All, &convention).unwrap_err();
        assert!(err.is_invalid_input());
    }

    // ========================================
    // Batch
    // ========================================

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let specs = [
            call_spec(),
            OptionSpec::new(OptionType::Put, 100.0, 95.0, 0.0, 0.2, 0.1),
            call_spec().with_option_type(OptionType::Put),
        ];
        let results = evaluate_batch(&specs, &Selection::All, &GreeksConvention::default());

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_invalid_input());
        assert_eq!(
            results[2].as_ref().unwrap(),
            &evaluate(&specs[2], &Selection::All, &GreeksConvention::default()).unwrap()
        );
    }

    #[test]
    fn test_batch_empty() {
        let results = evaluate_batch(&[], &Selection::All, &GreeksConvention::default());
        assert!(results.is_empty());
    }
}
