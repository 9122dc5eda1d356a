//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are pure functions over `f64` and safe to call from any number of
//! threads without synchronisation.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// The statrs erfc series carries an absolute error of about 2.5e-11 on Φ
/// over |x| <= 10. Writing Φ through erfc (rather than `1 - erfc`) keeps
/// relative precision in the lower tail.
///
/// # Examples
/// ```
/// use premia_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// assert!(norm_cdf(-10.0) > 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use premia_core::math::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0) - 0.24197072451914337).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // High-precision reference values of Φ; statrs erfc is good to ~2.5e-11
        let cases = [
            (1.0, 0.841_344_746_068_542_9),
            (-1.0, 0.158_655_253_931_457_05),
            (2.0, 0.977_249_868_051_820_8),
            (-2.0, 0.022_750_131_948_179_195),
            (3.0, 0.998_650_101_968_369_9),
            (-0.5, 0.308_537_538_725_986_9),
            (1.96, 0.975_002_104_851_780_1),
        ];
        for (x, expected) in cases {
            assert_abs_diff_eq!(norm_cdf(x), expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_cdf_dense_grid_within_1e_9() {
        // Φ(x) = ½·erfc(-x/√2) against the series Σ x^(2n+1)/(2n+1)!! on |x| <= 3
        for i in -30..=30 {
            let x = i as f64 * 0.1;
            let mut term = x;
            let mut sum = x;
            let mut n = 0.0;
            while term.abs() > 1e-20 {
                n += 1.0;
                term *= x * x / (2.0 * n + 1.0);
                sum += term;
            }
            let reference = 0.5 + norm_pdf(x) * sum;
            assert_abs_diff_eq!(norm_cdf(x), reference, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_norm_cdf_lower_tail_relative_precision() {
        // Deep tail values keep relative precision
        assert_relative_eq!(norm_cdf(-5.0), 2.866_515_718_791_939e-7, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(-8.0), 6.220_960_574_271_784e-16, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(-10.0), 7.619_853_024_160_527e-24, max_relative = 1e-9);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!(result >= 0.0, "CDF < 0 at x = {}", x);
            assert!(result <= 1.0, "CDF > 1 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        assert_eq!(norm_cdf(40.0), 1.0);
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(-40.0) < 1e-300);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(
            FRAC_1_SQRT_2PI,
            1.0 / (2.0 * std::f64::consts::PI).sqrt(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(2.0), 0.053_990_966_513_188_06, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(3.0), 0.004_431_848_411_938_008, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_norm_pdf_non_negative() {
        for x in (-400..=400).map(|i| i as f64 * 0.1) {
            assert!(norm_pdf(x) >= 0.0, "PDF < 0 at x = {}", x);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of Φ approximates φ
        let h = 1e-5;
        for x in [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), max_relative = 1e-7);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_cdf_in_unit_interval(x in -7.5..7.5_f64) {
                let p = norm_cdf(x);
                prop_assert!(p > 0.0 && p < 1.0);
            }

            #[test]
            fn test_cdf_symmetry_property(x in -10.0..10.0_f64) {
                prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
            }

            #[test]
            fn test_cdf_non_decreasing(x in -10.0..10.0_f64, dx in 0.0..1.0_f64) {
                prop_assert!(norm_cdf(x + dx) >= norm_cdf(x));
            }
        }
    }
}
