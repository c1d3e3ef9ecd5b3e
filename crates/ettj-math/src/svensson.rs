//! Nelson-Siegel-Svensson spot and forward curve evaluation.
//!
//! The model parameterizes the spot (zero) yield curve as:
//! ```text
//! y(t) = β₁ + β₂ * ((1 - e^(-λ₁t)) / (λ₁t))
//!           + β₃ * ((1 - e^(-λ₁t)) / (λ₁t) - e^(-λ₁t))
//!           + β₄ * ((1 - e^(-λ₂t)) / (λ₂t) - e^(-λ₂t))
//! ```
//!
//! Where:
//! - β₁: Level (asymptotic long rate)
//! - β₂: Slope (short-end component; y(0) = β₁ + β₂)
//! - β₃, β₄: Curvature components (humps/dips)
//! - λ₁, λ₂: Decay rates (where the humps live on the t-axis)
//!
//! The instantaneous forward rate has the closed form:
//! ```text
//! f(t) = β₁ + β₂e^(-λ₁t) + β₃λ₁t·e^(-λ₁t) + β₄λ₂t·e^(-λ₂t)
//! ```
//! which is equivalent to `f(t) = y(t) + t * dy/dt`; both routes are
//! exposed and kept in agreement by tests.

use crate::error::{MathError, MathResult};

/// Tenor substituted for t = 0 before the rate formulas are applied.
///
/// The spot formula divides by t; the singularity is removable (the limit
/// is β₁ + β₂) but the raw expression at t = 0 yields NaN. Substitution is
/// per-tenor and for computation only; callers report the original tenor.
pub const ZERO_TENOR_EPSILON: f64 = 1e-12;

/// Nelson-Siegel-Svensson curve model.
///
/// Immutable value object holding the six parameters. Construction rejects
/// non-positive decay rates, which make the model undefined. Non-finite
/// parameters are not screened; they propagate through evaluation.
///
/// # Example
///
/// ```rust
/// use ettj_math::Svensson;
///
/// // Typical upward-sloping nominal curve
/// let curve = Svensson::new(0.06, 0.08, 0.10, 0.23, 1.97, 0.17).unwrap();
///
/// let spot_5y = curve.spot_rate(5.0);
/// let forward_5y = curve.forward_rate(5.0);
/// assert!(spot_5y.is_finite() && forward_5y.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svensson {
    /// Level
    b1: f64,
    /// Slope
    b2: f64,
    /// First curvature component
    b3: f64,
    /// Second curvature component
    b4: f64,
    /// First decay rate
    l1: f64,
    /// Second decay rate
    l2: f64,
}

impl Svensson {
    /// Creates a new Svensson curve model.
    ///
    /// # Arguments
    ///
    /// * `b1` - Level (asymptotic rate)
    /// * `b2` - Slope component
    /// * `b3` - First curvature component
    /// * `b4` - Second curvature component
    /// * `l1` - First decay rate (must be positive)
    /// * `l2` - Second decay rate (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either decay rate is not positive.
    pub fn new(b1: f64, b2: f64, b3: f64, b4: f64, l1: f64, l2: f64) -> MathResult<Self> {
        if l1 <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "l1 must be positive, got {l1}"
            )));
        }
        if l2 <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "l2 must be positive, got {l2}"
            )));
        }

        Ok(Self {
            b1,
            b2,
            b3,
            b4,
            l1,
            l2,
        })
    }

    /// Returns the continuously-compounded spot yield at tenor `t` (years).
    ///
    /// A tenor of exactly 0 is evaluated at [`ZERO_TENOR_EPSILON`] and
    /// converges to β₁ + β₂. Negative tenors are out of domain and are not
    /// filtered here; grid construction is responsible for screening them.
    pub fn spot_rate(&self, t: f64) -> f64 {
        let t = safe_tenor(t);
        let x1 = self.l1 * t;
        let x2 = self.l2 * t;

        self.b1
            + self.b2 * loading_factor_1(x1)
            + self.b3 * loading_factor_2(x1)
            + self.b4 * loading_factor_2(x2)
    }

    /// Returns the instantaneous forward rate at tenor `t` (closed form).
    ///
    /// ```text
    /// f(t) = β₁ + β₂e^(-λ₁t) + β₃λ₁t·e^(-λ₁t) + β₄λ₂t·e^(-λ₂t)
    /// ```
    pub fn forward_rate(&self, t: f64) -> f64 {
        let t = safe_tenor(t);
        let e1 = (-self.l1 * t).exp();
        let e2 = (-self.l2 * t).exp();

        self.b1 + self.b2 * e1 + self.b3 * self.l1 * t * e1 + self.b4 * self.l2 * t * e2
    }

    /// Returns the analytic derivative of the spot yield with respect to
    /// the tenor, `dy/dt`.
    ///
    /// This is the derivative route to the forward rate:
    /// `f(t) = y(t) + t * dy/dt`. The closed form in [`forward_rate`] is
    /// the canonical route; this one is kept for the consistency check.
    ///
    /// [`forward_rate`]: Svensson::forward_rate
    pub fn spot_derivative(&self, t: f64) -> f64 {
        let t = safe_tenor(t);
        let x1 = self.l1 * t;
        let x2 = self.l2 * t;
        let e1 = (-x1).exp();
        let e2 = (-x2).exp();

        // d/dx of L1 = (1 - e^-x)/x is (e^-x - L1)/x; d/dx of L2 = L1 - e^-x
        // adds e^-x. Chain rule brings a factor λ for each x = λt.
        let f1_x1 = loading_factor_1(x1);
        let dl1_x1 = (e1 - f1_x1) / x1;
        let dl2_x1 = dl1_x1 + e1;

        let f1_x2 = loading_factor_1(x2);
        let dl1_x2 = (e2 - f1_x2) / x2;
        let dl2_x2 = dl1_x2 + e2;

        self.l1 * (self.b2 * dl1_x1 + self.b3 * dl2_x1) + self.l2 * self.b4 * dl2_x2
    }

    /// Returns the model parameters as (β₁, β₂, β₃, β₄, λ₁, λ₂).
    pub fn params(&self) -> (f64, f64, f64, f64, f64, f64) {
        (self.b1, self.b2, self.b3, self.b4, self.l1, self.l2)
    }
}

/// Substitutes [`ZERO_TENOR_EPSILON`] for a tenor of exactly 0.
fn safe_tenor(t: f64) -> f64 {
    if t == 0.0 {
        ZERO_TENOR_EPSILON
    } else {
        t
    }
}

/// Helper function: (1 - e^(-x)) / x
///
/// The raw quotient loses roughly half the significand to cancellation
/// once x is near the epsilon-substituted range, which is enough to break
/// the t -> 0 limit; the Taylor branch keeps the limit exact.
fn loading_factor_1(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        1.0 - x / 2.0 + x * x / 6.0 // Taylor expansion for numerical stability
    } else {
        (1.0 - (-x).exp()) / x
    }
}

/// Helper function: (1 - e^(-x)) / x - e^(-x)
fn loading_factor_2(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        x / 2.0 - x * x / 3.0 // Taylor expansion for numerical stability
    } else {
        loading_factor_1(x) - (-x).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// ANBIMA pre (nominal fixed-rate) snapshot, 2025-08-07.
    fn pre_curve() -> Svensson {
        Svensson::new(0.060553, 0.082648, 0.102802, 0.229391, 1.965289, 0.16948).unwrap()
    }

    #[test]
    fn test_zero_tenor_limit() {
        // At t = 0, y(t) -> b1 + b2 to within 1e-6 despite the epsilon
        // substitution in the raw formula.
        let curve = pre_curve();
        assert_abs_diff_eq!(curve.spot_rate(0.0), 0.060553 + 0.082648, epsilon = 1e-6);

        let inverted = Svensson::new(0.045, -0.02, 0.01, -0.005, 2.0, 0.5).unwrap();
        assert_abs_diff_eq!(inverted.spot_rate(0.0), 0.045 - 0.02, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_tenor_forward_limit() {
        // The forward curve shares the t -> 0 limit with the spot curve.
        let curve = pre_curve();
        assert_abs_diff_eq!(curve.forward_rate(0.0), 0.060553 + 0.082648, epsilon = 1e-6);
    }

    #[test]
    fn test_asymptotic_level() {
        // As t -> infinity both curves converge to b1; the forward curve
        // gets there exponentially, the spot curve like 1/t.
        let curve = Svensson::new(0.045, -0.02, 0.01, -0.005, 2.0, 0.5).unwrap();
        assert_relative_eq!(curve.spot_rate(100.0), 0.045, epsilon = 1e-2);
        assert_relative_eq!(curve.forward_rate(100.0), 0.045, epsilon = 1e-6);
    }

    #[test]
    fn test_pure_level_shift() {
        // With all shape coefficients zero the curve is flat at b1.
        let curve = Svensson::new(0.05, 0.0, 0.0, 0.0, 1.5, 0.3).unwrap();
        for t in [0.0, 0.25, 1.0, 5.0, 10.0, 30.0] {
            assert_abs_diff_eq!(curve.spot_rate(t), 0.05, epsilon = 1e-12);
            assert_abs_diff_eq!(curve.forward_rate(t), 0.05, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_spot_value() {
        // Regression fixture: pre snapshot at t = 1, pinned from the
        // closed-form computation in IEEE double.
        let curve = pre_curve();
        assert_abs_diff_eq!(curve.spot_rate(1.0), 0.14466568736213231, epsilon = 1e-9);
    }

    #[test]
    fn test_known_forward_value() {
        let curve = pre_curve();
        assert_abs_diff_eq!(curve.forward_rate(1.0), 0.13325793312775414, epsilon = 1e-9);
    }

    #[test]
    fn test_known_values_ipca() {
        // Inflation-linked snapshot, same date.
        let curve = Svensson::new(0.067369, 0.07412, -0.068101, 0.026559, 0.997333, 0.516151)
            .unwrap();
        assert_abs_diff_eq!(curve.spot_rate(1.0), 0.10119340362732739, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.forward_rate(1.0), 0.077837561824237067, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_routes_agree() {
        // Closed form vs derivative route: f(t) = y(t) + t * dy/dt.
        let curve = pre_curve();
        for t in [0.01, 0.25, 1.0, 2.0, 5.0, 10.0, 30.0] {
            let closed = curve.forward_rate(t);
            let derived = curve.spot_rate(t) + t * curve.spot_derivative(t);
            assert_relative_eq!(closed, derived, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_derivative_matches_numerical() {
        let curve = pre_curve();
        let t = 3.0;
        let h = 1e-6;

        let numerical = (curve.spot_rate(t + h) - curve.spot_rate(t - h)) / (2.0 * h);
        assert_relative_eq!(curve.spot_derivative(t), numerical, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_decay_rates() {
        assert!(Svensson::new(0.05, 0.0, 0.0, 0.0, 0.0, 0.5).is_err());
        assert!(Svensson::new(0.05, 0.0, 0.0, 0.0, 1.5, 0.0).is_err());
        assert!(Svensson::new(0.05, 0.0, 0.0, 0.0, -1.0, 0.5).is_err());
        assert!(Svensson::new(0.05, 0.0, 0.0, 0.0, 1.5, -0.1).is_err());
    }

    #[test]
    fn test_non_finite_betas_propagate() {
        // Parameter screening beyond the decay guard is a caller concern;
        // non-finite coefficients flow through evaluation.
        let curve = Svensson::new(f64::NAN, 0.0, 0.0, 0.0, 1.5, 0.3).unwrap();
        assert!(curve.spot_rate(1.0).is_nan());
        assert!(curve.forward_rate(1.0).is_nan());
    }

    #[test]
    fn test_hump_placement() {
        // A positive curvature coefficient puts a hump on the curve; larger
        // decay pulls it toward the short end.
        let curve = Svensson::new(0.03, 0.0, 0.02, 0.0, 0.5, 0.5).unwrap();
        let r_short = curve.spot_rate(0.25);
        let r_mid = curve.spot_rate(2.0);
        let r_long = curve.spot_rate(30.0);
        assert!(r_mid > r_short);
        assert!(r_mid > r_long);
    }
}
