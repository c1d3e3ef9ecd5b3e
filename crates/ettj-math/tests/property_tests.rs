//! Property-based tests using proptest.
//!
//! These tests verify invariant properties of the NSS evaluator across
//! random parameter draws rather than fixed examples: the two forward-rate
//! routes must agree, and the zero-tenor limit must hold everywhere in the
//! conventional parameter box.

use proptest::prelude::*;

use ettj_math::Svensson;

proptest! {
    /// Closed-form forward rate must agree with the derivative route
    /// f(t) = y(t) + t * dy/dt for non-degenerate tenors.
    #[test]
    fn forward_routes_agree(
        b1 in -0.5_f64..0.5,
        b2 in -0.5_f64..0.5,
        b3 in -0.5_f64..0.5,
        b4 in -0.5_f64..0.5,
        l1 in 0.01_f64..5.0,
        l2 in 0.01_f64..5.0,
        t in 0.01_f64..30.0,
    ) {
        let curve = Svensson::new(b1, b2, b3, b4, l1, l2).unwrap();

        let closed = curve.forward_rate(t);
        let derived = curve.spot_rate(t) + t * curve.spot_derivative(t);

        prop_assert!(
            (closed - derived).abs() <= 1e-9 * (1.0 + closed.abs()),
            "routes diverge at t={}: closed={}, derived={}",
            t,
            closed,
            derived
        );
    }
}

proptest! {
    /// At tenor 0 the spot rate must reproduce the analytic limit b1 + b2
    /// despite the epsilon substitution inside the evaluator.
    #[test]
    fn zero_tenor_limit_holds(
        b1 in -0.5_f64..0.5,
        b2 in -0.5_f64..0.5,
        b3 in -0.5_f64..0.5,
        b4 in -0.5_f64..0.5,
        l1 in 0.01_f64..5.0,
        l2 in 0.01_f64..5.0,
    ) {
        let curve = Svensson::new(b1, b2, b3, b4, l1, l2).unwrap();
        let at_zero = curve.spot_rate(0.0);

        prop_assert!(
            (at_zero - (b1 + b2)).abs() <= 1e-6,
            "limit violated: spot(0)={}, b1+b2={}",
            at_zero,
            b1 + b2
        );
    }
}

proptest! {
    /// Evaluation stays finite over the conventional parameter box and a
    /// wide tenor range, including the degenerate tenor 0.
    #[test]
    fn rates_are_finite(
        b1 in -0.5_f64..0.5,
        b2 in -0.5_f64..0.5,
        b3 in -0.5_f64..0.5,
        b4 in -0.5_f64..0.5,
        l1 in 0.01_f64..5.0,
        l2 in 0.01_f64..5.0,
        t in 0.0_f64..50.0,
    ) {
        let curve = Svensson::new(b1, b2, b3, b4, l1, l2).unwrap();

        prop_assert!(curve.spot_rate(t).is_finite());
        prop_assert!(curve.forward_rate(t).is_finite());
        prop_assert!(curve.spot_derivative(t).is_finite());
    }
}
