//! Property-based tests for maturity grid construction.

use proptest::prelude::*;

use ettj_curves::grid;

proptest! {
    /// Free-text parsing never yields an unsorted, negative or empty grid,
    /// whatever the input looks like.
    #[test]
    fn parse_output_is_well_formed(text in ".{0,64}") {
        let tenors = grid::parse(&text);

        prop_assert!(!tenors.is_empty());
        prop_assert!(tenors.iter().all(|t| t.is_finite() && *t >= 0.0));
        prop_assert!(tenors.windows(2).all(|w| w[0] < w[1]));
    }
}

proptest! {
    /// Dense grids always hit the exact requested point count and stay
    /// strictly increasing with the last point at the horizon.
    #[test]
    fn dense_grid_count_is_exact(
        max_years in 1_u32..40,
        points_per_year in 1_u32..365,
    ) {
        let tenors = grid::dense(max_years, points_per_year);

        prop_assert_eq!(tenors.len(), (max_years * points_per_year) as usize);
        prop_assert!(tenors[0] > 0.0);
        prop_assert!(tenors.windows(2).all(|w| w[0] < w[1]));
        prop_assert!((tenors.last().unwrap() - f64::from(max_years)).abs() <= 1e-9);
    }
}

proptest! {
    /// Parsing the rendering of a valid grid reproduces it (the frontend
    /// writes the grid back into the text box after applying a preset).
    #[test]
    fn parse_round_trips_rendered_grids(mut tenors in prop::collection::vec(0.0_f64..50.0, 1..20)) {
        tenors.sort_by(f64::total_cmp);
        tenors.dedup();

        let text = tenors
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        prop_assert_eq!(grid::parse(&text), tenors);
    }
}
