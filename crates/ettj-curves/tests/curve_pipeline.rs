//! Integration test: snapshot -> grid -> sampled series, the exact path an
//! interactive frontend takes on every parameter or grid change.

use approx::assert_abs_diff_eq;

use ettj_curves::prelude::*;

#[test]
fn test_default_snapshot_over_dense_grid() {
    let snap = snapshot::latest(CurveType::Pre);
    let tenors = grid::dense(10, 252);
    assert_eq!(tenors.len(), 2520);

    let series = sample(&snap.params, &tenors);
    assert_eq!(series.len(), 2520);

    // Every point of a valid snapshot over a positive grid is finite.
    assert!(series.spot.iter().all(|r| r.is_finite()));
    assert!(series.forward.iter().all(|r| r.is_finite()));

    // Pinned regression point: pre snapshot at t = 1 (point 252 of the
    // dense grid is exactly one year).
    assert_abs_diff_eq!(series.tenors[251], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(series.spot[251], 0.14466568736213231, epsilon = 1e-9);
    assert_abs_diff_eq!(series.forward[251], 0.13325793312775414, epsilon = 1e-9);
}

#[test]
fn test_free_text_grid_through_sampling() {
    let snap = snapshot::latest(CurveType::Ipca);
    let tenors = grid::parse("1, 2, 2, 0.5");
    assert_eq!(tenors, vec![0.5, 1.0, 2.0]);

    let series = sample(&snap.params, &tenors);
    assert_eq!(series.len(), 3);
    assert_abs_diff_eq!(series.spot[1], 0.10119340362732739, epsilon = 1e-9);
}

#[test]
fn test_garbage_input_still_renders_a_curve() {
    // The interactive contract: bad tenor text falls back to the default
    // grid instead of presenting an empty chart.
    let snap = snapshot::latest(CurveType::Pre);
    let tenors = grid::parse("not, numbers, at, all");
    assert_eq!(tenors.len(), 520);

    let series = sample(&snap.params, &tenors);
    assert_eq!(series.len(), 520);
    assert!(series.spot.iter().all(|r| r.is_finite()));
}

#[test]
fn test_grid_with_zero_tenor_mixes_safely() {
    // Per-element epsilon handling: a grid mixing 0 with ordinary tenors
    // must not contaminate neighboring points.
    let snap = snapshot::latest(CurveType::Pre);
    let series = sample(&snap.params, &[0.0, 1.0]);

    let single = sample(&snap.params, &[1.0]);
    assert_eq!(series.spot[1], single.spot[0]);
    assert_eq!(series.tenors[0], 0.0);

    let (b1, b2, _, _, _, _) = snap.params.params();
    assert_abs_diff_eq!(series.spot[0], b1 + b2, epsilon = 1e-6);
}
