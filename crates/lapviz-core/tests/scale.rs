// File: crates/lapviz-core/tests/scale.rs
// Purpose: Space mapper: boundary exactness, padding, degenerate ranges, inversion and aspect-locked fit.

use lapviz_core::grid::ticks;
use lapviz_core::{fit_aspect, map, Bounds, Range, Size, Transform};

const EPS: f64 = 1e-9;

#[test]
fn boundaries_map_to_padded_edges() {
    let src = Range::new(-3.0, 17.0);
    let dst = Range::new(0.0, 800.0);
    assert!((map(-3.0, src, dst, 20.0) - 20.0).abs() < EPS);
    assert!((map(17.0, src, dst, 20.0) - 780.0).abs() < EPS);
    assert!((map(7.0, src, dst, 20.0) - 400.0).abs() < EPS);
}

#[test]
fn reversed_destination_pads_inward() {
    // Screen y: data min at the bottom pixel, max at the top.
    let src = Range::new(0.0, 100.0);
    let dst = Range::new(340.0, 60.0);
    assert!((map(0.0, src, dst, 10.0) - 330.0).abs() < EPS);
    assert!((map(100.0, src, dst, 10.0) - 70.0).abs() < EPS);
}

#[test]
fn degenerate_source_stays_finite() {
    let src = Range::new(5.0, 5.0);
    let dst = Range::new(0.0, 100.0);
    let px = map(5.0, src, dst, 0.0);
    assert!(px.is_finite());
    assert!((px - 0.0).abs() < EPS);
    let t = Transform::between(src, dst, 0.0);
    assert!(t.apply(6.0).is_finite());
}

#[test]
fn transform_matches_map_and_inverts() {
    let src = Range::new(-50.0, 250.0);
    let dst = Range::new(400.0, 20.0);
    let t = Transform::between(src, dst, 12.0);
    for v in [-50.0, 0.0, 33.3, 250.0] {
        assert!((t.apply(v) - map(v, src, dst, 12.0)).abs() < EPS);
        assert!((t.invert(t.apply(v)) - v).abs() < 1e-9);
    }
}

#[test]
fn ticks_are_evenly_spaced_and_inverse_mapped() {
    let t = Transform::between(Range::new(0.0, 100.0), Range::new(60.0, 740.0), 0.0);
    let ts = ticks(&t, Range::new(60.0, 740.0), 6);
    assert_eq!(ts.len(), 6);
    for (i, tick) in ts.iter().enumerate() {
        assert!((tick.pixel - (60.0 + 136.0 * i as f64)).abs() < EPS);
        assert!((tick.value - 20.0 * i as f64).abs() < 1e-9);
    }
}

#[test]
fn fit_aspect_uses_one_scale_and_centers() {
    let x = Bounds::new(0.0, 10.0).expect("x");
    let y = Bounds::new(0.0, 5.0).expect("y");
    let (tx, ty) = fit_aspect(x, y, Size::new(400.0, 300.0), 50.0);
    // scale = min(300 / 10, 200 / 5) = 30
    assert!((tx.scale - 30.0).abs() < EPS);
    assert_eq!(tx.scale, ty.scale);
    let cx = (tx.apply(0.0) + tx.apply(10.0)) / 2.0;
    let cy = (ty.apply(0.0) + ty.apply(5.0)) / 2.0;
    assert!((cx - 200.0).abs() < EPS);
    assert!((cy - 150.0).abs() < EPS);
}

#[test]
fn fit_aspect_handles_a_flat_track() {
    let x = Bounds::new(0.0, 10.0).expect("x");
    let y = Bounds::new(0.0, 0.0).expect("y");
    let (tx, ty) = fit_aspect(x, y, Size::new(400.0, 300.0), 50.0);
    assert!(tx.scale.is_finite() && ty.offset.is_finite());
    assert!((ty.apply(0.0) - 150.0).abs() < EPS);
}
