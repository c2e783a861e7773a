// File: crates/overlay-core/tests/scale.rs
// Purpose: Linear scale boundaries, inversion and the degenerate-domain guard.

use overlay_core::{make_scale, LinearScale};

#[test]
fn degenerate_domain_collapses_to_range_start() {
    let s = make_scale([4.0, 4.0], [10.0, 90.0]);
    for v in [-100.0, 0.0, 4.0, 4.5, 1e9] {
        assert_eq!(s(v), 10.0);
    }
    assert!(LinearScale::new([4.0, 4.0], [10.0, 90.0]).is_degenerate());

    // a unit divisor would send 4 to 10 here
    let s = make_scale([3.0, 3.0], [0.0, 10.0]);
    assert_eq!(s(3.0), 0.0);
    assert_eq!(s(4.0), 0.0);
}

#[test]
fn boundaries_map_exactly() {
    let cases = [
        ([0.0, 2.0], [0.0, 100.0]),
        ([8.92, 13.08], [400.0, 20.0]),
        ([-5.0, 5.0], [3.0, -3.0]),
        ([1e6, 1e6 + 0.5], [50.0, 980.0]),
    ];
    for (d, r) in cases {
        let s = make_scale(d, r);
        assert!((s(d[0]) - r[0]).abs() < 1e-9, "start of {d:?} -> {r:?}");
        assert!((s(d[1]) - r[1]).abs() < 1e-6, "end of {d:?} -> {r:?}");
    }
}

#[test]
fn no_clamping_outside_domain() {
    let s = make_scale([0.0, 10.0], [0.0, 100.0]);
    assert!((s(-1.0) + 10.0).abs() < 1e-9);
    assert!((s(12.0) - 120.0).abs() < 1e-9);
}

#[test]
fn inverted_range_for_value_axis() {
    let s = LinearScale::new([0.0, 100.0], [400.0, 0.0]);
    assert!(s.apply(75.0) < s.apply(25.0));
    assert_eq!(s.domain(), [0.0, 100.0]);
    assert_eq!(s.range(), [400.0, 0.0]);
    assert!((s.invert(100.0).unwrap() - 75.0).abs() < 1e-9);
}
