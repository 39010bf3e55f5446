//! Sweeps over the angle and norm helpers.

use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use rigel_geometry::{angle_difference, hypot, interval_difference, zero_to_two_pi};

/// `start, start + step, ...` up to and including `end`.
fn sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(move |i| start + step * i as f64)
}

#[test]
fn wraps_full_turns() {
    // Starts away from 0, where rounding may land on either side of the cut.
    for a in sweep(0.05, 6.25, 0.1) {
        for turns in -10..=10 {
            let wrapped = zero_to_two_pi(a + TAU * f64::from(turns));
            assert_abs_diff_eq!(wrapped, a, epsilon = 1e-9);
        }
    }
}

#[test]
fn angle_differences() {
    assert_eq!(angle_difference(0.0, 0.0), 0.0);
    assert_eq!(angle_difference(PI, 0.0), -PI);
    assert_eq!(angle_difference(TAU, 0.0), 0.0);
    assert_eq!(angle_difference(2.0 * TAU, 0.0), 0.0);

    let cases = [
        (0.0, TAU - 0.1, 0.1),
        (0.2, 0.1, 0.1),
        (0.2 + TAU, 0.1, 0.1),
        (0.2 - TAU, 0.1, 0.1),
        (0.2, 0.1 + TAU, 0.1),
        (0.2, 0.1 - TAU, 0.1),
        (0.1, 0.2, -0.1),
        (0.1 - TAU, 0.2, -0.1),
        (0.1 + TAU, 0.2, -0.1),
        (0.1, 0.2 + TAU, -0.1),
        (0.1, 0.2 - TAU, -0.1),
    ];
    for (a, b, expected) in cases {
        assert_abs_diff_eq!(angle_difference(a, b), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(interval_difference(a, b, -PI, PI), expected, epsilon = 1e-9);
    }
}

#[test]
fn differences_stay_in_range() {
    for a in sweep(-20.0, 20.0, 0.37) {
        for b in sweep(-20.0, 20.0, 0.53) {
            let d = angle_difference(a, b);
            assert!((-PI..PI).contains(&d), "angle_difference({a}, {b}) = {d}");
            assert_abs_diff_eq!((d - (a - b)).sin(), 0.0, epsilon = 1e-9);

            let d = interval_difference(a, b, 0.0, 5.0);
            assert!((0.0..5.0).contains(&d), "interval_difference({a}, {b}) = {d}");
        }
    }
}

#[test]
fn hypot_matches_sqrt() {
    for a in sweep(-100.0, 100.0, 0.5) {
        assert_abs_diff_eq!(hypot!(a), a.abs(), epsilon = 1e-9);
        for b in sweep(-100.0, 100.0, 2.5) {
            assert_abs_diff_eq!(hypot!(a, b), (a * a + b * b).sqrt(), epsilon = 1e-9);
        }
    }

    for a in sweep(-10.0, 10.0, 1.5) {
        for b in sweep(-10.0, 10.0, 1.5) {
            for c in sweep(-10.0, 10.0, 1.5) {
                assert_abs_diff_eq!(
                    hypot!(a, b, c),
                    (a * a + b * b + c * c).sqrt(),
                    epsilon = 1e-9
                );
                assert_abs_diff_eq!(
                    hypot!(a, b, c, 1.0),
                    hypot([a, b, c, 1.0]),
                    epsilon = 1e-9
                );
            }
        }
    }
}
