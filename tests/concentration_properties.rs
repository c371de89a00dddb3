//! Property tests for the erfc concentration model

use contam_rs::models::compute_concentration;
use contam_rs::simulation::{compute_curves, SimulationParameters};
use proptest::prelude::*;

fn c0() -> impl Strategy<Value = f64> {
    1e-3..1e4f64
}

fn dispersion() -> impl Strategy<Value = f64> {
    1e-3..1e3f64
}

fn depth() -> impl Strategy<Value = f64> {
    0.0..500.0f64
}

fn time() -> impl Strategy<Value = f64> {
    1e-3..1e3f64
}

proptest! {
    #[test]
    fn bounded_by_source(c0 in c0(), d in dispersion(), z in depth(), t in time()) {
        let c = compute_concentration(c0, d, z, t).unwrap();
        prop_assert!(c.is_finite());
        prop_assert!(c >= 0.0);
        prop_assert!(c <= c0);
    }

    #[test]
    fn surface_equals_source(c0 in c0(), d in dispersion(), t in time()) {
        prop_assert_eq!(compute_concentration(c0, d, 0.0, t).unwrap(), c0);
    }

    #[test]
    fn non_increasing_in_depth(c0 in c0(), d in dispersion(), z in depth(), dz in 0.0..100.0f64, t in time()) {
        let shallow = compute_concentration(c0, d, z, t).unwrap();
        let deep = compute_concentration(c0, d, z + dz, t).unwrap();
        prop_assert!(deep <= shallow + 1e-12 * c0, "{} > {}", deep, shallow);
    }

    #[test]
    fn non_decreasing_in_time(c0 in c0(), d in dispersion(), z in 1e-3..500.0f64, t in time(), dt in 0.0..1e3f64) {
        let early = compute_concentration(c0, d, z, t).unwrap();
        let late = compute_concentration(c0, d, z, t + dt).unwrap();
        prop_assert!(late >= early - 1e-12 * c0, "{} < {}", late, early);
    }

    #[test]
    fn linear_in_source(c0 in c0(), k in 1e-3..1e3f64, d in dispersion(), z in depth(), t in time()) {
        let base = compute_concentration(c0, d, z, t).unwrap();
        let scaled = compute_concentration(k * c0, d, z, t).unwrap();
        let expected = k * base;
        prop_assert!(
            (scaled - expected).abs() <= 1e-12 * expected.abs() + 1e-300,
            "{} vs {}", scaled, expected
        );
    }

    #[test]
    fn non_positive_time_rejected(c0 in c0(), d in dispersion(), z in depth(), t in -1e3..=0.0f64) {
        prop_assert!(compute_concentration(c0, d, z, t).is_err());
    }

    #[test]
    fn non_positive_parameters_rejected(bad in -1e3..=0.0f64, z in depth(), t in time()) {
        prop_assert!(compute_concentration(bad, 10.0, z, t).is_err());
        prop_assert!(compute_concentration(100.0, bad, z, t).is_err());
    }

    #[test]
    fn one_curve_per_depth_in_order(
        depths in prop::collection::vec(0.0..200.0f64, 0..8),
        samples in 1usize..300,
        horizon in prop_oneof![
            0.1..400.0f64,
            (0.0..=1e-9f64).prop_map(|e| 1.0 + e),
            Just(1.0 + f64::EPSILON),
        ],
    ) {
        let params = SimulationParameters::default()
            .with_depths(depths.clone())
            .with_samples(samples)
            .with_time_horizon(horizon);
        let curves = compute_curves(&params).unwrap();

        prop_assert_eq!(curves.len(), depths.len());
        for (curve, &z) in curves.iter().zip(depths.iter()) {
            prop_assert_eq!(curve.depth(), z);
            prop_assert_eq!(curve.len(), samples);
            prop_assert!(curve.times().iter().all(|&t| t > 0.0 && t <= horizon));
            for w in curve.times().windows(2) {
                prop_assert!(w[1] > w[0], "horizon {}: {} -> {}", horizon, w[0], w[1]);
            }
        }
    }
}
