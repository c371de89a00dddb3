//! Helper functions for integration tests

#![allow(dead_code)]

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-300 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that `values` never decreases by more than `slack`
pub fn assert_non_decreasing(values: &[f64], slack: f64, message: &str) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] >= w[0] - slack,
            "{}: value dropped at index {} ({} -> {})",
            message, i + 1, w[0], w[1]
        );
    }
}

/// Assert that `values` never increases by more than `slack`
pub fn assert_non_increasing(values: &[f64], slack: f64, message: &str) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] <= w[0] + slack,
            "{}: value rose at index {} ({} -> {})",
            message, i + 1, w[0], w[1]
        );
    }
}
