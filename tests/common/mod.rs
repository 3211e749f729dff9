#![allow(dead_code)]

/// Float comparison for formula results that pass through inexact constants (0.65, 1.38).
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
