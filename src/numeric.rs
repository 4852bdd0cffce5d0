//! Basic numerical concepts used throughout the crate

#![allow(missing_docs)]

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;

/// Speed of light in vacuum (cm/s)
pub const SPEED_OF_LIGHT_CM_S: Float = 2.997_924_58e10;

/// Tolerance used by tests when comparing floating-point results
#[cfg(test)]
pub const TEST_EPSILON: Float = if cfg!(feature = "f32") { 1e-4 } else { 1e-9 };

/// Check that two floating-point numbers agree to within a relative tolerance
#[cfg(test)]
pub fn assert_close(actual: Float, expected: Float) {
    let scale = expected.abs().max(1.);
    assert!(
        (actual - expected).abs() <= TEST_EPSILON * scale,
        "{actual} is not close enough to {expected}"
    );
}
