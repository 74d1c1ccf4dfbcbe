//! Arithmetic Module
//!
//! The four supported operations, each rounded to two decimal places.

// == Rounding ==
/// Rounds to 2 decimal places, halves away from zero.
///
/// Magnitudes too large to scale by 100 have no fractional digits and are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Sums two numbers.
pub fn add(x: f64, y: f64) -> f64 {
    round2(x + y)
}

/// Deducts `y` from `x`.
pub fn subtract(x: f64, y: f64) -> f64 {
    round2(x - y)
}

/// Multiplies two numbers.
pub fn multiply(x: f64, y: f64) -> f64 {
    round2(x * y)
}

/// Divides `x` by `y`. Callers reject `y == 0` beforehand.
pub fn divide(x: f64, y: f64) -> f64 {
    round2(x / y)
}
