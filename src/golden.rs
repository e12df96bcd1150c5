//! Generalized golden ratio and the additive Kronecker step vector.
//!
//! The `d`-dimensional R-sequence advances a point in the unit hypercube by
//! a fixed irrational step on every draw:
//!
//! ```text
//! q[n + 1] = (q[n] + alpha) mod 1,   alpha[i] = phi_d^-(i + 1)
//! ```
//!
//! where `phi_d` is the unique positive root of `x^(d + 1) = x + 1`. For
//! `d = 1` this is the classical golden ratio, for `d = 2` the plastic
//! number.
//!
//! # Example
//!
//! ```
//! use qr_sampler::golden::{generalized_golden_ratio, step_vector};
//!
//! let phi = generalized_golden_ratio(1);
//! assert!((phi - 1.618_033_988_749_895).abs() < 1e-15);
//!
//! let alpha = step_vector(3);
//! assert_eq!(alpha.len(), 3);
//! assert!(alpha.iter().all(|&a| 0.0 < a && a < 1.0));
//! ```

/// Largest dimension a sampler accepts.
///
/// Beyond a few thousand coordinates the step sizes become so small that the
/// trailing coordinates barely move over a realistic budget.
pub const MAX_DIMENSION: usize = 4096;

/// Returns the generalized golden ratio `phi_d`, the positive root of
/// `x^(d + 1) = x + 1`.
///
/// Starts from `1 + ln(2) / d` and applies a Newton step specialised for the
/// defining polynomial until the iterate first fails to decrease; the last
/// decreasing iterate is returned. There is no tolerance, so the result is
/// reproducible bit for bit.
///
/// # Panics
///
/// Panics if `d` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generalized_golden_ratio(d: usize) -> f64 {
    assert!(d >= 1, "dimension must be at least 1");

    let d = d as f64;
    let mut x = 1.0 + core::f64::consts::LN_2 / d;
    loop {
        let u = x.powf(-d);
        let next = x + (u * (1.0 + x) - x) / (d + 1.0 - u);
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Returns the step vector `alpha[i] = phi_d^-(i + 1)` for `i` in `0..d`.
///
/// Every entry lies in `(0, 1)` and the entries are strictly decreasing.
///
/// # Panics
///
/// Panics if `d` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn step_vector(d: usize) -> Vec<f64> {
    let phi = generalized_golden_ratio(d);
    (1..=d).map(|i| phi.powf(-(i as f64))).collect()
}

/// Advances `quantiles` by one Kronecker step: `q <- (q + alpha) mod 1`.
///
/// # Panics
///
/// Panics in debug builds if the slices differ in length.
pub fn advance(quantiles: &mut [f64], alpha: &[f64]) {
    debug_assert_eq!(quantiles.len(), alpha.len());
    for (q, a) in quantiles.iter_mut().zip(alpha) {
        *q = (*q + a) % 1.0;
    }
}
