//! Continuous distributions and the capabilities the sampler needs from them.
//!
//! A continuous domain is driven either through its inverse-CDF, which maps
//! a quasi-random coordinate in `[0, 1)` to a value, or through direct
//! sampling from a pseudo-random generator. Distributions offering an
//! inverse-CDF keep the low-discrepancy guarantee; direct-only ones fall back
//! to plain random draws for that parameter.
//!
//! # Example
//!
//! ```
//! use qr_sampler::distribution::{FloatDistribution, InverseCdf};
//! use qr_sampler::ParamValue;
//!
//! let c = FloatDistribution::uniform(0.0, 10.0);
//! assert_eq!(c.ppf(0.25).unwrap(), ParamValue::Float(2.5));
//! ```

use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::param::ParamValue;
use crate::rng::{f64_range, lerp};

/// A distribution that maps quantiles to values (its inverse-CDF).
pub trait InverseCdf: Debug + Send + Sync {
    /// Returns the value below which a fraction `q` of the mass lies.
    ///
    /// The sampler only passes `q` in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution cannot produce a value. The
    /// sampler forwards it to the caller unchanged.
    fn ppf(&self, q: f64) -> Result<ParamValue>;

    /// Validates the distribution configuration.
    ///
    /// Called once when a sampler is constructed. The default
    /// implementation accepts all configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A distribution that can only be sampled directly.
pub trait DirectSample: Debug + Send + Sync {
    /// Draws one value using `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution cannot produce a value. The
    /// sampler forwards it to the caller unchanged.
    fn sample(&self, rng: &mut fastrand::Rng) -> Result<ParamValue>;

    /// Validates the distribution configuration.
    ///
    /// Called once when a sampler is constructed. The default
    /// implementation accepts all configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Distribution for floating-point parameters.
///
/// Uniform over `[low, high]`, optionally in log space or restricted to the
/// grid `low, low + step, ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<f64>,
}

impl FloatDistribution {
    /// Uniform distribution over `[low, high]`.
    #[must_use]
    pub fn uniform(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            log_scale: false,
            step: None,
        }
    }

    /// Log-uniform distribution over `[low, high]`. Requires `low > 0`.
    #[must_use]
    pub fn log_uniform(low: f64, high: f64) -> Self {
        Self {
            log_scale: true,
            ..Self::uniform(low, high)
        }
    }

    /// Restricts values to `low + k * step`.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    fn check(&self) -> Result<()> {
        if !(self.low.is_finite() && self.high.is_finite()) || self.low > self.high {
            return Err(Error::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.log_scale && self.low <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        if let Some(step) = self.step
            && (step.is_nan() || step <= 0.0 || ((self.high - self.low) / step).is_infinite())
        {
            return Err(Error::InvalidStep);
        }
        Ok(())
    }

    fn map(&self, point: f64) -> f64 {
        if self.log_scale {
            let log_low = self.low.ln();
            let log_high = self.high.ln();
            (log_low + point * (log_high - log_low)).exp()
        } else if let Some(step) = self.step {
            // The step count can exceed i64 for tiny steps.
            let n_steps = ((self.high - self.low) / step).floor();
            let k = (point * (n_steps + 1.0)).floor().min(n_steps);
            self.low + k * step
        } else {
            lerp(self.low, self.high, point)
        }
    }
}

impl InverseCdf for FloatDistribution {
    fn ppf(&self, q: f64) -> Result<ParamValue> {
        Ok(ParamValue::Float(self.map(q).clamp(self.low, self.high)))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}

impl DirectSample for FloatDistribution {
    fn sample(&self, rng: &mut fastrand::Rng) -> Result<ParamValue> {
        let value = if self.log_scale || self.step.is_some() {
            self.map(rng.f64())
        } else {
            f64_range(rng, self.low, self.high)
        };
        Ok(ParamValue::Float(value.clamp(self.low, self.high)))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}

/// Distribution for integer parameters.
///
/// Uniform over the integers in `[low, high]`, optionally in log space or
/// restricted to `low, low + step, ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntDistribution {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<i64>,
}

impl IntDistribution {
    /// Uniform distribution over the integers in `[low, high]`.
    #[must_use]
    pub fn uniform(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            log_scale: false,
            step: None,
        }
    }

    /// Log-uniform distribution over `[low, high]`, rounded to integers.
    /// Requires `low >= 1`.
    #[must_use]
    pub fn log_uniform(low: i64, high: i64) -> Self {
        Self {
            log_scale: true,
            ..Self::uniform(low, high)
        }
    }

    /// Restricts values to `low + k * step`.
    #[must_use]
    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn check(&self) -> Result<()> {
        if self.low > self.high {
            return Err(Error::InvalidBounds {
                low: self.low as f64,
                high: self.high as f64,
            });
        }
        if self.log_scale && self.low < 1 {
            return Err(Error::InvalidLogBounds);
        }
        if let Some(step) = self.step
            && step <= 0
        {
            return Err(Error::InvalidStep);
        }
        Ok(())
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn map(&self, point: f64) -> i64 {
        if self.log_scale {
            let log_low = (self.low as f64).ln();
            let log_high = (self.high as f64).ln();
            let raw = (log_low + point * (log_high - log_low)).exp().round() as i64;
            raw.clamp(self.low, self.high)
        } else {
            let (low, step, n_steps) = self.grid();
            let k = ((point * (n_steps + 1) as f64).floor() as i128).min(n_steps);
            self.offset(low + k * step)
        }
    }

    /// Lower bound, step and number of steps above it, widened so that
    /// full-range bounds cannot overflow.
    fn grid(&self) -> (i128, i128, i128) {
        let low = i128::from(self.low);
        let step = i128::from(self.step.unwrap_or(1));
        (low, step, (i128::from(self.high) - low) / step)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn offset(&self, value: i128) -> i64 {
        value.clamp(i128::from(self.low), i128::from(self.high)) as i64
    }
}

impl InverseCdf for IntDistribution {
    fn ppf(&self, q: f64) -> Result<ParamValue> {
        Ok(ParamValue::Int(self.map(q)))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}

impl DirectSample for IntDistribution {
    fn sample(&self, rng: &mut fastrand::Rng) -> Result<ParamValue> {
        let value = if self.log_scale {
            self.map(rng.f64())
        } else if self.step.is_some() {
            let (low, step, n_steps) = self.grid();
            self.offset(low + rng.i128(0..=n_steps) * step)
        } else {
            rng.i64(self.low..=self.high)
        };
        Ok(ParamValue::Int(value))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}

/// Exponential distribution with the given rate (`1 / scale`).
#[derive(Clone, Debug, PartialEq)]
pub struct Exponential {
    /// Rate parameter, strictly positive.
    pub rate: f64,
}

impl Exponential {
    /// Exponential distribution with the given rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    fn check(&self) -> Result<()> {
        if self.rate > 0.0 && self.rate.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidRate(self.rate))
        }
    }

    fn map(&self, q: f64) -> f64 {
        -(-q).ln_1p() / self.rate
    }
}

impl InverseCdf for Exponential {
    fn ppf(&self, q: f64) -> Result<ParamValue> {
        Ok(ParamValue::Float(self.map(q)))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}

impl DirectSample for Exponential {
    fn sample(&self, rng: &mut fastrand::Rng) -> Result<ParamValue> {
        Ok(ParamValue::Float(self.map(rng.f64())))
    }

    fn validate(&self) -> Result<()> {
        self.check()
    }
}
