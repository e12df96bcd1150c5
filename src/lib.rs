#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Quasi-random parameter sampling for hyperparameter search. Instead of
//! drawing each configuration independently, the sampler walks a
//! low-discrepancy sequence built from the generalized golden ratio, so a
//! fixed budget of trials covers the search space more evenly than random
//! search while staying fully reproducible for a given seed.
//!
//! # Getting Started
//!
//! ```
//! use qr_sampler::prelude::*;
//!
//! let space = ParamGroup::new()
//!     .param("kernel", vec!["rbf", "linear"])
//!     .param("C", FloatDistribution::log_uniform(1e-3, 1e3));
//!
//! let sampler = QuasiRandomSampler::new(space, 20, Some(42)).unwrap();
//! for sample in &sampler {
//!     let sample = sample.unwrap();
//!     println!("kernel = {}, C = {}", sample["kernel"], sample["C"]);
//! }
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`QuasiRandomSampler`] | Validate a space once, then yield `n_iter` samples per pass. |
//! | [`ParameterSpace`](space::ParameterSpace) | One or more [`ParamGroup`](space::ParamGroup)s of named [`Domain`](space::Domain)s. |
//! | [`Domain`](space::Domain) | Either an enumerated candidate list or a continuous distribution. |
//! | [`InverseCdf`](distribution::InverseCdf) / [`DirectSample`](distribution::DirectSample) | Capabilities a continuous distribution offers. |
//! | [`Sample`] | One parameter assignment, name to [`ParamValue`]. |
//! | [`RandomState`] | Seed, generator handle or entropy. |
//! | [`ParameterGrid`](grid::ParameterGrid) | Exhaustive grid over an all-enumerated space. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`ParamValue`] and [`Sample`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when samplers are built and iterated | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod distribution;
mod error;
pub mod golden;
pub mod grid;
mod param;
mod rng;
pub mod sampler;
pub mod space;

pub use error::{Error, Result};
pub use param::{ParamValue, Sample};
pub use rng::RandomState;
pub use sampler::{QuasiRandomIter, QuasiRandomSampler, QuasiRandomSamplerBuilder};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use qr_sampler::prelude::*;
/// ```
pub mod prelude {
    pub use crate::distribution::{
        DirectSample, Exponential, FloatDistribution, IntDistribution, InverseCdf,
    };
    pub use crate::error::{Error, Result};
    pub use crate::golden::generalized_golden_ratio;
    pub use crate::grid::ParameterGrid;
    pub use crate::param::{ParamValue, Sample};
    pub use crate::rng::RandomState;
    pub use crate::sampler::{QuasiRandomIter, QuasiRandomSampler, QuasiRandomSamplerBuilder};
    pub use crate::space::{Continuous, Domain, ParamGroup, ParameterSpace};
}
