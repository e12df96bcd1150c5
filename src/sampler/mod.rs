//! Quasi-random parameter sampler built on the generalized golden ratio.
//!
//! [`QuasiRandomSampler`] draws parameter assignments from a
//! [`ParameterSpace`] using the additive recurrence (R-sequence)
//! `q <- (q + alpha) mod 1` instead of independent uniform draws. Where
//! random search may cluster points by chance, successive quantile vectors
//! spread evenly over the unit hypercube, so a fixed budget of `n_iter`
//! samples covers the space more uniformly.
//!
//! # How it works
//!
//! - The dimension `D` is the size of the widest parameter group.
//! - The step vector is `alpha[i] = phi_D^-(i + 1)`, see [`crate::golden`].
//! - Each iteration starts from a quantile vector drawn uniformly from the
//!   seed, or from all `0.5` for seed `0`.
//! - For each draw, one group is chosen uniformly at random. Its parameters
//!   are visited in name order and the `i`-th parameter reads coordinate
//!   `q[i]`: enumerated lists are bucketed, continuous domains go through
//!   their inverse-CDF. Direct-only distributions draw from the generator
//!   instead and do not benefit from the low-discrepancy sequence.
//!
//! Iterating twice over the same sampler yields the same samples.
//!
//! # Example
//!
//! ```
//! use qr_sampler::prelude::*;
//!
//! let space = ParamGroup::new()
//!     .param("kernel", vec!["rbf", "linear"])
//!     .param("C", FloatDistribution::uniform(0.0, 1.0));
//!
//! let sampler = QuasiRandomSampler::new(space, 10, Some(0)).unwrap();
//! let samples: Vec<Sample> = sampler.iter().collect::<Result<_>>().unwrap();
//!
//! assert_eq!(samples.len(), 10);
//! for sample in &samples {
//!     let c = sample["C"].as_f64().unwrap();
//!     assert!((0.0..=1.0).contains(&c));
//! }
//! ```

mod builder;
mod iter;

pub use builder::QuasiRandomSamplerBuilder;
pub use iter::QuasiRandomIter;

use crate::error::{Error, Result};
use crate::golden::{self, MAX_DIMENSION};
use crate::grid::ParameterGrid;
use crate::param::Sample;
use crate::rng::RandomState;
use crate::space::ParameterSpace;

/// Low-discrepancy replacement for random parameter sampling.
///
/// Construction validates the space and computes the step vector once;
/// every call to [`iter`](Self::iter) starts an independent, reproducible
/// pass of `n_iter` draws.
#[derive(Clone, Debug)]
pub struct QuasiRandomSampler {
    /// Validated space, each group sorted by parameter name.
    space: ParameterSpace,
    n_iter: usize,
    random_state: RandomState,
    dimension: usize,
    phi: f64,
    alpha: Vec<f64>,
    /// Exhaustive grid size when every domain is enumerated.
    grid_size: Option<usize>,
}

impl QuasiRandomSampler {
    /// Creates a sampler producing `n_iter` samples from `space`.
    ///
    /// `Some(seed)` makes the samples reproducible across runs, and `Some(0)`
    /// also starts every pass from the centre of the hypercube. `None` seeds
    /// from system entropy once, here, so passes over one sampler still
    /// repeat. Use [`builder`](Self::builder) to pass an
    /// existing generator instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the space is malformed (see
    /// [`ParameterSpace::validate`]) or its widest group exceeds
    /// [`MAX_DIMENSION`].
    pub fn new(
        space: impl Into<ParameterSpace>,
        n_iter: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        Self::with_random_state(space.into(), n_iter, RandomState::from(seed))
    }

    pub(crate) fn with_random_state(
        space: ParameterSpace,
        n_iter: usize,
        random_state: RandomState,
    ) -> Result<Self> {
        space.validate()?;

        let dimension = space.dimension();
        if dimension > MAX_DIMENSION {
            return Err(Error::DimensionTooLarge {
                dimension,
                max: MAX_DIMENSION,
            });
        }

        let phi = golden::generalized_golden_ratio(dimension);
        let alpha = golden::step_vector(dimension);

        let grid_size = if space.is_all_enumerated() {
            Some(ParameterGrid::new(&space)?.len())
        } else {
            None
        };

        trace_debug!(
            dimension,
            n_iter,
            groups = space.groups().len(),
            "quasi-random sampler constructed"
        );
        if let Some(size) = grid_size
            && n_iter > size
        {
            trace_info!(
                n_iter,
                grid_size = size,
                "n_iter exceeds the number of distinct combinations; samples will repeat"
            );
        }
        if space.direct_count() > 0 {
            trace_info!(
                parameters = space.direct_count(),
                "distributions without an inverse-CDF are sampled pseudo-randomly"
            );
        }

        Ok(Self {
            space: space.sorted(),
            n_iter,
            random_state: random_state.resolve(),
            dimension,
            phi,
            alpha,
            grid_size,
        })
    }

    /// Creates a builder for configuring a sampler over `space`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qr_sampler::QuasiRandomSampler;
    /// use qr_sampler::space::ParamGroup;
    ///
    /// let sampler = QuasiRandomSampler::builder(ParamGroup::new().param("C", vec![1, 10, 100]))
    ///     .n_iter(2)
    ///     .seed(42)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(sampler.len(), 2);
    /// ```
    #[must_use]
    pub fn builder(space: impl Into<ParameterSpace>) -> QuasiRandomSamplerBuilder {
        QuasiRandomSamplerBuilder::new(space.into())
    }

    /// Starts a new pass over the sequence.
    ///
    /// Each pass re-seeds from the sampler's random state, so passes are
    /// identical and do not affect each other.
    #[must_use]
    pub fn iter(&self) -> QuasiRandomIter<'_> {
        QuasiRandomIter::new(self)
    }

    /// Collects one full pass, stopping at the first sampling error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a distribution.
    pub fn samples(&self) -> Result<Vec<Sample>> {
        self.iter().collect()
    }

    /// Number of distinct points the sampler is expected to cover.
    ///
    /// `min(n_iter, grid size)` when every domain is enumerated, `n_iter`
    /// otherwise. A pass always yields exactly `n_iter` samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid_size
            .map_or(self.n_iter, |size| self.n_iter.min(size))
    }

    /// Returns `true` if [`len`](Self::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of samples yielded per pass.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Number of quasi-random coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The generalized golden ratio for this sampler's dimension.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// The per-coordinate step added on every draw.
    #[must_use]
    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// The validated space, with each group sorted by name.
    #[must_use]
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    /// The random state every pass starts from.
    #[must_use]
    pub fn random_state(&self) -> &RandomState {
        &self.random_state
    }
}

impl<'a> IntoIterator for &'a QuasiRandomSampler {
    type Item = Result<Sample>;
    type IntoIter = QuasiRandomIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
