use crate::error::Result;
use crate::rng::RandomState;
use crate::space::ParameterSpace;

use super::QuasiRandomSampler;

/// Builder for configuring a [`QuasiRandomSampler`].
///
/// Created via [`QuasiRandomSampler::builder()`].
///
/// # Defaults
///
/// - `n_iter`: 10
/// - Random state: [`RandomState::Entropy`]
///
/// # Examples
///
/// ```
/// use qr_sampler::prelude::*;
///
/// let space = ParamGroup::new().param("lr", FloatDistribution::log_uniform(1e-4, 1e-1));
/// let sampler = QuasiRandomSampler::builder(space)
///     .n_iter(25)
///     .random_state(fastrand::Rng::with_seed(3))
///     .build()
///     .unwrap();
///
/// assert_eq!(sampler.iter().count(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct QuasiRandomSamplerBuilder {
    space: ParameterSpace,
    n_iter: usize,
    random_state: RandomState,
}

impl QuasiRandomSamplerBuilder {
    pub(super) fn new(space: ParameterSpace) -> Self {
        Self {
            space,
            n_iter: 10,
            random_state: RandomState::Entropy,
        }
    }

    /// Sets the number of samples yielded per pass.
    #[must_use]
    pub fn n_iter(mut self, n_iter: usize) -> Self {
        self.n_iter = n_iter;
        self
    }

    /// Seeds the sampler. Seed `0` selects the median start.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.random_state = RandomState::Seed(seed);
        self
    }

    /// Sets the random state: a seed, an existing generator, or entropy.
    #[must_use]
    pub fn random_state(mut self, random_state: impl Into<RandomState>) -> Self {
        self.random_state = random_state.into();
        self
    }

    /// Builds the configured [`QuasiRandomSampler`].
    ///
    /// # Errors
    ///
    /// Same as [`QuasiRandomSampler::new`].
    pub fn build(self) -> Result<QuasiRandomSampler> {
        QuasiRandomSampler::with_random_state(self.space, self.n_iter, self.random_state)
    }
}
