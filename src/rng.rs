//! Random-state normalization.

/// Source of pseudo-randomness for a sampler.
///
/// Every iteration over a sampler asks its `RandomState` for a fresh
/// generator, so iterations never share state.
///
/// # Examples
///
/// ```
/// use qr_sampler::RandomState;
///
/// let a = RandomState::from(42).rng().u64(..);
/// let b = RandomState::Seed(42).rng().u64(..);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Default)]
pub enum RandomState {
    /// Seed from system entropy.
    #[default]
    Entropy,
    /// Seed with a fixed integer. `Seed(0)` additionally selects the
    /// median start for quasi-random samplers.
    Seed(u64),
    /// Start every iteration from a copy of an existing generator.
    Rng(fastrand::Rng),
}

impl RandomState {
    /// Returns a generator in this state's starting position.
    ///
    /// Two calls on a `Seed` or `Rng` state return generators producing
    /// identical draws. `Entropy` returns a freshly seeded generator each
    /// time.
    #[must_use]
    pub fn rng(&self) -> fastrand::Rng {
        match self {
            Self::Entropy => fastrand::Rng::new(),
            Self::Seed(seed) => fastrand::Rng::with_seed(*seed),
            Self::Rng(rng) => rng.clone(),
        }
    }

    /// Returns `true` for the literal seed `0`.
    #[must_use]
    pub fn is_median_start(&self) -> bool {
        matches!(self, Self::Seed(0))
    }

    /// Pins `Entropy` to one concrete generator so later calls to
    /// [`rng`](Self::rng) agree with each other.
    #[must_use]
    pub(crate) fn resolve(self) -> Self {
        match self {
            Self::Entropy => Self::Rng(fastrand::Rng::new()),
            other => other,
        }
    }
}

impl From<u64> for RandomState {
    fn from(seed: u64) -> Self {
        Self::Seed(seed)
    }
}

impl From<Option<u64>> for RandomState {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seed)
    }
}

impl From<fastrand::Rng> for RandomState {
    fn from(rng: fastrand::Rng) -> Self {
        Self::Rng(rng)
    }
}

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    lerp(low, high, rng.f64())
}

/// Interpolates between `low` and `high` without forming `high - low`,
/// which overflows to infinity for bounds near `f64::MAX`.
#[inline]
pub(crate) fn lerp(low: f64, high: f64, t: f64) -> f64 {
    low * (1.0 - t) + high * t
}
