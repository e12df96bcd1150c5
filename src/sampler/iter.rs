use core::iter::FusedIterator;

use crate::error::Result;
use crate::golden;
use crate::param::Sample;
use crate::space::{Continuous, Domain};

use super::QuasiRandomSampler;

/// One pass over a [`QuasiRandomSampler`].
///
/// Owns its generator and quantile vector. Yields exactly `n_iter` items
/// unless a distribution fails; after an error the iterator is exhausted.
#[derive(Debug)]
pub struct QuasiRandomIter<'a> {
    sampler: &'a QuasiRandomSampler,
    rng: fastrand::Rng,
    quantiles: Vec<f64>,
    remaining: usize,
}

impl<'a> QuasiRandomIter<'a> {
    pub(super) fn new(sampler: &'a QuasiRandomSampler) -> Self {
        let mut rng = sampler.random_state.rng();
        let quantiles = if sampler.random_state.is_median_start() {
            vec![0.5; sampler.dimension]
        } else {
            (0..sampler.dimension).map(|_| rng.f64()).collect()
        };

        trace_debug!(
            n_iter = sampler.n_iter,
            median_start = sampler.random_state.is_median_start(),
            "quasi-random pass started"
        );

        Self {
            sampler,
            rng,
            quantiles,
            remaining: sampler.n_iter,
        }
    }

    /// Current position in the unit hypercube, used by the next draw.
    #[must_use]
    pub fn quantiles(&self) -> &[f64] {
        &self.quantiles
    }

    fn draw(&mut self) -> Result<Sample> {
        let sampler = self.sampler;
        let groups = sampler.space.groups();
        let group = &groups[self.rng.usize(..groups.len())];

        let mut sample = Sample::new();
        for ((name, domain), &q) in group.iter().zip(&self.quantiles) {
            let value = match domain {
                Domain::Enumerated(values) => values[bucket_index(q, values.len())].clone(),
                Domain::Continuous(Continuous::Quantile(dist)) => dist.ppf(q)?,
                Domain::Continuous(Continuous::Direct(dist)) => dist.sample(&mut self.rng)?,
            };
            sample.insert(name, value);
        }
        Ok(sample)
    }
}

impl Iterator for QuasiRandomIter<'_> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.draw() {
            Ok(sample) => {
                golden::advance(&mut self.quantiles, &self.sampler.alpha);
                Some(Ok(sample))
            }
            Err(e) => {
                trace_debug!(error = %e, "distribution failed, ending pass");
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for QuasiRandomIter<'_> {}

impl FusedIterator for QuasiRandomIter<'_> {}

/// Index of the bucket containing `q` when `[0, 1)` is split into `k` equal
/// buckets. Always in `0..k` for `k >= 1`, even if `q` rounds up to 1.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn bucket_index(q: f64, k: usize) -> usize {
    ((q * k as f64) as usize).min(k.saturating_sub(1))
}
