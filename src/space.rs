//! Parameter space description: domains, groups and the space itself.
//!
//! A [`ParameterSpace`] is a non-empty list of [`ParamGroup`]s. The common
//! case is a single group; several groups model "pick one of these
//! alternative parameter sets, then sample within it".
//!
//! # Example
//!
//! ```
//! use qr_sampler::distribution::FloatDistribution;
//! use qr_sampler::space::{ParamGroup, ParameterSpace};
//!
//! let svm = ParamGroup::new()
//!     .param("kernel", vec!["rbf", "linear"])
//!     .param("C", FloatDistribution::uniform(0.0, 1.0));
//!
//! let space = ParameterSpace::from(svm);
//! assert_eq!(space.dimension(), 2);
//! assert!(space.validate().is_ok());
//! ```

use std::sync::Arc;

use crate::distribution::{
    DirectSample, Exponential, FloatDistribution, IntDistribution, InverseCdf,
};
use crate::error::{Error, Result};
use crate::param::ParamValue;

/// How a continuous domain turns randomness into values.
#[derive(Clone, Debug)]
pub enum Continuous {
    /// Driven by a quasi-random coordinate through the inverse-CDF.
    Quantile(Arc<dyn InverseCdf>),
    /// Sampled directly from the pseudo-random generator.
    Direct(Arc<dyn DirectSample>),
}

/// The set of values a single parameter can take.
#[derive(Clone, Debug)]
pub enum Domain {
    /// An ordered, finite list of candidates, picked by quantile bucketing.
    Enumerated(Vec<ParamValue>),
    /// A probability distribution.
    Continuous(Continuous),
}

impl Domain {
    /// Enumerated domain over `values`, in the given order.
    #[must_use]
    pub fn choices<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ParamValue>,
    {
        Self::Enumerated(values.into_iter().map(Into::into).collect())
    }

    /// Continuous domain remapped through the distribution's inverse-CDF.
    #[must_use]
    pub fn distribution<D: InverseCdf + 'static>(dist: D) -> Self {
        Self::Continuous(Continuous::Quantile(Arc::new(dist)))
    }

    /// Continuous domain that is sampled directly, without consuming a
    /// quasi-random coordinate.
    #[must_use]
    pub fn sampled<D: DirectSample + 'static>(dist: D) -> Self {
        Self::Continuous(Continuous::Direct(Arc::new(dist)))
    }

    /// Returns `true` for enumerated domains.
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Self::Enumerated(_))
    }

    /// Returns `true` for continuous domains without an inverse-CDF.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Continuous(Continuous::Direct(_)))
    }

    fn validate(&self, name: &str) -> Result<()> {
        let checked = match self {
            Self::Enumerated(values) if values.is_empty() => {
                return Err(Error::EmptyChoices {
                    name: name.to_owned(),
                });
            }
            Self::Enumerated(_) => Ok(()),
            Self::Continuous(Continuous::Quantile(dist)) => dist.validate(),
            Self::Continuous(Continuous::Direct(dist)) => dist.validate(),
        };
        checked.map_err(|source| Error::InvalidParameter {
            name: name.to_owned(),
            source: Box::new(source),
        })
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for Domain {
    fn from(values: Vec<T>) -> Self {
        Self::choices(values)
    }
}

impl From<FloatDistribution> for Domain {
    fn from(dist: FloatDistribution) -> Self {
        Self::distribution(dist)
    }
}

impl From<IntDistribution> for Domain {
    fn from(dist: IntDistribution) -> Self {
        Self::distribution(dist)
    }
}

impl From<Exponential> for Domain {
    fn from(dist: Exponential) -> Self {
        Self::distribution(dist)
    }
}

/// A mapping from parameter name to [`Domain`].
///
/// Entries keep their insertion order here; samplers visit them sorted by
/// name.
#[derive(Clone, Debug, Default)]
pub struct ParamGroup {
    entries: Vec<(String, Domain)>,
}

impl ParamGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, domain: impl Into<Domain>) -> Self {
        self.insert(name, domain);
        self
    }

    /// Adds a parameter.
    pub fn insert(&mut self, name: impl Into<String>, domain: impl Into<Domain>) {
        self.entries.push((name.into(), domain.into()));
    }

    /// Number of parameters in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the domain registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Domain> {
        self.entries
            .iter()
            .find_map(|(k, d)| (k == name).then_some(d))
    }

    /// Iterates over `(name, domain)` pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Domain)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }

    fn sort_by_name(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    fn validate(&self, group: usize) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::EmptyGroup { group });
        }
        let mut names: Vec<&str> = self.entries.iter().map(|(k, _)| k.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::DuplicateParameter {
                group,
                name: pair[0].to_owned(),
            });
        }
        for (name, domain) in &self.entries {
            domain.validate(name)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, D: Into<Domain>> FromIterator<(K, D)> for ParamGroup {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, d)| (k.into(), d.into()))
                .collect(),
        }
    }
}

/// An ordered list of parameter groups.
#[derive(Clone, Debug, Default)]
pub struct ParameterSpace {
    groups: Vec<ParamGroup>,
}

impl ParameterSpace {
    /// Creates a space from `groups`.
    #[must_use]
    pub fn new(groups: Vec<ParamGroup>) -> Self {
        Self { groups }
    }

    /// The groups of this space.
    #[must_use]
    pub fn groups(&self) -> &[ParamGroup] {
        &self.groups
    }

    /// Checks the shape of the space.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyParameterSpace`] if there are no groups.
    /// - [`Error::EmptyGroup`] if a group has no parameters.
    /// - [`Error::DuplicateParameter`] if a name repeats within a group.
    /// - [`Error::EmptyChoices`] if a candidate list is empty.
    /// - [`Error::InvalidParameter`] if a distribution rejects its
    ///   configuration.
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(Error::EmptyParameterSpace);
        }
        for (index, group) in self.groups.iter().enumerate() {
            group.validate(index)?;
        }
        Ok(())
    }

    /// Number of quasi-random coordinates needed: the size of the widest
    /// group.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.groups.iter().map(ParamGroup::len).max().unwrap_or(0)
    }

    /// Returns `true` if every domain in every group is enumerated.
    #[must_use]
    pub fn is_all_enumerated(&self) -> bool {
        self.domains().all(Domain::is_enumerated)
    }

    /// Number of continuous domains that can only be sampled directly.
    #[must_use]
    pub fn direct_count(&self) -> usize {
        self.domains().filter(|d| d.is_direct()).count()
    }

    fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.groups.iter().flat_map(|g| g.entries.iter().map(|(_, d)| d))
    }

    /// Returns a copy with every group's entries sorted by name.
    pub(crate) fn sorted(&self) -> Self {
        let mut space = self.clone();
        for group in &mut space.groups {
            group.sort_by_name();
        }
        space
    }
}

impl From<ParamGroup> for ParameterSpace {
    fn from(group: ParamGroup) -> Self {
        Self {
            groups: vec![group],
        }
    }
}

impl From<Vec<ParamGroup>> for ParameterSpace {
    fn from(groups: Vec<ParamGroup>) -> Self {
        Self { groups }
    }
}
