//! Exhaustive grid over an all-enumerated parameter space.
//!
//! [`ParameterGrid`] enumerates every combination of candidate values. Its
//! size bounds how many distinct samples a quasi-random sampler can produce
//! from a space without continuous domains.
//!
//! Within a group, names are sorted and the last name varies fastest. Groups
//! follow each other in order, so the grid size is the sum over groups of the
//! product of their candidate counts.
//!
//! # Example
//!
//! ```
//! use qr_sampler::grid::ParameterGrid;
//! use qr_sampler::space::{ParamGroup, ParameterSpace};
//!
//! let space = ParameterSpace::new(vec![
//!     ParamGroup::new().param("kernel", vec!["linear"]).param("C", vec![1, 10]),
//!     ParamGroup::new().param("kernel", vec!["rbf"]).param("gamma", vec![0.1, 0.01, 0.001]),
//! ]);
//!
//! let grid = ParameterGrid::new(&space).unwrap();
//! assert_eq!(grid.len(), 2 + 3);
//! assert_eq!(grid.iter().count(), 5);
//! ```

use crate::error::{Error, Result};
use crate::param::{ParamValue, Sample};
use crate::space::{Domain, ParameterSpace};

/// One group's candidate lists, sorted by name.
#[derive(Clone, Debug)]
struct GridGroup {
    params: Vec<(String, Vec<ParamValue>)>,
    /// Number of combinations, saturated at `usize::MAX`.
    size: usize,
}

/// The Cartesian product of every enumerated domain, group by group.
#[derive(Clone, Debug)]
pub struct ParameterGrid {
    groups: Vec<GridGroup>,
}

impl ParameterGrid {
    /// Builds the grid for `space`.
    ///
    /// # Errors
    ///
    /// Returns the space's validation error if it is malformed, or
    /// [`Error::NotEnumerable`] naming the first continuous parameter.
    pub fn new(space: &ParameterSpace) -> Result<Self> {
        space.validate()?;

        let sorted = space.sorted();
        let groups = sorted
            .groups()
            .iter()
            .map(|group| {
                let params = group
                    .iter()
                    .map(|(name, domain)| match domain {
                        Domain::Enumerated(values) => Ok((name.to_owned(), values.clone())),
                        Domain::Continuous(_) => Err(Error::NotEnumerable {
                            name: name.to_owned(),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                let size = params
                    .iter()
                    .try_fold(1usize, |acc, (_, values)| acc.checked_mul(values.len()))
                    .unwrap_or(usize::MAX);
                Ok(GridGroup { params, size })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { groups })
    }

    /// Total number of combinations, saturated at `usize::MAX`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups
            .iter()
            .fold(0usize, |acc, g| acc.saturating_add(g.size))
    }

    /// Returns `true` if the grid has no combinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the combination at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        let mut index = index;
        for group in &self.groups {
            if index >= group.size {
                index -= group.size;
                continue;
            }
            let mut sample = Sample::new();
            for (name, values) in group.params.iter().rev() {
                let offset = index % values.len();
                index /= values.len();
                sample.insert(name.clone(), values[offset].clone());
            }
            return Some(sample);
        }
        None
    }

    /// Iterates over all combinations in index order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map_while(|i| self.get(i))
    }
}
