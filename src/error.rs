#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a parameter space contains no groups.
    #[error("parameter space must contain at least one parameter group")]
    EmptyParameterSpace,

    /// Returned when a parameter group contains no parameters.
    #[error("parameter group {group} is empty")]
    EmptyGroup {
        /// Index of the offending group within the space.
        group: usize,
    },

    /// Returned when the same parameter name appears twice in one group.
    #[error("parameter '{name}' appears more than once in group {group}")]
    DuplicateParameter {
        /// Index of the offending group within the space.
        group: usize,
        /// The duplicated parameter name.
        name: String,
    },

    /// Returned when an enumerated domain has no candidate values.
    #[error("candidate list for parameter '{name}' cannot be empty")]
    EmptyChoices {
        /// The parameter whose candidate list is empty.
        name: String,
    },

    /// Returned when a continuous domain rejects its own configuration.
    #[error("invalid distribution for parameter '{name}': {source}")]
    InvalidParameter {
        /// The parameter whose distribution is invalid.
        name: String,
        /// The validation error reported by the distribution.
        #[source]
        source: Box<Error>,
    },

    /// Returned when the widest parameter group needs more quasi-random
    /// coordinates than the sampler supports.
    #[error("parameter group with {dimension} parameters exceeds the maximum of {max}")]
    DimensionTooLarge {
        /// The requested dimension.
        dimension: usize,
        /// The largest supported dimension.
        max: usize,
    },

    /// Returned when an exhaustive grid is requested over a continuous domain.
    #[error("parameter '{name}' is continuous and cannot be enumerated")]
    NotEnumerable {
        /// The continuous parameter.
        name: String,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when a rate parameter is not strictly positive and finite.
    #[error("invalid rate: {0} must be positive and finite")]
    InvalidRate(f64),

    /// Returned by distribution implementations whose inverse-CDF or direct
    /// sampling fails.
    #[error("sampling '{name}' failed: {reason}")]
    Sampling {
        /// The distribution or parameter that failed.
        name: String,
        /// Why sampling failed.
        reason: String,
    },
}

impl Error {
    /// Returns `true` for errors describing a malformed parameter space.
    ///
    /// These are only ever produced while constructing a sampler or a grid,
    /// never while iterating.
    #[must_use]
    pub fn is_invalid_parameter_space(&self) -> bool {
        matches!(
            self,
            Self::EmptyParameterSpace
                | Self::EmptyGroup { .. }
                | Self::DuplicateParameter { .. }
                | Self::EmptyChoices { .. }
                | Self::InvalidParameter { .. }
                | Self::DimensionTooLarge { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
