//! Error taxonomy shared by every generator operation.
//!
//! All variants describe a configuration mistake on the caller's side.
//! Generation is pure, so none of them are transient and none are retried.

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Lower bound above upper bound, or a negative length.
    #[error("Invalid range: min ({min}) must not be greater than max ({max})")]
    InvalidRange { min: String, max: String },

    /// An argument had the wrong shape for the operation.
    #[error("Invalid argument type: {0}")]
    InvalidArgumentType(String),

    /// Casing other than `upper` or `lower`.
    #[error("Invalid casing '{0}': must be either 'upper' or 'lower'")]
    InvalidCasing(String),

    /// Boolean weight outside `0..=100`.
    #[error("Invalid weight {0}: must be a number between 0 and 100")]
    InvalidWeight(f64),

    /// Skeleton that is neither a key list nor a mapping.
    #[error("Invalid skeleton: expected an array of keys or a mapping, got {0}")]
    InvalidSkeletonType(String),

    /// Key-list skeleton containing a non-string element.
    #[error("Invalid skeleton key: all keys must be strings, got {0}")]
    InvalidSkeletonKey(String),

    /// Skeleton already holds as many keys as requested (or allowed).
    #[error(
        "Insufficient key budget: requested {requested} keys but the skeleton already has {existing}"
    )]
    InsufficientKeyBudget { requested: usize, existing: usize },

    /// Array template holds more elements than the requested length allows.
    #[error("Template too long: {template} elements but at most {limit} allowed")]
    TemplateTooLong { template: usize, limit: usize },

    /// Kind name outside `number|string|boolean|object|array`.
    #[error("Unknown kind '{0}': expected one of number, string, boolean, object, array")]
    UnknownKind(String),

    /// A kind restriction was supplied but resolved to nothing.
    #[error("Kind preference must not be empty")]
    EmptyPreference,

    /// Could not find a fresh object key within the retry cap.
    #[error("Could not generate a unique object key after {attempts} attempts")]
    KeySpaceExhausted { attempts: usize },

    /// Named fixture not present in the schema.
    #[error("Fixture not found: {0}")]
    FixtureNotFound(String),
}

impl GeneratorError {
    /// Build an [`GeneratorError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Result alias used across the generator crates.
pub type Result<T> = std::result::Result<T, GeneratorError>;
