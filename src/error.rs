//! Error types for population construction and generation creation.

use thiserror::Error;

/// Validation errors raised by [`Population`](crate::Population).
///
/// All variants are caller-programming errors raised synchronously before
/// any state mutation: a failed call leaves no new generation committed to
/// history. The core performs no I/O and defines no transient/retryable
/// error category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulationError {
    /// `min_size` must be at least 2 for a meaningful population.
    #[error("minimum population size must be at least 2, got {0}")]
    MinSizeTooSmall(usize),

    /// `max_size` must not be below `min_size`.
    #[error("maximum population size ({max}) must be >= minimum size ({min})")]
    MaxSizeBelowMin {
        /// The minimum size supplied at construction.
        min: usize,
        /// The offending maximum size.
        max: usize,
    },

    /// A generation cannot be created from an empty chromosome sequence.
    #[error("a new generation requires at least one chromosome")]
    EmptyGeneration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PopulationError::MinSizeTooSmall(1).to_string(),
            "minimum population size must be at least 2, got 1"
        );
        assert_eq!(
            PopulationError::MaxSizeBelowMin { min: 10, max: 4 }.to_string(),
            "maximum population size (4) must be >= minimum size (10)"
        );
        assert_eq!(
            PopulationError::EmptyGeneration.to_string(),
            "a new generation requires at least one chromosome"
        );
    }
}
