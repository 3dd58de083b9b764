//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur when assembling or solving a constraint problem.
///
/// Only precondition violations are errors. Numerical non-convergence is
/// reported through [`SolveStatus`](crate::SolveStatus), never through this
/// type: a non-convergent solve still returns its best iterate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CcpError {
    /// A vector's length does not match the problem dimension.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// The dimension required by the problem.
        expected: usize,
        /// The dimension actually supplied.
        actual: usize,
    },

    /// A constraint group carries invalid data (negative friction,
    /// inverted bounds).
    #[error("invalid constraint group {index}: {reason}")]
    InvalidConstraint {
        /// Index of the offending group in the constraint list.
        index: usize,
        /// Description of what's wrong.
        reason: String,
    },

    /// Invalid solver configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// The system descriptor is internally inconsistent (operator,
    /// right-hand side, and constraint set disagree on shape).
    #[error("malformed descriptor: {reason}")]
    MalformedDescriptor {
        /// Description of the inconsistency.
        reason: String,
    },
}

impl CcpError {
    /// Create a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a malformed descriptor error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            reason: reason.into(),
        }
    }

    /// Check if this is a dimension mismatch.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CcpError::dimension_mismatch(12, 9);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("9"));

        let err = CcpError::InvalidConstraint {
            index: 3,
            reason: "negative friction".into(),
        };
        assert!(err.to_string().contains("negative friction"));
    }

    #[test]
    fn test_error_predicates() {
        let err = CcpError::dimension_mismatch(6, 3);
        assert!(err.is_dimension_mismatch());
        assert!(!err.is_config_error());

        let err = CcpError::invalid_config("tolerance must be positive");
        assert!(err.is_config_error());
        assert!(!err.is_dimension_mismatch());
    }
}
