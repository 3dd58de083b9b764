//! Terminal states of an iterative solve.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a solve terminated.
///
/// Non-convergence is not a failure: a solve that hits the iteration cap
/// still returns its best iterate together with the final residual, and
/// the caller decides whether that iterate is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveStatus {
    /// The residual dropped below the configured tolerance.
    Converged,
    /// The iteration cap was reached before the tolerance was met.
    MaxIterationsReached,
}

impl SolveStatus {
    /// Check whether the solve converged within tolerance.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::MaxIterationsReached => write!(f, "max iterations reached"),
        }
    }
}
