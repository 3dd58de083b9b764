//! Accelerated projected gradient descent for cone-complementarity problems.
//!
//! This crate provides the iterative numerical core of a constraint-dynamics
//! time stepper: given an assembled problem - the Schur-complement operator
//! `N = J * M^-1 * J^T`, a right-hand side `r`, and per-constraint friction
//! cone / bound metadata - it computes the constraint impulses consistent
//! with the non-penetration and Coulomb-friction complementarity conditions.
//!
//! # Components
//!
//! - [`SystemDescriptor`]: the capability trait through which the solver
//!   sees the problem; implementations apply `N` matrix-free
//! - [`DenseDescriptor`] / [`SchurDescriptor`]: concrete descriptors for
//!   explicitly formed and sparse matrix-free operators
//! - [`project_constraints`]: Euclidean projection onto the feasible
//!   multiplier set (friction cones and bilateral boxes)
//! - [`ConeSolver`]: the one-method strategy trait behind which solver
//!   implementations can be swapped at runtime
//! - [`ApgdSolver`]: the Nesterov-accelerated solver with backtracking
//!   step-size adaptation and momentum restarts
//!
//! # What this crate is not
//!
//! Body and mesh construction, collision detection, FEA element
//! formulation, and visualization all live in the surrounding simulation
//! framework. The solver consumes an immutable problem snapshot and
//! returns multipliers; it does not know how the problem was assembled.
//!
//! # Example
//!
//! ```
//! use ccp_solver::{ApgdSolver, ApgdSolverConfig, DenseDescriptor};
//! use ccp_types::{ConstraintGroup, ConstraintSet};
//! use nalgebra::{DMatrix, DVector};
//!
//! // One frictional contact, identity operator, interior target.
//! let set = ConstraintSet::new(vec![ConstraintGroup::contact(0.5)]).unwrap();
//! let descriptor = DenseDescriptor::new(
//!     DMatrix::identity(3, 3),
//!     DVector::from_vec(vec![2.0, 0.3, 0.4]),
//!     set,
//! )
//! .unwrap();
//!
//! let mut solver = ApgdSolver::new(ApgdSolverConfig::default());
//! let result = solver.solve(&descriptor, None).unwrap();
//!
//! assert!(result.is_converged());
//!
//! // Warm-starting the next step from this solution cuts iterations.
//! let mut warm = ApgdSolver::new(ApgdSolverConfig::default().with_warm_starting(true));
//! let again = warm.solve(&descriptor, Some(&result.multipliers)).unwrap();
//! assert!(again.iterations_used <= result.iterations_used);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod apgd;
mod descriptor;
mod objective;
mod projection;

pub use apgd::{ApgdSolver, ApgdSolverConfig, ApgdSolverResult, ApgdSolverStats, ConeSolver};
pub use descriptor::{DenseDescriptor, SchurDescriptor, SystemDescriptor};
pub use objective::{fixed_point_residual, quadratic_objective};
pub use projection::project_constraints;
#[cfg(feature = "parallel")]
pub use projection::project_constraints_parallel;

// Re-export the types the public API speaks in.
pub use ccp_types::{CcpError, ConstraintGroup, ConstraintSet, SolveStatus};
