//! Objective and residual evaluation.
//!
//! The cone-complementarity problem is equivalent to minimizing the convex
//! quadratic
//!
//! ```text
//! f(gamma) = 1/2 * gamma' * N * gamma - gamma' * r
//! ```
//!
//! over the feasible cone. Both the backtracking sufficient-decrease check
//! and the adaptive restart compare values of `f`; convergence is judged
//! by a fixed-point violation measure that vanishes exactly at a solution.

use ccp_types::ConstraintSet;
use nalgebra::DVector;

use crate::descriptor::SystemDescriptor;
use crate::projection::project_constraints;

/// Evaluate `f(gamma)` through one operator application.
#[must_use]
pub fn quadratic_objective<D: SystemDescriptor>(descriptor: &D, gamma: &DVector<f64>) -> f64 {
    let n_gamma = descriptor.apply_operator(gamma);
    objective_with_operator_value(gamma, &n_gamma, descriptor.rhs())
}

/// Evaluate `f(gamma)` when `N * gamma` has already been computed.
///
/// The iteration loop computes `N * gamma` for the gradient anyway; this
/// avoids a second operator application per evaluation.
#[must_use]
pub fn objective_with_operator_value(
    gamma: &DVector<f64>,
    n_gamma: &DVector<f64>,
    rhs: &DVector<f64>,
) -> f64 {
    0.5 * gamma.dot(n_gamma) - gamma.dot(rhs)
}

/// Fixed-point violation residual at unit step, normalized by problem size:
///
/// ```text
/// || gamma - Project(gamma - g) || / n
/// ```
///
/// Zero exactly at a solution of the cone-complementarity conditions,
/// strictly positive otherwise for non-degenerate problems. `scratch` must
/// have the problem dimension; it is overwritten.
#[must_use]
pub fn fixed_point_residual(
    constraints: &ConstraintSet,
    gamma: &DVector<f64>,
    gradient: &DVector<f64>,
    scratch: &mut DVector<f64>,
) -> f64 {
    debug_assert_eq!(scratch.len(), gamma.len());

    scratch.copy_from(gamma);
    scratch.axpy(-1.0, gradient, 1.0);
    project_constraints(constraints, scratch);

    let mut sum_sq = 0.0;
    for (a, b) in gamma.iter().zip(scratch.iter()) {
        let d = a - b;
        sum_sq += d * d;
    }
    sum_sq.sqrt() / gamma.len() as f64
}
