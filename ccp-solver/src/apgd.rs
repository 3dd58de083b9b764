//! Accelerated Projected Gradient Descent (APGD) solver.
//!
//! This module implements Nesterov-accelerated projected gradient descent
//! for the mixed linear/cone-complementarity problem produced by a
//! time-stepping rigid/flexible body integrator.
//!
//! # Algorithm
//!
//! The solver minimizes the convex quadratic
//! `f(gamma) = 1/2 * gamma' * N * gamma - gamma' * r` over the feasible
//! cone. Each iteration:
//!
//! 1. Evaluates the gradient `g = N * gamma_hat - r` at the extrapolated
//!    point
//! 2. Takes a projected gradient step `y = Project(gamma_hat - g / L)`
//! 3. Backtracks on `L` while the quadratic model underestimates `f(y)`
//!    (guards against an underestimated Lipschitz constant)
//! 4. Applies the Nesterov momentum extrapolation
//! 5. Restarts the momentum whenever the objective stops improving, which
//!    suppresses the oscillation accelerated methods exhibit on
//!    non-strongly-convex problems
//!
//! Convergence is judged by a fixed-point violation residual that is zero
//! exactly at a solution. A solve never fails: hitting the iteration cap
//! returns [`SolveStatus::MaxIterationsReached`] together with the best
//! iterate seen so far.
//!
//! # Warm Starting
//!
//! The warm-start seed is caller-owned; the solver retains no multiplier
//! state between calls. Passing the previous step's solution typically
//! cuts the iteration count sharply because constraint impulses change
//! slowly across simulation steps.
//!
//! # Example
//!
//! ```
//! use ccp_solver::{ApgdSolver, ApgdSolverConfig, DenseDescriptor};
//! use ccp_types::{ConstraintGroup, ConstraintSet};
//! use nalgebra::{DMatrix, DVector};
//!
//! let set = ConstraintSet::new(vec![ConstraintGroup::contact(0.5)]).unwrap();
//! let descriptor = DenseDescriptor::new(
//!     DMatrix::identity(3, 3),
//!     DVector::from_vec(vec![1.0, 0.1, 0.0]),
//!     set,
//! )
//! .unwrap();
//!
//! let mut solver = ApgdSolver::new(ApgdSolverConfig::default());
//! let result = solver.solve(&descriptor, None).unwrap();
//!
//! assert!(result.is_converged());
//! ```

use ccp_types::{CcpError, ConstraintSet, Result, SolveStatus};
use nalgebra::DVector;

use crate::descriptor::SystemDescriptor;
use crate::objective::{fixed_point_residual, objective_with_operator_value};
use crate::projection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step-size estimate used when the power-iteration probe degenerates.
const FALLBACK_LIPSCHITZ: f64 = 1.0;

/// Cap on backtracking steps within one outer iteration.
const MAX_BACKTRACKS: usize = 60;

/// Configuration for the APGD solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApgdSolverConfig {
    /// Maximum number of outer iterations.
    pub max_iterations: usize,

    /// Convergence tolerance on the fixed-point residual.
    pub tolerance: f64,

    /// Enable warm starting from a caller-supplied seed.
    pub warm_starting: bool,

    /// Multiplicative growth of the Lipschitz estimate during
    /// backtracking. Must be > 1; typical value 2.0.
    pub backtracking_growth: f64,

    /// Per-iteration shrink of the Lipschitz estimate (0, 1]. Lets the
    /// step size recover after a conservative backtracking phase; 1.0
    /// disables recovery.
    pub step_recovery: f64,

    /// Enable convergence tracking (records residual and objective
    /// history in the stats).
    pub track_convergence: bool,
}

impl Default for ApgdSolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
            warm_starting: false,
            backtracking_growth: 2.0,
            step_recovery: 0.9,
            track_convergence: false,
        }
    }
}

impl ApgdSolverConfig {
    /// High-accuracy configuration for offline simulation.
    #[must_use]
    pub fn high_accuracy() -> Self {
        Self {
            max_iterations: 5000,
            tolerance: 1e-10,
            warm_starting: true,
            backtracking_growth: 2.0,
            step_recovery: 0.9,
            track_convergence: false,
        }
    }

    /// Fast configuration for real-time stepping.
    #[must_use]
    pub fn realtime() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-4,
            warm_starting: true,
            backtracking_growth: 2.0,
            step_recovery: 0.95,
            track_convergence: false,
        }
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable warm starting.
    #[must_use]
    pub const fn with_warm_starting(mut self, enabled: bool) -> Self {
        self.warm_starting = enabled;
        self
    }

    /// Enable convergence tracking.
    #[must_use]
    pub const fn with_convergence_tracking(mut self, enabled: bool) -> Self {
        self.track_convergence = enabled;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CcpError::InvalidConfig`] if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(CcpError::invalid_config("max_iterations must be >= 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(CcpError::invalid_config("tolerance must be positive"));
        }
        if !self.backtracking_growth.is_finite() || self.backtracking_growth <= 1.0 {
            return Err(CcpError::invalid_config("backtracking_growth must be > 1"));
        }
        if !(self.step_recovery > 0.0 && self.step_recovery <= 1.0) {
            return Err(CcpError::invalid_config("step_recovery must be in (0, 1]"));
        }
        Ok(())
    }
}

/// Result of an APGD solve.
#[derive(Debug, Clone)]
pub struct ApgdSolverResult {
    /// The multiplier vector, ordered and grouped exactly like the
    /// descriptor's constraint list. This is the best iterate by
    /// residual, not necessarily the last one.
    pub multipliers: DVector<f64>,

    /// Fixed-point residual at the returned iterate.
    pub residual: f64,

    /// Number of outer iterations consumed.
    pub iterations_used: usize,

    /// How the solve terminated.
    pub status: SolveStatus,
}

impl ApgdSolverResult {
    /// Check whether the solve converged within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

/// Statistics from an APGD solver run.
#[derive(Debug, Clone, Default)]
pub struct ApgdSolverStats {
    /// Problem dimension (scalar constraint components).
    pub dimension: usize,
    /// Number of constraint groups.
    pub num_groups: usize,
    /// Whether a warm-start seed was applied.
    pub used_warm_start: bool,
    /// Lipschitz estimate from the initial probe.
    pub initial_lipschitz: f64,
    /// Lipschitz estimate at termination.
    pub final_lipschitz: f64,
    /// Number of momentum restarts triggered.
    pub restarts: usize,
    /// Fixed-point residual at the seed.
    pub initial_residual: f64,
    /// Fixed-point residual at the returned iterate.
    pub final_residual: f64,
    /// Residual at each iteration (when tracking is enabled).
    pub convergence_history: Option<Vec<f64>>,
    /// Objective value at the seed and at each accepted iterate (when
    /// tracking is enabled). Non-increasing except at restart steps.
    pub objective_history: Option<Vec<f64>>,
}

/// Strategy seam for cone-complementarity solvers.
///
/// A single entry point over the [`SystemDescriptor`] snapshot, so
/// callers can hold any strategy behind `&mut dyn ConeSolver` and swap
/// implementations at runtime.
pub trait ConeSolver {
    /// Solve the problem described by `descriptor`, optionally seeding
    /// from `warm_start`.
    ///
    /// # Errors
    ///
    /// Implementations reject malformed inputs with a [`CcpError`];
    /// non-convergence is reported through the result status, never as
    /// an error.
    fn solve(
        &mut self,
        descriptor: &dyn SystemDescriptor,
        warm_start: Option<&DVector<f64>>,
    ) -> Result<ApgdSolverResult>;
}

/// Nesterov accelerated projected gradient descent solver.
///
/// One concrete [`ConeSolver`] strategy; others can be substituted
/// behind that trait without touching the descriptor side.
#[derive(Debug, Clone)]
pub struct ApgdSolver {
    /// Solver configuration.
    config: ApgdSolverConfig,

    /// Statistics from the last solve.
    last_stats: ApgdSolverStats,
}

impl Default for ApgdSolver {
    fn default() -> Self {
        Self::new(ApgdSolverConfig::default())
    }
}

impl ApgdSolver {
    /// Create a new solver with the given configuration.
    #[must_use]
    pub fn new(config: ApgdSolverConfig) -> Self {
        Self {
            config,
            last_stats: ApgdSolverStats::default(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ApgdSolverConfig {
        &self.config
    }

    /// Get mutable configuration.
    pub fn config_mut(&mut self) -> &mut ApgdSolverConfig {
        &mut self.config
    }

    /// Get statistics from the last solve.
    #[must_use]
    pub fn last_stats(&self) -> &ApgdSolverStats {
        &self.last_stats
    }

    /// Solve the cone-complementarity problem described by `descriptor`.
    ///
    /// `warm_start` is dimension-checked whenever supplied and used as the
    /// seed only when [`ApgdSolverConfig::warm_starting`] is enabled;
    /// otherwise the solve starts from zero. The descriptor is read-only
    /// for the duration of the call, and all working buffers are local to
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`CcpError::InvalidConfig`] for an out-of-range
    /// configuration, [`CcpError::MalformedDescriptor`] when the
    /// descriptor's operator, right-hand side, and constraint set disagree
    /// on shape, and [`CcpError::DimensionMismatch`] for a warm-start seed
    /// of the wrong length. Non-convergence is not an error.
    pub fn solve<D: SystemDescriptor + ?Sized>(
        &mut self,
        descriptor: &D,
        warm_start: Option<&DVector<f64>>,
    ) -> Result<ApgdSolverResult> {
        self.config.validate()?;

        let constraints = descriptor.constraints();
        let n = constraints.dimension();
        if descriptor.dimension() != n {
            return Err(CcpError::malformed(format!(
                "descriptor reports dimension {} but constraint set has {n} components",
                descriptor.dimension()
            )));
        }
        if descriptor.rhs().len() != n {
            return Err(CcpError::malformed(format!(
                "right-hand side has {} components but constraint set has {n}",
                descriptor.rhs().len()
            )));
        }

        if let Some(seed) = warm_start {
            if seed.len() != n {
                return Err(CcpError::dimension_mismatch(n, seed.len()));
            }
        }

        if n == 0 {
            self.last_stats = ApgdSolverStats::default();
            return Ok(ApgdSolverResult {
                multipliers: DVector::zeros(0),
                residual: 0.0,
                iterations_used: 0,
                status: SolveStatus::Converged,
            });
        }

        let rhs = descriptor.rhs();
        let used_warm_start = self.config.warm_starting && warm_start.is_some();

        // Seed the iterate and make it feasible.
        let mut gamma = match warm_start {
            Some(seed) if self.config.warm_starting => seed.clone(),
            _ => DVector::zeros(n),
        };
        project(constraints, &mut gamma);

        // Working buffers, allocated once per solve.
        let mut extrap = gamma.clone();
        let mut candidate = DVector::zeros(n);
        let mut best = gamma.clone();
        let mut diff = DVector::zeros(n);
        let mut scratch = DVector::zeros(n);

        // Initial Lipschitz estimate: one power-iteration-like probe along
        // the direction from the seed to the all-ones point.
        diff.copy_from(&gamma);
        diff.add_scalar_mut(-1.0);
        let probe_norm = diff.norm();
        let mut lipschitz = if probe_norm > 1e-12 {
            let estimate = descriptor.apply_operator(&diff).norm() / probe_norm;
            if estimate.is_finite() && estimate > 0.0 {
                estimate
            } else {
                FALLBACK_LIPSCHITZ
            }
        } else {
            FALLBACK_LIPSCHITZ
        };
        let initial_lipschitz = lipschitz;

        // Objective and residual at the seed.
        let n_gamma = descriptor.apply_operator(&gamma);
        let mut f_best = objective_with_operator_value(&gamma, &n_gamma, rhs);
        let mut seed_grad = n_gamma;
        seed_grad -= rhs;
        let initial_residual = fixed_point_residual(constraints, &gamma, &seed_grad, &mut scratch);
        let mut best_residual = initial_residual;

        let mut residual_history = self
            .config
            .track_convergence
            .then(|| vec![initial_residual]);
        let mut objective_history = self.config.track_convergence.then(|| vec![f_best]);

        let mut theta: f64 = 1.0;
        let mut restarts = 0;
        let mut iterations = 0;
        let mut status = SolveStatus::MaxIterationsReached;

        if initial_residual <= self.config.tolerance {
            status = SolveStatus::Converged;
        } else {
            for iteration in 0..self.config.max_iterations {
                iterations = iteration + 1;

                // Gradient at the extrapolated point: g = N * extrap - r.
                let n_extrap = descriptor.apply_operator(&extrap);
                let f_extrap = objective_with_operator_value(&extrap, &n_extrap, rhs);
                let mut grad = n_extrap;
                grad -= rhs;

                // Projected gradient step with backtracking on L. The loop
                // terminates once L dominates the curvature along the step.
                let mut n_candidate;
                let mut f_candidate;
                let mut backtracks = 0;
                loop {
                    candidate.copy_from(&extrap);
                    candidate.axpy(-1.0 / lipschitz, &grad, 1.0);
                    project(constraints, &mut candidate);

                    n_candidate = descriptor.apply_operator(&candidate);
                    f_candidate = objective_with_operator_value(&candidate, &n_candidate, rhs);

                    diff.copy_from(&candidate);
                    diff -= &extrap;
                    let model =
                        f_extrap + grad.dot(&diff) + 0.5 * lipschitz * diff.norm_squared();
                    let slack = 1e-12 * (1.0 + f_candidate.abs());
                    if f_candidate <= model + slack || backtracks >= MAX_BACKTRACKS {
                        break;
                    }

                    lipschitz *= self.config.backtracking_growth;
                    backtracks += 1;
                }

                // Nesterov momentum: theta_new solves
                // theta_new^2 = (1 - theta_new) * theta^2.
                let theta_new = 0.5 * theta * ((theta * theta + 4.0).sqrt() - theta);
                let momentum = theta * (1.0 - theta) / (theta * theta + theta_new);

                diff.copy_from(&candidate);
                diff -= &gamma;
                extrap.copy_from(&candidate);
                extrap.axpy(momentum, &diff, 1.0);

                // Fixed-point residual at the accepted candidate.
                let mut grad_candidate = n_candidate;
                grad_candidate -= rhs;
                let residual =
                    fixed_point_residual(constraints, &candidate, &grad_candidate, &mut scratch);

                if residual < best_residual {
                    best_residual = residual;
                    best.copy_from(&candidate);
                }

                // Adaptive restart: momentum has overshot when the
                // objective stops improving.
                if f_candidate > f_best {
                    extrap.copy_from(&candidate);
                    theta = 1.0;
                    restarts += 1;
                } else {
                    f_best = f_candidate;
                    theta = theta_new;
                }

                gamma.copy_from(&candidate);
                lipschitz *= self.config.step_recovery;

                if let Some(history) = residual_history.as_mut() {
                    history.push(residual);
                }
                if let Some(history) = objective_history.as_mut() {
                    history.push(f_candidate);
                }

                tracing::trace!(iteration = iterations, residual, lipschitz, backtracks);

                if residual <= self.config.tolerance {
                    status = SolveStatus::Converged;
                    break;
                }
            }
        }

        self.last_stats = ApgdSolverStats {
            dimension: n,
            num_groups: constraints.num_groups(),
            used_warm_start,
            initial_lipschitz,
            final_lipschitz: lipschitz,
            restarts,
            initial_residual,
            final_residual: best_residual,
            convergence_history: residual_history,
            objective_history,
        };

        tracing::debug!(
            dimension = n,
            iterations,
            residual = best_residual,
            restarts,
            %status,
            "apgd solve finished"
        );

        Ok(ApgdSolverResult {
            multipliers: best,
            residual: best_residual,
            iterations_used: iterations,
            status,
        })
    }
}

impl ConeSolver for ApgdSolver {
    fn solve(
        &mut self,
        descriptor: &dyn SystemDescriptor,
        warm_start: Option<&DVector<f64>>,
    ) -> Result<ApgdSolverResult> {
        ApgdSolver::solve(self, descriptor, warm_start)
    }
}

/// Projection dispatch: the parallel sweep when the feature is enabled,
/// the serial sweep otherwise.
fn project(constraints: &ConstraintSet, gamma: &mut DVector<f64>) {
    #[cfg(feature = "parallel")]
    projection::project_constraints_parallel(constraints, gamma);
    #[cfg(not(feature = "parallel"))]
    projection::project_constraints(constraints, gamma);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::descriptor::DenseDescriptor;
    use approx::assert_relative_eq;
    use ccp_types::ConstraintGroup;
    use nalgebra::DMatrix;

    fn interior_problem() -> DenseDescriptor {
        // Diagonal positive-definite N with the unconstrained minimizer
        // N^-1 r = (2, 0.3, 0.4) strictly inside the mu = 0.5 cone.
        let set = ConstraintSet::new(vec![ConstraintGroup::contact(0.5)]).unwrap();
        let operator = DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 1.0, 1.0]));
        let rhs = DVector::from_vec(vec![2.0, 0.3, 0.4]);
        DenseDescriptor::new(operator, rhs, set).unwrap()
    }

    #[test]
    fn test_converges_to_interior_minimizer() {
        let mut solver = ApgdSolver::default();
        let descriptor = interior_problem();

        let result = solver.solve(&descriptor, None).unwrap();

        assert!(result.is_converged());
        assert!(result.iterations_used <= 50);
        assert!(result.residual < 1e-6);
        assert_relative_eq!(result.multipliers[0], 2.0, epsilon = 1e-5);
        assert_relative_eq!(result.multipliers[1], 0.3, epsilon = 1e-5);
        assert_relative_eq!(result.multipliers[2], 0.4, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_rhs_converges_immediately() {
        let set = ConstraintSet::new(vec![
            ConstraintGroup::contact(0.5),
            ConstraintGroup::unbounded(),
        ])
        .unwrap();
        let descriptor =
            DenseDescriptor::new(DMatrix::identity(4, 4), DVector::zeros(4), set).unwrap();

        let mut solver = ApgdSolver::default();
        let result = solver.solve(&descriptor, None).unwrap();

        assert!(result.is_converged());
        assert!(result.iterations_used <= 1);
        assert_relative_eq!(result.multipliers.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_warm_start_dimension_mismatch_is_fatal() {
        let mut solver = ApgdSolver::new(ApgdSolverConfig::default().with_warm_starting(true));
        let descriptor = interior_problem();

        let seed = DVector::zeros(7);
        let err = solver.solve(&descriptor, Some(&seed)).unwrap_err();

        assert_eq!(err, CcpError::dimension_mismatch(3, 7));
    }

    #[test]
    fn test_max_iterations_reached_returns_best_iterate() {
        // Barely feasible: a contact pushed hard against the cone boundary
        // with a single iteration allowed.
        let set = ConstraintSet::new(vec![ConstraintGroup::contact(0.01)]).unwrap();
        let operator = DMatrix::from_row_slice(
            3,
            3,
            &[100.0, 1.0, 1.0, 1.0, 0.01, 0.0, 1.0, 0.0, 0.01],
        );
        let rhs = DVector::from_vec(vec![1.0, 50.0, -50.0]);
        let descriptor = DenseDescriptor::new(operator, rhs, set).unwrap();

        let mut solver = ApgdSolver::new(
            ApgdSolverConfig::default()
                .with_max_iterations(2)
                .with_tolerance(1e-14),
        );
        let result = solver.solve(&descriptor, None).unwrap();

        assert_eq!(result.status, SolveStatus::MaxIterationsReached);
        assert_eq!(result.iterations_used, 2);
        assert!(result.residual.is_finite());
        assert_eq!(result.multipliers.len(), 3);
    }

    #[test]
    fn test_objective_decreases_except_at_restarts() {
        let set = ConstraintSet::new(vec![
            ConstraintGroup::contact(0.3),
            ConstraintGroup::contact(0.8),
            ConstraintGroup::bilateral(-5.0, 5.0),
        ])
        .unwrap();
        // Coupled, non-diagonal operator so momentum actually matters.
        let mut operator = DMatrix::identity(7, 7) * 4.0;
        for i in 0..6 {
            operator[(i, i + 1)] = 1.0;
            operator[(i + 1, i)] = 1.0;
        }
        let rhs = DVector::from_fn(7, |i, _| 1.0 + i as f64);
        let descriptor = DenseDescriptor::new(operator, rhs, set).unwrap();

        let mut solver =
            ApgdSolver::new(ApgdSolverConfig::default().with_convergence_tracking(true));
        let result = solver.solve(&descriptor, None).unwrap();
        assert!(result.is_converged());

        // The history records the objective of each accepted iterate. It
        // may rise only where momentum overshot and triggered a restart;
        // everywhere else the backtracked projected gradient step must
        // descend.
        let stats = solver.last_stats();
        let history = stats.objective_history.as_ref().unwrap();
        assert!(history.len() >= 2);
        let increases = history
            .windows(2)
            .filter(|pair| pair[1] > pair[0] + 1e-10)
            .count();
        assert!(increases <= stats.restarts);
        assert!(history.last().unwrap() < history.first().unwrap());
    }

    #[test]
    fn test_solver_swappable_through_trait_object() {
        let descriptor = interior_problem();
        let mut solver: Box<dyn ConeSolver> = Box::new(ApgdSolver::default());

        let result = solver.solve(&descriptor, None).unwrap();

        assert!(result.is_converged());
        assert_relative_eq!(result.multipliers[0], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_solution_is_feasible() {
        let set = ConstraintSet::new(vec![
            ConstraintGroup::contact(0.2),
            ConstraintGroup::bilateral(0.0, 1.0),
        ])
        .unwrap();
        let mut operator = DMatrix::identity(4, 4) * 2.0;
        operator[(0, 3)] = 0.5;
        operator[(3, 0)] = 0.5;
        // Pull hard tangentially so the solution sits on the cone surface.
        let rhs = DVector::from_vec(vec![1.0, 10.0, 0.0, 5.0]);
        let descriptor = DenseDescriptor::new(operator, rhs, set).unwrap();

        let mut solver = ApgdSolver::default();
        let result = solver.solve(&descriptor, None).unwrap();

        let gamma = &result.multipliers;
        let tangent = gamma[1].hypot(gamma[2]);
        assert!(gamma[0] >= -1e-12);
        assert!(tangent <= 0.2 * gamma[0] + 1e-8);
        assert!((0.0..=1.0).contains(&gamma[3]));
    }

    #[test]
    fn test_empty_problem() {
        let descriptor = DenseDescriptor::new(
            DMatrix::zeros(0, 0),
            DVector::zeros(0),
            ConstraintSet::empty(),
        )
        .unwrap();

        let mut solver = ApgdSolver::default();
        let result = solver.solve(&descriptor, None).unwrap();

        assert!(result.is_converged());
        assert_eq!(result.iterations_used, 0);
        assert!(result.multipliers.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut solver = ApgdSolver::new(ApgdSolverConfig::default().with_tolerance(-1.0));
        let descriptor = interior_problem();

        let err = solver.solve(&descriptor, None).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_presets() {
        let high = ApgdSolverConfig::high_accuracy();
        assert!(high.max_iterations >= 1000);
        assert!(high.tolerance <= 1e-8);
        assert!(high.validate().is_ok());

        let realtime = ApgdSolverConfig::realtime();
        assert!(realtime.max_iterations <= 200);
        assert!(realtime.validate().is_ok());
    }

    #[test]
    fn test_stats_populated() {
        let mut solver = ApgdSolver::default();
        let descriptor = interior_problem();
        let _ = solver.solve(&descriptor, None).unwrap();

        let stats = solver.last_stats();
        assert_eq!(stats.dimension, 3);
        assert_eq!(stats.num_groups, 1);
        assert!(!stats.used_warm_start);
        assert!(stats.initial_lipschitz > 0.0);
        assert!(stats.final_residual < 1e-6);
        assert!(stats.initial_residual > stats.final_residual);
    }
}
