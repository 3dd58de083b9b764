//! Projection onto the feasible multiplier set.
//!
//! Every constraint group defines a feasible region for its multiplier
//! components:
//!
//! - Bilateral groups: the box `[lower, upper]`
//! - Contact groups: the second-order friction cone
//!   `{(n, u, v) : sqrt(u^2 + v^2) <= mu * n}`
//!
//! # Projection Policy
//!
//! Contact triples use the **Euclidean projection** onto the cone: the
//! closest feasible point in the 2-norm. Outside the cone (and outside
//! its polar), this adjusts the normal component as well as rescaling the
//! tangential pair; a tangential-only rescale would not be a metric
//! projection and is never mixed in. The three cases:
//!
//! 1. Inside the cone - unchanged
//! 2. Inside the polar cone (`mu * sqrt(u^2 + v^2) <= -n`) - zero, the
//!    contact carries no force in tension
//! 3. Otherwise - the closest point on the cone surface, preserving the
//!    tangential direction
//!
//! The projection is idempotent and allocation-free.

use ccp_types::{ConstraintGroup, ConstraintSet};
use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum group count before the parallel sweep pays for itself.
#[cfg(feature = "parallel")]
const MIN_GROUPS_FOR_PARALLEL: usize = 1024;

/// Project a multiplier vector onto the feasible set, in place.
///
/// The vector length must equal `constraints.dimension()`.
pub fn project_constraints(constraints: &ConstraintSet, gamma: &mut DVector<f64>) {
    debug_assert_eq!(gamma.len(), constraints.dimension());

    let data = gamma.as_mut_slice();
    for (offset, group) in constraints.iter() {
        project_group(group, &mut data[offset..offset + group.dof()]);
    }
}

/// Parallel variant of [`project_constraints`].
///
/// Falls back to the serial sweep below [`MIN_GROUPS_FOR_PARALLEL`]
/// groups; the per-group work is tiny and rayon overhead dominates on
/// small problems.
#[cfg(feature = "parallel")]
pub fn project_constraints_parallel(constraints: &ConstraintSet, gamma: &mut DVector<f64>) {
    if constraints.num_groups() < MIN_GROUPS_FOR_PARALLEL {
        project_constraints(constraints, gamma);
        return;
    }

    debug_assert_eq!(gamma.len(), constraints.dimension());

    // Carve the vector into per-group disjoint slices so groups can be
    // projected independently.
    let mut lanes = Vec::with_capacity(constraints.num_groups());
    let mut rest = gamma.as_mut_slice();
    for group in constraints.groups() {
        let (lane, tail) = rest.split_at_mut(group.dof());
        lanes.push(lane);
        rest = tail;
    }

    lanes
        .par_iter_mut()
        .zip(constraints.groups().par_iter())
        .for_each(|(lane, group)| project_group(group, lane));
}

/// Project one group's components in place.
fn project_group(group: &ConstraintGroup, lane: &mut [f64]) {
    match *group {
        ConstraintGroup::Bilateral { lower, upper } => {
            lane[0] = lane[0].clamp(lower, upper);
        }
        ConstraintGroup::Contact { friction } => {
            project_cone(friction, lane);
        }
    }
}

/// Euclidean projection of `(n, u, v)` onto the friction cone.
fn project_cone(friction: f64, lane: &mut [f64]) {
    let n = lane[0];
    let tangent = lane[1].hypot(lane[2]);

    // Frictionless cone degenerates to the non-negative normal ray.
    if friction == 0.0 {
        lane[0] = n.max(0.0);
        lane[1] = 0.0;
        lane[2] = 0.0;
        return;
    }

    if tangent <= friction * n {
        // Inside the cone.
        return;
    }

    if friction * tangent <= -n {
        // Inside the polar cone: nearest feasible point is the apex.
        lane[0] = 0.0;
        lane[1] = 0.0;
        lane[2] = 0.0;
        return;
    }

    // Closest point on the cone surface. The tangential direction is
    // preserved; the normal is pulled up onto the cone.
    let projected_n = (friction * tangent + n) / (friction * friction + 1.0);
    let scale = friction * projected_n / tangent;
    lane[0] = projected_n;
    lane[1] *= scale;
    lane[2] *= scale;
}
