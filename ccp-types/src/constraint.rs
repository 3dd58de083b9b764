//! Constraint group metadata.
//!
//! A constrained-dynamics problem is described, on the constraint side, by
//! an ordered list of groups. Each group owns a fixed number of scalar
//! components in the multiplier vector:
//!
//! - [`ConstraintGroup::Bilateral`]: 1 component, box-bounded (joint
//!   reactions are typically unbounded)
//! - [`ConstraintGroup::Contact`]: 3 components (normal + 2 tangential),
//!   feasible inside the second-order friction cone
//!
//! The grouping is represented as a tagged variant rather than a runtime
//! type tag so the projection operator can match on it directly.

use crate::{CcpError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One constraint group: a bilateral bound or a frictional contact cone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintGroup {
    /// A single scalar constraint with box bounds `[lower, upper]`.
    Bilateral {
        /// Lower multiplier bound (`f64::NEG_INFINITY` when unbounded).
        lower: f64,
        /// Upper multiplier bound (`f64::INFINITY` when unbounded).
        upper: f64,
    },
    /// A 3-D frictional contact: normal component plus 2 tangential
    /// components bounded by `sqrt(u^2 + v^2) <= friction * n`.
    Contact {
        /// Coulomb friction coefficient (>= 0).
        friction: f64,
    },
}

impl ConstraintGroup {
    /// Create a bilateral group with the given box bounds.
    #[must_use]
    pub fn bilateral(lower: f64, upper: f64) -> Self {
        Self::Bilateral { lower, upper }
    }

    /// Create an unbounded bilateral group (typical joint reaction).
    #[must_use]
    pub fn unbounded() -> Self {
        Self::Bilateral {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Create a frictional contact group.
    #[must_use]
    pub fn contact(friction: f64) -> Self {
        Self::Contact { friction }
    }

    /// Number of scalar multiplier components this group owns.
    #[must_use]
    pub fn dof(&self) -> usize {
        match self {
            Self::Bilateral { .. } => 1,
            Self::Contact { .. } => 3,
        }
    }

    /// Check whether this group is a frictional contact.
    #[must_use]
    pub fn is_contact(&self) -> bool {
        matches!(self, Self::Contact { .. })
    }

    /// Validate the group's data.
    fn validate(&self, index: usize) -> Result<()> {
        match *self {
            Self::Bilateral { lower, upper } => {
                if lower.is_nan() || upper.is_nan() {
                    return Err(CcpError::InvalidConstraint {
                        index,
                        reason: "bound is NaN".into(),
                    });
                }
                if lower > upper {
                    return Err(CcpError::InvalidConstraint {
                        index,
                        reason: format!("inverted bounds [{lower}, {upper}]"),
                    });
                }
            }
            Self::Contact { friction } => {
                if !friction.is_finite() || friction < 0.0 {
                    return Err(CcpError::InvalidConstraint {
                        index,
                        reason: format!("friction coefficient {friction} must be finite and >= 0"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of constraint groups with precomputed component offsets.
///
/// The multiplier vector of the assembled problem concatenates every
/// group's components in list order; `offset_of(i)` gives the index of
/// group `i`'s first component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintSet {
    groups: Vec<ConstraintGroup>,
    offsets: Vec<usize>,
    dimension: usize,
}

impl ConstraintSet {
    /// Build a constraint set, validating every group.
    ///
    /// # Errors
    ///
    /// Returns [`CcpError::InvalidConstraint`] if a group carries a
    /// negative or non-finite friction coefficient, NaN bounds, or
    /// inverted bounds.
    pub fn new(groups: Vec<ConstraintGroup>) -> Result<Self> {
        let mut offsets = Vec::with_capacity(groups.len());
        let mut dimension = 0;

        for (index, group) in groups.iter().enumerate() {
            group.validate(index)?;
            offsets.push(dimension);
            dimension += group.dof();
        }

        Ok(Self {
            groups,
            offsets,
            dimension,
        })
    }

    /// An empty constraint set (zero-dimensional problem).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            offsets: Vec::new(),
            dimension: 0,
        }
    }

    /// Total number of scalar multiplier components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of constraint groups.
    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the set has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The constraint groups, in multiplier-vector order.
    #[must_use]
    pub fn groups(&self) -> &[ConstraintGroup] {
        &self.groups
    }

    /// Component offset of group `index` in the multiplier vector.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> usize {
        self.offsets[index]
    }

    /// Iterate over `(component_offset, group)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ConstraintGroup)> {
        self.offsets.iter().copied().zip(self.groups.iter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_group_dof() {
        assert_eq!(ConstraintGroup::contact(0.5).dof(), 3);
        assert_eq!(ConstraintGroup::unbounded().dof(), 1);
        assert_eq!(ConstraintGroup::bilateral(-1.0, 1.0).dof(), 1);
    }

    #[test]
    fn test_set_offsets() {
        let set = ConstraintSet::new(vec![
            ConstraintGroup::contact(0.7),
            ConstraintGroup::unbounded(),
            ConstraintGroup::contact(0.3),
        ])
        .unwrap();

        assert_eq!(set.dimension(), 7);
        assert_eq!(set.num_groups(), 3);
        assert_eq!(set.offset_of(0), 0);
        assert_eq!(set.offset_of(1), 3);
        assert_eq!(set.offset_of(2), 4);

        let offsets: Vec<usize> = set.iter().map(|(o, _)| o).collect();
        assert_eq!(offsets, vec![0, 3, 4]);
    }

    #[test]
    fn test_empty_set() {
        let set = ConstraintSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.dimension(), 0);
    }

    #[test]
    fn test_rejects_negative_friction() {
        let err = ConstraintSet::new(vec![ConstraintGroup::contact(-0.1)]).unwrap_err();
        assert!(matches!(err, CcpError::InvalidConstraint { index: 0, .. }));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = ConstraintSet::new(vec![
            ConstraintGroup::contact(0.5),
            ConstraintGroup::bilateral(1.0, -1.0),
        ])
        .unwrap_err();
        assert!(matches!(err, CcpError::InvalidConstraint { index: 1, .. }));
    }

    #[test]
    fn test_rejects_nan_bounds() {
        let err = ConstraintSet::new(vec![ConstraintGroup::bilateral(f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, CcpError::InvalidConstraint { .. }));
    }
}
