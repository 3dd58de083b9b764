//! System descriptor: the assembled constrained-dynamics problem.
//!
//! The solver never sees bodies, joints, or contact geometry. It consumes a
//! [`SystemDescriptor`], an immutable snapshot of the problem exposing the
//! linear operators:
//!
//! - `N` - the Schur-complement operator `J * M^-1 * J^T` mapping constraint
//!   multipliers to constraint-space velocities
//! - `r` - the right-hand-side vector assembled from the bias terms
//! - the constraint metadata (group sizes, friction coefficients, bounds)
//!
//! Two concrete descriptors are provided:
//!
//! - [`DenseDescriptor`]: an explicitly formed `N`, convenient for small
//!   problems and tests
//! - [`SchurDescriptor`]: matrix-free application through a sparse
//!   constraint Jacobian and a block-diagonal inverse mass matrix, never
//!   forming `N` densely
//!
//! # Sparsity Pattern
//!
//! For a system with B bodies and a total of n constraint rows, the
//! Jacobian has n rows and `6 * B` columns, with at most 12 non-zeros per
//! row (each constraint couples two bodies). CSR storage keeps the
//! operator application at O(nnz) per solve iteration.

use ccp_types::{CcpError, ConstraintSet, Result};
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Immutable snapshot of an assembled cone-complementarity problem.
///
/// Implementations expose operator application without committing to a
/// storage format. The descriptor is read-only for the duration of a
/// solve; all methods take `&self` and must not mutate hidden state.
pub trait SystemDescriptor {
    /// Total number of scalar constraint components.
    fn dimension(&self) -> usize;

    /// Per-group constraint metadata, in multiplier-vector order.
    fn constraints(&self) -> &ConstraintSet;

    /// The right-hand-side vector `r`.
    fn rhs(&self) -> &DVector<f64>;

    /// Apply the Schur-complement operator: `N * v`.
    fn apply_operator(&self, v: &DVector<f64>) -> DVector<f64>;

    /// Apply the transpose operator: `N^T * v`.
    ///
    /// `N = J * M^-1 * J^T` is symmetric for any physically assembled
    /// problem, so the default forwards to [`apply_operator`]. Override
    /// only for descriptors wrapping a non-symmetric operator.
    ///
    /// [`apply_operator`]: SystemDescriptor::apply_operator
    fn apply_operator_transpose(&self, v: &DVector<f64>) -> DVector<f64> {
        self.apply_operator(v)
    }
}

/// A descriptor holding `N` as an explicit dense matrix.
#[derive(Debug, Clone)]
pub struct DenseDescriptor {
    operator: DMatrix<f64>,
    rhs: DVector<f64>,
    constraints: ConstraintSet,
}

impl DenseDescriptor {
    /// Build a dense descriptor, validating shapes.
    ///
    /// # Errors
    ///
    /// Returns [`CcpError::MalformedDescriptor`] if the operator is not
    /// square or the operator, right-hand side, and constraint set
    /// disagree on dimension.
    pub fn new(
        operator: DMatrix<f64>,
        rhs: DVector<f64>,
        constraints: ConstraintSet,
    ) -> Result<Self> {
        if operator.nrows() != operator.ncols() {
            return Err(CcpError::malformed(format!(
                "operator is {}x{}, expected square",
                operator.nrows(),
                operator.ncols()
            )));
        }
        let n = constraints.dimension();
        if operator.nrows() != n {
            return Err(CcpError::malformed(format!(
                "operator has {} rows but constraint set has {} components",
                operator.nrows(),
                n
            )));
        }
        if rhs.len() != n {
            return Err(CcpError::malformed(format!(
                "right-hand side has {} components but constraint set has {}",
                rhs.len(),
                n
            )));
        }

        Ok(Self {
            operator,
            rhs,
            constraints,
        })
    }

    /// The explicit operator matrix.
    #[must_use]
    pub fn operator(&self) -> &DMatrix<f64> {
        &self.operator
    }
}

impl SystemDescriptor for DenseDescriptor {
    fn dimension(&self) -> usize {
        self.constraints.dimension()
    }

    fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    fn apply_operator(&self, v: &DVector<f64>) -> DVector<f64> {
        &self.operator * v
    }

    fn apply_operator_transpose(&self, v: &DVector<f64>) -> DVector<f64> {
        self.operator.tr_mul(v)
    }
}

/// A matrix-free descriptor applying `N = J * M^-1 * J^T` through its
/// factors.
///
/// The constraint Jacobian is stored in CSR format (optimal for the
/// row-wise products the operator application needs); its transpose is
/// precomputed once at construction so both halves of the sandwich stay
/// O(nnz).
#[derive(Debug, Clone)]
pub struct SchurDescriptor {
    jacobian: CsrMatrix<f64>,
    jacobian_t: CsrMatrix<f64>,
    inv_mass: DMatrix<f64>,
    rhs: DVector<f64>,
    constraints: ConstraintSet,
}

impl SchurDescriptor {
    /// Build a matrix-free descriptor from Jacobian triplets.
    ///
    /// # Arguments
    ///
    /// * `num_coords` - Number of generalized coordinates (columns of `J`)
    /// * `triplets` - `(row, col, value)` Jacobian entries
    /// * `inv_mass` - Generalized inverse mass matrix (`num_coords` square,
    ///   block-diagonal for rigid bodies)
    /// * `rhs` - Right-hand side in constraint space
    /// * `constraints` - Per-group metadata; its dimension fixes the row
    ///   count of `J`
    ///
    /// # Errors
    ///
    /// Returns [`CcpError::MalformedDescriptor`] on any shape mismatch.
    pub fn from_triplets(
        num_coords: usize,
        triplets: &[(usize, usize, f64)],
        inv_mass: DMatrix<f64>,
        rhs: DVector<f64>,
        constraints: ConstraintSet,
    ) -> Result<Self> {
        let num_rows = constraints.dimension();
        if rhs.len() != num_rows {
            return Err(CcpError::malformed(format!(
                "right-hand side has {} components but constraint set has {num_rows}",
                rhs.len()
            )));
        }
        if inv_mass.nrows() != num_coords || inv_mass.ncols() != num_coords {
            return Err(CcpError::malformed(format!(
                "inverse mass is {}x{}, expected {num_coords}x{num_coords}",
                inv_mass.nrows(),
                inv_mass.ncols()
            )));
        }

        let mut coo = CooMatrix::new(num_rows, num_coords);
        for &(row, col, val) in triplets {
            if row >= num_rows || col >= num_coords {
                return Err(CcpError::malformed(format!(
                    "Jacobian entry ({row}, {col}) outside {num_rows}x{num_coords}"
                )));
            }
            if val.abs() > 1e-15 {
                // Skip near-zero values
                coo.push(row, col, val);
            }
        }

        let jacobian = CsrMatrix::from(&coo);
        let jacobian_t = jacobian.transpose();

        Ok(Self {
            jacobian,
            jacobian_t,
            inv_mass,
            rhs,
            constraints,
        })
    }

    /// Number of non-zero Jacobian entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.jacobian.nnz()
    }
}

impl SystemDescriptor for SchurDescriptor {
    fn dimension(&self) -> usize {
        self.constraints.dimension()
    }

    fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    fn apply_operator(&self, v: &DVector<f64>) -> DVector<f64> {
        // J^T * v -> M^-1 * . -> J * .
        let coord_space = &self.jacobian_t * v;
        let accel = &self.inv_mass * &coord_space;
        &self.jacobian * &accel
    }
}
