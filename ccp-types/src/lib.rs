//! Core types for cone-complementarity constraint solvers.
//!
//! This crate provides the foundational types shared by the solver stack:
//!
//! - [`ConstraintGroup`] - Tagged variant for one constraint group (a
//!   bilateral bound or a 3-component frictional contact cone)
//! - [`ConstraintSet`] - Ordered group list with component offsets
//! - [`SolveStatus`] - Terminal state of an iterative solve
//! - [`CcpError`] - Error taxonomy for precondition violations
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They carry no solver logic, no operator
//! application, no projection math. They're the common language between:
//!
//! - Iterative solvers (ccp-solver, future strategies)
//! - System descriptors assembled by a time-stepping integrator
//! - Logging and diagnostics tooling
//!
//! # Constraint Grouping
//!
//! A constrained-dynamics problem mixes two kinds of scalar constraint
//! components:
//!
//! - **Bilateral** groups contribute 1 component with box bounds (often
//!   unbounded for joint reactions).
//! - **Contact** groups contribute 3 components: a non-negative normal
//!   impulse plus 2 tangential impulses bounded by the friction cone
//!   `sqrt(u^2 + v^2) <= mu * n`.
//!
//! # Example
//!
//! ```
//! use ccp_types::{ConstraintGroup, ConstraintSet};
//!
//! let set = ConstraintSet::new(vec![
//!     ConstraintGroup::contact(0.5),
//!     ConstraintGroup::unbounded(),
//! ])
//! .unwrap();
//!
//! assert_eq!(set.dimension(), 4); // 3 contact components + 1 bilateral
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod constraint;
mod error;
mod status;

pub use constraint::{ConstraintGroup, ConstraintSet};
pub use error::CcpError;
pub use status::SolveStatus;

/// Result type for solver-stack operations.
pub type Result<T> = std::result::Result<T, CcpError>;
