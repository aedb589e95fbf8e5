//! # rotor-core
//!
//! Core error types and tolerances for quaternion rotation math.
//!
//! This crate provides the foundational pieces shared by the rotor-rs
//! ecosystem:
//!
//! - [`Error`] / [`Result`] - Unified error handling for all algebra operations
//! - [`UNIT_NORM_TOLERANCE`] - The tolerance under which a quaternion counts
//!   as a unit (rotation) quaternion
//!
//! ## Crate Structure
//!
//! This crate is the foundation of rotor-rs and has no internal dependencies:
//!
//! ```text
//! rotor-core (this crate)
//!    ^
//!    |
//!    +-- rotor-math (vectors, quaternions)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Tolerance on the squared norm of a quaternion used as a rotation operator.
///
/// A quaternion only represents a rotation when its norm is 1. Rotation
/// transforms require `|length_squared() - 1| <= UNIT_NORM_TOLERANCE` and
/// fail with [`Error::NotUnit`] otherwise.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-9;
