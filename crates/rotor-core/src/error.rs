//! Error types for rotor-core operations.
//!
//! This module provides a unified error handling system for the quaternion
//! and vector algebra.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Checked component access (index outside the valid range)
//! - Scalar division and inversion (zero divisor or zero norm)
//! - Rotation construction (zero-length axis)
//! - Rotation transforms (non-unit quaternion)
//!
//! Wrong-type arguments and unsupported operand combinations have no runtime
//! variant: operand dispatch is resolved by the type system at compile time.
//!
//! # Usage
//!
//! ```rust
//! use rotor_core::{Error, Result};
//!
//! fn component(values: &[f64], i: usize) -> Result<f64> {
//!     values
//!         .get(i)
//!         .copied()
//!         .ok_or(Error::index_out_of_range("Vec3", i, values.len()))
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `rotor-math` - Checked accessors, inversion, rotation transforms

use thiserror::Error;

use crate::UNIT_NORM_TOLERANCE;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during quaternion and vector algebra.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Range errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Division errors**: [`DivisionByZero`](Error::DivisionByZero),
///   [`ZeroAxis`](Error::ZeroAxis)
/// - **Precondition errors**: [`NotUnit`](Error::NotUnit)
#[derive(Debug, Error)]
pub enum Error {
    /// Component index is outside the valid range.
    ///
    /// Returned by checked accessors when `index >= len`. Valid component
    /// ranges are `0..3` for vectors and `0..4` for quaternions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_core::Error;
    ///
    /// let err = Error::index_out_of_range("Quat", 4, 4);
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("component index {index} out of range for {kind} with {len} components")]
    IndexOutOfRange {
        /// Type whose component was accessed
        kind: &'static str,
        /// Index that was out of range
        index: usize,
        /// Number of components the type has
        len: usize,
    },

    /// Division where the divisor is zero.
    ///
    /// Returned by checked scalar division when the divisor is zero, and by
    /// inversion or normalization when the squared norm is zero.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Operation in which the zero divisor occurred
        context: &'static str,
    },

    /// Rotation axis has zero length.
    ///
    /// Returned when constructing an axis-angle rotation from the zero
    /// vector, which has no direction to rotate about.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// Quaternion is not a unit quaternion within tolerance.
    ///
    /// Rotation transforms require the squared norm to be within
    /// [`UNIT_NORM_TOLERANCE`](crate::UNIT_NORM_TOLERANCE) of 1. The variant
    /// carries the squared norm that was measured.
    #[error("squared norm {norm2} is not within {tolerance} of 1")]
    NotUnit {
        /// Measured squared norm
        norm2: f64,
        /// Tolerance that was exceeded
        tolerance: f64,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    ///
    /// # Arguments
    ///
    /// * `kind` - Type whose component was accessed (e.g. `"Vec3"`)
    /// * `index` - Index that was accessed
    /// * `len` - Number of components the type has
    #[inline]
    pub fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    /// Creates an [`Error::DivisionByZero`] error.
    #[inline]
    pub fn division_by_zero(context: &'static str) -> Self {
        Self::DivisionByZero { context }
    }

    /// Creates an [`Error::NotUnit`] error for the given squared norm.
    #[inline]
    pub fn not_unit(norm2: f64) -> Self {
        Self::NotUnit {
            norm2,
            tolerance: UNIT_NORM_TOLERANCE,
        }
    }

    /// Returns `true` if this is a range error.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a division-by-zero error, including the
    /// zero-axis case.
    #[inline]
    pub fn is_division_error(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::ZeroAxis)
    }

    /// Returns `true` if this is a violated rotation precondition.
    #[inline]
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, Self::NotUnit { .. })
    }
}
