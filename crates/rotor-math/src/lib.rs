//! # rotor-math
//!
//! Quaternion and 3D vector algebra for rotations.
//!
//! This crate provides the mathematical primitives for composing and applying
//! 3D rotations without gimbal lock:
//!
//! - [`Quat`] - Quaternions: the Hamilton product, conjugation, inversion,
//!   axis-angle construction, and rotation transforms
//! - [`Vec3`] - 3D vectors rotated by them
//!
//! # Design
//!
//! Both types are plain `f64` value types: immutable, `Copy`, compared
//! component-wise, with every operation returning a new value. A quaternion
//! acts as a rotation operator only when its norm is 1; transforms check this
//! precondition and fail with [`Error::NotUnit`] instead of returning a
//! silently wrong result.
//!
//! Conversions to and from the [`glam`] `DVec3`/`DQuat` types are provided
//! for interop with the wider ecosystem.
//!
//! # Usage
//!
//! ```rust
//! use rotor_math::{Quat, Vec3};
//!
//! // Quarter turn about the z axis
//! let q = Quat::from_axis_angle(Vec3::Z, std::f64::consts::FRAC_PI_2)?;
//!
//! let v = q.transform(Vec3::X)?;
//! assert!((v.y - 1.0).abs() < 1e-12);
//! # Ok::<(), rotor_math::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`rotor-core`] - Error types and tolerances
//! - [`glam`] - Interop with ecosystem math types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod quat;
mod vec3;

pub use quat::*;
pub use vec3::*;

pub use rotor_core::{Error, Result, UNIT_NORM_TOLERANCE};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rotor_math::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Quat, Vec3};
    pub use rotor_core::{Error, Result, UNIT_NORM_TOLERANCE};
}
