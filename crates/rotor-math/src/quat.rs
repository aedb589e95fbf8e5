//! Quaternion type for 3D rotations.
//!
//! A quaternion is a sum of four terms
//!
//! ```text
//! Q = w + x*i + y*j + z*k
//! ```
//!
//! where `w`, `x`, `y`, `z` are real and i, j, k are basis units with
//!
//! ```text
//! i*i = -1 , j*j = -1 , k*k = -1
//! i*j =  k , j*k =  i , k*i =  j
//! j*i = -k , k*j = -i , i*k = -j
//! ```
//!
//! A unit quaternion encodes a 3D rotation; [`Quat::from_axis_angle`] builds
//! one and [`Quat::transform`] applies it to a [`Vec3`].
//!
//! # Usage
//!
//! ```rust
//! use rotor_math::{Quat, Vec3};
//! use std::f64::consts::PI;
//!
//! let half_turn = Quat::from_axis_angle(Vec3::Z, PI)?;
//! let v = half_turn.transform(Vec3::new(1.0, 0.0, 0.0))?;
//! assert!((v.x + 1.0).abs() < 1e-12);
//! # Ok::<(), rotor_math::Error>(())
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use rotor_core::{Error, Result, UNIT_NORM_TOLERANCE};

use crate::Vec3;

/// A quaternion with `f64` components: scalar part `w`, imaginary parts
/// `x`, `y`, `z`.
///
/// Immutable value type; every operation returns a new value. Equality is
/// component-wise and exact over all four components.
///
/// Multiplication is the non-commutative Hamilton product. Scalar
/// multiplication and division are separate operator impls; multiplying by
/// anything else is a compile error rather than a runtime one.
///
/// # Example
///
/// ```rust
/// use rotor_math::Quat;
///
/// let p = Quat::new(1.0, 2.0, 3.0, 4.0);
/// let q = Quat::new(2.0, 3.0, 4.0, 5.0);
/// assert_eq!(p * q, Quat::new(-36.0, 6.0, 12.0, 12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Quat {
    /// Scalar part
    pub w: f64,
    /// Coefficient of i
    pub x: f64,
    /// Coefficient of j
    pub y: f64,
    /// Coefficient of k
    pub z: f64,
}

impl Quat {
    /// Zero quaternion (0, 0, 0, 0). Also the `Default` value.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Identity quaternion (1, 0, 0, 0): the rotation that does nothing.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion from four scalars.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion with only a scalar part: `(w, 0, 0, 0)`.
    ///
    /// Embeds a real number into the quaternions.
    #[inline]
    pub const fn from_scalar(w: f64) -> Self {
        Self::new(w, 0.0, 0.0, 0.0)
    }

    /// Creates a pure quaternion from a vector: `(0, v.x, v.y, v.z)`.
    ///
    /// This is the standard embedding used to apply rotations to spatial
    /// vectors; [`vector_part`](Quat::vector_part) goes the other way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_math::{Quat, Vec3};
    ///
    /// let q = Quat::from_vec(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(q, Quat::new(0.0, 2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub const fn from_vec(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Creates the unit quaternion rotating by `angle` radians about `axis`.
    ///
    /// The axis is normalized by its own length first, so it need not be a
    /// unit vector; a zero-length axis has no direction and fails with
    /// [`Error::ZeroAxis`]. The result is
    /// `(cos(angle/2), sin(angle/2) * axis)`, which has norm 1 up to
    /// rounding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_math::{Quat, Vec3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2)?;
    /// assert!(q.is_unit());
    /// # Ok::<(), rotor_math::Error>(())
    /// ```
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Result<Self> {
        let axis = axis.normalize().map_err(|_| Error::ZeroAxis)?;
        let (sin_half, cos_half) = (angle / 2.0).sin_cos();
        Ok(Self::new(
            cos_half,
            sin_half * axis.x,
            sin_half * axis.y,
            sin_half * axis.z,
        ))
    }

    /// Returns the component at `i` (w, x, y, z for 0..4), or
    /// [`Error::IndexOutOfRange`] for `i >= 4`.
    #[inline]
    pub fn get(self, i: usize) -> Result<f64> {
        match i {
            0 => Ok(self.w),
            1 => Ok(self.x),
            2 => Ok(self.y),
            3 => Ok(self.z),
            _ => Err(Error::index_out_of_range("Quat", i, 4)),
        }
    }

    /// The imaginary components as a vector: `(x, y, z)`.
    ///
    /// For a pure quaternion this inverts [`from_vec`](Quat::from_vec); in
    /// general it discards the scalar part.
    #[inline]
    pub const fn vector_part(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared norm: sum of squares of all four components.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Norm (magnitude) of the quaternion.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns true if the squared norm is within
    /// [`UNIT_NORM_TOLERANCE`] of 1, i.e. the quaternion may be used as a
    /// rotation operator.
    #[inline]
    pub fn is_unit(self) -> bool {
        (self.length_squared() - 1.0).abs() <= UNIT_NORM_TOLERANCE
    }

    /// Normalizes the quaternion to unit norm.
    ///
    /// Returns [`Error::DivisionByZero`] for the zero quaternion.
    #[inline]
    pub fn normalize(self) -> Result<Self> {
        let len = self.length();
        if len == 0.0 {
            return Err(Error::division_by_zero("Quat::normalize"));
        }
        Ok(self / len)
    }

    /// The conjugate: `(w, -x, -y, -z)`.
    ///
    /// For any Q, `Q * Q.conjugate()` is the scalar quaternion holding the
    /// squared norm.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// The multiplicative inverse: `conjugate / length_squared`.
    ///
    /// Returns [`Error::DivisionByZero`] for the zero quaternion, whose
    /// squared norm is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_math::Quat;
    ///
    /// let q = Quat::new(0.0, 2.0, 0.0, 0.0);
    /// assert_eq!(q.inverse()?, Quat::new(0.0, -0.5, 0.0, 0.0));
    /// # Ok::<(), rotor_math::Error>(())
    /// ```
    #[inline]
    pub fn inverse(self) -> Result<Self> {
        let norm2 = self.length_squared();
        if norm2 == 0.0 {
            return Err(Error::division_by_zero("Quat::inverse"));
        }
        Ok(self.conjugate() / norm2)
    }

    /// Checked scalar division.
    ///
    /// The `/` operator follows IEEE semantics; this variant fails with
    /// [`Error::DivisionByZero`] instead of producing infinities.
    #[inline]
    pub fn try_div(self, rhs: f64) -> Result<Self> {
        if rhs == 0.0 {
            return Err(Error::division_by_zero("Quat::try_div"));
        }
        Ok(self / rhs)
    }

    /// The Hamilton product of two quaternions.
    ///
    /// Expanding `P * Q` over the basis rules gives the closed form
    ///
    /// ```text
    /// w = pw*qw - px*qx - py*qy - pz*qz
    /// x = pw*qx + px*qw + py*qz - pz*qy
    /// y = pw*qy + py*qw + pz*qx - px*qz
    /// z = pw*qz + pz*qw + px*qy - py*qx
    /// ```
    ///
    /// Non-commutative: `p.hamilton(q)` and `q.hamilton(p)` differ in
    /// general. The `*` operator forwards here.
    #[inline]
    pub fn hamilton(self, q: Self) -> Self {
        let p = self;
        Self::new(
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y + p.y * q.w + p.z * q.x - p.x * q.z,
            p.w * q.z + p.z * q.w + p.x * q.y - p.y * q.x,
        )
    }

    /// Applies the rotation represented by this quaternion to a vector.
    ///
    /// The vector is lifted to a pure quaternion S and the sandwich product
    /// `self * S * self.inverse()` is computed; the result is projected back
    /// through the imaginary components, discarding the scalar part (which
    /// is ~0 for a unit rotation applied to a pure vector).
    ///
    /// Precondition: the quaternion must be a unit quaternion
    /// ([`is_unit`](Quat::is_unit)); otherwise [`Error::NotUnit`] is
    /// returned rather than a silently scaled result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotor_math::{Quat, Vec3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2)?;
    /// let v = q.transform(Vec3::X)?;
    /// assert!((v.y - 1.0).abs() < 1e-12);
    /// # Ok::<(), rotor_math::Error>(())
    /// ```
    pub fn transform(self, v: Vec3) -> Result<Vec3> {
        Ok(self.sandwich(Self::from_vec(v))?.vector_part())
    }

    /// Applies the rotation to a quaternion, returning the full sandwich
    /// product `self * q * self.inverse()` without projection.
    ///
    /// Same [`Error::NotUnit`] precondition as [`transform`](Quat::transform).
    pub fn transform_quat(self, q: Self) -> Result<Self> {
        self.sandwich(q)
    }

    fn sandwich(self, s: Self) -> Result<Self> {
        if !self.is_unit() {
            return Err(Error::not_unit(self.length_squared()));
        }
        Ok(self * s * self.inverse()?)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DQuat.
    ///
    /// glam stores components in `(x, y, z, w)` order; the bridge reorders.
    #[inline]
    pub fn to_glam(self) -> glam::DQuat {
        glam::DQuat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DQuat.
    #[inline]
    pub fn from_glam(q: glam::DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

// Indexing
impl Index<usize> for Quat {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quat index out of bounds: {}", i),
        }
    }
}

// Quat + Quat
impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

// Quat - Quat
impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

// -Quat
impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Quat * Quat (Hamilton product)
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.hamilton(rhs)
    }
}

// Quat * f64
impl Mul<f64> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Quat
impl Mul<Quat> for f64 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

// Quat / f64
impl Div<f64> for Quat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<Vec3> for Quat {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_vec(v)
    }
}

impl From<[f64; 4]> for Quat {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Quat> for [f64; 4] {
    #[inline]
    fn from(q: Quat) -> [f64; 4] {
        [q.w, q.x, q.y, q.z]
    }
}

impl From<glam::DQuat> for Quat {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::DQuat {
    #[inline]
    fn from(q: Quat) -> glam::DQuat {
        q.to_glam()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quat_default_is_zero() {
        assert_eq!(Quat::default(), Quat::ZERO);
        assert_eq!(Quat::ZERO.length(), 0.0);
    }

    #[test]
    fn test_quat_from_scalar() {
        let q = Quat::from_scalar(2.0);
        assert_eq!(q, Quat::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(q.length(), 2.0);
        assert_eq!(Quat::from_scalar(-3.0).length(), 3.0);
    }

    #[test]
    fn test_quat_from_vec() {
        let q = Quat::from_vec(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(q.w, 0.0);
        assert_eq!(q.vector_part(), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(Quat::from(Vec3::X), Quat::new(0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_quat_get() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.get(0).unwrap(), 1.0);
        assert_eq!(q.get(3).unwrap(), 4.0);
        assert!(q.get(4).unwrap_err().is_range_error());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_quat_index_out_of_bounds() {
        let q = Quat::ZERO;
        let _ = q[4];
    }

    #[test]
    fn test_quat_length() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.length_squared(), 30.0);
        assert_eq!(Quat::new(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_quat_add_sub_neg() {
        let p = Quat::new(1.0, 2.0, 3.0, 4.0);
        let q = Quat::new(2.0, 1.2, 0.5, 0.6);
        assert_eq!(p + q, Quat::new(3.0, 3.2, 3.5, 4.6));
        assert_eq!((p + q) - q, p);
        assert_eq!(-p, Quat::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_quat_scalar_mul_div() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, Quat::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!(q / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_quat_try_div() {
        let q = Quat::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(q.try_div(2.0).unwrap(), Quat::new(1.0, 2.0, 3.0, 4.0));
        assert!(q.try_div(0.0).unwrap_err().is_division_error());
    }

    #[test]
    fn test_quat_hamilton_concrete() {
        let p = Quat::new(1.0, 2.0, 3.0, 4.0);
        let q = Quat::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(p * q, Quat::new(-36.0, 6.0, 12.0, 12.0));

        // Scalar quaternions multiply like reals.
        let r = Quat::from_scalar(4.0) * Quat::from_scalar(8.0);
        assert_eq!(r, Quat::from_scalar(32.0));
    }

    #[test]
    fn test_quat_identity() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
    }

    #[test]
    fn test_quat_conjugate() {
        let q = Quat::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(q.conjugate(), Quat::new(2.0, -3.0, -4.0, -5.0));
        assert_eq!(q * q.conjugate(), Quat::from_scalar(q.length_squared()));
        assert_eq!(q.conjugate() * q, Quat::from_scalar(q.length_squared()));
    }

    #[test]
    fn test_quat_inverse() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.inverse().unwrap(), q.conjugate() / q.length_squared());

        assert_eq!(
            Quat::new(0.0, 2.0, 0.0, 0.0).inverse().unwrap(),
            Quat::new(0.0, -0.5, 0.0, 0.0)
        );

        assert!(Quat::ZERO.inverse().unwrap_err().is_division_error());
    }

    #[test]
    fn test_quat_normalize() {
        let q = Quat::new(0.0, 0.0, 3.0, 4.0).normalize().unwrap();
        assert_eq!(q, Quat::new(0.0, 0.0, 0.6, 0.8));
        assert!(Quat::ZERO.normalize().unwrap_err().is_division_error());
    }

    #[test]
    fn test_quat_from_axis_angle() {
        use std::f64::consts::PI;

        let q = Quat::from_axis_angle(Vec3::Y, PI / 3.0).unwrap();
        assert!(q.is_unit());
        assert_eq!(q.x, 0.0);
        assert_eq!(q.z, 0.0);
        assert!((q.w - (PI / 6.0).cos()).abs() < 1e-15);
        assert!((q.y - (PI / 6.0).sin()).abs() < 1e-15);

        // Axis is normalized by its own length first.
        let long_axis = Quat::from_axis_angle(Vec3::new(0.0, 10.0, 0.0), PI / 3.0).unwrap();
        assert_eq!(long_axis, q);

        assert!(matches!(
            Quat::from_axis_angle(Vec3::ZERO, 1.0),
            Err(Error::ZeroAxis)
        ));
    }

    #[test]
    fn test_quat_is_unit() {
        assert!(Quat::IDENTITY.is_unit());
        assert!(!Quat::from_scalar(2.0).is_unit());
        assert!(!Quat::ZERO.is_unit());
    }

    #[test]
    fn test_quat_transform_requires_unit() {
        // Squared norm 4: precondition failure, not a silently scaled result.
        let q = Quat::from_scalar(2.0);
        let err = q.transform(Vec3::X).unwrap_err();
        assert!(err.is_precondition_error());
        assert!(matches!(err, Error::NotUnit { norm2, .. } if norm2 == 4.0));
        assert!(q.transform_quat(Quat::IDENTITY).is_err());
    }

    #[test]
    fn test_quat_transform_quat_unprojected() {
        use std::f64::consts::FRAC_PI_2;

        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2).unwrap();
        let s = Quat::new(5.0, 1.0, 0.0, 0.0);
        let r = q.transform_quat(s).unwrap();

        // The scalar part rides through the sandwich product unchanged.
        assert!((r.w - 5.0).abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quat_display() {
        let s = Quat::new(1.0, -2.0, 3.5, 4.0).to_string();
        assert!(s.contains("1"));
        assert!(s.contains("-2"));
        assert!(s.contains("3.5"));
        assert!(s.contains("4"));
    }

    #[test]
    fn test_quat_glam_roundtrip() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        let g = q.to_glam();
        // glam stores (x, y, z, w)
        assert_eq!(g.x, 2.0);
        assert_eq!(g.w, 1.0);
        assert_eq!(Quat::from_glam(g), q);
    }
}
