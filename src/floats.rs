//! `geom::floats` submodule implements several consts, functions and traits that help in
//! work with `f32` type.
//!
//! [`near_eq`] function, [`NearEq`] trait and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`lerp`], [`det2x2`], [`deg`] and [`rad`] are standalone scalar helpers.
//!

use std::f64::consts::PI;

/// Constant that is used in floating point equality.
///
/// It represents absolute difference that is allowed for two `f32` values to still be considered
/// equal. Every near-equality comparison in `geom` (scalars, vectors and matrices) uses it.
///
pub const EPSILON: f32 = 0.00001;

/// Compares two floating-point numbers for equality within an absolute difference tolerance of
/// `epsilon`.
///
/// This relation is not transitive, except for `epsilon == 0.0`.
///
/// # Example
/// ```rust
/// # use geom::floats::{near_eq, EPSILON};
/// assert!(near_eq(0.15 + 0.15, 0.1 + 0.2, EPSILON));
/// assert!(!near_eq(1.0, 1.0001, EPSILON));
/// ```
///
pub fn near_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Returns the linear interpolation between `a` and `b` by amount `t`.
///
/// The amount `t` is usually a value between 0 and 1. If `t == 0.0` `a` will be returned;
/// if `t == 1.0` `b` will be returned. Values outside of that range extrapolate.
///
/// # Example
/// ```rust
/// # use geom::floats::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
/// ```
///
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Calculates the determinant of a 2x2 matrix:
/// ```text
/// |a b|
/// |c d|
/// ```
///
pub fn det2x2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

/// Radians <-> degrees conversion factor.
///
const DEG_TO_RAD: f32 = (PI / 180.0) as f32;

/// Converts the measurement of an angle from radians to degrees.
///
/// # Example
/// ```rust
/// # use geom::floats::{deg, near_eq, EPSILON};
/// assert!(near_eq(deg(std::f32::consts::PI), 180.0, EPSILON));
/// ```
///
pub fn deg(rad: f32) -> f32 {
    rad / DEG_TO_RAD
}

/// Converts the measurement of an angle from degrees to radians.
///
/// # Example
/// ```rust
/// # use geom::floats::{rad, near_eq, EPSILON};
/// assert!(near_eq(rad(180.0), std::f32::consts::PI, EPSILON));
/// ```
///
pub fn rad(deg: f32) -> f32 {
    deg * DEG_TO_RAD
}

/// [`NearEq`] trait is implemented on every float-based type of `geom`.
///
/// Two values are near-equal if all of their components are near-equal with [`EPSILON`]
/// tolerance. Same as [`near_eq`], this relation is not transitive.
///
pub trait NearEq {
    /// Returns whether `self` and `other` are approximately equal.
    ///
    fn near_eq(&self, other: &Self) -> bool;
}
impl NearEq for f32 {
    /// Compares two floats with [`EPSILON`] tolerance.
    ///
    /// # Example
    /// ```rust
    /// # use geom::floats::NearEq;
    /// assert!(2.345_67_f32.near_eq(&2.345_669));
    /// assert!(!2.345_67_f32.near_eq(&2.345_68));
    /// ```
    ///
    fn near_eq(&self, other: &Self) -> bool {
        near_eq(*self, *other, EPSILON)
    }
}
impl<T: NearEq, const N: usize> NearEq for [T; N] {
    fn near_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.near_eq(b))
    }
}
