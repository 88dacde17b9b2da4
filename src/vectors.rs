//! `geom::vectors` submodule implements two- and three-dimensional vectors which represent
//! positions, directions and vertex data.
//!
//! Vectors are immutable value types: every operation returns a new vector.
//!

use crate::{
    floats::{lerp, NearEq},
    matrices::Mat4,
};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::{
    f64::consts::TAU,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

// Macros that implement all common associated functions and methods on vectors could be replaced
// by a trait with default implementations, but that trait would need an associated array length,
// which is impossible to use in signatures until `generic_const_exprs` hits stable. So
// currently all of this is handled by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` function and
/// `From<[f32; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns the dot (a.k.a. scalar) product of two vectors.
            ///
            pub fn dot(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }

            /// Returns the component-wise multiplication of two vectors.
            ///
            pub fn comp_mul(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
            /// Returns the component-wise division of two vectors.
            ///
            pub fn comp_div(self, other: Self) -> Self {
                self.combine(other, |a, b| a / b)
            }

            /// Returns the square of the length (euclidean norm) of a vector.
            ///
            pub fn sq_len(self) -> f32 {
                self.dot(self)
            }
            /// Returns the length (euclidean norm) of a vector.
            ///
            /// Each call computes one square root; prefer [`Self::sq_len`] for comparisons.
            ///
            pub fn len(self) -> f32 {
                self.sq_len().sqrt()
            }
            /// Returns the normalized vector.
            ///
            /// Normalizing a zero vector yields NaN components.
            ///
            pub fn norm(self) -> Self {
                self / self.len()
            }

            /// Returns the square of the euclidean distance between two vectors.
            ///
            pub fn sq_dist(self, other: Self) -> f32 {
                (self - other).sq_len()
            }
            /// Returns the euclidean distance between two vectors.
            ///
            pub fn dist(self, other: Self) -> f32 {
                (self - other).len()
            }

            /// Returns the reflection of the vector given a normal `n`.
            ///
            /// `n` is not normalized by this function.
            ///
            pub fn reflect(self, n: Self) -> Self {
                self - n * (2.0 * self.dot(n))
            }

            /// Returns the linear interpolation between `self` and `other` by amount `t`.
            ///
            /// If `t == 0.0` `self` will be returned; if `t == 1.0` `other` will be returned.
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self.combine(other, |a, b| lerp(a, b, t))
            }

            /// Returns vector that is made from the smallest components of two vectors.
            ///
            /// NaN in either component yields NaN.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| {
                    if a.is_nan() || b.is_nan() {
                        f32::NAN
                    } else {
                        a.min(b)
                    }
                })
            }
            /// Returns vector that is made from the largest components of two vectors.
            ///
            /// NaN in either component yields NaN.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| {
                    if a.is_nan() || b.is_nan() {
                        f32::NAN
                    } else {
                        a.max(b)
                    }
                })
            }
        }
        impl NearEq for $struct {
            /// Compares vectors component-wise with [`EPSILON`](crate::floats::EPSILON) tolerance.
            ///
            fn near_eq(&self, other: &Self) -> bool {
                self.elements().near_eq(&other.elements())
            }
        }
        impl From<$struct> for [f32; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
    };
}

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_scalar_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_scalar_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<f32> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: f32) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
// This could've been integrated in `impl_vector_vector_operations` and
// `impl_vector_scalar_operations` macros but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Neg for $struct_name {
            type Output = Self;

            /// Returns negated vector, same as `self * -1.0`.
            ///
            fn neg(self) -> Self::Output {
                self * -1.0
            }
        }
        impl_vector_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),));
        impl_vector_assignoperations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),));
        impl_vector_scalar_operations!($struct_name, ((Mul, mul, *),
                                                      (Div, div, /),));
        impl_vector_assignoperations!($struct_name, f32, ((MulAssign, mul_assign, *),
                                                          (DivAssign, div_assign, /),));
    };
}

/// [`Vec2`] struct represents a vector with coordinates X and Y in two-dimensional euclidean
/// space.
///
/// # Example
/// ```rust
/// # use geom::vectors::{vec2, Vec2};
/// let v: Vec2 = vec2(3.0, 4.0);
/// assert_eq!(v.len(), 5.0);
/// assert_eq!(v + Vec2::UNIT, vec2(4.0, 5.0));
/// assert_eq!(v.to_string(), "(3, 4)");
/// ```
///
#[repr(C)]
#[derive(Serialize, Deserialize, Pod, Zeroable, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vec2 {
    /// Zero vector (0, 0).
    ///
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Vector (1, 1).
    ///
    pub const UNIT: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    /// X-axis unit vector (1, 0).
    ///
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    /// Y-axis unit vector (0, 1).
    ///
    pub const UNIT_Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    /// Constructs vector from its coordinates.
    ///
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Returns the length that the cross product of `self` and `other` would have in
    /// three-dimensional space (the Z component of the 3D cross product).
    ///
    /// # Example
    /// ```rust
    /// # use geom::vectors::vec2;
    /// assert_eq!(vec2(-3.0, 2.0).cross_len(vec2(1.0, 2.0)), -8.0);
    /// ```
    ///
    pub fn cross_len(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the counterclockwise angle of the vector with the x axis in radians.
    ///
    /// The result is in the interval [0; 2 * PI).
    ///
    pub fn angle(self) -> f32 {
        let mut angle: f64 = f64::from(self.y).atan2(f64::from(self.x));
        if angle < 0.0 {
            angle += TAU;
        }
        angle as f32
    }

    /// Returns [`Vec3`] based on this vector with the additional coordinate `z`.
    ///
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z,
        }
    }

    /// Applies matrix `m` to the vector as to a row vector `(x, y, 0, 1)`.
    ///
    /// Translation row of `m` is added, W component is not divided out.
    ///
    /// # Example
    /// ```rust
    /// # use geom::prelude::*;
    /// let mut m: Mat4 = Mat4::IDENTITY;
    /// let _ = m.set_translate(m, vec3(2.5, 3.0, 0.0));
    /// assert_eq!(vec2(1.0, 2.0).transform(&m), vec2(3.5, 5.0));
    /// ```
    ///
    pub fn transform(self, m: &Mat4) -> Self {
        Vec2 {
            x: self.x * m[0][0] + self.y * m[1][0] + m[3][0],
            y: self.x * m[0][1] + self.y * m[1][1] + m[3][1],
        }
    }
}
impl_vector!(Vec2, 2);
impl_vector_operations!(Vec2);
impl From<[f32; 2]> for Vec2 {
    fn from(arr: [f32; 2]) -> Self {
        Vec2 {
            x: arr[0],
            y: arr[1],
        }
    }
}
impl From<Vec3> for Vec2 {
    /// Drops Z coordinate.
    ///
    fn from(vector: Vec3) -> Self {
        Vec2 {
            x: vector.x,
            y: vector.y,
        }
    }
}
impl fmt::Display for Vec2 {
    /// Formats vector like `(3.25, -1.5)`.
    ///
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
/// Shorthand for writing `Vec2 { x, y }`.
///
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// [`Vec3`] struct represents a vector with coordinates X, Y and Z in three-dimensional
/// euclidean space.
///
/// # Example
/// ```rust
/// # use geom::vectors::{vec3, Vec3};
/// assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
/// assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
/// ```
///
#[repr(C)]
#[derive(Serialize, Deserialize, Pod, Zeroable, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component of vector.
    ///
    pub x: f32,
    /// Y component of vector.
    ///
    pub y: f32,
    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vec3 {
    /// Zero vector (0, 0, 0).
    ///
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// Vector (1, 1, 1).
    ///
    pub const UNIT: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    /// X-axis unit vector (1, 0, 0).
    ///
    pub const UNIT_X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// Y-axis unit vector (0, 1, 0).
    ///
    pub const UNIT_Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// Z-axis unit vector (0, 0, 1).
    ///
    pub const UNIT_Z: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Constructs vector from its coordinates.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the right-handed cross product of two vectors.
    ///
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Applies matrix `m` to the vector as to a row vector `(x, y, z, 1)`.
    ///
    /// Translation row of `m` is added, W component is not divided out, so projection
    /// matrices need a manual perspective divide.
    ///
    pub fn transform(self, m: &Mat4) -> Self {
        Vec3 {
            x: self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0] + m[3][0],
            y: self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1] + m[3][1],
            z: self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2] + m[3][2],
        }
    }
}
impl_vector!(Vec3, 3);
impl_vector_operations!(Vec3);
impl From<[f32; 3]> for Vec3 {
    fn from(arr: [f32; 3]) -> Self {
        Vec3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
impl fmt::Display for Vec3 {
    /// Formats vector like `(3.25, -1.5, 1.2)`.
    ///
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
/// Shorthand for writing `Vec3 { x, y, z }`.
///
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::{vec2, vec3, Vec2, Vec3};
    use crate::{
        floats::{NearEq, EPSILON},
        matrices::Mat4,
    };
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn vec2_display() {
        assert_eq!(vec2(-2.3, 1.1).to_string(), "(-2.3, 1.1)");
        assert_eq!(vec2(2.0, 1.0).to_string(), "(2, 1)");
        assert_eq!(vec2(0.5, 2.0).to_string(), "(0.5, 2)");
        assert_eq!(vec2(1.414_213, -34.0213).to_string(), "(1.414213, -34.0213)");
        // No exponent form, neither for large nor for small magnitudes.
        assert_eq!(
            vec2(1e21, 1e-7).to_string(),
            "(1000000000000000000000, 0.0000001)"
        );
    }

    #[test]
    fn vec2_near_eq() {
        assert!(vec2(4.0, 1.0).near_eq(&vec2(4.0, 1.0)));
        assert!(vec2(2.34567, -9.87654).near_eq(&vec2(2.345669, -9.876541)));
        assert!(!vec2(4.0, 1.0).near_eq(&vec2(-3.0, 7.0)));
        assert!(!vec2(2.34567, -9.87654).near_eq(&vec2(2.34567, -9.87653)));
        assert!(!vec2(2.34567, -9.87654).near_eq(&vec2(2.34568, -9.87654)));
    }

    #[test]
    fn vec2_arithmetic() {
        assert!((vec2(1.2, 2.3) + vec2(-2.1, 0.5)).near_eq(&vec2(-0.9, 2.8)));
        assert_eq!(Vec2::UNIT_X + Vec2::UNIT_Y, Vec2::UNIT);
        assert!((vec2(1.2, 2.3) - vec2(-2.1, 0.5)).near_eq(&vec2(3.3, 1.8)));
        assert_eq!(vec2(1.4, -2.5) * 0.5, vec2(0.7, -1.25));
        assert_eq!(vec2(2.7, 1.1) * 0.0, Vec2::ZERO);
        assert_eq!(vec2(0.7, -1.25) / 0.5, vec2(1.4, -2.5));
        assert_eq!(-vec2(4.0, 1.0), vec2(-4.0, -1.0));

        let divided: Vec2 = vec2(1.0, -1.0) / 0.0;
        assert_eq!(divided, vec2(f32::INFINITY, f32::NEG_INFINITY));

        let mut v: Vec2 = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        v *= 3.0;
        v -= Vec2::UNIT_X;
        v /= 2.0;
        assert_eq!(v, vec2(2.5, 4.5));

        let sample: Vec2 = vec2(-3.2145, 8.5);
        assert!((sample + -sample).near_eq(&Vec2::ZERO));
    }

    #[test]
    fn vec2_products() {
        assert_eq!(vec2(2.0, 3.0).dot(vec2(4.0, -1.0)), 5.0);
        assert_eq!(vec2(2.0, 3.0).cross_len(vec2(4.0, -1.0)), -14.0);
        assert_eq!(Vec2::UNIT_X.cross_len(Vec2::UNIT_Y), 1.0);
        assert_eq!(vec2(2.0, 3.0).comp_mul(vec2(4.0, -1.0)), vec2(8.0, -3.0));
        assert_eq!(vec2(2.0, 3.0).comp_div(vec2(4.0, -1.0)), vec2(0.5, -3.0));
    }

    #[test]
    fn vec2_lengths() {
        assert_eq!(vec2(3.0, 4.0).sq_len(), 25.0);
        assert_eq!(vec2(3.0, 4.0).len(), 5.0);
        assert_eq!(vec2(1.0, 1.0).sq_dist(vec2(4.0, 5.0)), 25.0);
        assert_eq!(vec2(1.0, 1.0).dist(vec2(4.0, 5.0)), 5.0);

        assert!(vec2(1.0, 1.0)
            .norm()
            .near_eq(&vec2(0.707_106_77, 0.707_106_77)));
        assert_eq!(vec2(3.0, 4.0).norm(), vec2(0.6, 0.8));
        assert_abs_diff_eq!(vec2(-12.5, 7.25).norm().len(), 1.0, epsilon = EPSILON);

        let degenerate: Vec2 = Vec2::ZERO.norm();
        assert!(degenerate.x.is_nan() && degenerate.y.is_nan());
    }

    #[test]
    fn vec2_reflect_lerp() {
        assert!(Vec2::UNIT_X.reflect(Vec2::UNIT_Y).near_eq(&vec2(1.0, 0.0)));
        assert!(Vec2::UNIT.reflect(Vec2::UNIT_Y).near_eq(&vec2(1.0, -1.0)));
        assert!(vec2(-1.5, -3.6).reflect(Vec2::UNIT_Y).near_eq(&vec2(-1.5, 3.6)));
        assert!(vec2(1.0, 0.5)
            .reflect(Vec2::UNIT.norm())
            .near_eq(&vec2(-0.5, -1.0)));

        assert_eq!(Vec2::ZERO.lerp(Vec2::UNIT_X, 0.0), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.lerp(Vec2::UNIT_X, 0.25), vec2(0.25, 0.0));
        assert_eq!(Vec2::ZERO.lerp(Vec2::UNIT_X, 1.0), Vec2::UNIT_X);
        assert_eq!(vec2(2.0, 4.0).lerp(vec2(4.0, 8.0), 1.5), vec2(5.0, 10.0));
    }

    #[test]
    fn vec2_angle() {
        let cases: [(Vec2, f32); 8] = [
            (vec2(1.0, 0.0), 0.0),
            (vec2(1.0, 1.0), PI * 1.0 / 4.0),
            (vec2(0.0, 1.0), PI * 2.0 / 4.0),
            (vec2(-1.0, 1.0), PI * 3.0 / 4.0),
            (vec2(-1.0, 0.0), PI * 4.0 / 4.0),
            (vec2(-1.0, -1.0), PI * 5.0 / 4.0),
            (vec2(0.0, -1.0), PI * 6.0 / 4.0),
            (vec2(1.0, -1.0), PI * 7.0 / 4.0),
        ];
        for (v, angle) in cases {
            assert_abs_diff_eq!(v.angle(), angle, epsilon = EPSILON);
            assert!(v.angle() >= 0.0 && v.angle() < 2.0 * PI);
        }
    }

    #[test]
    fn vec2_min_max() {
        let cases: [(Vec2, Vec2, Vec2, Vec2); 4] = [
            (vec2(2.0, 1.0), vec2(4.0, 3.0), vec2(2.0, 1.0), vec2(4.0, 3.0)),
            (vec2(2.0, 1.0), vec2(4.0, -3.0), vec2(2.0, -3.0), vec2(4.0, 1.0)),
            (vec2(5.0, 3.2), vec2(3.2, 1.4), vec2(3.2, 1.4), vec2(5.0, 3.2)),
            (vec2(0.0, 6.0), vec2(2.0, 3.0), vec2(0.0, 3.0), vec2(2.0, 6.0)),
        ];
        for (v, w, min, max) in cases {
            assert_eq!(v.min(w), min);
            assert_eq!(v.max(w), max);
        }

        let nan: Vec2 = vec2(f32::NAN, 0.0);
        assert!(nan.min(vec2(1.0, 1.0)).x.is_nan());
        assert!(vec2(1.0, 1.0).min(nan).x.is_nan());
        assert!(nan.max(vec2(1.0, 1.0)).x.is_nan());
        assert!(vec2(1.0, 1.0).max(nan).x.is_nan());
        assert_eq!(nan.min(vec2(1.0, 1.0)).y, 0.0);
    }

    #[test]
    fn vec2_transform() {
        let mut rot: Mat4 = Mat4::IDENTITY;
        let _ = rot.set_rot(rot, PI / 2.0, Vec3::UNIT_Z);
        let mut trans: Mat4 = Mat4::IDENTITY;
        let _ = trans.set_translate(trans, vec3(2.5, 3.0, 0.0));
        let mut scale: Mat4 = Mat4::IDENTITY;
        let _ = scale.set_scale(scale, vec3(2.0, 3.0, 0.0));

        assert!(vec2(1.0, 0.0).transform(&rot).near_eq(&vec2(0.0, 1.0)));
        assert!(vec2(1.0, 2.0).transform(&trans).near_eq(&vec2(3.5, 5.0)));
        assert!(vec2(1.5, -3.0).transform(&scale).near_eq(&vec2(3.0, -9.0)));
    }

    #[test]
    fn vec2_conversions() {
        assert_eq!(vec2(0.0, -2.3).extend(3.1), vec3(0.0, -2.3, 3.1));
        assert_eq!(Vec2::from(vec3(-2.5, 3.0, -1.4)), vec2(-2.5, 3.0));
        assert_eq!(Vec2::from([3.0, 4.0]).elements(), [3.0, 4.0]);
        assert_eq!(<[f32; 2]>::from(vec2(3.0, 4.0)), [3.0, 4.0]);
        assert_eq!(vec2(3.0, 4.0).map(|n| n * 2.0), vec2(6.0, 8.0));
    }

    #[test]
    fn vec3_display() {
        assert_eq!(vec3(-2.3, 1.1, 0.0).to_string(), "(-2.3, 1.1, 0)");
        assert_eq!(vec3(2.0, 1.0, -7.5).to_string(), "(2, 1, -7.5)");
    }

    #[test]
    fn vec3_arithmetic() {
        assert!((vec3(4.0, 1.0, 2.0) + vec3(2.0, 5.0, -1.5)).near_eq(&vec3(6.0, 6.0, 0.5)));
        assert!((vec3(1.2, 2.3, 3.4) - vec3(-2.1, 0.5, 1.0)).near_eq(&vec3(3.3, 1.8, 2.4)));
        assert_eq!(vec3(4.0, 1.0, -2.0) * 2.0, vec3(8.0, 2.0, -4.0));
        assert_eq!(vec3(8.0, 2.0, -4.0) / 2.0, vec3(4.0, 1.0, -2.0));
        assert_eq!(-vec3(4.0, -1.0, 0.5), vec3(-4.0, 1.0, -0.5));

        let sample: Vec3 = vec3(12.75, -0.001, 3.3);
        assert!((sample + -sample).near_eq(&Vec3::ZERO));
    }

    #[test]
    fn vec3_products() {
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), vec3(0.0, 0.0, 1.0));
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_X), vec3(0.0, 0.0, -1.0));
        assert_eq!(
            vec3(1.0, 2.0, 3.0).cross(vec3(4.0, 5.0, 6.0)),
            vec3(-3.0, 6.0, -3.0)
        );
        assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(
            vec3(1.0, 2.0, 3.0).comp_mul(vec3(4.0, 5.0, 6.0)),
            vec3(4.0, 10.0, 18.0)
        );
        assert_eq!(
            vec3(4.0, 10.0, 18.0).comp_div(vec3(4.0, 5.0, 6.0)),
            vec3(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn vec3_lengths() {
        assert_eq!(vec3(2.0, 3.0, 6.0).sq_len(), 49.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).len(), 7.0);
        assert_eq!(Vec3::UNIT.dist(vec3(3.0, 4.0, 7.0)), 7.0);
        assert_eq!(Vec3::UNIT.sq_dist(vec3(3.0, 4.0, 7.0)), 49.0);
        assert_abs_diff_eq!(vec3(-3.5, 0.25, 9.0).norm().len(), 1.0, epsilon = EPSILON);
        assert!(Vec3::ZERO.norm().x.is_nan());
    }

    #[test]
    fn vec3_reflect_lerp_min_max() {
        assert!(vec3(2.0, 3.0, 1.0)
            .reflect(Vec3::UNIT_Y)
            .near_eq(&vec3(2.0, -3.0, 1.0)));
        assert!(vec3(1.0, 2.0, 3.0)
            .lerp(vec3(3.0, 6.0, -1.0), 0.5)
            .near_eq(&vec3(2.0, 4.0, 1.0)));

        let (v, w): (Vec3, Vec3) = (vec3(2.0, -1.0, 5.0), vec3(4.0, -3.0, 5.5));
        assert_eq!(v.min(w), vec3(2.0, -3.0, 5.0));
        assert_eq!(v.max(w), vec3(4.0, -1.0, 5.5));

        let nan: Vec3 = vec3(0.0, 0.0, f32::NAN);
        assert!(nan.min(Vec3::UNIT).z.is_nan());
        assert!(Vec3::UNIT.min(nan).z.is_nan());
        assert!(nan.max(Vec3::UNIT).z.is_nan());
        assert!(Vec3::UNIT.max(nan).z.is_nan());
        assert_eq!(Vec3::UNIT.max(nan).x, 1.0);
    }

    #[test]
    fn vec3_transform() {
        let mut rot: Mat4 = Mat4::IDENTITY;
        let _ = rot.set_rot(rot, PI / 2.0, Vec3::UNIT_Z);
        let mut trans: Mat4 = Mat4::IDENTITY;
        let _ = trans.set_translate(trans, vec3(2.5, 3.0, -1.0));
        let mut scale: Mat4 = Mat4::IDENTITY;
        let _ = scale.set_scale(scale, vec3(2.0, 3.0, -4.0));

        assert!(vec3(1.0, 0.0, 2.0)
            .transform(&rot)
            .near_eq(&vec3(0.0, 1.0, 2.0)));
        assert!(vec3(1.0, 2.0, 3.0)
            .transform(&trans)
            .near_eq(&vec3(3.5, 5.0, 2.0)));
        assert!(vec3(1.5, -3.0, -1.0)
            .transform(&scale)
            .near_eq(&vec3(3.0, -9.0, 4.0)));
    }
}
