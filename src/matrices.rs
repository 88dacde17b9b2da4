//! `geom::matrices` submodule implements 4x4 matrices which are used to build camera,
//! projection and transform matrices.
//!
//! # Layout
//! [`Mat4`] is stored row-major and is indexed as `m[row][column]`. Vectors are treated as row
//! vectors (`v' = v * M`), so translation lives in the last row and a chain of transforms reads
//! left-to-right in application order.
//!
//! # Compute-into operations
//! Unlike vectors, matrices are modified in place: every `set_*` function overwrites all 16
//! elements of `self` and returns `&mut Self`. Source matrices are taken by value, so the
//! destination may be one of the sources:
//! ```rust
//! # use geom::prelude::*;
//! let mut m: Mat4 = Mat4::IDENTITY;
//! let _ = m.set_translate(m, vec3(1.0, 2.0, 3.0));
//! let _ = m.set_mul(m, m);
//! assert_eq!(m[3], [2.0, 4.0, 6.0, 1.0]);
//! ```
//!

use crate::{floats::NearEq, vectors::Vec3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Mul};

/// [`Mat4`] struct represents 4x4 matrix of `f32` values.
///
/// Default value is the zero matrix.
///
/// # Example
/// ```rust
/// # use geom::matrices::Mat4;
/// let mut a: Mat4 = Mat4::ZERO;
/// let b: Mat4 = Mat4::from([
///     [0.0, 1.0, 2.3, 3.0],
///     [4.0, 0.5, 6.0, 7.0],
///     [8.0, -9.0, 10.0, 11.0],
///     [12.0, 13.0, 14.0, 15.0],
/// ]);
///
/// a = b;
/// a[2][3] = 5.0;
///
/// // Multiply a and b, store the result in a.
/// let _ = a.set_mul(a, b);
/// ```
///
#[repr(transparent)]
#[derive(Serialize, Deserialize, Pod, Zeroable, Copy, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Mat4 {
    /// Underlying array.
    ///
    arr: [[f32; 4]; 4],
}
impl Mat4 {
    /// The 4x4 identity matrix.
    ///
    pub const IDENTITY: Mat4 = Mat4 {
        arr: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
    /// The 4x4 zero matrix.
    ///
    pub const ZERO: Mat4 = Mat4 {
        arr: [[0.0; 4]; 4],
    };

    /// Returns matrix as an array of rows.
    ///
    pub fn as_array(&self) -> [[f32; 4]; 4] {
        self.arr
    }

    /// Returns matrix elements as a flat array in row-major order.
    ///
    /// Returned reference points to the matrix storage itself, nothing is copied.
    ///
    /// # Example
    /// ```rust
    /// # use geom::matrices::Mat4;
    /// assert_eq!(
    ///     Mat4::IDENTITY.floats(),
    ///     &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    /// );
    /// ```
    ///
    pub fn floats(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.arr)
    }
    /// Returns mutable flat view of the matrix elements in row-major order.
    ///
    /// Changing an element of this array changes the matrix and vice versa.
    ///
    /// # Example
    /// ```rust
    /// # use geom::matrices::Mat4;
    /// let mut m: Mat4 = Mat4::ZERO;
    /// m.floats_mut()[6] = 99.0;
    /// assert_eq!(m[1][2], 99.0);
    /// ```
    ///
    pub fn floats_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(&mut self.arr)
    }

    /// Sets matrix to be the identity matrix.
    ///
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Mat4::IDENTITY;
        self
    }
    /// Sets matrix to be the zero matrix.
    ///
    pub fn set_zero(&mut self) -> &mut Self {
        *self = Mat4::ZERO;
        self
    }

    /// Calculates the determinant of the matrix.
    ///
    /// Uses fully expanded cofactor formula.
    ///
    /// # Example
    /// ```rust
    /// # use geom::matrices::Mat4;
    /// assert_eq!(Mat4::IDENTITY.det(), 1.0);
    /// assert_eq!(Mat4::ZERO.det(), 0.0);
    /// ```
    ///
    pub fn det(&self) -> f32 {
        let m: &[[f32; 4]; 4] = &self.arr;
        m[0][3] * m[1][2] * m[2][1] * m[3][0] - m[0][2] * m[1][3] * m[2][1] * m[3][0]
            - m[0][3] * m[1][1] * m[2][2] * m[3][0]
            + m[0][1] * m[1][3] * m[2][2] * m[3][0]
            + m[0][2] * m[1][1] * m[2][3] * m[3][0]
            - m[0][1] * m[1][2] * m[2][3] * m[3][0]
            - m[0][3] * m[1][2] * m[2][0] * m[3][1]
            + m[0][2] * m[1][3] * m[2][0] * m[3][1]
            + m[0][3] * m[1][0] * m[2][2] * m[3][1]
            - m[0][0] * m[1][3] * m[2][2] * m[3][1]
            - m[0][2] * m[1][0] * m[2][3] * m[3][1]
            + m[0][0] * m[1][2] * m[2][3] * m[3][1]
            + m[0][3] * m[1][1] * m[2][0] * m[3][2]
            - m[0][1] * m[1][3] * m[2][0] * m[3][2]
            - m[0][3] * m[1][0] * m[2][1] * m[3][2]
            + m[0][0] * m[1][3] * m[2][1] * m[3][2]
            + m[0][1] * m[1][0] * m[2][3] * m[3][2]
            - m[0][0] * m[1][1] * m[2][3] * m[3][2]
            - m[0][2] * m[1][1] * m[2][0] * m[3][3]
            + m[0][1] * m[1][2] * m[2][0] * m[3][3]
            + m[0][2] * m[1][0] * m[2][1] * m[3][3]
            - m[0][0] * m[1][2] * m[2][1] * m[3][3]
            - m[0][1] * m[1][0] * m[2][2] * m[3][3]
            + m[0][0] * m[1][1] * m[2][2] * m[3][3]
    }

    /// Sets matrix to the matrix product `a * b`.
    ///
    pub fn set_mul(&mut self, a: Mat4, b: Mat4) -> &mut Self {
        let mut arr: [[f32; 4]; 4] = [[0.0; 4]; 4];
        for (r, row) in arr.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem =
                    a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c] + a[r][3] * b[3][c];
            }
        }
        self.arr = arr;
        self
    }

    /// Sets matrix to be an orthographic projection matrix with the given clipping planes.
    ///
    /// # Example
    /// ```rust
    /// # use geom::matrices::Mat4;
    /// let mut m: Mat4 = Mat4::ZERO;
    /// let _ = m.set_ortho(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0);
    /// assert_eq!(m, Mat4::IDENTITY);
    /// ```
    ///
    pub fn set_ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        let (dx, dy, dz): (f32, f32, f32) = (left - right, bottom - top, near - far);
        self.arr = [
            [-2.0 / dx, 0.0, 0.0, 0.0],
            [0.0, -2.0 / dy, 0.0, 0.0],
            [0.0, 0.0, 2.0 / dz, 0.0],
            [(left + right) / dx, (top + bottom) / dy, (far + near) / dz, 1.0],
        ];
        self
    }

    /// Sets matrix to be a perspective frustum matrix with the given clipping planes.
    ///
    pub fn set_frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        let (dx, dy, dz): (f32, f32, f32) = (right - left, top - bottom, near - far);
        self.arr = [
            [(2.0 * near) / dx, 0.0, 0.0, 0.0],
            [0.0, (2.0 * near) / dy, 0.0, 0.0],
            [(left + right) / dx, (top + bottom) / dy, (far + near) / dz, -1.0],
            [0.0, 0.0, (2.0 * far * near) / dz, 0.0],
        ];
        self
    }

    /// Sets matrix to be a perspective projection matrix.
    ///
    /// `fovy` is the vertical field of view in radians.
    ///
    pub fn set_perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> &mut Self {
        let f: f32 = 1.0 / (f64::from(fovy / 2.0).tan() as f32);
        let dz: f32 = near - far;
        self.arr = [
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / dz, -1.0],
            [0.0, 0.0, (2.0 * far * near) / dz, 0.0],
        ];
        self
    }

    /// Sets matrix to be a viewing matrix given an eye point, a reference point indicating the
    /// center of the scene and an up vector.
    ///
    /// If `up` is parallel to the viewing direction, the basis degenerates and the matrix is
    /// filled with NaN.
    ///
    pub fn set_look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) -> &mut Self {
        let vz: Vec3 = (eye - center).norm();
        let vx: Vec3 = up.cross(vz).norm();
        let vy: Vec3 = vz.cross(vx);
        self.arr = [
            [vx.x, vy.x, vz.x, 0.0],
            [vx.y, vy.y, vz.y, 0.0],
            [vx.z, vy.z, vz.z, 0.0],
            [-vx.dot(eye), -vy.dot(eye), -vz.dot(eye), 1.0],
        ];
        self
    }

    /// Sets matrix to `a` with rotation by `angle` radians around `axis` applied first.
    ///
    /// The axis is normalized before use. The result equals `rotation * a` (not
    /// `a * rotation`), so a point transformed by it is rotated and then transformed by `a`,
    /// and the translation row of `a` is kept unchanged.
    ///
    /// # Example
    /// ```rust
    /// # use geom::prelude::*;
    /// let mut m: Mat4 = Mat4::IDENTITY;
    /// let _ = m.set_rot(m, std::f32::consts::FRAC_PI_2, Vec3::UNIT_Z);
    /// assert!(vec3(1.0, 0.0, 0.0).transform(&m).near_eq(&vec3(0.0, 1.0, 0.0)));
    /// ```
    ///
    pub fn set_rot(&mut self, a: Mat4, angle: f32, axis: Vec3) -> &mut Self {
        let Vec3 { x, y, z } = axis.norm();
        let (sin, cos): (f32, f32) = angle.sin_cos();
        let t: f32 = 1.0 - cos;
        let rotation: Mat4 = Mat4::from([
            [t * x * x + cos, t * x * y + z * sin, t * x * z - y * sin, 0.0],
            [t * x * y - z * sin, t * y * y + cos, t * y * z + x * sin, 0.0],
            [t * x * z + y * sin, t * y * z - x * sin, t * z * z + cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        self.set_mul(rotation, a)
    }

    /// Sets matrix to the transpose of `a`.
    ///
    pub fn set_transpose(&mut self, a: Mat4) -> &mut Self {
        for (r, row) in self.arr.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = a[c][r];
            }
        }
        self
    }

    /// Sets matrix to `a` scaled by the components of `v`.
    ///
    /// Rows 0, 1 and 2 carry the X, Y and Z basis vectors and are multiplied by `v.x`, `v.y`
    /// and `v.z` respectively; the translation row is copied unchanged.
    ///
    pub fn set_scale(&mut self, a: Mat4, v: Vec3) -> &mut Self {
        self.arr = [
            a[0].map(|elem| elem * v.x),
            a[1].map(|elem| elem * v.y),
            a[2].map(|elem| elem * v.z),
            a[3],
        ];
        self
    }

    /// Sets matrix to `a` with translation by `v` applied first.
    ///
    /// Rows 0, 1 and 2 are copied, the translation row becomes
    /// `a[0] * v.x + a[1] * v.y + a[2] * v.z + a[3]`.
    ///
    pub fn set_translate(&mut self, a: Mat4, v: Vec3) -> &mut Self {
        let mut translation: [f32; 4] = [0.0; 4];
        for (c, elem) in translation.iter_mut().enumerate() {
            *elem = a[0][c] * v.x + a[1][c] * v.y + a[2][c] * v.z + a[3][c];
        }
        self.arr = [a[0], a[1], a[2], translation];
        self
    }
}
impl NearEq for Mat4 {
    /// Compares matrices element-wise with [`EPSILON`](crate::floats::EPSILON) tolerance.
    ///
    fn near_eq(&self, other: &Self) -> bool {
        self.arr.near_eq(&other.arr)
    }
}
impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}
impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr[index]
    }
}
impl Mul<Self> for Mat4 {
    type Output = Self;

    /// Returns the matrix product `self * rhs`.
    ///
    /// Is equal to `Mat4::ZERO.set_mul(self, rhs)`.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        let mut matrix: Mat4 = Mat4::ZERO;
        let _ = matrix.set_mul(self, rhs);
        matrix
    }
}
impl From<[[f32; 4]; 4]> for Mat4 {
    /// Shorthand for writing `Mat4 { arr: ... }`.
    ///
    fn from(arr: [[f32; 4]; 4]) -> Self {
        Mat4 { arr }
    }
}
impl From<[f32; 16]> for Mat4 {
    /// Builds matrix from elements in row-major order.
    ///
    fn from(floats: [f32; 16]) -> Self {
        Mat4 {
            arr: bytemuck::cast(floats),
        }
    }
}
impl From<Mat4> for [f32; 16] {
    fn from(matrix: Mat4) -> Self {
        *matrix.floats()
    }
}
