// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat3` and `Mat4` homogeneous transformation matrices.

use super::{Quaternion, Vec2, Vec3, Vec4};
use std::ops::{Index, IndexMut, Mul};

// --- Mat3 ---

/// A 3x3 column-major matrix, used for 2D affine transformations.
///
/// Points are transformed as `(x, y, 1)`, vectors as `(x, y, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a 2D translation matrix.
    #[inline]
    pub fn from_translation(v: Vec2) -> Self {
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(v.x(), v.y(), 1.0),
        )
    }

    /// Creates a 2D scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec2) -> Self {
        Self::from_cols(
            Vec3::new(scale.x(), 0.0, 0.0),
            Vec3::new(0.0, scale.y(), 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    /// Creates a counter-clockwise 2D rotation matrix.
    #[inline]
    pub fn from_rotation(angle_radians: f32) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    /// Transforms a 2D vector. Translation is not applied.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        (*self * Vec3::new(v.x(), v.y(), 0.0)).xy()
    }

    /// Transforms a 2D point, including translation.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        (*self * Vec3::new(p.x(), p.y(), 1.0)).xy()
    }
}

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.cols[0] * v.x() + self.cols[1] * v.y() + self.cols[2] * v.z()
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix, used for 3D affine transformations.
///
/// Points are transformed as `(x, y, z, 1)`, vectors as `(x, y, z, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::from_fn(|c| self.cols[c][index])
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = Vec4::from_vec3(v, 1.0);
        m
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x(), 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y(), 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z(), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    #[inline]
    pub fn from_rotation_y(angle_radians: f32) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a rotation matrix from a quaternion.
    /// The quaternion is normalized before conversion.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let q = q.normalize();
        let [x, y, z] = q.vector.into_array();
        let w = q.scalar;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Self::from_cols(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Transforms a 3D vector. Translation is not applied.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(v, 0.0)).truncate()
    }

    /// Transforms a 3D point, including translation. No perspective division is done.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(p, 1.0)).truncate()
    }
}

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self {
            cols: std::array::from_fn(|c| self * rhs.cols[c]),
        }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x() + self.cols[1] * rhs.y() + self.cols[2] * rhs.z() + self.cols[3] * rhs.w()
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq, FRAC_PI_2};

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z())
    }

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y())
    }

    #[test]
    fn test_mat3_point_vs_vector() {
        let m = Mat3::from_translation(Vec2::new(2.0, 3.0)) * Mat3::from_scale(Vec2::new(2.0, 2.0));
        let v = Vec2::new(1.0, 1.0);
        assert!(vec2_approx_eq(m.transform_vector(v), Vec2::new(2.0, 2.0)));
        assert!(vec2_approx_eq(m.transform_point(v), Vec2::new(4.0, 5.0)));
    }

    #[test]
    fn test_mat3_rotation() {
        let m = Mat3::from_rotation(FRAC_PI_2);
        assert!(vec2_approx_eq(
            m.transform_point(Vec2::new(1.0, 0.0)),
            Vec2::new(0.0, 1.0)
        ));
    }

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::IDENTITY * Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(Mat4::IDENTITY.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mat4_point_vs_vector() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(m.transform_vector(v), v);
        assert_eq!(m.transform_point(v), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mat4_from_quat_matches_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.8);
        let from_quat = Mat4::from_quat(q);
        let from_angle = Mat4::from_rotation_y(0.8);
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert!(vec3_approx_eq(
            from_quat.transform_vector(v),
            from_angle.transform_vector(v)
        ));
        assert!(vec3_approx_eq(
            from_quat.transform_vector(v),
            q.transform_vector_normalized(v)
        ));
    }

    #[test]
    fn test_mat4_composition_order() {
        // Scale first, then translate.
        let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 2.0, 2.0));
    }
}
