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

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{Vec3, EPSILON};
use std::ops::{Add, Mul, Neg, Sub};

/// Represents a quaternion for 3D rotations.
///
/// Stored as a vector part `[x, y, z]` and a scalar part `w`. Rotations are
/// represented by unit quaternions, where `x² + y² + z² + w² = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// The vector (imaginary) part.
    pub vector: Vec3,
    /// The scalar (real) part.
    pub scalar: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        vector: Vec3::ZERO,
        scalar: 1.0,
    };

    /// Creates a new quaternion from its vector and scalar parts.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`from_axis_angle`](Self::from_axis_angle).
    #[inline]
    pub const fn new(vector: Vec3, scalar: f32) -> Self {
        Self { vector, scalar }
    }

    /// Creates a quaternion representing a rotation around `axis` by `angle_radians`.
    ///
    /// The axis is normalized before use.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let (s, c) = (angle_radians * 0.5).sin_cos();
        Self {
            vector: axis.normalize() * s,
            scalar: c,
        }
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.vector.dot(other.vector) + self.scalar * other.scalar
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Whether the quaternion has unit length, within [`EPSILON`] tolerance.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - 1.0).abs() < EPSILON * 10.0
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion has a near-zero magnitude, it returns the identity quaternion.
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::IDENTITY
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.vector, self.scalar)
    }

    /// Computes the inverse of the quaternion.
    /// For a unit quaternion, the inverse is equal to its conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON {
            self.conjugate() * (1.0 / len_sq)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotates a vector by this quaternion, which is expected to be normalized.
    ///
    /// Uses `2(u·v)u + (s² - u·u)v + 2s(u × v)`, avoiding the full sandwich product.
    #[inline]
    pub fn transform_vector_normalized(&self, v: Vec3) -> Vec3 {
        debug_assert!(
            self.is_normalized(),
            "Quaternion::transform_vector_normalized(): quaternion is not normalized"
        );
        let u = self.vector;
        let s = self.scalar;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    /// Rotates a vector by this quaternion, normalizing it first.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.normalize().transform_vector_normalized(v)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product: `self * rhs`
    /// applies `rhs` first.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            vector: rhs.vector * self.scalar
                + self.vector * rhs.scalar
                + self.vector.cross(rhs.vector),
            scalar: self.scalar * rhs.scalar - self.vector.dot(rhs.vector),
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(self.vector * scalar, self.scalar * scalar)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.vector + rhs.vector, self.scalar + rhs.scalar)
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.vector - rhs.vector, self.scalar - rhs.scalar)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.vector, -self.scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x(), b.x(), epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.y(), b.y(), epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.z(), b.z(), epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_identity() {
        let q = Quaternion::IDENTITY;
        assert_relative_eq!(q.length(), 1.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(q.transform_vector_normalized(v), v);
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 2.0, 0.0), PI);
        assert!(q.is_normalized());
        assert_vec3_eq(q.vector, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(q.scalar, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_vector() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let rotated = q.transform_vector_normalized(Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(rotated, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_composition_order() {
        let rot_x = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        let rot_z = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let v = Vec3::new(0.0, 1.0, 0.0);

        // `rot_z * rot_x` applies rot_x first.
        let combined = (rot_z * rot_x).transform_vector_normalized(v);
        let sequential = rot_z.transform_vector_normalized(rot_x.transform_vector_normalized(v));
        assert_vec3_eq(combined, sequential);
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7);
        let product = q * q.inverse();
        assert_vec3_eq(product.vector, Vec3::ZERO);
        assert_relative_eq!(product.scalar, 1.0, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_normalize_degenerate() {
        let q = Quaternion::new(Vec3::ZERO, 0.0);
        assert_eq!(q.normalize(), Quaternion::IDENTITY);
    }
}
