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

//! Transforming vectors and points in bulk.
//!
//! A *vector* (a normal, a tangent, a direction) is only rotated and scaled.
//! A *point* (a vertex position) additionally receives the translation.
//!
//! ```
//! use prism_math::{Mat4, Vec3};
//! use prism_mesh::{transform_points, transform_vectors};
//!
//! let move_up = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
//!
//! let positions = transform_points(&move_up, vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]);
//! assert_eq!(positions[1], Vec3::new(1.0, 1.0, 0.0));
//!
//! let normals = transform_vectors(&move_up, [Vec3::new(0.0, 0.0, 1.0)]);
//! assert_eq!(normals[0], Vec3::new(0.0, 0.0, 1.0));
//! ```

use prism_math::{
    Complex, DualComplex, DualQuaternion, Mat3, Mat4, Quaternion, Vec2, Vec3,
};

/// A transformation that can be applied to direction vectors.
pub trait VectorTransform<V> {
    /// Transforms `vector`, ignoring any translation.
    fn transform_vector(&self, vector: V) -> V;
}

/// A transformation that can be applied to positions.
pub trait PointTransform<V> {
    /// Transforms `point`, including translation.
    fn transform_point(&self, point: V) -> V;
}

// --- Implementations ---

impl VectorTransform<Vec3> for Quaternion {
    /// The quaternion is expected to be normalized.
    #[inline]
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector_normalized(vector)
    }
}

impl VectorTransform<Vec2> for Complex {
    #[inline]
    fn transform_vector(&self, vector: Vec2) -> Vec2 {
        Complex::transform_vector(self, vector)
    }
}

impl VectorTransform<Vec3> for DualQuaternion {
    /// Only the rotation part applies; the translation is ignored. The
    /// rotation part is expected to be normalized.
    #[inline]
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector_normalized(vector)
    }
}

impl PointTransform<Vec3> for DualQuaternion {
    /// The rotation part is expected to be normalized.
    #[inline]
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point_normalized(point)
    }
}

impl VectorTransform<Vec2> for DualComplex {
    /// Only the rotation part applies; the translation is ignored.
    #[inline]
    fn transform_vector(&self, vector: Vec2) -> Vec2 {
        DualComplex::transform_vector(self, vector)
    }
}

impl PointTransform<Vec2> for DualComplex {
    /// Rotates, then translates.
    #[inline]
    fn transform_point(&self, point: Vec2) -> Vec2 {
        DualComplex::transform_point(self, point)
    }
}

impl VectorTransform<Vec2> for Mat3 {
    #[inline]
    fn transform_vector(&self, vector: Vec2) -> Vec2 {
        Mat3::transform_vector(self, vector)
    }
}

impl PointTransform<Vec2> for Mat3 {
    #[inline]
    fn transform_point(&self, point: Vec2) -> Vec2 {
        Mat3::transform_point(self, point)
    }
}

impl VectorTransform<Vec3> for Mat4 {
    #[inline]
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        Mat4::transform_vector(self, vector)
    }
}

impl PointTransform<Vec3> for Mat4 {
    #[inline]
    fn transform_point(&self, point: Vec3) -> Vec3 {
        Mat4::transform_point(self, point)
    }
}

// --- Bulk operations ---

/// Transforms every vector yielded by `vectors` in place.
pub fn transform_vectors_in_place<'a, T, V, I>(transformation: &T, vectors: I)
where
    T: VectorTransform<V> + ?Sized,
    V: Copy + 'a,
    I: IntoIterator<Item = &'a mut V>,
{
    let mut count = 0usize;
    for vector in vectors {
        *vector = transformation.transform_vector(*vector);
        count += 1;
    }
    log::trace!("Transformed {count} vectors in place.");
}

/// Transforms a collection of vectors and returns it.
pub fn transform_vectors<T, V, C>(transformation: &T, mut vectors: C) -> C
where
    T: VectorTransform<V> + ?Sized,
    V: Copy,
    for<'a> &'a mut C: IntoIterator<Item = &'a mut V>,
{
    transform_vectors_in_place(transformation, &mut vectors);
    vectors
}

/// Transforms every point yielded by `points` in place.
pub fn transform_points_in_place<'a, T, V, I>(transformation: &T, points: I)
where
    T: PointTransform<V> + ?Sized,
    V: Copy + 'a,
    I: IntoIterator<Item = &'a mut V>,
{
    let mut count = 0usize;
    for point in points {
        *point = transformation.transform_point(*point);
        count += 1;
    }
    log::trace!("Transformed {count} points in place.");
}

/// Transforms a collection of points and returns it.
pub fn transform_points<T, V, C>(transformation: &T, mut points: C) -> C
where
    T: PointTransform<V> + ?Sized,
    V: Copy,
    for<'a> &'a mut C: IntoIterator<Item = &'a mut V>,
{
    transform_points_in_place(transformation, &mut points);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prism_math::FRAC_PI_2;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        for i in 0..3 {
            assert_relative_eq!(a[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_quaternion_vectors() {
        let rotation = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let mut normals = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        transform_vectors_in_place(&rotation, &mut normals);
        assert_vec3_eq(normals[0], Vec3::new(0.0, 1.0, 0.0));
        assert_vec3_eq(normals[1], Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_in_place_over_iterator() {
        // Only every other element is touched.
        let shift = DualComplex::from_translation(Vec2::new(1.0, 1.0));
        let mut points = vec![Vec2::ZERO; 4];
        transform_points_in_place(&shift, points.iter_mut().step_by(2));
        assert_eq!(
            points,
            vec![Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::ZERO]
        );
    }

    #[test]
    fn test_dual_forms_ignore_translation_for_vectors() {
        let dc = DualComplex::from_translation(Vec2::new(5.0, -5.0))
            * DualComplex::from_rotation(FRAC_PI_2);
        let vectors = transform_vectors(&dc, [Vec2::new(1.0, 0.0)]);
        assert_relative_eq!(vectors[0].x(), 0.0, epsilon = 1e-5);
        assert_relative_eq!(vectors[0].y(), 1.0, epsilon = 1e-5);

        let dq = DualQuaternion::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let normals = transform_vectors(&dq, vec![Vec3::new(0.0, 0.0, 1.0)]);
        assert_vec3_eq(normals[0], Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_empty_collection() {
        let out: Vec<Vec3> = transform_points(&Mat4::IDENTITY, Vec::new());
        assert!(out.is_empty());
    }
}
