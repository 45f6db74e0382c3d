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

use approx::assert_relative_eq;
use prism_math::{
    swizzle, DualComplex, DualQuaternion, Mat3, Mat4, SwizzlePlan, Vec2, Vec3, Vec4, Vector,
    FRAC_PI_2,
};
use prism_mesh::{transform_points, transform_points_in_place, transform_vectors};

fn assert_all_eq<const N: usize>(actual: &[Vector<N, f32>], expected: &[Vector<N, f32>]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        for i in 0..N {
            assert_relative_eq!(a[i], e[i], epsilon = 1e-5);
        }
    }
}

#[test]
fn test_dual_quaternion_points_and_normals() {
    // --- 1. ARRANGE ---
    // Rotate a quad a quarter turn around Z, then move it along X.
    let transformation = DualQuaternion::from_translation(Vec3::new(2.0, 0.0, 0.0))
        * DualQuaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
    let positions = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
    ];
    let normals = vec![Vec3::new(1.0, 0.0, 0.0); 3];

    // --- 2. ACT ---
    let positions = transform_points(&transformation, positions);
    let normals = transform_vectors(&transformation, normals);

    // --- 3. ASSERT ---
    assert_all_eq(
        &positions,
        &[
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, -1.0, 0.0),
        ],
    );
    // Normals are rotated but never translated.
    assert_all_eq(&normals, &[Vec3::new(0.0, 1.0, 0.0); 3]);
}

#[test]
fn test_matrix_and_dual_forms_agree() {
    let angle = 0.4;
    let offset = Vec2::new(-3.0, 0.5);
    let matrix = Mat3::from_translation(offset) * Mat3::from_rotation(angle);
    let dual = DualComplex::from_translation(offset) * DualComplex::from_rotation(angle);

    let points = [Vec2::new(1.0, 2.0), Vec2::new(-4.0, 0.0), Vec2::ZERO];
    assert_all_eq(&transform_points(&matrix, points), &transform_points(&dual, points));
    assert_all_eq(&transform_vectors(&matrix, points), &transform_vectors(&dual, points));
}

#[test]
fn test_interleaved_vertex_positions() -> anyhow::Result<()> {
    // Positions are stored as homogeneous `Vec4`s in the vertex buffer.
    let mut vertices = [Vec4::new(1.0, 2.0, 3.0, 1.0), Vec4::new(-1.0, 0.0, 0.5, 1.0)];
    let to_xyz: SwizzlePlan<4, 3> = "xyz".parse()?;

    let mut positions: Vec<Vec3> = vertices.iter().map(|v| to_xyz.apply(v)).collect();
    transform_points_in_place(&Mat4::from_scale(Vec3::splat(2.0)), positions.iter_mut());
    for (vertex, position) in vertices.iter_mut().zip(&positions) {
        *vertex = Vec4::from_vec3(*position, vertex.w());
    }

    assert_eq!(vertices[0], Vec4::new(2.0, 4.0, 6.0, 1.0));
    assert_eq!(swizzle!(vertices[1], "zyx"), Vec3::new(1.0, 0.0, -2.0));
    Ok(())
}
