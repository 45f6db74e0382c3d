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

//! Rigid (rotation + translation) transformations built on dual numbers.

use serde::{Deserialize, Serialize};

use super::{Complex, Quaternion, Vec2, Vec3};
use std::ops::Mul;

// --- DualQuaternion ---

/// A rigid 3D transformation stored as a dual quaternion `real + ε·dual`.
///
/// `real` is the rotation; `dual` encodes the translation as
/// `translation/2 * real`. `a * b` applies `b` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuaternion {
    /// The rotation part.
    pub real: Quaternion,
    /// The translation part, premultiplied with the rotation.
    pub dual: Quaternion,
}

impl DualQuaternion {
    /// The identity transformation.
    pub const IDENTITY: Self = Self {
        real: Quaternion::IDENTITY,
        dual: Quaternion::new(Vec3::ZERO, 0.0),
    };

    /// A pure rotation.
    #[inline]
    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self {
            real: rotation,
            dual: Quaternion::new(Vec3::ZERO, 0.0),
        }
    }

    /// A rotation around `axis` by `angle_radians`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        Self::from_rotation(Quaternion::from_axis_angle(axis, angle_radians))
    }

    /// A pure translation.
    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            real: Quaternion::IDENTITY,
            dual: Quaternion::new(translation * 0.5, 0.0),
        }
    }

    /// The rotation part.
    #[inline]
    pub fn rotation(&self) -> Quaternion {
        self.real
    }

    /// The translation part.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        (self.dual * self.real.conjugate()).vector * 2.0
    }

    /// Rotates a vector. Translation does not apply to vectors.
    #[inline]
    pub fn transform_vector_normalized(&self, v: Vec3) -> Vec3 {
        self.real.transform_vector_normalized(v)
    }

    /// Rotates and translates a point. The rotation is expected to be normalized.
    #[inline]
    pub fn transform_point_normalized(&self, p: Vec3) -> Vec3 {
        self.real.transform_vector_normalized(p) + self.translation()
    }
}

impl Default for DualQuaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for DualQuaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            real: self.real * rhs.real,
            dual: self.real * rhs.dual + self.dual * rhs.real,
        }
    }
}

// --- DualComplex ---

/// A rigid 2D transformation: a rotation followed by a translation.
///
/// `a * b` applies `b` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualComplex {
    /// The rotation part.
    pub real: Complex,
    /// The translation, stored as `[real, imaginary]`.
    pub dual: Complex,
}

impl DualComplex {
    /// The identity transformation.
    pub const IDENTITY: Self = Self {
        real: Complex::IDENTITY,
        dual: Complex::new(0.0, 0.0),
    };

    /// A pure rotation by `angle_radians`.
    #[inline]
    pub fn from_rotation(angle_radians: f32) -> Self {
        Self {
            real: Complex::from_angle(angle_radians),
            dual: Complex::new(0.0, 0.0),
        }
    }

    /// A pure translation.
    #[inline]
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            real: Complex::IDENTITY,
            dual: Complex::new(translation.x(), translation.y()),
        }
    }

    /// The rotation part.
    #[inline]
    pub fn rotation(&self) -> Complex {
        self.real
    }

    /// The translation part.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.dual.to_vector()
    }

    /// Rotates a vector. Translation does not apply to vectors.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.real.transform_vector(v)
    }

    /// Rotates and translates a point.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.real.transform_vector(p) + self.translation()
    }
}

impl Default for DualComplex {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for DualComplex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            real: self.real * rhs.real,
            dual: self.real * rhs.dual + self.dual,
        }
    }
}
