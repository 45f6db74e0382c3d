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

//! Provides a complex number type for representing 2D rotations.

use serde::{Deserialize, Serialize};

use super::{Vec2, EPSILON};
use std::ops::{Add, Mul};

/// A complex number `real + imaginary·i`.
///
/// Unit complex numbers represent 2D rotations: `(cos θ, sin θ)` rotates
/// counter-clockwise by `θ`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// The real part.
    pub real: f32,
    /// The imaginary part.
    pub imaginary: f32,
}

impl Complex {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0);

    /// Creates a complex number from its parts.
    #[inline]
    pub const fn new(real: f32, imaginary: f32) -> Self {
        Self { real, imaginary }
    }

    /// Creates a rotation by `angle_radians`.
    #[inline]
    pub fn from_angle(angle_radians: f32) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::new(c, s)
    }

    /// The rotation angle in radians, in `(-PI, PI]`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.imaginary.atan2(self.real)
    }

    /// Calculates the length (magnitude).
    #[inline]
    pub fn length(&self) -> f32 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }

    /// Returns a normalized copy, or the identity if the length is near zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > EPSILON {
            Self::new(self.real / len, self.imaginary / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Negates the imaginary part. For a rotation this is its inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Rotates (and scales, if not normalized) a 2D vector.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.real * v.x() - self.imaginary * v.y(),
            self.imaginary * v.x() + self.real * v.y(),
        )
    }

    /// The parts as a vector `[real, imaginary]`.
    #[inline]
    pub fn to_vector(&self) -> Vec2 {
        Vec2::new(self.real, self.imaginary)
    }
}

impl Default for Complex {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Complex {
    type Output = Self;
    /// Adds two complex numbers component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Mul for Complex {
    type Output = Self;
    /// Multiplies two complex numbers, composing their rotations.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.imaginary * rhs.real + self.real * rhs.imaginary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation() {
        let c = Complex::from_angle(FRAC_PI_2);
        let v = c.transform_vector(Vec2::new(1.0, 0.0));
        assert_relative_eq!(v.x(), 0.0, epsilon = EPSILON);
        assert_relative_eq!(v.y(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(c.angle(), FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn test_composition() {
        let a = Complex::from_angle(0.3);
        let b = Complex::from_angle(0.5);
        assert_relative_eq!((a * b).angle(), 0.8, epsilon = EPSILON);
        assert_relative_eq!((a * a.conjugate()).real, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalize() {
        let c = Complex::new(3.0, 4.0).normalize();
        assert_relative_eq!(c.length(), 1.0, epsilon = EPSILON);
        assert_eq!(Complex::new(0.0, 0.0).normalize(), Complex::IDENTITY);
    }
}
