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

//! # Prism Math
//!
//! Generic fixed-size vectors and the linear algebra built on top of them.
//!
//! The centerpiece is the [`swizzle!`] macro, which builds a new vector by
//! selecting, reordering, duplicating or replacing (with `0`/`1`) the
//! components of a source vector. Patterns are validated while compiling:
//!
//! ```
//! use prism_math::{swizzle, Vector4};
//!
//! let original = Vector4::new(-1, 2, 3, 4);
//! let vec = swizzle!(original, "w10xyz");
//! assert_eq!(vec.as_array(), &[4, 1, 0, -1, 2, 3]);
//! ```
//!
//! All angular functions operate in **radians**, except the HSV helpers of
//! [`color`] which follow the usual degree convention for hue.

#![warn(missing_docs)]

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod color;
pub mod complex;
pub mod dual;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod swizzle;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::{Color3, Color3f, Color3ub, Color4, Color4f, Color4ub, ColorComponent};
pub use self::complex::Complex;
pub use self::dual::{DualComplex, DualQuaternion};
pub use self::matrix::{Mat3, Mat4};
pub use self::quaternion::Quaternion;
pub use self::scalar::Scalar;
pub use self::swizzle::{Selector, SwizzleError, SwizzlePlan};
pub use self::vector::{ParseVectorError, Vec2, Vec3, Vec4, Vector, Vector2, Vector3, Vector4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use prism_math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use prism_math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
