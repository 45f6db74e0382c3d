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

//! Provides the generic fixed-size [`Vector`] type and its 2D, 3D and 4D aliases.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scalar::Scalar;
use super::EPSILON;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use std::str::FromStr;

/// An ordered, fixed-length sequence of `N` scalar components.
///
/// The position of a component is its identity: index `0` is `x`, `1` is `y`
/// and so on. Vectors are plain values, there is no sharing between them.
///
/// `#[repr(transparent)]` guarantees the same layout as `[T; N]`, so vectors
/// of [`bytemuck::Pod`] scalars can be uploaded to the GPU directly.
///
/// `N` must be at least one; constructing an empty vector fails the build.
///
/// ```compile_fail
/// use prism_math::Vector;
///
/// let empty = Vector::<0, i32>::from_array([]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<const N: usize, T> {
    data: [T; N],
}

/// A 2-component vector.
pub type Vector2<T> = Vector<2, T>;
/// A 3-component vector.
pub type Vector3<T> = Vector<3, T>;
/// A 4-component vector, often used for homogeneous coordinates.
pub type Vector4<T> = Vector<4, T>;

/// A 2-dimensional vector with `f32` components.
pub type Vec2 = Vector2<f32>;
/// A 3-dimensional vector with `f32` components.
pub type Vec3 = Vector3<f32>;
/// A 4-dimensional vector with `f32` components.
pub type Vec4 = Vector4<f32>;

impl<const N: usize, T> Vector<N, T> {
    /// The number of components.
    pub const SIZE: usize = N;

    /// Creates a vector from an array of components.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        const { assert!(N > 0, "a vector must have at least one component") };
        Self { data }
    }

    /// Creates a vector whose component `i` is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        const { assert!(N > 0, "a vector must have at least one component") };
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Borrows the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Returns an iterator over the components, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<const N: usize, T: Copy> Vector<N, T> {
    /// Retrieves a component by index, or `None` if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Applies `f` to every component, producing a vector of the same size.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector<N, U> {
        Vector::from_fn(|i| f(self.data[i]))
    }
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// A vector with all components set to zero.
    pub const ZERO: Self = Self::splat(T::ZERO);
    /// A vector with all components set to one.
    pub const ONE: Self = Self::splat(T::ONE);

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        const { assert!(N > 0, "a vector must have at least one component") };
        Self { data: [value; N] }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> T {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }
}

impl<const N: usize> Vector<N, f32> {
    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// If the vector's length is near zero, it returns `ZERO`.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON * EPSILON {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }

    /// Performs a linear interpolation between two vectors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t.clamp(0.0, 1.0)
    }
}

// --- Sized constructors and named accessors ---

impl<T> Vector<2, T> {
    /// Creates a new 2-component vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }
}

impl<T> Vector<3, T> {
    /// Creates a new 3-component vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }
}

impl<T> Vector<4, T> {
    /// Creates a new 4-component vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }
}

macro_rules! impl_accessors {
    ($n:literal => $($name:ident: $index:literal),+) => {
        impl<T: Copy> Vector<$n, T> {
            $(
                #[doc = concat!("Returns the `", stringify!($name), "` component.")]
                #[inline]
                pub const fn $name(&self) -> T {
                    self.data[$index]
                }
            )+
        }
    };
}

impl_accessors!(2 => x: 0, y: 1);
impl_accessors!(3 => x: 0, y: 1, z: 2);
impl_accessors!(4 => x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> Vector<3, T> {
    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Returns the `[x, y]` components.
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        crate::swizzle!(*self, "xy")
    }
}

impl<T: Scalar> Vector<4, T> {
    /// Creates a `Vector4` from a `Vector3` and a `w` component.
    #[inline]
    pub fn from_vec3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the `[x, y, z]` components, discarding `w`.
    #[inline]
    pub fn truncate(&self) -> Vector3<T> {
        crate::swizzle!(*self, "xyz")
    }

    /// Same as [`truncate`](Self::truncate).
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        self.truncate()
    }

    /// Returns the `[x, y]` components.
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        crate::swizzle!(*self, "xy")
    }
}

// --- Operator Overloads ---

impl<const N: usize, T: Scalar> Add for Vector<N, T> {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.data[i] + rhs.data[i])
    }
}

impl<const N: usize, T: Scalar> Sub for Vector<N, T> {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.data[i] - rhs.data[i])
    }
}

impl<const N: usize, T: Scalar> Mul<T> for Vector<N, T> {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

impl<const N: usize> Mul<Vector<N, f32>> for f32 {
    type Output = Vector<N, f32>;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vector<N, f32>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize, T: Scalar> Mul for Vector<N, T> {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.data[i] * rhs.data[i])
    }
}

impl<const N: usize, T: Scalar> Div<T> for Vector<N, T> {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|c| c / rhs)
    }
}

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for Vector<N, T> {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`, ...).
    ///
    /// # Panics
    /// Panics if `index >= N`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    /// Allows mutably accessing a vector component by index.
    ///
    /// # Panics
    /// Panics if `index >= N`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<const N: usize, T: Default> Default for Vector<N, T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

// --- Conversions ---

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<const N: usize, T> From<Vector<N, T>> for [T; N] {
    #[inline]
    fn from(v: Vector<N, T>) -> Self {
        v.data
    }
}

impl<const N: usize, T> AsRef<[T]> for Vector<N, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which has no padding
// and is all-zero valid whenever `T` is.
unsafe impl<const N: usize, T: bytemuck::Zeroable> bytemuck::Zeroable for Vector<N, T> {}
// SAFETY: see above; `T: Pod` implies `Copy + 'static`.
unsafe impl<const N: usize, T: bytemuck::Pod> bytemuck::Pod for Vector<N, T> {}

// --- Formatting and configuration values ---

impl<const N: usize, T: fmt::Debug> fmt::Debug for Vector<N, T> {
    /// Formats as `Vector(a, b, c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Vector");
        for component in &self.data {
            tuple.field(component);
        }
        tuple.finish()
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for Vector<N, T> {
    /// Formats as a configuration value: components separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// An error returned when parsing a vector from its configuration value form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    /// The value did not contain exactly as many components as the vector has.
    ComponentCount {
        /// The number of components of the target vector.
        expected: usize,
        /// The number of whitespace separated values found.
        found: usize,
    },
    /// A component failed to parse as the scalar type.
    InvalidComponent {
        /// Position of the offending component.
        index: usize,
        /// The text that failed to parse.
        value: String,
    },
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVectorError::ComponentCount { expected, found } => {
                write!(f, "Expected {expected} vector components, found {found}")
            }
            ParseVectorError::InvalidComponent { index, value } => {
                write!(f, "Invalid vector component {index}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ParseVectorError {}

impl<const N: usize, T: Scalar + FromStr> FromStr for Vector<N, T> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != N {
            return Err(ParseVectorError::ComponentCount {
                expected: N,
                found: parts.len(),
            });
        }

        let mut data = [T::ZERO; N];
        for (index, (slot, part)) in data.iter_mut().zip(parts).enumerate() {
            *slot = part
                .parse()
                .map_err(|_| ParseVectorError::InvalidComponent {
                    index,
                    value: part.to_owned(),
                })?;
        }
        Ok(Self::from_array(data))
    }
}

// --- Serde ---

impl<const N: usize, T: Serialize> Serialize for Vector<N, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.data {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<const N: usize, T>(PhantomData<T>);

impl<'de, const N: usize, T: Scalar + Deserialize<'de>> Visitor<'de> for VectorVisitor<N, T> {
    type Value = Vector<N, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} vector components")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut data = [T::ZERO; N];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(Vector::from_array(data))
    }
}

impl<'de, const N: usize, T: Scalar + Deserialize<'de>> Deserialize<'de> for Vector<N, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor::<N, T>(PhantomData))
    }
}
