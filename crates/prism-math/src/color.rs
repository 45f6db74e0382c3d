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

//! Defines the RGB and RGBA color types and their HSV conversions.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::swizzle::{Swizzle, SwizzleInto};
use crate::vector::{ParseVectorError, Vector, Vector3, Vector4};
use std::fmt;
use std::str::FromStr;

/// A scalar usable as a color channel.
///
/// Integral channels are normalized by their maximum value, so `255u8` is a
/// full channel; floating-point channels are already normalized.
pub trait ColorComponent: Scalar {
    /// The value of a fully saturated channel (and the default alpha).
    const FULL: Self;

    /// Converts the channel to the `[0.0, 1.0]` range.
    fn to_normalized(self) -> f32;

    /// Converts a normalized value back to the channel type.
    ///
    /// Integral channels truncate: `0.45` becomes `114u8`, not `115u8`.
    fn from_normalized(value: f32) -> Self;
}

impl ColorComponent for u8 {
    const FULL: Self = u8::MAX;

    #[inline]
    fn to_normalized(self) -> f32 {
        self as f32 / u8::MAX as f32
    }

    #[inline]
    fn from_normalized(value: f32) -> Self {
        (value * u8::MAX as f32) as u8
    }
}

impl ColorComponent for u16 {
    const FULL: Self = u16::MAX;

    #[inline]
    fn to_normalized(self) -> f32 {
        self as f32 / u16::MAX as f32
    }

    #[inline]
    fn from_normalized(value: f32) -> Self {
        (value * u16::MAX as f32) as u16
    }
}

impl ColorComponent for f32 {
    const FULL: Self = 1.0;

    #[inline]
    fn to_normalized(self) -> f32 {
        self
    }

    #[inline]
    fn from_normalized(value: f32) -> Self {
        value
    }
}

// --- Helper functions for HSV conversion ---

/// Converts HSV (hue in degrees) to normalized RGB.
fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    // Hue wraps in both directions: -333° and 387° are both 27°.
    let sector = hue.rem_euclid(360.0) / 60.0;
    let index = sector.floor();
    let f = sector - index;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    match index as u32 % 6 {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        _ => [value, p, q],
    }
}

/// Returns `(max, delta)` of normalized RGB channels.
fn max_and_delta([r, g, b]: [f32; 3]) -> (f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (max, max - min)
}

fn rgb_hue(rgb: [f32; 3]) -> f32 {
    let [r, g, b] = rgb;
    let (max, delta) = max_and_delta(rgb);
    if delta == 0.0 {
        return 0.0;
    }

    let scale = 60.0 / delta;
    if max == r {
        (g - b) * scale + if g < b { 360.0 } else { 0.0 }
    } else if max == g {
        (b - r) * scale + 120.0
    } else {
        (r - g) * scale + 240.0
    }
}

fn rgb_saturation(rgb: [f32; 3]) -> f32 {
    let (max, delta) = max_and_delta(rgb);
    if max != 0.0 {
        delta / max
    } else {
        0.0
    }
}

// --- Color3 ---

/// An RGB color.
///
/// A thin wrapper over [`Vector3`]; swizzling a `Color3` with three or four
/// selectors yields a [`Color3`] or [`Color4`] of the same channel type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
#[repr(transparent)]
pub struct Color3<T>(Vector3<T>);

/// An RGBA color.
///
/// A thin wrapper over [`Vector4`]; `a` is the (non-premultiplied) alpha channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
#[repr(transparent)]
pub struct Color4<T>(Vector4<T>);

/// An 8-bit-per-channel RGB color.
pub type Color3ub = Color3<u8>;
/// An 8-bit-per-channel RGBA color.
pub type Color4ub = Color4<u8>;
/// A floating-point RGB color.
pub type Color3f = Color3<f32>;
/// A floating-point RGBA color.
pub type Color4f = Color4<f32>;

impl<T> Color3<T> {
    /// Creates a new color from its channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self(Vector3::new(r, g, b))
    }

    /// Borrows the underlying vector.
    #[inline]
    pub const fn as_vector(&self) -> &Vector3<T> {
        &self.0
    }
}

impl<T: Copy> Color3<T> {
    /// The red channel.
    #[inline]
    pub const fn r(&self) -> T {
        self.0.x()
    }

    /// The green channel.
    #[inline]
    pub const fn g(&self) -> T {
        self.0.y()
    }

    /// The blue channel.
    #[inline]
    pub const fn b(&self) -> T {
        self.0.z()
    }
}

impl<T: ColorComponent> Color3<T> {
    /// Creates a color from hue (in degrees, wrapped to `[0, 360)`),
    /// saturation and value, the latter two in `[0.0, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_math::Color3ub;
    /// assert_eq!(Color3ub::from_hsv(27.0, 1.0, 1.0), Color3ub::new(255, 114, 0));
    /// ```
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let [r, g, b] = hsv_to_rgb(hue, saturation, value);
        Self::new(
            T::from_normalized(r),
            T::from_normalized(g),
            T::from_normalized(b),
        )
    }

    fn normalized(&self) -> [f32; 3] {
        [
            self.r().to_normalized(),
            self.g().to_normalized(),
            self.b().to_normalized(),
        ]
    }

    /// The hue in degrees, in `[0, 360)`. Gray colors have a hue of `0`.
    pub fn hue(&self) -> f32 {
        rgb_hue(self.normalized())
    }

    /// The saturation in `[0.0, 1.0]`. Black has a saturation of `0`.
    pub fn saturation(&self) -> f32 {
        rgb_saturation(self.normalized())
    }

    /// The value (brightest normalized channel) in `[0.0, 1.0]`.
    pub fn value(&self) -> f32 {
        let [r, g, b] = self.normalized();
        r.max(g).max(b)
    }

    /// Returns `(hue, saturation, value)`.
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let rgb = self.normalized();
        let (max, _) = max_and_delta(rgb);
        (rgb_hue(rgb), rgb_saturation(rgb), max)
    }
}

// --- Color4 ---

impl<T> Color4<T> {
    /// Creates a new color from its channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self(Vector4::new(r, g, b, a))
    }

    /// Borrows the underlying vector.
    #[inline]
    pub const fn as_vector(&self) -> &Vector4<T> {
        &self.0
    }
}

impl<T: Copy> Color4<T> {
    /// The red channel.
    #[inline]
    pub const fn r(&self) -> T {
        self.0.x()
    }

    /// The green channel.
    #[inline]
    pub const fn g(&self) -> T {
        self.0.y()
    }

    /// The blue channel.
    #[inline]
    pub const fn b(&self) -> T {
        self.0.z()
    }

    /// The alpha channel.
    #[inline]
    pub const fn a(&self) -> T {
        self.0.w()
    }

    /// Creates an RGBA color from an RGB color and an alpha value.
    #[inline]
    pub fn from_rgb(rgb: Color3<T>, a: T) -> Self {
        Self::new(rgb.r(), rgb.g(), rgb.b(), a)
    }

    /// The RGB part of the color.
    #[inline]
    pub const fn rgb(&self) -> Color3<T> {
        Color3::new(self.r(), self.g(), self.b())
    }
}

impl<T: ColorComponent> Color4<T> {
    /// Creates an opaque color (alpha is [`ColorComponent::FULL`]).
    #[inline]
    pub const fn opaque(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::FULL)
    }

    /// Creates a color from HSV and an explicit alpha value.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_math::Color4ub;
    /// assert_eq!(Color4ub::from_hsv(230.0, 0.749, 0.427, 23), Color4ub::new(27, 40, 108, 23));
    /// ```
    pub fn from_hsv(hue: f32, saturation: f32, value: f32, a: T) -> Self {
        Self::from_rgb(Color3::from_hsv(hue, saturation, value), a)
    }

    /// The hue of the RGB part, in degrees.
    pub fn hue(&self) -> f32 {
        self.rgb().hue()
    }

    /// The saturation of the RGB part.
    pub fn saturation(&self) -> f32 {
        self.rgb().saturation()
    }

    /// The value of the RGB part.
    pub fn value(&self) -> f32 {
        self.rgb().value()
    }

    /// Returns `(hue, saturation, value)` of the RGB part.
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        self.rgb().to_hsv()
    }
}

// --- Conversions ---

/// Swizzles of a color whose length is not three or four produce plain vectors.
macro_rules! impl_color_swizzle_vectors {
    ($color:ident => $($m:literal)+) => {
        $(
            impl<T: Scalar> SwizzleInto<$m> for $color<T> {
                type Output = Vector<$m, T>;
            }
        )+
    };
}

macro_rules! impl_color_common {
    ($color:ident, $n:literal) => {
        impl<T> From<Vector<$n, T>> for $color<T> {
            #[inline]
            fn from(v: Vector<$n, T>) -> Self {
                Self(v)
            }
        }

        impl<T> From<$color<T>> for Vector<$n, T> {
            #[inline]
            fn from(c: $color<T>) -> Self {
                c.0
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $color<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl<T: fmt::Display> fmt::Display for $color<T> {
            /// Formats as a configuration value, like [`Vector`].
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl<T: Scalar + FromStr> FromStr for $color<T> {
            type Err = ParseVectorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl<T: Scalar> Swizzle for $color<T> {
            type Scalar = T;
            const SIZE: usize = $n;

            #[inline]
            fn component(&self, index: usize) -> T {
                self.0[index]
            }
        }

        impl_color_swizzle_vectors!($color => 1 2 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20
            21 22 23 24 25 26 27 28 29 30 31 32);

        impl<T: Scalar> SwizzleInto<3> for $color<T> {
            type Output = Color3<T>;
        }

        impl<T: Scalar> SwizzleInto<4> for $color<T> {
            type Output = Color4<T>;
        }

        // SAFETY: `repr(transparent)` over a vector of `T`, which is Zeroable when `T` is.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $color<T> {}
        // SAFETY: see above.
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $color<T> {}
    };
}

impl_color_common!(Color3, 3);
impl_color_common!(Color4, 4);
