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

//! Defines the [`Scalar`] trait implemented by every vector element type.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// A numeric element type that can be stored in a [`Vector`](crate::Vector).
///
/// `ZERO` and `ONE` are the additive and multiplicative identities of the
/// type. For unsigned byte-like types `ONE` is the value `1`, not a
/// normalized full channel (see [`ColorComponent::FULL`](crate::ColorComponent::FULL)
/// for that).
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_scalar {
    ($zero:literal, $one:literal => $($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )+
    };
}

impl_scalar!(0, 1 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar!(0.0, 1.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn identities<T: Scalar>() -> (T, T) {
        (T::ZERO, T::ONE)
    }

    #[test]
    fn test_integer_identities() {
        assert_eq!(identities::<i32>(), (0, 1));
        assert_eq!(identities::<u8>(), (0, 1));
        assert_eq!(identities::<u64>(), (0, 1));
    }

    #[test]
    fn test_float_identities() {
        assert_eq!(identities::<f32>(), (0.0, 1.0));
        assert_eq!(identities::<f64>(), (0.0, 1.0));
    }

    #[test]
    fn test_identity_laws() {
        let v = 7i16;
        assert_eq!(v + i16::ZERO, v);
        assert_eq!(v * i16::ONE, v);
    }
}
