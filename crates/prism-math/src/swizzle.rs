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

//! Swizzling: building a new vector from selected components of another.
//!
//! A swizzle pattern is a sequence of selectors, one per output component:
//!
//! - `x`, `y`, `z`, `w` (or the color aliases `r`, `g`, `b`, `a`) copy the
//!   source component at position 0, 1, 2 or 3,
//! - `0` and `1` emit the additive and multiplicative identity of the scalar type.
//!
//! Selectors may repeat and appear in any order, and the pattern may be
//! shorter or longer than the source. It must contain at least one selector.
//!
//! There are two ways to resolve a pattern:
//!
//! - [`swizzle!`](crate::swizzle!) checks the pattern while compiling. An
//!   out-of-range selector, an unknown symbol or an empty pattern is a build
//!   error, never a runtime one.
//! - [`SwizzlePlan`] is validated once when built from a runtime string (for
//!   instance a channel mapping read from a configuration file) and can then
//!   be applied any number of times without further checks.
//!
//! ```compile_fail
//! use prism_math::{swizzle, Vector3};
//!
//! // `w` is position 3, which a 3-component vector does not have.
//! let v = swizzle!(Vector3::new(1, 2, 3), "w");
//! ```
//!
//! ```compile_fail
//! use prism_math::{swizzle, Vector3};
//!
//! // A swizzle must produce at least one component.
//! let v = swizzle!(Vector3::new(1, 2, 3), "");
//! ```
//!
//! ```compile_fail
//! use prism_math::{swizzle, Vector3};
//!
//! // `q` is not a selector.
//! let v = swizzle!(Vector3::new(1, 2, 3), "xq");
//! ```
//!
//! ```compile_fail
//! use prism_math::{swizzle, Vector3};
//!
//! // Selectors are ASCII only.
//! let v = swizzle!(Vector3::new(1, 2, 3), "xé");
//! ```
//!
//! The checks run during constant evaluation of the monomorphized
//! [`swizzle`] call. `cargo check` does not reach that stage and accepts
//! an invalid pattern; `cargo build` (and `cargo test`) reject it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scalar::Scalar;
use crate::vector::Vector;
use std::fmt;
use std::str::FromStr;

/// One symbolic token of a swizzle pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Copy the component at position 0 (`x` or `r`).
    X,
    /// Copy the component at position 1 (`y` or `g`).
    Y,
    /// Copy the component at position 2 (`z` or `b`).
    Z,
    /// Copy the component at position 3 (`w` or `a`).
    W,
    /// Emit the additive identity (`0`).
    Zero,
    /// Emit the multiplicative identity (`1`).
    One,
}

impl Selector {
    /// Parses a selector from its symbol.
    pub const fn from_byte(symbol: u8) -> Option<Self> {
        match symbol {
            b'x' | b'r' => Some(Self::X),
            b'y' | b'g' => Some(Self::Y),
            b'z' | b'b' => Some(Self::Z),
            b'w' | b'a' => Some(Self::W),
            b'0' => Some(Self::Zero),
            b'1' => Some(Self::One),
            _ => None,
        }
    }

    /// Parses a selector from its symbol.
    pub const fn from_char(symbol: char) -> Option<Self> {
        if symbol.is_ascii() {
            Self::from_byte(symbol as u8)
        } else {
            None
        }
    }

    /// The source position this selector copies from, or `None` for constants.
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
            Self::W => Some(3),
            Self::Zero | Self::One => None,
        }
    }

    /// The canonical symbol of this selector.
    pub const fn symbol(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Evaluates the selector against `source`.
    #[inline]
    pub fn resolve<S: Swizzle>(self, source: &S) -> S::Scalar {
        match self {
            Self::Zero => <S::Scalar as Scalar>::ZERO,
            Self::One => <S::Scalar as Scalar>::ONE,
            Self::X => source.component(0),
            Self::Y => source.component(1),
            Self::Z => source.component(2),
            Self::W => source.component(3),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An invalid swizzle pattern.
///
/// These are programmer errors. The [`swizzle!`](crate::swizzle!) macro turns
/// them into build failures; [`SwizzlePlan`] reports them when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwizzleError {
    /// The pattern contains no selectors.
    Empty,
    /// A positional selector addresses a component the source does not have.
    OutOfRange {
        /// The offending selector.
        selector: Selector,
        /// The number of components of the source vector.
        size: usize,
    },
    /// A symbol outside of `x y z w r g b a 0 1`.
    InvalidSelector(char),
    /// The pattern length differs from the plan's output size.
    LengthMismatch {
        /// The output size of the plan.
        expected: usize,
        /// The number of selectors in the pattern.
        found: usize,
    },
}

impl fmt::Display for SwizzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwizzleError::Empty => write!(f, "Swizzle pattern must select at least one component"),
            SwizzleError::OutOfRange { selector, size } => write!(
                f,
                "Swizzle selector '{selector}' is out of range of a {size}-component base vector"
            ),
            SwizzleError::InvalidSelector(symbol) => write!(
                f,
                "Invalid swizzle selector '{symbol}', expected one of x, y, z, w, r, g, b, a, 0, 1"
            ),
            SwizzleError::LengthMismatch { expected, found } => write!(
                f,
                "Swizzle pattern has {found} selectors, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for SwizzleError {}

/// Checks every positional selector against a source of `size` components.
pub const fn validate<const M: usize>(
    selectors: &[Selector; M],
    size: usize,
) -> Result<(), SwizzleError> {
    if M == 0 {
        return Err(SwizzleError::Empty);
    }
    let mut i = 0;
    while i < M {
        if let Some(position) = selectors[i].position() {
            if position >= size {
                return Err(SwizzleError::OutOfRange {
                    selector: selectors[i],
                    size,
                });
            }
        }
        i += 1;
    }
    Ok(())
}

/// Validates `selectors` during constant evaluation, failing the build on error.
///
/// Constant evaluation cannot format values, so every failing selector and
/// source size pair has its own message. Only sources of fewer than four
/// components can fail a range check.
const fn validated<const M: usize>(selectors: [Selector; M], size: usize) -> [Selector; M] {
    match validate(&selectors, size) {
        Ok(()) => selectors,
        Err(SwizzleError::Empty) => panic!("swizzle pattern must select at least one component"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::X,
            size: 0,
        }) => panic!("swizzle selector `x` (position 0) is out of range of an empty base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::Y,
            size: 0,
        }) => panic!("swizzle selector `y` (position 1) is out of range of an empty base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::Y,
            size: 1,
        }) => panic!("swizzle selector `y` (position 1) is out of range of a 1-component base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::Z,
            size: 0,
        }) => panic!("swizzle selector `z` (position 2) is out of range of an empty base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::Z,
            size: 1,
        }) => panic!("swizzle selector `z` (position 2) is out of range of a 1-component base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::Z,
            size: 2,
        }) => panic!("swizzle selector `z` (position 2) is out of range of a 2-component base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::W,
            size: 0,
        }) => panic!("swizzle selector `w` (position 3) is out of range of an empty base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::W,
            size: 1,
        }) => panic!("swizzle selector `w` (position 3) is out of range of a 1-component base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::W,
            size: 2,
        }) => panic!("swizzle selector `w` (position 3) is out of range of a 2-component base vector"),
        Err(SwizzleError::OutOfRange {
            selector: Selector::W,
            size: 3,
        }) => panic!("swizzle selector `w` (position 3) is out of range of a 3-component base vector"),
        Err(_) => panic!("invalid swizzle pattern"),
    }
}

/// The number of selectors in `pattern`. Used by [`swizzle!`](crate::swizzle!).
#[doc(hidden)]
pub const fn pattern_len(pattern: &str) -> usize {
    pattern.len()
}

/// Parses a pattern literal during constant evaluation. Used by [`swizzle!`](crate::swizzle!).
#[doc(hidden)]
pub const fn parse_pattern<const M: usize>(pattern: &str) -> [Selector; M] {
    let bytes = pattern.as_bytes();
    assert!(bytes.len() == M, "swizzle pattern length mismatch");
    if M == 0 {
        panic!("swizzle pattern must select at least one component");
    }

    let mut selectors = [Selector::Zero; M];
    let mut i = 0;
    while i < M {
        selectors[i] = match Selector::from_byte(bytes[i]) {
            Some(selector) => selector,
            None => panic!("invalid swizzle selector, expected one of x, y, z, w, r, g, b, a, 0, 1"),
        };
        i += 1;
    }
    selectors
}

/// A swizzle pattern known at compile time.
///
/// Implemented by the marker types that [`swizzle!`](crate::swizzle!)
/// generates; implement it by hand to name a pattern once and reuse it.
///
/// ```
/// use prism_math::swizzle::{swizzle, Pattern, Selector};
/// use prism_math::Vector3;
///
/// struct Bgr;
/// impl Pattern<3> for Bgr {
///     const SELECTORS: [Selector; 3] = [Selector::Z, Selector::Y, Selector::X];
/// }
///
/// let rgb = Vector3::new(10u8, 20, 30);
/// assert_eq!(swizzle::<Bgr, _, 3>(&rgb), Vector3::new(30, 20, 10));
/// ```
pub trait Pattern<const M: usize> {
    /// The selectors, one per output component.
    const SELECTORS: [Selector; M];
}

/// A source of swizzled components.
pub trait Swizzle {
    /// The element type, shared by the swizzled output.
    type Scalar: Scalar;
    /// The number of components.
    const SIZE: usize;

    /// Reads the component at `index`, which is always `< SIZE`.
    fn component(&self, index: usize) -> Self::Scalar;
}

/// Maps a swizzle source to the type produced by an `M`-selector pattern.
///
/// Plain vectors produce plain vectors; colors keep being colors when the
/// result has three or four components.
pub trait SwizzleInto<const M: usize>: Swizzle {
    /// The output type.
    type Output: From<Vector<M, Self::Scalar>>;
}

impl<const N: usize, T: Scalar> Swizzle for Vector<N, T> {
    type Scalar = T;
    const SIZE: usize = {
        assert!(N > 0, "a vector must have at least one component");
        N
    };

    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }
}

impl<const N: usize, const M: usize, T: Scalar> SwizzleInto<M> for Vector<N, T> {
    type Output = Vector<M, T>;
}

#[inline]
fn resolve_all<S: SwizzleInto<M>, const M: usize>(
    selectors: &[Selector; M],
    source: &S,
) -> S::Output {
    let output: Vector<M, S::Scalar> = Vector::from_fn(|i| selectors[i].resolve(source));
    <S::Output as From<Vector<M, S::Scalar>>>::from(output)
}

/// Applies the compile-time pattern `P` to `source`.
///
/// The pattern is validated against `S::SIZE` during constant evaluation,
/// so an invalid pattern fails the build of the calling crate.
#[inline]
pub fn swizzle<P, S, const M: usize>(source: &S) -> S::Output
where
    P: Pattern<M>,
    S: SwizzleInto<M>,
{
    let selectors = const { validated(P::SELECTORS, S::SIZE) };
    resolve_all(&selectors, source)
}

/// Swizzles a vector (or color) with a pattern literal checked at compile time.
///
/// ```
/// use prism_math::{swizzle, Vector3, Vector4};
///
/// let original = Vector4::new(-1, 2, 3, 4);
/// assert_eq!(swizzle!(original, "w10xyz").as_array(), &[4, 1, 0, -1, 2, 3]);
///
/// let v = Vector3::new(10, 20, 30);
/// assert_eq!(swizzle!(v, "yzx"), Vector3::new(20, 30, 10));
/// ```
#[macro_export]
macro_rules! swizzle {
    ($source:expr, $pattern:literal) => {{
        struct __SwizzlePattern;
        impl $crate::swizzle::Pattern<{ $crate::swizzle::pattern_len($pattern) }>
            for __SwizzlePattern
        {
            const SELECTORS: [$crate::swizzle::Selector;
                $crate::swizzle::pattern_len($pattern)] =
                $crate::swizzle::parse_pattern($pattern);
        }
        $crate::swizzle::swizzle::<__SwizzlePattern, _, { $crate::swizzle::pattern_len($pattern) }>(
            &$source,
        )
    }};
}

/// A swizzle pattern validated at runtime for sources of `N` components,
/// producing `M` components.
///
/// Validation happens once, when the plan is built. [`apply`](Self::apply)
/// never re-checks and cannot fail.
///
/// ```
/// use prism_math::{SwizzlePlan, Vector4};
///
/// let plan: SwizzlePlan<4, 3> = "bgr".parse()?;
/// assert_eq!(plan.apply(&Vector4::new(1, 2, 3, 4)), prism_math::Vector3::new(3, 2, 1));
/// # Ok::<(), prism_math::SwizzleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwizzlePlan<const N: usize, const M: usize> {
    selectors: [Selector; M],
}

impl<const N: usize, const M: usize> SwizzlePlan<N, M> {
    /// Builds a plan from selectors, checking them against `N`.
    pub const fn new(selectors: [Selector; M]) -> Result<Self, SwizzleError> {
        const { assert!(N > 0, "a swizzle plan needs a source with at least one component") };
        match validate(&selectors, N) {
            Ok(()) => Ok(Self { selectors }),
            Err(error) => Err(error),
        }
    }

    /// Parses and validates a pattern such as `"w10xyz"`.
    pub fn parse(pattern: &str) -> Result<Self, SwizzleError> {
        let plan = Self::parse_selectors(pattern).and_then(Self::new);
        match &plan {
            Ok(_) => log::debug!("Resolved swizzle plan '{pattern}' for {N}-component sources."),
            Err(e) => log::warn!("Rejected swizzle pattern '{pattern}': {e}"),
        }
        plan
    }

    fn parse_selectors(pattern: &str) -> Result<[Selector; M], SwizzleError> {
        let found = pattern.chars().count();
        if found == 0 {
            return Err(SwizzleError::Empty);
        }
        if found != M {
            return Err(SwizzleError::LengthMismatch { expected: M, found });
        }

        let mut selectors = [Selector::Zero; M];
        for (slot, symbol) in selectors.iter_mut().zip(pattern.chars()) {
            *slot = Selector::from_char(symbol).ok_or(SwizzleError::InvalidSelector(symbol))?;
        }
        Ok(selectors)
    }

    /// The validated selectors.
    pub const fn selectors(&self) -> &[Selector; M] {
        &self.selectors
    }

    /// Applies the plan to `source`.
    ///
    /// `S::SIZE` must equal `N`; a mismatch fails the build.
    #[inline]
    pub fn apply<S: SwizzleInto<M>>(&self, source: &S) -> S::Output {
        const {
            assert!(
                S::SIZE == N,
                "swizzle plan was validated for a different source size"
            )
        };
        resolve_all(&self.selectors, source)
    }
}

impl<const N: usize, const M: usize> FromStr for SwizzlePlan<N, M> {
    type Err = SwizzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const N: usize, const M: usize> fmt::Display for SwizzlePlan<N, M> {
    /// Formats the canonical pattern, e.g. `w10xyz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in &self.selectors {
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

impl<const N: usize, const M: usize> Serialize for SwizzlePlan<N, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, const N: usize, const M: usize> Deserialize<'de> for SwizzlePlan<N, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        pattern.parse().map_err(serde::de::Error::custom)
    }
}
