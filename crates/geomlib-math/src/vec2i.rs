// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Vec2;

/// 2D vector with `i32` components, used by integer rectangles.
///
/// Arithmetic operators wrap on overflow in every build profile, so sums near
/// the `i32` limits never abort. Division truncates toward zero and still
/// panics on a zero divisor, like `i32 / i32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2i {
    data: [i32; 2],
}

impl Vec2i {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [i32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> i32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> i32 {
        self.data[1]
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.data[0].min(other.data[0]), self.data[1].min(other.data[1]))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.data[0].max(other.data[0]), self.data[1].max(other.data[1]))
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.data[0].wrapping_abs(), self.data[1].wrapping_abs())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> i32 {
        self.data[0]
            .wrapping_mul(other.data[0])
            .wrapping_add(self.data[1].wrapping_mul(other.data[1]))
    }

    /// Widens to a float vector.
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::from(*self)
    }
}

impl From<[i32; 2]> for Vec2i {
    fn from(value: [i32; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec2i {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.data[0].wrapping_add(rhs.data[0]),
            self.data[1].wrapping_add(rhs.data[1]),
        )
    }
}

impl Sub for Vec2i {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.data[0].wrapping_sub(rhs.data[0]),
            self.data[1].wrapping_sub(rhs.data[1]),
        )
    }
}

impl Mul<i32> for Vec2i {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.data[0].wrapping_mul(rhs), self.data[1].wrapping_mul(rhs))
    }
}

/// Integer division truncating toward zero, like `i32 / i32`.
impl Div<i32> for Vec2i {
    type Output = Self;
    fn div(self, rhs: i32) -> Self::Output {
        Self::new(self.data[0].wrapping_div(rhs), self.data[1].wrapping_div(rhs))
    }
}

impl Neg for Vec2i {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(self.data[0].wrapping_neg(), self.data[1].wrapping_neg())
    }
}
