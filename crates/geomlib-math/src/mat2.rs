// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{is_zero_approx, ApproxEq, MathError, Vec2};

/// Column-major 2×2 matrix: a linear map of the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    data: [f32; 4],
}

impl Mat2 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 4]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its two columns (the images of the basis vectors).
    pub fn from_cols(x: Vec2, y: Vec2) -> Self {
        Self::new([x.x(), x.y(), y.x(), y.y()])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c])
    }

    /// Non-uniform scale.
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new([sx, 0.0, 0.0, sy])
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 2 + row]
    }

    /// Returns column `idx` (0 or 1).
    pub fn col(&self, idx: usize) -> Vec2 {
        Vec2::new(self.data[idx * 2], self.data[idx * 2 + 1])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 4];
        for row in 0..2 {
            for col in 0..2 {
                out[col * 2 + row] = self.at(row, 0) * rhs.at(0, col) + self.at(row, 1) * rhs.at(1, col);
            }
        }
        Self::new(out)
    }

    /// Applies the matrix to a vector.
    pub fn transform(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.at(0, 0) * v.x() + self.at(0, 1) * v.y(),
            self.at(1, 0) * v.x() + self.at(1, 1) * v.y(),
        )
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::new([self.data[0], self.data[2], self.data[1], self.data[3]])
    }

    /// Determinant.
    pub fn determinant(&self) -> f32 {
        self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)
    }

    /// Inverse matrix. A singular matrix yields infinite or NaN entries; use
    /// [`Mat2::try_inverse`] to detect that case.
    pub fn inverse(&self) -> Self {
        let inv_det = 1.0 / self.determinant();
        Self::new([
            self.at(1, 1) * inv_det,
            -self.at(1, 0) * inv_det,
            -self.at(0, 1) * inv_det,
            self.at(0, 0) * inv_det,
        ])
    }

    /// Inverse matrix, or [`MathError::Singular`] when the determinant is ~0.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if is_zero_approx(determinant) {
            tracing::debug!(determinant, "Mat2 inverse rejected: singular matrix");
            return Err(MathError::Singular { determinant });
        }
        Ok(self.inverse())
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Mat2 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.data.approx_eq(&other.data)
    }
}

impl From<[f32; 4]> for Mat2 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Self::Output {
        self.transform(&rhs)
    }
}
