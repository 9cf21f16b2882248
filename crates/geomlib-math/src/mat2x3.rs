// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{ApproxEq, Mat2, Vec2};

/// Affine map of the plane: a 2×2 linear part followed by a translation.
///
/// Stored column-major as three columns of two rows; the last column is the
/// translation. It behaves like a 3×3 homogeneous matrix whose bottom row is
/// `(0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x3 {
    data: [f32; 6],
}

impl Mat2x3 {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 6]) -> Self {
        Self { data }
    }

    /// Builds an affine map from a linear part and a translation.
    pub fn from_linear(linear: &Mat2, translation: Vec2) -> Self {
        let l = linear.to_array();
        Self::new([l[0], l[1], l[2], l[3], translation.x(), translation.y()])
    }

    /// Pure translation.
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: f32) -> Self {
        Self::from(Mat2::rotation(angle))
    }

    /// Non-uniform scale about the origin.
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 6] {
        self.data
    }

    /// The 2×2 linear part.
    pub fn linear(&self) -> Mat2 {
        Mat2::new([self.data[0], self.data[1], self.data[2], self.data[3]])
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.data[4], self.data[5])
    }

    /// Composes two affine maps (`self * rhs`): `rhs` is applied first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let linear = self.linear().multiply(&rhs.linear());
        let translation = self.transform_point(&rhs.translation_part());
        Self::from_linear(&linear, translation)
    }

    /// Transforms a point (translation applied).
    pub fn transform_point(&self, point: &Vec2) -> Vec2 {
        self.linear().transform(point) + self.translation_part()
    }

    /// Transforms a direction (translation ignored).
    pub fn transform_vector(&self, vector: &Vec2) -> Vec2 {
        self.linear().transform(vector)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        self.linear().determinant()
    }

    /// Inverse affine map. Singular linear parts yield infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let inv = self.linear().inverse();
        let translation = -inv.transform(&self.translation_part());
        Self::from_linear(&inv, translation)
    }
}

impl Default for Mat2x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Mat2x3 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.data.approx_eq(&other.data)
    }
}

impl From<Mat2> for Mat2x3 {
    fn from(value: Mat2) -> Self {
        Self::from_linear(&value, Vec2::ZERO)
    }
}

impl From<[f32; 6]> for Mat2x3 {
    fn from(value: [f32; 6]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat2x3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
