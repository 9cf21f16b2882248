// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{ApproxEq, Mat3, Mat4, Vec3};

/// Affine map of space: a 3×3 linear part followed by a translation.
///
/// Stored column-major as four columns of three rows; the last column is the
/// translation. Equivalent to a [`Mat4`] whose bottom row is `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x4 {
    data: [f32; 12],
}

impl Mat3x4 {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::translation(0.0, 0.0, 0.0)
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 12]) -> Self {
        Self { data }
    }

    /// Builds an affine map from a linear part and a translation.
    pub fn from_linear(linear: &Mat3, translation: Vec3) -> Self {
        let l = linear.to_array();
        let [tx, ty, tz] = translation.to_array();
        Self::new([l[0], l[1], l[2], l[3], l[4], l[5], l[6], l[7], l[8], tx, ty, tz])
    }

    /// Pure translation.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, // col 1
            0.0, 0.0, 1.0, // col 2
            tx, ty, tz, // col 3 (translation)
        ])
    }

    /// Non-uniform scale about the origin.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, sz, //
            0.0, 0.0, 0.0, //
        ])
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 12] {
        self.data
    }

    /// The 3×3 linear part.
    pub fn linear(&self) -> Mat3 {
        let d = &self.data;
        Mat3::new([d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8]])
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.data[9], self.data[10], self.data[11])
    }

    /// Composes two affine maps (`self * rhs`): `rhs` is applied first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let linear = self.linear().multiply(&rhs.linear());
        let translation = self.transform_point(&rhs.translation_part());
        Self::from_linear(&linear, translation)
    }

    /// Transforms a point (translation applied).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.linear().transform(point) + self.translation_part()
    }

    /// Transforms a direction (translation ignored).
    pub fn transform_vector(&self, vector: &Vec3) -> Vec3 {
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

impl Default for Mat3x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Mat3x4 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.data.approx_eq(&other.data)
    }
}

impl From<Mat3> for Mat3x4 {
    fn from(value: Mat3) -> Self {
        Self::from_linear(&value, Vec3::ZERO)
    }
}

/// Drops the projective bottom row of a 4×4 matrix.
impl From<Mat4> for Mat3x4 {
    fn from(value: Mat4) -> Self {
        Self::from_linear(&value.linear(), value.translation_part())
    }
}

impl From<[f32; 12]> for Mat3x4 {
    fn from(value: [f32; 12]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat3x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
