// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{is_zero_approx, ApproxEq, MathError, Quat, Vec3};

/// Column-major 3×3 matrix.
///
/// Two readings coexist:
/// - a linear map of space (used by 3D shapes and as the linear part of
///   [`crate::Mat3x4`] and [`crate::Mat4`]);
/// - a homogeneous transform of the plane whose last column holds the 2D
///   translation (used by 2D shapes through [`crate::Affine2`]).
///
/// # Examples
/// ```
/// use geomlib_math::{Mat3, Vec3};
/// let s = Mat3::scaling(2.0, 3.0, 4.0);
/// assert_eq!(s.transform(&Vec3::ONE).to_array(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f32; 9],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, // col 1
            0.0, 0.0, 1.0, // col 2
        ])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from its three columns.
    pub fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        let [x0, x1, x2] = x.to_array();
        let [y0, y1, y2] = y.to_array();
        let [z0, z1, z2] = z.to_array();
        Self::new([x0, x1, x2, y0, y1, y2, z0, z1, z2])
    }

    /// Creates a matrix from its three rows.
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    /// Non-uniform scale.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, sz, //
        ])
    }

    /// 2D homogeneous translation: the last column is `(tx, ty, 1)`.
    pub const fn translation_2d(tx: f32, ty: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            tx, ty, 1.0, //
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c, //
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c, //
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    ///
    /// Read as a 2D homogeneous matrix this is a plane rotation about the
    /// origin.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation from an axis and angle in radians; a zero-length
    /// axis yields the identity.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Quat::from_axis_angle(axis, angle).to_mat3()
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 3 + row]
    }

    /// Returns column `idx` (0, 1 or 2).
    pub fn col(&self, idx: usize) -> Vec3 {
        Vec3::new(self.data[idx * 3], self.data[idx * 3 + 1], self.data[idx * 3 + 2])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Applies the matrix to a vector.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        let x = v.component(0);
        let y = v.component(1);
        let z = v.component(2);
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant (scalar triple product of the columns).
    pub fn determinant(&self) -> f32 {
        self.col(0).dot(&self.col(1).cross(&self.col(2)))
    }

    /// Inverse matrix via the adjugate. A singular matrix yields infinite or
    /// NaN entries; use [`Mat3::try_inverse`] to detect that case.
    pub fn inverse(&self) -> Self {
        let a = self.col(0);
        let b = self.col(1);
        let c = self.col(2);
        let inv_det = 1.0 / a.dot(&b.cross(&c));
        Self::from_rows(
            b.cross(&c).scale(inv_det),
            c.cross(&a).scale(inv_det),
            a.cross(&b).scale(inv_det),
        )
    }

    /// Inverse matrix, or [`MathError::Singular`] when the determinant is ~0.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if is_zero_approx(determinant) {
            tracing::debug!(determinant, "Mat3 inverse rejected: singular matrix");
            return Err(MathError::Singular { determinant });
        }
        Ok(self.inverse())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Mat3 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.data.approx_eq(&other.data)
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform(&rhs)
    }
}
