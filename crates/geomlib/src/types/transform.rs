// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geomlib_math::{Affine3, Mat3, Mat3x4, Mat4, Quat, Vec3};

/// Translation, rotation and non-uniform scale, composed as `T * R * S`.
///
/// Conventions:
/// - `rotation` as a unit quaternion (normalized internally when converting).
/// - `scale` is applied first, then rotation, then translation.
///
/// The 3D shapes take matrices, not transforms; convert with
/// [`Transform::to_mat4`] or [`Transform::to_mat3x4`]. Negative scales are
/// supported and flip handedness.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity(), Vec3::ONE)
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Same transform with a different translation.
    pub fn with_translation(&self, translation: Vec3) -> Self {
        Self::new(translation, self.rotation, self.scale)
    }

    /// The linear part `R * S`.
    pub fn linear(&self) -> Mat3 {
        let [sx, sy, sz] = self.scale.to_array();
        self.rotation.to_mat3().multiply(&Mat3::scaling(sx, sy, sz))
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    pub fn to_mat4(&self) -> Mat4 {
        // M = T * R * S (column-major)
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        let s = Mat4::scaling(sx, sy, sz);
        let r = self.rotation.to_mat4();
        let t = Mat4::translation(tx, ty, tz);
        t.multiply(&r).multiply(&s)
    }

    /// Returns the affine `Mat3x4` corresponding to this transform.
    pub fn to_mat3x4(&self) -> Mat3x4 {
        Mat3x4::from_linear(&self.linear(), self.translation)
    }

    /// Maps a point: scale, rotate, then translate.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.to_mat3x4().transform_point3(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform> for Mat4 {
    fn from(value: Transform) -> Self {
        value.to_mat4()
    }
}

impl From<Transform> for Mat3x4 {
    fn from(value: Transform) -> Self {
        value.to_mat3x4()
    }
}
