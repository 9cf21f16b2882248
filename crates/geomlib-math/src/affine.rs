// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Seams that let a shape accept any matrix of its dimension.
//!
//! 2D shapes take [`Affine2`] (`Mat2`, `Mat2x3`, `Mat3` read homogeneously);
//! 3D shapes take [`Affine3`] (`Mat3`, `Mat3x4`, `Mat4`). Method names carry
//! the dimension because `Mat3` implements both traits.

use crate::{Mat2, Mat2x3, Mat3, Mat3x4, Mat4, Vec2, Vec3};

/// An affine map of the plane.
pub trait Affine2: Copy {
    /// Maps a point (translation applied).
    fn transform_point2(&self, point: &Vec2) -> Vec2;

    /// Maps a direction (translation ignored).
    fn transform_vector2(&self, vector: &Vec2) -> Vec2;

    /// The inverse map. Singular maps yield infinite or NaN entries.
    fn affine_inverse2(&self) -> Self;
}

/// An affine map of space.
pub trait Affine3: Copy {
    /// Maps a point (translation applied).
    fn transform_point3(&self, point: &Vec3) -> Vec3;

    /// Maps a direction (translation ignored).
    fn transform_vector3(&self, vector: &Vec3) -> Vec3;

    /// The 3×3 linear part of the map.
    fn linear3(&self) -> Mat3;

    /// The inverse map. Singular maps yield infinite or NaN entries.
    fn affine_inverse3(&self) -> Self;
}

impl Affine2 for Mat2 {
    fn transform_point2(&self, point: &Vec2) -> Vec2 {
        self.transform(point)
    }

    fn transform_vector2(&self, vector: &Vec2) -> Vec2 {
        self.transform(vector)
    }

    fn affine_inverse2(&self) -> Self {
        self.inverse()
    }
}

impl Affine2 for Mat2x3 {
    fn transform_point2(&self, point: &Vec2) -> Vec2 {
        self.transform_point(point)
    }

    fn transform_vector2(&self, vector: &Vec2) -> Vec2 {
        self.transform_vector(vector)
    }

    fn affine_inverse2(&self) -> Self {
        self.inverse()
    }
}

/// Homogeneous reading: `(x, y, 1)` in, first two rows out, no divide.
impl Affine2 for Mat3 {
    fn transform_point2(&self, point: &Vec2) -> Vec2 {
        let p = self.transform(&Vec3::new(point.x(), point.y(), 1.0));
        Vec2::new(p.x(), p.y())
    }

    fn transform_vector2(&self, vector: &Vec2) -> Vec2 {
        let v = self.transform(&Vec3::new(vector.x(), vector.y(), 0.0));
        Vec2::new(v.x(), v.y())
    }

    fn affine_inverse2(&self) -> Self {
        self.inverse()
    }
}

/// Linear reading: no translation.
impl Affine3 for Mat3 {
    fn transform_point3(&self, point: &Vec3) -> Vec3 {
        self.transform(point)
    }

    fn transform_vector3(&self, vector: &Vec3) -> Vec3 {
        self.transform(vector)
    }

    fn linear3(&self) -> Mat3 {
        *self
    }

    fn affine_inverse3(&self) -> Self {
        self.inverse()
    }
}

impl Affine3 for Mat3x4 {
    fn transform_point3(&self, point: &Vec3) -> Vec3 {
        self.transform_point(point)
    }

    fn transform_vector3(&self, vector: &Vec3) -> Vec3 {
        self.transform_vector(vector)
    }

    fn linear3(&self) -> Mat3 {
        self.linear()
    }

    fn affine_inverse3(&self) -> Self {
        self.inverse()
    }
}

impl Affine3 for Mat4 {
    fn transform_point3(&self, point: &Vec3) -> Vec3 {
        self.transform_point(point)
    }

    fn transform_vector3(&self, vector: &Vec3) -> Vec3 {
        self.transform_direction(vector)
    }

    fn linear3(&self) -> Mat3 {
        self.linear()
    }

    fn affine_inverse3(&self) -> Self {
        self.inverse()
    }
}
