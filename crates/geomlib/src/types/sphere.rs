// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::PI;

use geomlib_math::{approx_eq, ApproxEq, Vec3};

use crate::Aabb;

/// Sphere given by a center and a radius; the 3D counterpart of
/// [`crate::Circle`].
///
/// The radius is expected to be non-negative and is not checked.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere from center coordinates and a radius.
    pub const fn new(x: f32, y: f32, z: f32, radius: f32) -> Self {
        Self {
            center: Vec3::new(x, y, z),
            radius,
        }
    }

    /// Creates a sphere from a center point and a radius.
    pub const fn from_center(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a sphere of the given radius centered on the origin.
    pub const fn from_radius(radius: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, radius)
    }

    /// Creates the sphere centered on `center` that passes through `surface`.
    ///
    /// # Examples
    /// ```
    /// use geomlib::Sphere;
    /// use geomlib_math::{approx_eq, Vec3};
    /// let s = Sphere::through_point(Vec3::ONE, &Vec3::splat(2.0));
    /// assert!(approx_eq(s.radius(), 3.0_f32.sqrt()));
    /// ```
    pub fn through_point(center: Vec3, surface: &Vec3) -> Self {
        Self::from_center(center, center.distance(surface))
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// `2 * radius`.
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// `radius * radius`.
    pub fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }

    /// Surface area `4πr²`.
    pub fn surface(&self) -> f32 {
        4.0 * PI * self.radius_squared()
    }

    /// Enclosed volume `4/3 πr³`.
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius_squared() * self.radius
    }

    /// Returns `true` if `point` is strictly inside the sphere.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.center.distance_squared(point) < self.radius_squared()
    }

    /// Returns `true` if `point` is inside the sphere or on its surface.
    pub fn contains_point_inclusive(&self, point: &Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius_squared()
    }

    /// Returns `true` if `point` lies on the surface within tolerance.
    pub fn is_point_on_surface(&self, point: &Vec3) -> bool {
        approx_eq(self.center.distance_squared(point), self.radius_squared())
    }

    /// Returns `true` if the interiors overlap; tangent spheres do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(&other.center) < self.radius + other.radius
    }

    /// Returns `true` if the spheres overlap or touch.
    pub fn intersects_inclusive(&self, other: &Self) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Self) -> bool {
        self.contains_point(&other.center)
            && self.radius - self.center.distance(&other.center) >= other.radius
    }

    /// Sphere centered on the midpoint of both centers with radius
    /// `(distance + r1 + r2) / 2`; see [`crate::Circle::merge`].
    pub fn merge(&self, other: &Self) -> Self {
        let distance = self.center.distance(&other.center);
        Self::from_center(
            (self.center + other.center) * 0.5,
            (distance + self.radius + other.radius) * 0.5,
        )
    }

    /// Axis-aligned cube of side `diameter` centered on `center`.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_position_size(self.center - Vec3::splat(self.radius), Vec3::splat(self.diameter()))
    }

    /// Same sphere moved by `offset`.
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self::from_center(self.center + *offset, self.radius)
    }
}

impl ApproxEq for Sphere {
    fn approx_eq(&self, other: &Self) -> bool {
        self.center.approx_eq(&other.center) && approx_eq(self.radius, other.radius)
    }
}
