// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::PI;

use geomlib_math::{approx_eq, is_zero_approx, ApproxEq, Vec2};

use crate::{GeomError, Rect2};

/// Circle given by a center and a radius.
///
/// The radius is expected to be non-negative; this is not checked and the
/// predicates give meaningless answers for negative radii.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    /// Creates a circle from center coordinates and a radius.
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Creates a circle from a center point and a radius.
    pub fn from_center(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a circle of the given radius centered on the origin.
    pub const fn from_radius(radius: f32) -> Self {
        Self::new(0.0, 0.0, radius)
    }

    /// Creates the circle centered on `center` that passes through `surface`.
    pub fn through_point(center: Vec2, surface: &Vec2) -> Self {
        Self::from_center(center, center.distance(surface))
    }

    /// Circumscribed circle of three points.
    ///
    /// The center is where the perpendicular bisectors of the chords `a-b`
    /// and `b-c` meet. Collinear points have no such intersection and produce
    /// a circle with non-finite components; [`Circle::try_from_points`]
    /// rejects them instead.
    pub fn from_points(a: &Vec2, b: &Vec2, c: &Vec2) -> Self {
        let mid_ab = (*a + *b).scale(0.5);
        let mid_bc = (*b + *c).scale(0.5);
        let dir_ab = (*b - *a).orthogonal();
        let dir_bc = (*c - *b).orthogonal();
        let t = (mid_bc - mid_ab).cross(&dir_bc) / dir_ab.cross(&dir_bc);
        let center = mid_ab + dir_ab.scale(t);
        Self::through_point(center, a)
    }

    /// Checked [`Circle::from_points`].
    pub fn try_from_points(a: &Vec2, b: &Vec2, c: &Vec2) -> Result<Self, GeomError> {
        let twice_area = (*b - *a).cross(&(*c - *a));
        if is_zero_approx(twice_area) {
            tracing::debug!(?a, ?b, ?c, twice_area, "circle through collinear points");
            return Err(GeomError::CollinearPoints);
        }
        Ok(Self::from_points(a, b, c))
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
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

    /// Perimeter length `2πr`.
    pub fn circumference(&self) -> f32 {
        2.0 * PI * self.radius
    }

    /// Enclosed area `πr²`.
    pub fn area(&self) -> f32 {
        PI * self.radius_squared()
    }

    /// Returns `true` if `point` is strictly inside the circle.
    pub fn contains_point(&self, point: &Vec2) -> bool {
        self.center.distance_squared(point) < self.radius_squared()
    }

    /// Returns `true` if `point` is inside the circle or on its boundary.
    pub fn contains_point_inclusive(&self, point: &Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius_squared()
    }

    /// Returns `true` if `point` lies on the boundary within tolerance.
    pub fn is_point_on_surface(&self, point: &Vec2) -> bool {
        approx_eq(self.center.distance_squared(point), self.radius_squared())
    }

    /// Returns `true` if the interiors overlap; tangent circles do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(&other.center) < self.radius + other.radius
    }

    /// Returns `true` if the circles overlap or touch.
    pub fn intersects_inclusive(&self, other: &Self) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Self) -> bool {
        self.contains_point(&other.center)
            && self.radius - self.center.distance(&other.center) >= other.radius
    }

    /// Circle centered on the midpoint of both centers with radius
    /// `(distance + r1 + r2) / 2`.
    ///
    /// For equal radii this is the smallest circle enclosing both. For unequal
    /// radii the result stays centered on the midpoint and can leave part of
    /// the larger circle uncovered.
    pub fn merge(&self, other: &Self) -> Self {
        let distance = self.center.distance(&other.center);
        Self::from_center(
            (self.center + other.center).scale(0.5),
            (distance + self.radius + other.radius) * 0.5,
        )
    }

    /// Axis-aligned square of side `diameter` centered on `center`.
    pub fn bounding_rect(&self) -> Rect2 {
        Rect2::new(
            self.center.x() - self.radius,
            self.center.y() - self.radius,
            self.diameter(),
            self.diameter(),
        )
    }

    /// Same circle moved by `offset`.
    pub fn translated(&self, offset: &Vec2) -> Self {
        Self::from_center(self.center + *offset, self.radius)
    }
}

impl ApproxEq for Circle {
    fn approx_eq(&self, other: &Self) -> bool {
        self.center.approx_eq(&other.center) && approx_eq(self.radius, other.radius)
    }
}
