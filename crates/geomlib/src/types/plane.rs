// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Neg;

use geomlib_math::{approx_eq, is_zero_approx, Affine3, ApproxEq, Vec3};

use crate::GeomError;

/// Infinite plane `normal · p = d`.
///
/// The normal is not required to be unit length, which splits the queries
/// in two groups:
/// - [`Plane::distance_to`], [`Plane::project`] and [`Plane::is_congruent_to`]
///   divide by `|normal|` and do not depend on its length.
/// - [`Plane::contains_point`] and [`Plane::is_point_over`] compare
///   `normal · p` against the raw `d`; they are exact for unit normals and
///   scale with the normal otherwise.
///
/// A zero normal is not rejected; the queries then produce NaN or
/// meaningless answers.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Creates the plane `a*x + b*y + c*z = d`.
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::from_normal_d(Vec3::new(a, b, c), d)
    }

    /// Creates a plane from its normal and distance term.
    pub const fn from_normal_d(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane with the given normal passing through `point`.
    pub fn from_normal_point(normal: Vec3, point: &Vec3) -> Self {
        Self::from_normal_d(normal, normal.dot(point))
    }

    /// Plane through three points with normal `(p1 - p2) × (p1 - p3)`.
    ///
    /// Collinear points give a zero normal.
    pub fn from_points(p1: &Vec3, p2: &Vec3, p3: &Vec3) -> Self {
        let normal = (*p1 - *p2).cross(&(*p1 - *p3));
        Self::from_normal_point(normal, p1)
    }

    /// The normal as stored.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// The distance term as stored.
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Signed distance from the plane to `point`, positive on the side the
    /// normal points to.
    pub fn distance_to(&self, point: &Vec3) -> f32 {
        (self.normal.dot(point) - self.d) / self.normal.length()
    }

    /// Same plane facing the other way: normal and `d` negated.
    pub fn flip(&self) -> Self {
        Self::from_normal_d(-self.normal, -self.d)
    }

    /// Returns `true` if `normal · point ≈ d`.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        approx_eq(self.normal.dot(point), self.d)
    }

    /// Returns `true` if `normal · point > d`.
    pub fn is_point_over(&self, point: &Vec3) -> bool {
        self.normal.dot(point) > self.d
    }

    /// Returns `true` if the line through `point` along `direction` meets
    /// the plane: it starts on the plane or is not parallel to it.
    pub fn intersects_line(&self, point: &Vec3, direction: &Vec3) -> bool {
        self.contains_point(point) || !is_zero_approx(self.normal.dot(direction))
    }

    /// Point where the line through `point` along `direction` meets the
    /// plane; `point` itself when it already lies on the plane.
    ///
    /// A line parallel to the plane and off it divides by zero and yields
    /// infinite or NaN components; check [`Plane::intersects_line`] first or
    /// use [`Plane::try_line_intersection`].
    pub fn line_intersection(&self, point: &Vec3, direction: &Vec3) -> Vec3 {
        if self.contains_point(point) {
            return *point;
        }
        let t = -(self.normal.dot(point) - self.d) / self.normal.dot(direction);
        *point + direction.scale(t)
    }

    /// Checked [`Plane::line_intersection`].
    pub fn try_line_intersection(&self, point: &Vec3, direction: &Vec3) -> Result<Vec3, GeomError> {
        if !self.intersects_line(point, direction) {
            tracing::debug!(?point, ?direction, plane = ?self, "line parallel to plane");
            return Err(GeomError::ParallelLine);
        }
        Ok(self.line_intersection(point, direction))
    }

    /// Returns `true` if both normals point along the same line, in either
    /// direction.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        is_zero_approx(self.normal.cross(&other.normal).length_squared())
    }

    /// Returns `true` if both planes describe the same set of points, even
    /// when they face opposite ways or their normals differ in length.
    pub fn is_congruent_to(&self, other: &Self) -> bool {
        self.is_parallel_to(other)
            && approx_eq(
                (self.d / self.normal.length()).abs(),
                (other.d / other.normal.length()).abs(),
            )
    }

    /// Returns `true` unless the planes are parallel and distinct.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_parallel_to(other) || self.is_congruent_to(other)
    }

    /// Returns `true` if `self`, `p1` and `p2` meet in exactly one point,
    /// i.e. their normals are linearly independent.
    pub fn intersects_in_point(&self, p1: &Self, p2: &Self) -> bool {
        !is_zero_approx(self.triple_product(p1, p2))
    }

    fn triple_product(&self, p1: &Self, p2: &Self) -> f32 {
        self.normal.cross(&p1.normal).dot(&p2.normal)
    }

    /// The common point of three planes.
    ///
    /// Solves the 3×3 system in closed form; when the normals are dependent
    /// the denominator vanishes and the components are infinite or NaN.
    /// Check [`Plane::intersects_in_point`] first or use
    /// [`Plane::try_intersection`].
    ///
    /// # Examples
    /// ```
    /// use geomlib::Plane;
    /// use geomlib_math::{ApproxEq, Vec3};
    /// let p = Plane::new(1.0, 2.0, 1.0, 1.0)
    ///     .intersection(&Plane::new(2.0, 1.0, 1.0, 1.0), &Plane::new(1.0, 1.0, 2.0, 1.0));
    /// assert!(p.approx_eq(&Vec3::splat(0.25)));
    /// ```
    pub fn intersection(&self, p1: &Self, p2: &Self) -> Vec3 {
        let n0 = self.normal;
        let n1 = p1.normal;
        let n2 = p2.normal;
        let numerator = n1.cross(&n2) * self.d + n2.cross(&n0) * p1.d + n0.cross(&n1) * p2.d;
        numerator / self.triple_product(p1, p2)
    }

    /// Checked [`Plane::intersection`].
    pub fn try_intersection(&self, p1: &Self, p2: &Self) -> Result<Vec3, GeomError> {
        let triple_product = self.triple_product(p1, p2);
        if is_zero_approx(triple_product) {
            tracing::debug!(plane = ?self, ?p1, ?p2, triple_product, "planes do not meet in a point");
            return Err(GeomError::DegeneratePlanes { triple_product });
        }
        Ok(self.intersection(p1, p2))
    }

    /// Orthogonal projection of `point` onto the plane.
    ///
    /// Moves `point` by its signed distance along the stored normal, so the
    /// result lies on the plane only when the normal is unit length.
    pub fn project(&self, point: &Vec3) -> Vec3 {
        *point - self.normal * self.distance_to(point)
    }

    /// Same plane moved by `offset`.
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self::from_normal_d(self.normal, self.d + self.normal.dot(offset))
    }

    /// Image of the plane under the affine map `matrix`.
    ///
    /// The normal is a co-vector and is mapped by the inverse transpose of
    /// the linear part; the point `normal * d` is mapped by `matrix` itself
    /// and the new `d` is recomputed through it. Accepts
    /// [`geomlib_math::Mat3`], [`geomlib_math::Mat3x4`] and
    /// [`geomlib_math::Mat4`].
    pub fn transform<M: Affine3>(&self, matrix: &M) -> Self {
        let normal = matrix.linear3().inverse().transpose().transform(&self.normal);
        let point = matrix.transform_point3(&(self.normal * self.d));
        Self::from_normal_point(normal, &point)
    }

    /// Image of the plane under the inverse of `matrix`.
    ///
    /// The normal is mapped by the transpose of the linear part (the inverse
    /// transpose of the inverse), the point `normal * d` by the inverse map.
    pub fn inverse_transform<M: Affine3>(&self, matrix: &M) -> Self {
        let normal = matrix.linear3().transpose().transform(&self.normal);
        let point = matrix.affine_inverse3().transform_point3(&(self.normal * self.d));
        Self::from_normal_point(normal, &point)
    }
}

/// Compares normal and `d` directly; a flipped or rescaled plane is
/// congruent but not approximately equal.
impl ApproxEq for Plane {
    fn approx_eq(&self, other: &Self) -> bool {
        self.normal.approx_eq(&other.normal) && approx_eq(self.d, other.d)
    }
}

impl Neg for Plane {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.flip()
    }
}
