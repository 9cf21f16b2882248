// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geomlib_math::{Affine3, ApproxEq, Vec3};

use crate::{GeomError, Plane, Sphere};

/// Axis-aligned box stored as a position and a signed size.
///
/// Invariants:
/// - None enforced. Size components may be negative; the extents
///   (`left`/`right` on X, `bottom`/`top` on Y, `front`/`back` on Z) are
///   resolved with `min`/`max`.
/// - Values are `f32`.
///
/// Derived boxes (`intersection`, `merge`, `expand_to`, `transform`) are
/// normalised to a non-negative size.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    position: Vec3,
    size: Vec3,
}

impl Aabb {
    /// The canonical empty box: zero position and size.
    pub const EMPTY: Self = Self::from_position_size(Vec3::ZERO, Vec3::ZERO);

    /// Creates a box from position and size components.
    pub const fn new(x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self::from_position_size(Vec3::new(x, y, z), Vec3::new(width, height, depth))
    }

    /// Creates a box from a position and a size vector.
    pub const fn from_position_size(position: Vec3, size: Vec3) -> Self {
        Self { position, size }
    }

    /// Creates a box of the given size at the origin.
    pub const fn from_size(width: f32, height: f32, depth: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, width, height, depth)
    }

    /// Builds the box spanned by two opposite corners, in any order.
    pub fn from_points(p1: Vec3, p2: Vec3) -> Self {
        Self::from_min_max(p1.min(&p2), p1.max(&p2))
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::from_min_max(center - he, center + he)
    }

    /// Smallest box containing every point; `None` for an empty slice.
    pub fn enclosing(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }

    fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::from_position_size(min, max - min)
    }

    /// The stored corner.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The stored signed size `(width, height, depth)`.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// `position + size`: the corner opposite to `position`.
    pub fn end(&self) -> Vec3 {
        self.position + self.size
    }

    /// Corner with the smallest coordinate on every axis.
    pub fn min(&self) -> Vec3 {
        self.position.min(&self.end())
    }

    /// Corner with the largest coordinate on every axis.
    pub fn max(&self) -> Vec3 {
        self.position.max(&self.end())
    }

    /// `position + size / 2`.
    pub fn center(&self) -> Vec3 {
        self.position + self.size * 0.5
    }

    /// Smallest x coordinate covered by the box.
    pub fn left(&self) -> f32 {
        self.min().x()
    }

    /// Largest x coordinate covered by the box.
    pub fn right(&self) -> f32 {
        self.max().x()
    }

    /// Smallest y coordinate covered by the box.
    pub fn bottom(&self) -> f32 {
        self.min().y()
    }

    /// Largest y coordinate covered by the box.
    pub fn top(&self) -> f32 {
        self.max().y()
    }

    /// Smallest z coordinate covered by the box.
    pub fn front(&self) -> f32 {
        self.min().z()
    }

    /// Largest z coordinate covered by the box.
    pub fn back(&self) -> f32 {
        self.max().z()
    }

    /// Signed volume `width * height * depth`.
    pub fn volume(&self) -> f32 {
        self.size.x() * self.size.y() * self.size.z()
    }

    /// Total area of the six faces, ignoring size signs.
    pub fn surface_area(&self) -> f32 {
        let [w, h, d] = self.size.abs().to_array();
        2.0 * (w * h + w * d + h * d)
    }

    /// Returns `true` if every side is non-zero.
    #[allow(clippy::float_cmp)]
    pub fn has_volume(&self) -> bool {
        self.size.to_array().iter().all(|c| *c != 0.0)
    }

    /// Returns `true` if at least one side is non-zero.
    #[allow(clippy::float_cmp)]
    pub fn has_surface(&self) -> bool {
        self.size.to_array().iter().any(|c| *c != 0.0)
    }

    /// Unit vector of the axis with the longest side; X wins ties, then Y.
    pub fn longest_axis(&self) -> Vec3 {
        let [w, h, d] = self.size.abs().to_array();
        if w >= h && w >= d {
            Vec3::UNIT_X
        } else if h >= d {
            Vec3::UNIT_Y
        } else {
            Vec3::UNIT_Z
        }
    }

    /// Length of the longest side.
    pub fn longest_axis_length(&self) -> f32 {
        let [w, h, d] = self.size.abs().to_array();
        w.max(h).max(d)
    }

    /// Unit vector of the axis with the shortest side; X wins ties, then Y.
    pub fn shortest_axis(&self) -> Vec3 {
        let [w, h, d] = self.size.abs().to_array();
        if w <= h && w <= d {
            Vec3::UNIT_X
        } else if h <= d {
            Vec3::UNIT_Y
        } else {
            Vec3::UNIT_Z
        }
    }

    /// Length of the shortest side.
    pub fn shortest_axis_length(&self) -> f32 {
        let [w, h, d] = self.size.abs().to_array();
        w.min(h).min(d)
    }

    /// The eight corners. Bit 0 of the index picks the X extent, bit 1 the
    /// Y extent and bit 2 the Z extent (clear = min, set = max).
    pub fn vertices(&self) -> [Vec3; 8] {
        let lo = self.min();
        let hi = self.max();
        core::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { lo.x() } else { hi.x() },
                if i & 2 == 0 { lo.y() } else { hi.y() },
                if i & 4 == 0 { lo.z() } else { hi.z() },
            )
        })
    }

    /// Outward plane of the `x = left` face.
    pub fn left_plane(&self) -> Plane {
        Plane::from_normal_d(-Vec3::UNIT_X, -self.left())
    }

    /// Outward plane of the `x = right` face.
    pub fn right_plane(&self) -> Plane {
        Plane::from_normal_d(Vec3::UNIT_X, self.right())
    }

    /// Outward plane of the `y = bottom` face.
    pub fn bottom_plane(&self) -> Plane {
        Plane::from_normal_d(-Vec3::UNIT_Y, -self.bottom())
    }

    /// Outward plane of the `y = top` face.
    pub fn top_plane(&self) -> Plane {
        Plane::from_normal_d(Vec3::UNIT_Y, self.top())
    }

    /// Outward plane of the `z = front` face.
    pub fn front_plane(&self) -> Plane {
        Plane::from_normal_d(-Vec3::UNIT_Z, -self.front())
    }

    /// Outward plane of the `z = back` face.
    pub fn back_plane(&self) -> Plane {
        Plane::from_normal_d(Vec3::UNIT_Z, self.back())
    }

    /// The six face planes in the order left, right, bottom, top, front, back.
    pub fn planes(&self) -> [Plane; 6] {
        [
            self.left_plane(),
            self.right_plane(),
            self.bottom_plane(),
            self.top_plane(),
            self.front_plane(),
            self.back_plane(),
        ]
    }

    /// Returns `true` if `point` lies strictly inside the box.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let lo = self.min().to_array();
        let hi = self.max().to_array();
        let p = point.to_array();
        (0..3).all(|i| p[i] > lo[i] && p[i] < hi[i])
    }

    /// Returns `true` if `point` lies inside the box or on a face.
    pub fn contains_point_inclusive(&self, point: &Vec3) -> bool {
        let lo = self.min().to_array();
        let hi = self.max().to_array();
        let p = point.to_array();
        (0..3).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
    }

    /// Returns `true` if the interiors overlap; touching faces do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        let (a_lo, a_hi) = (self.min().to_array(), self.max().to_array());
        let (b_lo, b_hi) = (other.min().to_array(), other.max().to_array());
        (0..3).all(|i| a_lo[i] < b_hi[i] && a_hi[i] > b_lo[i])
    }

    /// Returns `true` if the boxes overlap or touch.
    pub fn intersects_inclusive(&self, other: &Self) -> bool {
        let (a_lo, a_hi) = (self.min().to_array(), self.max().to_array());
        let (b_lo, b_hi) = (other.min().to_array(), other.max().to_array());
        (0..3).all(|i| a_lo[i] <= b_hi[i] && a_hi[i] >= b_lo[i])
    }

    /// Returns `true` if some corners lie strictly on each side of `plane`.
    ///
    /// A box merely touching the plane does not count.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let vertices = self.vertices();
        let over = vertices.iter().any(|v| plane.is_point_over(v));
        let under = vertices.iter().any(|v| plane.normal().dot(v) < plane.d());
        over && under
    }

    /// The overlapping region, normalised; [`Aabb::EMPTY`] when the boxes
    /// neither overlap nor touch.
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects_inclusive(other) {
            return Self::EMPTY;
        }
        Self::from_min_max(self.min().max(&other.min()), self.max().min(&other.max()))
    }

    /// Returns `true` if `other` lies entirely inside `self` (faces allowed).
    pub fn encloses(&self, other: &Self) -> bool {
        let (a_lo, a_hi) = (self.min().to_array(), self.max().to_array());
        let (b_lo, b_hi) = (other.min().to_array(), other.max().to_array());
        (0..3).all(|i| a_lo[i] <= b_lo[i] && a_hi[i] >= b_hi[i])
    }

    // Entry and exit parameters of the line `point + t * direction` through
    // the three slabs.
    fn slab(&self, point: &Vec3, direction: &Vec3) -> (f32, f32) {
        let t1 = (self.position - *point).div_elem(direction);
        let t2 = (self.end() - *point).div_elem(direction);
        let near = t1.min(&t2);
        let far = t1.max(&t2);
        (
            near.x().max(near.y()).max(near.z()),
            far.x().min(far.y()).min(far.z()),
        )
    }

    /// Returns `true` if the infinite line through `point` along `direction`
    /// touches the box.
    pub fn intersects_line(&self, point: &Vec3, direction: &Vec3) -> bool {
        let (entry, exit) = self.slab(point, direction);
        entry <= exit
    }

    /// First point where the line `point + t * direction` enters the box
    /// (smallest `t`, which may be negative).
    ///
    /// Returns [`Vec3::NAN`] when the line misses.
    pub fn line_intersection(&self, point: &Vec3, direction: &Vec3) -> Vec3 {
        let (entry, exit) = self.slab(point, direction);
        if entry <= exit {
            *point + direction.scale(entry)
        } else {
            Vec3::NAN
        }
    }

    /// Checked [`Aabb::line_intersection`].
    pub fn try_line_intersection(&self, point: &Vec3, direction: &Vec3) -> Result<Vec3, GeomError> {
        let hit = self.line_intersection(point, direction);
        if hit.is_nan() {
            tracing::debug!(?point, ?direction, aabb = ?self, "line misses box");
            return Err(GeomError::NoIntersection);
        }
        Ok(hit)
    }

    /// Same region with a non-negative size, positioned at the min corner.
    pub fn abs(&self) -> Self {
        Self::from_min_max(self.min(), self.max())
    }

    /// Moves each face outwards by its own amount (negative amounts move it
    /// inwards). Acts on the resolved extents like [`crate::Rect2::grow_sides`];
    /// shrinking past zero yields a negative size.
    #[allow(clippy::too_many_arguments)]
    pub fn grow_sides(
        &self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        front: f32,
        back: f32,
    ) -> Self {
        Self::from_min_max(
            self.min() - Vec3::new(left, bottom, front),
            self.max() + Vec3::new(right, top, back),
        )
    }

    /// Moves every face outwards by `amount`.
    pub fn grow(&self, amount: f32) -> Self {
        self.grow_sides(amount, amount, amount, amount, amount, amount)
    }

    /// Smallest normalised box covering `self` and `point`.
    pub fn expand_to(&self, point: &Vec3) -> Self {
        Self::from_min_max(self.min().min(point), self.max().max(point))
    }

    /// Smallest normalised box covering both boxes.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_min_max(self.min().min(&other.min()), self.max().max(&other.max()))
    }

    /// Same box moved by `offset`.
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self::from_position_size(self.position + *offset, self.size)
    }

    /// Sphere centered on the box center that passes through `position`.
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::through_point(self.center(), &self.position)
    }

    /// Corner furthest along `direction`. Zero components pick the center
    /// coordinate on that axis.
    pub fn support(&self, direction: &Vec3) -> Vec3 {
        self.center() + (self.size.abs() * 0.5).mul_elem(&direction.sign())
    }

    /// Bounding box of `self` after the affine map `matrix`.
    ///
    /// The position and the three edge vectors are mapped; the transformed
    /// parallelepiped is bounded by adding the negative parts of the edges to
    /// the mapped position (min corner) and the positive parts (max corner).
    /// Accepts [`geomlib_math::Mat3`], [`geomlib_math::Mat3x4`] and
    /// [`geomlib_math::Mat4`].
    ///
    /// Under rotation or shear this is the bound of all eight mapped corners,
    /// not `from_points` over the two mapped diagonal corners.
    pub fn transform<M: Affine3>(&self, matrix: &M) -> Self {
        let origin = matrix.transform_point3(&self.position);
        let [w, h, d] = self.size.to_array();
        let edges = [
            matrix.transform_vector3(&Vec3::new(w, 0.0, 0.0)),
            matrix.transform_vector3(&Vec3::new(0.0, h, 0.0)),
            matrix.transform_vector3(&Vec3::new(0.0, 0.0, d)),
        ];
        let (min, max) = edges.iter().fold((origin, origin), |(min, max), e| {
            (min + e.min(&Vec3::ZERO), max + e.max(&Vec3::ZERO))
        });
        Self::from_min_max(min, max)
    }

    /// Bounding box of `self` after the inverse of `matrix`.
    pub fn inverse_transform<M: Affine3>(&self, matrix: &M) -> Self {
        self.transform(&matrix.affine_inverse3())
    }

    /// Returns `true` if both boxes cover the same region within tolerance.
    pub fn is_congruent_to(&self, other: &Self) -> bool {
        self.min().approx_eq(&other.min()) && self.max().approx_eq(&other.max())
    }
}

/// Field-wise tolerance comparison; see [`Aabb::is_congruent_to`] for the
/// region comparison.
impl ApproxEq for Aabb {
    fn approx_eq(&self, other: &Self) -> bool {
        self.position.approx_eq(&other.position) && self.size.approx_eq(&other.size)
    }
}
