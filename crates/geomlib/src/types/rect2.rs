// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geomlib_math::{approx_eq, Affine2, ApproxEq, Vec2};

use crate::{GeomError, Rect2i};

/// Axis-aligned rectangle stored as a position and a signed size.
///
/// Invariants:
/// - None enforced. `width`/`height` may be negative; the extents
///   (`left`, `right`, `bottom`, `top`) are resolved with `min`/`max`.
/// - `y` grows upwards: `bottom <= top`.
///
/// Derived rectangles (`intersection`, `merge`, `expand_to`, `transform`)
/// are normalised to a non-negative size.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2 {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect2 {
    /// The canonical empty rectangle `(0, 0, 0, 0)`.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a rectangle from its position and size components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position and a size vector.
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x(), position.y(), size.x(), size.y())
    }

    /// Creates a rectangle of the given size at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Builds the rectangle spanned by two opposite corners, in any order.
    ///
    /// The result always has a non-negative size.
    pub fn from_points(p1: Vec2, p2: Vec2) -> Self {
        let min = p1.min(&p2);
        let max = p1.max(&p2);
        Self::from_position_size(min, max - min)
    }

    fn from_extents(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self::new(left, bottom, right - left, top - bottom)
    }

    /// X coordinate of the position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y coordinate of the position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Signed width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Signed height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The stored corner `(x, y)`.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The stored size `(width, height)`.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `position + size`: the corner opposite to `position`.
    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// `position + size / 2`.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Signed area `width * height`; negative when exactly one side is negative.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns `true` if both sides are non-zero.
    #[allow(clippy::float_cmp)]
    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    /// Length of the longer side, ignoring signs.
    pub fn longest_axis_length(&self) -> f32 {
        self.width.abs().max(self.height.abs())
    }

    /// Smallest x coordinate covered by the rectangle.
    pub fn left(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    /// Largest x coordinate covered by the rectangle.
    pub fn right(&self) -> f32 {
        self.x.max(self.x + self.width)
    }

    /// Smallest y coordinate covered by the rectangle.
    pub fn bottom(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    /// Largest y coordinate covered by the rectangle.
    pub fn top(&self) -> f32 {
        self.y.max(self.y + self.height)
    }

    /// `(left, top)` corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// `(right, top)` corner.
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    /// `(left, bottom)` corner.
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    /// `(right, bottom)` corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Returns `true` if `point` lies strictly inside the rectangle.
    ///
    /// # Examples
    /// ```
    /// use geomlib::Rect2;
    /// use geomlib_math::Vec2;
    /// let r = Rect2::new(2.0, 1.0, 4.0, 3.0);
    /// assert!(!r.contains_point(&Vec2::new(2.0, 1.0)));
    /// assert!(r.contains_point_inclusive(&Vec2::new(2.0, 1.0)));
    /// ```
    pub fn contains_point(&self, point: &Vec2) -> bool {
        point.x() > self.left()
            && point.x() < self.right()
            && point.y() > self.bottom()
            && point.y() < self.top()
    }

    /// Returns `true` if `point` lies inside the rectangle or on its border.
    pub fn contains_point_inclusive(&self, point: &Vec2) -> bool {
        point.x() >= self.left()
            && point.x() <= self.right()
            && point.y() >= self.bottom()
            && point.y() <= self.top()
    }

    /// Returns `true` if the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }

    /// Returns `true` if the rectangles overlap or touch.
    pub fn intersects_inclusive(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() <= other.top()
            && self.top() >= other.bottom()
    }

    /// The overlapping region, normalised; [`Rect2::EMPTY`] when the
    /// rectangles neither overlap nor touch.
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects_inclusive(other) {
            return Self::EMPTY;
        }
        Self::from_extents(
            self.left().max(other.left()),
            self.bottom().max(other.bottom()),
            self.right().min(other.right()),
            self.top().min(other.top()),
        )
    }

    // Entry and exit parameters of the line `point + t * direction` through
    // the two slabs.
    fn slab(&self, point: &Vec2, direction: &Vec2) -> (f32, f32) {
        let t1 = (self.position() - *point).div_elem(direction);
        let t2 = (self.end() - *point).div_elem(direction);
        let near = t1.min(&t2);
        let far = t1.max(&t2);
        (near.x().max(near.y()), far.x().min(far.y()))
    }

    /// Returns `true` if the infinite line through `point` along `direction`
    /// touches the rectangle.
    pub fn intersects_line(&self, point: &Vec2, direction: &Vec2) -> bool {
        let (entry, exit) = self.slab(point, direction);
        entry <= exit
    }

    /// First point where the line `point + t * direction` enters the
    /// rectangle (smallest `t`, which may be negative).
    ///
    /// Returns [`Vec2::NAN`] when the line misses; check
    /// [`Rect2::intersects_line`] first or use
    /// [`Rect2::try_line_intersection`].
    pub fn line_intersection(&self, point: &Vec2, direction: &Vec2) -> Vec2 {
        let (entry, exit) = self.slab(point, direction);
        if entry <= exit {
            *point + direction.scale(entry)
        } else {
            Vec2::NAN
        }
    }

    /// Checked [`Rect2::line_intersection`].
    pub fn try_line_intersection(&self, point: &Vec2, direction: &Vec2) -> Result<Vec2, GeomError> {
        let hit = self.line_intersection(point, direction);
        if hit.is_nan() {
            tracing::debug!(?point, ?direction, rect = ?self, "line misses rectangle");
            return Err(GeomError::NoIntersection);
        }
        Ok(hit)
    }

    /// [`Rect2::intersects_line`] for the line through `(0, intercept)` with
    /// direction `(slope, 1)`.
    pub fn intersects_line_slope(&self, slope: f32, intercept: f32) -> bool {
        self.intersects_line(&Vec2::new(0.0, intercept), &Vec2::new(slope, 1.0))
    }

    /// [`Rect2::line_intersection`] for the line through `(0, intercept)`
    /// with direction `(slope, 1)`.
    pub fn line_intersection_slope(&self, slope: f32, intercept: f32) -> Vec2 {
        self.line_intersection(&Vec2::new(0.0, intercept), &Vec2::new(slope, 1.0))
    }

    /// Same region with a non-negative size, positioned at `(left, bottom)`.
    pub fn abs(&self) -> Self {
        Self::from_extents(self.left(), self.bottom(), self.right(), self.top())
    }

    /// Returns `true` if `other` lies entirely inside `self` (borders allowed).
    pub fn encloses(&self, other: &Self) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.bottom() <= other.bottom()
            && self.top() >= other.top()
    }

    /// Moves each side outwards by its own amount (negative amounts move it
    /// inwards).
    ///
    /// The amounts apply to the resolved extents, so a positive amount grows
    /// the visible rectangle whatever the sign of the stored size. The result
    /// is positioned at `(left - left_amount, bottom - bottom_amount)`; for a
    /// non-negative size this is the field update `x -= left; width += left +
    /// right; y -= bottom; height += bottom + top`. Shrinking past zero yields
    /// a negative size.
    pub fn grow_sides(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::from_extents(
            self.left() - left,
            self.bottom() - bottom,
            self.right() + right,
            self.top() + top,
        )
    }

    /// Moves every side outwards by `amount`.
    pub fn grow(&self, amount: f32) -> Self {
        self.grow_sides(amount, amount, amount, amount)
    }

    /// Smallest normalised rectangle covering `self` and `point`.
    pub fn expand_to(&self, point: &Vec2) -> Self {
        Self::from_extents(
            self.left().min(point.x()),
            self.bottom().min(point.y()),
            self.right().max(point.x()),
            self.top().max(point.y()),
        )
    }

    /// Smallest normalised rectangle covering both rectangles.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_extents(
            self.left().min(other.left()),
            self.bottom().min(other.bottom()),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }

    /// Same rectangle moved by `offset`.
    pub fn translated(&self, offset: &Vec2) -> Self {
        Self::new(self.x + offset.x(), self.y + offset.y(), self.width, self.height)
    }

    /// Bounding rectangle of `self` after the affine map `matrix`.
    ///
    /// The position and the two edge vectors `(width, 0)` and `(0, height)`
    /// are mapped; the transformed parallelogram is then bounded by adding
    /// the negative parts of both edges to the mapped position (min corner)
    /// and the positive parts (max corner). Accepts [`geomlib_math::Mat2`],
    /// [`geomlib_math::Mat2x3`] and [`geomlib_math::Mat3`].
    ///
    /// Under rotation or shear this is the bound of all four mapped corners,
    /// not `from_points(p', p' + ex + ey)` over the two mapped diagonal corners.
    ///
    /// # Examples
    /// ```
    /// use geomlib::Rect2;
    /// use geomlib_math::Mat2x3;
    /// let r = Rect2::new(2.0, 1.0, 4.0, 2.0);
    /// assert_eq!(r.transform(&Mat2x3::translation(2.0, 3.0)), Rect2::new(4.0, 4.0, 4.0, 2.0));
    /// ```
    pub fn transform<M: Affine2>(&self, matrix: &M) -> Self {
        let origin = matrix.transform_point2(&self.position());
        let ex = matrix.transform_vector2(&Vec2::new(self.width, 0.0));
        let ey = matrix.transform_vector2(&Vec2::new(0.0, self.height));
        let min = origin + ex.min(&Vec2::ZERO) + ey.min(&Vec2::ZERO);
        let max = origin + ex.max(&Vec2::ZERO) + ey.max(&Vec2::ZERO);
        Self::from_position_size(min, max - min)
    }

    /// Bounding rectangle of `self` after the inverse of `matrix`.
    pub fn inverse_transform<M: Affine2>(&self, matrix: &M) -> Self {
        self.transform(&matrix.affine_inverse2())
    }

    /// Returns `true` if both rectangles cover the same region within
    /// tolerance, whatever the signs of their stored sizes.
    pub fn is_congruent_to(&self, other: &Self) -> bool {
        approx_eq(self.left(), other.left())
            && approx_eq(self.right(), other.right())
            && approx_eq(self.bottom(), other.bottom())
            && approx_eq(self.top(), other.top())
    }

    /// Truncates every stored component toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rect2i(&self) -> Rect2i {
        Rect2i::new(
            self.x as i32,
            self.y as i32,
            self.width as i32,
            self.height as i32,
        )
    }
}

/// Field-wise tolerance comparison. A rectangle and its negative-size
/// encoding are congruent but not approximately equal.
impl ApproxEq for Rect2 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.width, other.width)
            && approx_eq(self.height, other.height)
    }
}

impl From<Rect2i> for Rect2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Rect2i) -> Self {
        Self::new(
            value.x() as f32,
            value.y() as f32,
            value.width() as f32,
            value.height() as f32,
        )
    }
}
