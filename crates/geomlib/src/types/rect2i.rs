// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use geomlib_math::Vec2i;

use crate::Rect2;

/// Integer rectangle with the same conventions as [`Rect2`].
///
/// Float-only operations (transforms, line queries, tolerance comparisons)
/// are not offered; convert with [`Rect2i::to_rect2`] when they are needed.
///
/// Extents are computed in `i64`, so `x + width` past the `i32` limits is
/// still ordered correctly by every predicate. Rectangles built from extents
/// saturate each field to the `i32` range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2i {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect2i {
    /// The canonical empty rectangle `(0, 0, 0, 0)`.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its position and size components.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position and a size vector.
    pub fn from_position_size(position: Vec2i, size: Vec2i) -> Self {
        Self::new(position.x(), position.y(), size.x(), size.y())
    }

    /// Creates a rectangle of the given size at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Builds the rectangle spanned by two opposite corners, in any order.
    pub fn from_points(p1: Vec2i, p2: Vec2i) -> Self {
        Self::from_extents(
            i64::from(p1.x().min(p2.x())),
            i64::from(p1.y().min(p2.y())),
            i64::from(p1.x().max(p2.x())),
            i64::from(p1.y().max(p2.y())),
        )
    }

    fn from_extents(left: i64, bottom: i64, right: i64, top: i64) -> Self {
        let x = saturate(left);
        let y = saturate(bottom);
        Self::new(
            x,
            y,
            saturate(right - i64::from(x)),
            saturate(top - i64::from(y)),
        )
    }

    /// X coordinate of the position.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the position.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Signed width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Signed height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The stored corner `(x, y)`.
    pub fn position(&self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    /// The stored size `(width, height)`.
    pub fn size(&self) -> Vec2i {
        Vec2i::new(self.width, self.height)
    }

    /// `position + size`, saturated to the `i32` range.
    pub fn end(&self) -> Vec2i {
        Vec2i::new(
            saturate(i64::from(self.x) + i64::from(self.width)),
            saturate(i64::from(self.y) + i64::from(self.height)),
        )
    }

    /// `position + size / 2`, with the halving truncated toward zero.
    pub fn center(&self) -> Vec2i {
        Vec2i::new(
            saturate(i64::from(self.x) + i64::from(self.width / 2)),
            saturate(i64::from(self.y) + i64::from(self.height / 2)),
        )
    }

    /// Signed area, widened to `i64` so it cannot overflow.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Returns `true` if both sides are non-zero.
    pub fn has_area(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// Smallest x coordinate covered by the rectangle.
    pub fn left(&self) -> i64 {
        i64::from(self.x).min(i64::from(self.x) + i64::from(self.width))
    }

    /// Largest x coordinate covered by the rectangle.
    pub fn right(&self) -> i64 {
        i64::from(self.x).max(i64::from(self.x) + i64::from(self.width))
    }

    /// Smallest y coordinate covered by the rectangle.
    pub fn bottom(&self) -> i64 {
        i64::from(self.y).min(i64::from(self.y) + i64::from(self.height))
    }

    /// Largest y coordinate covered by the rectangle.
    pub fn top(&self) -> i64 {
        i64::from(self.y).max(i64::from(self.y) + i64::from(self.height))
    }

    /// Returns `true` if `point` lies strictly inside the rectangle.
    pub fn contains_point(&self, point: &Vec2i) -> bool {
        let (x, y) = (i64::from(point.x()), i64::from(point.y()));
        x > self.left() && x < self.right() && y > self.bottom() && y < self.top()
    }

    /// Returns `true` if `point` lies inside the rectangle or on its border.
    pub fn contains_point_inclusive(&self, point: &Vec2i) -> bool {
        let (x, y) = (i64::from(point.x()), i64::from(point.y()));
        x >= self.left() && x <= self.right() && y >= self.bottom() && y <= self.top()
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

    /// The overlapping region; [`Rect2i::EMPTY`] when the rectangles neither
    /// overlap nor touch.
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

    /// Same region with a non-negative size.
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

    /// Moves each side outwards by its own amount; same convention as
    /// [`Rect2::grow_sides`].
    pub fn grow_sides(&self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::from_extents(
            self.left() - i64::from(left),
            self.bottom() - i64::from(bottom),
            self.right() + i64::from(right),
            self.top() + i64::from(top),
        )
    }

    /// Moves every side outwards by `amount`.
    pub fn grow(&self, amount: i32) -> Self {
        self.grow_sides(amount, amount, amount, amount)
    }

    /// Smallest normalised rectangle covering `self` and `point`.
    pub fn expand_to(&self, point: &Vec2i) -> Self {
        Self::from_extents(
            self.left().min(i64::from(point.x())),
            self.bottom().min(i64::from(point.y())),
            self.right().max(i64::from(point.x())),
            self.top().max(i64::from(point.y())),
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

    /// Same rectangle moved by `offset`; the position saturates at the `i32`
    /// limits.
    pub fn translated(&self, offset: &Vec2i) -> Self {
        Self::new(
            saturate(i64::from(self.x) + i64::from(offset.x())),
            saturate(i64::from(self.y) + i64::from(offset.y())),
            self.width,
            self.height,
        )
    }

    /// Returns `true` if both rectangles cover the same region.
    pub fn is_congruent_to(&self, other: &Self) -> bool {
        self.left() == other.left()
            && self.right() == other.right()
            && self.bottom() == other.bottom()
            && self.top() == other.top()
    }

    /// Widens to a float rectangle.
    pub fn to_rect2(&self) -> Rect2 {
        Rect2::from(*self)
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
