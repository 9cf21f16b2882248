// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use geomlib::{Rect2, Rect2i};
use geomlib_math::Vec2i;

#[test]
fn extents_and_derived_values() {
    let r = Rect2i::new(6, 4, -4, -3);
    assert_eq!((r.left(), r.right(), r.bottom(), r.top()), (2, 6, 1, 4));
    assert_eq!(r.end(), Vec2i::new(2, 1));
    assert_eq!(r.abs(), Rect2i::new(2, 1, 4, 3));
    assert_eq!(r.area(), 12);
    assert_eq!(Rect2i::new(0, 0, 5, 3).center(), Vec2i::new(2, 1));
    assert_eq!(Rect2i::new(0, 0, i32::MAX, 2).area(), i64::from(i32::MAX) * 2);
    assert!(!Rect2i::from_size(0, 4).has_area());
}

#[test]
fn containment_and_intersection() {
    let r = Rect2i::new(2, 1, 4, 3);
    assert!(!r.contains_point(&Vec2i::new(2, 1)));
    assert!(r.contains_point_inclusive(&Vec2i::new(2, 1)));
    assert!(r.contains_point(&Vec2i::new(3, 2)));

    let a = Rect2i::new(1, 1, 2, 2);
    let b = Rect2i::new(-1, -1, -2, -2);
    assert_eq!(a.intersection(&b), Rect2i::EMPTY);
    let c = Rect2i::new(2, 2, 4, 4);
    assert!(a.intersects(&c) && c.intersects(&a));
    assert_eq!(a.intersection(&c), Rect2i::new(2, 2, 1, 1));
    let touching = Rect2i::new(3, 1, 1, 1);
    assert!(!a.intersects(&touching));
    assert!(a.intersects_inclusive(&touching));
}

#[test]
fn merge_grow_and_expand() {
    let a = Rect2i::new(0, 0, 4, 4);
    let b = Rect2i::new(5, -1, -1, 2);
    let m = a.merge(&b);
    assert_eq!(m, Rect2i::new(0, -1, 5, 5));
    assert!(m.encloses(&a) && m.encloses(&b));
    assert_eq!(a.expand_to(&Vec2i::new(-2, 1)), Rect2i::new(-2, 0, 6, 4));
    assert_eq!(
        Rect2i::new(0, 0, 4, 2).grow_sides(1, 2, 3, 4),
        Rect2i::new(-1, -4, 8, 8)
    );
    assert_eq!(
        Rect2i::new(4, 2, -4, -2).grow_sides(1, 2, 3, 4),
        Rect2i::new(-1, -4, 8, 8)
    );
    assert_eq!(a.grow(-1), Rect2i::new(1, 1, 2, 2));
}

#[test]
fn congruence_is_region_equality() {
    let r = Rect2i::new(2, 1, 4, 3);
    assert!(r.is_congruent_to(&Rect2i::new(6, 4, -4, -3)));
    assert_ne!(r, Rect2i::new(6, 4, -4, -3));
    assert!(!r.is_congruent_to(&Rect2i::new(2, 1, 4, 2)));
}

#[test]
fn widens_to_float_rect() {
    let r = Rect2i::new(-3, 2, 5, -7);
    assert_eq!(r.to_rect2(), Rect2::new(-3.0, 2.0, 5.0, -7.0));
    assert_eq!(r.to_rect2().to_rect2i(), r);
    assert_eq!(
        Rect2i::from_points(Vec2i::new(6, 1), Vec2i::new(2, 4)),
        Rect2i::new(2, 1, 4, 3)
    );
    assert_eq!(r.translated(&Vec2i::new(1, 1)), Rect2i::new(-2, 3, 5, -7));
}

#[test]
fn extents_past_i32_max_stay_ordered() {
    let r = Rect2i::new(i32::MAX - 1, 0, 10, 10);
    assert_eq!(r.right(), i64::from(i32::MAX) + 9);
    assert!(!r.contains_point(&Vec2i::new(0, 0)));
    assert!(r.contains_point(&Vec2i::new(i32::MAX, 5)));
    assert!(r.intersects(&Rect2i::new(i32::MAX, 0, 1, 1)));
    assert_eq!(r.abs(), r);
    assert_eq!(r.end(), Vec2i::new(i32::MAX, 10));
    assert_eq!(r.center(), Vec2i::new(i32::MAX, 5));
    assert_eq!(r.grow(1), Rect2i::new(i32::MAX - 2, -1, 12, 12));
    assert_eq!(r.merge(&Rect2i::new(0, 0, 1, 1)), Rect2i::new(0, 0, i32::MAX, 10));
    assert_eq!(r.translated(&Vec2i::new(5, 0)), Rect2i::new(i32::MAX, 0, 10, 10));
    assert!(r.is_congruent_to(&Rect2i::new(i32::MAX - 1, 10, 10, -10)));
}

#[test]
fn corners_at_opposite_limits() {
    let r = Rect2i::from_points(Vec2i::new(i32::MIN, 0), Vec2i::new(i32::MAX, 1));
    // The width saturates, so the far side stops one short of zero.
    assert_eq!(r, Rect2i::new(i32::MIN, 0, i32::MAX, 1));
    assert_eq!(r.right(), -1);
    assert!(r.contains_point_inclusive(&Vec2i::new(-5, 0)));
}
