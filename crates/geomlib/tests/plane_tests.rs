// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};
use geomlib::{GeomError, Plane};
use geomlib_math::{approx_eq, ApproxEq, Mat3, Mat3x4, Mat4, Vec3};

// Quarter turn about X applied after an eighth turn about Z.
fn rotation() -> Mat3 {
    Mat3::rotation_x(FRAC_PI_2).multiply(&Mat3::rotation_z(FRAC_PI_4))
}

fn assert_congruent(actual: Plane, expected: Plane) {
    assert!(actual.is_congruent_to(&expected), "{actual:?} vs {expected:?}");
}

#[test]
fn flip_negates_normal_and_d() {
    let plane = Plane::new(1.0, 0.0, 1.0, -2.0);
    assert_eq!(plane.flip(), Plane::new(-1.0, 0.0, -1.0, 2.0));
    assert_eq!(-plane, plane.flip());
    assert_eq!(plane.flip().flip(), plane);
}

#[test]
fn constructors() {
    let p = Plane::from_points(&Vec3::ZERO, &Vec3::UNIT_X, &Vec3::UNIT_Y);
    assert_eq!(p.normal().to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(p.d(), 0.0);
    let q = Plane::from_normal_point(Vec3::new(0.0, 2.0, 0.0), &Vec3::new(5.0, 3.0, -1.0));
    assert_eq!(q, Plane::new(0.0, 2.0, 0.0, 6.0));
    assert_eq!(Plane::from_normal_d(Vec3::UNIT_Z, 1.5), Plane::new(0.0, 0.0, 1.0, 1.5));
}

#[test]
fn distance_is_normalised_but_side_tests_are_raw() {
    // z = 1 written with a normal of length 2.
    let plane = Plane::new(0.0, 0.0, 2.0, 2.0);
    assert_eq!(plane.distance_to(&Vec3::new(0.0, 0.0, 3.0)), 2.0);
    assert_eq!(plane.distance_to(&Vec3::new(4.0, 4.0, 0.0)), -1.0);
    assert!(plane.contains_point(&Vec3::new(7.0, -2.0, 1.0)));
    assert!(plane.is_point_over(&Vec3::new(0.0, 0.0, 1.5)));
    assert!(!plane.is_point_over(&Vec3::new(0.0, 0.0, 0.5)));
    // z = 0.5, again with a normal of length 2.
    let half = Plane::new(0.0, 0.0, 2.0, 1.0);
    assert!(half.is_point_over(&Vec3::new(0.0, 0.0, 0.75)));
    assert!(!half.contains_point(&Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn projection_lands_on_unit_planes() {
    let plane = Plane::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(plane.project(&Vec3::new(1.0, 2.0, 5.0)).to_array(), [1.0, 2.0, 1.0]);
    let tilted = Plane::from_normal_point(Vec3::new(1.0, 1.0, 0.0).normalize(), &Vec3::UNIT_X);
    let p = tilted.project(&Vec3::new(3.0, 3.0, 7.0));
    assert!(tilted.contains_point(&p), "{p:?}");
    assert!(approx_eq(p.z(), 7.0));
}

#[test]
fn line_meets_plane() {
    let plane = Plane::new(0.0, 0.0, 1.0, 1.0);
    let dir = Vec3::new(0.0, 0.0, 2.0);
    assert!(plane.intersects_line(&Vec3::ZERO, &dir));
    assert_eq!(plane.line_intersection(&Vec3::ZERO, &dir).to_array(), [0.0, 0.0, 1.0]);
    let slanted = plane.line_intersection(&Vec3::new(1.0, 1.0, 3.0), &Vec3::new(1.0, 0.0, -1.0));
    assert_eq!(slanted.to_array(), [3.0, 1.0, 1.0]);
    // A point already on the plane is returned unchanged, even for a parallel line.
    let on = Vec3::new(4.0, 4.0, 1.0);
    assert!(plane.intersects_line(&on, &Vec3::UNIT_X));
    assert_eq!(plane.line_intersection(&on, &Vec3::UNIT_X), on);
    assert_eq!(plane.try_line_intersection(&on, &Vec3::UNIT_X), Ok(on));
}

#[test]
fn parallel_line_is_reported() {
    let plane = Plane::new(0.0, 0.0, 1.0, 1.0);
    assert!(!plane.intersects_line(&Vec3::ZERO, &Vec3::UNIT_X));
    assert!(!plane.line_intersection(&Vec3::ZERO, &Vec3::UNIT_X).is_finite());
    assert_eq!(
        plane.try_line_intersection(&Vec3::ZERO, &Vec3::UNIT_X),
        Err(GeomError::ParallelLine)
    );
}

#[test]
fn parallel_congruent_and_intersecting_planes() {
    let a = Plane::new(0.0, 0.0, 1.0, 1.0);
    let b = Plane::new(0.0, 0.0, -3.0, 2.0);
    assert!(a.is_parallel_to(&b));
    assert!(!a.is_congruent_to(&b));
    assert!(!a.intersects(&b));

    let same = Plane::new(0.0, 0.0, -2.0, -2.0);
    assert!(a.is_congruent_to(&same));
    assert!(a.intersects(&same));

    let crossing = Plane::new(1.0, 0.0, 0.0, 0.0);
    assert!(!a.is_parallel_to(&crossing));
    assert!(a.intersects(&crossing));
}

#[test]
fn three_planes_meet_in_a_point() {
    let p0 = Plane::new(1.0, 2.0, 1.0, 1.0);
    let p1 = Plane::new(2.0, 1.0, 1.0, 1.0);
    let p2 = Plane::new(1.0, 1.0, 2.0, 1.0);
    assert!(p0.intersects_in_point(&p1, &p2));
    let point = p0.intersection(&p1, &p2);
    assert!(point.approx_eq(&Vec3::splat(0.25)), "{point:?}");
    for plane in [p0, p1, p2] {
        assert!(plane.contains_point(&point));
    }
    assert_eq!(p0.try_intersection(&p1, &p2), Ok(point));
}

#[test]
fn dependent_normals_have_no_single_point() {
    let p0 = Plane::new(1.0, 0.0, 0.0, 1.0);
    let p1 = Plane::new(0.0, 1.0, 0.0, 1.0);
    let p2 = Plane::new(1.0, 1.0, 0.0, 5.0);
    assert!(!p0.intersects_in_point(&p1, &p2));
    assert!(!p0.intersection(&p1, &p2).is_finite());
    assert!(matches!(
        p0.try_intersection(&p1, &p2),
        Err(GeomError::DegeneratePlanes { .. })
    ));
}

#[test]
fn transform_by_mat3() {
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    assert_congruent(plane.transform(&rotation()), Plane::new(0.0, 0.0, 1.0, SQRT_2));
}

#[test]
fn transform_by_mat3x4() {
    let m = Mat3x4::translation(0.0, 0.0, 1.0).multiply(&Mat3x4::from(rotation()));
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    assert_congruent(plane.transform(&m), Plane::new(0.0, 0.0, 1.0, SQRT_2 + 1.0));
}

#[test]
fn transform_by_mat4() {
    let m = Mat4::translation(0.0, 0.0, 1.0).multiply(&Mat4::from(rotation()));
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    assert_congruent(plane.transform(&m), Plane::new(0.0, 0.0, 1.0, SQRT_2 + 1.0));
}

#[test]
fn normals_use_the_inverse_transpose() {
    // Non-uniform scale: the plane x + y = 1 stretched along X.
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    let stretched = plane.transform(&Mat3::scaling(2.0, 1.0, 1.0));
    let n = stretched.normal();
    assert!(approx_eq(n.x() * 2.0, n.y()), "{n:?}");
    assert!(approx_eq(n.z(), 0.0));
}

#[test]
fn inverse_transform_by_mat3() {
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    assert_congruent(
        plane.inverse_transform(&rotation()),
        Plane::new(0.5, -0.5, -SQRT_2 / 2.0, SQRT_2),
    );
}

#[test]
fn inverse_transform_by_mat4() {
    let m = Mat4::translation(0.0, 1.0, 0.0).multiply(&Mat4::from(rotation()));
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    assert_congruent(
        plane.inverse_transform(&m),
        Plane::new(0.5, -0.5, -SQRT_2 / 2.0, SQRT_2 / 2.0),
    );
}

#[test]
fn translation_shifts_d_along_the_normal() {
    let plane = Plane::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(plane.translated(&Vec3::new(5.0, 5.0, 2.0)), Plane::new(0.0, 0.0, 1.0, 3.0));
    let m = Mat3x4::translation(5.0, 5.0, 2.0);
    assert_congruent(plane.transform(&m), Plane::new(0.0, 0.0, 1.0, 3.0));
}

#[test]
fn congruence_differs_from_approx_equality() {
    let p1 = Plane::new(1.0, 2.0, 3.0, 4.0);
    let p2 = Plane::new(0.9999999, 1.9999999, 3.0000001, 4.0000001);
    let p3 = p1.flip();
    assert_ne!(p1, p2);
    assert!(p1.approx_eq(&p2));
    assert!(p1.is_congruent_to(&p3));
    assert!(!p1.approx_eq(&p3));
}
