// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_2;
use geomlib::{Aabb, GeomError, Plane, Sphere, Transform};
use geomlib_math::{approx_eq, ApproxEq, Mat3, Mat3x4, Mat4, Quat, Vec3};

fn unit_cube_at_origin() -> Aabb {
    Aabb::new(-1.0, -1.0, -1.0, 2.0, 2.0, 2.0)
}

#[test]
fn extents_ignore_size_sign() {
    let b = Aabb::new(3.0, 2.0, 1.0, -2.0, -1.0, -3.0);
    assert_eq!((b.left(), b.right()), (1.0, 3.0));
    assert_eq!((b.bottom(), b.top()), (1.0, 2.0));
    assert_eq!((b.front(), b.back()), (-2.0, 1.0));
    assert_eq!(b.min().to_array(), [1.0, 1.0, -2.0]);
    assert_eq!(b.max().to_array(), [3.0, 2.0, 1.0]);
    assert_eq!(b.abs(), Aabb::new(1.0, 1.0, -2.0, 2.0, 1.0, 3.0));
    assert_eq!(b.abs().abs(), b.abs());
    assert!(b.is_congruent_to(&b.abs()));
    assert!(!b.approx_eq(&b.abs()));
}

#[test]
fn measures_and_axes() {
    let b = Aabb::from_size(1.0, 2.0, 3.0);
    assert_eq!(b.volume(), 6.0);
    assert_eq!(b.surface_area(), 22.0);
    assert_eq!(b.center().to_array(), [0.5, 1.0, 1.5]);
    assert_eq!(b.end().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(b.longest_axis(), Vec3::UNIT_Z);
    assert_eq!(b.longest_axis_length(), 3.0);
    assert_eq!(b.shortest_axis(), Vec3::UNIT_X);
    assert_eq!(b.shortest_axis_length(), 1.0);
    assert!(b.has_volume());
    let flat = Aabb::from_size(1.0, 0.0, 3.0);
    assert!(!flat.has_volume());
    assert!(flat.has_surface());
    assert!(!Aabb::EMPTY.has_surface());
    assert_eq!(Aabb::new(0.0, 0.0, 0.0, -1.0, 2.0, 3.0).volume(), -6.0);
}

#[test]
fn constructors_agree() {
    let b = Aabb::from_points(Vec3::new(1.0, -1.0, 1.0), Vec3::new(-1.0, 1.0, -1.0));
    assert_eq!(b, unit_cube_at_origin());
    assert_eq!(Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0), b);
    assert_eq!(Aabb::from_position_size(Vec3::splat(-1.0), Vec3::splat(2.0)), b);
    let pts = [Vec3::new(0.0, 2.0, -1.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(-1.0, 1.0, 1.0)];
    assert_eq!(Aabb::enclosing(&pts), Some(Aabb::new(-1.0, -1.0, -1.0, 2.0, 3.0, 2.0)));
    assert_eq!(Aabb::enclosing(&[]), None);
}

#[test]
fn containment_and_overlap() {
    let b = unit_cube_at_origin();
    assert!(b.contains_point(&Vec3::ZERO));
    assert!(!b.contains_point(&Vec3::ONE));
    assert!(b.contains_point_inclusive(&Vec3::ONE));
    let touching = Aabb::new(1.0, -1.0, -1.0, 2.0, 2.0, 2.0);
    assert!(!b.intersects(&touching));
    assert!(b.intersects_inclusive(&touching));
    let overlapping = Aabb::new(2.0, 2.0, 2.0, -2.0, -2.0, -2.0);
    assert!(b.intersects(&overlapping) && overlapping.intersects(&b));
    assert_eq!(b.intersection(&overlapping), Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
    let far = Aabb::new(5.0, 5.0, 5.0, 1.0, 1.0, 1.0);
    assert_eq!(b.intersection(&far), Aabb::EMPTY);
}

#[test]
fn merge_expand_grow_and_enclose() {
    let a = unit_cube_at_origin();
    let b = Aabb::new(2.0, 0.0, 0.0, 1.0, 1.0, 1.0);
    let m = a.merge(&b);
    assert_eq!(m, Aabb::new(-1.0, -1.0, -1.0, 4.0, 2.0, 2.0));
    assert!(m.encloses(&a) && m.encloses(&b));
    assert!(!a.encloses(&m));
    assert_eq!(a.expand_to(&Vec3::new(0.0, 3.0, 0.0)), Aabb::new(-1.0, -1.0, -1.0, 2.0, 4.0, 2.0));
    assert_eq!(a.grow(1.0), Aabb::new(-2.0, -2.0, -2.0, 4.0, 4.0, 4.0));
    assert_eq!(
        a.grow_sides(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
        Aabb::new(-2.0, -5.0, -6.0, 6.0, 8.0, 13.0)
    );
    assert_eq!(a.translated(&Vec3::ONE), Aabb::new(0.0, 0.0, 0.0, 2.0, 2.0, 2.0));
}

#[test]
fn vertices_cover_every_corner() {
    let vertices = Aabb::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0).vertices();
    for x in [0.0, 1.0] {
        for y in [0.0, 2.0] {
            for z in [0.0, 3.0] {
                let corner = Vec3::new(x, y, z);
                assert!(vertices.contains(&corner), "missing {corner:?}");
            }
        }
    }
}

#[test]
fn face_planes_point_outwards() {
    let b = Aabb::new(1.0, 2.0, 3.0, 1.0, 1.0, 1.0);
    assert_eq!(b.right_plane(), Plane::new(1.0, 0.0, 0.0, 2.0));
    assert_eq!(b.left_plane(), Plane::new(-1.0, 0.0, 0.0, -1.0));
    assert_eq!(b.back_plane(), Plane::new(0.0, 0.0, 1.0, 4.0));
    let inside = b.center();
    for plane in b.planes() {
        assert!(!plane.is_point_over(&inside), "{plane:?}");
        assert!(approx_eq(plane.distance_to(&inside), -0.5));
    }
    assert!(b.left_plane().is_point_over(&Vec3::new(0.0, 2.5, 3.5)));
}

#[test]
fn plane_must_straddle_the_box() {
    let b = Aabb::from_size(2.0, 2.0, 2.0);
    assert!(b.intersects_plane(&Plane::new(1.0, 0.0, 0.0, 1.0)));
    assert!(b.intersects_plane(&Plane::new(1.0, 1.0, 1.0, 3.0)));
    // Touching a face is not an intersection.
    assert!(!b.intersects_plane(&Plane::new(1.0, 0.0, 0.0, 2.0)));
    assert!(!b.intersects_plane(&Plane::new(0.0, 1.0, 0.0, -5.0)));
}

#[test]
fn line_entry_point_and_miss() {
    let b = Aabb::from_size(2.0, 2.0, 2.0);
    let point = Vec3::new(-1.0, 1.0, 1.0);
    assert!(b.intersects_line(&point, &Vec3::UNIT_X));
    assert_eq!(b.line_intersection(&point, &Vec3::UNIT_X).to_array(), [0.0, 1.0, 1.0]);
    assert_eq!(b.try_line_intersection(&point, &Vec3::UNIT_X), Ok(Vec3::new(0.0, 1.0, 1.0)));
    let diagonal = b.line_intersection(&Vec3::splat(-1.0), &Vec3::ONE);
    assert_eq!(diagonal.to_array(), [0.0, 0.0, 0.0]);

    let above = Vec3::new(-1.0, 3.0, 1.0);
    assert!(!b.intersects_line(&above, &Vec3::UNIT_X));
    assert!(b.line_intersection(&above, &Vec3::UNIT_X).is_nan());
    assert_eq!(b.try_line_intersection(&above, &Vec3::UNIT_X), Err(GeomError::NoIntersection));
}

#[test]
fn bounding_sphere_passes_through_corners() {
    let b = Aabb::from_size(2.0, 2.0, 2.0);
    let s = b.bounding_sphere();
    assert!(s.approx_eq(&Sphere::new(1.0, 1.0, 1.0, 3.0_f32.sqrt())));
    for v in b.vertices() {
        assert!(s.is_point_on_surface(&v));
    }
}

#[test]
fn support_picks_the_farthest_corner() {
    let b = Aabb::from_size(2.0, 4.0, 6.0);
    assert_eq!(b.support(&Vec3::new(1.0, -1.0, 0.0)).to_array(), [2.0, 0.0, 3.0]);
    assert_eq!(b.support(&Vec3::ONE).to_array(), [2.0, 4.0, 6.0]);
    let flipped = Aabb::new(2.0, 4.0, 6.0, -2.0, -4.0, -6.0);
    assert_eq!(flipped.support(&Vec3::new(-1.0, 1.0, -1.0)).to_array(), [0.0, 4.0, 0.0]);
}

#[test]
fn transform_by_mat3_scaling_is_exact() {
    let res = unit_cube_at_origin().transform(&Mat3::scaling(2.0, 3.0, 2.0));
    assert_eq!(res, Aabb::new(-2.0, -3.0, -2.0, 4.0, 6.0, 4.0));
}

#[test]
fn transform_by_mat3x4_translation() {
    let res = unit_cube_at_origin().transform(&Mat3x4::translation(2.0, 3.0, 2.0));
    assert_eq!(res, Aabb::new(1.0, 2.0, 1.0, 2.0, 2.0, 2.0));
}

#[test]
fn transform_by_mat4_composite() {
    let m = Mat4::translation(2.0, 3.0, 2.0).multiply(&Mat4::scaling(2.0, 3.0, 2.0));
    let res = unit_cube_at_origin().transform(&m);
    assert_eq!(res, Aabb::new(0.0, 0.0, 0.0, 4.0, 6.0, 4.0));
}

#[test]
fn rotated_box_is_bounded_tightly() {
    let b = Aabb::from_size(2.0, 1.0, 1.0);
    let res = b.transform(&Mat3::rotation_z(FRAC_PI_2));
    assert!(res.approx_eq(&Aabb::new(-1.0, 0.0, 0.0, 1.0, 2.0, 1.0)), "{res:?}");
    let cube = unit_cube_at_origin().transform(&Mat3::rotation_z(FRAC_PI_2 / 2.0));
    let diag = 2.0_f32.sqrt();
    assert!(cube.approx_eq(&Aabb::new(-diag, -diag, -1.0, 2.0 * diag, 2.0 * diag, 2.0)), "{cube:?}");
}

#[test]
fn inverse_transform_undoes_transform() {
    let moved = Aabb::new(1.0, 2.0, 1.0, 2.0, 2.0, 2.0);
    assert_eq!(
        moved.inverse_transform(&Mat3x4::translation(2.0, 3.0, 2.0)),
        unit_cube_at_origin()
    );
    let m = Mat4::translation(1.0, -2.0, 0.5).multiply(&Mat4::scaling(2.0, 4.0, 0.5));
    let b = Aabb::new(0.5, 1.0, -2.0, 3.0, 1.5, 2.0);
    assert!(b.transform(&m).inverse_transform(&m).approx_eq(&b));
}

#[test]
fn trs_transform_feeds_box_transforms() {
    let trs = Transform::new(Vec3::new(2.0, 3.0, 2.0), Quat::identity(), Vec3::new(2.0, 3.0, 2.0));
    let expected = Aabb::new(0.0, 0.0, 0.0, 4.0, 6.0, 4.0);
    assert!(unit_cube_at_origin().transform(&trs.to_mat4()).approx_eq(&expected));
    assert!(unit_cube_at_origin().transform(&trs.to_mat3x4()).approx_eq(&expected));
    assert!(unit_cube_at_origin().transform(&Mat4::from(trs)).approx_eq(&expected));

    let spin = Transform::new(Vec3::UNIT_X, Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2), Vec3::splat(2.0));
    let p = spin.transform_point(&Vec3::UNIT_X);
    assert!(p.approx_eq(&Vec3::new(1.0, 2.0, 0.0)), "{p:?}");
    assert!(spin.to_mat4().transform_point(&Vec3::UNIT_X).approx_eq(&p));
    assert_eq!(Transform::default(), Transform::identity());
    assert_eq!(Transform::from_translation(Vec3::ONE).translation(), Vec3::ONE);
}

#[test]
fn approx_equality_tolerates_last_ulp() {
    let b1 = Aabb::new(-1.0, -2.0, -3.0, 3.0, 2.0, 1.0);
    let b2 = Aabb::new(-1.0000001, -1.9999999, -2.9999999, 3.0000001, 2.0000001, 0.99999999);
    assert_ne!(b1, b2);
    assert!(b1.approx_eq(&b2));
}

#[test]
fn defaults_are_zeroed() {
    assert_eq!(Aabb::default(), Aabb::EMPTY);
    let plane = Plane::default();
    assert_eq!(plane.normal(), Vec3::ZERO);
    assert_eq!(plane.d(), 0.0);
    assert_eq!(Sphere::default(), Sphere::new(0.0, 0.0, 0.0, 0.0));
}
