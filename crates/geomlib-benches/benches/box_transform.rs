#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use geomlib::{Aabb, Plane, Rect2, Transform};
use geomlib_math::{Mat2x3, Mat3, Mat3x4, Mat4, Quat, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_boxes(n: usize) -> Vec<Aabb> {
    let mut rng = StdRng::seed_from_u64(0xb0c5);
    (0..n)
        .map(|_| {
            Aabb::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            )
        })
        .collect()
}

fn bench_aabb_transform(c: &mut Criterion) {
    let transform = Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7),
        Vec3::new(2.0, 1.0, 0.5),
    );
    let mat4 = transform.to_mat4();
    let mat3x4 = transform.to_mat3x4();
    let mut group = c.benchmark_group("aabb/transform");
    group.bench_function("mat4", |b| {
        b.iter_batched(
            || random_boxes(512),
            |boxes| {
                for aabb in &boxes {
                    black_box(aabb.transform(&mat4));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("mat3x4", |b| {
        b.iter_batched(
            || random_boxes(512),
            |boxes| {
                for aabb in &boxes {
                    black_box(aabb.transform(&mat3x4));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("mat4_inverse", |b| {
        b.iter_batched(
            || random_boxes(512),
            |boxes| {
                for aabb in &boxes {
                    black_box(aabb.inverse_transform(&mat4));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_rect_and_plane_transform(c: &mut Criterion) {
    let rect = Rect2::new(2.0, 1.0, 4.0, 3.0);
    let m2 = Mat2x3::translation(2.0, 3.0);
    c.bench_function("rect2/transform/mat2x3", |b| {
        b.iter(|| black_box(rect).transform(&m2))
    });
    let plane = Plane::new(1.0, 1.0, 0.0, 1.0);
    let rotation = Mat3::rotation_x(0.4).multiply(&Mat3::rotation_z(1.1));
    let affine = Mat4::from(rotation);
    c.bench_function("plane/transform/mat3", |b| {
        b.iter(|| black_box(plane).transform(&rotation))
    });
    c.bench_function("plane/transform/mat4", |b| {
        b.iter(|| black_box(plane).transform(&affine))
    });
    let shifted = Mat3x4::translation(0.0, 0.0, 1.0);
    c.bench_function("plane/inverse_transform/mat3x4", |b| {
        b.iter(|| black_box(plane).inverse_transform(&shifted))
    });
}

criterion_group!(benches, bench_aabb_transform, bench_rect_and_plane_transform);
criterion_main!(benches);
