// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry primitives for collision detection and spatial reasoning.

This crate provides:
- 2D rectangles (`Rect2`, `Rect2i`) and circles (`Circle`).
- 3D axis-aligned boxes (`Aabb`), spheres (`Sphere`) and planes (`Plane`).
- A translation/rotation/scale helper (`Transform`) producing matrices the
  3D shapes accept.

Design notes:
- Every shape is an immutable `Copy` value; every operation is pure.
- Float32 throughout; tolerance comparisons go through `geomlib_math::approx_eq`.
- Invalid queries signal with NaN rather than panicking; `try_*` variants
  return `Result<_, GeomError>` for callers that prefer explicit errors.
"]

mod error;
/// Shape types.
pub mod types;

pub use error::GeomError;
pub use types::aabb::Aabb;
pub use types::circle::Circle;
pub use types::plane::Plane;
pub use types::rect2::Rect2;
pub use types::rect2i::Rect2i;
pub use types::sphere::Sphere;
pub use types::transform::Transform;
