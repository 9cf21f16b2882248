// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Float32 math helpers covering scalar tolerance, 2D/3D vectors, affine
//! matrices and quaternions.
//!
//! All operations round to `f32`. Matrices are stored column-major; the
//! affine shapes (`Mat2x3`, `Mat3x4`) keep their translation in the last
//! column. Nothing here allocates, and every type is a `Copy` value.

mod affine;
mod approx;
mod error;
mod mat2;
mod mat2x3;
mod mat3;
mod mat3x4;
mod mat4;
mod quat;
mod vec2;
mod vec2i;
mod vec3;

pub use affine::{Affine2, Affine3};
pub use approx::{approx_eq, is_zero_approx, ApproxEq, EPSILON};
pub use error::MathError;
pub use mat2::Mat2;
pub use mat2x3::Mat2x3;
pub use mat3::Mat3;
pub use mat3x4::Mat3x4;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec2i::Vec2i;
pub use vec3::Vec3;

/// Returns `-1.0`, `0.0` or `1.0` depending on the sign of `value`.
///
/// Unlike [`f32::signum`], zero (of either sign) maps to `0.0`. NaN stays NaN.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value * 0.0
    }
}
