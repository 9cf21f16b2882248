// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types (rectangles, circles, boxes, spheres, planes, transforms).
//!
//! Conventions shared by every box-like type:
//! - Stored as `position` + signed `size`; nothing forces the size positive.
//! - Extents are resolved with `min`/`max`, so queries are independent of the
//!   size sign. Derived boxes (`intersection`, `merge`, `expand_to`,
//!   `transform`) always come back with a non-negative size.
//! - Plain predicates exclude borders; the `*_inclusive` variants include them.

#[doc = "Axis-aligned bounding boxes in 3D."]
pub mod aabb;
#[doc = "Circles in the plane."]
pub mod circle;
#[doc = "Infinite planes in `normal · p = d` form."]
pub mod plane;
#[doc = "Float rectangles."]
pub mod rect2;
#[doc = "Integer rectangles."]
pub mod rect2i;
#[doc = "Spheres in 3D."]
pub mod sphere;
#[doc = "Translation/rotation/scale transforms."]
pub mod transform;
