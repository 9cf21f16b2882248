// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Reasons a checked (`try_*`) geometric query has no answer.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The line misses the shape entirely.
    #[error("line does not intersect the shape")]
    NoIntersection,
    /// The line is parallel to the plane and not contained in it.
    #[error("line is parallel to the plane")]
    ParallelLine,
    /// The three plane normals are linearly dependent, so there is no unique
    /// intersection point.
    #[error("planes do not meet in a single point (triple product {triple_product})")]
    DegeneratePlanes {
        /// Scalar triple product of the three normals.
        triple_product: f32,
    },
    /// The three points lie on one line and define no circle.
    #[error("points are collinear")]
    CollinearPoints,
}
