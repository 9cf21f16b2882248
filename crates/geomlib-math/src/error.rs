// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by the checked matrix operations.
///
/// The unchecked counterparts never fail; they let NaN or infinity flow into
/// the result instead.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MathError {
    /// The matrix has no inverse because its determinant is (approximately) zero.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant of the linear part that failed the check.
        determinant: f32,
    },
}
