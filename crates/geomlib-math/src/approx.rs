// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Global epsilon used by every tolerance comparison in the workspace.
///
/// The comparison is scale-aware: the allowed difference grows with the
/// magnitude of the operands once they exceed `1.0`.
pub const EPSILON: f32 = 1e-6;

/// Returns `true` when `a` and `b` are equal within [`EPSILON`].
///
/// The test is `|a - b| <= EPSILON * max(1, |a|, |b|)`, so values near zero
/// use an absolute tolerance and large values a relative one. Infinities of
/// the same sign compare equal; NaN never does.
///
/// # Examples
/// ```
/// use geomlib_math::approx_eq;
/// assert!(approx_eq(2.0, 1.9999999));
/// assert!(approx_eq(1.0e7, 1.0e7 + 1.0));
/// assert!(!approx_eq(0.0, 1.0e-5));
/// ```
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let scale = 1.0_f32.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// Returns `true` when `value` is within [`EPSILON`] of zero.
pub fn is_zero_approx(value: f32) -> bool {
    value.abs() <= EPSILON
}

/// Tolerance-based equality for composite values.
///
/// Implementations compare their stored components pairwise with
/// [`approx_eq`]. This is a field comparison, not a geometric one: two
/// encodings of the same region may differ (see the shapes' congruence
/// predicates for the geometric notion).
pub trait ApproxEq {
    /// Returns `true` if every component of `self` is approximately equal to
    /// the matching component of `other`.
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(*self, *other)
    }
}

impl<const N: usize> ApproxEq for [f32; N] {
    fn approx_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}
