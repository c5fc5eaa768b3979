// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Non-Finite Sanitization
//!
//! Degenerate inputs (the number zero, digit sequences with one element or a
//! single repeated value) make several digit statistics undefined. Rather
//! than guarding each computation, feature values are computed with plain
//! IEEE-754 arithmetic and the assembled result is passed through
//! [`sanitize_in_place`] once, replacing every `NaN` and `±∞` with `0.0`.
//!
//! ```rust
//! use numeris_core::sanitize::sanitize_in_place;
//!
//! let mut values = [1.5, f64::NAN, f64::INFINITY, -2.0, f64::NEG_INFINITY];
//! let replaced = sanitize_in_place(values.iter_mut());
//! assert_eq!(replaced, 3);
//! assert_eq!(values, [1.5, 0.0, 0.0, -2.0, 0.0]);
//! ```

/// The value substituted for non-finite features.
pub const NON_FINITE_REPLACEMENT: f64 = 0.0;

/// Returns `value` if it is finite, `0.0` otherwise.
///
/// # Examples
///
/// ```rust
/// # use numeris_core::sanitize::finite_or_zero;
/// assert_eq!(finite_or_zero(3.25), 3.25);
/// assert_eq!(finite_or_zero(f64::NAN), 0.0);
/// assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
/// ```
#[inline(always)]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        NON_FINITE_REPLACEMENT
    }
}

/// Replaces every non-finite value yielded by `values` with `0.0`.
///
/// Returns the number of values that were replaced.
pub fn sanitize_in_place<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a mut f64>,
{
    let mut replaced = 0;
    for value in values {
        if !value.is_finite() {
            *value = NON_FINITE_REPLACEMENT;
            replaced += 1;
        }
    }
    replaced
}

/// Returns `true` if every value yielded by `values` is finite.
#[inline]
pub fn all_finite<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a f64>,
{
    values.into_iter().all(|v| v.is_finite())
}
