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

//! # Digit Numeric Trait
//!
//! Unified integer bounds for digit decomposition and feature extraction.
//! `DigitNumeric` collects the intrinsic traits (`PrimInt`), the conversions
//! needed to move between integer and floating-point space, and the
//! formatting/hashing traits used by diagnostics into a single alias.
//!
//! All primitive integer types (`i8` .. `i128`, `u8` .. `u128`, `isize`,
//! `usize`) satisfy the bound through the blanket implementation.

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};
use std::hash::Hash;

/// A trait alias for integer types that can be decomposed into digits.
pub trait DigitNumeric:
    PrimInt + FromPrimitive + ToPrimitive + std::fmt::Debug + std::fmt::Display + Hash
{
    /// Returns `true` if the value is strictly below zero.
    ///
    /// Always `false` for unsigned types.
    #[inline(always)]
    fn is_negative_value(self) -> bool {
        self < Self::zero()
    }

    /// Converts the value into an `f64`, rounding to the nearest representable float.
    ///
    /// Every primitive integer fits into the `f64` range, so this never fails.
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> DigitNumeric for T where
    T: PrimInt + FromPrimitive + ToPrimitive + std::fmt::Debug + std::fmt::Display + Hash
{
}
