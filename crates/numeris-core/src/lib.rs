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

//! # Numeris Core
//!
//! Foundational building blocks shared by the Numeris crates: a single
//! error taxonomy, the integer trait alias used for digit decomposition, the
//! post-hoc non-finite sanitization policy, and the fixed set of digit
//! distribution statistics consumed by feature extraction.
//!
//! ## Modules
//!
//! - `error`: `ValidationError`, `ArithmeticError` and the wrapping
//!   `NumerisError`, plus the crate-wide `Result` alias.
//! - `num`: `DigitNumeric`, a blanket trait alias over all primitive integers.
//! - `sanitize`: Replace `NaN`/`±∞` with `0.0` in a single pass.
//! - `stats`: Mean, median, population standard deviation, skewness and
//!   excess kurtosis over digit sequences.

pub mod error;
pub mod num;
pub mod sanitize;
pub mod stats;

pub use error::{ArithmeticError, NumerisError, Result, ValidationError};
pub use num::DigitNumeric;
