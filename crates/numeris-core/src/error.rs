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

//! # Error Taxonomy
//!
//! All fallible operations in the Numeris crates report one of two error
//! families:
//!
//! - `ValidationError`: the caller supplied an argument outside the contract
//!   of the operation (a base below two, a negative number where only
//!   non-negative values have a digit representation, an inverted base range).
//!   These are raised before any partial computation takes place.
//! - `ArithmeticError`: the arguments were well formed but the requested
//!   quantity is undefined or unrepresentable, e.g. a ratio whose
//!   denominator is zero.
//!
//! `NumerisError` wraps both so that higher layers can propagate either with
//! a single `?`.
//!
//! Non-finite feature values are deliberately *not* an error; they are
//! neutralized by [`crate::sanitize`].

/// Largest radix for which a positional representation can be rendered with a
/// single alphanumeric character per digit (`0-9a-z`).
pub const MAX_POSITIONAL_RADIX: u32 = 36;

/// An argument violated the contract of the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The base is smaller than two.
    InvalidBase {
        /// The rejected base.
        base: u32,
    },
    /// A positional representation was requested in a base without a
    /// single-character digit alphabet.
    UnsupportedRadix {
        /// The rejected base.
        base: u32,
        /// The largest supported base.
        max: u32,
    },
    /// The number is negative where only non-negative numbers are accepted.
    NegativeNumber,
    /// The base range is empty or starts below two.
    InvalidBaseRange {
        /// Inclusive lower bound that was supplied.
        min_base: u32,
        /// Inclusive upper bound that was supplied.
        max_base: u32,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBase { base } => write!(f, "Base must be at least 2, got {}", base),
            Self::UnsupportedRadix { base, max } => write!(
                f,
                "Positional representation is not available for base {} (maximum is {})",
                base, max
            ),
            Self::NegativeNumber => write!(f, "Number must be non-negative"),
            Self::InvalidBaseRange { min_base, max_base } => write!(
                f,
                "Invalid base range [{}, {}]: require 2 <= min_base <= max_base",
                min_base, max_base
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The requested quantity is undefined or not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A ratio was requested with a zero denominator.
    DivisionByZero,
    /// A value does not fit into its target numeric type.
    Overflow,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Arithmetic overflow"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// The error type shared by all Numeris crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumerisError {
    /// An argument was rejected before computation started.
    Validation(ValidationError),
    /// The computation is undefined for the given arguments.
    Arithmetic(ArithmeticError),
}

impl std::fmt::Display for NumerisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Arithmetic(e) => write!(f, "Arithmetic error: {}", e),
        }
    }
}

impl std::error::Error for NumerisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}

impl From<ValidationError> for NumerisError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ArithmeticError> for NumerisError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

/// Convenience alias used throughout the Numeris crates.
pub type Result<T> = std::result::Result<T, NumerisError>;

/// Returns `Ok(())` if `base` is a valid digit base.
///
/// # Examples
///
/// ```rust
/// # use numeris_core::error::{validate_base, NumerisError, ValidationError};
///
/// assert!(validate_base(2).is_ok());
/// assert_eq!(
///     validate_base(1),
///     Err(NumerisError::Validation(ValidationError::InvalidBase { base: 1 }))
/// );
/// ```
#[inline]
pub fn validate_base(base: u32) -> Result<()> {
    if base < 2 {
        return Err(ValidationError::InvalidBase { base }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validate_base_accepts_two_and_above() {
        assert!(validate_base(2).is_ok());
        assert!(validate_base(10).is_ok());
        assert!(validate_base(u32::MAX).is_ok());
    }

    #[test]
    fn test_validate_base_rejects_zero_and_one() {
        for base in [0, 1] {
            assert_eq!(
                validate_base(base),
                Err(NumerisError::Validation(ValidationError::InvalidBase {
                    base
                }))
            );
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::InvalidBase { base: 1 }.to_string(),
            "Base must be at least 2, got 1"
        );
        assert_eq!(
            ValidationError::NegativeNumber.to_string(),
            "Number must be non-negative"
        );
        assert_eq!(
            NumerisError::from(ArithmeticError::DivisionByZero).to_string(),
            "Arithmetic error: Division by zero"
        );
        assert_eq!(
            NumerisError::from(ValidationError::InvalidBaseRange {
                min_base: 5,
                max_base: 3
            })
            .to_string(),
            "Validation error: Invalid base range [5, 3]: require 2 <= min_base <= max_base"
        );
    }

    #[test]
    fn test_source_is_inner_error() {
        let err = NumerisError::from(ArithmeticError::Overflow);
        let source = err.source().expect("wrapped error has a source");
        assert_eq!(source.to_string(), "Arithmetic overflow");
    }
}
