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

//! # Digit Decomposition
//!
//! Two views of a non-negative integer in a base `b >= 2`:
//!
//! - **Remainder order** ([`digits`]): the remainders of repeated division by
//!   `b`, least-significant digit first. Zero has no digits and yields an
//!   empty sequence.
//! - **Positional representation** ([`positional_representation`]): the
//!   conventional most-significant-first string, e.g. `"7b"` for 123 in base
//!   16. Zero is rendered as `"0"`.
//!
//! The two views are reversed relative to each other. [`centre_of_mass`] is
//! defined on the positional view, while digit statistics in feature
//! extraction are taken over the remainder-order view.
//!
//! ```rust
//! use numeris_features::digits::{centre_of_mass, digits, positional_representation};
//!
//! assert_eq!(digits(123_u32, 10).unwrap(), vec![3, 2, 1]);
//! assert_eq!(positional_representation(123_u32, 16).unwrap(), "7b");
//! assert_eq!(centre_of_mass(123_u32, 10).unwrap(), 1.0);
//! assert!(digits(0_u32, 7).unwrap().is_empty());
//! ```

use numeris_core::{
    error::{ArithmeticError, MAX_POSITIONAL_RADIX, Result, ValidationError, validate_base},
    num::DigitNumeric,
    stats::INLINE_DIGITS,
};
use smallvec::SmallVec;

/// Inline buffer for remainder-order digits.
pub type DigitBuffer = SmallVec<[u32; INLINE_DIGITS]>;

/// The base used by the `*_decimal` convenience functions.
pub const DECIMAL: u32 = 10;

#[inline(always)]
fn validate_number<T>(number: T) -> Result<()>
where
    T: DigitNumeric,
{
    if number.is_negative_value() {
        return Err(ValidationError::NegativeNumber.into());
    }
    Ok(())
}

/// Writes the remainder-order digits of `number` in `base` into `buffer`.
///
/// The buffer is cleared first.
///
/// # Errors
///
/// `ValidationError::InvalidBase` if `base < 2`,
/// `ValidationError::NegativeNumber` if `number < 0`.
pub fn digits_into<T>(number: T, base: u32, buffer: &mut DigitBuffer) -> Result<()>
where
    T: DigitNumeric,
{
    validate_base(base)?;
    validate_number(number)?;
    buffer.clear();

    let Some(radix) = T::from_u32(base) else {
        // The base exceeds the range of `T`, so `number` is a single digit.
        if !number.is_zero() {
            buffer.push(number.to_u32().ok_or(ArithmeticError::Overflow)?);
        }
        return Ok(());
    };

    let mut n = number;
    while n > T::zero() {
        let digit = (n % radix).to_u32().ok_or(ArithmeticError::Overflow)?;
        buffer.push(digit);
        n = n / radix;
    }
    Ok(())
}

/// Returns the digits of `number` in `base`, least-significant first.
///
/// # Errors
///
/// See [`digits_into`].
///
/// # Examples
///
/// ```rust
/// # use numeris_features::digits::digits;
/// assert_eq!(digits(6_u8, 2).unwrap(), vec![0, 1, 1]);
/// assert!(digits(5_i32, 1).is_err());
/// assert!(digits(-5_i32, 10).is_err());
/// ```
pub fn digits<T>(number: T, base: u32) -> Result<Vec<u32>>
where
    T: DigitNumeric,
{
    let mut buffer = DigitBuffer::new();
    digits_into(number, base, &mut buffer)?;
    Ok(buffer.into_vec())
}

/// [`digits`] in base 10.
#[inline]
pub fn digits_decimal<T>(number: T) -> Result<Vec<u32>>
where
    T: DigitNumeric,
{
    digits(number, DECIMAL)
}

/// Returns the most-significant-first representation of `number` in `base`,
/// using the digit alphabet `0-9a-z`.
///
/// # Errors
///
/// `ValidationError::InvalidBase` if `base < 2`,
/// `ValidationError::UnsupportedRadix` if `base > 36`,
/// `ValidationError::NegativeNumber` if `number < 0`.
pub fn positional_representation<T>(number: T, base: u32) -> Result<String>
where
    T: DigitNumeric,
{
    validate_base(base)?;
    if base > MAX_POSITIONAL_RADIX {
        return Err(ValidationError::UnsupportedRadix {
            base,
            max: MAX_POSITIONAL_RADIX,
        }
        .into());
    }

    let mut buffer = DigitBuffer::new();
    digits_into(number, base, &mut buffer)?;
    if buffer.is_empty() {
        return Ok(String::from("0"));
    }

    buffer
        .iter()
        .rev()
        .map(|&d| char::from_digit(d, base))
        .collect::<Option<String>>()
        .ok_or_else(|| {
            ValidationError::UnsupportedRadix {
                base,
                max: MAX_POSITIONAL_RADIX,
            }
            .into()
        })
}

/// Mean 0-based position of the non-zero digits in a positional representation.
///
/// Returns `0.0` when there is no non-zero digit.
#[inline]
pub fn centre_of_mass_of_representation(representation: &str) -> f64 {
    let (sum, count) = representation
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != '0')
        .fold((0_usize, 0_usize), |(sum, count), (i, _)| (sum + i, count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Mean 0-based position of the non-zero digits of `number` in its
/// positional (most-significant-first) representation in `base`.
///
/// Zero has no non-zero digits and yields `0.0`.
///
/// # Errors
///
/// See [`positional_representation`].
///
/// # Examples
///
/// ```rust
/// # use numeris_features::digits::centre_of_mass;
/// // "1001" -> non-zero digits at positions 0 and 3
/// assert_eq!(centre_of_mass(9_u32, 2).unwrap(), 1.5);
/// assert_eq!(centre_of_mass(0_u32, 2).unwrap(), 0.0);
/// ```
pub fn centre_of_mass<T>(number: T, base: u32) -> Result<f64>
where
    T: DigitNumeric,
{
    positional_representation(number, base).map(|r| centre_of_mass_of_representation(&r))
}

/// [`centre_of_mass`] in base 10.
#[inline]
pub fn centre_of_mass_decimal<T>(number: T) -> Result<f64>
where
    T: DigitNumeric,
{
    centre_of_mass(number, DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeris_core::NumerisError;

    fn invalid_base(base: u32) -> NumerisError {
        NumerisError::Validation(ValidationError::InvalidBase { base })
    }

    #[test]
    fn test_digits_123_base_10() {
        assert_eq!(digits(123_u64, 10).unwrap(), vec![3, 2, 1]);
        assert_eq!(digits_decimal(123_i32).unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_digits_of_zero_is_empty() {
        for base in 2..=40 {
            assert!(digits(0_u64, base).unwrap().is_empty());
        }
    }

    #[test]
    fn test_digits_rejects_small_base() {
        assert_eq!(digits(10_u64, 0), Err(invalid_base(0)));
        assert_eq!(digits(10_u64, 1), Err(invalid_base(1)));
        // Base is checked even for zero.
        assert_eq!(digits(0_u64, 1), Err(invalid_base(1)));
    }

    #[test]
    fn test_digits_rejects_negative_number() {
        assert_eq!(
            digits(-1_i64, 10),
            Err(NumerisError::Validation(ValidationError::NegativeNumber))
        );
    }

    #[test]
    fn test_digits_power_of_two_in_base_two() {
        let d = digits(1_u64 << 63, 2).unwrap();
        assert_eq!(d.len(), 64);
        assert!(d[..63].iter().all(|&x| x == 0));
        assert_eq!(d[63], 1);

        let d = digits(1_u128 << 100, 2).unwrap();
        assert_eq!(d.len(), 101);
        assert_eq!(d.iter().filter(|&&x| x != 0).count(), 1);
    }

    #[test]
    fn test_digits_base_larger_than_type() {
        assert_eq!(digits(200_u8, 1000).unwrap(), vec![200]);
        assert_eq!(digits(100_i8, 300).unwrap(), vec![100]);
        assert!(digits(0_u8, 1000).unwrap().is_empty());
    }

    #[test]
    fn test_digits_into_reuses_buffer() {
        let mut buffer = DigitBuffer::new();
        digits_into(255_u32, 16, &mut buffer).unwrap();
        assert_eq!(buffer.as_slice(), &[15, 15]);
        digits_into(8_u32, 2, &mut buffer).unwrap();
        assert_eq!(buffer.as_slice(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_positional_representation() {
        assert_eq!(positional_representation(123_u32, 10).unwrap(), "123");
        assert_eq!(positional_representation(123_u32, 2).unwrap(), "1111011");
        assert_eq!(positional_representation(35_u32, 36).unwrap(), "z");
        assert_eq!(positional_representation(0_u32, 5).unwrap(), "0");
    }

    #[test]
    fn test_positional_representation_rejects_large_radix() {
        assert_eq!(
            positional_representation(10_u32, 37),
            Err(NumerisError::Validation(ValidationError::UnsupportedRadix {
                base: 37,
                max: 36
            }))
        );
        assert_eq!(positional_representation(10_u32, 1), Err(invalid_base(1)));
    }

    #[test]
    fn test_positional_is_reverse_of_remainder_order() {
        let number = 987_654_321_u64;
        for base in 2..=36 {
            let rendered: Vec<u32> = positional_representation(number, base)
                .unwrap()
                .chars()
                .map(|c| c.to_digit(base).unwrap())
                .collect();
            let mut remainders = digits(number, base).unwrap();
            remainders.reverse();
            assert_eq!(rendered, remainders, "base {}", base);
        }
    }

    #[test]
    fn test_centre_of_mass() {
        assert_eq!(centre_of_mass(123_u32, 10).unwrap(), 1.0);
        assert_eq!(centre_of_mass_decimal(123_u32).unwrap(), 1.0);
        // "100" -> only position 0
        assert_eq!(centre_of_mass(100_u32, 10).unwrap(), 0.0);
        // "1000001" -> positions 0 and 6
        assert_eq!(centre_of_mass(65_u32, 2).unwrap(), 3.0);
        // "1111011" -> positions 0, 1, 2, 3, 5, 6
        assert_eq!(centre_of_mass(123_u32, 2).unwrap(), 17.0 / 6.0);
    }

    #[test]
    fn test_centre_of_mass_of_zero() {
        for base in 2..=36 {
            assert_eq!(centre_of_mass(0_u64, base).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_centre_of_mass_rejects_small_base() {
        assert_eq!(centre_of_mass(10_u32, 1), Err(invalid_base(1)));
    }

    #[test]
    fn test_centre_of_mass_of_representation() {
        assert_eq!(centre_of_mass_of_representation(""), 0.0);
        assert_eq!(centre_of_mass_of_representation("000"), 0.0);
        assert_eq!(centre_of_mass_of_representation("0a0b"), 2.0);
    }

    mod property_based_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: sum(d * base^i) reconstructs the number
            #[test]
            fn prop_digits_roundtrip(number in any::<u64>(), base in 2u32..=64) {
                let d = digits(number, base).unwrap();
                let rebuilt = d
                    .iter()
                    .rev()
                    .fold(0_u128, |acc, &digit| acc * base as u128 + digit as u128);
                prop_assert_eq!(rebuilt, number as u128);
            }

            /// Property: every digit lies in [0, base) and the last digit is non-zero
            #[test]
            fn prop_digits_in_range(number in 1u64.., base in 2u32..=64) {
                let d = digits(number, base).unwrap();
                prop_assert!(d.iter().all(|&x| x < base));
                prop_assert_ne!(d.last().copied(), Some(0));
            }

            /// Property: centre of mass lies within the representation
            #[test]
            fn prop_centre_of_mass_bounds(number in any::<u32>(), base in 2u32..=36) {
                let com = centre_of_mass(number, base).unwrap();
                let len = positional_representation(number, base).unwrap().len();
                prop_assert!(com >= 0.0);
                prop_assert!(com <= (len - 1) as f64);
            }
        }
    }
}
