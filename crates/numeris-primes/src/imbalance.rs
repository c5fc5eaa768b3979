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

//! # Imbalance
//!
//! The imbalance of two integers is their absolute difference relative to
//! their sum:
//!
//! ```text
//! imbalance(p, q) = |p - q| / (p + q)
//! ```
//!
//! It is available as an `f64` or as an exact [`Imbalance`] ratio in lowest
//! terms, together with accessors for the reduced numerator and denominator.
//! Inputs of any primitive integer type are widened to `BigInt` first, so
//! neither the sum nor the difference can overflow, and the reduced ratio is
//! never truncated to the input type. The ratio is undefined only when
//! `p + q == 0`; every entry point then fails with
//! `ArithmeticError::DivisionByZero`.
//!
//! The sign of a mixed-sign ratio is carried by the numerator, i.e. the
//! reduced denominator is always positive.
//!
//! ```rust
//! use num_bigint::BigInt;
//! use numeris_primes::imbalance::{imbalance, imbalance_lowest_terms};
//!
//! assert_eq!(imbalance(5_i64, 7).unwrap(), 0.16666666666666666);
//! let r = imbalance_lowest_terms(5_i64, 7).unwrap();
//! assert_eq!((r.numer(), r.denom()), (&BigInt::from(1), &BigInt::from(6)));
//! assert_eq!(imbalance(i64::MAX, i64::MAX).unwrap(), 0.0);
//! assert!(imbalance(3_i64, -3).is_err());
//! ```

use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{PrimInt, Signed, ToPrimitive, Zero};
use numeris_core::error::{ArithmeticError, Result};

/// An exact imbalance ratio in lowest terms.
pub type Imbalance = Ratio<BigInt>;

/// The absolute difference and the non-zero sum of `p` and `q`, widened.
#[inline]
fn difference_and_sum<T>(p: T, q: T) -> Result<(BigInt, BigInt)>
where
    T: PrimInt + Into<BigInt>,
{
    let (p, q): (BigInt, BigInt) = (p.into(), q.into());
    let sum = &p + &q;
    if sum.is_zero() {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    Ok(((p - q).abs(), sum))
}

/// Returns `|p - q| / (p + q)` as an `f64`.
///
/// # Errors
///
/// `ArithmeticError::DivisionByZero` if `p + q == 0`.
///
/// # Examples
///
/// ```rust
/// # use numeris_primes::imbalance::imbalance;
/// let f = imbalance(18446744073709551557_u64, 18446744073709551533).unwrap();
/// assert!(f > 6.5e-19 && f < 6.6e-19);
/// ```
pub fn imbalance<T>(p: T, q: T) -> Result<f64>
where
    T: PrimInt + Into<BigInt>,
{
    let (difference, sum) = difference_and_sum(p, q)?;
    // Both magnitudes are below 2^129 and always convert.
    match (difference.to_f64(), sum.to_f64()) {
        (Some(numerator), Some(denominator)) => Ok(numerator / denominator),
        _ => Err(ArithmeticError::Overflow.into()),
    }
}

/// Returns `|p - q| / (p + q)` as an exact ratio in lowest terms.
///
/// # Errors
///
/// See [`imbalance`].
///
/// # Examples
///
/// ```rust
/// # use numeris_primes::imbalance::imbalance_lowest_terms;
/// # use num_bigint::BigInt;
/// # use num_rational::Ratio;
/// assert_eq!(
///     imbalance_lowest_terms(3_u32, 13).unwrap(),
///     Ratio::new(BigInt::from(5), BigInt::from(8))
/// );
/// ```
pub fn imbalance_lowest_terms<T>(p: T, q: T) -> Result<Imbalance>
where
    T: PrimInt + Into<BigInt>,
{
    let (difference, sum) = difference_and_sum(p, q)?;
    Ok(Ratio::new(difference, sum))
}

/// Numerator of [`imbalance_lowest_terms`].
#[inline]
pub fn imbalance_numerator<T>(p: T, q: T) -> Result<BigInt>
where
    T: PrimInt + Into<BigInt>,
{
    imbalance_lowest_terms(p, q).map(|r| r.numer().clone())
}

/// Denominator of [`imbalance_lowest_terms`].
#[inline]
pub fn imbalance_denominator<T>(p: T, q: T) -> Result<BigInt>
where
    T: PrimInt + Into<BigInt>,
{
    imbalance_lowest_terms(p, q).map(|r| r.denom().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeris_core::NumerisError;

    const DIV_ZERO: NumerisError = NumerisError::Arithmetic(ArithmeticError::DivisionByZero);

    const LARGEST_U64_PRIME: u64 = 18_446_744_073_709_551_557;
    const SECOND_LARGEST_U64_PRIME: u64 = 18_446_744_073_709_551_533;

    fn big(n: i128) -> BigInt {
        BigInt::from(n)
    }

    fn ratio(numer: i128, denom: i128) -> Imbalance {
        Ratio::new(big(numer), big(denom))
    }

    #[test]
    fn test_imbalance_five_seven() {
        assert_eq!(imbalance(5_i64, 7), Ok(0.16666666666666666));
        assert_eq!(imbalance(7_i64, 5), Ok(0.16666666666666666));
    }

    #[test]
    fn test_lowest_terms_five_seven() {
        let r = imbalance_lowest_terms(5_i64, 7).unwrap();
        assert_eq!(r.numer(), &big(1));
        assert_eq!(r.denom(), &big(6));
        assert_eq!(imbalance_numerator(5_i64, 7), Ok(big(1)));
        assert_eq!(imbalance_denominator(5_i64, 7), Ok(big(6)));
    }

    #[test]
    fn test_equal_values_are_balanced() {
        assert_eq!(imbalance(11_u64, 11), Ok(0.0));
        assert_eq!(imbalance_numerator(11_u64, 11), Ok(big(0)));
        assert_eq!(imbalance_denominator(11_u64, 11), Ok(big(1)));
    }

    #[test]
    fn test_opposite_values_divide_by_zero() {
        for p in [1_i64, 2, 17, -5, i64::MAX] {
            assert_eq!(imbalance(p, -p), Err(DIV_ZERO));
            assert_eq!(imbalance_lowest_terms(p, -p), Err(DIV_ZERO));
            assert_eq!(imbalance_numerator(p, -p), Err(DIV_ZERO));
            assert_eq!(imbalance_denominator(p, -p), Err(DIV_ZERO));
        }
    }

    #[test]
    fn test_both_zero_divides_by_zero() {
        assert_eq!(imbalance(0_u32, 0), Err(DIV_ZERO));
        assert_eq!(imbalance_lowest_terms(0_u128, 0), Err(DIV_ZERO));
    }

    #[test]
    fn test_mixed_sign() {
        // |-5 - 2| / (-5 + 2) = 7 / -3
        let r = imbalance_lowest_terms(-5_i32, 2).unwrap();
        assert_eq!(r, ratio(-7, 3));
        let f = imbalance(-5_i32, 2).unwrap();
        assert!((f - (-7.0 / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_reduction() {
        // |12 - 4| / 16 = 1/2
        assert_eq!(imbalance_lowest_terms(12_u8, 4), Ok(ratio(1, 2)));
        assert_eq!(imbalance_denominator(12_u8, 4), Ok(big(2)));
    }

    #[test]
    fn test_sum_beyond_input_type() {
        assert_eq!(imbalance(i64::MAX, i64::MAX), Ok(0.0));
        assert_eq!(imbalance_lowest_terms(i64::MAX, i64::MAX), Ok(ratio(0, 1)));
        // 254 / 256
        assert_eq!(imbalance_lowest_terms(u8::MAX, 1), Ok(ratio(127, 128)));
        assert_eq!(imbalance(u128::MAX, u128::MAX), Ok(0.0));
    }

    #[test]
    fn test_difference_beyond_input_type() {
        // |i32::MIN - 5| = 2^31 + 5, sum = -(2^31 - 5); coprime.
        let numer = 2_147_483_653_i128;
        let denom = 2_147_483_643_i128;
        assert_eq!(imbalance_lowest_terms(i32::MIN, 5), Ok(ratio(-numer, denom)));
        let f = imbalance(i32::MIN, 5).unwrap();
        assert!((f - (-(numer as f64) / denom as f64)).abs() < 1e-15);
        assert_eq!(imbalance(i8::MIN, 1), Ok(-129.0 / 127.0));
    }

    #[test]
    fn test_largest_u64_primes() {
        let (p, q) = (LARGEST_U64_PRIME, SECOND_LARGEST_U64_PRIME);
        // 24 / 36893488147419103090 = 12 / 18446744073709551545
        let expected = Ratio::new(big(12), big(18_446_744_073_709_551_545));
        assert_eq!(imbalance_lowest_terms(p, q), Ok(expected.clone()));
        assert_eq!(imbalance_lowest_terms(q, p), Ok(expected));
        assert_eq!(imbalance_numerator(p, q), Ok(big(12)));

        let f = imbalance(p, q).unwrap();
        let reference = 12.0 / 18_446_744_073_709_551_545.0_f64;
        assert!(((f / reference) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_fraction_matches_float() {
        for (p, q) in [(3_i64, 5), (101, 103), (2, 999_983), (7, 7)] {
            let r = imbalance_lowest_terms(p, q).unwrap();
            let f = imbalance(p, q).unwrap();
            let exact = r.numer().to_f64().unwrap() / r.denom().to_f64().unwrap();
            assert!((exact - f).abs() < 1e-15);
            assert!((0.0..1.0).contains(&f));
        }
    }

    mod property_based_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: numer * (p + q) == denom * |p - q| for every non-zero sum
            #[test]
            fn prop_ratio_cross_multiplies(p in any::<i64>(), q in any::<i64>()) {
                let sum = p as i128 + q as i128;
                let difference = (p as i128 - q as i128).abs();
                match imbalance_lowest_terms(p, q) {
                    Ok(r) => {
                        prop_assert!(sum != 0);
                        prop_assert!(r.denom().is_positive());
                        prop_assert_eq!(r.numer() * big(sum), r.denom() * big(difference));
                    }
                    Err(e) => {
                        prop_assert_eq!(sum, 0);
                        prop_assert_eq!(e, DIV_ZERO);
                    }
                }
            }

            /// Property: unsigned imbalance lies in [0, 1]
            #[test]
            fn prop_unsigned_in_unit_interval(p in any::<u64>(), q in any::<u64>()) {
                prop_assume!(p != 0 || q != 0);
                let f = imbalance(p, q).unwrap();
                prop_assert!((0.0..=1.0).contains(&f));
            }
        }
    }
}
