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

//! # Digit Statistics
//!
//! A fixed, named set of distribution statistics over a sequence of digit
//! values: mean, median, population standard deviation, skewness and excess
//! kurtosis. This is not a general statistics toolkit; it provides exactly
//! the summaries used by feature extraction.
//!
//! ## Conventions
//!
//! - The mean and median of an empty sequence are `NaN`.
//! - The median of an even-length sequence is the average of the two middle
//!   values.
//! - The standard deviation is the population form (divides by `n`).
//! - Skewness is the biased sample skewness `m3 / m2^(3/2)`.
//! - Kurtosis is Fisher's biased excess kurtosis `m4 / m2^2 - 3`.
//! - Skewness and kurtosis are `NaN` when the variance is (numerically) zero.
//!
//! Non-finite results are expected for degenerate inputs and are left for the
//! caller to sanitize.
//!
//! ## Submodules
//!
//! - `moments`: Central moment accumulation.
//! - `order`: Order statistics (median).

pub mod moments;
pub mod order;

use crate::stats::moments::CentralMoments;
use smallvec::SmallVec;

/// Inline capacity for digit buffers; enough for a `u64` in base 2.
pub const INLINE_DIGITS: usize = 64;

/// Arithmetic mean of `values`; `NaN` if empty.
///
/// # Examples
///
/// ```rust
/// # use numeris_core::stats::mean;
/// assert_eq!(mean(&[3.0, 2.0, 1.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of `values`; `NaN` if empty.
#[inline]
pub fn median(values: &[f64]) -> f64 {
    order::median(values)
}

/// Population standard deviation of `values`; `NaN` if empty.
#[inline]
pub fn population_std(values: &[f64]) -> f64 {
    CentralMoments::from_values(values).population_std()
}

/// Biased sample skewness of `values`.
#[inline]
pub fn skewness(values: &[f64]) -> f64 {
    CentralMoments::from_values(values).skewness()
}

/// Fisher (excess) kurtosis of `values`, biased form.
#[inline]
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    CentralMoments::from_values(values).excess_kurtosis()
}

/// The five distribution statistics of a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Biased sample skewness.
    pub skew: f64,
    /// Fisher excess kurtosis.
    pub kurtosis: f64,
}

impl DigitStatistics {
    /// Computes all statistics over a sequence of digit values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numeris_core::stats::DigitStatistics;
    /// let stats = DigitStatistics::from_digits(&[3, 2, 1]);
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.median, 2.0);
    /// assert_eq!(stats.skew, 0.0);
    /// ```
    pub fn from_digits(digits: &[u32]) -> Self {
        let values: SmallVec<[f64; INLINE_DIGITS]> = digits.iter().map(|&d| d as f64).collect();
        Self::from_values(&values)
    }

    /// Computes all statistics over a sequence of floating-point values.
    pub fn from_values(values: &[f64]) -> Self {
        let moments = CentralMoments::from_values(values);
        Self {
            mean: moments.mean(),
            median: order::median(values),
            std: moments.population_std(),
            skew: moments.skewness(),
            kurtosis: moments.excess_kurtosis(),
        }
    }

    /// Returns `true` if every statistic is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite()
            && self.median.is_finite()
            && self.std.is_finite()
            && self.skew.is_finite()
            && self.kurtosis.is_finite()
    }
}

impl std::fmt::Display for DigitStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DigitStatistics(mean: {}, median: {}, std: {}, skew: {}, kurtosis: {})",
            self.mean, self.median, self.std, self.skew, self.kurtosis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * b.abs().max(1.0)
    }

    #[test]
    fn test_digits_of_123_base_10() {
        let s = DigitStatistics::from_digits(&[3, 2, 1]);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert!(close(s.std, (2.0_f64 / 3.0).sqrt()));
        assert_eq!(s.skew, 0.0);
        // m2 = 2/3, m4 = 2/3 -> m4 / m2^2 - 3 = 1.5 - 3
        assert!(close(s.kurtosis, -1.5));
        assert!(s.is_finite());
    }

    #[test]
    fn test_empty_sequence_is_not_finite() {
        let s = DigitStatistics::from_digits(&[]);
        assert!(s.mean.is_nan());
        assert!(s.median.is_nan());
        assert!(s.std.is_nan());
        assert!(s.skew.is_nan());
        assert!(s.kurtosis.is_nan());
        assert!(!s.is_finite());
    }

    #[test]
    fn test_single_digit_has_zero_std_and_undefined_shape() {
        let s = DigitStatistics::from_digits(&[7]);
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.std, 0.0);
        assert!(s.skew.is_nan());
        assert!(s.kurtosis.is_nan());
    }

    #[test]
    fn test_constant_sequence_has_undefined_shape() {
        // 7 in base 2 is 111
        let s = DigitStatistics::from_digits(&[1, 1, 1]);
        assert_eq!(s.mean, 1.0);
        assert_eq!(s.std, 0.0);
        assert!(s.skew.is_nan());
        assert!(s.kurtosis.is_nan());
    }

    #[test]
    fn test_skewed_sequence() {
        // 123 in base 2 (remainder order): 1101111
        let digits = [1, 1, 0, 1, 1, 1, 1];
        let s = DigitStatistics::from_digits(&digits);
        let m: f64 = 6.0 / 7.0;
        let m2 = (6.0 * (1.0 - m).powi(2) + m.powi(2)) / 7.0;
        let m3 = (6.0 * (1.0 - m).powi(3) + (-m).powi(3)) / 7.0;
        let m4 = (6.0 * (1.0 - m).powi(4) + m.powi(4)) / 7.0;
        assert!(close(s.mean, m));
        assert_eq!(s.median, 1.0);
        assert!(close(s.std, m2.sqrt()));
        assert!(close(s.skew, m3 / m2.powf(1.5)));
        assert!(close(s.kurtosis, m4 / (m2 * m2) - 3.0));
        assert!(s.skew < 0.0);
    }

    #[test]
    fn test_free_functions_agree_with_struct() {
        let values = [4.0, 1.0, 0.0, 9.0, 2.0, 2.0];
        let s = DigitStatistics::from_values(&values);
        assert_eq!(mean(&values), s.mean);
        assert_eq!(median(&values), s.median);
        assert_eq!(population_std(&values), s.std);
        assert_eq!(skewness(&values), s.skew);
        assert_eq!(excess_kurtosis(&values), s.kurtosis);
        assert_eq!(s.median, 2.0);
    }
}
