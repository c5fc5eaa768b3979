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

//! Central moment accumulation over a slice of `f64`.

/// The mean and the second, third and fourth central moments of a sample.
///
/// Moments are normalized by `n` (population form). For an empty sample every
/// field is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments {
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl CentralMoments {
    /// Accumulates the central moments of `values` in two passes.
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &v in values {
            let d = v - mean;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }

        Self {
            mean,
            m2: s2 / n,
            m3: s3 / n,
            m4: s4 / n,
        }
    }

    /// The sample mean.
    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The population variance (second central moment).
    #[inline(always)]
    pub fn variance(&self) -> f64 {
        self.m2
    }

    /// The population standard deviation.
    #[inline(always)]
    pub fn population_std(&self) -> f64 {
        self.m2.sqrt()
    }

    /// Variance too small relative to the mean to carry shape information.
    #[inline(always)]
    fn is_degenerate(&self) -> bool {
        self.m2 <= (f64::EPSILON * self.mean).powi(2)
    }

    /// Biased sample skewness `m3 / m2^(3/2)`; `NaN` for degenerate samples.
    #[inline]
    pub fn skewness(&self) -> f64 {
        if self.is_degenerate() {
            return f64::NAN;
        }
        self.m3 / self.m2.powf(1.5)
    }

    /// Fisher excess kurtosis `m4 / m2^2 - 3`; `NaN` for degenerate samples.
    #[inline]
    pub fn excess_kurtosis(&self) -> f64 {
        if self.is_degenerate() {
            return f64::NAN;
        }
        self.m4 / (self.m2 * self.m2) - 3.0
    }
}
