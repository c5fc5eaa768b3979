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

//! # Feature Extraction
//!
//! Turns an integer into a flat `FeatureMap`, or a collection of integers
//! into a column-aligned `FeatureTable`, by computing nine digit features for
//! every base in an inclusive range.
//!
//! For each base `b` the following are appended, in this order:
//! `normalized_modulo_b`, `number_of_digits_b`, `centre_of_mass_b`,
//! `normalized_centre_of_mass_b`, `digits_mean_b`, `digits_median_b`,
//! `digits_std_b`, `digits_skew_b` and `digits_kurtosis_b`, preceded once by
//! `number`.
//!
//! Degenerate inputs are not special-cased. Zero has no digits, which makes
//! the normalized centre of mass `0 / 0`; single-digit and constant-digit
//! sequences have undefined skewness and kurtosis. All such values are
//! computed as IEEE-754 results and the finished map is sanitized once,
//! replacing every `NaN` and `±∞` with `0.0`.
//!
//! ## Configuration
//!
//! `FeatureExtractor` is built through `FeatureExtractorBuilder`:
//!
//! | Setting | Default | Constraint |
//! | :--- | :--- | :--- |
//! | `min_base` | `2` | `>= 2` |
//! | `max_base` | `30` | `min_base <= max_base <= 36` |
//! | `progress_interval` | `100` | `0` is treated as `1` |
//!
//! ```rust
//! use numeris_features::extractor::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::builder().max_base(10).build().unwrap();
//! let features = extractor.extract_number(123_u64).unwrap();
//! assert_eq!(features.get_by_name("number"), Some(123.0));
//! assert_eq!(features.get_by_name("number_of_digits_2"), Some(7.0));
//! assert_eq!(features.len(), 1 + 9 * 9);
//! ```

use crate::{
    digits::{DigitBuffer, centre_of_mass, digits_into},
    key::{BaseFeature, FeatureKey},
    map::FeatureMap,
    monitor::{feature_monitor::FeatureMonitor, log::LogMonitor, no_op::NoOperationMonitor},
    table::FeatureTable,
};
use numeris_core::{
    error::{MAX_POSITIONAL_RADIX, Result, ValidationError},
    num::DigitNumeric,
    stats::DigitStatistics,
};

/// Default inclusive lower bound of the base range.
pub const DEFAULT_MIN_BASE: u32 = 2;
/// Default inclusive upper bound of the base range.
pub const DEFAULT_MAX_BASE: u32 = 30;
/// Default number of elements between two progress events.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// A validated, inclusive range of digit bases.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BaseRange {
    min_base: u32,
    max_base: u32,
}

impl BaseRange {
    /// Creates a `BaseRange` if `2 <= min_base <= max_base <= 36`.
    ///
    /// # Errors
    ///
    /// `ValidationError::InvalidBaseRange` if the range is empty or starts
    /// below two, `ValidationError::UnsupportedRadix` if `max_base > 36`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numeris_features::extractor::BaseRange;
    /// assert!(BaseRange::new(2, 30).is_ok());
    /// assert!(BaseRange::new(10, 10).is_ok());
    /// assert!(BaseRange::new(1, 30).is_err());
    /// assert!(BaseRange::new(11, 10).is_err());
    /// assert!(BaseRange::new(2, 37).is_err());
    /// ```
    pub fn new(min_base: u32, max_base: u32) -> Result<Self> {
        if min_base < 2 || min_base > max_base {
            return Err(ValidationError::InvalidBaseRange { min_base, max_base }.into());
        }
        if max_base > MAX_POSITIONAL_RADIX {
            return Err(ValidationError::UnsupportedRadix {
                base: max_base,
                max: MAX_POSITIONAL_RADIX,
            }
            .into());
        }
        Ok(Self { min_base, max_base })
    }

    /// Inclusive lower bound.
    #[inline(always)]
    pub const fn min_base(&self) -> u32 {
        self.min_base
    }

    /// Inclusive upper bound.
    #[inline(always)]
    pub const fn max_base(&self) -> u32 {
        self.max_base
    }

    /// Number of bases in the range.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        (self.max_base - self.min_base + 1) as usize
    }

    /// Always `false`; a valid range holds at least one base.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the bases in ascending order.
    #[inline]
    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.min_base..=self.max_base
    }

    /// Number of features extracted per number over this range.
    #[inline(always)]
    pub const fn feature_count(&self) -> usize {
        1 + BaseFeature::ALL.len() * self.len()
    }
}

impl Default for BaseRange {
    fn default() -> Self {
        Self {
            min_base: DEFAULT_MIN_BASE,
            max_base: DEFAULT_MAX_BASE,
        }
    }
}

impl std::fmt::Display for BaseRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min_base, self.max_base)
    }
}

/// The input of [`features`]: a single number or a collection of numbers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureInput<'a, T> {
    /// A single number, extracted into a `FeatureMap`.
    Scalar(T),
    /// An ordered collection, extracted into a `FeatureTable`.
    Collection(&'a [T]),
}

macro_rules! impl_scalar_input_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'a> From<$t> for FeatureInput<'a, $t> {
                #[inline(always)]
                fn from(value: $t) -> Self {
                    FeatureInput::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_input_for!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<'a, T> From<&'a [T]> for FeatureInput<'a, T> {
    #[inline(always)]
    fn from(values: &'a [T]) -> Self {
        FeatureInput::Collection(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for FeatureInput<'a, T> {
    #[inline(always)]
    fn from(values: &'a Vec<T>) -> Self {
        FeatureInput::Collection(values.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for FeatureInput<'a, T> {
    #[inline(always)]
    fn from(values: &'a [T; N]) -> Self {
        FeatureInput::Collection(values.as_slice())
    }
}

/// The output of [`features`], mirroring the shape of the input.
#[derive(Clone, PartialEq, Debug)]
pub enum Features {
    /// Features of a single number.
    Scalar(FeatureMap),
    /// One column per feature, aligned with the input positions.
    Collection(FeatureTable),
}

impl Features {
    /// The flat map, if the input was a single number.
    #[inline]
    pub fn as_scalar(&self) -> Option<&FeatureMap> {
        match self {
            Features::Scalar(map) => Some(map),
            Features::Collection(_) => None,
        }
    }

    /// The table, if the input was a collection.
    #[inline]
    pub fn as_collection(&self) -> Option<&FeatureTable> {
        match self {
            Features::Scalar(_) => None,
            Features::Collection(table) => Some(table),
        }
    }

    /// Unwraps the flat map, if the input was a single number.
    #[inline]
    pub fn into_scalar(self) -> Option<FeatureMap> {
        match self {
            Features::Scalar(map) => Some(map),
            Features::Collection(_) => None,
        }
    }

    /// Unwraps the table, if the input was a collection.
    #[inline]
    pub fn into_collection(self) -> Option<FeatureTable> {
        match self {
            Features::Scalar(_) => None,
            Features::Collection(table) => Some(table),
        }
    }
}

/// Computes digit features over a fixed base range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeatureExtractor {
    bases: BaseRange,
    progress_interval: usize,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(BaseRange::default())
    }
}

impl FeatureExtractor {
    /// Creates an extractor over `bases` with the default progress interval.
    #[inline]
    pub fn new(bases: BaseRange) -> Self {
        Self {
            bases,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Returns a builder initialized with the defaults.
    #[inline]
    pub fn builder() -> FeatureExtractorBuilder {
        FeatureExtractorBuilder::new()
    }

    /// The base range.
    #[inline(always)]
    pub fn bases(&self) -> BaseRange {
        self.bases
    }

    /// Number of elements between two progress events.
    #[inline(always)]
    pub fn progress_interval(&self) -> usize {
        self.progress_interval.max(1)
    }

    /// Extracts the features of a single non-negative number.
    ///
    /// # Errors
    ///
    /// `ValidationError::NegativeNumber` if `number < 0`.
    pub fn extract_number<T>(&self, number: T) -> Result<FeatureMap>
    where
        T: DigitNumeric,
    {
        if number.is_negative_value() {
            return Err(ValidationError::NegativeNumber.into());
        }

        let mut buffer = DigitBuffer::new();
        self.extract_number_with(number, &mut buffer)
    }

    fn extract_number_with<T>(&self, number: T, buffer: &mut DigitBuffer) -> Result<FeatureMap>
    where
        T: DigitNumeric,
    {
        let mut features = FeatureMap::with_capacity(self.bases.feature_count());
        features.insert(FeatureKey::Number, number.as_f64());

        for base in self.bases.iter() {
            digits_into(number, base, buffer)?;

            let number_of_digits = buffer.len() as f64;
            let modulo = buffer.first().copied().unwrap_or(0) as f64;
            let com = centre_of_mass(number, base)?;
            let stats = DigitStatistics::from_digits(buffer);

            let values = [
                modulo / base as f64,
                number_of_digits,
                com,
                com / number_of_digits,
                stats.mean,
                stats.median,
                stats.std,
                stats.skew,
                stats.kurtosis,
            ];
            for (feature, value) in BaseFeature::ALL.into_iter().zip(values) {
                features.insert(FeatureKey::per_base(feature, base), value);
            }
        }

        features.sanitize();
        Ok(features)
    }

    /// Extracts features for every number in `numbers`, without progress reporting.
    ///
    /// # Errors
    ///
    /// `ValidationError::NegativeNumber` if any number is negative. The
    /// whole collection is validated before extraction starts.
    #[inline]
    pub fn extract_collection<T>(&self, numbers: &[T]) -> Result<FeatureTable>
    where
        T: DigitNumeric,
    {
        self.extract_collection_with_monitor(numbers, &mut NoOperationMonitor::new())
    }

    /// Extracts features for every number in `numbers`, reporting progress to `monitor`.
    ///
    /// Column `k` of the returned table holds, at position `i`, the value
    /// [`extract_number`](Self::extract_number) produces for `numbers[i]`.
    pub fn extract_collection_with_monitor<T, M>(
        &self,
        numbers: &[T],
        monitor: &mut M,
    ) -> Result<FeatureTable>
    where
        T: DigitNumeric,
        M: FeatureMonitor + ?Sized,
    {
        if numbers.iter().any(|n| n.is_negative_value()) {
            return Err(ValidationError::NegativeNumber.into());
        }

        let total = numbers.len();
        let interval = self.progress_interval();
        let mut table = FeatureTable::with_row_capacity(total);
        let mut buffer = DigitBuffer::new();

        monitor.on_enter_extraction(total);
        for (index, &number) in numbers.iter().enumerate() {
            if index % interval == 0 {
                monitor.on_progress(index, total);
            }
            let row = self.extract_number_with(number, &mut buffer)?;
            monitor.on_number_extracted(index, &row);
            table.push_row(&row);
        }
        monitor.on_exit_extraction(total);

        Ok(table)
    }

    /// Dispatches on the shape of `input`.
    pub fn extract<'a, T, M>(&self, input: FeatureInput<'a, T>, monitor: &mut M) -> Result<Features>
    where
        T: DigitNumeric,
        M: FeatureMonitor + ?Sized,
    {
        match input {
            FeatureInput::Scalar(number) => self.extract_number(number).map(Features::Scalar),
            FeatureInput::Collection(numbers) => self
                .extract_collection_with_monitor(numbers, monitor)
                .map(Features::Collection),
        }
    }
}

impl std::fmt::Display for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FeatureExtractor(bases: {}, progress_interval: {})",
            self.bases,
            self.progress_interval()
        )
    }
}

/// Builder for [`FeatureExtractor`]; validation happens in [`build`](Self::build).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeatureExtractorBuilder {
    min_base: u32,
    max_base: u32,
    progress_interval: usize,
}

impl Default for FeatureExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractorBuilder {
    /// Creates a builder with bases `[2, 30]` and a progress interval of 100.
    #[inline]
    pub fn new() -> Self {
        Self {
            min_base: DEFAULT_MIN_BASE,
            max_base: DEFAULT_MAX_BASE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Sets the inclusive lower bound of the base range.
    #[inline]
    pub fn min_base(mut self, min_base: u32) -> Self {
        self.min_base = min_base;
        self
    }

    /// Sets the inclusive upper bound of the base range.
    #[inline]
    pub fn max_base(mut self, max_base: u32) -> Self {
        self.max_base = max_base;
        self
    }

    /// Sets both bounds of the base range.
    #[inline]
    pub fn base_range(self, min_base: u32, max_base: u32) -> Self {
        self.min_base(min_base).max_base(max_base)
    }

    /// Sets the number of elements between two progress events.
    #[inline]
    pub fn progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval.max(1);
        self
    }

    /// Validates the settings and builds the extractor.
    ///
    /// # Errors
    ///
    /// See [`BaseRange::new`].
    pub fn build(self) -> Result<FeatureExtractor> {
        Ok(FeatureExtractor {
            bases: BaseRange::new(self.min_base, self.max_base)?,
            progress_interval: self.progress_interval,
        })
    }
}

/// Extracts features from a number or a collection of numbers over the
/// bases `[min_base, max_base]`.
///
/// Collection progress is logged through [`LogMonitor`] every 100 numbers.
///
/// # Errors
///
/// Validation errors for an invalid base range or a negative number, raised
/// before any feature is computed.
///
/// # Examples
///
/// ```rust
/// # use numeris_features::extractor::features;
/// let scalar = features(123_u64, 2, 10).unwrap().into_scalar().unwrap();
/// assert_eq!(scalar.get_by_name("number"), Some(123.0));
///
/// let numbers = vec![0_u64, 7, 123];
/// let table = features(&numbers, 2, 10).unwrap().into_collection().unwrap();
/// assert_eq!(table.column_by_name("number"), Some(&[0.0, 7.0, 123.0][..]));
/// ```
pub fn features<'a, T, I>(input: I, min_base: u32, max_base: u32) -> Result<Features>
where
    T: DigitNumeric + 'a,
    I: Into<FeatureInput<'a, T>>,
{
    let extractor = FeatureExtractor::builder()
        .base_range(min_base, max_base)
        .build()?;
    extractor.extract(input.into(), &mut LogMonitor::new())
}
