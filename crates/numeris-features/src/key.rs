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

//! # Feature Keys
//!
//! Strongly typed names for extracted features. A `FeatureKey` is either the
//! number itself or one of nine per-base features qualified by its base:
//!
//! | Key | Meaning |
//! | :--- | :--- |
//! | `number` | The input value as a float. |
//! | `normalized_modulo_<b>` | `(number mod b) / b`. |
//! | `number_of_digits_<b>` | Length of the remainder-order digit sequence. |
//! | `centre_of_mass_<b>` | Mean position of non-zero positional digits. |
//! | `normalized_centre_of_mass_<b>` | Centre of mass divided by the digit count. |
//! | `digits_mean_<b>` | Mean digit value. |
//! | `digits_median_<b>` | Median digit value. |
//! | `digits_std_<b>` | Population standard deviation of the digits. |
//! | `digits_skew_<b>` | Skewness of the digits. |
//! | `digits_kurtosis_<b>` | Excess kurtosis of the digits. |
//!
//! Keys render to these strings via `Display` and parse back via `FromStr`.
//!
//! ```rust
//! use numeris_features::key::{BaseFeature, FeatureKey};
//!
//! let key = FeatureKey::per_base(BaseFeature::DigitsSkew, 16);
//! assert_eq!(key.to_string(), "digits_skew_16");
//! assert_eq!("digits_skew_16".parse::<FeatureKey>().unwrap(), key);
//! assert_eq!("number".parse::<FeatureKey>().unwrap(), FeatureKey::Number);
//! ```

use std::str::FromStr;

/// A feature computed once per base.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BaseFeature {
    NormalizedModulo,
    NumberOfDigits,
    CentreOfMass,
    NormalizedCentreOfMass,
    DigitsMean,
    DigitsMedian,
    DigitsStd,
    DigitsSkew,
    DigitsKurtosis,
}

impl BaseFeature {
    /// All per-base features in extraction order.
    pub const ALL: [BaseFeature; 9] = [
        BaseFeature::NormalizedModulo,
        BaseFeature::NumberOfDigits,
        BaseFeature::CentreOfMass,
        BaseFeature::NormalizedCentreOfMass,
        BaseFeature::DigitsMean,
        BaseFeature::DigitsMedian,
        BaseFeature::DigitsStd,
        BaseFeature::DigitsSkew,
        BaseFeature::DigitsKurtosis,
    ];

    /// The key prefix, without the trailing `_<base>`.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            BaseFeature::NormalizedModulo => "normalized_modulo",
            BaseFeature::NumberOfDigits => "number_of_digits",
            BaseFeature::CentreOfMass => "centre_of_mass",
            BaseFeature::NormalizedCentreOfMass => "normalized_centre_of_mass",
            BaseFeature::DigitsMean => "digits_mean",
            BaseFeature::DigitsMedian => "digits_median",
            BaseFeature::DigitsStd => "digits_std",
            BaseFeature::DigitsSkew => "digits_skew",
            BaseFeature::DigitsKurtosis => "digits_kurtosis",
        }
    }

    #[inline]
    fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.prefix() == prefix)
    }
}

impl std::fmt::Display for BaseFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The name of a single extracted feature.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum FeatureKey {
    /// The input number itself.
    Number,
    /// A per-base feature.
    PerBase { feature: BaseFeature, base: u32 },
}

impl FeatureKey {
    /// Creates a per-base key.
    #[inline(always)]
    pub const fn per_base(feature: BaseFeature, base: u32) -> Self {
        FeatureKey::PerBase { feature, base }
    }

    /// The base of a per-base key, `None` for `Number`.
    #[inline]
    pub const fn base(&self) -> Option<u32> {
        match self {
            FeatureKey::Number => None,
            FeatureKey::PerBase { base, .. } => Some(*base),
        }
    }

    /// The per-base feature, `None` for `Number`.
    #[inline]
    pub const fn feature(&self) -> Option<BaseFeature> {
        match self {
            FeatureKey::Number => None,
            FeatureKey::PerBase { feature, .. } => Some(*feature),
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureKey::Number => f.write_str("number"),
            FeatureKey::PerBase { feature, base } => write!(f, "{}_{}", feature.prefix(), base),
        }
    }
}

/// A string could not be parsed as a `FeatureKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeatureKeyError {
    /// The rejected name.
    pub name: String,
}

impl std::fmt::Display for ParseFeatureKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown feature name '{}'", self.name)
    }
}

impl std::error::Error for ParseFeatureKeyError {}

impl FromStr for FeatureKey {
    type Err = ParseFeatureKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "number" {
            return Ok(FeatureKey::Number);
        }

        let err = || ParseFeatureKeyError {
            name: s.to_string(),
        };
        let (prefix, base) = s.rsplit_once('_').ok_or_else(err)?;
        if !base.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let feature = BaseFeature::from_prefix(prefix).ok_or_else(err)?;
        let base = base.parse::<u32>().map_err(|_| err())?;
        Ok(FeatureKey::per_base(feature, base))
    }
}
