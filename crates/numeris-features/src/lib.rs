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

//! # Numeris Features
//!
//! Multi-base digit feature extraction for non-negative integers.
//!
//! ## Modules
//!
//! - `digits`: Remainder-order digit decomposition, positional
//!   representation and the centre of mass of non-zero digits.
//! - `key`: `FeatureKey` and `BaseFeature`, the typed names of every feature.
//! - `map`: `FeatureMap`, the insertion-ordered result for one number.
//! - `table`: `FeatureTable`, the column-aligned result for a collection.
//! - `extractor`: `FeatureExtractor`, its builder, and the `features` entry
//!   point dispatching on `FeatureInput`.
//! - `monitor`: Progress observers for collection extraction.
//!
//! ```rust
//! use numeris_features::features;
//!
//! let table = features(&[10_u32, 20, 30], 2, 16)
//!     .unwrap()
//!     .into_collection()
//!     .unwrap();
//! assert_eq!(table.rows(), 3);
//! assert_eq!(table.len(), 1 + 9 * 15);
//! ```

pub mod digits;
pub mod extractor;
pub mod key;
pub mod map;
pub mod monitor;
pub mod table;

pub use digits::{
    centre_of_mass, centre_of_mass_decimal, digits, digits_decimal, positional_representation,
};
pub use extractor::{
    BaseRange, FeatureExtractor, FeatureExtractorBuilder, FeatureInput, Features, features,
};
pub use key::{BaseFeature, FeatureKey};
pub use map::FeatureMap;
pub use table::FeatureTable;
