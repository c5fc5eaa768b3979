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

//! # Feature Map
//!
//! `FeatureMap` is the flat, insertion-ordered mapping from `FeatureKey` to
//! `f64` produced for a single number. Values live in a dense vector in
//! insertion order; an `FxHashMap` indexes them by key.

use crate::key::FeatureKey;
use numeris_core::sanitize::{all_finite, sanitize_in_place};
use rustc_hash::FxHashMap;

/// Insertion-ordered mapping from feature key to value.
#[derive(Clone, Default)]
pub struct FeatureMap {
    keys: Vec<FeatureKey>,
    values: Vec<f64>,
    index: FxHashMap<FeatureKey, usize>,
}

impl FeatureMap {
    /// Creates an empty `FeatureMap`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `FeatureMap` with room for `capacity` features.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key is appended at the end; an existing key keeps its position
    /// and its previous value is returned.
    pub fn insert(&mut self, key: FeatureKey, value: f64) -> Option<f64> {
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.values[slot], value)),
            None => {
                self.index.insert(key, self.keys.len());
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &FeatureKey) -> Option<f64> {
        self.index.get(key).map(|&slot| self.values[slot])
    }

    /// Returns the value stored under the feature named `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numeris_features::{key::FeatureKey, map::FeatureMap};
    /// let mut map = FeatureMap::new();
    /// map.insert(FeatureKey::Number, 4.0);
    /// assert_eq!(map.get_by_name("number"), Some(4.0));
    /// assert_eq!(map.get_by_name("digits_mean_2"), None);
    /// assert_eq!(map.get_by_name("bogus"), None);
    /// ```
    #[inline]
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        name.parse::<FeatureKey>().ok().and_then(|k| self.get(&k))
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &FeatureKey) -> bool {
        self.index.contains_key(key)
    }

    /// Number of features.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map holds no features.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in insertion order.
    #[inline(always)]
    pub fn keys(&self) -> &[FeatureKey] {
        &self.keys
    }

    /// Values in insertion order.
    #[inline(always)]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&FeatureKey, f64)> + '_ {
        self.keys.iter().zip(self.values.iter().copied())
    }

    /// Replaces every non-finite value with `0.0`; returns how many were replaced.
    #[inline]
    pub fn sanitize(&mut self) -> usize {
        sanitize_in_place(self.values.iter_mut())
    }

    /// Returns `true` if every value is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        all_finite(self.values.iter())
    }

    /// Converts into `(name, value)` pairs in insertion order.
    pub fn into_named(self) -> Vec<(String, f64)> {
        self.keys
            .into_iter()
            .map(|k| k.to_string())
            .zip(self.values)
            .collect()
    }
}

impl PartialEq for FeatureMap {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl std::fmt::Debug for FeatureMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (k.to_string(), v)))
            .finish()
    }
}

impl std::fmt::Display for FeatureMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureMap(len: {})", self.len())
    }
}

impl FromIterator<(FeatureKey, f64)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = FeatureMap::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Extend<(FeatureKey, f64)> for FeatureMap {
    fn extend<I: IntoIterator<Item = (FeatureKey, f64)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
