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

//! # Feature Table
//!
//! Column-oriented result of extracting features for a collection. Every key
//! encountered maps to a column with one value per input number, aligned by
//! input position.
//!
//! Rows are appended with [`FeatureTable::push_row`]. A key first seen in a
//! later row gets a column back-filled with `0.0` for earlier rows, and a
//! column missing from a row receives `0.0` for that row, so every column
//! always has exactly [`FeatureTable::rows`] entries.

use crate::{key::FeatureKey, map::FeatureMap};
use numeris_core::sanitize::NON_FINITE_REPLACEMENT;
use rustc_hash::FxHashMap;

/// Mapping from feature key to a column of values, one per input number.
#[derive(Clone, Default)]
pub struct FeatureTable {
    keys: Vec<FeatureKey>,
    columns: Vec<Vec<f64>>,
    index: FxHashMap<FeatureKey, usize>,
    rows: usize,
    rows_hint: usize,
}

impl FeatureTable {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table expecting `rows` rows.
    ///
    /// Columns created later reserve room for that many values.
    #[inline]
    pub fn with_row_capacity(rows: usize) -> Self {
        Self {
            rows_hint: rows,
            ..Self::default()
        }
    }

    /// Appends the features of one number as a new row.
    pub fn push_row(&mut self, row: &FeatureMap) {
        for (key, value) in row.iter() {
            let slot = match self.index.get(key) {
                Some(&slot) => slot,
                None => self.add_column(*key),
            };
            self.columns[slot].push(value);
        }
        self.rows += 1;

        for column in self.columns.iter_mut() {
            if column.len() < self.rows {
                column.push(NON_FINITE_REPLACEMENT);
            }
        }
    }

    fn add_column(&mut self, key: FeatureKey) -> usize {
        let slot = self.keys.len();
        let mut column = Vec::with_capacity(self.rows_hint.max(self.rows + 1));
        column.resize(self.rows, NON_FINITE_REPLACEMENT);
        self.index.insert(key, slot);
        self.keys.push(key);
        self.columns.push(column);
        slot
    }

    /// Number of rows, i.e. input numbers.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, i.e. distinct feature keys.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the table has no columns.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in first-seen order.
    #[inline(always)]
    pub fn keys(&self) -> &[FeatureKey] {
        &self.keys
    }

    /// The column stored under `key`.
    #[inline]
    pub fn column(&self, key: &FeatureKey) -> Option<&[f64]> {
        self.index.get(key).map(|&slot| self.columns[slot].as_slice())
    }

    /// The column stored under the feature named `name`.
    #[inline]
    pub fn column_by_name(&self, name: &str) -> Option<&[f64]> {
        name.parse::<FeatureKey>()
            .ok()
            .and_then(|k| self.column(&k))
    }

    /// Iterates over `(key, column)` pairs in first-seen order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&FeatureKey, &[f64])> + '_ {
        self.keys
            .iter()
            .zip(self.columns.iter().map(|c| c.as_slice()))
    }

    /// Reassembles row `row` as a `FeatureMap`.
    pub fn row(&self, row: usize) -> Option<FeatureMap> {
        if row >= self.rows {
            return None;
        }
        Some(
            self.keys
                .iter()
                .zip(self.columns.iter())
                .map(|(k, c)| (*k, c[row]))
                .collect(),
        )
    }

    /// Converts into `(name, column)` pairs in first-seen order.
    pub fn into_named(self) -> Vec<(String, Vec<f64>)> {
        self.keys
            .into_iter()
            .map(|k| k.to_string())
            .zip(self.columns)
            .collect()
    }
}

impl PartialEq for FeatureTable {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.keys == other.keys && self.columns == other.columns
    }
}

impl std::fmt::Debug for FeatureTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, c)| (k.to_string(), c)))
            .finish()
    }
}

impl std::fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureTable(rows: {}, columns: {})", self.rows, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::BaseFeature;

    fn mean2() -> FeatureKey {
        FeatureKey::per_base(BaseFeature::DigitsMean, 2)
    }

    fn row(number: f64, mean: f64) -> FeatureMap {
        [(FeatureKey::Number, number), (mean2(), mean)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_push_rows_aligns_columns() {
        let mut table = FeatureTable::with_row_capacity(3);
        table.push_row(&row(1.0, 1.0));
        table.push_row(&row(2.0, 0.5));
        table.push_row(&row(3.0, 1.0));
        assert_eq!(table.rows(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(&FeatureKey::Number), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.column_by_name("digits_mean_2"), Some(&[1.0, 0.5, 1.0][..]));
        assert_eq!(table.row(1), Some(row(2.0, 0.5)));
        assert_eq!(table.row(3), None);
    }

    #[test]
    fn test_late_and_missing_keys_are_padded() {
        let mut table = FeatureTable::new();
        let only_number: FeatureMap = [(FeatureKey::Number, 7.0)].into_iter().collect();
        table.push_row(&only_number);
        table.push_row(&row(8.0, 0.25));
        table.push_row(&only_number);
        assert_eq!(table.column(&mean2()), Some(&[0.0, 0.25, 0.0][..]));
        assert!(table.iter().all(|(_, c)| c.len() == 3));
    }

    #[test]
    fn test_empty_table() {
        let table = FeatureTable::new();
        assert!(table.is_empty());
        assert_eq!(table.rows(), 0);
        assert_eq!(table.row(0), None);
        assert!(table.into_named().is_empty());
    }

    #[test]
    fn test_into_named_and_display() {
        let mut table = FeatureTable::new();
        table.push_row(&row(5.0, 1.0));
        assert_eq!(table.to_string(), "FeatureTable(rows: 1, columns: 2)");
        assert_eq!(
            table.into_named(),
            vec![
                ("number".to_string(), vec![5.0]),
                ("digits_mean_2".to_string(), vec![1.0]),
            ]
        );
    }
}
