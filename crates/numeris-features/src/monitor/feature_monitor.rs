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

use crate::map::FeatureMap;

/// Observer of collection feature extraction.
///
/// Hooks are invoked in this order for a collection of `total` numbers:
///
/// 1. `on_enter_extraction(total)` once.
/// 2. For each index `i`: `on_progress(i, total)` if `i` is a multiple of the
///    extractor's progress interval, then `on_number_extracted(i, features)`.
/// 3. `on_exit_extraction(processed)` once, after the last number.
pub trait FeatureMonitor {
    /// Name of the monitor, used in `Debug` and `Display` output.
    fn name(&self) -> &str;
    /// Called once before the first number, with the collection length.
    fn on_enter_extraction(&mut self, total: usize);
    /// Called before extracting `index` when it is a multiple of the progress interval.
    fn on_progress(&mut self, index: usize, total: usize);
    /// Called with the finished features of the number at `index`.
    fn on_number_extracted(&mut self, index: usize, features: &FeatureMap);
    /// Called once after the last number, with the number of rows produced.
    fn on_exit_extraction(&mut self, processed: usize);
}

impl<M> FeatureMonitor for &mut M
where
    M: FeatureMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_extraction(&mut self, total: usize) {
        (**self).on_enter_extraction(total)
    }

    #[inline(always)]
    fn on_progress(&mut self, index: usize, total: usize) {
        (**self).on_progress(index, total)
    }

    #[inline(always)]
    fn on_number_extracted(&mut self, index: usize, features: &FeatureMap) {
        (**self).on_number_extracted(index, features)
    }

    #[inline(always)]
    fn on_exit_extraction(&mut self, processed: usize) {
        (**self).on_exit_extraction(processed)
    }
}

impl std::fmt::Debug for dyn FeatureMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn FeatureMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureMonitor({})", self.name())
    }
}
