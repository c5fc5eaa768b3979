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

use crate::{map::FeatureMap, monitor::feature_monitor::FeatureMonitor};

/// A monitor that forwards progress ticks `(index, total)` to a closure.
///
/// # Examples
///
/// ```rust
/// # use numeris_features::monitor::{callback::CallbackMonitor, feature_monitor::FeatureMonitor};
/// let mut seen = Vec::new();
/// let mut monitor = CallbackMonitor::new(|index, total| seen.push((index, total)));
/// monitor.on_progress(0, 5);
/// drop(monitor);
/// assert_eq!(seen, vec![(0, 5)]);
/// ```
pub struct CallbackMonitor<F>
where
    F: FnMut(usize, usize),
{
    callback: F,
}

impl<F> CallbackMonitor<F>
where
    F: FnMut(usize, usize),
{
    /// Creates a monitor invoking `callback` on every progress tick.
    #[inline]
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> std::fmt::Debug for CallbackMonitor<F>
where
    F: FnMut(usize, usize),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackMonitor")
    }
}

impl<F> FeatureMonitor for CallbackMonitor<F>
where
    F: FnMut(usize, usize),
{
    fn name(&self) -> &str {
        "CallbackMonitor"
    }

    #[inline(always)]
    fn on_enter_extraction(&mut self, _total: usize) {}

    #[inline(always)]
    fn on_progress(&mut self, index: usize, total: usize) {
        (self.callback)(index, total)
    }

    #[inline(always)]
    fn on_number_extracted(&mut self, _index: usize, _features: &FeatureMap) {}

    #[inline(always)]
    fn on_exit_extraction(&mut self, _processed: usize) {}
}
