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

//! Monitoring combinator.
//!
//! `CompositeMonitor` forwards every event to its children in insertion
//! order, so logging, metrics and custom callbacks can be combined.

use crate::{map::FeatureMap, monitor::feature_monitor::FeatureMonitor};

/// A monitor that fans every event out to a list of child monitors.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn FeatureMonitor + 'a>>,
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates an empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: FeatureMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds an already boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn FeatureMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// The child monitors.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn FeatureMonitor + 'a>] {
        &self.monitors
    }

    /// Number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if there are no child monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn FeatureMonitor + 'a>> for CompositeMonitor<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn FeatureMonitor + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a> std::fmt::Debug for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<'a> FeatureMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_extraction(&mut self, total: usize) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_extraction(total);
        }
    }

    fn on_progress(&mut self, index: usize, total: usize) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_progress(index, total);
        }
    }

    fn on_number_extracted(&mut self, index: usize, features: &FeatureMap) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_number_extracted(index, features);
        }
    }

    fn on_exit_extraction(&mut self, processed: usize) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_extraction(processed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{callback::CallbackMonitor, log::LogMonitor, no_op::NoOperationMonitor};

    #[test]
    fn test_fan_out_in_order() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        {
            let mut composite = CompositeMonitor::new();
            composite.add_monitor(CallbackMonitor::new(|i, _| first.push(i)));
            composite.add_monitor(NoOperationMonitor::new());
            composite.add_monitor_boxed(Box::new(CallbackMonitor::new(|i, t| second.push((i, t)))));
            assert_eq!(composite.len(), 3);

            composite.on_enter_extraction(2);
            composite.on_progress(0, 2);
            composite.on_progress(1, 2);
            composite.on_exit_extraction(2);
        }
        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_debug_lists_children() {
        let composite: CompositeMonitor<'_> = vec![
            Box::new(LogMonitor::new()) as Box<dyn FeatureMonitor>,
            Box::new(NoOperationMonitor::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            format!("{:?}", composite),
            "[\"LogMonitor\", \"NoOperationMonitor\"]"
        );
        assert!(!composite.is_empty());
        assert_eq!(composite.name(), "CompositeMonitor");
    }
}
