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

//! Progress logging through `tracing`.
//!
//! `LogMonitor` reports the start of a batch, every progress tick and the
//! end of the batch. Progress lines are emitted at `INFO`, the summary at
//! `DEBUG`. Events are only visible if the embedding application installs a
//! `tracing` subscriber.

use crate::{map::FeatureMap, monitor::feature_monitor::FeatureMonitor};
use std::time::Instant;

/// A monitor that logs extraction progress via `tracing`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    total: usize,
    ticks: u64,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total: 0,
            ticks: 0,
        }
    }

    /// Number of progress events logged during the current batch.
    #[inline(always)]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(total: {}, ticks: {})", self.total, self.ticks)
    }
}

impl FeatureMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_extraction(&mut self, total: usize) {
        self.start_time = Instant::now();
        self.total = total;
        self.ticks = 0;
        tracing::info!(total, "Computing features for a collection of {} numbers", total);
    }

    fn on_progress(&mut self, index: usize, total: usize) {
        self.ticks += 1;
        tracing::info!(
            current = index + 1,
            total,
            "Computing features for number {} of {}...",
            index + 1,
            total
        );
    }

    fn on_number_extracted(&mut self, _index: usize, _features: &FeatureMap) {}

    fn on_exit_extraction(&mut self, processed: usize) {
        let elapsed = self.start_time.elapsed();
        tracing::debug!(
            processed,
            elapsed_ms = elapsed.as_millis() as u64,
            "Feature extraction finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_ticks_per_batch() {
        let mut monitor = LogMonitor::default();
        monitor.on_enter_extraction(250);
        monitor.on_progress(0, 250);
        monitor.on_progress(100, 250);
        monitor.on_progress(200, 250);
        monitor.on_exit_extraction(250);
        assert_eq!(monitor.ticks(), 3);
        assert_eq!(monitor.to_string(), "LogMonitor(total: 250, ticks: 3)");

        monitor.on_enter_extraction(1);
        assert_eq!(monitor.ticks(), 0);
        assert_eq!(monitor.name(), "LogMonitor");
    }
}
