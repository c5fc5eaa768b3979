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

//! # Extraction Monitors
//!
//! Pluggable observers for collection feature extraction. Progress reporting
//! is injected rather than hard-wired: the extractor calls a
//! `FeatureMonitor` at a fixed cadence and the monitor decides what to do
//! with it. Monitors only observe; they cannot alter the extracted values or
//! their order.
//!
//! ## Submodules
//!
//! - `feature_monitor`: Core trait (`FeatureMonitor`) defining the lifecycle hooks.
//! - `no_op`: `NoOperationMonitor`, the default, which ignores every event.
//! - `log`: `LogMonitor`, emitting progress through `tracing`.
//! - `callback`: `CallbackMonitor`, forwarding progress to a closure.
//! - `composite`: `CompositeMonitor`, fanning events out to several monitors.

pub mod callback;
pub mod composite;
pub mod feature_monitor;
pub mod log;
pub mod no_op;
