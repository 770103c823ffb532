// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Statistics checkpoints delimiting the measured region of a benchmark.

/// A collaborator notified when the benchmark enters and leaves the measured
/// region.
///
/// Implementations typically reset and dump the statistics of an external
/// measurement harness, such as hardware performance counters or a CPU
/// simulator's statistics engine. The benchmark only guarantees where and how
/// often [`mark()`](Self::mark) is called: once immediately before the kernel
/// loop and once immediately after it, unconditionally, on every run.
pub trait Checkpoint {
    /// Resets and marks a statistics checkpoint.
    ///
    /// The semantics of `delay` and `period` are owned by the measurement
    /// harness; the benchmark passes them through without interpreting them.
    fn mark(&mut self, delay: u64, period: u64);
}

/// A checkpoint that does nothing, for environments without a measurement
/// harness.
///
/// Substituting this stub doesn't change the benchmark's observable output.
pub struct NoopCheckpoint;

impl Checkpoint for NoopCheckpoint {
    fn mark(&mut self, _delay: u64, _period: u64) {}
}

/// A checkpoint that records the marks it receives, in order.
///
/// This is mostly useful to assert on checkpoint placement in tests.
#[derive(Default)]
pub struct RecordingCheckpoint {
    /// Parameters of the received marks, oldest first.
    marks: Vec<(u64, u64)>,
}

impl RecordingCheckpoint {
    /// Creates a checkpoint that hasn't recorded any mark yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `(delay, period)` parameters of the received marks, in
    /// the order they were received.
    pub fn marks(&self) -> &[(u64, u64)] {
        &self.marks
    }
}

impl Checkpoint for RecordingCheckpoint {
    fn mark(&mut self, delay: u64, period: u64) {
        self.marks.push((delay, period));
    }
}

/// A checkpoint that forwards each mark to the [`log`] ecosystem at info
/// level.
#[cfg(feature = "log")]
pub struct LogCheckpoint;

#[cfg(feature = "log")]
impl Checkpoint for LogCheckpoint {
    fn mark(&mut self, delay: u64, period: u64) {
        log::info!("Statistics checkpoint: delay = {delay}, period = {period}");
    }
}
