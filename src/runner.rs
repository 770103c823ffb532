// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The benchmark driver, running the DAXPY kernel between two statistics
//! checkpoints.

use crate::checkpoint::Checkpoint;
use crate::kernel::{axpy, fill_uniform, reduce_sum};
#[cfg(feature = "log_kernel")]
use crate::macros::log_info;
use crate::macros::{log_debug, log_warn};
// Platforms that support `libc::sched_setaffinity()`.
#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use nix::{
    sched::{sched_setaffinity, CpuSet},
    unistd::Pid,
};
use rand::Rng;
use std::hint::black_box;
use std::ops::Range;

/// Policy to pin the benchmark thread to a CPU.
///
/// Pinning keeps the measured region on one core, so that the statistics
/// collected between the two checkpoints aren't polluted by thread
/// migrations.
#[derive(Clone, Copy)]
pub enum CpuPinningPolicy {
    /// Don't pin the benchmark thread to a CPU.
    No,
    /// Pin the benchmark thread to a CPU, if CPU pinning is supported and
    /// implemented on this platform.
    IfSupported,
    /// Pin the benchmark thread to a CPU. If CPU pinning isn't supported on
    /// this platform (or not implemented), running the benchmark will panic.
    Always,
}

/// Configuration of a benchmark run.
pub struct Benchmark {
    /// Number of elements in each input vector.
    pub len: usize,
    /// Scalar multiplier applied to the x vector.
    pub alpha: f64,
    /// Half-open interval from which the input values are drawn.
    pub value_range: Range<f64>,
    /// Policy to pin the benchmark thread to a CPU.
    pub cpu_pinning: CpuPinningPolicy,
}

impl Benchmark {
    /// Runs the benchmark once and returns the checksum of the transformed
    /// vector.
    ///
    /// The run is strictly sequential: fill the x and y vectors with uniform
    /// random values from the given generator, mark a checkpoint, compute
    /// `y = alpha * x + y`, mark a second checkpoint, and reduce y to its
    /// sum. Both checkpoints are marked with `(0, 0)`.
    ///
    /// ```
    /// use daxpy_bench::{Benchmark, CpuPinningPolicy, NoopCheckpoint};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha12Rng;
    ///
    /// let benchmark = Benchmark {
    ///     len: 100,
    ///     alpha: 0.5,
    ///     value_range: 1.0..2.0,
    ///     cpu_pinning: CpuPinningPolicy::No,
    /// };
    ///
    /// let mut rng = ChaCha12Rng::seed_from_u64(42);
    /// let checksum = benchmark.run(&mut rng, &mut NoopCheckpoint);
    /// // Each transformed element lies in [1.5, 3.0).
    /// assert!(checksum >= 150.0 && checksum < 300.0);
    /// ```
    pub fn run<R: Rng + ?Sized, C: Checkpoint>(&self, rng: &mut R, checkpoint: &mut C) -> f64 {
        pin_current_thread(self.cpu_pinning);

        let x = fill_uniform(rng, self.len, self.value_range.clone());
        let mut y = fill_uniform(rng, self.len, self.value_range.clone());
        #[cfg(feature = "log_kernel")]
        log_info!(
            "Filled two vectors of {} elements from {:?}",
            self.len,
            self.value_range
        );

        let x_slice = x.as_slice();
        let y_slice = y.as_mut_slice();

        checkpoint.mark(0, 0);
        axpy(self.alpha, black_box(x_slice), black_box(y_slice));
        checkpoint.mark(0, 0);
        #[cfg(feature = "log_kernel")]
        log_info!("Ran the DAXPY kernel with alpha = {}", self.alpha);

        let checksum = reduce_sum(&y);
        log_debug!("Computed the checksum over {} elements", self.len);
        checksum
    }
}

/// Pins the current thread to CPU #0, according to the given policy.
fn pin_current_thread(cpu_pinning: CpuPinningPolicy) {
    #[cfg(any(
        miri,
        not(any(
            target_os = "android",
            target_os = "dragonfly",
            target_os = "freebsd",
            target_os = "linux"
        ))
    ))]
    match cpu_pinning {
        CpuPinningPolicy::No => (),
        CpuPinningPolicy::IfSupported => {
            log_warn!("Pinning the benchmark thread to a CPU is not implemented on this platform.")
        }
        CpuPinningPolicy::Always => {
            panic!("Pinning the benchmark thread to a CPU is not implemented on this platform.")
        }
    }

    #[cfg(all(
        not(miri),
        any(
            target_os = "android",
            target_os = "dragonfly",
            target_os = "freebsd",
            target_os = "linux"
        )
    ))]
    match cpu_pinning {
        CpuPinningPolicy::No => (),
        CpuPinningPolicy::IfSupported => {
            let mut cpu_set = CpuSet::new();
            if let Err(_e) = cpu_set.set(0) {
                log_warn!("Failed to set CPU affinity for the benchmark thread: {_e}");
            } else if let Err(_e) = sched_setaffinity(Pid::from_raw(0), &cpu_set) {
                log_warn!("Failed to set CPU affinity for the benchmark thread: {_e}");
            } else {
                log_debug!("Pinned the benchmark thread to CPU #0");
            }
        }
        CpuPinningPolicy::Always => {
            let mut cpu_set = CpuSet::new();
            if let Err(e) = cpu_set.set(0) {
                panic!("Failed to set CPU affinity for the benchmark thread: {e}");
            } else if let Err(e) = sched_setaffinity(Pid::from_raw(0), &cpu_set) {
                panic!("Failed to set CPU affinity for the benchmark thread: {e}");
            } else {
                log_debug!("Pinned the benchmark thread to CPU #0");
            }
        }
    }
}
