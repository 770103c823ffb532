// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-size run of the DAXPY micro-benchmark: fills two vectors of 1000
//! elements with uniform random values in [1.0, 2.0), computes
//! `y = 0.5 * x + y` between two statistics checkpoints, and writes the
//! checksum of y to standard output.

#[cfg(feature = "log")]
use daxpy_bench::LogCheckpoint;
#[cfg(not(feature = "log"))]
use daxpy_bench::NoopCheckpoint;
use daxpy_bench::{write_checksum, Benchmark, CpuPinningPolicy};
use std::io;

/// Number of elements in each input vector.
const INPUT_LEN: usize = 1000;
/// Scalar multiplier applied to the x vector.
const ALPHA: f64 = 0.5;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let benchmark = Benchmark {
        len: INPUT_LEN,
        alpha: ALPHA,
        value_range: 1.0..2.0,
        cpu_pinning: CpuPinningPolicy::IfSupported,
    };

    #[cfg(feature = "log")]
    let mut checkpoint = LogCheckpoint;
    #[cfg(not(feature = "log"))]
    let mut checkpoint = NoopCheckpoint;

    let checksum = benchmark.run(&mut rand::rng(), &mut checkpoint);

    let stdout = io::stdout();
    write_checksum(&mut stdout.lock(), checksum)
        .expect("Failed to write the checksum to standard output");
}
