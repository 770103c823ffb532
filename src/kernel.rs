// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The DAXPY kernel and its companion operations on `f64` slices.

use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::io::{self, Write};
use std::ops::Range;

/// Creates a vector of `len` values drawn independently and uniformly from
/// the half-open interval `value_range`.
///
/// The generator is injected so that callers can substitute a seeded one and
/// obtain reproducible inputs.
///
/// ```
/// use daxpy_bench::fill_uniform;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha12Rng;
///
/// let mut rng = ChaCha12Rng::seed_from_u64(42);
/// let x = fill_uniform(&mut rng, 1000, 1.0..2.0);
/// assert_eq!(x.len(), 1000);
/// assert!(x.iter().all(|&v| (1.0..2.0).contains(&v)));
/// ```
///
/// Panics if the interval is empty or otherwise invalid for sampling.
pub fn fill_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize, value_range: Range<f64>) -> Vec<f64> {
    let distribution = Uniform::new(value_range.start, value_range.end)
        .expect("Invalid sampling interval for the input values");
    (0..len).map(|_| distribution.sample(rng)).collect()
}

/// Computes `y[i] = alpha * x[i] + y[i]` for every index.
///
/// Each iteration reads `x[i]` and the prior `y[i]` exactly once and writes
/// `y[i]` exactly once, so the result doesn't depend on the iteration order.
///
/// ```
/// use daxpy_bench::axpy;
///
/// let x = [2.0, 4.0, 6.0];
/// let mut y = [1.0, 1.0, 1.0];
/// axpy(0.5, &x, &mut y);
/// assert_eq!(y, [2.0, 3.0, 4.0]);
/// ```
///
/// Panics if the slices have different lengths.
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert_eq!(
        x.len(),
        y.len(),
        "The x and y slices must have the same length"
    );
    x.iter()
        .zip(y.iter_mut())
        .for_each(|(&a, out)| *out = alpha * a + *out);
}

/// Computes the sum of the values by sequential accumulation in ascending
/// index order.
///
/// Floating-point addition isn't associative, so the accumulation order is
/// fixed to make the checksum bit-exact across runs with the same inputs.
pub fn reduce_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Writes the decimal representation of the checksum, without a trailing
/// newline.
///
/// The checksum is formatted with the shortest representation that parses
/// back to the same value, e.g. `9.0` is written as `"9"`.
///
/// ```
/// use daxpy_bench::write_checksum;
///
/// let mut buffer = Vec::new();
/// write_checksum(&mut buffer, 9.0).unwrap();
/// assert_eq!(buffer, b"9");
/// ```
pub fn write_checksum<W: Write>(writer: &mut W, checksum: f64) -> io::Result<()> {
    write!(writer, "{checksum}")
}
