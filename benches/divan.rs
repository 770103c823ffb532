// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use daxpy_bench::{Benchmark, CpuPinningPolicy, NoopCheckpoint};
use divan::counter::BytesCount;
use divan::{black_box, Bencher};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn main() {
    divan::main();
}

const LENGTHS: &[usize] = &[1_000, 10_000, 100_000];

#[divan::bench(args = LENGTHS)]
fn fill_uniform(bencher: Bencher, len: usize) {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    bencher
        .counter(BytesCount::of_many::<f64>(len))
        .bench_local(|| daxpy_bench::fill_uniform(&mut rng, len, black_box(1.0..2.0)))
}

#[divan::bench(args = LENGTHS)]
fn axpy(bencher: Bencher, len: usize) {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let x = daxpy_bench::fill_uniform(&mut rng, len, 1.0..2.0);
    let mut y = daxpy_bench::fill_uniform(&mut rng, len, 1.0..2.0);

    let x_slice = x.as_slice();
    bencher
        .counter(BytesCount::of_many::<f64>(len * 2))
        .bench_local(|| {
            daxpy_bench::axpy(black_box(0.5), black_box(x_slice), black_box(y.as_mut_slice()))
        })
}

#[divan::bench(args = LENGTHS)]
fn reduce_sum(bencher: Bencher, len: usize) {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let values = daxpy_bench::fill_uniform(&mut rng, len, 1.0..2.0);

    let values_slice = values.as_slice();
    bencher
        .counter(BytesCount::of_many::<f64>(len))
        .bench_local(|| daxpy_bench::reduce_sum(black_box(values_slice)))
}

#[divan::bench(args = LENGTHS)]
fn run(bencher: Bencher, len: usize) {
    let benchmark = Benchmark {
        len,
        alpha: 0.5,
        value_range: 1.0..2.0,
        cpu_pinning: CpuPinningPolicy::No,
    };
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    bencher
        .counter(BytesCount::of_many::<f64>(len * 2))
        .bench_local(|| benchmark.run(&mut rng, &mut NoopCheckpoint))
}
