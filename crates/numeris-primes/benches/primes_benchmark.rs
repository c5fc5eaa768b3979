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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numeris_primes::{imbalance_lowest_terms, prime_pairs, primes};
use std::hint::black_box;

fn bench_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes");
    for count in [100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("primes", count), &count, |b, &count| {
            b.iter(|| primes(black_box(Some(count))).last())
        });
        group.bench_with_input(
            BenchmarkId::new("prime_pairs", count),
            &count,
            |b, &count| b.iter(|| prime_pairs(black_box(Some(count))).last()),
        );
    }
    group.finish();
}

fn bench_imbalance(c: &mut Criterion) {
    let pairs: Vec<(u64, u64)> = prime_pairs(Some(5_000)).collect();
    let mut group = c.benchmark_group("imbalance");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("lowest_terms", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|&(p, q)| imbalance_lowest_terms(black_box(p), black_box(q)).ok())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_primes, bench_imbalance);
criterion_main!(benches);
