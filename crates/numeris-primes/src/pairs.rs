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

//! # Prime-Pair and Semi-Prime Generators
//!
//! `PrimePairs` enumerates ordered pairs `(p, q)` of primes with `p >= q`.
//! Whenever a new prime `p` is discovered it is paired with every previously
//! discovered prime `q` in increasing order, followed by the self-pair
//! `(p, p)`:
//!
//! ```text
//! (2,2), (3,2), (3,3), (5,2), (5,3), (5,5), (7,2), ...
//! ```
//!
//! The generator runs its own candidate loop and keeps its own list of
//! discovered primes rather than wrapping a `Primes` instance. `max_count`
//! caps the total number of pairs, not the pairs per `p`.
//!
//! `SemiPrimes` is the same sequence under a different name. It yields the
//! pairs themselves, not their products.
//!
//! ```rust
//! use numeris_primes::pairs::{prime_pairs, semi_primes};
//!
//! let pairs: Vec<(u64, u64)> = prime_pairs(Some(6)).collect();
//! assert_eq!(pairs, vec![(2, 2), (3, 2), (3, 3), (5, 2), (5, 3), (5, 5)]);
//! assert_eq!(semi_primes(Some(6)).collect::<Vec<_>>(), pairs);
//! ```

use crate::{
    oracle::{DeterministicOracle, PrimalityOracle},
    primes::FIRST_CANDIDATE,
};
use std::iter::FusedIterator;

/// A lazy generator of ordered prime pairs `(p, q)` with `p >= q`.
#[derive(Clone, Debug)]
pub struct PrimePairs<O = DeterministicOracle>
where
    O: PrimalityOracle,
{
    oracle: O,
    candidate: Option<u64>,
    /// Primes whose pairs have been fully emitted, in increasing order.
    discovered: Vec<u64>,
    /// The prime currently being paired, if any.
    current: Option<u64>,
    /// Index into `discovered` of the next partner for `current`.
    cursor: usize,
    remaining: Option<usize>,
}

impl PrimePairs<DeterministicOracle> {
    /// Creates a pair generator backed by the `DeterministicOracle`.
    #[inline]
    pub fn new(max_count: Option<usize>) -> Self {
        Self::with_oracle(DeterministicOracle::new(), max_count)
    }
}

impl<O> PrimePairs<O>
where
    O: PrimalityOracle,
{
    /// Creates a pair generator that consults `oracle` for every candidate.
    #[inline]
    pub fn with_oracle(oracle: O, max_count: Option<usize>) -> Self {
        Self {
            oracle,
            candidate: Some(FIRST_CANDIDATE),
            discovered: Vec::new(),
            current: None,
            cursor: 0,
            remaining: max_count,
        }
    }

    /// Primes whose pairs (including the self-pair) have all been emitted.
    #[inline(always)]
    pub fn discovered(&self) -> &[u64] {
        &self.discovered
    }

    /// Number of pairs still to emit, or `None` for an unbounded generator.
    #[inline(always)]
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    #[inline(always)]
    fn emit(&mut self, pair: (u64, u64)) -> Option<(u64, u64)> {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(pair)
    }
}

impl<O> Iterator for PrimePairs<O>
where
    O: PrimalityOracle,
{
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            if let Some(p) = self.current {
                if let Some(&q) = self.discovered.get(self.cursor) {
                    self.cursor += 1;
                    return self.emit((p, q));
                }
                self.discovered.push(p);
                self.current = None;
                return self.emit((p, p));
            }

            let n = self.candidate?;
            self.candidate = n.checked_add(1);
            if self.oracle.is_prime(n) {
                self.current = Some(n);
                self.cursor = 0;
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.remaining)
    }
}

impl<O> FusedIterator for PrimePairs<O> where O: PrimalityOracle {}

/// Semi-prime generator: the `PrimePairs` sequence under its own name.
#[repr(transparent)]
#[derive(Clone, Debug)]
pub struct SemiPrimes<O = DeterministicOracle>
where
    O: PrimalityOracle,
{
    inner: PrimePairs<O>,
}

impl SemiPrimes<DeterministicOracle> {
    /// Creates a semi-prime generator backed by the `DeterministicOracle`.
    #[inline]
    pub fn new(max_count: Option<usize>) -> Self {
        Self {
            inner: PrimePairs::new(max_count),
        }
    }
}

impl<O> SemiPrimes<O>
where
    O: PrimalityOracle,
{
    /// Creates a semi-prime generator that consults `oracle`.
    #[inline]
    pub fn with_oracle(oracle: O, max_count: Option<usize>) -> Self {
        Self {
            inner: PrimePairs::with_oracle(oracle, max_count),
        }
    }

    /// Unwraps the underlying pair generator.
    #[inline]
    pub fn into_inner(self) -> PrimePairs<O> {
        self.inner
    }
}

impl<O> Iterator for SemiPrimes<O>
where
    O: PrimalityOracle,
{
    type Item = (u64, u64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<O> FusedIterator for SemiPrimes<O> where O: PrimalityOracle {}

/// Returns a generator of at most `max_count` prime pairs, or of all pairs if `None`.
#[inline]
pub fn prime_pairs(max_count: Option<usize>) -> PrimePairs {
    PrimePairs::new(max_count)
}

/// Returns a semi-prime generator; see [`SemiPrimes`].
#[inline]
pub fn semi_primes(max_count: Option<usize>) -> SemiPrimes {
    SemiPrimes::new(max_count)
}
