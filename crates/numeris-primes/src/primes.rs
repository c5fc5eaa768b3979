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

//! # Prime Generator
//!
//! `Primes` is a pull-based, non-restartable iterator over the primes in
//! strictly increasing order, starting at 2. Candidates are tested one by one
//! with a `PrimalityOracle`; there is no sieve and no state shared between
//! generator instances.
//!
//! The sequence is unbounded unless a `max_count` is given, in which case it
//! ends after exactly that many primes. An unbounded generator only stops
//! once the `u64` candidate space is exhausted, so consumers should bound it
//! themselves (e.g. with `take`).
//!
//! ```rust
//! use numeris_primes::primes::primes;
//!
//! assert_eq!(primes(Some(5)).collect::<Vec<_>>(), vec![2, 3, 5, 7, 11]);
//! assert_eq!(primes(None).nth(99), Some(541));
//! assert_eq!(primes(Some(0)).next(), None);
//! ```

use crate::oracle::{DeterministicOracle, PrimalityOracle};
use std::iter::FusedIterator;

/// The first candidate tested by every generator.
pub(crate) const FIRST_CANDIDATE: u64 = 2;

/// A lazy generator of prime numbers.
#[derive(Clone, Debug)]
pub struct Primes<O = DeterministicOracle>
where
    O: PrimalityOracle,
{
    oracle: O,
    /// Next integer to test; `None` once the `u64` range is exhausted.
    candidate: Option<u64>,
    /// Primes still to emit; `None` if unbounded.
    remaining: Option<usize>,
    emitted: usize,
}

impl Primes<DeterministicOracle> {
    /// Creates a generator backed by the `DeterministicOracle`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numeris_primes::primes::Primes;
    /// let first: Vec<u64> = Primes::new(Some(3)).collect();
    /// assert_eq!(first, vec![2, 3, 5]);
    /// ```
    #[inline]
    pub fn new(max_count: Option<usize>) -> Self {
        Self::with_oracle(DeterministicOracle::new(), max_count)
    }
}

impl<O> Primes<O>
where
    O: PrimalityOracle,
{
    /// Creates a generator that consults `oracle` for every candidate.
    #[inline]
    pub fn with_oracle(oracle: O, max_count: Option<usize>) -> Self {
        Self {
            oracle,
            candidate: Some(FIRST_CANDIDATE),
            remaining: max_count,
            emitted: 0,
        }
    }

    /// Number of primes emitted so far.
    #[inline(always)]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Number of primes still to emit, or `None` for an unbounded generator.
    #[inline(always)]
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    /// The oracle consulted by this generator.
    #[inline(always)]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<O> Iterator for Primes<O>
where
    O: PrimalityOracle,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            let n = self.candidate?;
            self.candidate = n.checked_add(1);

            if self.oracle.is_prime(n) {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                self.emitted += 1;
                return Some(n);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.candidate.is_none() {
            return (0, Some(0));
        }
        (0, self.remaining)
    }
}

impl<O> FusedIterator for Primes<O> where O: PrimalityOracle {}

impl<O> std::fmt::Display for Primes<O>
where
    O: PrimalityOracle,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.remaining {
            Some(remaining) => write!(
                f,
                "Primes(emitted: {}, remaining: {}, oracle: {})",
                self.emitted,
                remaining,
                self.oracle.name()
            ),
            None => write!(
                f,
                "Primes(emitted: {}, unbounded, oracle: {})",
                self.emitted,
                self.oracle.name()
            ),
        }
    }
}

/// Returns a generator of the first `max_count` primes, or of all primes if `None`.
#[inline]
pub fn primes(max_count: Option<usize>) -> Primes {
    Primes::new(max_count)
}
