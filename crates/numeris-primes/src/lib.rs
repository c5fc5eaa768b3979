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

//! # Numeris Primes
//!
//! Lazy prime sequences and the imbalance metric between two integers.
//!
//! ## Modules
//!
//! - `oracle`: The `PrimalityOracle` seam and the `DeterministicOracle`
//!   default, which is exact for every `u64`.
//! - `primes`: `Primes`, a pull-based generator of primes in increasing
//!   order with an optional cap on the number emitted.
//! - `pairs`: `PrimePairs`, enumerating `(p, q)` with `p >= q` prime by
//!   prime, and its pass-through alias `SemiPrimes`.
//! - `imbalance`: `|p - q| / (p + q)` as a float or as an exact reduced ratio.
//!
//! Generators own their cursor and are not meant to be shared between
//! consumers; create one instance per consumer.

pub mod imbalance;
pub mod oracle;
pub mod pairs;
pub mod primes;

pub use imbalance::{
    Imbalance, imbalance, imbalance_denominator, imbalance_lowest_terms, imbalance_numerator,
};
pub use oracle::{DeterministicOracle, PrimalityOracle};
pub use pairs::{PrimePairs, SemiPrimes, prime_pairs, semi_primes};
pub use primes::{Primes, primes};
