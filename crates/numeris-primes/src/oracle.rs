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

//! # Primality Oracles
//!
//! The generators in this crate never decide primality themselves; they ask
//! a `PrimalityOracle`. The default, `DeterministicOracle`, delegates to the
//! `num-prime` crate, whose 64-bit test is deterministic (and therefore
//! exact) for every `u64`.
//!
//! Any `Fn(u64) -> bool` is also an oracle, which makes it easy to plug a
//! reference implementation into tests.
//!
//! ```rust
//! use numeris_primes::oracle::{DeterministicOracle, PrimalityOracle};
//!
//! let oracle = DeterministicOracle::new();
//! assert!(oracle.is_prime(2));
//! assert!(!oracle.is_prime(91));
//! assert!(oracle.is_prime(18_446_744_073_709_551_557)); // largest u64 prime
//! ```

/// Reports whether an integer is prime.
pub trait PrimalityOracle {
    /// Returns `true` if `candidate` is prime.
    fn is_prime(&self, candidate: u64) -> bool;

    /// A human-readable name, used for diagnostics.
    fn name(&self) -> &str {
        "PrimalityOracle"
    }
}

impl<F> PrimalityOracle for F
where
    F: Fn(u64) -> bool,
{
    #[inline(always)]
    fn is_prime(&self, candidate: u64) -> bool {
        self(candidate)
    }

    fn name(&self) -> &str {
        "FnPrimalityOracle"
    }
}

impl std::fmt::Debug for dyn PrimalityOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrimalityOracle({})", self.name())
    }
}

/// Deterministic primality test over the full `u64` range, backed by
/// `num_prime::nt_funcs::is_prime64`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DeterministicOracle {
    _private: (),
}

impl DeterministicOracle {
    /// Creates a new `DeterministicOracle`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl PrimalityOracle for DeterministicOracle {
    #[inline(always)]
    fn is_prime(&self, candidate: u64) -> bool {
        num_prime::nt_funcs::is_prime64(candidate)
    }

    fn name(&self) -> &str {
        "DeterministicOracle"
    }
}

impl std::fmt::Display for DeterministicOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeterministicOracle")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Reference oracle used to cross-check small ranges.
    pub(crate) fn trial_division(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_small_values() {
        let oracle = DeterministicOracle::new();
        assert!(!oracle.is_prime(0));
        assert!(!oracle.is_prime(1));
        assert!(oracle.is_prime(2));
        assert!(oracle.is_prime(3));
        assert!(!oracle.is_prime(4));
        assert!(oracle.is_prime(97));
    }

    #[test]
    fn test_agrees_with_trial_division() {
        let oracle = DeterministicOracle::new();
        for n in 0..5_000_u64 {
            assert_eq!(oracle.is_prime(n), trial_division(n), "disagreement at {}", n);
        }
    }

    #[test]
    fn test_large_values_without_overflow() {
        let oracle = DeterministicOracle::new();
        assert!(oracle.is_prime(18_446_744_073_709_551_557));
        assert!(!oracle.is_prime(u64::MAX));
        // 2^61 - 1 is a Mersenne prime
        assert!(oracle.is_prime((1_u64 << 61) - 1));
        // Strong pseudoprime to several small bases
        assert!(!oracle.is_prime(3_215_031_751));
    }

    #[test]
    fn test_closure_is_an_oracle() {
        let even_only = |n: u64| n % 2 == 0;
        assert!(even_only.is_prime(4));
        assert!(!even_only.is_prime(5));
        assert_eq!(PrimalityOracle::name(&even_only), "FnPrimalityOracle");
    }

    #[test]
    fn test_names() {
        let oracle = DeterministicOracle::new();
        assert_eq!(oracle.name(), "DeterministicOracle");
        assert_eq!(format!("{}", oracle), "DeterministicOracle");
        let boxed: Box<dyn PrimalityOracle> = Box::new(oracle);
        assert_eq!(format!("{:?}", boxed), "PrimalityOracle(DeterministicOracle)");
    }
}
