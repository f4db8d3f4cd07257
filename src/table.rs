//! An immutable table of primes and the queries it answers.

use crate::error::{Error, Result};
use crate::sieve;
use byteorder::{BigEndian, ReadBytesExt};
use num_integer::Integer;
use std::collections::BTreeSet;
use std::io::Read;
use std::ops::Index;
use std::slice;

/// An immutable, ascending, gapless table of primes starting at 2.
///
/// The entry at index `i` is the `(i + 1)`-th prime. A table is built once,
/// either by [generating][Primes::generate] the sequence or by
/// [loading][Primes::load] it from a trusted source, and never modified
/// afterwards; it can be shared freely across threads once constructed.
///
/// Queries answer relative to the primes actually held: a table loaded with
/// fewer primes than exist below a queried value reports a larger true prime
/// as absent, and may factor a number only partially. See [`Primes::is_prime`]
/// and [`Primes::prime_factors`].
///
/// ```
/// use prime_table::Primes;
///
/// let primes = Primes::generate(100)?;
/// assert_eq!(primes.get(99)?, 541);
/// assert!(primes.is_prime(541));
/// assert_eq!(primes.prime_factors(132), vec![2, 2, 3, 11]);
/// # Ok::<(), prime_table::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Primes {
    list: Vec<i32>,
}

impl Primes {
    /// Generates a table of the first `how_many` primes by trial division.
    ///
    /// Returns [`Error::CountOutOfRange`] if `how_many` exceeds
    /// [`PRIMES_IN_I32_RANGE`][crate::PRIMES_IN_I32_RANGE].
    pub fn generate(how_many: usize) -> Result<Self> {
        let list = sieve::generate(how_many)?;
        Ok(Primes { list })
    }

    /// Loads a table of `how_many` primes from a stream of big-endian `i32`
    /// values.
    ///
    /// The source is trusted to deliver the prime sequence ascending from 2,
    /// with no gaps; nothing beyond the element count is validated here. Any
    /// read failure, including a stream shorter than `how_many` values, fails
    /// with [`Error::Initialization`] wrapping the cause, and no table is
    /// produced.
    pub fn load<R: Read>(mut reader: R, how_many: usize) -> Result<Self> {
        let mut list = Vec::with_capacity(how_many);
        for _ in 0..how_many {
            let p = reader
                .read_i32::<BigEndian>()
                .map_err(Error::Initialization)?;
            list.push(p);
        }
        Ok(Primes { list })
    }

    /// Returns the number of primes held.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the prime at `index`, where the prime at index 0 is 2.
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index` is not below
    /// [`len`][Primes::len].
    pub fn get(&self, index: usize) -> Result<i32> {
        self.list.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.list.len(),
        })
    }

    /// Exposes the table as a slice, ascending.
    pub fn as_slice(&self) -> &[i32] {
        &self.list
    }

    /// Iterates over the primes in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, i32> {
        self.list.iter()
    }

    /// Returns whether `n` is contained in the table, by binary search.
    ///
    /// On a fully populated table this is exactly a primality test for `n`.
    /// On a partial table it can report `false` for a true prime beyond the
    /// last entry, simply because that prime was never loaded.
    pub fn is_prime(&self, n: i32) -> bool {
        self.list.binary_search(&n).is_ok()
    }

    /// Same as [`is_prime`][Primes::is_prime].
    pub fn contains(&self, n: i32) -> bool {
        self.is_prime(n)
    }

    /// Enumerates the prime factors of `n` in ascending order, with
    /// multiplicity, calling `sink` once per factor.
    ///
    /// Walks the table upwards, dividing each entry out of the remainder as
    /// often as it divides evenly, until the remainder reaches 1 or the table
    /// is exhausted. If the table runs out while the remainder is still
    /// greater than the last entry, that remainder is dropped from the output
    /// without any error; factoring `n` completely requires a table covering
    /// the primes up to `n`'s largest factor. Inputs below 2 yield nothing.
    pub fn prime_factors_with<F: FnMut(i32)>(&self, n: i32, mut sink: F) {
        let mut remainder = n;
        for &p in &self.list {
            if remainder <= 1 {
                break;
            }
            while remainder.is_multiple_of(&p) {
                sink(p);
                remainder /= p;
            }
        }
    }

    /// Returns the prime factors of `n` in ascending order, with
    /// multiplicity.
    ///
    /// The product of the returned factors equals `n` whenever the table
    /// covers `n`'s largest prime factor; see
    /// [`prime_factors_with`][Primes::prime_factors_with] for the behavior on
    /// tables too small for that.
    pub fn prime_factors(&self, n: i32) -> Vec<i32> {
        let mut factors = Vec::new();
        self.prime_factors_with(n, |p| factors.push(p));
        factors
    }

    /// Returns the distinct prime factors of `n`, deduplicated and ordered.
    pub fn distinct_prime_factors(&self, n: i32) -> BTreeSet<i32> {
        let mut factors = BTreeSet::new();
        self.prime_factors_with(n, |p| {
            factors.insert(p);
        });
        factors
    }
}

impl Index<usize> for Primes {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.list[index]
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
