//! Trial-division generation of the prime sequence.

use crate::error::{Error, Result};
use crate::isqrt::isqrt;
use num_traits::{CheckedMul, PrimInt};

/// The number of primes in `[2, i32::MAX]`, both ends inclusive.
///
/// `i32::MAX` is itself prime and is the last entry of a fully populated
/// table; requesting more primes than this from [`generate`] cannot be
/// represented and is rejected.
pub const PRIMES_IN_I32_RANGE: usize = 105_097_565;

/// Accumulates the first `how_many` primes, feeding each one to `sink` the
/// moment it is confirmed.
///
/// A candidate is prime iff no already-found prime up to its integer square
/// root divides it, so only those table entries are tried. Even numbers past
/// 2 are never considered; candidates advance in steps of two.
fn sieve<T, F>(how_many: usize, mut sink: F) -> Vec<T>
where
    T: PrimInt + CheckedMul,
    F: FnMut(T),
{
    let mut primes = Vec::with_capacity(how_many);
    if how_many == 0 {
        return primes;
    }

    let two = T::one() + T::one();
    primes.push(two);
    sink(two);

    let mut candidate = T::one();
    'candidates: while primes.len() < how_many {
        candidate = candidate + two;
        let bound = isqrt(candidate);
        for &p in &primes {
            if p > bound {
                break;
            }
            if (candidate % p).is_zero() {
                continue 'candidates;
            }
        }
        primes.push(candidate);
        sink(candidate);
    }
    primes
}

/// Generates the first `how_many` primes, ascending from 2.
///
/// Returns [`Error::CountOutOfRange`] if `how_many` exceeds
/// [`PRIMES_IN_I32_RANGE`], since the primes past that point do not fit in
/// an `i32`.
pub fn generate(how_many: usize) -> Result<Vec<i32>> {
    generate_with(how_many, |_| {})
}

/// Generates the first `how_many` primes, invoking `sink` once per prime as
/// it is found, in ascending order, on the calling thread.
///
/// The sink sees every prime exactly once and before the function returns;
/// it is a way to stream the sequence out (into a file, say) without keeping
/// a second copy. Generating 0 primes returns an empty vector and never
/// invokes the sink.
pub fn generate_with<F: FnMut(i32)>(how_many: usize, sink: F) -> Result<Vec<i32>> {
    if how_many > PRIMES_IN_I32_RANGE {
        return Err(Error::CountOutOfRange {
            requested: how_many,
            max: PRIMES_IN_I32_RANGE,
        });
    }
    Ok(sieve(how_many, sink))
}

/// Generates the first `how_many` primes as `i64` values.
///
/// Same algorithm as [`generate`], differing only in range. No count guard is
/// needed here: no allocatable request gets anywhere near exhausting the
/// 64-bit range.
pub fn generate64(how_many: usize) -> Vec<i64> {
    generate64_with(how_many, |_| {})
}

/// Generates the first `how_many` primes as `i64` values, invoking `sink`
/// once per prime found, in ascending order.
pub fn generate64_with<F: FnMut(i64)>(how_many: usize, sink: F) -> Vec<i64> {
    sieve(how_many, sink)
}
