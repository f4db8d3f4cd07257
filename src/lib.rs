//! A queryable table of the primes below `i32::MAX`.
//!
//! The table is produced either by [`Primes::generate`] (deterministic trial
//! division, optionally streaming each prime through a callback via
//! [`generate_with`]) or by [`Primes::load`] (decoding a trusted stream of
//! big-endian `i32` values). Either way the result is the same immutable
//! type, answering primality by binary search and factoring by trial
//! division over its own entries.
//!
//! ```
//! use prime_table::Primes;
//!
//! let primes = Primes::generate(10_000)?;
//! assert!(primes.is_prime(9973));
//! assert_eq!(primes.prime_factors(53176), vec![2, 2, 2, 17, 17, 23]);
//! # Ok::<(), prime_table::Error>(())
//! ```

mod error;
mod isqrt;
mod sieve;
mod table;

pub use error::{Error, Result};
pub use isqrt::isqrt;
pub use sieve::{generate, generate64, generate64_with, generate_with, PRIMES_IN_I32_RANGE};
pub use table::Primes;
