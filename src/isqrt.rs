//! Exact integer square root.

use num_traits::{CheckedMul, PrimInt};

/// Returns the largest integer `r` such that `r * r <= n`.
///
/// The initial estimate comes from the hardware float square root and is then
/// corrected until `r * r <= n < (r + 1) * (r + 1)` holds exactly. An `f64`
/// has 53 significand bits while a 64-bit input has up to 63, so the raw
/// estimate can land one off on either side near perfect squares and must not
/// be trusted as is. The probe squares are computed with `checked_mul` so
/// that correcting near `T::max_value()` cannot overflow.
///
/// # Panics
///
/// Panics if `n` is negative.
pub fn isqrt<T: PrimInt + CheckedMul>(n: T) -> T {
    assert!(n >= T::zero(), "isqrt is undefined for negative numbers");

    let mut r: T = T::from(n.to_f64().unwrap().sqrt()).unwrap();
    while r.checked_mul(&r).map_or(true, |sq| sq > n) {
        r = r - T::one();
    }
    loop {
        let next = r + T::one();
        match next.checked_mul(&next) {
            Some(sq) if sq <= n => r = next,
            _ => break,
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_range_is_exact() {
        for n in 0..100_000i64 {
            let r = isqrt(n);
            assert!(r * r <= n, "isqrt({}) = {} overshoots", n, r);
            assert!((r + 1) * (r + 1) > n, "isqrt({}) = {} undershoots", n, r);
        }
    }

    #[test]
    fn agrees_with_num_integer() {
        for n in (0..5_000_000i64).step_by(317) {
            assert_eq!(isqrt(n), num_integer::sqrt(n));
        }
        assert_eq!(isqrt(u64::MAX), num_integer::sqrt(u64::MAX));
    }

    #[test]
    fn boundary_values() {
        assert_eq!(isqrt(0i32), 0);
        assert_eq!(isqrt(1i32), 1);
        assert_eq!(isqrt(2i32), 1);
        assert_eq!(isqrt(3i32), 1);
        assert_eq!(isqrt(4i32), 2);
        assert_eq!(isqrt(i32::MAX), 46_340);
        assert_eq!(isqrt(i64::MAX), 3_037_000_499);
    }

    #[test]
    fn squares_near_the_float_precision_limit() {
        let r = 3_037_000_499i64; // isqrt(i64::MAX)
        assert_eq!(isqrt(r * r), r);
        assert_eq!(isqrt(r * r - 1), r - 1);
        assert_eq!(isqrt(r * r + 1), r);

        for k in [46_339i64, 46_340, 94_906_265, 2_147_483_647] {
            assert_eq!(isqrt(k * k), k);
            assert_eq!(isqrt(k * k - 1), k - 1);
        }
    }

    #[test]
    fn random_inputs_satisfy_the_contract() {
        for _ in 0..10_000 {
            let n = rand::random::<i64>() & i64::MAX;
            let r = isqrt(n) as i128;
            let n = n as i128;
            assert!(r * r <= n && (r + 1) * (r + 1) > n);
        }
    }

    #[test]
    #[should_panic]
    fn negative_input_panics() {
        isqrt(-1i32);
    }
}
