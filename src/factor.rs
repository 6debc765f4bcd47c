//! Lazy prime factorization by trial division.

use crate::primality::{is_prime, PrimeInt};
use crate::sequence::{primes, PrimeRange, Primes};
use num_traits::RefNum;
use std::collections::BTreeMap;

/// Decompose a positive integer into `(prime, multiplicity)` pairs.
///
/// The pairs are produced lazily, strictly ascending by prime value,
/// and multiply back to the target exactly. Candidate primes are drawn
/// from [`primes`] in interval mode over `[2, isqrt(n) + 1)`; the bound
/// uses the exact integer square root so no factor is ever lost to
/// floating-point rounding. A residual cofactor larger than the square
/// root is necessarily prime and is emitted last.
///
/// A prime target is emitted directly as `(n, 1)` without scanning
/// candidates, and 1 produces an empty sequence.
///
/// # Panics
///
/// Panics if `n` is zero or negative.
///
/// # Examples
///
/// ```
/// use prime_trial::prime_factors_with_multiplicity;
///
/// // 54 = 2 * 3^3
/// let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(54).collect();
/// assert_eq!(pairs, vec![(2, 1), (3, 3)]);
/// ```
pub fn prime_factors_with_multiplicity<T: PrimeInt>(n: T) -> Factorization<T>
where
    for<'r> &'r T: RefNum<T>,
{
    assert!(n >= T::one(), "target must be a positive integer");

    let two = T::from_u8(2).unwrap();
    let candidates = if n.is_one() || is_prime(&n) {
        // nothing to scan, the residual rule emits n itself (or nothing)
        primes(PrimeRange::ByValue(two.clone()..two))
    } else {
        let bound = n.sqrt() + T::one();
        primes(PrimeRange::ByValue(two..bound))
    };
    Factorization {
        residual: n,
        candidates,
    }
}

/// Decompose a positive integer into its distinct prime factors,
/// lazily and in ascending order.
///
/// Same contract as [`prime_factors_with_multiplicity`] with the
/// exponents dropped.
///
/// # Panics
///
/// Panics if `n` is zero or negative.
///
/// # Examples
///
/// ```
/// use prime_trial::prime_factors;
///
/// let factors: Vec<u64> = prime_factors(54).collect();
/// assert_eq!(factors, vec![2, 3]);
/// ```
pub fn prime_factors<T: PrimeInt>(n: T) -> PrimeFactors<T>
where
    for<'r> &'r T: RefNum<T>,
{
    PrimeFactors(prime_factors_with_multiplicity(n))
}

/// Factorize a positive integer eagerly into a prime → multiplicity map.
///
/// # Panics
///
/// Panics if `n` is zero or negative.
pub fn factorize<T: PrimeInt>(n: T) -> BTreeMap<T, usize>
where
    for<'r> &'r T: RefNum<T>,
{
    prime_factors_with_multiplicity(n).collect()
}

/// Lazy `(prime, multiplicity)` iterator created by
/// [`prime_factors_with_multiplicity`].
#[derive(Clone, Debug)]
pub struct Factorization<T> {
    residual: T,
    candidates: Primes<T>,
}

impl<T: PrimeInt> Iterator for Factorization<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = (T, usize);

    fn next(&mut self) -> Option<(T, usize)> {
        if self.residual.is_one() {
            return None;
        }

        while let Some(p) = self.candidates.next() {
            // no remaining candidate divides the residual, it is prime
            if &p * &p > self.residual {
                break;
            }
            if self.residual.is_multiple_of(&p) {
                let mut exp = 0usize;
                while self.residual.is_multiple_of(&p) {
                    self.residual = &self.residual / &p;
                    exp += 1;
                }
                return Some((p, exp));
            }
        }

        let last = std::mem::replace(&mut self.residual, T::one());
        Some((last, 1))
    }
}

/// Lazy distinct-prime iterator created by [`prime_factors`].
#[derive(Clone, Debug)]
pub struct PrimeFactors<T>(Factorization<T>);

impl<T: PrimeInt> Iterator for PrimeFactors<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next().map(|(p, _)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;
    use std::iter::FromIterator;

    #[test]
    fn known_factorization_test() {
        let distinct: Vec<u64> = prime_factors(54).collect();
        assert_eq!(distinct, [2, 3]);
        let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(54).collect();
        assert_eq!(pairs, [(2, 1), (3, 3)]);

        // the large cofactor of a semiprime must not be dropped
        let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(6).collect();
        assert_eq!(pairs, [(2, 1), (3, 1)]);

        let fac123456789 = BTreeMap::from_iter([(3u64, 2), (3607, 1), (3803, 1)]);
        assert_eq!(factorize(123456789u64), fac123456789);
    }

    #[test]
    fn unit_and_prime_test() {
        assert_eq!(prime_factors(1u64).next(), None);
        assert_eq!(factorize(1u64), BTreeMap::new());

        let just17: Vec<u64> = prime_factors(17).collect();
        assert_eq!(just17, [17]);
        let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(17).collect();
        assert_eq!(pairs, [(17, 1)]);
    }

    #[test]
    fn prime_power_test() {
        // squares and higher powers of primes exercise the exact
        // square-root boundary
        let cases: [(u64, u64, usize); 5] =
            [(4, 2, 2), (9, 3, 2), (8, 2, 3), (81, 3, 4), (121, 11, 2)];
        for (n, p, e) in cases {
            let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(n).collect();
            assert_eq!(pairs, [(p, e)], "factoring {}", n);
        }
    }

    #[test]
    fn round_trip_test() {
        for _ in 0..200 {
            let target = random::<u16>() as u64 + 2;
            let mut product = 1u64;
            let mut previous = 1u64;
            for (p, e) in prime_factors_with_multiplicity(target) {
                assert!(is_prime(&p), "non-prime factor {} of {}", p, target);
                assert!(p > previous, "factors of {} out of order", target);
                previous = p;
                product *= p.pow(e as u32);
            }
            assert_eq!(product, target, "round trip failed for {}", target);
        }
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_target_test() {
        prime_factors_with_multiplicity(0u64);
    }

    #[test]
    fn laziness_test() {
        // only the head of the factorization is computed when the
        // consumer stops early
        let mut pairs = prime_factors_with_multiplicity(720u64); // 2^4 * 3^2 * 5
        assert_eq!(pairs.next(), Some((2, 4)));
        assert_eq!(pairs.next(), Some((3, 2)));
        assert_eq!(pairs.next(), Some((5, 1)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }
}
