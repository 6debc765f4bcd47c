//! Circular prime detection and enumeration.
//!
//! A circular prime stays prime under every cyclic rotation of its
//! decimal digits, e.g. 197 → 971 → 719 are all prime.
//! Reference: <https://en.wikipedia.org/wiki/Circular_prime>

use crate::digits::rotations;
use crate::primality::is_prime;

/// Test whether `n` is a circular prime.
///
/// True iff every digit rotation of `n`, `n` itself included, is prime.
/// The first composite rotation short-circuits the test. Single-digit
/// primes are trivially circular, as are repunit primes like 11, whose
/// rotations all coincide with the number itself. Defined for every
/// `u64`; rotations are evaluated in `u128`, where even 20-digit
/// values rotate without overflow.
///
/// # Examples
///
/// ```
/// use prime_trial::is_circular_prime;
///
/// assert!(is_circular_prime(197));
/// // 19 is prime but its rotation 91 = 7 * 13 is not
/// assert!(!is_circular_prime(19));
/// ```
pub fn is_circular_prime(n: u64) -> bool {
    rotations(n).all(|rot| is_prime(&rot))
}

/// Enumerate every circular prime in `[1, ubound)`, ascending.
///
/// Lazy and finite; nothing is computed past the point where the
/// consumer stops.
///
/// # Examples
///
/// ```
/// use prime_trial::circular_primes;
///
/// let head: Vec<u64> = circular_primes(20).collect();
/// assert_eq!(head, vec![2, 3, 5, 7, 11, 13, 17]);
/// ```
pub fn circular_primes(ubound: u64) -> CircularPrimes {
    CircularPrimes { next: 1, ubound }
}

/// Lazy iterator created by [`circular_primes`].
#[derive(Clone, Debug)]
pub struct CircularPrimes {
    next: u64,
    ubound: u64,
}

impl Iterator for CircularPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.next < self.ubound {
            let n = self.next;
            self.next += 1;
            if is_circular_prime(n) {
                return Some(n);
            }
        }
        None
    }
}
