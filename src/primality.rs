//! Primality testing by trial division.

use num_integer::{Integer, Roots};
use num_traits::{FromPrimitive, NumRef, ToPrimitive};

/// Integer types accepted by the functions in this crate.
///
/// This is a blanket bound collecting everything the algorithms need:
/// integer arithmetic, exact integer roots, arithmetic between owned and
/// borrowed values, and conversion from small constants. All primitive
/// integers satisfy it.
pub trait PrimeInt: Integer + Roots + NumRef + Clone + FromPrimitive + ToPrimitive {}
impl<T: Integer + Roots + NumRef + Clone + FromPrimitive + ToPrimitive> PrimeInt for T {}

/// Test whether `n` is a prime number by trial division.
///
/// Every value below 2 is non-prime, including zero and the negative
/// values of signed types. Odd targets are divided only by odd
/// candidates up to the exact integer square root, so the test is
/// O(√n) with no floating point involved.
///
/// # Examples
///
/// ```
/// use prime_trial::is_prime;
///
/// assert!(is_prime(&2u64));
/// assert!(is_prime(&197u64));
/// assert!(!is_prime(&1u64));
/// assert!(!is_prime(&91u64)); // 7 * 13
/// ```
pub fn is_prime<T: PrimeInt>(n: &T) -> bool {
    let two = T::from_u8(2).unwrap();
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // odd candidates only, up to the exact integer square root
    let bound = n.sqrt();
    let mut candidate = T::from_u8(3).unwrap();
    while candidate <= bound {
        if n.is_multiple_of(&candidate) {
            return false;
        }
        candidate = candidate + &two;
    }
    true
}
