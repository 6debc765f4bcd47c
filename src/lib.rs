//! Elementary number-theory utilities built on plain trial division:
//! primality testing, lazy prime sequences (unbounded, by rank range or
//! by value interval), lazy prime factorization and circular prime
//! enumeration.
//!
//! Everything is computed on demand; no sieve, cache or probabilistic
//! test hides behind the API, so each call is independent and
//! deterministic. The core functions are generic over primitive
//! integers through the [`PrimeInt`] bound.
//!
//! ```
//! use prime_trial::{primes, prime_factors_with_multiplicity, PrimeRange};
//!
//! let head: Vec<u64> = primes(PrimeRange::All).take(10).collect();
//! assert_eq!(head, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! let pairs: Vec<(u64, usize)> = prime_factors_with_multiplicity(54).collect();
//! assert_eq!(pairs, vec![(2, 1), (3, 3)]);
//! ```

mod circular;
mod digits;
mod factor;
mod primality;
mod sequence;

pub use circular::{circular_primes, is_circular_prime, CircularPrimes};
pub use digits::{rotations, Rotations};
pub use factor::{
    factorize, prime_factors, prime_factors_with_multiplicity, Factorization, PrimeFactors,
};
pub use primality::{is_prime, PrimeInt};
pub use sequence::{primes, PrimeRange, Primes};
