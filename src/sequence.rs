//! Lazy prime sequences with three selection modes.

use crate::primality::{is_prime, PrimeInt};
use std::ops::Range;

/// Selects which primes [`primes`] will emit.
///
/// The three modes are mutually exclusive by construction; there is no
/// way to request a rank restriction and a value restriction at the
/// same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimeRange<T> {
    /// Every prime from 2 upwards. The sequence never terminates on its
    /// own; the consumer decides when to stop.
    All,

    /// Primes selected by their 1-based position in the prime sequence.
    /// The range is half-open, so `ByRank(1..6)` selects the 1st
    /// through 5th primes and `ByRank(6..11)` the 6th through 10th.
    ByRank(Range<usize>),

    /// Primes selected by value, ascending over the half-open interval.
    ByValue(Range<T>),
}

/// Create a lazy iterator over primes selected by `range`.
///
/// Nothing is precomputed or cached; every call starts a fresh walk, so
/// two calls with the same argument yield identical sequences.
///
/// # Examples
///
/// ```
/// use prime_trial::{primes, PrimeRange};
///
/// let head: Vec<u64> = primes(PrimeRange::All).take(5).collect();
/// assert_eq!(head, vec![2, 3, 5, 7, 11]);
///
/// let teens: Vec<u64> = primes(PrimeRange::ByValue(10..20)).collect();
/// assert_eq!(teens, vec![11, 13, 17, 19]);
/// ```
pub fn primes<T: PrimeInt>(range: PrimeRange<T>) -> Primes<T> {
    let two = T::from_u8(2).unwrap();
    let state = match range {
        PrimeRange::All => State::All { next: two },
        PrimeRange::ByRank(range) => State::ByRank {
            candidate: two,
            rank: 1,
            range,
        },
        PrimeRange::ByValue(range) => State::ByValue {
            next: range.start,
            end: range.end,
        },
    };
    Primes { state }
}

/// Lazy iterator over primes, created by [`primes`].
///
/// Infinite in [`PrimeRange::All`] mode, finite otherwise. Once a
/// restricted sequence is exhausted it keeps returning `None`.
#[derive(Clone, Debug)]
pub struct Primes<T> {
    state: State<T>,
}

#[derive(Clone, Debug)]
enum State<T> {
    All {
        next: T,
    },
    ByRank {
        candidate: T,
        // rank the next prime found will receive, 1-based
        rank: usize,
        range: Range<usize>,
    },
    ByValue {
        next: T,
        end: T,
    },
}

impl<T: PrimeInt> Iterator for Primes<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.state {
            State::All { next } => loop {
                let n = next.clone();
                *next = n.clone() + T::one();
                if is_prime(&n) {
                    return Some(n);
                }
            },
            State::ByRank {
                candidate,
                rank,
                range,
            } => loop {
                // every prime from here on would rank past the range
                if *rank >= range.end {
                    return None;
                }
                let n = candidate.clone();
                *candidate = n.clone() + T::one();
                if is_prime(&n) {
                    let r = *rank;
                    *rank += 1;
                    if range.contains(&r) {
                        return Some(n);
                    }
                }
            },
            State::ByValue { next, end } => {
                while next < end {
                    let n = next.clone();
                    *next = n.clone() + T::one();
                    if is_prime(&n) {
                        return Some(n);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME10: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

    #[test]
    fn unbounded_test() {
        let head: Vec<u64> = primes(PrimeRange::All).take(10).collect();
        assert_eq!(head, PRIME10);
    }

    #[test]
    fn by_rank_test() {
        let first_five: Vec<u64> = primes(PrimeRange::ByRank(1..6)).collect();
        assert_eq!(first_five, [2, 3, 5, 7, 11]);

        let sixth_to_tenth: Vec<u64> = primes(PrimeRange::ByRank(6..11)).collect();
        assert_eq!(sixth_to_tenth, [13, 17, 19, 23, 29]);

        // 25 primes below 100, the 25th is 97
        let twenty_fifth: Vec<u64> = primes(PrimeRange::ByRank(25..26)).collect();
        assert_eq!(twenty_fifth, [97]);
    }

    #[test]
    fn by_rank_empty_test() {
        let mut empty = primes::<u64>(PrimeRange::ByRank(4..4));
        assert_eq!(empty.next(), None);

        let mut degenerate = primes::<u64>(PrimeRange::ByRank(5..2));
        assert_eq!(degenerate.next(), None);
    }

    #[test]
    fn by_value_test() {
        let teens: Vec<u64> = primes(PrimeRange::ByValue(10..20)).collect();
        assert_eq!(teens, [11, 13, 17, 19]);

        let from_zero: Vec<u64> = primes(PrimeRange::ByValue(0..10)).collect();
        assert_eq!(from_zero, [2, 3, 5, 7]);

        let empty: Vec<u64> = primes(PrimeRange::ByValue(24..29)).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn exhausted_stays_exhausted_test() {
        let mut seq = primes::<u64>(PrimeRange::ByValue(2..4));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn idempotence_test() {
        let a: Vec<u64> = primes(PrimeRange::ByValue(2..200)).collect();
        let b: Vec<u64> = primes(PrimeRange::ByValue(2..200)).collect();
        assert_eq!(a, b);

        let c: Vec<u64> = primes(PrimeRange::ByRank(3..9)).collect();
        let d: Vec<u64> = primes(PrimeRange::ByRank(3..9)).collect();
        assert_eq!(c, d);
    }
}
