//! Decimal digit rotations.

/// Iterate over the cyclic digit rotations of `n`, starting with `n`
/// itself.
///
/// Each step moves the leading decimal digit to the end (a left
/// rotation), so a d-digit number produces exactly d values:
/// 197 → 197, 971, 719. Single-digit numbers, zero included, yield
/// exactly themselves; repeated-digit numbers yield d equal values.
/// Rotations dropping a leading zero are shorter numbers (110 → 101,
/// 11), matching plain integer arithmetic.
///
/// The items are `u128` because the rotations of a 20-digit `u64`
/// exceed the `u64` range. Each rotation is computed only when the
/// next element is demanded, never ahead of it.
///
/// # Examples
///
/// ```
/// use prime_trial::rotations;
///
/// let rots: Vec<u128> = rotations(197).collect();
/// assert_eq!(rots, vec![197, 971, 719]);
/// ```
pub fn rotations(n: u64) -> Rotations {
    let mut shift = 1u128;
    let mut digits = 1u32;
    let mut rest = n;
    while rest >= 10 {
        rest /= 10;
        shift *= 10;
        digits += 1;
    }
    Rotations {
        current: n as u128,
        shift,
        remaining: digits,
    }
}

/// Iterator created by [`rotations`].
#[derive(Clone, Copy, Debug)]
pub struct Rotations {
    current: u128,
    // 10^(d-1) where d is the digit count of the original number
    shift: u128,
    remaining: u32,
}

impl Iterator for Rotations {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let n = self.current;
        if self.remaining > 0 {
            self.current = (n % self.shift) * 10 + n / self.shift;
        }
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rotations {}
