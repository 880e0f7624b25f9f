//! Mixed-radix positional numbering over an [`Alphabet`].
//!
//! An identifier of length `L` over an alphabet of `a` symbols is the
//! big-endian number `Σ digit(s_i) × a^(L-1-i)`. These helpers convert between
//! that number (the *cursor*) and its fixed-width spelling, and advance a
//! digit vector in place.

use crate::Alphabet;

/// Number of distinct identifiers of `length` symbols over an alphabet of
/// `alphabet_len` symbols, or `None` if it does not fit in a `u128`.
#[inline]
pub fn capacity(alphabet_len: usize, length: usize) -> Option<u128> {
    let exp = u32::try_from(length).ok()?;
    (alphabet_len as u128).checked_pow(exp)
}

/// Spells `index` as exactly `length` symbols, most significant first.
///
/// Leading zero symbols come from the division itself, no padding is applied
/// afterwards. Returns `None` when `index` is outside `[0, a^length)`.
///
/// # Example
///
/// ```
/// use seqid::{Alphabet, radix};
///
/// let alphabet: Alphabet = "01".parse().unwrap();
/// assert_eq!(radix::encode(5, 4, &alphabet).as_deref(), Some("0101"));
/// assert_eq!(radix::encode(16, 4, &alphabet), None);
/// ```
pub fn encode(index: u128, length: usize, alphabet: &Alphabet) -> Option<String> {
    if let Some(cap) = capacity(alphabet.len(), length) {
        if index >= cap {
            return None;
        }
    }

    let base = alphabet.len() as u128;
    let mut rest = index;
    let mut digits = vec![0_usize; length];
    for digit in digits.iter_mut().rev() {
        // The remainder is below `base`, which came from a `usize`.
        *digit = (rest % base) as usize;
        rest /= base;
    }
    Some(alphabet.spell(&digits))
}

/// The cursor of `id`, or `None` if a symbol is not in `alphabet` or the value
/// overflows a `u128`.
///
/// # Example
///
/// ```
/// use seqid::{Alphabet, radix};
///
/// let alphabet = Alphabet::default();
/// assert_eq!(radix::decode("0Z", &alphabet), Some(35));
/// assert_eq!(radix::decode("10", &alphabet), Some(36));
/// ```
pub fn decode(id: &str, alphabet: &Alphabet) -> Option<u128> {
    let base = alphabet.len() as u128;
    id.chars().try_fold(0_u128, |acc, symbol| {
        let digit = alphabet.digit(symbol)? as u128;
        acc.checked_mul(base)?.checked_add(digit)
    })
}

/// Advances `digits` to their successor in base `base`.
///
/// The rightmost digit is incremented; a digit at `base - 1` wraps to zero and
/// carries into its left neighbour. Returns `false` when the carry runs off
/// the most significant digit, in which case every digit is left at zero.
///
/// # Example
///
/// ```
/// use seqid::radix;
///
/// let mut digits = [1, 2, 2];
/// assert!(radix::increment(&mut digits, 3));
/// assert_eq!(digits, [2, 0, 0]);
///
/// let mut digits = [2, 2];
/// assert!(!radix::increment(&mut digits, 3));
/// ```
#[inline]
pub fn increment(digits: &mut [usize], base: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit + 1 < base {
            *digit += 1;
            return true;
        }
        *digit = 0;
    }
    false
}

/// How many identifiers follow the one spelled by `digits`, or `None` if the
/// count does not fit in a `u128`.
///
/// This is the value of the digit-wise complement `(base - 1 - d)`, so leading
/// max digits add nothing and long identifiers near the end still count.
pub(crate) fn successors(digits: &[usize], base: usize) -> Option<u128> {
    let base = base as u128;
    digits.iter().try_fold(0_u128, |acc, &d| {
        acc.checked_mul(base)?.checked_add(base - 1 - d as u128)
    })
}
