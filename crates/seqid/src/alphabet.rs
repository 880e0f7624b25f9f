use crate::AlphabetError;
use core::{fmt, str::FromStr};

/// The symbols used when no alphabet is supplied: digits, then upper-case
/// ASCII letters.
pub const DEFAULT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const NO_VALUE: usize = usize::MAX;
const ASCII_LEN: usize = 128;

/// An ordered set of distinct symbols that identifiers are spelled with.
///
/// The first symbol is the *zero* symbol and the last is the *max* symbol.
/// Identifiers are big-endian: the leftmost position is the most significant
/// digit, and a symbol's position in the alphabet is its digit value.
///
/// # Example
///
/// ```
/// use seqid::Alphabet;
///
/// let alphabet: Alphabet = "0S".parse().unwrap();
/// assert_eq!(alphabet.zero(), '0');
/// assert_eq!(alphabet.max(), 'S');
/// assert_eq!(alphabet.digit('S'), Some(1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    source: String,
    symbols: Vec<char>,
    /// Digit value of each ASCII symbol, or `NO_VALUE`.
    ascii: [usize; ASCII_LEN],
}

impl Alphabet {
    /// Parses an alphabet from its symbols, in order.
    ///
    /// # Errors
    ///
    /// - [`AlphabetError::Empty`] if `symbols` is empty
    /// - [`AlphabetError::DuplicateSymbol`] on the first repeated symbol
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut alphabet = Self::empty(symbols.len());
        for (index, symbol) in symbols.chars().enumerate() {
            if alphabet.contains(symbol) {
                return Err(AlphabetError::DuplicateSymbol { symbol, index });
            }
            alphabet.push(symbol);
        }
        alphabet.source.push_str(symbols);
        Ok(alphabet)
    }

    fn empty(capacity: usize) -> Self {
        Self {
            source: String::with_capacity(capacity),
            symbols: Vec::with_capacity(capacity),
            ascii: [NO_VALUE; ASCII_LEN],
        }
    }

    fn push(&mut self, symbol: char) {
        if symbol.is_ascii() {
            self.ascii[symbol as usize] = self.symbols.len();
        }
        self.symbols.push(symbol);
    }

    /// Number of symbols, i.e. the radix of the positional numbering.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: an alphabet holds at least one symbol.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol with digit value zero.
    #[inline]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// The symbol with the largest digit value.
    #[inline]
    pub fn max(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    /// The symbol for `digit`, if it is in range.
    #[inline]
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// The digit value of `symbol`, if the alphabet contains it.
    #[inline]
    pub fn digit(&self, symbol: char) -> Option<usize> {
        if symbol.is_ascii() {
            match self.ascii[symbol as usize] {
                NO_VALUE => None,
                digit => Some(digit),
            }
        } else {
            self.symbols.iter().position(|&s| s == symbol)
        }
    }

    /// Whether `symbol` belongs to this alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.digit(symbol).is_some()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbols in order, as the string they were parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders digit values back into symbols.
    ///
    /// Digits are produced by this crate and are always in range.
    pub(crate) fn spell(&self, digits: &[usize]) -> String {
        digits.iter().map(|&d| self.symbols[d]).collect()
    }
}

impl Default for Alphabet {
    /// The 36 symbols of [`DEFAULT_ALPHABET`].
    fn default() -> Self {
        let mut alphabet = Self::empty(DEFAULT_ALPHABET.len());
        DEFAULT_ALPHABET.chars().for_each(|c| alphabet.push(c));
        alphabet.source.push_str(DEFAULT_ALPHABET);
        alphabet
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.source).finish()
    }
}
