/// A result type defaulting to this crate's construction [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing an [`IdSequence`].
///
/// Both variants are produced only by the factory. Once a sequence exists,
/// stepping it never fails.
///
/// The `Display` text of each variant is fixed and part of the public
/// contract; callers matching on messages can rely on it.
///
/// [`IdSequence`]: crate::IdSequence
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested length was zero, or the starting identifier was empty.
    #[error("initialOrLength must be bigger than 0 and can't be an empty string")]
    InvalidLength,

    /// The starting identifier holds a symbol the alphabet does not contain.
    #[error("initialOrLength contains an ID with characters that couldn't be found in the sequence")]
    UnknownSymbol {
        /// The first offending symbol.
        symbol: char,
        /// Its character position within the starting identifier.
        index: usize,
    },
}

/// Errors raised while parsing an [`Alphabet`].
///
/// [`Alphabet`]: crate::Alphabet
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum AlphabetError {
    /// No symbols were supplied.
    #[error("alphabet must contain at least one symbol")]
    Empty,

    /// A symbol occurs more than once.
    #[error("alphabet repeats symbol {symbol:?} at position {index}")]
    DuplicateSymbol { symbol: char, index: usize },
}
