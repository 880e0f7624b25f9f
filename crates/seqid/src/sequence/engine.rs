use crate::{Alphabet, Error, Result, Start, Step, radix, sequence::DEFAULT_LENGTH};
use core::iter::FusedIterator;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing produced yet. An inclusive start yields the cursor as is, an
    /// exclusive one advances first.
    Created { inclusive: bool },
    Running,
    Exhausted,
}

/// A lazy, forward-only sequence of fixed-length identifiers.
///
/// The cursor is a vector of digit values that is advanced like an odometer:
/// the rightmost symbol is bumped and wraps into a carry when it reaches the
/// alphabet's max symbol. The sequence ends after the identifier made only of
/// max symbols.
///
/// ## Features
/// - ✅ Gapless, strictly increasing in positional order
/// - ✅ Resumable from any identifier of the same alphabet
/// - ✅ Lengths far beyond what an integer cursor can address
/// - ❌ Not shareable: stepping requires `&mut self`
///
/// # Example
///
/// ```
/// use seqid::{Alphabet, IdSequence};
///
/// let alphabet: Alphabet = "0S".parse().unwrap();
/// let ids: Vec<String> = IdSequence::with_length(2, alphabet).unwrap().collect();
/// assert_eq!(ids, ["00", "0S", "S0", "SS"]);
/// ```
#[derive(Debug)]
pub struct IdSequence {
    alphabet: Alphabet,
    digits: Vec<usize>,
    state: State,
}

impl IdSequence {
    /// Validates `start` against `alphabet` and creates a sequence.
    ///
    /// An integer start `N` begins at the zero symbol repeated `N` times and
    /// includes it. A string start begins at its successor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if the length is zero or the string is empty
    /// - [`Error::UnknownSymbol`] if the string holds a symbol outside
    ///   `alphabet`
    ///
    /// Either error is also logged at `ERROR` level before it is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use seqid::{Alphabet, Error, IdSequence};
    ///
    /// let alphabet: Alphabet = "AsDFG1234".parse().unwrap();
    /// let err = IdSequence::new("ASD", alphabet).unwrap_err();
    /// assert!(matches!(err, Error::UnknownSymbol { symbol: 'S', index: 1 }));
    /// ```
    pub fn new(start: impl Into<Start>, alphabet: Alphabet) -> Result<Self> {
        let (digits, inclusive) = match start.into() {
            Start::Length(0) => return Err(report(Error::InvalidLength)),
            Start::After(id) if id.is_empty() => return Err(report(Error::InvalidLength)),
            Start::Length(length) => (vec![0; length], true),
            Start::After(id) => {
                let digits = id
                    .chars()
                    .enumerate()
                    .map(|(index, symbol)| {
                        alphabet
                            .digit(symbol)
                            .ok_or(Error::UnknownSymbol { symbol, index })
                    })
                    .collect::<Result<Vec<_>>>()
                    .map_err(report)?;
                (digits, false)
            }
        };

        tracing::trace!(length = digits.len(), inclusive, %alphabet, "created id sequence");
        Ok(Self {
            alphabet,
            digits,
            state: State::Created { inclusive },
        })
    }

    /// Creates a sequence starting at the all-zero identifier of `length`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] if `length` is zero.
    pub fn with_length(length: usize, alphabet: Alphabet) -> Result<Self> {
        Self::new(Start::Length(length), alphabet)
    }

    /// Creates a sequence resuming after `id`.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn after(id: impl Into<String>, alphabet: Alphabet) -> Result<Self> {
        Self::new(Start::After(id.into()), alphabet)
    }

    /// Advances the sequence by one identifier.
    ///
    /// Returns [`Step::Ready`] with the next identifier, or
    /// [`Step::Exhausted`] once the all-max identifier has been produced. After
    /// the first [`Step::Exhausted`] every call returns it again.
    ///
    /// # Example
    ///
    /// ```
    /// use seqid::{IdSequence, Step};
    ///
    /// let mut ids = IdSequence::default();
    /// assert_eq!(ids.poll_id(), Step::Ready { id: "00000".into() });
    /// assert_eq!(ids.poll_id(), Step::Ready { id: "00001".into() });
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn poll_id(&mut self) -> Step {
        let advanced = match self.state {
            State::Created { inclusive: true } => true,
            State::Created { inclusive: false } | State::Running => {
                radix::increment(&mut self.digits, self.alphabet.len())
            }
            State::Exhausted => return Step::Exhausted,
        };

        if advanced {
            self.state = State::Running;
            Step::Ready {
                id: self.alphabet.spell(&self.digits),
            }
        } else {
            self.state = State::Exhausted;
            tracing::trace!(length = self.digits.len(), "id sequence exhausted");
            Step::Exhausted
        }
    }

    /// Length of every identifier in this sequence.
    pub fn id_len(&self) -> usize {
        self.digits.len()
    }

    /// The alphabet identifiers are spelled with.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether the sequence has ended.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// How many identifiers are still to be produced, or `None` if the count
    /// does not fit in a `u128`.
    ///
    /// # Example
    ///
    /// ```
    /// use seqid::{Alphabet, IdSequence};
    ///
    /// let ids = IdSequence::after("00", "0S".parse::<Alphabet>().unwrap()).unwrap();
    /// assert_eq!(ids.remaining(), Some(3));
    /// ```
    pub fn remaining(&self) -> Option<u128> {
        let base = self.alphabet.len();
        match self.state {
            State::Exhausted => Some(0),
            State::Created { inclusive: true } => {
                radix::successors(&self.digits, base)?.checked_add(1)
            }
            State::Created { inclusive: false } | State::Running => {
                radix::successors(&self.digits, base)
            }
        }
    }
}

impl Default for IdSequence {
    /// Identifiers of [`DEFAULT_LENGTH`] symbols over the default alphabet,
    /// starting at `"00000"`.
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            digits: vec![0; DEFAULT_LENGTH],
            state: State::Created { inclusive: true },
        }
    }
}

impl Iterator for IdSequence {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.poll_id().ready()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for IdSequence {}

/// Creates an [`IdSequence`] over a copy of `alphabet`.
///
/// `start` is either a length (`usize`) or an identifier to resume after
/// (`&str` or `String`).
///
/// # Errors
///
/// See [`IdSequence::new`].
///
/// # Example
///
/// ```
/// use seqid::{Alphabet, id_sequence};
///
/// let alphabet: Alphabet = "0S".parse().unwrap();
/// let ids: Vec<String> = id_sequence("00", &alphabet).unwrap().collect();
/// assert_eq!(ids, ["0S", "S0", "SS"]);
/// ```
pub fn id_sequence(start: impl Into<Start>, alphabet: &Alphabet) -> Result<IdSequence> {
    IdSequence::new(start, alphabet.clone())
}

#[cold]
fn report(err: Error) -> Error {
    match &err {
        Error::UnknownSymbol { symbol, index } => {
            tracing::error!(%symbol, index, "{err}");
        }
        _ => tracing::error!("{err}"),
    }
    err
}
