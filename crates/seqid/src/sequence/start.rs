use core::fmt;

/// Identifier length used when no start is given.
pub const DEFAULT_LENGTH: usize = 5;

/// Where a sequence begins.
///
/// Most callers never name this type: anything convertible into it (an
/// integer length or a string identifier) is accepted by the factory.
///
/// ```
/// use seqid::Start;
///
/// assert_eq!(Start::from(2_usize), Start::Length(2));
/// assert_eq!(Start::from("0S"), Start::After("0S".to_string()));
/// assert_eq!(Start::default(), Start::Length(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Start {
    /// Begin at the all-zero identifier of this length, inclusive.
    Length(usize),
    /// Begin at the successor of this identifier; it is not produced itself.
    After(String),
}

impl Default for Start {
    fn default() -> Self {
        Self::Length(DEFAULT_LENGTH)
    }
}

impl From<usize> for Start {
    fn from(length: usize) -> Self {
        Self::Length(length)
    }
}

impl From<&str> for Start {
    fn from(id: &str) -> Self {
        Self::After(id.to_owned())
    }
}

impl From<String> for Start {
    fn from(id: String) -> Self {
        Self::After(id)
    }
}

impl From<&String> for Start {
    fn from(id: &String) -> Self {
        Self::After(id.clone())
    }
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "of length {length}"),
            Self::After(id) => write!(f, "after {id:?}"),
        }
    }
}
