/// The outcome of a single step of an [`IdSequence`].
///
/// [`IdSequence::poll_id`] returns [`Step::Ready`] for every identifier in the
/// sequence and [`Step::Exhausted`] once the maximal identifier has been
/// produced. Exhaustion is permanent.
///
/// # Example
///
/// ```
/// use seqid::{Alphabet, IdSequence, Step};
///
/// let mut ids = IdSequence::after("ZY", Alphabet::default()).unwrap();
/// assert_eq!(ids.poll_id(), Step::Ready { id: "ZZ".to_string() });
/// assert_eq!(ids.poll_id(), Step::Exhausted);
/// ```
///
/// [`IdSequence`]: crate::IdSequence
/// [`IdSequence::poll_id`]: crate::IdSequence::poll_id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// The next identifier.
    Ready {
        /// The identifier, always as long as the starting one.
        id: String,
    },
    /// Every identifier of this length has been produced.
    Exhausted,
}

impl Step {
    /// Converts into an [`Option`], discarding the exhaustion marker.
    #[inline]
    pub fn ready(self) -> Option<String> {
        match self {
            Self::Ready { id } => Some(id),
            Self::Exhausted => None,
        }
    }

    /// Whether this step marks the end of the sequence.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl From<Step> for Option<String> {
    fn from(step: Step) -> Self {
        step.ready()
    }
}
