//! # seqid
//!
//! Lazy, gapless sequences of fixed-length identifiers over an ordered
//! alphabet.
//!
//! Identifiers are big-endian numbers written in the alphabet's symbols: the
//! first symbol is zero, the last is the maximum digit. A sequence walks every
//! identifier of one length in ascending order, starting either at the all-zero
//! identifier or right after an identifier you supply, and ends after the
//! identifier made only of the max symbol.
//!
//! ```
//! use seqid::{Alphabet, id_sequence};
//!
//! let alphabet: Alphabet = "0S".parse().unwrap();
//!
//! // From a length: the first identifier is included.
//! let ids: Vec<String> = id_sequence(2_usize, &alphabet).unwrap().collect();
//! assert_eq!(ids, ["00", "0S", "S0", "SS"]);
//!
//! // From an identifier: resume after it.
//! let ids: Vec<String> = id_sequence("0S", &alphabet).unwrap().collect();
//! assert_eq!(ids, ["S0", "SS"]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Alphabet`] and [`Start`].

mod alphabet;
mod error;
pub mod radix;
mod sequence;
#[cfg(feature = "serde")]
mod serde;
mod status;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::sequence::*;
pub use crate::status::*;
