//! Buckwalter transliteration schemes.
//!
//! # Responsibility
//! - Expose the `Encoding` contract shared by every scheme.
//! - Keep symbol tables, canonical ordering and decoding in one boundary.
//!
//! # Invariants
//! - `decode(encode(text)) == text` for any builder-produced text whose every
//!   kind the scheme can write.
//! - Encoding is total; only decoding can fail.

pub mod buckwalter;
pub mod canonical;
pub mod decoder;
pub mod table;

use crate::model::text::Text;
use decoder::DecodeResult;

pub use buckwalter::{BaseEncoding, ExtendedEncoding};
pub use canonical::SlotOrder;

/// Transliteration scheme contract.
pub trait Encoding {
    /// Writes every letter of `text`, in order, as ASCII symbols.
    ///
    /// Never fails. A letter whose kind the scheme has no symbol for is
    /// omitted, marks and all (recitation marks under `BaseEncoding`).
    fn encode(&self, text: &Text) -> String;

    /// Rebuilds a `Text` from encoded input.
    ///
    /// # Errors
    /// - `DecodeError::MalformedInput` on the first symbol the scheme rejects.
    fn decode(&self, encoded: &str) -> DecodeResult<Text>;
}
