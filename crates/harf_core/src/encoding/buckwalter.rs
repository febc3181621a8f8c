//! Base and extended Buckwalter encodings.
//!
//! Both variants share the canonicalizer and decoder; they differ only in the
//! table they read. The extended table adds the Qur'anic recitation marks.

use crate::encoding::canonical::{canonicalize, SlotOrder};
use crate::encoding::decoder::{decode, DecodeResult};
use crate::encoding::table::{SymbolTable, BASE_TABLE, EXTENDED_TABLE};
use crate::encoding::Encoding;
use crate::model::letter::LetterKind;
use crate::model::text::Text;

fn encode_with(text: &Text, table: &SymbolTable, order: SlotOrder) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for letter in text {
        canonicalize(letter, table, order).write_to(&mut out);
    }
    out
}

/// Standard Buckwalter scheme.
///
/// Recitation-mark kinds have no symbol here. `encode` drops those letters
/// from the output without error, so `decode(encode(text))` is shorter than
/// `text` whenever it holds one. Callers that need a lossless round trip
/// check `supports` first or use `ExtendedEncoding`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseEncoding {
    order: SlotOrder,
}

impl BaseEncoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_order(order: SlotOrder) -> Self {
        Self { order }
    }

    pub fn slot_order(&self) -> SlotOrder {
        self.order
    }

    /// Whether `kind` has a symbol in this scheme.
    ///
    /// Letters of an unsupported kind are silently omitted by `encode`.
    pub fn supports(&self, kind: LetterKind) -> bool {
        BASE_TABLE.letter_symbol(kind).is_some()
    }

    /// Whether every letter of `text` survives `encode` under this scheme.
    pub fn supports_text(&self, text: &Text) -> bool {
        text.iter().all(|letter| self.supports(letter.kind()))
    }
}

impl Encoding for BaseEncoding {
    fn encode(&self, text: &Text) -> String {
        encode_with(text, &BASE_TABLE, self.order)
    }

    fn decode(&self, encoded: &str) -> DecodeResult<Text> {
        decode(encoded, &BASE_TABLE)
    }
}

/// Buckwalter scheme extended with Qur'anic recitation marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedEncoding {
    order: SlotOrder,
}

impl ExtendedEncoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_order(order: SlotOrder) -> Self {
        Self { order }
    }

    pub fn slot_order(&self) -> SlotOrder {
        self.order
    }

    /// Every kind has a symbol in the extended scheme.
    pub fn supports(&self, kind: LetterKind) -> bool {
        EXTENDED_TABLE.letter_symbol(kind).is_some()
    }
}

impl Encoding for ExtendedEncoding {
    fn encode(&self, text: &Text) -> String {
        encode_with(text, &EXTENDED_TABLE, self.order)
    }

    fn decode(&self, encoded: &str) -> DecodeResult<Text> {
        decode(encoded, &EXTENDED_TABLE)
    }
}
