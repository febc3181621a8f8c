//! Canonical symbol order for one letter.
//!
//! # Responsibility
//! - Turn a `Letter` into at most five output symbols, one per slot.
//!
//! # Invariants
//! - Output depends only on the letter's kind and mark set.
//! - Slot order is carrier, placement, gemination, then vowel and lengthening
//!   in the order chosen by `SlotOrder`.
//! - A fusion entry always wins over carrier + standalone placement symbol.

use crate::encoding::table::SymbolTable;
use crate::model::letter::{Letter, MarkGroup};

/// Number of output slots per letter.
pub const SLOT_COUNT: usize = 5;

/// Relative order of the vowel and lengthening slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotOrder {
    /// Vowel mark before lengthening mark.
    #[default]
    VowelThenLengthening,
    LengtheningThenVowel,
}

/// Symbols emitted for one letter, in slot order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolSlots {
    slots: [Option<u8>; SLOT_COUNT],
}

impl SymbolSlots {
    /// Number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbol emitted by the carrier slot, if any.
    pub fn carrier(&self) -> Option<u8> {
        self.slots[0]
    }

    /// Emitted symbols, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Appends the emitted symbols to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.extend(self.iter().map(char::from));
    }
}

/// Maps `letter` to its slot symbols under `table`.
///
/// Kinds the table does not write (recitation marks in the base scheme) emit
/// nothing. Recitation kinds never carry marks, so the extended scheme always
/// writes them as exactly one symbol.
pub fn canonicalize(letter: &Letter, table: &SymbolTable, order: SlotOrder) -> SymbolSlots {
    let Some(plain) = table.letter_symbol(letter.kind()) else {
        return SymbolSlots::default();
    };
    let placement = letter.mark_in(MarkGroup::Placement);
    let fusion = placement.and_then(|mark| table.fusion(letter.kind(), mark));

    let carrier = match fusion {
        Some(entry) => entry.symbol,
        None => plain,
    };
    let standalone = match fusion {
        Some(_) => None,
        None => placement.map(|mark| table.mark_symbol(mark)),
    };
    let gemination = letter
        .mark_in(MarkGroup::Gemination)
        .map(|mark| table.mark_symbol(mark));
    let vowel = letter
        .mark_in(MarkGroup::Vowel)
        .map(|mark| table.mark_symbol(mark));
    let lengthening = letter
        .mark_in(MarkGroup::Lengthening)
        .map(|mark| table.mark_symbol(mark));

    let (fourth, fifth) = match order {
        SlotOrder::VowelThenLengthening => (vowel, lengthening),
        SlotOrder::LengtheningThenVowel => (lengthening, vowel),
    };

    SymbolSlots {
        slots: [Some(carrier), standalone, gemination, fourth, fifth],
    }
}
