//! Symbol tables for the Buckwalter schemes.
//!
//! # Responsibility
//! - Map letter and mark identities to one-byte ASCII symbols.
//! - Hold the fusion table for carrier + placement-mark pairs.
//! - Build the inverse lookup used by the decoder, once per process.
//!
//! # Invariants
//! - Letter-starting symbols and mark symbols are disjoint within a scheme.
//! - No symbol appears twice within a scheme.
//! - Every symbol is 7-bit ASCII.

use crate::model::letter::{LetterKind, MarkKind, MarkSet};
use log::debug;
use once_cell::sync::Lazy;

const LETTER_COUNT: usize = LetterKind::ALL.len();

/// How a fusion entry treats its carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FusionKind {
    /// Carrier and mark are written with one combined symbol.
    Fused,
    /// Carrier is silent; only the mark's glyph remains.
    Collapsed,
}

/// Replacement of a carrier's symbol when it holds a placement mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusionEntry {
    pub carrier: LetterKind,
    pub mark: MarkKind,
    pub symbol: u8,
    pub kind: FusionKind,
}

const fn fused(carrier: LetterKind, mark: MarkKind, symbol: u8) -> FusionEntry {
    FusionEntry {
        carrier,
        mark,
        symbol,
        kind: FusionKind::Fused,
    }
}

/// Fusion entries shared by both schemes.
pub const FUSIONS: &[FusionEntry] = &[
    fused(LetterKind::Alif, MarkKind::HamzaAbove, b'>'),
    fused(LetterKind::Alif, MarkKind::HamzaBelow, b'<'),
    fused(LetterKind::Alif, MarkKind::HamzatWasl, b'{'),
    FusionEntry {
        carrier: LetterKind::Alif,
        mark: MarkKind::AlifKhanjareeya,
        symbol: b'`',
        kind: FusionKind::Collapsed,
    },
    fused(LetterKind::Waw, MarkKind::HamzaAbove, b'&'),
    fused(LetterKind::Ya, MarkKind::HamzaAbove, b'}'),
];

/// Plain symbol of a standard letter. `None` for recitation-mark kinds.
pub fn base_letter_symbol(kind: LetterKind) -> Option<u8> {
    let symbol = match kind {
        LetterKind::Hamza => b'\'',
        LetterKind::Alif => b'A',
        LetterKind::Ba => b'b',
        LetterKind::TaMarbuta => b'p',
        LetterKind::Ta => b't',
        LetterKind::Tha => b'v',
        LetterKind::Jeem => b'j',
        LetterKind::HHa => b'H',
        LetterKind::Kha => b'x',
        LetterKind::Dal => b'd',
        LetterKind::Thal => b'*',
        LetterKind::Ra => b'r',
        LetterKind::Zain => b'z',
        LetterKind::Seen => b's',
        LetterKind::Sheen => b'$',
        LetterKind::Sad => b'S',
        LetterKind::DDad => b'D',
        LetterKind::TTa => b'T',
        LetterKind::DTha => b'Z',
        LetterKind::Ain => b'E',
        LetterKind::Ghain => b'g',
        LetterKind::Tatweel => b'_',
        LetterKind::Fa => b'f',
        LetterKind::Qaf => b'q',
        LetterKind::Kaf => b'k',
        LetterKind::Lam => b'l',
        LetterKind::Meem => b'm',
        LetterKind::Noon => b'n',
        LetterKind::Ha => b'h',
        LetterKind::Waw => b'w',
        LetterKind::AlifMaksura => b'Y',
        LetterKind::Ya => b'y',
        _ => return None,
    };
    Some(symbol)
}

/// Symbol of a recitation-mark kind. `None` for standard letters.
pub fn recitation_symbol(kind: LetterKind) -> Option<u8> {
    let symbol = match kind {
        LetterKind::SmallHighSeen => b':',
        LetterKind::SmallHighRoundedZero => b'@',
        LetterKind::SmallHighUprightRectangularZero => b'"',
        LetterKind::SmallHighMeemIsolatedForm => b'[',
        LetterKind::SmallLowSeen => b';',
        LetterKind::SmallWaw => b',',
        LetterKind::SmallYa => b'.',
        LetterKind::SmallHighNoon => b'!',
        LetterKind::EmptyCentreLowStop => b'-',
        LetterKind::EmptyCentreHighStop => b'+',
        LetterKind::RoundedHighStopWithFilledCentre => b'%',
        LetterKind::SmallLowMeem => b']',
        _ => return None,
    };
    Some(symbol)
}

/// Symbol a mark takes when it attaches without fusing.
pub fn mark_symbol(mark: MarkKind) -> u8 {
    match mark {
        MarkKind::HamzaAbove => b'#',
        MarkKind::HamzaBelow => b'=',
        MarkKind::HamzatWasl => b'?',
        MarkKind::AlifKhanjareeya => b'/',
        MarkKind::Shadda => b'~',
        MarkKind::Fatha => b'a',
        MarkKind::Damma => b'u',
        MarkKind::Kasra => b'i',
        MarkKind::Fathatan => b'F',
        MarkKind::Dammatan => b'N',
        MarkKind::Kasratan => b'K',
        MarkKind::Sukun => b'o',
        MarkKind::Maddah => b'^',
    }
}

/// Meaning of one encoded byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Starts a new letter, possibly with implied placement marks.
    Letter { kind: LetterKind, implied: MarkSet },
    /// Attaches to the most recent letter.
    Mark(MarkKind),
}

/// Forward and inverse tables of one scheme.
#[derive(Debug)]
pub struct SymbolTable {
    name: &'static str,
    letters: [Option<u8>; LETTER_COUNT],
    fusions: &'static [FusionEntry],
    inverse: [Option<Symbol>; 128],
}

impl SymbolTable {
    fn build(name: &'static str, with_recitation_marks: bool) -> Self {
        let mut letters = [None; LETTER_COUNT];
        for kind in LetterKind::ALL {
            letters[kind as usize] = base_letter_symbol(kind).or_else(|| {
                with_recitation_marks
                    .then(|| recitation_symbol(kind))
                    .flatten()
            });
        }

        let mut inverse = [None; 128];
        for kind in LetterKind::ALL {
            if let Some(symbol) = letters[kind as usize] {
                inverse[symbol as usize] = Some(Symbol::Letter {
                    kind,
                    implied: MarkSet::new(),
                });
            }
        }
        for entry in FUSIONS {
            inverse[entry.symbol as usize] = Some(Symbol::Letter {
                kind: entry.carrier,
                implied: [entry.mark].into_iter().collect(),
            });
        }
        for mark in MarkKind::ALL {
            inverse[mark_symbol(mark) as usize] = Some(Symbol::Mark(mark));
        }

        let symbol_count = inverse.iter().filter(|slot| slot.is_some()).count();
        debug!("event=symbol_table_init module=encoding scheme={name} symbols={symbol_count}");

        Self {
            name,
            letters,
            fusions: FUSIONS,
            inverse,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Plain symbol of `kind`, if this scheme writes it.
    pub fn letter_symbol(&self, kind: LetterKind) -> Option<u8> {
        self.letters[kind as usize]
    }

    /// Fusion entry for `carrier` holding `mark`.
    pub fn fusion(&self, carrier: LetterKind, mark: MarkKind) -> Option<&FusionEntry> {
        self.fusions
            .iter()
            .find(|entry| entry.carrier == carrier && entry.mark == mark)
    }

    pub fn fusions(&self) -> &[FusionEntry] {
        self.fusions
    }

    pub fn mark_symbol(&self, mark: MarkKind) -> u8 {
        mark_symbol(mark)
    }

    /// Classifies one encoded byte. `None` for bytes outside the scheme.
    pub fn lookup(&self, byte: u8) -> Option<Symbol> {
        self.inverse.get(byte as usize).copied().flatten()
    }
}

/// Standard Buckwalter table.
pub static BASE_TABLE: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::build("base", false));

/// Buckwalter table extended with Qur'anic recitation marks.
pub static EXTENDED_TABLE: Lazy<SymbolTable> =
    Lazy::new(|| SymbolTable::build("extended", true));

#[cfg(test)]
mod tests {
    use super::{mark_symbol, Symbol, BASE_TABLE, EXTENDED_TABLE, FUSIONS};
    use crate::model::letter::{LetterKind, MarkKind};
    use std::collections::HashSet;

    fn emitted_symbols(with_recitation: bool) -> Vec<u8> {
        let table = if with_recitation {
            &EXTENDED_TABLE
        } else {
            &BASE_TABLE
        };
        let mut symbols: Vec<u8> = LetterKind::ALL
            .into_iter()
            .filter_map(|kind| table.letter_symbol(kind))
            .collect();
        symbols.extend(FUSIONS.iter().map(|entry| entry.symbol));
        symbols.extend(MarkKind::ALL.into_iter().map(mark_symbol));
        symbols
    }

    #[test]
    fn symbols_are_unique_ascii() {
        for with_recitation in [false, true] {
            let symbols = emitted_symbols(with_recitation);
            let unique: HashSet<u8> = symbols.iter().copied().collect();
            assert_eq!(unique.len(), symbols.len(), "duplicate symbol in table");
            assert!(symbols.iter().all(u8::is_ascii_graphic));
        }
    }

    #[test]
    fn extended_table_is_a_superset_of_base() {
        for byte in 0u8..128 {
            if let Some(symbol) = BASE_TABLE.lookup(byte) {
                assert_eq!(EXTENDED_TABLE.lookup(byte), Some(symbol));
            }
        }
        assert_eq!(BASE_TABLE.lookup(b'@'), None);
        assert!(matches!(
            EXTENDED_TABLE.lookup(b'@'),
            Some(Symbol::Letter {
                kind: LetterKind::SmallHighRoundedZero,
                ..
            })
        ));
    }

    #[test]
    fn fused_symbol_implies_its_mark() {
        match EXTENDED_TABLE.lookup(b'&') {
            Some(Symbol::Letter { kind, implied }) => {
                assert_eq!(kind, LetterKind::Waw);
                assert!(implied.contains(MarkKind::HamzaAbove));
                assert_eq!(implied.len(), 1);
            }
            other => panic!("unexpected lookup result: {other:?}"),
        }
    }

    #[test]
    fn non_ascii_bytes_are_unknown() {
        assert_eq!(BASE_TABLE.lookup(0xD8), None);
        assert_eq!(BASE_TABLE.lookup(b' '), None);
    }
}
