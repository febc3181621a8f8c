//! Single-pass Buckwalter decoder.
//!
//! # Responsibility
//! - Rebuild a `Text` from encoded input using a scheme's inverse table.
//!
//! # Invariants
//! - One byte is one symbol; no lookahead.
//! - The first offending byte aborts decoding; no partial text is returned.

use crate::encoding::table::{Symbol, SymbolTable};
use crate::model::letter::{Letter, MarkKind};
use crate::model::text::Text;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_LOGGED_INPUT_CHARS: usize = 32;

/// Result type for decoding APIs.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Why an input symbol was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The byte is not a letter or mark symbol of the scheme.
    UnknownSymbol,
    /// A mark symbol appeared before any letter symbol.
    MarkWithoutLetter,
    /// The current letter already holds a mark of this mark's group.
    DuplicateMark(MarkKind),
    /// The current letter is a recitation mark, which carries no marks.
    MarkOnRecitationMark(MarkKind),
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol => f.write_str("unknown symbol"),
            Self::MarkWithoutLetter => f.write_str("mark symbol with no preceding letter"),
            Self::DuplicateMark(mark) => write!(
                f,
                "letter already holds a {} mark, cannot add {mark:?}",
                mark.group()
            ),
            Self::MarkOnRecitationMark(mark) => {
                write!(f, "recitation mark cannot carry {mark:?}")
            }
        }
    }
}

/// Decode-time error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MalformedInput {
        /// Byte offset of the offending symbol.
        offset: usize,
        symbol: char,
        reason: MalformedReason,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput {
                offset,
                symbol,
                reason,
            } => write!(
                f,
                "malformed input at byte {offset} ({symbol:?}): {reason}"
            ),
        }
    }
}

impl Error for DecodeError {}

/// Decodes `input` with `table`.
///
/// # Errors
/// - `MalformedInput` for a byte outside the scheme, a leading mark symbol, a
///   mark following a recitation-mark letter, or a mark whose group is
///   already occupied on the current letter.
pub fn decode(input: &str, table: &SymbolTable) -> DecodeResult<Text> {
    let mut letters: Vec<Letter> = Vec::with_capacity(input.len());

    for (offset, symbol) in input.char_indices() {
        let reject = |reason: MalformedReason| {
            debug!(
                "event=decode_rejected module=encoding scheme={} offset={} reason={:?} input_prefix={}",
                table.name(),
                offset,
                reason,
                input_prefix(input)
            );
            DecodeError::MalformedInput {
                offset,
                symbol,
                reason,
            }
        };

        let classified = u8::try_from(symbol)
            .ok()
            .and_then(|byte| table.lookup(byte));

        match classified {
            Some(Symbol::Letter { kind, implied }) => {
                letters.push(Letter::with_marks(kind, implied));
            }
            Some(Symbol::Mark(mark)) => {
                let current = letters
                    .last_mut()
                    .ok_or_else(|| reject(MalformedReason::MarkWithoutLetter))?;
                if current.kind().is_recitation_mark() {
                    return Err(reject(MalformedReason::MarkOnRecitationMark(mark)));
                }
                if !current.try_attach(mark) {
                    return Err(reject(MalformedReason::DuplicateMark(mark)));
                }
            }
            None => return Err(reject(MalformedReason::UnknownSymbol)),
        }
    }

    Ok(Text::from(letters))
}

fn input_prefix(input: &str) -> String {
    let prefix: String = input
        .chars()
        .take(MAX_LOGGED_INPUT_CHARS)
        .map(|c| if c.is_ascii_graphic() { c } else { '?' })
        .collect();
    if input.chars().count() > MAX_LOGGED_INPUT_CHARS {
        format!("{prefix}...")
    } else {
        prefix
    }
}
