//! Incremental text construction.
//!
//! # Responsibility
//! - Accumulate letters from external parsers in reading order.
//! - Validate mark combinations at the point each letter is added.
//!
//! # Invariants
//! - A rejected `add` leaves previously added letters untouched.
//! - Snapshots returned by `to_text` never observe later appends.

use crate::model::letter::{Letter, LetterKind, MarkKind};
use crate::model::text::Text;

pub use crate::model::letter::{BuildError, BuildResult};

/// Mutable accumulator producing immutable `Text` snapshots.
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    letters: Vec<Letter>,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
        }
    }

    /// Appends `kind` carrying `marks`.
    ///
    /// # Errors
    /// - `InvalidMarkCombination` when two marks share an exclusive group.
    /// - `MarkOnRecitationMark` when `kind` is a recitation mark carrying marks.
    pub fn add(&mut self, kind: LetterKind, marks: &[MarkKind]) -> BuildResult<&mut Self> {
        let letter = Letter::new(kind, marks)?;
        self.letters.push(letter);
        Ok(self)
    }

    /// Appends an already validated letter.
    pub fn push(&mut self, letter: Letter) -> &mut Self {
        self.letters.push(letter);
        self
    }

    /// Appends every letter of `text` in order.
    pub fn extend_from_text(&mut self, text: &Text) -> &mut Self {
        self.letters.extend_from_slice(text.letters());
        self
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Copies the accumulated letters into an immutable snapshot.
    pub fn to_text(&self) -> Text {
        Text::from(self.letters.clone())
    }

    /// Consumes the builder without copying.
    pub fn into_text(self) -> Text {
        Text::from(self.letters)
    }
}
