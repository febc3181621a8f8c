//! Immutable letter sequences.
//!
//! # Invariants
//! - Letter order is reading order and never changes after construction.
//! - Cloning a `Text` shares storage; no API mutates it in place.

use crate::encoding::decoder::DecodeResult;
use crate::encoding::{Encoding, ExtendedEncoding};
use crate::model::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::sync::Arc;

/// Ordered, immutable sequence of letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Letter>", into = "Vec<Letter>")]
pub struct Text {
    letters: Arc<[Letter]>,
}

impl Text {
    /// Empty text.
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Letter> {
        self.letters.get(index)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// Copies `range` into a new text. Returns `None` when out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Option<Text> {
        self.letters.get(range).map(|letters| Self::from(letters.to_vec()))
    }

    /// Same letters with every mark stripped.
    pub fn without_marks(&self) -> Text {
        self.iter().map(Letter::without_marks).collect()
    }

    /// Encodes with the extended Buckwalter scheme.
    pub fn to_buckwalter(&self) -> String {
        ExtendedEncoding::default().encode(self)
    }

    /// Decodes extended Buckwalter input.
    pub fn from_buckwalter(encoded: &str) -> DecodeResult<Text> {
        ExtendedEncoding::default().decode(encoded)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Letter>> for Text {
    fn from(value: Vec<Letter>) -> Self {
        Self {
            letters: value.into(),
        }
    }
}

impl From<Text> for Vec<Letter> {
    fn from(value: Text) -> Self {
        value.letters.to_vec()
    }
}

impl FromIterator<Letter> for Text {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_buckwalter())
    }
}
