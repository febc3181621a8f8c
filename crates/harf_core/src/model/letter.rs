//! Letter and mark identities.
//!
//! # Responsibility
//! - Define the closed set of base letters and attachable marks.
//! - Hold one `Letter` value: a kind plus the set of marks attached to it.
//! - Report construction errors shared by the builder and deserialization.
//!
//! # Invariants
//! - A `Letter` carries at most one mark from each `MarkGroup`.
//! - A recitation-mark `Letter` carries no marks at all.
//! - Whether a placement mark fuses with its carrier is decided by the
//!   encoding tables, not by this type.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for letter construction.
pub type BuildResult<T> = Result<T, BuildError>;

/// Letter validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Two distinct marks from one exclusive group were supplied together.
    InvalidMarkCombination {
        group: MarkGroup,
        first: MarkKind,
        second: MarkKind,
    },
    /// A mark was supplied for a recitation-mark kind, which takes none.
    MarkOnRecitationMark { kind: LetterKind, mark: MarkKind },
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMarkCombination {
                group,
                first,
                second,
            } => write!(
                f,
                "invalid mark combination: {first:?} and {second:?} are both {group} marks"
            ),
            Self::MarkOnRecitationMark { kind, mark } => {
                write!(f, "recitation mark {kind:?} cannot carry {mark:?}")
            }
        }
    }
}

impl Error for BuildError {}

/// Base letter identity.
///
/// The trailing recitation-mark kinds only exist in the extended scheme; they
/// never carry marks of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterKind {
    /// Standalone hamza.
    Hamza,
    /// Long-vowel carrier alif.
    Alif,
    /// Ba.
    Ba,
    /// Closed ta, word-final feminine marker.
    TaMarbuta,
    /// Ta.
    Ta,
    /// Tha.
    Tha,
    /// Jeem.
    Jeem,
    /// Pharyngeal ha.
    HHa,
    /// Kha.
    Kha,
    /// Dal.
    Dal,
    /// Thal.
    Thal,
    /// Ra.
    Ra,
    /// Zain.
    Zain,
    /// Seen.
    Seen,
    /// Sheen.
    Sheen,
    /// Emphatic sad.
    Sad,
    /// Emphatic dad.
    DDad,
    /// Emphatic ta.
    TTa,
    /// Emphatic tha.
    DTha,
    /// Ain.
    Ain,
    /// Ghain.
    Ghain,
    /// Elongation stroke between joined letters.
    Tatweel,
    /// Fa.
    Fa,
    /// Qaf.
    Qaf,
    /// Kaf.
    Kaf,
    /// Lam.
    Lam,
    /// Meem.
    Meem,
    /// Noon.
    Noon,
    /// Glottal ha.
    Ha,
    /// Waw, also a long-vowel carrier.
    Waw,
    /// Final-form alif written with the shape of ya.
    AlifMaksura,
    /// Ya, also a long-vowel carrier.
    Ya,
    /// Small high seen recitation mark.
    SmallHighSeen,
    /// Small high rounded zero: letter is not pronounced.
    SmallHighRoundedZero,
    /// Small high upright rectangular zero.
    SmallHighUprightRectangularZero,
    /// Small high meem: iqlab of noon into meem.
    SmallHighMeemIsolatedForm,
    /// Small low seen recitation mark.
    SmallLowSeen,
    /// Small waw written after a pronoun.
    SmallWaw,
    /// Small ya written after a pronoun.
    SmallYa,
    /// Small high noon.
    SmallHighNoon,
    /// Empty centre low stop.
    EmptyCentreLowStop,
    /// Empty centre high stop.
    EmptyCentreHighStop,
    /// Rounded high stop with filled centre.
    RoundedHighStopWithFilledCentre,
    /// Small low meem.
    SmallLowMeem,
}

impl LetterKind {
    /// Every kind, in declaration order.
    pub const ALL: [LetterKind; 44] = [
        Self::Hamza,
        Self::Alif,
        Self::Ba,
        Self::TaMarbuta,
        Self::Ta,
        Self::Tha,
        Self::Jeem,
        Self::HHa,
        Self::Kha,
        Self::Dal,
        Self::Thal,
        Self::Ra,
        Self::Zain,
        Self::Seen,
        Self::Sheen,
        Self::Sad,
        Self::DDad,
        Self::TTa,
        Self::DTha,
        Self::Ain,
        Self::Ghain,
        Self::Tatweel,
        Self::Fa,
        Self::Qaf,
        Self::Kaf,
        Self::Lam,
        Self::Meem,
        Self::Noon,
        Self::Ha,
        Self::Waw,
        Self::AlifMaksura,
        Self::Ya,
        Self::SmallHighSeen,
        Self::SmallHighRoundedZero,
        Self::SmallHighUprightRectangularZero,
        Self::SmallHighMeemIsolatedForm,
        Self::SmallLowSeen,
        Self::SmallWaw,
        Self::SmallYa,
        Self::SmallHighNoon,
        Self::EmptyCentreLowStop,
        Self::EmptyCentreHighStop,
        Self::RoundedHighStopWithFilledCentre,
        Self::SmallLowMeem,
    ];

    /// Whether this kind is a standalone Qur'anic recitation mark.
    pub fn is_recitation_mark(self) -> bool {
        self >= Self::SmallHighSeen
    }
}

/// Mutually exclusive mark groups. A letter holds at most one mark per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkGroup {
    /// Marks that change how the carrier itself is written.
    Placement,
    Gemination,
    /// Short vowels, nunation and vowel absence.
    Vowel,
    Lengthening,
}

impl Display for MarkGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Placement => "placement",
            Self::Gemination => "gemination",
            Self::Vowel => "vowel",
            Self::Lengthening => "lengthening",
        };
        f.write_str(name)
    }
}

/// Diacritical or recitation mark attached to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    /// Hamza written above the carrier.
    HamzaAbove,
    /// Hamza written below the carrier.
    HamzaBelow,
    /// Elidable hamza (wasla).
    HamzatWasl,
    /// Dagger alif.
    AlifKhanjareeya,
    /// Gemination.
    Shadda,
    /// Short a.
    Fatha,
    /// Short u.
    Damma,
    /// Short i.
    Kasra,
    /// Nunated short a.
    Fathatan,
    /// Nunated short u.
    Dammatan,
    /// Nunated short i.
    Kasratan,
    /// Vowel absence.
    Sukun,
    /// Long-vowel lengthening.
    Maddah,
}

impl MarkKind {
    /// Every mark, in declaration order.
    pub const ALL: [MarkKind; 13] = [
        Self::HamzaAbove,
        Self::HamzaBelow,
        Self::HamzatWasl,
        Self::AlifKhanjareeya,
        Self::Shadda,
        Self::Fatha,
        Self::Damma,
        Self::Kasra,
        Self::Fathatan,
        Self::Dammatan,
        Self::Kasratan,
        Self::Sukun,
        Self::Maddah,
    ];

    /// Exclusive group this mark belongs to.
    pub fn group(self) -> MarkGroup {
        match self {
            Self::HamzaAbove | Self::HamzaBelow | Self::HamzatWasl | Self::AlifKhanjareeya => {
                MarkGroup::Placement
            }
            Self::Shadda => MarkGroup::Gemination,
            Self::Fatha
            | Self::Damma
            | Self::Kasra
            | Self::Fathatan
            | Self::Dammatan
            | Self::Kasratan
            | Self::Sukun => MarkGroup::Vowel,
            Self::Maddah => MarkGroup::Lengthening,
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of marks attached to one letter.
///
/// Iteration always follows declaration order of `MarkKind`, whatever order
/// marks were inserted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkSet {
    bits: u16,
}

impl MarkSet {
    /// Empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Inserts `mark`, returning `false` if it was already present.
    pub fn insert(&mut self, mark: MarkKind) -> bool {
        let present = self.contains(mark);
        self.bits |= mark.bit();
        !present
    }

    pub fn remove(&mut self, mark: MarkKind) {
        self.bits &= !mark.bit();
    }

    pub fn contains(&self, mark: MarkKind) -> bool {
        self.bits & mark.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns the first mark present from `group`.
    ///
    /// For a set that respects the one-per-group invariant this is the only
    /// mark of that group.
    pub fn in_group(&self, group: MarkGroup) -> Option<MarkKind> {
        self.iter().find(|mark| mark.group() == group)
    }

    pub fn iter(&self) -> impl Iterator<Item = MarkKind> + '_ {
        MarkKind::ALL
            .into_iter()
            .filter(move |mark| self.contains(*mark))
    }

    /// Builds a set, rejecting two distinct marks from one group.
    pub fn try_from_marks(marks: &[MarkKind]) -> BuildResult<Self> {
        let mut set = Self::new();
        for &mark in marks {
            if let Some(existing) = set.in_group(mark.group()) {
                if existing != mark {
                    return Err(BuildError::InvalidMarkCombination {
                        group: mark.group(),
                        first: existing,
                        second: mark,
                    });
                }
            }
            set.insert(mark);
        }
        Ok(set)
    }
}

impl FromIterator<MarkKind> for MarkSet {
    /// Collects marks without validating group exclusivity.
    fn from_iter<I: IntoIterator<Item = MarkKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for mark in iter {
            set.insert(mark);
        }
        set
    }
}

/// One base letter with its attached marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LetterRecord", into = "LetterRecord")]
pub struct Letter {
    kind: LetterKind,
    marks: MarkSet,
}

impl Letter {
    /// A letter with no marks.
    pub fn plain(kind: LetterKind) -> Self {
        Self {
            kind,
            marks: MarkSet::new(),
        }
    }

    /// Creates a letter, enforcing at most one mark per group.
    ///
    /// Repeating the same mark is harmless; the marks form a set.
    ///
    /// # Errors
    /// - `InvalidMarkCombination` when two marks share an exclusive group.
    /// - `MarkOnRecitationMark` when `kind` is a recitation mark and any mark
    ///   is supplied.
    pub fn new(kind: LetterKind, marks: &[MarkKind]) -> BuildResult<Self> {
        if let (true, Some(&mark)) = (kind.is_recitation_mark(), marks.first()) {
            return Err(BuildError::MarkOnRecitationMark { kind, mark });
        }
        Ok(Self {
            kind,
            marks: MarkSet::try_from_marks(marks)?,
        })
    }

    /// Letter with an already validated mark set.
    pub(crate) fn with_marks(kind: LetterKind, marks: MarkSet) -> Self {
        Self { kind, marks }
    }

    pub fn kind(&self) -> LetterKind {
        self.kind
    }

    pub fn marks(&self) -> MarkSet {
        self.marks
    }

    pub fn has_mark(&self, mark: MarkKind) -> bool {
        self.marks.contains(mark)
    }

    /// Mark of `group`, if one is attached.
    pub fn mark_in(&self, group: MarkGroup) -> Option<MarkKind> {
        self.marks.in_group(group)
    }

    /// Same letter with every mark removed.
    pub fn without_marks(&self) -> Self {
        Self::plain(self.kind)
    }

    /// Attaches `mark` unless its group is already occupied.
    ///
    /// Returns `false` and leaves the letter untouched when the group already
    /// holds any mark, including `mark` itself, or when the letter is a
    /// recitation mark.
    pub(crate) fn try_attach(&mut self, mark: MarkKind) -> bool {
        if self.kind.is_recitation_mark() || self.marks.in_group(mark.group()).is_some() {
            return false;
        }
        self.marks.insert(mark)
    }
}

/// Serialized shape of `Letter`.
#[derive(Serialize, Deserialize)]
struct LetterRecord {
    kind: LetterKind,
    #[serde(default)]
    marks: Vec<MarkKind>,
}

impl TryFrom<LetterRecord> for Letter {
    type Error = BuildError;

    fn try_from(value: LetterRecord) -> Result<Self, Self::Error> {
        Letter::new(value.kind, &value.marks)
    }
}

impl From<Letter> for LetterRecord {
    fn from(value: Letter) -> Self {
        Self {
            kind: value.kind,
            marks: value.marks.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, Letter, LetterKind, MarkGroup, MarkKind, MarkSet};

    #[test]
    fn mark_set_iterates_in_declaration_order() {
        let set: MarkSet = [MarkKind::Maddah, MarkKind::Fatha, MarkKind::HamzaAbove]
            .into_iter()
            .collect();
        let marks: Vec<MarkKind> = set.iter().collect();
        assert_eq!(
            marks,
            vec![MarkKind::HamzaAbove, MarkKind::Fatha, MarkKind::Maddah]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn mark_set_insert_reports_duplicates() {
        let mut set = MarkSet::new();
        assert!(set.insert(MarkKind::Sukun));
        assert!(!set.insert(MarkKind::Sukun));
        set.remove(MarkKind::Sukun);
        assert!(set.is_empty());
    }

    #[test]
    fn every_group_is_populated() {
        for group in [
            MarkGroup::Placement,
            MarkGroup::Gemination,
            MarkGroup::Vowel,
            MarkGroup::Lengthening,
        ] {
            assert!(MarkKind::ALL.iter().any(|mark| mark.group() == group));
        }
    }

    #[test]
    fn letter_rejects_two_vowels() {
        let err = Letter::new(LetterKind::Ba, &[MarkKind::Fatha, MarkKind::Kasratan])
            .expect_err("two vowel-group marks must be rejected");
        assert_eq!(
            err,
            BuildError::InvalidMarkCombination {
                group: MarkGroup::Vowel,
                first: MarkKind::Fatha,
                second: MarkKind::Kasratan,
            }
        );
    }

    #[test]
    fn letter_accepts_repeated_mark() {
        let letter = Letter::new(LetterKind::Ba, &[MarkKind::Shadda, MarkKind::Shadda])
            .expect("repeated mark is a set insert");
        assert_eq!(letter.marks().len(), 1);
    }

    #[test]
    fn recitation_kinds_are_the_tail_of_the_enum() {
        let recitation: Vec<LetterKind> = LetterKind::ALL
            .into_iter()
            .filter(|kind| kind.is_recitation_mark())
            .collect();
        assert_eq!(recitation.len(), 12);
        assert!(!LetterKind::Ya.is_recitation_mark());
        assert!(LetterKind::SmallHighSeen.is_recitation_mark());
    }

    #[test]
    fn recitation_kinds_reject_every_mark() {
        for kind in LetterKind::ALL.into_iter().filter(|k| k.is_recitation_mark()) {
            assert!(Letter::new(kind, &[]).is_ok());
            for mark in MarkKind::ALL {
                let err = Letter::new(kind, &[mark]).expect_err("recitation marks take no marks");
                assert_eq!(err, BuildError::MarkOnRecitationMark { kind, mark });
            }
        }
    }

    #[test]
    fn try_attach_refuses_recitation_letter() {
        let mut letter = Letter::plain(LetterKind::SmallLowMeem);
        assert!(!letter.try_attach(MarkKind::Fatha));
        assert!(letter.marks().is_empty());
    }

    #[test]
    fn try_attach_refuses_occupied_group() {
        let mut letter = Letter::plain(LetterKind::Lam);
        assert!(letter.try_attach(MarkKind::Fatha));
        assert!(!letter.try_attach(MarkKind::Damma));
        assert!(!letter.try_attach(MarkKind::Fatha));
        assert_eq!(letter.mark_in(MarkGroup::Vowel), Some(MarkKind::Fatha));
    }
}
