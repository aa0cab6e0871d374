//! Vowel nucleus analysis
//!
//! Starting on a vowel, consumes the maximal run of vowels together with any
//! h sitting between two vowels and a y that closes the run. The result tells
//! the boundary resolver where the nucleus ends and, for a hiatus, where the
//! cut belongs.

use crate::classifier::{is_strong_vowel, is_vowel, is_weak_accented_vowel};
use crate::exceptions::{ExceptionLog, ExceptionTag};
use crate::word::Word;
use smallvec::SmallVec;

/// Role of a consumed letter inside a nucleus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTag {
    /// a, e, o
    Strong,
    /// í, ú
    WeakAccented,
    /// i, u, ü
    WeakPlain,
    /// h between two vowels; never a vowel itself
    IntercalatedH,
    /// y closing the nucleus; behaves as a plain weak vowel
    TrailingY,
}

impl TokenTag {
    fn of_vowel(ch: char) -> Self {
        if is_strong_vowel(ch) {
            TokenTag::Strong
        } else if is_weak_accented_vowel(ch) {
            TokenTag::WeakAccented
        } else {
            TokenTag::WeakPlain
        }
    }

    /// Counts towards the vowel sequence
    #[inline]
    pub fn is_vowel_slot(&self) -> bool {
        !matches!(self, TokenTag::IntercalatedH)
    }

    #[inline]
    fn is_plain_weak(&self) -> bool {
        matches!(self, TokenTag::WeakPlain | TokenTag::TrailingY)
    }

    /// Strong for hiatus purposes (accented weak vowels included)
    #[inline]
    fn is_hiatus_strong(&self) -> bool {
        matches!(self, TokenTag::Strong | TokenTag::WeakAccented)
    }
}

/// One consumed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelToken {
    pub position: usize,
    pub tag: TokenTag,
}

/// Shape of the nucleus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleusKind {
    Vowel,
    Diphthong,
    Triphthong,
    Hiatus,
    /// Nothing could be consumed at the start position
    Error,
}

/// Outcome of [`analyze_nucleus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NucleusResult {
    /// Index of the last consumed letter; equals the start for [`NucleusKind::Error`]
    pub end: usize,
    pub kind: NucleusKind,
    /// Where a hiatus should be cut
    pub hiatus_point: Option<usize>,
}

/// Analyze the nucleus beginning at `start`
pub fn analyze_nucleus(word: &Word, start: usize, log: &mut ExceptionLog) -> NucleusResult {
    let mut tokens: SmallVec<[VowelToken; 4]> = SmallVec::new();
    let mut i = start;

    while let Some(ch) = word.lower_at(i) {
        let next_is_vowel = word.lower_at(i + 1).is_some_and(is_vowel);
        if is_vowel(ch) {
            tokens.push(VowelToken {
                position: i,
                tag: TokenTag::of_vowel(ch),
            });
        } else if ch == 'h' && !tokens.is_empty() && next_is_vowel {
            tokens.push(VowelToken {
                position: i,
                tag: TokenTag::IntercalatedH,
            });
        } else if ch == 'y' && !next_is_vowel {
            tokens.push(VowelToken {
                position: i,
                tag: TokenTag::TrailingY,
            });
            log.record(ExceptionTag::TrailingYAsVowel);
            break;
        } else {
            break;
        }
        i += 1;
    }

    let Some(last) = tokens.last() else {
        return NucleusResult {
            end: start,
            kind: NucleusKind::Error,
            hiatus_point: None,
        };
    };
    let end = last.position;

    let vowels: SmallVec<[VowelToken; 4]> =
        tokens.iter().filter(|t| t.tag.is_vowel_slot()).copied().collect();

    let mut hiatus_point = None;
    for pair in vowels.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if forms_hiatus(word, first, second) {
            hiatus_point = Some(hiatus_cut(word, first, second, log));
            break;
        }
    }

    let kind = if hiatus_point.is_some() {
        NucleusKind::Hiatus
    } else if vowels.len() == 3
        && vowels[0].tag.is_plain_weak()
        && vowels[1].tag == TokenTag::Strong
        && vowels[2].tag.is_plain_weak()
    {
        NucleusKind::Triphthong
    } else if vowels.len() >= 2 {
        NucleusKind::Diphthong
    } else {
        NucleusKind::Vowel
    };

    NucleusResult {
        end,
        kind,
        hiatus_point,
    }
}

fn forms_hiatus(word: &Word, first: VowelToken, second: VowelToken) -> bool {
    if first.tag.is_hiatus_strong() && second.tag.is_hiatus_strong() {
        return true;
    }
    let a = word.normalized_at(first.position);
    let b = word.normalized_at(second.position);
    a.is_some() && a == b
}

/// Cut on an intercalated h if there is one, else before the second vowel
fn hiatus_cut(word: &Word, first: VowelToken, second: VowelToken, log: &mut ExceptionLog) -> usize {
    let h = (first.position + 1..second.position).find(|&i| word.lower_at(i) == Some('h'));
    match h {
        Some(at) => {
            log.record(ExceptionTag::IntercalatedHHiatus);
            at
        }
        None => second.position,
    }
}
