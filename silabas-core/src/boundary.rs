//! Syllable boundary resolution
//!
//! Given a syllable start and its analyzed nucleus, decides how many letters
//! the syllable spans by looking at the consonant units that follow.

use crate::classifier::{is_front_vowel, is_vowel};
use crate::exceptions::{ExceptionLog, ExceptionTag};
use crate::nucleus::{NucleusKind, NucleusResult};
use crate::options::Options;
use crate::tables::{is_digraph, is_inseparable};
use crate::word::Word;
use smallvec::SmallVec;

/// A consonant unit: a single letter, a digraph, or a qu/gu spelling unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantUnit {
    /// Index of the first letter
    pub start: usize,
    /// 1 or 2 letters
    pub len: usize,
}

impl ConsonantUnit {
    fn is_multi_letter(&self) -> bool {
        self.len > 1
    }
}

type Units = SmallVec<[ConsonantUnit; 4]>;

/// Collect consonant units from `from` until the next vowel; also returns
/// the index just past the run
pub fn scan_consonant_units(word: &Word, from: usize) -> (Units, usize) {
    let mut units = Units::new();
    let mut j = from;

    while let Some(c1) = word.lower_at(j) {
        if is_vowel(c1) {
            break;
        }
        let len = match word.lower_at(j + 1) {
            Some(c2) if is_digraph(c1, c2) => 2,
            Some('u') if c1 == 'q' => 2,
            Some('u') if c1 == 'g' && word.lower_at(j + 2).is_some_and(is_front_vowel) => 2,
            _ => 1,
        };
        units.push(ConsonantUnit { start: j, len });
        j += len;
    }

    (units, j)
}

/// Length of the syllable starting at `start` whose nucleus is `nucleus`
pub fn resolve_length(
    word: &Word,
    start: usize,
    nucleus: &NucleusResult,
    options: &Options,
    log: &mut ExceptionLog,
) -> usize {
    let len = word.len();
    let remaining = len - start;

    if nucleus.kind == NucleusKind::Hiatus && options.include_hiatus {
        if let Some(cut) = nucleus.hiatus_point.filter(|&cut| cut > start) {
            log.record(ExceptionTag::HiatusSplit);
            return cut - start;
        }
    }

    let after_nucleus = nucleus.end + 1;
    if after_nucleus >= len {
        return remaining;
    }

    let (units, run_end) = scan_consonant_units(word, after_nucleus);
    let reaches_end = run_end >= len;

    if units.len() > 1 && reaches_end {
        log.record(ExceptionTag::FinalConsonantCluster(
            word.lower_slice(after_nucleus, run_end),
        ));
        return remaining;
    }

    let cut = match units.as_slice() {
        [] => nucleus.end + 1,
        [_] if reaches_end => return remaining,
        [only] => only.start,
        [first, second] => split_two(word, *first, *second, options, log),
        [_, second, third] => {
            let (a, b) = unit_pair(word, *second, *third);
            if is_inseparable(a, b) {
                log.record(ExceptionTag::ThreeConsonantsKeepCluster(pair_text(a, b)));
                second.start
            } else {
                log.record(ExceptionTag::ThreeConsonantsSplit);
                third.start
            }
        }
        [_, _, third, _] => {
            log.record(ExceptionTag::FourConsonants);
            third.start
        }
        [_, _, third, ..] => {
            log.record(ExceptionTag::LongConsonantRun);
            third.start
        }
    };

    if cut > start {
        cut - start
    } else {
        tracing::warn!(start, word = %word.text(), "non-positive syllable length, forcing 1");
        log.record(ExceptionTag::ForcedLength(start));
        1
    }
}

fn split_two(
    word: &Word,
    first: ConsonantUnit,
    second: ConsonantUnit,
    options: &Options,
    log: &mut ExceptionLog,
) -> usize {
    let (a, b) = unit_pair(word, first, second);

    if is_inseparable(a, b) || first.is_multi_letter() {
        if first.is_multi_letter() {
            log.record(ExceptionTag::MultiLetterUnit(
                word.lower_slice(first.start, first.start + first.len),
            ));
        } else {
            log.record(ExceptionTag::InseparableCluster(pair_text(a, b)));
        }
        first.start
    } else if (a, b) == ('t', 'l') {
        if options.region.keeps_tl_together() {
            log.record(ExceptionTag::TlTogether);
            first.start
        } else {
            log.record(ExceptionTag::TlSplit);
            second.start
        }
    } else {
        second.start
    }
}

/// First normalized letters of two units
fn unit_pair(word: &Word, first: ConsonantUnit, second: ConsonantUnit) -> (char, char) {
    (
        word.normalized_at(first.start).unwrap_or_default(),
        word.normalized_at(second.start).unwrap_or_default(),
    )
}

fn pair_text(a: char, b: char) -> String {
    [a, b].iter().collect()
}
