//! Syllabification engine
//!
//! Drives the left-to-right scan: optional prefix split first, then one
//! nucleus analysis and one boundary decision per syllable until the word is
//! consumed. Each call owns its state; the engine itself is immutable and can
//! be shared across threads.

use crate::boundary::resolve_length;
use crate::classifier::is_vowel;
use crate::error::Result;
use crate::exceptions::{ExceptionLog, ExceptionTag};
use crate::nucleus::{analyze_nucleus, NucleusKind};
use crate::options::{Options, PrefixStrategy};
use crate::prefix::{find_prefix_cut, prefers_morphological};
use crate::syllabification::Syllabification;
use crate::word::Word;
use tracing::{debug, trace, warn};

/// Splits words according to a fixed set of [`Options`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllabificationEngine {
    options: Options,
}

/// Working state of one call
#[derive(Default)]
struct Scan {
    syllables: Vec<String>,
    points: Vec<usize>,
    log: ExceptionLog,
}

impl SyllabificationEngine {
    /// Engine with the given options
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Trim, validate and split `raw`
    pub fn syllabify(&self, raw: &str) -> Result<Syllabification> {
        let word = Word::parse(raw)?;
        Ok(self.syllabify_word(&word))
    }

    /// Split an already validated word
    pub fn syllabify_word(&self, word: &Word) -> Syllabification {
        let scan = self.run(word);

        debug!(
            word = %word.text(),
            syllables = scan.syllables.len(),
            exceptions = scan.log.len(),
            "syllabified"
        );

        Syllabification {
            syllables: scan.syllables,
            division_points: scan.points,
            exceptions: scan.log.into_vec(),
        }
    }

    fn run(&self, word: &Word) -> Scan {
        let len = word.len();
        let mut scan = Scan::default();
        let mut start = 0;
        let mut applied_cut = None;

        if self.options.prefix_strategy != PrefixStrategy::Phonetic {
            if let Some(cut) = find_prefix_cut(word).filter(|&cut| cut > 0 && cut < len) {
                if self.apply_prefix_split(word, cut, &mut scan) {
                    applied_cut = Some(cut);
                    start = cut;
                }
            }
        }

        while start < len {
            let length = self.next_syllable_length(word, start, &mut scan.log);
            if length == 0 {
                warn!(start, word = %word.text(), "could not compute syllable length");
                scan.log.record(ExceptionTag::LengthComputationError(start));
                break;
            }

            let end = (start + length).min(len);
            let syllable = word.slice(start, end);
            trace!(start, end, %syllable, "syllable");
            scan.syllables.push(syllable);

            start = end;
            if start < len && applied_cut != Some(start) && !scan.points.contains(&start) {
                scan.points.push(start);
            }
        }

        scan.points.sort_unstable();
        scan.points.dedup();
        scan
    }

    /// Decide on and perform the prefix split; returns whether it was applied
    fn apply_prefix_split(&self, word: &Word, cut: usize, scan: &mut Scan) -> bool {
        let prefix = word.slice(0, cut);
        let apply = match self.options.prefix_strategy {
            PrefixStrategy::Morphological => true,
            PrefixStrategy::Adaptive => prefers_morphological(word, cut, &mut scan.log),
            PrefixStrategy::Phonetic => false,
        };

        if !apply {
            trace!(%prefix, "prefix left to phonetic rules");
            scan.log.record(ExceptionTag::PrefixIgnored(prefix));
            return false;
        }

        scan.log.record(match self.options.prefix_strategy {
            PrefixStrategy::Adaptive => ExceptionTag::AdaptivePrefersMorphological,
            _ => ExceptionTag::MorphologicalStrategyActive,
        });

        let phonetic = Self::new(self.options.with_prefix_strategy(PrefixStrategy::Phonetic));
        let inner = phonetic.run(&Word::from_validated(&prefix));
        scan.syllables.extend(inner.syllables);
        scan.points.extend(inner.points);
        scan.log.merge(inner.log);
        scan.log.record(ExceptionTag::MorphologicalPrefixSplit(prefix));

        if !scan.points.contains(&cut) {
            scan.points.push(cut);
        }
        true
    }

    /// Letters in the syllable starting at `start`; 0 once the word is consumed
    fn next_syllable_length(&self, word: &Word, start: usize, log: &mut ExceptionLog) -> usize {
        let len = word.len();
        if start >= len {
            return 0;
        }
        if start == len - 1 {
            return 1;
        }

        let Some(vowel_at) = (start..len).find(|&i| word.lower_at(i).is_some_and(is_vowel)) else {
            log.record(ExceptionTag::NoVowelNucleus);
            return len - start;
        };

        let nucleus = analyze_nucleus(word, vowel_at, log);
        if nucleus.kind == NucleusKind::Error {
            log.record(ExceptionTag::ForcedLength(start));
            return 1;
        }
        resolve_length(word, start, &nucleus, &self.options, log)
    }
}
