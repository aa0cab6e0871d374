//! Prefix detection for the morphological and adaptive strategies

use crate::classifier::{is_consonant, is_vowel};
use crate::exceptions::{ExceptionLog, ExceptionTag};
use crate::tables::{is_digraph, is_inseparable, is_strong_cluster, prefixes_longest_first};
use crate::word::Word;

/// Length of the first (longest) matching prefix, if any
///
/// A prefix matches when it is a proper prefix of the word and it does not
/// end in a vowel that runs straight into another vowel.
pub fn find_prefix_cut(word: &Word) -> Option<usize> {
    let len = word.len();
    prefixes_longest_first().iter().find_map(|prefix| {
        let cut = prefix.chars().count();
        if cut == 0 || cut >= len || !word.starts_with_lower(prefix) {
            return None;
        }
        let last = word.lower_at(cut - 1)?;
        let next = word.lower_at(cut)?;
        if is_vowel(last) && is_vowel(next) {
            return None;
        }
        Some(cut)
    })
}

/// Whether the adaptive strategy should cut at `cut`
///
/// Looks at the prefix's last letter and the first letter after it.
pub fn prefers_morphological(word: &Word, cut: usize, log: &mut ExceptionLog) -> bool {
    let Some(last) = cut.checked_sub(1).and_then(|i| word.lower_at(i)) else {
        return false;
    };
    let Some(next) = word.lower_at(cut) else {
        return false;
    };

    if last == 'x' && is_vowel(next) {
        log.record(ExceptionTag::AdaptiveIgnoresXVowel);
        return false;
    }
    if is_consonant(last) && next == 'h' && word.lower_at(cut + 1).is_some_and(is_vowel) {
        log.record(ExceptionTag::AdaptiveIgnoresConsonantH);
        return false;
    }
    if is_consonant(last) && is_vowel(next) {
        log.record(ExceptionTag::AdaptivePrefersConsonantVowel);
        return true;
    }
    if is_consonant(last) && is_consonant(next) {
        // h is silent; compare what remains of the pair
        let pair: Vec<char> = [last, next].into_iter().filter(|&c| c != 'h').collect();
        let (strong, inseparable, digraph) = match pair.as_slice() {
            [a, b] => (is_strong_cluster(*a, *b), is_inseparable(*a, *b), is_digraph(*a, *b)),
            _ => (false, false, false),
        };
        if strong {
            log.record(ExceptionTag::AdaptiveIgnoresStrongCluster);
            return false;
        }
        if inseparable || !digraph {
            log.record(ExceptionTag::AdaptivePrefersWeakPair);
            return true;
        }
        log.record(ExceptionTag::AdaptiveIgnoresDigraph);
        return false;
    }
    false
}
