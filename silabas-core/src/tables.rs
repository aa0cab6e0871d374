//! Static rule tables
//!
//! All lookups are allocation-free. The prefix list is ordered once, on first
//! use, and shared read-only afterwards.

use std::sync::OnceLock;

/// Two-letter units representing a single consonant sound
pub const DIGRAPHS: [&str; 3] = ["ch", "ll", "rr"];

/// Consonant pairs kept together at the start of a syllable
pub const INSEPARABLE_CLUSTERS: [&str; 12] = [
    "pl", "bl", "cl", "gl", "fl", "pr", "br", "tr", "dr", "cr", "gr", "fr",
];

/// The r-clusters; the adaptive strategy never breaks these for a prefix
pub const STRONG_CLUSTERS: [&str; 7] = ["pr", "br", "tr", "dr", "cr", "gr", "fr"];

/// Known Spanish prefixes, in list order
pub const PREFIXES: [&str; 55] = [
    "a", "ab", "abs", "ante", "anti", "bi", "bis", "biz", "co", "con", "contra", "de", "des", "di",
    "dis", "e", "en", "entre", "ex", "extra", "hiper", "hipo", "i", "im", "in", "inter", "intra",
    "o", "ob", "obs", "omn", "per", "pos", "post", "pre", "pro", "re", "res", "retro", "sin", "so",
    "sobre", "sub", "subs", "super", "supra", "trans", "tras", "tri", "ultra", "un", "uni", "vi",
    "vice", "viz",
];

static PREFIXES_BY_LENGTH: OnceLock<Vec<&'static str>> = OnceLock::new();

/// Prefixes sorted longest first; equal lengths keep list order
pub fn prefixes_longest_first() -> &'static [&'static str] {
    PREFIXES_BY_LENGTH.get_or_init(|| {
        let mut sorted = PREFIXES.to_vec();
        // stable sort keeps list order among equal lengths
        sorted.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        sorted
    })
}

#[inline]
fn pair_in(table: &[&str], first: char, second: char) -> bool {
    table.iter().any(|entry| {
        let mut chars = entry.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

/// `first` + `second` is one of ch, ll, rr
#[inline]
pub fn is_digraph(first: char, second: char) -> bool {
    pair_in(&DIGRAPHS, first, second)
}

/// `first` + `second` is an inseparable onset cluster
#[inline]
pub fn is_inseparable(first: char, second: char) -> bool {
    pair_in(&INSEPARABLE_CLUSTERS, first, second)
}

/// `first` + `second` is one of the r-clusters
#[inline]
pub fn is_strong_cluster(first: char, second: char) -> bool {
    pair_in(&STRONG_CLUSTERS, first, second)
}
