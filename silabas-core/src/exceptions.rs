//! Diagnostic exception tags
//!
//! Every non-trivial rule decision records a tag. Tags are for auditing only;
//! no control flow depends on them. The `Display` form is the stable
//! identifier exposed to callers.

use core::fmt;

/// A named rule that fired while syllabifying a word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionTag {
    /// A hiatus became a syllable boundary
    HiatusSplit,
    /// The hiatus cut was moved onto an intercalated h
    IntercalatedHHiatus,
    /// A y closing a nucleus was read as a vowel
    TrailingYAsVowel,
    /// Two consonant units kept together because the first is a digraph or qu/gu unit
    MultiLetterUnit(String),
    /// Two consonant units kept together as an inseparable cluster
    InseparableCluster(String),
    /// tl kept together (es_MX)
    TlTogether,
    /// tl split (es_ES and other regions)
    TlSplit,
    /// Three units split VC.CCV because the last two are inseparable
    ThreeConsonantsKeepCluster(String),
    /// Three units split VCC.CV
    ThreeConsonantsSplit,
    /// Four units split VCC.CCV
    FourConsonants,
    /// Five or more units, split after the second
    LongConsonantRun,
    /// A run of two or more word-final consonant units closes the last syllable
    FinalConsonantCluster(String),
    /// The remaining span has no vowel at all
    NoVowelNucleus,
    /// The resolver computed a non-positive length and forced 1
    ForcedLength(usize),
    /// The main loop stopped on a non-positive length
    LengthComputationError(usize),
    /// Morphological strategy applied its prefix split
    MorphologicalStrategyActive,
    /// Adaptive strategy chose the morphological split
    AdaptivePrefersMorphological,
    /// A prefix was cut off and syllabified on its own
    MorphologicalPrefixSplit(String),
    /// A prefix was found but left to the phonetic rules
    PrefixIgnored(String),
    /// Adaptive: x before a vowel
    AdaptiveIgnoresXVowel,
    /// Adaptive: consonant before h + vowel
    AdaptiveIgnoresConsonantH,
    /// Adaptive: consonant before a vowel
    AdaptivePrefersConsonantVowel,
    /// Adaptive: the boundary pair is an r-cluster
    AdaptiveIgnoresStrongCluster,
    /// Adaptive: the boundary pair is a weak cluster or no digraph
    AdaptivePrefersWeakPair,
    /// Adaptive: the boundary pair is a digraph
    AdaptiveIgnoresDigraph,
}

impl ExceptionTag {
    /// True for tags that flag a possible gap in the rule tables
    pub fn is_rule_gap(&self) -> bool {
        matches!(
            self,
            ExceptionTag::NoVowelNucleus
                | ExceptionTag::ForcedLength(_)
                | ExceptionTag::LengthComputationError(_)
        )
    }
}

impl fmt::Display for ExceptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionTag::HiatusSplit => f.write_str("Hiato_Separado"),
            ExceptionTag::IntercalatedHHiatus => f.write_str("H_Intercalada_Hiato"),
            ExceptionTag::TrailingYAsVowel => f.write_str("Y_Final_Como_Vocal"),
            ExceptionTag::MultiLetterUnit(unit) => write!(f, "D/QUGU:{unit}"),
            ExceptionTag::InseparableCluster(pair) => write!(f, "Grupo_Insep:{pair}"),
            ExceptionTag::TlTogether => f.write_str("tl_MX: tl"),
            ExceptionTag::TlSplit => f.write_str("tl_ES: tl"),
            ExceptionTag::ThreeConsonantsKeepCluster(pair) => write!(f, "CCC->VC.CCV: {pair}"),
            ExceptionTag::ThreeConsonantsSplit => f.write_str("CCC->VCC.CV"),
            ExceptionTag::FourConsonants => f.write_str("Grupo_CCCC_VCC.CCV"),
            ExceptionTag::LongConsonantRun => f.write_str("Grupo_C_Largo_VCC.RestoV"),
            ExceptionTag::FinalConsonantCluster(run) => write!(f, "Coda_Final: {run}"),
            ExceptionTag::NoVowelNucleus => f.write_str("Sin_Nucleo_Vocalico"),
            ExceptionTag::ForcedLength(at) => write!(f, "Longitud_Forzada_Indice_{at}"),
            ExceptionTag::LengthComputationError(at) => {
                write!(f, "Error_Calculo_Longitud_Silaba_Indice_{at}")
            }
            ExceptionTag::MorphologicalStrategyActive => {
                f.write_str("Estrategia_Morfologica_Activa")
            }
            ExceptionTag::AdaptivePrefersMorphological => {
                f.write_str("Estrategia_Adaptativa_Prefiere_Morfologica")
            }
            ExceptionTag::MorphologicalPrefixSplit(prefix) => {
                write!(f, "Division_Morfologica_Prefijo: {prefix}")
            }
            ExceptionTag::PrefixIgnored(prefix) => write!(f, "Prefijo_Detectado_Ignorado: {prefix}"),
            ExceptionTag::AdaptiveIgnoresXVowel => f.write_str("Adaptativa_Ignora_Morfologica_X_V"),
            ExceptionTag::AdaptiveIgnoresConsonantH => {
                f.write_str("Adaptativa_Ignora_Morfologica_CHV")
            }
            ExceptionTag::AdaptivePrefersConsonantVowel => {
                f.write_str("Adaptativa_Prefiere_Morfologica_CV")
            }
            ExceptionTag::AdaptiveIgnoresStrongCluster => {
                f.write_str("Adaptativa_Ignora_Morfologica_Grupo_Fuerte")
            }
            ExceptionTag::AdaptivePrefersWeakPair => {
                f.write_str("Adaptativa_Prefiere_Morfologica_CC_No_Fuerte")
            }
            ExceptionTag::AdaptiveIgnoresDigraph => {
                f.write_str("Adaptativa_Ignora_Morfologica_Digrafo")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExceptionTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Insertion-ordered set of tags collected during one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionLog {
    tags: Vec<ExceptionTag>,
}

impl ExceptionLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag; repeats are dropped
    pub fn record(&mut self, tag: ExceptionTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Record every tag of another log, keeping first-seen order
    pub fn merge(&mut self, other: ExceptionLog) {
        for tag in other.tags {
            self.record(tag);
        }
    }

    /// Whether a tag was recorded
    pub fn contains(&self, tag: &ExceptionTag) -> bool {
        self.tags.contains(tag)
    }

    /// Number of unique tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &ExceptionTag> {
        self.tags.iter()
    }

    /// Consume the log
    pub fn into_vec(self) -> Vec<ExceptionTag> {
        self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_identifiers() {
        assert_eq!(ExceptionTag::HiatusSplit.to_string(), "Hiato_Separado");
        assert_eq!(
            ExceptionTag::InseparableCluster("pr".into()).to_string(),
            "Grupo_Insep:pr"
        );
        assert_eq!(ExceptionTag::MultiLetterUnit("ch".into()).to_string(), "D/QUGU:ch");
        assert_eq!(ExceptionTag::TlTogether.to_string(), "tl_MX: tl");
        assert_eq!(
            ExceptionTag::ThreeConsonantsKeepCluster("tr".into()).to_string(),
            "CCC->VC.CCV: tr"
        );
        assert_eq!(
            ExceptionTag::LengthComputationError(4).to_string(),
            "Error_Calculo_Longitud_Silaba_Indice_4"
        );
        assert_eq!(
            ExceptionTag::MorphologicalPrefixSplit("sub".into()).to_string(),
            "Division_Morfologica_Prefijo: sub"
        );
    }

    #[test]
    fn test_log_deduplicates_in_order() {
        let mut log = ExceptionLog::new();
        log.record(ExceptionTag::HiatusSplit);
        log.record(ExceptionTag::TrailingYAsVowel);
        log.record(ExceptionTag::HiatusSplit);

        assert_eq!(log.len(), 2);
        let tags: Vec<_> = log.iter().cloned().collect();
        assert_eq!(tags, vec![ExceptionTag::HiatusSplit, ExceptionTag::TrailingYAsVowel]);
    }

    #[test]
    fn test_merge_keeps_first_seen() {
        let mut first = ExceptionLog::new();
        first.record(ExceptionTag::MorphologicalStrategyActive);
        first.record(ExceptionTag::HiatusSplit);

        let mut second = ExceptionLog::new();
        second.record(ExceptionTag::HiatusSplit);
        second.record(ExceptionTag::InseparableCluster("bl".into()));

        first.merge(second);
        assert_eq!(
            first.into_vec(),
            vec![
                ExceptionTag::MorphologicalStrategyActive,
                ExceptionTag::HiatusSplit,
                ExceptionTag::InseparableCluster("bl".into()),
            ]
        );
    }

    #[test]
    fn test_rule_gap_tags() {
        assert!(ExceptionTag::NoVowelNucleus.is_rule_gap());
        assert!(ExceptionTag::ForcedLength(0).is_rule_gap());
        assert!(!ExceptionTag::HiatusSplit.is_rule_gap());
    }
}
