//! Property-based checks over arbitrary Spanish-letter strings

use proptest::prelude::*;
use silabas_core::{syllabify_with, Options, PrefixStrategy, Region};

fn any_options() -> impl Strategy<Value = Options> {
    (
        any::<bool>(),
        prop::sample::select(Region::ALL.to_vec()),
        prop::sample::select(PrefixStrategy::ALL.to_vec()),
    )
        .prop_map(|(include_hiatus, region, prefix_strategy)| Options {
            include_hiatus,
            region,
            prefix_strategy,
        })
}

proptest! {
    #[test]
    fn syllables_rebuild_the_word(word in "[a-záéíóúüñ]{1,14}", options in any_options()) {
        let result = syllabify_with(&word, &options).unwrap();
        prop_assert_eq!(result.word(), word);
        prop_assert!(result.syllables.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn division_points_match_syllable_lengths(word in "[a-záéíóúüñ]{1,14}", options in any_options()) {
        let result = syllabify_with(&word, &options).unwrap();
        let len = word.chars().count();

        let mut offset = 0;
        let expected: Vec<usize> = result.syllables[..result.syllables.len() - 1]
            .iter()
            .map(|s| {
                offset += s.chars().count();
                offset
            })
            .collect();
        prop_assert_eq!(&result.division_points, &expected);
        prop_assert!(result.division_points.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.division_points.iter().all(|&p| p > 0 && p < len));
    }

    #[test]
    fn same_input_same_output(word in "[a-zñ]{1,14}", options in any_options()) {
        let first = syllabify_with(&word, &options).unwrap();
        let second = syllabify_with(&word, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn letter_case_does_not_move_boundaries(word in "[a-záéíóúüñ]{1,14}", options in any_options()) {
        let lower = syllabify_with(&word, &options).unwrap();
        let upper = syllabify_with(&word.to_uppercase(), &options).unwrap();
        prop_assert_eq!(lower.division_points, upper.division_points);
    }

    #[test]
    fn keeping_hiatus_never_adds_syllables(word in "[a-záéíóúüñh]{1,14}", options in any_options()) {
        let split = syllabify_with(&word, &options.with_hiatus(true)).unwrap();
        let joined = syllabify_with(&word, &options.with_hiatus(false)).unwrap();
        prop_assert!(joined.len() <= split.len());
    }

    #[test]
    fn surrounding_whitespace_is_ignored(word in "[a-zñ]{1,10}") {
        let options = Options::default();
        let plain = syllabify_with(&word, &options).unwrap();
        let padded = syllabify_with(&format!("  {word}\t"), &options).unwrap();
        prop_assert_eq!(plain, padded);
    }

    #[test]
    fn non_letters_are_rejected(prefix in "[a-z]{0,5}", bad in "[0-9 .,;!?-]", suffix in "[a-z]{0,5}") {
        let word = format!("{prefix}{bad}{suffix}");
        let trimmed = word.trim();
        // a lone separator at either end is trimmed away
        prop_assume!(trimmed.chars().any(|c| !c.is_alphabetic()) || trimmed.is_empty());
        prop_assert!(syllabify_with(&word, &Options::default()).is_err());
    }
}
