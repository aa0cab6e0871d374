//! Character classification for syllabification
//!
//! Pure per-character predicates. Inputs are single Unicode scalar values
//! already lowercased by [`Word`](crate::Word); validation guarantees every
//! Spanish letter is exactly one `char`.

/// Classification of a lowercase letter for nucleus and cluster analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    /// a, e, o with or without acute accent
    StrongVowel,
    /// í, ú: promoted to strong for hiatus purposes
    WeakAccentedVowel,
    /// i, u, ü
    WeakVowel,
    /// Any other alphabetic character
    Consonant,
    /// Not a letter
    Other,
}

/// Classify a lowercase character
#[inline]
pub fn classify(ch: char) -> LetterClass {
    match ch {
        'a' | 'e' | 'o' | 'á' | 'é' | 'ó' => LetterClass::StrongVowel,
        'í' | 'ú' => LetterClass::WeakAccentedVowel,
        'i' | 'u' | 'ü' => LetterClass::WeakVowel,
        c if c.is_alphabetic() => LetterClass::Consonant,
        _ => LetterClass::Other,
    }
}

/// Vowel in the 11-member set a e i o u á é í ó ú ü
#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(
        classify(ch),
        LetterClass::StrongVowel | LetterClass::WeakAccentedVowel | LetterClass::WeakVowel
    )
}

/// Strong vowel after accent normalization (a, e, o)
#[inline]
pub fn is_strong_vowel(ch: char) -> bool {
    classify(ch) == LetterClass::StrongVowel
}

/// Weak vowel carrying a written accent (í, ú)
#[inline]
pub fn is_weak_accented_vowel(ch: char) -> bool {
    classify(ch) == LetterClass::WeakAccentedVowel
}

/// Single letter that is not a vowel (y and h included)
#[inline]
pub fn is_consonant(ch: char) -> bool {
    classify(ch) == LetterClass::Consonant
}

/// e or i, accented or not; decides whether `gu` is a spelling unit
#[inline]
pub fn is_front_vowel(ch: char) -> bool {
    matches!(normalize(ch), 'e' | 'i')
}

/// Strip the acute accent; ü is preserved
#[inline]
pub fn normalize(ch: char) -> char {
    match ch {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        'Á' => 'A',
        'É' => 'E',
        'Í' => 'I',
        'Ó' => 'O',
        'Ú' => 'U',
        other => other,
    }
}
