//! Readability and word-structure statistics.
//!
//! Everything here runs on the original, unfiltered document text. Stop-word
//! filtering only applies to sentiment scoring; feeding filtered text into
//! these functions would change sentence lengths and the Fog index.

use crate::tokenize;

/// Words with this many syllables or more are polysyllabic for the
/// Gunning Fog formula.
const FOG_SYLLABLE_THRESHOLD: usize = 3;

/// Alphabetic words longer than this many characters count as complex.
const COMPLEX_WORD_LENGTH: usize = 6;

/// Personal and possessive pronouns (the PRP / PRP$ closed class).
const PERSONAL_PRONOUNS: [&str; 23] = [
    "i", "we", "my", "ours", "us", "me", "mine", "our", "you", "your", "yours", "he", "him", "his", "she", "her",
    "hers", "it", "its", "they", "them", "their", "theirs",
];

/// Word and sentence counts with the derived average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentenceStats {
    /// Number of alphabetic word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// `word_count / sentence_count`, or 0 when there are no sentences.
    pub avg_sentence_length: f64,
}

/// Complex-word, pronoun and syllable statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedStats {
    /// Alphabetic words longer than six characters.
    pub complex_words: usize,
    /// Personal/possessive pronoun occurrences.
    pub personal_pronouns: usize,
    /// Total syllables divided by the count of ALL tokens (punctuation
    /// included), or 0 when there are no tokens.
    pub syllables_per_word: f64,
}

/// Computes the Gunning Fog index of a text.
///
/// `0.4 * (words / sentences + 100 * polysyllabic / words)` where a
/// polysyllabic word has three or more syllables. Returns 0.0 for text
/// with no words or no sentences.
pub fn gunning_fog(text: &str) -> f64 {
    let words = tokenize::words(text);
    let sentence_count = tokenize::sentences(text).len();
    if words.is_empty() || sentence_count == 0 {
        return 0.0;
    }

    let polysyllabic = words
        .iter()
        .filter(|w| tokenize::syllables(w) >= FOG_SYLLABLE_THRESHOLD)
        .count();

    let avg_sentence_length = words.len() as f64 / sentence_count as f64;
    let percent_polysyllabic = 100.0 * polysyllabic as f64 / words.len() as f64;

    0.4 * (avg_sentence_length + percent_polysyllabic)
}

/// Counts words and sentences and derives the average sentence length.
pub fn word_sentence_stats(text: &str) -> WordSentenceStats {
    let word_count = tokenize::words(text).len();
    let sentence_count = tokenize::sentences(text).len();
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    WordSentenceStats { word_count, sentence_count, avg_sentence_length }
}

/// Computes complex-word, pronoun and syllables-per-word statistics.
///
/// The syllables-per-word denominator is the count of all tokens including
/// punctuation, not the alphabetic word count used elsewhere.
pub fn advanced_stats(text: &str) -> AdvancedStats {
    let words = tokenize::words(text);

    let complex_words = words
        .iter()
        .filter(|w| w.chars().count() > COMPLEX_WORD_LENGTH)
        .count();

    let personal_pronouns = words.iter().filter(|w| is_personal_pronoun(w)).count();

    let token_count = tokenize::token_count(text);
    let syllables_per_word = if token_count > 0 {
        tokenize::syllable_count(text) as f64 / token_count as f64
    } else {
        0.0
    };

    AdvancedStats { complex_words, personal_pronouns, syllables_per_word }
}

/// Mean character length of alphabetic word tokens, 0 when there are none.
pub fn average_word_length(text: &str) -> f64 {
    let words = tokenize::words(text);
    if words.is_empty() {
        return 0.0;
    }

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    total_chars as f64 / words.len() as f64
}

/// Whether a token is a personal or possessive pronoun.
///
/// Matched case-insensitively, except the all-caps token `US` which reads
/// as the country abbreviation, not the pronoun.
fn is_personal_pronoun(token: &str) -> bool {
    if token == "US" {
        return false;
    }
    PERSONAL_PRONOUNS.contains(&token.to_lowercase().as_str())
}
