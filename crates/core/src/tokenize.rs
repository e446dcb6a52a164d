//! Unicode-aware tokenization and syllable counting.
//!
//! All metric computations share this tokenizer. Words and sentences follow
//! UAX-29 segmentation; a "word" in the metric sense is a word-bounded token
//! whose characters are all alphabetic, which keeps numbers, punctuation and
//! contracted forms out of the word-based denominators.

use unicode_segmentation::UnicodeSegmentation;

/// Alphabetic word tokens in order of appearance.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .collect()
}

/// Count of all tokens: every non-whitespace word-bounded segment,
/// punctuation included.
///
/// This is the denominator used for syllables-per-word. It intentionally
/// differs from the alphabetic word count used by the sentence statistics.
pub fn token_count(text: &str) -> usize {
    text.split_word_bounds().filter(|s| !s.trim().is_empty()).count()
}

/// Sentence segments with non-whitespace content.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Estimates the syllable count of a single word.
///
/// Vowel-group heuristic: consecutive vowels count once, a silent trailing
/// `e` is dropped unless the word ends in `le`, and any word containing a
/// letter counts at least one syllable.
pub fn syllables(word: &str) -> usize {
    let lowered = word.to_lowercase();
    let letters: Vec<char> = lowered.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_was_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    let n = letters.len();
    if count > 1 && n >= 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) && letters[n - 2] != 'l' {
        count -= 1;
    }

    count.max(1)
}

/// Total syllable count over all word tokens in the text.
pub fn syllable_count(text: &str) -> usize {
    text.unicode_words().map(syllables).sum()
}
