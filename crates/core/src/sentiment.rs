//! Sentiment scoring: polarity/subjectivity and lexicon match counts.
//!
//! Two scorers operate on different views of the same document:
//!
//! - [`Analyzer`] computes polarity and subjectivity from a built-in
//!   word-valence lexicon over *whitespace-tokenized, lowercased,
//!   stop-word-filtered* text.
//! - [`lexicon_scores`] counts occurrences of user-supplied positive and
//!   negative words over *alphabetic tokens* with stop words removed.
//!
//! Neither scorer sees the raw document text; callers apply
//! [`filter_stopwords`] first. Readability metrics, by contrast, always run
//! on the unfiltered text.

use std::collections::HashMap;

use crate::lexicon::Lexicons;
use crate::tokenize;

/// Word valence table compiled into the binary.
const DEFAULT_LEXICON: &str = include_str!("data/sentiment_lexicon.tsv");

/// Polarity and subjectivity of a document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// Positive-vs-negative affect, in [-1, 1].
    pub polarity: f64,
    /// Opinion-vs-fact content, in [0, 1].
    pub subjectivity: f64,
}

/// Lexicon-based polarity/subjectivity analyzer.
///
/// Each lexicon entry maps a word to a (polarity, subjectivity) pair; a
/// document scores the mean over its matched tokens. Documents with no
/// matched tokens score 0.0 on both axes.
#[derive(Debug)]
pub struct Analyzer {
    valences: HashMap<String, (f64, f64)>,
}

impl Analyzer {
    /// Creates an analyzer backed by the built-in valence lexicon.
    pub fn new() -> Self {
        Self::from_lexicon(DEFAULT_LEXICON)
    }

    /// Parses a valence lexicon from `word<TAB>polarity<TAB>subjectivity`
    /// lines. Comment lines start with `#`; malformed lines are skipped.
    pub fn from_lexicon(contents: &str) -> Self {
        let valences = contents
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let word = fields.next()?.trim().to_lowercase();
                let polarity: f64 = fields.next()?.trim().parse().ok()?;
                let subjectivity: f64 = fields.next()?.trim().parse().ok()?;
                Some((word, (polarity, subjectivity)))
            })
            .collect();

        Self { valences }
    }

    /// Scores a text by averaging the valences of its matched tokens.
    ///
    /// Tokens are whitespace-split, lowercased, and stripped of surrounding
    /// punctuation before lookup. The caller decides what text to feed in;
    /// the batch pipeline passes stop-word-filtered text here.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0usize;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if let Some(&(polarity, subjectivity)) = self.valences.get(&word) {
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                matched += 1;
            }
        }

        if matched == 0 {
            return Sentiment::default();
        }

        Sentiment {
            polarity: (polarity_sum / matched as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / matched as f64).clamp(0.0, 1.0),
        }
    }

    /// Number of words in the valence lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.valences.len()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes stop words from a text for sentiment scoring.
///
/// Whitespace-tokenizes, lowercases each token, drops tokens present in the
/// stop-word set, and rejoins with single spaces. Membership is tested on
/// the raw lowercased token, so punctuation-attached forms pass through.
pub fn filter_stopwords(text: &str, lexicons: &Lexicons) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !lexicons.stopwords.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts positive and negative lexicon matches in a text.
///
/// Alphabetic tokens are lowercased, stop words are removed, and each
/// remaining occurrence is tested for membership: a word appearing three
/// times contributes three to its score.
pub fn lexicon_scores(text: &str, lexicons: &Lexicons) -> (usize, usize) {
    let mut positive = 0;
    let mut negative = 0;

    for token in tokenize::words(text) {
        let word = token.to_lowercase();
        if lexicons.stopwords.contains(&word) {
            continue;
        }
        if lexicons.positive.contains(&word) {
            positive += 1;
        }
        if lexicons.negative.contains(&word) {
            negative += 1;
        }
    }

    (positive, negative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn test_lexicons() -> Lexicons {
        Lexicons {
            positive: set(&["good"]),
            negative: set(&["bad"]),
            stopwords: set(&["the", "is"]),
        }
    }

    #[test]
    fn test_analyzer_positive_text() {
        let analyzer = Analyzer::new();
        let sentiment = analyzer.analyze("great wonderful excellent");

        assert!(sentiment.polarity > 0.5);
        assert!(sentiment.subjectivity > 0.5);
    }

    #[test]
    fn test_analyzer_negative_text() {
        let analyzer = Analyzer::new();
        assert!(analyzer.analyze("terrible awful horrible").polarity < -0.5);
    }

    #[test]
    fn test_analyzer_no_matches_is_zero() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.analyze("xylophone quartz"), Sentiment::default());
        assert_eq!(analyzer.analyze(""), Sentiment::default());
    }

    #[test]
    fn test_analyzer_strips_punctuation() {
        let analyzer = Analyzer::new();
        let plain = analyzer.analyze("good");
        let wrapped = analyzer.analyze("\"good,\"");

        assert_eq!(plain, wrapped);
    }

    #[test]
    fn test_analyzer_case_insensitive() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.analyze("GOOD"), analyzer.analyze("good"));
    }

    #[test]
    fn test_filter_stopwords() {
        let filtered = filter_stopwords("The movie is good", &test_lexicons());
        assert_eq!(filtered, "movie good");
    }

    #[test]
    fn test_filter_stopwords_keeps_punctuation_attached() {
        // "is," is not the stop word "is", so it survives the filter
        let filtered = filter_stopwords("There it is, the end", &test_lexicons());
        assert_eq!(filtered, "there it is, end");
    }

    #[test]
    fn test_lexicon_scores_counts_occurrences() {
        let (pos, neg) = lexicon_scores("The movie is good and good fun", &test_lexicons());
        assert_eq!(pos, 2);
        assert_eq!(neg, 0);
    }

    #[test]
    fn test_lexicon_scores_case_invariant() {
        let lexicons = test_lexicons();
        let (upper, _) = lexicon_scores("Great Good", &lexicons);
        let (lower, _) = lexicon_scores("great good", &lexicons);

        assert_eq!(upper, lower);
        assert_eq!(upper, 1);
    }

    #[test]
    fn test_lexicon_scores_respects_stopwords() {
        let mut lexicons = test_lexicons();
        lexicons.stopwords.insert("good".to_string());

        let (pos, neg) = lexicon_scores("good bad", &lexicons);
        assert_eq!(pos, 0);
        assert_eq!(neg, 1);
    }

    #[test]
    fn test_default_lexicon_loads() {
        assert!(Analyzer::new().lexicon_size() > 100);
    }
}
