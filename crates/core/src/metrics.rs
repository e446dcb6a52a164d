//! Per-document metric record and the analysis that produces it.
//!
//! [`analyze`] is a pure function of the extracted text and the loaded
//! lexicons; it never touches the network and never fails. Sentiment scores
//! see stop-word-filtered text, readability scores see the original text.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicons;
use crate::readability;
use crate::sentiment::{self, Analyzer, Sentiment};

/// One output row: every metric computed for a successfully fetched document.
///
/// Field order is the output table's column order; serde renames carry the
/// table's header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Opaque document identifier from the input table.
    #[serde(rename = "URL ID")]
    pub url_id: String,

    /// Source URL.
    #[serde(rename = "URL")]
    pub url: String,

    /// Occurrences of positive-lexicon words.
    #[serde(rename = "Positive Score")]
    pub positive_score: usize,

    /// Occurrences of negative-lexicon words.
    #[serde(rename = "Negative Score")]
    pub negative_score: usize,

    /// Positive-vs-negative affect, in [-1, 1].
    #[serde(rename = "Polarity")]
    pub polarity: f64,

    /// Opinion-vs-fact content, in [0, 1].
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,

    /// Words per sentence.
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,

    /// Complex words as a percentage of all words.
    #[serde(rename = "Complex Word Percentage")]
    pub complex_word_percentage: f64,

    /// Gunning Fog readability grade.
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,

    /// Words per sentence.
    #[serde(rename = "Avg Words per Sentence")]
    pub avg_words_per_sentence: f64,

    /// Count of alphabetic words longer than six characters.
    #[serde(rename = "Complex Words")]
    pub complex_words: usize,

    /// Count of alphabetic words.
    #[serde(rename = "Total Words Count")]
    pub total_words: usize,

    /// Syllables over all tokens.
    #[serde(rename = "Syllables per Word")]
    pub syllables_per_word: f64,

    /// Personal/possessive pronoun occurrences.
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: usize,

    /// Mean character length of alphabetic words.
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}

/// Runs the full metric engine over one document's extracted text.
///
/// Polarity/subjectivity and the positive/negative counts run on
/// stop-word-filtered text; the Fog index and all word/sentence statistics
/// run on the text as extracted. When the document has no words the
/// complex-word percentage is 0.0.
pub fn analyze(url_id: &str, url: &str, text: &str, lexicons: &Lexicons, analyzer: &Analyzer) -> MetricRecord {
    let filtered = sentiment::filter_stopwords(text, lexicons);
    let Sentiment { polarity, subjectivity } = analyzer.analyze(&filtered);
    let (positive_score, negative_score) = sentiment::lexicon_scores(text, lexicons);

    let fog_index = readability::gunning_fog(text);
    let words = readability::word_sentence_stats(text);
    let advanced = readability::advanced_stats(text);
    let avg_word_length = readability::average_word_length(text);

    let complex_word_percentage = if words.word_count > 0 {
        advanced.complex_words as f64 / words.word_count as f64 * 100.0
    } else {
        0.0
    };

    let avg_words_per_sentence = if words.sentence_count > 0 {
        words.word_count as f64 / words.sentence_count as f64
    } else {
        0.0
    };

    MetricRecord {
        url_id: url_id.to_string(),
        url: url.to_string(),
        positive_score,
        negative_score,
        polarity,
        subjectivity,
        avg_sentence_length: words.avg_sentence_length,
        complex_word_percentage,
        fog_index,
        avg_words_per_sentence,
        complex_words: advanced.complex_words,
        total_words: words.word_count,
        syllables_per_word: advanced.syllables_per_word,
        personal_pronouns: advanced.personal_pronouns,
        avg_word_length,
    }
}
