//! Word-list loading for sentiment and stop-word lexicons.
//!
//! A lexicon is a set of lowercase words used for membership-based scoring.
//! Three lexicons drive the metric engine: positive words, negative words,
//! and a merged stop-word set built from several category files.
//!
//! Load failures are deliberately non-fatal: a missing or unreadable word
//! file logs a warning and contributes an empty set, so downstream scoring
//! finds zero matches instead of halting the batch.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The three word sets used by the metric engine.
///
/// Loaded once at startup and passed by reference into the pipeline;
/// immutable for the lifetime of the batch.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    /// Positive sentiment words.
    pub positive: HashSet<String>,
    /// Negative sentiment words.
    pub negative: HashSet<String>,
    /// Merged stop-word set.
    pub stopwords: HashSet<String>,
}

impl Lexicons {
    /// Loads all three lexicons from disk.
    ///
    /// `stopword_paths` are unioned into a single set. Any file that fails
    /// to load is warned about and skipped.
    pub fn load<P: AsRef<Path>>(positive: P, negative: P, stopword_paths: &[P]) -> Self {
        Self {
            positive: load_words(positive),
            negative: load_words(negative),
            stopwords: load_stopwords(stopword_paths),
        }
    }
}

/// Reads a newline-delimited word file into a set.
///
/// Each line is trimmed and lowercased; blank lines are dropped and
/// duplicates collapse. On any I/O failure a warning is printed to stderr
/// and the empty set is returned.
pub fn load_words<P: AsRef<Path>>(path: P) -> HashSet<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect(),
        Err(e) => {
            eprintln!("Warning: Failed to load words from {}: {}", path.display(), e);
            HashSet::new()
        }
    }
}

/// Unions [`load_words`] across all given paths into one stop-word set.
pub fn load_stopwords<P: AsRef<Path>>(paths: &[P]) -> HashSet<String> {
    let mut stopwords = HashSet::new();
    for path in paths {
        stopwords.extend(load_words(path));
    }
    stopwords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_words_lowercases_and_trims() {
        let file = word_file("  Good \nBAD\n\ngreat\n");
        let words = load_words(file.path());

        assert_eq!(words.len(), 3);
        assert!(words.contains("good"));
        assert!(words.contains("bad"));
        assert!(words.contains("great"));
    }

    #[test]
    fn test_load_words_missing_file_is_empty() {
        let words = load_words("/nonexistent/path/words.txt");
        assert!(words.is_empty());
    }

    #[test]
    fn test_load_words_collapses_duplicates() {
        let file = word_file("good\nGood\nGOOD\n");
        assert_eq!(load_words(file.path()).len(), 1);
    }

    #[test]
    fn test_load_stopwords_unions_files() {
        let a = word_file("the\nis\n");
        let b = word_file("is\nand\n");
        let stops = load_stopwords(&[a.path(), b.path()]);

        assert_eq!(stops.len(), 3);
        assert!(stops.contains("the"));
        assert!(stops.contains("and"));
    }

    #[test]
    fn test_lexicons_load_with_missing_stopword_file() {
        let pos = word_file("good\n");
        let neg = word_file("bad\n");
        let stops = word_file("the\n");
        let missing = std::path::Path::new("/nonexistent/StopWords_Names.txt");

        let lexicons = Lexicons::load(pos.path(), neg.path(), &[stops.path(), missing]);

        assert!(lexicons.positive.contains("good"));
        assert!(lexicons.negative.contains("bad"));
        assert_eq!(lexicons.stopwords.len(), 1);
    }
}
