//! Library API integration tests
use std::io::Write;

use mensura_core::*;
use tempfile::TempDir;

/// Writes lexicon files into a directory and loads them.
fn write_lexicons(dir: &TempDir) -> Lexicons {
    let positive = dir.path().join("positive-words.txt");
    let negative = dir.path().join("negative-words.txt");
    let stopwords = dir.path().join("StopWords_Generic.txt");

    std::fs::write(&positive, "good\n").unwrap();
    std::fs::write(&negative, "bad\n").unwrap();
    std::fs::write(&stopwords, "the\nis\n").unwrap();

    Lexicons::load(&positive, &negative, &[&stopwords])
}

#[test]
fn test_scenario_scores() {
    let dir = TempDir::new().unwrap();
    let lexicons = write_lexicons(&dir);
    let analyzer = Analyzer::new();

    let record = analyze(
        "blackassign0001",
        "https://example.com/review",
        "The movie is good and good fun",
        &lexicons,
        &analyzer,
    );

    assert_eq!(record.positive_score, 2);
    assert_eq!(record.negative_score, 0);
}

#[test]
fn test_case_invariant_scoring() {
    let dir = TempDir::new().unwrap();
    let lexicons = write_lexicons(&dir);

    let (upper, _) = lexicon_scores("Good Good", &lexicons);
    let (lower, _) = lexicon_scores("good good", &lexicons);
    assert_eq!(upper, 2);
    assert_eq!(upper, lower);
}

#[test]
fn test_sentiment_and_readability_see_different_text() {
    let dir = TempDir::new().unwrap();
    let lexicons = write_lexicons(&dir);

    let text = "The movie is good and good fun.";
    let filtered = filter_stopwords(text, &lexicons);

    // The sentiment pipeline's input is stop-word-filtered; the readability
    // pipeline's is not.
    assert_ne!(filtered, text.to_lowercase());
    assert!(!filtered.contains("the"));

    let record = analyze("1", "u", text, &lexicons, &Analyzer::new());
    assert_eq!(record.fog_index, gunning_fog(text));
    assert_ne!(record.fog_index, gunning_fog(&filtered));
}

#[test]
fn test_sentence_less_text_has_zero_averages() {
    let record = analyze("1", "u", "", &Lexicons::default(), &Analyzer::new());

    assert_eq!(record.avg_sentence_length, 0.0);
    assert_eq!(record.avg_words_per_sentence, 0.0);
    assert_eq!(record.complex_word_percentage, 0.0);
}

#[test]
fn test_paragraph_extraction_into_analysis() {
    let html = r#"
        <html><body>
            <nav>Site navigation</nav>
            <p>The movie is good and good fun.</p>
            <p>It had us laughing.</p>
        </body></html>
    "#;

    let doc = Document::parse(html);
    let text = doc.paragraph_text().unwrap();
    assert_eq!(text, "The movie is good and good fun. It had us laughing.");

    let dir = TempDir::new().unwrap();
    let lexicons = write_lexicons(&dir);
    let record = analyze("1", "u", &text, &lexicons, &Analyzer::new());

    assert_eq!(record.positive_score, 2);
    assert_eq!(record.total_words, 11);
    // "us" and "it" from the second paragraph
    assert_eq!(record.personal_pronouns, 2);
}

#[test]
fn test_output_round_trip() {
    let dir = TempDir::new().unwrap();
    let lexicons = write_lexicons(&dir);
    let analyzer = Analyzer::new();
    let output = dir.path().join("output.csv");

    let texts = [
        "The movie is good and good fun.",
        "A delightful and remarkable story about them.",
        "Plain text without any lexicon words.",
    ];
    let records: Vec<MetricRecord> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| analyze(&format!("{}", i + 1), "https://example.com", text, &lexicons, &analyzer))
        .collect();

    let mut writer = RecordWriter::create(&output).unwrap();
    for record in &records {
        writer.write(record).unwrap();
    }
    drop(writer);

    let read_back = read_records(&output).unwrap();
    assert_eq!(read_back.len(), records.len());
    for (a, b) in read_back.iter().zip(&records) {
        assert_eq!(a.url_id, b.url_id);
        assert_eq!(a.positive_score, b.positive_score);
        assert!((a.polarity - b.polarity).abs() < 1e-9);
        assert!((a.fog_index - b.fog_index).abs() < 1e-9);
        assert!((a.avg_word_length - b.avg_word_length).abs() < 1e-9);
    }
}

#[cfg(feature = "fetch")]
mod batch_tests {
    use super::*;

    #[test]
    fn test_batch_failed_fetch_produces_no_rows() {
        let dir = TempDir::new().unwrap();
        let lexicons = write_lexicons(&dir);

        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "URL_ID,URL").unwrap();
        writeln!(file, "blackassign0001,not-a-url").unwrap();

        let config = BatchConfig::new(&input, &output);
        let summary = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(run(&config, &lexicons))
        })
        .join()
        .unwrap()
        .unwrap();

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.skipped, 1);
        assert!(read_records(&output).unwrap().is_empty());
    }
}
