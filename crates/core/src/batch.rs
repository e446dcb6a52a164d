//! Batch orchestration: input rows in, metric records out.
//!
//! The batch is strictly sequential. Each row is fetched, analyzed and
//! written before the next row starts; a fetch failure warns and skips the
//! row while the batch continues. Only input-table and output-file errors
//! abort the run.

use std::path::PathBuf;

use crate::fetch::{FetchConfig, Fetcher};
use crate::lexicon::Lexicons;
use crate::metrics;
use crate::sentiment::Analyzer;
use crate::table::{self, RecordWriter};
use crate::Result;

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// CSV with the fixed column order, written incrementally.
    #[default]
    Csv,
    /// JSON array of records, written after the batch completes.
    Json,
}

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Input table with `URL_ID` and `URL` columns.
    pub input: PathBuf,
    /// Output file path.
    pub output: PathBuf,
    /// HTTP settings shared by every fetch in the batch.
    pub fetch: FetchConfig,
    /// Output format.
    pub format: OutputFormat,
}

impl BatchConfig {
    /// Creates a config with default fetch settings and CSV output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            fetch: FetchConfig::default(),
            format: OutputFormat::default(),
        }
    }
}

/// Row counts for a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows that fetched successfully and produced a record.
    pub processed: usize,
    /// Rows skipped because their fetch failed.
    pub skipped: usize,
}

/// Runs a batch: reads the input table, fetches and analyzes every row in
/// input order, and writes the output table.
///
/// Rows whose fetch fails are warned about on stderr and skipped; they
/// produce no output record. CSV records are flushed as they are produced,
/// so completed rows survive an abort later in the batch.
pub async fn run(config: &BatchConfig, lexicons: &Lexicons) -> Result<BatchSummary> {
    let rows = table::read_input(&config.input)?;
    let fetcher = Fetcher::new(config.fetch.clone())?;
    let analyzer = Analyzer::new();

    let mut writer = match config.format {
        OutputFormat::Csv => Some(RecordWriter::create(&config.output)?),
        OutputFormat::Json => None,
    };
    let mut records = Vec::new();

    let mut processed = 0;
    let mut skipped = 0;

    for row in &rows {
        match fetcher.fetch_article_text(&row.url).await {
            Ok(text) => {
                let record = metrics::analyze(&row.url_id, &row.url, &text, lexicons, &analyzer);
                match writer.as_mut() {
                    Some(writer) => writer.write(&record)?,
                    None => records.push(record),
                }
                processed += 1;
            }
            Err(e) => {
                eprintln!("Warning: Skipping {} ({}): {}", row.url_id, row.url, e);
                skipped += 1;
            }
        }
    }

    if writer.is_none() {
        table::write_records_json(&config.output, &records)?;
    }

    Ok(BatchSummary { processed, skipped })
}
