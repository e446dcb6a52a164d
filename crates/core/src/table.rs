//! Tabular input and output.
//!
//! The input table carries `URL_ID` and `URL` columns, one row per document.
//! The output table carries the fifteen metric columns in fixed order with
//! no index column. Records are written and flushed one at a time, so rows
//! survive a failure later in the batch.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer, WriterBuilder};
use serde::Deserialize;

use crate::metrics::MetricRecord;
use crate::{MensuraError, Result};

/// Output column headers, in table order.
pub const OUTPUT_HEADERS: [&str; 15] = [
    "URL ID",
    "URL",
    "Positive Score",
    "Negative Score",
    "Polarity",
    "Subjectivity",
    "Avg Sentence Length",
    "Complex Word Percentage",
    "Fog Index",
    "Avg Words per Sentence",
    "Complex Words",
    "Total Words Count",
    "Syllables per Word",
    "Personal Pronouns",
    "Avg Word Length",
];

/// One row of the input table.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRow {
    /// Opaque document identifier.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// URL to fetch.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Reads the input table in row order.
///
/// Requires `URL_ID` and `URL` header columns; extra columns are ignored.
///
/// # Errors
///
/// Returns [`MensuraError::MissingColumn`] when a required column is absent
/// and [`MensuraError::CsvError`] for malformed rows.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MensuraError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in ["URL_ID", "URL"] {
        if !headers.iter().any(|h| h == required) {
            return Err(MensuraError::MissingColumn(required));
        }
    }

    reader.deserialize().collect::<std::result::Result<Vec<_>, _>>().map_err(MensuraError::from)
}

/// Incremental writer for the output table.
///
/// Writes the fixed header row on creation, then one row per [`write`]
/// call, flushing after each so completed rows are never lost to a later
/// failure.
///
/// [`write`]: RecordWriter::write
pub struct RecordWriter {
    writer: Writer<File>,
}

impl RecordWriter {
    /// Creates the output file and writes the header row.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(OUTPUT_HEADERS)?;
        writer.flush()?;

        Ok(Self { writer })
    }

    /// Appends one record and flushes it to disk.
    pub fn write(&mut self, record: &MetricRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Reads an output table back into records.
///
/// Useful for resuming analysis over previously computed metrics and for
/// round-trip verification.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<MetricRecord>> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    reader.deserialize().collect::<std::result::Result<Vec<_>, _>>().map_err(MensuraError::from)
}

/// Writes records as a JSON array.
///
/// The JSON output format collects all records first; only the CSV path
/// writes incrementally.
pub fn write_records_json<P: AsRef<Path>>(path: P, records: &[MetricRecord]) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;

    Ok(())
}
