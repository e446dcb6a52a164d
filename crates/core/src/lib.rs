#[cfg(feature = "fetch")]
pub mod batch;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lexicon;
pub mod metrics;
pub mod parse;
pub mod readability;
pub mod sentiment;
pub mod table;
pub mod tokenize;

#[cfg(feature = "fetch")]
pub use batch::{BatchConfig, BatchSummary, OutputFormat, run};
pub use error::{MensuraError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, Fetcher};
pub use lexicon::{Lexicons, load_stopwords, load_words};
pub use metrics::{MetricRecord, analyze};
pub use parse::Document;
pub use readability::{AdvancedStats, WordSentenceStats, advanced_stats, average_word_length, gunning_fog, word_sentence_stats};
pub use sentiment::{Analyzer, Sentiment, filter_stopwords, lexicon_scores};
pub use table::{InputRow, OUTPUT_HEADERS, RecordWriter, read_input, read_records, write_records_json};
