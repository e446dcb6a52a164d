use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use mensura_core::{BatchConfig, FetchConfig, Lexicons, batch};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stop-word category files merged into one set when none are given.
const DEFAULT_STOPWORD_FILES: [&str; 7] = [
    "StopWords_Auditor.txt",
    "StopWords_Currencies.txt",
    "StopWords_DatesandNumbers.txt",
    "StopWords_Generic.txt",
    "StopWords_GenericLong.txt",
    "StopWords_Geographic.txt",
    "StopWords_Names.txt",
];

/// Output format for the metric table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: csv, json", s)),
        }
    }
}

impl From<OutputFormat> for batch::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Compute lexical, readability and sentiment metrics for a batch of web articles
#[derive(Parser, Debug)]
#[command(name = "mensura")]
#[command(author = "Mensura Contributors")]
#[command(version = VERSION)]
#[command(about = "Compute text metrics for batches of web articles", long_about = None)]
struct Args {
    /// Input table with URL_ID and URL columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv", value_name = "FORMAT")]
    format: OutputFormat,

    /// Positive sentiment word list
    #[arg(long, default_value = "positive-words.txt", value_name = "FILE")]
    positive_words: PathBuf,

    /// Negative sentiment word list
    #[arg(long, default_value = "negative-words.txt", value_name = "FILE")]
    negative_words: PathBuf,

    /// Stop-word files, merged into one set
    #[arg(long = "stopwords", value_name = "FILE", num_args = 1.., default_values = DEFAULT_STOPWORD_FILES)]
    stopwords: Vec<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let lexicons = Lexicons::load(
        args.positive_words.clone(),
        args.negative_words.clone(),
        &args.stopwords,
    );

    if lexicons.positive.is_empty() {
        echo::print_warning("Positive lexicon is empty; positive scores will be 0");
    }
    if lexicons.negative.is_empty() {
        echo::print_warning("Negative lexicon is empty; negative scores will be 0");
    }

    if args.verbose {
        echo::print_info(&format!(
            "Lexicons: {} positive, {} negative, {} stop words",
            lexicons.positive.len(),
            lexicons.negative.len(),
            lexicons.stopwords.len()
        ));
    }

    let config = BatchConfig {
        input: args.input,
        output: args.output.clone(),
        fetch: FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| FetchConfig::default().user_agent),
        },
        format: args.format.into(),
    };

    println!("START");

    let summary = batch::run(&config, &lexicons)
        .await
        .context("Batch processing failed")?;

    println!("END");

    if args.verbose {
        echo::print_summary(summary.processed, summary.skipped, &args.output);
        echo::print_success(&format!("Output written to {}", args.output.display()));
    }

    Ok(())
}
