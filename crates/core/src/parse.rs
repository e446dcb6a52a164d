//! HTML parsing and paragraph text extraction.
//!
//! Articles are reduced to the visible text of their `<p>` elements.
//! Navigation, headings and other non-paragraph content never enter the
//! metric pipeline.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::parse::Document;
//!
//! let html = "<html><body><p>First paragraph.</p><p>Second paragraph.</p></body></html>";
//! let doc = Document::parse(html);
//! assert_eq!(doc.paragraph_text().unwrap(), "First paragraph. Second paragraph.");
//! ```

use regex::Regex;
use scraper::{Html, Selector};

use crate::{MensuraError, Result};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// scraper is lenient: malformed markup parses into a best-effort tree
    /// rather than failing.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Collects the text of every element matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::HtmlParseError`] if the selector is invalid.
    pub fn select_text(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Selector::parse(selector)
            .map_err(|e| MensuraError::HtmlParseError(format!("Invalid selector '{}': {}", selector, e)))?;

        Ok(self
            .html
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect())
    }

    /// Extracts the visible text of all paragraph elements.
    ///
    /// Whitespace runs inside each paragraph collapse to single spaces and
    /// paragraphs join with single spaces. A page without `<p>` elements
    /// yields the empty string, which is still a valid (empty) document.
    pub fn paragraph_text(&self) -> Result<String> {
        let whitespace = Regex::new(r"\s+").unwrap();

        let paragraphs = self.select_text("p")?;
        let joined = paragraphs
            .iter()
            .map(|text| whitespace.replace_all(text.trim(), " ").into_owned())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(joined)
    }
}
