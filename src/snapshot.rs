//! Text-snapshot inspection of committed documents.
//!
//! Parses a document the way the preview surface would and extracts a simple
//! textual representation, suitable for tests and quick inspection without a
//! real rendering host.

use scraper::{Html, Selector};

/// A textual snapshot of a committed document
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Document title, empty when the document has none
    pub title: String,
    /// Textual contents of the body
    pub text: String,
}

/// Extract a [`TextSnapshot`] from a complete document.
pub fn text_snapshot(document: &str) -> TextSnapshot {
    let parsed = Html::parse_document(document);
    let title_sel = Selector::parse("title").unwrap();
    let body_sel = Selector::parse("body").unwrap();

    let title = parsed
        .select(&title_sel)
        .next()
        .map(|n| n.text().collect::<String>())
        .unwrap_or_default();

    let text = parsed
        .select(&body_sel)
        .next()
        .map(|b| b.text().collect::<String>())
        .unwrap_or_default();

    TextSnapshot { title, text }
}
