//! Document construction and the render boundary.
//!
//! [`build_document`] wraps raw input verbatim in the fixed shell; the input
//! is trusted markup destined for an isolated surface, so no escaping or
//! sanitization is applied. [`Renderer::render`] is the outermost boundary of
//! a render pass: it commits the document, persists the input when enabled,
//! and converts any failure into an inline error committed in place of the
//! document. Errors never propagate past it.

use crate::storage::KeyValueStore;
use crate::surface::PreviewSurface;
use crate::{Error, Result};
use std::sync::Arc;

// The shell is reproduced byte-for-byte from the reference output, leading
// and trailing indentation included, so rendered previews are pixel-identical
// across hosts.
const DOCUMENT_PREFIX: &str = r#"
      <!DOCTYPE html>
      <html>
        <head>
          <meta name="viewport" content="width=device-width, initial-scale=1.0">
          <style>
            /* Basic CSS reset for the iframe */
            body { margin: 0; padding: 10px; }
            * { box-sizing: border-box; }
          </style>
        </head>
        <body>
          "#;

const DOCUMENT_SUFFIX: &str = r#"
        </body>
      </html>
    "#;

/// Wrap `raw_input` verbatim in the fixed document shell.
///
/// Pure: the output depends only on the input, never on prior renders.
pub fn build_document(raw_input: &str) -> String {
    let mut document =
        String::with_capacity(DOCUMENT_PREFIX.len() + raw_input.len() + DOCUMENT_SUFFIX.len());
    document.push_str(DOCUMENT_PREFIX);
    document.push_str(raw_input);
    document.push_str(DOCUMENT_SUFFIX);
    document
}

/// The inline markup committed when a render pass fails
pub fn error_document(err: &Error) -> String {
    format!("<p style=\"color: red\">Error: {}</p>", err)
}

/// Commits documents to the preview surface, persisting input when enabled.
pub struct Renderer {
    preview: Arc<dyn PreviewSurface>,
    store: Option<Arc<dyn KeyValueStore>>,
    storage_key: String,
}

impl Renderer {
    /// A renderer without persistence: every pass only commits the document.
    pub fn new(preview: Arc<dyn PreviewSurface>) -> Self {
        Self {
            preview,
            store: None,
            storage_key: String::new(),
        }
    }

    /// A renderer that also writes the raw input to `store` under
    /// `storage_key` after each successful commit.
    pub fn with_store(
        preview: Arc<dyn PreviewSurface>,
        store: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            preview,
            store: Some(store),
            storage_key: storage_key.into(),
        }
    }

    /// Render `raw_input` into the preview surface.
    ///
    /// Failures are contained here: they are logged and surfaced as an inline
    /// error in the preview, and the next edit naturally retries.
    pub fn render(&self, raw_input: &str) {
        if let Err(err) = self.try_render(raw_input) {
            log::error!("render failed: {}", err);
            if let Err(commit_err) = self.preview.set_document(&error_document(&err)) {
                log::error!("failed to surface render error: {}", commit_err);
            }
        }
    }

    // Commit strictly precedes the persistence write: a failing store must
    // not prevent the document from reaching the surface.
    fn try_render(&self, raw_input: &str) -> Result<()> {
        let document = build_document(raw_input);
        self.preview.set_document(&document)?;

        if let Some(store) = &self.store {
            store.set(&self.storage_key, raw_input)?;
        }

        Ok(())
    }
}
