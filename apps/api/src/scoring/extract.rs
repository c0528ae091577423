//! Markup-to-text extraction for candidate documents submitted as HTML.
//!
//! The engine only depends on the `TextExtractor` trait; `HtmlTextExtractor` is the
//! default backend. Swap it at startup the same way any other collaborator is swapped.

use thiserror::Error;

/// A candidate document was markup but could not be turned into text.
///
/// Kept distinct from a zero score: a zero means "dissimilar", this means "not scored".
#[derive(Debug, Error)]
#[error("document extraction failed: {0}")]
pub struct DocumentExtractionError(pub String);

/// Converts markup into its visible text content.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, markup: &str) -> Result<String, DocumentExtractionError>;
}

/// `html2text`-backed extractor. Plain rendering: no list bullets, emphasis markers or
/// link footnotes leak into the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextExtractor;

/// Wide enough that no realistic line wraps.
const RENDER_WIDTH: usize = 10_000;

impl TextExtractor for HtmlTextExtractor {
    fn extract_text(&self, markup: &str) -> Result<String, DocumentExtractionError> {
        html2text::config::plain()
            .string_from_read(markup.as_bytes(), RENDER_WIDTH)
            .map(|text| text.trim().to_string())
            .map_err(|e| DocumentExtractionError(e.to_string()))
    }
}

/// True when the first non-whitespace char is `<`.
///
/// Plain text that merely starts with a stray `<` is treated as markup too; callers
/// rely on this exact heuristic, so it is not refined here.
pub fn looks_like_markup(text: &str) -> bool {
    text.trim_start().starts_with('<')
}
