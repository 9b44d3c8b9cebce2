//! Natural-language analysis behind a small capability interface.
//!
//! Rules only see a [`ParsedDocument`]: sentences of tagged tokens with
//! queries for questions, imperative mood, verb lemmas, phrase matches and
//! negative polarity. The toolkit producing it is swappable through
//! [`NlpToolkit`].

pub mod document;
pub mod english;
pub mod lexicon;

use std::sync::Arc;

pub use document::{ParsedDocument, Sentence, Tag, Token};
pub use english::EnglishToolkit;

use crate::error::NlpError;

/// Parses free text into a [`ParsedDocument`]. Parsing never fails; a toolkit
/// that cannot be constructed is reported by [`toolkit`] instead.
pub trait NlpToolkit: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, text: &str) -> ParsedDocument;
}

/// Resolves a configured toolkit name.
pub fn toolkit(name: &str) -> Result<Arc<dyn NlpToolkit>, NlpError> {
    match name.trim().to_lowercase().as_str() {
        "english" | "en" => Ok(Arc::new(EnglishToolkit::new())),
        _ => Err(NlpError::Unavailable(name.to_string())),
    }
}
