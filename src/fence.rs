//! Fenced code handling for prompt sections.
//!
//! - [`strip_code_blocks`] removes fenced segments so the linter never sees code.
//! - [`split_context`] extracts fenced segments from the Context section into
//!   [`CodeBlock`]s for structured editing.
//! - [`compose_context`] is the inverse of [`split_context`].
//!
//! A fenced segment is three backticks, an optional word-character language tag,
//! a newline, the body, a newline and three closing backticks. Blank lines right
//! before the opening fence belong to the segment. Anything that does not match
//! this shape (an unterminated fence, a tag with punctuation) is left as prose.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::CodeBlock;

/// Language assigned to a fence that declares none.
pub const DEFAULT_LANGUAGE: &str = "text";

static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\n*```([A-Za-z0-9_]*)\n(.*?)\n```").expect("fence pattern is valid")
});

/// Returns `text` with every fenced code segment removed.
pub fn strip_code_blocks(text: &str) -> String {
    FENCE.replace_all(text, "").into_owned()
}

/// Splits a Context section into its prose and its code blocks, in order of
/// appearance. Every block gets a fresh id.
pub fn split_context(text: &str) -> (String, Vec<CodeBlock>) {
    let blocks = FENCE
        .captures_iter(text)
        .map(|caps| {
            let language = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|lang| !lang.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE);
            let content = caps.get(2).map_or("", |m| m.as_str());
            CodeBlock::new(language, content)
        })
        .collect();
    let prose = FENCE.replace_all(text, "").trim().to_string();
    (prose, blocks)
}

/// Rebuilds a Context section: the prose followed by each block as a fenced
/// segment, separated by blank lines.
pub fn compose_context(prose: &str, blocks: &[CodeBlock]) -> String {
    let mut composed = String::from(prose);
    for block in blocks {
        composed.push_str("\n\n```");
        composed.push_str(&block.language);
        composed.push('\n');
        composed.push_str(&block.content);
        composed.push_str("\n```");
    }
    composed.trim().to_string()
}
