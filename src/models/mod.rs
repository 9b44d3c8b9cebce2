pub mod examples;
pub mod prompt;

pub use examples::default_examples;
pub use prompt::{CodeBlock, Field, PromptConfig, PromptDraft};
