//! Structured prompt authoring with a rule-based linter.
//!
//! A prompt is six free-text sections (Role, Context, Objective, Constraints,
//! Examples, Output Format). [`lint::Linter`] inspects each section through an
//! [`nlp::NlpToolkit`] and reports actionable issues; [`workspace::Workspace`]
//! is the editing session that persists drafts through a
//! [`storage::PromptStorage`] backend.

pub mod config;
pub mod error;
pub mod fence;
pub mod lint;
pub mod models;
pub mod nlp;
pub mod ports;
pub mod render;
pub mod server;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use lint::{IssueReport, Linter};
pub use models::{CodeBlock, Field, PromptConfig, PromptDraft};
pub use workspace::{ExportFormat, Workspace};
