//! Error types for the prompt workspace.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Raised at the NLP adapter boundary when no usable toolkit is configured.
#[derive(Debug, Error)]
pub enum NlpError {
    #[error("NLP toolkit not available: {0}")]
    Unavailable(String),
}

/// Editing-session errors
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Code block not found: {0}")]
    UnknownCodeBlock(Uuid),

    #[error("Prompt not found: {0}")]
    UnknownPrompt(String),

    #[error("Unknown prompt section: {0}")]
    UnknownField(String),
}
