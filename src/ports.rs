//! Environment collaborators the workspace talks to: where copied text goes and
//! where a name for a saved prompt comes from.

use anyhow::{Context, Result};
use std::io::Write;

/// Destination for "copy" actions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Asks for the name of a prompt being saved. `None` cancels the save.
pub trait NamePrompt {
    fn ask_name(&mut self) -> Option<String>;
}

/// Writes copied text to standard output.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")
    }
}

/// Keeps the last copied text.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A name decided up front (e.g. from a command-line argument).
#[derive(Debug, Clone)]
pub struct FixedName(pub Option<String>);

impl NamePrompt for FixedName {
    fn ask_name(&mut self) -> Option<String> {
        self.0.take()
    }
}
