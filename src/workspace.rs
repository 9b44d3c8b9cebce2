//! The editing session: one draft, its code blocks and the saved prompts.
//!
//! The Context section is held as prose plus an ordered list of
//! [`CodeBlock`]s; everything that leaves the session (storage, lint, render)
//! sees the composed context. Every mutation writes the full draft snapshot.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::WorkspaceError;
use crate::fence::{compose_context, split_context};
use crate::lint::{IssueReport, Linter, SuggestionSource};
use crate::models::examples::find_example;
use crate::models::{CodeBlock, Field, PromptConfig, PromptDraft};
use crate::ports::{Clipboard, NamePrompt};
use crate::render::{self, PromptStats};
use crate::storage::PromptStorage;

/// Language given to a code block added without one.
pub const NEW_BLOCK_LANGUAGE: &str = "javascript";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Plain,
    Markdown,
}

pub struct Workspace {
    // context holds prose only
    prompt: PromptDraft,
    code_blocks: Vec<CodeBlock>,
    saved: Vec<PromptConfig>,
    storage: Arc<dyn PromptStorage>,
    linter: Linter,
    new_block_language: String,
}

impl Workspace {
    /// Restores the stored draft and saved prompts.
    #[instrument(skip_all)]
    pub async fn open(storage: Arc<dyn PromptStorage>, linter: Linter) -> Result<Self> {
        let stored = storage
            .load_draft()
            .await
            .context("Failed to load the stored draft")?;
        let saved = storage
            .list_prompts()
            .await
            .context("Failed to load saved prompts")?;

        let mut workspace = Self {
            prompt: PromptDraft::default(),
            code_blocks: Vec::new(),
            saved,
            storage,
            linter,
            new_block_language: NEW_BLOCK_LANGUAGE.to_string(),
        };
        if let Some(draft) = stored {
            workspace.replace(draft);
        }
        info!(
            code_blocks = workspace.code_blocks.len(),
            saved = workspace.saved.len(),
            "Opened workspace"
        );
        Ok(workspace)
    }

    pub fn with_new_block_language(mut self, language: impl Into<String>) -> Self {
        self.new_block_language = language.into();
        self
    }

    /// The draft as stored and linted, context including its code blocks.
    pub fn draft(&self) -> PromptDraft {
        PromptDraft {
            context: self.full_context(),
            ..self.prompt.clone()
        }
    }

    /// The sections as edited; the context here excludes code blocks.
    pub fn sections(&self) -> &PromptDraft {
        &self.prompt
    }

    pub fn full_context(&self) -> String {
        compose_context(&self.prompt.context, &self.code_blocks)
    }

    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    pub fn code_block(&self, id: Uuid) -> Option<&CodeBlock> {
        self.code_blocks.iter().find(|block| block.id == id)
    }

    pub fn saved_prompts(&self) -> &[PromptConfig] {
        &self.saved
    }

    #[instrument(skip(self, value))]
    pub async fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.prompt.set(field, value);
        self.persist().await
    }

    /// Appends a code block and returns its id.
    #[instrument(skip(self, content))]
    pub async fn add_code_block(&mut self, language: Option<&str>, content: &str) -> Result<Uuid> {
        let language = language.unwrap_or(&self.new_block_language).to_string();
        let block = CodeBlock::new(language, content);
        let id = block.id;
        self.code_blocks.push(block);
        self.persist().await?;
        Ok(id)
    }

    /// Updates the language and/or content of a code block.
    #[instrument(skip(self, content))]
    pub async fn edit_code_block(
        &mut self,
        id: Uuid,
        language: Option<&str>,
        content: Option<&str>,
    ) -> Result<()> {
        let block = self
            .code_blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or(WorkspaceError::UnknownCodeBlock(id))?;
        if let Some(language) = language {
            block.language = language.to_string();
        }
        if let Some(content) = content {
            block.content = content.to_string();
        }
        self.persist().await
    }

    #[instrument(skip(self))]
    pub async fn delete_code_block(&mut self, id: Uuid) -> Result<()> {
        let before = self.code_blocks.len();
        self.code_blocks.retain(|block| block.id != id);
        if self.code_blocks.len() == before {
            return Err(WorkspaceError::UnknownCodeBlock(id).into());
        }
        self.persist().await
    }

    /// Overwrites the whole draft with a template; code blocks are re-extracted.
    #[instrument(skip(self, config), fields(name = %config.name))]
    pub async fn load(&mut self, config: &PromptConfig) -> Result<()> {
        self.replace(config.draft.clone());
        info!(code_blocks = self.code_blocks.len(), "Loaded prompt");
        self.persist().await
    }

    /// Loads a built-in example or, failing that, a saved prompt.
    pub async fn load_named(&mut self, name: &str) -> Result<()> {
        let config = find_example(name)
            .or_else(|| self.saved.iter().find(|p| p.name == name).cloned())
            .ok_or_else(|| WorkspaceError::UnknownPrompt(name.to_string()))?;
        self.load(&config).await
    }

    /// Saves the draft under a name from `namer`; `None` if the user declined.
    pub async fn save_as(&mut self, namer: &mut dyn NamePrompt) -> Result<Option<PromptConfig>> {
        let name = match namer.ask_name() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Ok(None),
        };
        let config = PromptConfig::new(name, self.draft());
        self.storage
            .save_prompt(&config)
            .await
            .with_context(|| format!("Failed to save prompt '{}'", config.name))?;
        self.saved = self
            .storage
            .list_prompts()
            .await
            .context("Failed to reload saved prompts")?;
        Ok(Some(config))
    }

    pub async fn delete_saved(&mut self, name: &str) -> Result<bool> {
        let deleted = self
            .storage
            .delete_prompt(name)
            .await
            .with_context(|| format!("Failed to delete prompt '{}'", name))?;
        if deleted {
            self.saved.retain(|prompt| prompt.name != name);
        }
        Ok(deleted)
    }

    /// Replaces the draft with the sections found in a pasted final prompt.
    pub async fn import_structured(&mut self, text: &str) -> Result<()> {
        self.replace(render::parse_structured(text));
        self.persist().await
    }

    pub fn lint(&self) -> IssueReport {
        self.linter.lint(&self.draft())
    }

    pub fn lint_with(&self, suggestions: &mut dyn SuggestionSource) -> IssueReport {
        self.linter.lint_with(&self.draft(), suggestions)
    }

    pub fn final_prompt(&self) -> String {
        render::final_prompt(&self.draft())
    }

    pub fn stats(&self) -> PromptStats {
        PromptStats::of(&self.final_prompt())
    }

    pub fn markdown(&self) -> String {
        render::markdown(&self.draft())
    }

    pub fn copy(&self, clipboard: &mut dyn Clipboard, format: ExportFormat) -> Result<()> {
        let text = match format {
            ExportFormat::Plain => self.final_prompt(),
            ExportFormat::Markdown => self.markdown(),
        };
        clipboard.write_text(&text)
    }

    fn replace(&mut self, draft: PromptDraft) {
        let (prose, blocks) = split_context(&draft.context);
        self.prompt = PromptDraft {
            context: prose,
            ..draft
        };
        self.code_blocks = blocks;
    }

    async fn persist(&self) -> Result<()> {
        self.storage
            .save_draft(&self.draft())
            .await
            .context("Failed to save the draft")
    }
}
