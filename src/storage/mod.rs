use crate::models::prompt::{PromptConfig, PromptDraft};
use anyhow::Result;
use async_trait::async_trait;

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemStorage;
pub use memory::MemoryStorage;

/// Trait defining the interface for prompt storage backends.
#[async_trait]
pub trait PromptStorage: Send + Sync + 'static { // Ensure Send + Sync for Arc<dyn T>
    /// Reads the current draft snapshot, if one was ever written.
    async fn load_draft(&self) -> Result<Option<PromptDraft>>;

    /// Replaces the current draft snapshot.
    async fn save_draft(&self, draft: &PromptDraft) -> Result<()>;

    /// Lists all saved prompts, oldest first.
    async fn list_prompts(&self) -> Result<Vec<PromptConfig>>;

    /// Retrieves a saved prompt by name.
    async fn get_prompt(&self, name: &str) -> Result<Option<PromptConfig>> {
        Ok(self
            .list_prompts()
            .await?
            .into_iter()
            .find(|prompt| prompt.name == name))
    }

    /// Saves a prompt (appends if new, replaces the entry with the same name otherwise).
    async fn save_prompt(&self, prompt: &PromptConfig) -> Result<()>;

    /// Deletes a saved prompt by name.
    /// Returns true if the prompt was deleted, false if it was not found.
    async fn delete_prompt(&self, name: &str) -> Result<bool>;
}

/// Inserts or replaces `prompt` in `prompts` by name, keeping order.
pub(crate) fn upsert(prompts: &mut Vec<PromptConfig>, prompt: &PromptConfig) {
    match prompts.iter_mut().find(|existing| existing.name == prompt.name) {
        Some(existing) => *existing = prompt.clone(),
        None => prompts.push(prompt.clone()),
    }
}
