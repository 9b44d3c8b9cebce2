use crate::models::prompt::{PromptConfig, PromptDraft};
use crate::storage::{upsert, PromptStorage};
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    draft: RwLock<Option<PromptDraft>>,
    prompts: RwLock<Vec<PromptConfig>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptStorage for MemoryStorage {
    async fn load_draft(&self) -> Result<Option<PromptDraft>> {
        Ok(self.draft.read().await.clone())
    }

    async fn save_draft(&self, draft: &PromptDraft) -> Result<()> {
        *self.draft.write().await = Some(draft.clone());
        Ok(())
    }

    async fn list_prompts(&self) -> Result<Vec<PromptConfig>> {
        Ok(self.prompts.read().await.clone())
    }

    async fn save_prompt(&self, prompt: &PromptConfig) -> Result<()> {
        upsert(&mut *self.prompts.write().await, prompt);
        Ok(())
    }

    async fn delete_prompt(&self, name: &str) -> Result<bool> {
        let mut prompts = self.prompts.write().await;
        let before = prompts.len();
        prompts.retain(|prompt| prompt.name != name);
        Ok(prompts.len() != before)
    }
}
