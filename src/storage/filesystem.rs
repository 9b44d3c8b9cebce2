use crate::models::prompt::{PromptConfig, PromptDraft};
use crate::storage::{upsert, PromptStorage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

const DRAFT_FILE: &str = "draft.json";
const PROMPTS_FILE: &str = "prompts.json";

/// JSON files in one directory: the draft snapshot and the saved prompt list.
#[derive(Debug)]
pub struct FileSystemStorage {
    prompt_dir: PathBuf,
    // serializes read-modify-write of the prompt list
    prompts_lock: Mutex<()>,
}

impl FileSystemStorage {
    /// Creates a new FileSystemStorage instance.
    /// Ensures the prompt directory exists.
    pub fn new<P: AsRef<Path>>(prompt_dir: P) -> Self {
        let path_buf = prompt_dir.as_ref().to_path_buf();
        if let Err(e) = std::fs::create_dir_all(&path_buf) {
            // Log error but proceed; async methods will handle failures
            error!(path = %path_buf.display(), error = %e, "Failed to create prompt directory during initialization");
        }
        Self {
            prompt_dir: path_buf,
            prompts_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.prompt_dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.prompt_dir.join(file);
        match fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .with_context(|| format!("Failed to deserialize {}", path.display())),
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.prompt_dir.join(file);
        let contents = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file))?;

        // Ensure directory exists before writing
        if !self.prompt_dir.exists() {
            fs::create_dir_all(&self.prompt_dir)
                .await
                .with_context(|| format!("Failed to create prompt directory '{}'", self.prompt_dir.display()))?;
        }

        let mut handle = fs::File::create(&path)
            .await
            .with_context(|| format!("Failed to create/open {} for writing", path.display()))?;
        handle
            .write_all(contents.as_bytes())
            .await
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        handle
            .flush()
            .await
            .with_context(|| format!("Failed to flush {}", path.display()))
    }
}

#[async_trait]
impl PromptStorage for FileSystemStorage {
    async fn load_draft(&self) -> Result<Option<PromptDraft>> {
        self.read_json(DRAFT_FILE).await
    }

    async fn save_draft(&self, draft: &PromptDraft) -> Result<()> {
        self.write_json(DRAFT_FILE, draft).await
    }

    async fn list_prompts(&self) -> Result<Vec<PromptConfig>> {
        match self.read_json::<Vec<PromptConfig>>(PROMPTS_FILE).await {
            Ok(prompts) => Ok(prompts.unwrap_or_default()),
            Err(e) => {
                warn!(path = %self.prompt_dir.join(PROMPTS_FILE).display(), error = %e, "Saved prompts unreadable");
                Err(e)
            }
        }
    }

    async fn save_prompt(&self, prompt: &PromptConfig) -> Result<()> {
        let _guard = self.prompts_lock.lock().await;
        let mut prompts = self.list_prompts().await?;
        upsert(&mut prompts, prompt);
        self.write_json(PROMPTS_FILE, &prompts).await?;
        info!(name = %prompt.name, total = prompts.len(), "Saved prompt");
        Ok(())
    }

    async fn delete_prompt(&self, name: &str) -> Result<bool> {
        let _guard = self.prompts_lock.lock().await;
        let mut prompts = self.list_prompts().await?;
        let before = prompts.len();
        prompts.retain(|prompt| prompt.name != name);
        if prompts.len() == before {
            return Ok(false); // Not found
        }
        self.write_json(PROMPTS_FILE, &prompts).await?;
        Ok(true)
    }
}
