use prompt_lint_rs::storage::{FileSystemStorage, PromptStorage};
use prompt_lint_rs::{PromptConfig, PromptDraft};

fn draft(role: &str) -> PromptDraft {
    PromptDraft {
        role: role.to_string(),
        ..PromptDraft::default()
    }
}

#[tokio::test]
async fn fresh_directory_has_no_draft_and_no_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSystemStorage::new(dir.path().join("nested"));
    assert!(storage.dir().exists());
    assert!(storage.load_draft().await.unwrap().is_none());
    assert!(storage.list_prompts().await.unwrap().is_empty());
}

#[tokio::test]
async fn draft_is_stored_as_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSystemStorage::new(dir.path());
    let mut saved = draft("You are a tester.");
    saved.output_format = "JSON".into();
    storage.save_draft(&saved).await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join("draft.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["outputFormat"], "JSON");
    assert_eq!(storage.load_draft().await.unwrap(), Some(saved));
}

#[tokio::test]
async fn partial_draft_file_fills_missing_sections() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("draft.json"), r#"{"objective":"Draft a memo."}"#).unwrap();
    let storage = FileSystemStorage::new(dir.path());

    let loaded = storage.load_draft().await.unwrap().unwrap();
    assert_eq!(loaded.objective, "Draft a memo.");
    assert_eq!(loaded.role, "");
    assert_eq!(loaded.output_format, "");
}

#[tokio::test]
async fn prompts_upsert_by_name_and_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSystemStorage::new(dir.path());
    storage
        .save_prompt(&PromptConfig::new("first", draft("one")))
        .await
        .unwrap();
    storage
        .save_prompt(&PromptConfig::new("second", draft("two")))
        .await
        .unwrap();
    storage
        .save_prompt(&PromptConfig::new("first", draft("uno")))
        .await
        .unwrap();

    let reopened = FileSystemStorage::new(dir.path());
    let prompts = reopened.list_prompts().await.unwrap();
    let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
    assert_eq!(prompts[0].draft.role, "uno");
    assert_eq!(
        reopened.get_prompt("second").await.unwrap().unwrap().draft.role,
        "two"
    );

    assert!(reopened.delete_prompt("first").await.unwrap());
    assert!(!reopened.delete_prompt("first").await.unwrap());
    assert_eq!(reopened.list_prompts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn corrupt_prompt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prompts.json"), "not json").unwrap();
    let storage = FileSystemStorage::new(dir.path());
    assert!(storage.list_prompts().await.is_err());
    assert!(storage
        .save_prompt(&PromptConfig::new("x", PromptDraft::default()))
        .await
        .is_err());
}
