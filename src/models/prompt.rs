use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::WorkspaceError;

/// One of the six sections of a structured prompt, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Role,
    Context,
    Objective,
    Constraints,
    Examples,
    #[serde(rename = "Output Format")]
    OutputFormat,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Role,
        Field::Context,
        Field::Objective,
        Field::Constraints,
        Field::Examples,
        Field::OutputFormat,
    ];

    /// Display label used in the composed prompt and in issue reports.
    pub fn label(self) -> &'static str {
        match self {
            Field::Role => "Role",
            Field::Context => "Context",
            Field::Objective => "Objective",
            Field::Constraints => "Constraints",
            Field::Examples => "Examples",
            Field::OutputFormat => "Output Format",
        }
    }

    /// Storage key (camelCase, as in the persisted JSON snapshot).
    pub fn key(self) -> &'static str {
        match self {
            Field::Role => "role",
            Field::Context => "context",
            Field::Objective => "objective",
            Field::Constraints => "constraints",
            Field::Examples => "examples",
            Field::OutputFormat => "outputFormat",
        }
    }

    /// Capitalized storage key, used for Markdown headings.
    pub fn heading(self) -> &'static str {
        match self {
            Field::OutputFormat => "OutputFormat",
            other => other.label(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = WorkspaceError;

    /// Accepts the label, the storage key or a snake/kebab spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key().to_lowercase() == wanted)
            .ok_or_else(|| WorkspaceError::UnknownField(s.to_string()))
    }
}

/// The working document under edit. All six sections are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptDraft {
    pub role: String,
    pub context: String,
    pub objective: String,
    pub constraints: String,
    pub examples: String,
    pub output_format: String,
}

impl PromptDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Role => &self.role,
            Field::Context => &self.context,
            Field::Objective => &self.objective,
            Field::Constraints => &self.constraints,
            Field::Examples => &self.examples,
            Field::OutputFormat => &self.output_format,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Role => self.role = value,
            Field::Context => self.context = value,
            Field::Objective => self.objective = value,
            Field::Constraints => self.constraints = value,
            Field::Examples => self.examples = value,
            Field::OutputFormat => self.output_format = value,
        }
    }

    /// Sections paired with their kind, in presentation order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

/// A named, fully-populated draft snapshot (built-in example or saved prompt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub name: String,
    #[serde(flatten)]
    pub draft: PromptDraft,
}

impl PromptConfig {
    pub fn new(name: impl Into<String>, draft: PromptDraft) -> Self {
        Self {
            name: name.into(),
            draft,
        }
    }
}

/// A fenced snippet extracted from the Context section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub language: String,
    pub content: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            language: language.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_from_label_key_and_cli_spelling() {
        assert_eq!("Output Format".parse::<Field>().unwrap(), Field::OutputFormat);
        assert_eq!("outputFormat".parse::<Field>().unwrap(), Field::OutputFormat);
        assert_eq!("output-format".parse::<Field>().unwrap(), Field::OutputFormat);
        assert_eq!("ROLE".parse::<Field>().unwrap(), Field::Role);
        assert!("tone".parse::<Field>().is_err());
    }

    #[test]
    fn draft_deserializes_missing_fields_as_empty() {
        let draft: PromptDraft = serde_json::from_str(r#"{"role":"You are a poet."}"#).unwrap();
        assert_eq!(draft.role, "You are a poet.");
        assert_eq!(draft.output_format, "");
        assert_eq!(draft.fields().count(), 6);
    }

    #[test]
    fn prompt_config_flattens_draft_fields() {
        let mut draft = PromptDraft::default();
        draft.set(Field::OutputFormat, "JSON");
        let config = PromptConfig::new("demo", draft);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["name"], "demo");
        assert_eq!(json["outputFormat"], "JSON");
    }
}
