//! The prompt linter.
//!
//! For every section: strip fenced code, parse the remainder, run the
//! section's rule and the hedging detector, and keep each distinct message
//! once. The result is always a full recomputation over all six sections.

pub mod catalog;
pub mod hedging;
pub mod rules;
pub mod suggest;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::fence::strip_code_blocks;
use crate::models::{Field, PromptDraft};
use crate::nlp::{EnglishToolkit, NlpToolkit};
pub use suggest::{FirstSuggestions, RandomSuggestions, SuggestionSource};

/// Issue messages per section, keyed by display label when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueReport {
    issues: BTreeMap<Field, Vec<String>>,
}

impl IssueReport {
    /// Messages for `field`; empty when the section is clean.
    pub fn get(&self, field: Field) -> &[String] {
        self.issues.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> + '_ {
        self.issues.iter().map(|(field, issues)| (*field, issues.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    fn insert(&mut self, field: Field, issues: Vec<String>) {
        self.issues.insert(field, issues);
    }
}

#[derive(Clone)]
pub struct Linter {
    toolkit: Arc<dyn NlpToolkit>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(Arc::new(EnglishToolkit::new()))
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("toolkit", &self.toolkit.name())
            .finish()
    }
}

impl Linter {
    pub fn new(toolkit: Arc<dyn NlpToolkit>) -> Self {
        Self { toolkit }
    }

    /// Lints every section, drawing verb suggestions at random.
    pub fn lint(&self, draft: &PromptDraft) -> IssueReport {
        self.lint_with(draft, &mut RandomSuggestions::thread())
    }

    pub fn lint_with(
        &self,
        draft: &PromptDraft,
        suggestions: &mut dyn SuggestionSource,
    ) -> IssueReport {
        let mut report = IssueReport::default();
        for (field, raw) in draft.fields() {
            let issues = self.lint_field(field, raw, suggestions);
            debug!(field = %field, issues = issues.len(), "linted section");
            report.insert(field, issues);
        }
        report
    }

    /// Rule issues followed by hedging issues, duplicates removed.
    pub fn lint_field(
        &self,
        field: Field,
        raw: &str,
        suggestions: &mut dyn SuggestionSource,
    ) -> Vec<String> {
        let doc = self.toolkit.parse(&strip_code_blocks(raw));
        let mut issues = rules::check(field, raw, &doc, suggestions);
        issues.extend(hedging::detect(&doc));
        dedup(issues)
    }
}

fn dedup(issues: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(issues.len());
    for issue in issues {
        if !unique.contains(&issue) {
            unique.push(issue);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::examples::find_example;

    fn draft(role: &str, context: &str, objective: &str) -> PromptDraft {
        PromptDraft {
            role: role.to_string(),
            context: context.to_string(),
            objective: objective.to_string(),
            ..PromptDraft::default()
        }
    }

    #[test]
    fn report_covers_all_six_sections() {
        let report = Linter::default().lint(&PromptDraft::default());
        assert_eq!(report.iter().count(), 6);
        assert_eq!(report.get(Field::Objective), [rules::OBJECTIVE_MISSING]);
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn hedging_applies_to_every_section() {
        let mut text = PromptDraft::default();
        for field in Field::ALL {
            text.set(field, "You are probably right, probably.");
        }
        let report = Linter::default().lint_with(&text, &mut FirstSuggestions);
        let message = hedging::message("probably");
        for field in Field::ALL {
            let issues = report.get(field);
            assert_eq!(issues.iter().filter(|m| **m == message).count(), 1, "{}", field);
        }
    }

    #[test]
    fn code_in_context_is_not_linted() {
        let report = Linter::default().lint(&draft(
            "You are a reviewer.",
            "The service is written in Rust.\n\n```rust\n// just do it\nfn main() {}\n```",
            "Review the code.",
        ));
        assert!(report.get(Field::Context).is_empty());
    }

    #[test]
    fn identical_issues_collapse() {
        assert_eq!(
            dedup(vec!["a".into(), "b".into(), "a".into()]),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn relinting_is_idempotent() {
        let linter = Linter::default();
        let vague = find_example("Vague Social Media Post (Linter Test)").unwrap().draft;
        let first = linter.lint_with(&vague, &mut FirstSuggestions);
        let second = linter.lint_with(&vague, &mut FirstSuggestions);
        assert_eq!(first, second);
    }

    #[test]
    fn relinting_with_random_suggestions_differs_only_in_offered_verbs() {
        const GENERIC_PREFIX: &str = "Use a more specific verb than \"be\". Try: ";
        let linter = Linter::default();
        let vague = find_example("Vague Social Media Post (Linter Test)").unwrap().draft;
        let first = linter.lint_with(&vague, &mut RandomSuggestions::thread());
        let second = linter.lint_with(&vague, &mut RandomSuggestions::thread());

        let stable = |report: &IssueReport| -> Vec<(Field, Vec<String>)> {
            report
                .iter()
                .map(|(field, issues)| {
                    let kept = issues
                        .iter()
                        .filter(|issue| !issue.starts_with(GENERIC_PREFIX))
                        .cloned()
                        .collect();
                    (field, kept)
                })
                .collect()
        };
        assert_eq!(stable(&first), stable(&second));

        for report in [&first, &second] {
            let offered: Vec<&str> = report
                .get(Field::Objective)
                .iter()
                .filter_map(|issue| issue.strip_prefix(GENERIC_PREFIX))
                .flat_map(|rest| rest.trim_end_matches('.').split(", "))
                .collect();
            assert_eq!(offered.len(), rules::SUGGESTED_VERBS);
            assert!(offered
                .iter()
                .all(|verb| catalog::STRONG_ACTION_VERBS.contains(verb)));
        }
    }

    #[test]
    fn vague_example_is_flagged_across_sections() {
        let vague = find_example("Vague Social Media Post (Linter Test)").unwrap().draft;
        let report = Linter::default().lint_with(&vague, &mut FirstSuggestions);

        assert!(report.get(Field::Role).contains(&rules::ROLE_QUESTION.to_string()));
        assert!(report.get(Field::Role).contains(&hedging::message("can")));
        assert!(report.get(Field::Context).contains(&rules::CONTEXT_COMMAND.to_string()));
        assert!(report.get(Field::Context).contains(&hedging::message("basically")));
        assert!(report.get(Field::Context).contains(&hedging::message("sort of")));
        assert!(report.get(Field::Objective).contains(&rules::OBJECTIVE_NOT_COMMAND.to_string()));
        assert!(report
            .get(Field::Constraints)
            .contains(&rules::CONSTRAINTS_NEGATIVE.to_string()));
        assert!(report.get(Field::Examples).contains(&rules::EXAMPLES_MARKER.to_string()));
        assert!(report.get(Field::Examples).contains(&hedging::message("might")));
        // "some text" matches the "text" keyword
        assert!(!report
            .get(Field::OutputFormat)
            .contains(&rules::OUTPUT_FORMAT_VAGUE.to_string()));
    }

    #[test]
    fn report_serializes_by_display_label() {
        let report = Linter::default().lint(&PromptDraft::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["Objective"][0], rules::OBJECTIVE_MISSING);
        assert!(json["Output Format"].as_array().unwrap().is_empty());
    }
}
