//! Per-section rules.
//!
//! Each rule receives the raw section text (code included) for literal checks
//! and the document parsed from the code-free text for everything else.

use super::catalog::{EXAMPLE_MARKERS, GENERIC_VERBS, OUTPUT_FORMAT_KEYWORDS, STRONG_ACTION_VERBS};
use super::suggest::SuggestionSource;
use crate::models::Field;
use crate::nlp::{ParsedDocument, Tag};

pub const ROLE_PERSONA: &str = "Good roles often start with \"You are...\" to set a clear persona.";
pub const ROLE_QUESTION: &str = "The role should be a statement, not a question.";
pub const CONTEXT_COMMAND: &str = "Avoid commands in the Context. They belong in the Objective.";
pub const OBJECTIVE_MISSING: &str = "The Objective is crucial. Please define a clear goal.";
pub const OBJECTIVE_NOT_COMMAND: &str =
    "The objective should be a clear command (e.g., 'Generate a list...').";
pub const CONSTRAINTS_NEGATIVE: &str =
    "Consider rephrasing negative constraints ('don't do X') as positive ones ('only do Y').";
pub const EXAMPLES_MARKER: &str = "Good examples often start with \"e.g.,\" or \"For example,\".";
pub const OUTPUT_FORMAT_VAGUE: &str =
    "Specify a clear format like \"JSON,\" \"Markdown,\" \"bullet points,\" etc.";

/// Number of replacement verbs offered for a generic Objective verb.
pub const SUGGESTED_VERBS: usize = 3;

/// Runs the rule for `field`.
pub fn check(
    field: Field,
    raw: &str,
    doc: &ParsedDocument,
    suggestions: &mut dyn SuggestionSource,
) -> Vec<String> {
    match field {
        Field::Role => role(raw, doc),
        Field::Context => context(doc),
        Field::Objective => objective(raw, doc, suggestions),
        Field::Constraints => constraints(doc),
        Field::Examples => examples(raw),
        Field::OutputFormat => output_format(raw),
    }
}

pub fn role(raw: &str, doc: &ParsedDocument) -> Vec<String> {
    let mut issues = Vec::new();
    if !raw.is_empty() && !raw.to_lowercase().starts_with("you are") {
        issues.push(ROLE_PERSONA.to_string());
    }
    if doc.has_question() {
        issues.push(ROLE_QUESTION.to_string());
    }
    issues
}

pub fn context(doc: &ParsedDocument) -> Vec<String> {
    if doc.has_imperative() {
        vec![CONTEXT_COMMAND.to_string()]
    } else {
        Vec::new()
    }
}

pub fn objective(
    raw: &str,
    doc: &ParsedDocument,
    suggestions: &mut dyn SuggestionSource,
) -> Vec<String> {
    if raw.is_empty() {
        return vec![OBJECTIVE_MISSING.to_string()];
    }

    let mut issues = Vec::new();
    if !doc.has_imperative() {
        issues.push(OBJECTIVE_NOT_COMMAND.to_string());
    }
    if let Some(verb) = doc.first_verb() {
        if GENERIC_VERBS.contains(&verb.lemma.as_str()) {
            let offered = suggestions.pick(STRONG_ACTION_VERBS, SUGGESTED_VERBS);
            issues.push(generic_verb_message(&verb.lemma, &offered));
        }
    }
    issues
}

pub fn generic_verb_message(verb: &str, offered: &[&str]) -> String {
    format!(
        "Use a more specific verb than \"{}\". Try: {}.",
        verb,
        offered.join(", ")
    )
}

pub fn constraints(doc: &ParsedDocument) -> Vec<String> {
    if doc.has_tag(Tag::Negative) {
        vec![CONSTRAINTS_NEGATIVE.to_string()]
    } else {
        Vec::new()
    }
}

pub fn examples(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    if !raw.is_empty() && !EXAMPLE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        vec![EXAMPLES_MARKER.to_string()]
    } else {
        Vec::new()
    }
}

pub fn output_format(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    if !raw.is_empty() && !OUTPUT_FORMAT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        vec![OUTPUT_FORMAT_VAGUE.to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::suggest::{FirstSuggestions, RandomSuggestions};
    use crate::nlp::{EnglishToolkit, NlpToolkit};

    fn run(field: Field, text: &str) -> Vec<String> {
        let doc = EnglishToolkit::new().parse(text);
        check(field, text, &doc, &mut FirstSuggestions)
    }

    #[test]
    fn role_statement_with_persona_passes() {
        assert!(run(Field::Role, "You are a pirate.").is_empty());
    }

    #[test]
    fn role_question_is_flagged() {
        let issues = run(Field::Role, "Are you a pirate?");
        assert!(issues.contains(&ROLE_QUESTION.to_string()));
        assert!(issues.contains(&ROLE_PERSONA.to_string()));
    }

    #[test]
    fn role_without_persona_framing() {
        assert_eq!(run(Field::Role, "A senior analyst."), vec![ROLE_PERSONA]);
        assert!(run(Field::Role, "").is_empty());
    }

    #[test]
    fn context_commands_are_flagged() {
        assert_eq!(run(Field::Context, "Just tell everyone."), vec![CONTEXT_COMMAND]);
        assert!(run(Field::Context, "The shop sells coffee beans.").is_empty());
    }

    #[test]
    fn empty_objective_short_circuits() {
        assert_eq!(run(Field::Objective, ""), vec![OBJECTIVE_MISSING]);
    }

    #[test]
    fn objective_needs_a_command() {
        let issues = run(Field::Objective, "A list of ten names would be nice.");
        assert!(issues.contains(&OBJECTIVE_NOT_COMMAND.to_string()));
        assert!(run(Field::Objective, "Summarize the article in three bullets.").is_empty());
    }

    #[test]
    fn everyday_task_verbs_read_as_commands() {
        for text in [
            "Calculate the average order value.",
            "Compile a report of sales.",
            "Craft a tweet about launches.",
            "Document the API endpoints.",
            "Deploy the service to staging.",
            "Parse the log file.",
            "Summarise the article.",
            "Triage the open tickets.",
            "Dedupe the mailing list.",
        ] {
            assert!(run(Field::Objective, text).is_empty(), "{}", text);
        }
    }

    #[test]
    fn context_commands_with_unlisted_verbs_are_flagged() {
        for text in [
            "Calculate the total first.",
            "Assume the user is an admin.",
            "Triage the incoming bugs.",
        ] {
            assert_eq!(run(Field::Context, text), vec![CONTEXT_COMMAND], "{}", text);
        }
    }

    #[test]
    fn generic_verb_check_looks_at_the_leading_verb() {
        assert!(run(Field::Objective, "Calculate the totals and make a table.").is_empty());
        assert!(run(Field::Objective, "Geocode the addresses and make a map.").is_empty());
    }

    #[test]
    fn generic_leading_verb_gets_suggestions() {
        assert_eq!(
            run(Field::Objective, "Make a poster for the launch."),
            vec![generic_verb_message("make", &["act as", "analyze", "assess"])]
        );
    }

    #[test]
    fn generic_verb_is_named_by_lemma() {
        let issues = run(Field::Objective, "My goal is to get a good post for Instagram.");
        assert_eq!(
            issues,
            vec![
                OBJECTIVE_NOT_COMMAND.to_string(),
                generic_verb_message("be", &["act as", "analyze", "assess"]),
            ]
        );
    }

    #[test]
    fn random_suggestions_name_the_verb_and_catalog_members() {
        let text = "Give me some text for the post.";
        let doc = EnglishToolkit::new().parse(text);
        let issues = objective(text, &doc, &mut RandomSuggestions::thread());

        assert_eq!(issues.len(), 1);
        let prefix = "Use a more specific verb than \"give\". Try: ";
        let offered = issues[0]
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix('.'))
            .expect("message names the generic verb");
        let offered: Vec<&str> = offered.split(", ").collect();
        assert_eq!(offered.len(), SUGGESTED_VERBS);
        assert!(offered.iter().all(|verb| STRONG_ACTION_VERBS.contains(verb)));
    }

    #[test]
    fn negative_constraints_are_flagged() {
        assert_eq!(run(Field::Constraints, "Don't make it too long."), vec![CONSTRAINTS_NEGATIVE]);
        assert_eq!(run(Field::Constraints, "Never exceed a page."), vec![CONSTRAINTS_NEGATIVE]);
        assert!(run(Field::Constraints, "Keep it under a page.").is_empty());
    }

    #[test]
    fn examples_need_an_introducing_phrase() {
        assert!(run(Field::Examples, "For example, do X.").is_empty());
        assert!(run(Field::Examples, "Short names, e.g. Ada.").is_empty());
        assert_eq!(run(Field::Examples, "Do X."), vec![EXAMPLES_MARKER]);
        assert!(run(Field::Examples, "").is_empty());
    }

    #[test]
    fn output_format_needs_a_keyword() {
        assert!(run(Field::OutputFormat, "Respond in JSON.").is_empty());
        assert_eq!(run(Field::OutputFormat, "Make it good."), vec![OUTPUT_FORMAT_VAGUE]);
        assert!(run(Field::OutputFormat, "").is_empty());
    }

    #[test]
    fn literal_checks_see_code_the_parse_does_not() {
        let raw = "```\nprint('json')\n```";
        let doc = EnglishToolkit::new().parse(&crate::fence::strip_code_blocks(raw));
        assert!(output_format(raw).is_empty());
        assert!(doc.is_empty());
    }
}
