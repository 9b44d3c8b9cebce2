//! Text produced from a draft for the user: the final prompt, its size, a
//! Markdown export, and the reverse parse of a pasted final prompt.

use serde::{Deserialize, Serialize};

use crate::models::{Field, PromptDraft};

/// Size of a composed prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStats {
    /// Whitespace-delimited words.
    pub tokens: usize,
    /// Unicode scalar values.
    pub chars: usize,
}

impl PromptStats {
    pub fn of(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

/// `"<Label>: <value>"` for each section, in order, separated by blank lines.
pub fn final_prompt(draft: &PromptDraft) -> String {
    draft
        .fields()
        .map(|(field, value)| format!("{}: {}", field.label(), value))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// `"## <Heading>\n<value>"` for each section, separated by blank lines.
pub fn markdown(draft: &PromptDraft) -> String {
    draft
        .fields()
        .map(|(field, value)| format!("## {}\n{}", field.heading(), value))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// Recovers the sections of a pasted final prompt.
///
/// A line starting with a section label and a colon opens that section; the
/// rest of the line and every following line belong to it until another label
/// line. Labels inside fenced code, and labels of sections already read, are
/// content. Text before the first label is ignored; absent sections are empty.
pub fn parse_structured(text: &str) -> PromptDraft {
    let mut sections: [Option<Vec<&str>>; 6] = Default::default();
    let mut current: Option<usize> = None;
    let mut in_fence = false;

    for line in text.lines() {
        if !in_fence {
            if let Some((field, rest)) = label_line(line) {
                let slot = slot(field);
                if sections[slot].is_none() {
                    sections[slot] = Some(vec![rest]);
                    current = Some(slot);
                    in_fence = opens_fence(rest);
                    continue;
                }
            }
        }
        if opens_fence(line) {
            in_fence = !in_fence;
        }
        if let Some(slot) = current {
            if let Some(lines) = sections[slot].as_mut() {
                lines.push(line);
            }
        }
    }

    let mut draft = PromptDraft::default();
    for field in Field::ALL {
        if let Some(lines) = &sections[slot(field)] {
            draft.set(field, lines.join("\n").trim());
        }
    }
    draft
}

fn label_line(line: &str) -> Option<(Field, &str)> {
    let line = line.trim_start();
    Field::ALL.iter().find_map(|&field| {
        line.strip_prefix(field.label())
            .and_then(|rest| rest.strip_prefix(':'))
            .map(|rest| (field, rest))
    })
}

fn opens_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

fn slot(field: Field) -> usize {
    Field::ALL
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PromptDraft {
        PromptDraft {
            role: "R".into(),
            context: "C".into(),
            objective: "O".into(),
            constraints: "Con".into(),
            examples: "Ex".into(),
            output_format: "OF".into(),
        }
    }

    #[test]
    fn final_prompt_joins_labeled_sections() {
        insta::assert_snapshot!(final_prompt(&sample()), @r###"
        Role: R

        Context: C

        Objective: O

        Constraints: Con

        Examples: Ex

        Output Format: OF
        "###);
    }

    #[test]
    fn stats_match_whitespace_split_and_length() {
        let text = final_prompt(&sample());
        let stats = PromptStats::of(&text);
        assert_eq!(stats.tokens, text.split_whitespace().count());
        assert_eq!(stats.tokens, 13);
        assert_eq!(stats.chars, text.len());
    }

    #[test]
    fn stats_count_characters_not_bytes() {
        assert_eq!(PromptStats::of("café au lait"), PromptStats { tokens: 3, chars: 12 });
    }

    #[test]
    fn markdown_uses_capitalized_keys() {
        insta::assert_snapshot!(markdown(&sample()), @r###"
        ## Role
        R

        ## Context
        C

        ## Objective
        O

        ## Constraints
        Con

        ## Examples
        Ex

        ## OutputFormat
        OF
        "###);
    }

    #[test]
    fn final_prompt_parses_back() {
        let draft = PromptDraft {
            role: "You are a DBA.".into(),
            context: "Schema:\n- users (id)\n\n```sql\nObjective: not a label\nSELECT 1;\n```".into(),
            objective: "Write a query.".into(),
            constraints: "Use PostgreSQL.".into(),
            examples: "For example, a join.".into(),
            output_format: "SQL in a code block.".into(),
        };
        assert_eq!(parse_structured(&final_prompt(&draft)), draft);
    }

    #[test]
    fn missing_and_unknown_labels_yield_empty_sections() {
        let draft = parse_structured("Preamble\nRole: Tutor\nTone: friendly\nObjective: Explain.");
        assert_eq!(draft.role, "Tutor\nTone: friendly");
        assert_eq!(draft.objective, "Explain.");
        assert_eq!(draft.context, "");
        assert_eq!(draft.output_format, "");
    }

    #[test]
    fn labels_may_appear_out_of_order_and_only_at_line_start() {
        let draft = parse_structured("Objective: Ship it. Role: none\nRole: Builder");
        assert_eq!(draft.objective, "Ship it. Role: none");
        assert_eq!(draft.role, "Builder");
    }

    #[test]
    fn repeated_label_is_content() {
        let draft = parse_structured("Examples: one\nExamples: two");
        assert_eq!(draft.examples, "one\nExamples: two");
    }

    #[test]
    fn garbage_input_is_empty_draft() {
        assert_eq!(parse_structured("no labels here"), PromptDraft::default());
        assert_eq!(parse_structured(""), PromptDraft::default());
    }
}
