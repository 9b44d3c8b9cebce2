//! Fixed word catalogs consulted by the rules.

/// Vague or hedging phrases flagged in every section.
pub const HEDGING_PHRASES: &[&str] = &[
    "a bit",
    "a little",
    "almost",
    "apparently",
    "appear",
    "around",
    "basically",
    "can",
    "could",
    "essentially",
    "fairly",
    "hopefully",
    "in a sense",
    "in my opinion",
    "just",
    "kind of",
    "largely",
    "likely",
    "mainly",
    "may",
    "maybe",
    "might",
    "mostly",
    "often",
    "overall",
    "perhaps",
    "possibly",
    "pretty",
    "probably",
    "quite",
    "rather",
    "really",
    "relatively",
    "roughly",
    "seems",
    "should",
    "sometimes",
    "somewhat",
    "sort of",
    "suggests",
    "supposedly",
    "tend to",
    "typically",
];

/// Low-specificity verbs flagged when they lead the Objective.
pub const GENERIC_VERBS: &[&str] = &[
    "be", "do", "get", "give", "go", "have", "make", "put", "say", "see", "take",
];

/// Task-oriented verbs offered as replacements for a generic verb.
pub const STRONG_ACTION_VERBS: &[&str] = &[
    "act as",
    "analyze",
    "assess",
    "brainstorm",
    "build",
    "classify",
    "compare",
    "compose",
    "contrast",
    "convert",
    "create",
    "critique",
    "debug",
    "define",
    "design",
    "develop",
    "diagnose",
    "draft",
    "edit",
    "evaluate",
    "explain",
    "extract",
    "format",
    "generate",
    "identify",
    "illustrate",
    "improve",
    "interpret",
    "invent",
    "list",
    "optimize",
    "outline",
    "paraphrase",
    "predict",
    "proofread",
    "propose",
    "rank",
    "rate",
    "refactor",
    "refine",
    "rephrase",
    "restate",
    "rewrite",
    "simplify",
    "solve",
    "structure",
    "suggest",
    "summarize",
    "synthesize",
    "trace",
    "transcribe",
    "transform",
    "translate",
];

/// Format descriptors that satisfy the Output Format rule.
pub const OUTPUT_FORMAT_KEYWORDS: &[&str] = &[
    "array",
    "article",
    "blog post",
    "bullet points",
    "chart",
    "code block",
    "csv",
    "email",
    "essay",
    "html",
    "javascript",
    "json",
    "json object",
    "list",
    "markdown",
    "numbered list",
    "object",
    "paragraph",
    "poem",
    "python",
    "report",
    "script",
    "sql",
    "table",
    "text",
    "typescript",
    "xml",
    "yaml",
];

/// Literal markers that introduce an example.
pub const EXAMPLE_MARKERS: &[&str] = &["e.g.", "i.e.", "for example"];
