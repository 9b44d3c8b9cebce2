//! Closed word classes and the verb lexicon used by the English toolkit.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Base forms recognized as verbs.
static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // generic
        "be", "do", "get", "give", "go", "have", "make", "put", "say", "see", "take",
        // task verbs
        "act", "analyze", "assess", "brainstorm", "build", "classify", "compare", "compose",
        "contrast", "convert", "create", "critique", "debug", "define", "design", "develop",
        "diagnose", "draft", "edit", "evaluate", "explain", "extract", "format", "generate",
        "identify", "illustrate", "improve", "interpret", "invent", "list", "optimize",
        "outline", "paraphrase", "predict", "proofread", "propose", "rank", "rate", "refactor",
        "refine", "rephrase", "restate", "rewrite", "simplify", "solve", "structure", "suggest",
        "summarize", "synthesize", "trace", "transcribe", "transform", "translate",
        // everyday
        "accept", "add", "allow", "answer", "apply", "ask", "avoid", "begin", "break", "bring",
        "call", "change", "check", "choose", "clean", "close", "collect", "come", "compute",
        "consider", "continue", "count", "cover", "cut", "decide", "delete", "describe",
        "determine", "display", "draw", "emphasize", "enable", "ensure", "enter", "estimate",
        "examine", "expand", "explore", "export", "feel", "fetch", "fill", "filter", "find",
        "finish", "fix", "focus", "follow", "forget", "handle", "help", "highlight", "hold",
        "imagine", "implement", "import", "include", "indicate", "insert", "introduce",
        "keep", "know", "learn", "leave", "let", "limit", "look", "love", "maintain", "manage",
        "mark", "match", "mean", "measure", "mention", "merge", "modify", "move", "need",
        "note", "offer", "open", "order", "organize", "output", "pass", "pay", "pick", "place",
        "plan", "play", "prefer", "prepare", "present", "prevent", "print", "produce",
        "provide", "publish", "read", "recommend", "reduce", "remember", "remove", "render",
        "repeat", "replace", "reply", "report", "request", "require", "respond", "return",
        "review", "run", "save", "search", "select", "send", "set", "share", "show", "sort",
        "speak", "specify", "split", "start", "stop", "store", "stress", "submit", "support",
        "talk", "teach", "tell", "test", "think", "treat", "try", "turn", "understand",
        "update", "use", "validate", "verify", "wait", "want", "watch", "work", "write",
        // writing, analysis and engineering tasks
        "adapt", "adjust", "aggregate", "align", "annotate", "argue", "arrange", "assemble",
        "assign", "assume", "audit", "automate", "benchmark", "calculate", "capture",
        "categorize", "cite", "clarify", "cluster", "code", "combine", "comment", "compile",
        "complete", "condense", "configure", "confirm", "construct", "correct", "craft",
        "criticize", "curate", "declare", "decode", "deduplicate", "defend", "demonstrate",
        "deploy", "derive", "detail", "detect", "document", "elaborate", "emulate",
        "encode", "enhance", "enumerate", "establish", "execute", "expose", "express",
        "forecast", "frame", "gather", "group", "guess", "guide", "hypothesize",
        "infer", "inspect", "install", "integrate", "investigate", "itemize", "justify",
        "label", "map", "migrate", "mock", "model", "monitor", "name", "narrate",
        "normalize", "notify", "observe", "obtain", "pair", "parse", "perform", "persuade",
        "pitch", "plot", "polish", "port", "pretend", "prioritize", "process", "profile",
        "program", "prove", "query", "question", "quote", "reason", "recap", "reconcile",
        "record", "recreate", "redesign", "reformat", "rename", "reorder", "reorganize",
        "replicate", "research", "resolve", "restructure", "retrieve", "reverse", "revise",
        "roleplay", "scan", "schedule", "score", "script", "segment", "shorten", "sketch",
        "simulate", "state", "streamline", "study", "style", "summarise", "analyse",
        "organise", "optimise", "prioritise", "categorise", "normalise", "tabulate", "tag",
        "target", "tweak", "tune", "type", "underline", "unify", "visualize", "visualise",
        "weigh", "wrap",
    ]
    .into_iter()
    .collect()
});

/// Inflected forms whose lemma cannot be recovered by suffix stripping.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("is", "be"), ("are", "be"), ("am", "be"), ("was", "be"), ("were", "be"),
        ("been", "be"), ("being", "be"),
        ("has", "have"), ("had", "have"), ("having", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("made", "make"), ("got", "get"), ("gotten", "get"), ("gave", "give"),
        ("given", "give"), ("went", "go"), ("gone", "go"), ("goes", "go"),
        ("took", "take"), ("taken", "take"), ("said", "say"), ("saw", "see"),
        ("seen", "see"), ("wrote", "write"), ("written", "write"), ("told", "tell"),
        ("found", "find"), ("thought", "think"), ("brought", "bring"), ("built", "build"),
        ("chose", "choose"), ("chosen", "choose"), ("drew", "draw"), ("drawn", "draw"),
        ("kept", "keep"), ("knew", "know"), ("known", "know"), ("paid", "pay"),
        ("ran", "run"), ("sent", "send"), ("shown", "show"), ("spoke", "speak"),
        ("spoken", "speak"), ("understood", "understand"), ("began", "begin"),
        ("begun", "begin"), ("broke", "break"), ("broken", "break"), ("came", "come"),
        ("felt", "feel"), ("held", "hold"), ("meant", "mean"), ("taught", "teach"),
    ]
    .into_iter()
    .collect()
});

const SUFFIXES: [(&str, &[&str]); 6] = [
    ("ies", &["y"]),
    ("ied", &["y"]),
    ("ing", &["", "e"]),
    ("ed", &["", "e"]),
    ("es", &[""]),
    ("s", &[""]),
];

pub const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "cannot",
];

pub const AUXILIARIES: &[&str] = &[
    "is", "are", "am", "was", "were", "do", "does", "did", "has", "have", "had",
];

pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "nowhere", "neither", "nor", "cannot",
    "dont", "doesnt", "didnt", "cant", "wont", "isnt", "arent", "shouldnt",
];

pub const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it"];

pub const OBJECT_PRONOUNS: &[&str] = &["me", "us", "them", "him", "it", "everything", "everyone"];

/// Sentence openers that are never commands even when an object follows.
pub const NON_VERB_OPENERS: &[&str] = &[
    "after", "against", "although", "and", "around", "because", "before", "besides", "both",
    "but", "currently", "despite", "during", "even", "except", "here", "however", "if",
    "instead", "like", "meanwhile", "once", "only", "or", "otherwise", "over", "overall",
    "per", "since", "so", "still", "there", "therefore", "though", "through", "thus",
    "today", "tomorrow", "tonight", "under", "unless", "until", "upon", "via", "while",
    "within", "without", "yesterday", "yet", "all", "often", "sometimes", "usually",
    "perhaps", "maybe", "whether", "whereas", "throughout", "beyond", "toward", "towards",
    "whenever", "wherever", "above", "below", "behind", "beside", "among", "inside",
    "outside", "near", "thanks",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "our", "your", "their", "his", "her", "its", "this",
    "these", "those", "each", "every", "some", "any", "no", "another",
];

pub const PREPOSITIONS: &[&str] = &[
    "of", "for", "in", "on", "with", "as", "by", "at", "from", "into", "about", "between",
];

pub const QUESTION_WORDS: &[&str] = &["who", "what", "when", "where", "why", "how", "which", "whom", "whose"];

/// Words that may precede the verb of a command without changing its mood.
pub const LEADING_ADVERBS: &[&str] = &[
    "please", "just", "also", "then", "now", "simply", "kindly", "first", "next", "finally",
    "always", "again", "carefully",
];

/// Abbreviations whose trailing period does not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "inc", "ltd", "corp", "co", "llc", "e.g",
    "i.e", "vs", "etc", "approx", "u.s", "u.k", "p.m", "a.m", "st", "ave", "dept", "fig",
];

pub fn is_verb(word: &str) -> bool {
    VERBS.contains(word)
}

/// `true` for forms listed as irregular inflections (`is`, `made`, ...).
pub fn is_irregular_form(word: &str) -> bool {
    IRREGULAR.contains_key(word)
}

/// Lemmatizes a lowercase word as a verb. Words that are not known verb forms
/// are returned unchanged.
pub fn lemma(word: &str) -> String {
    if let Some(base) = IRREGULAR.get(word) {
        return (*base).to_string();
    }
    if VERBS.contains(word) {
        return word.to_string();
    }
    for (suffix, endings) in SUFFIXES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        for ending in endings {
            let candidate = format!("{}{}", stem, ending);
            if VERBS.contains(candidate.as_str()) {
                return candidate;
            }
        }
        // getting -> get, planned -> plan
        let mut chars = stem.chars().rev();
        if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
            if last == prev {
                let undoubled = &stem[..stem.len() - last.len_utf8()];
                if VERBS.contains(undoubled) {
                    return undoubled.to_string();
                }
            }
        }
    }
    word.to_string()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Splits a negative contraction into its auxiliary and "not"
/// ("can't" -> "can not", "cannot" -> "can not", "isn't" -> "is not").
pub fn expand_contraction(word: &str) -> Option<[String; 2]> {
    let auxiliary = match word {
        "cannot" | "can't" => "can".to_string(),
        "won't" => "will".to_string(),
        "shan't" => "shall".to_string(),
        other => other.strip_suffix("n't").filter(|stem| !stem.is_empty())?.to_string(),
    };
    Some([auxiliary, "not".to_string()])
}

/// Whether an unknown word opening a command may be read as its verb:
/// a plain lowercase word shape that is not an adverb or participle.
pub fn may_be_base_verb(word: &str) -> bool {
    word.len() > 1
        && word.chars().all(char::is_alphabetic)
        && !NON_VERB_OPENERS.contains(&word)
        && !["ly", "ing", "ed"].iter().any(|suffix| word.ends_with(suffix))
}
