//! The parsed view of one prompt section.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Part-of-speech and polarity markers attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Verb,
    /// A verb in command mood, leading its sentence.
    Imperative,
    Modal,
    /// Negative polarity: "not", "never", "no", contractions ending in "n't".
    Negative,
    Pronoun,
    Determiner,
    Preposition,
    QuestionWord,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text as written.
    pub text: String,
    /// Lowercased text with typographic apostrophes folded to `'`.
    pub normal: String,
    /// Verb lemma for verbs, `normal` otherwise.
    pub lemma: String,
    pub tags: Vec<Tag>,
}

impl Token {
    pub fn new(text: &str) -> Self {
        let normal = normalize(text);
        Self {
            text: text.to_string(),
            lemma: normal.clone(),
            normal,
            tags: Vec::new(),
        }
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn tag(&mut self, tag: Tag) {
        if !self.has(tag) {
            self.tags.push(tag);
        }
    }

    pub fn untag(&mut self, tag: Tag) {
        self.tags.retain(|t| *t != tag);
    }

    pub fn is_word(&self) -> bool {
        !self.has(Tag::Punctuation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub is_question: bool,
}

impl Sentence {
    pub fn words(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|token| token.is_word())
    }

    pub fn is_imperative(&self) -> bool {
        self.tokens.iter().any(|token| token.has(Tag::Imperative))
    }
}

/// A section of prompt text split into tagged sentences.
///
/// Built by an [`NlpToolkit`](super::NlpToolkit); rules query it and never
/// tokenize text themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    text: String,
    sentences: Vec<Sentence>,
}

impl ParsedDocument {
    pub fn new(text: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            text: text.into(),
            sentences,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn has_question(&self) -> bool {
        self.sentences.iter().any(|s| s.is_question)
    }

    pub fn has_imperative(&self) -> bool {
        self.sentences.iter().any(Sentence::is_imperative)
    }

    pub fn verbs(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens().filter(|token| token.has(Tag::Verb))
    }

    pub fn first_verb(&self) -> Option<&Token> {
        self.verbs().next()
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tokens().any(|token| token.has(tag))
    }

    /// Case-insensitive, whole-word phrase match within a sentence. Punctuation
    /// between the phrase's words is ignored.
    pub fn has_phrase(&self, phrase: &str) -> bool {
        let wanted: Vec<String> = phrase.unicode_words().map(normalize).collect();
        if wanted.is_empty() {
            return false;
        }
        self.sentences.iter().any(|sentence| {
            let words: Vec<&str> = sentence.words().map(|t| t.normal.as_str()).collect();
            words
                .windows(wanted.len())
                .any(|window| window.iter().zip(&wanted).all(|(have, want)| *have == want.as_str()))
        })
    }

    /// Case-insensitive substring test against the source text.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(&needle.to_lowercase())
    }

    pub fn is_match(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.text)
    }

    fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}
