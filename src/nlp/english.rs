//! Rule-based English toolkit.
//!
//! Tokenization follows Unicode word boundaries. Sentences end at `.`, `?`,
//! `!` and line breaks; a period after a known abbreviation does not end a
//! sentence. Negative contractions are expanded ("can't" reads as "can not").
//! Words are tagged from closed word classes and a verb lexicon, and the verb
//! leading a sentence (after "please", "just", "don't", ...) is marked
//! imperative. An unknown word leading a sentence right before its object is
//! taken to be that verb.

use unicode_segmentation::UnicodeSegmentation;

use super::document::{ParsedDocument, Sentence, Tag, Token};
use super::lexicon::{self, ABBREVIATIONS, AUXILIARIES, DETERMINERS, LEADING_ADVERBS, MODALS};
use super::lexicon::{OBJECT_PRONOUNS, PREPOSITIONS, QUESTION_WORDS, SUBJECT_PRONOUNS};
use super::NlpToolkit;

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishToolkit;

impl EnglishToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl NlpToolkit for EnglishToolkit {
    fn name(&self) -> &str {
        "english"
    }

    fn parse(&self, text: &str) -> ParsedDocument {
        let sentences = segment(text).into_iter().map(tag_sentence).collect();
        ParsedDocument::new(text, sentences)
    }
}

fn segment(text: &str) -> Vec<Vec<Token>> {
    let mut sentences = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for piece in text.split_word_bounds() {
        if piece.chars().all(char::is_whitespace) {
            if piece.contains('\n') {
                flush(&mut sentences, &mut current);
            }
            continue;
        }

        let mut token = Token::new(piece);
        let is_word = piece.chars().any(char::is_alphanumeric);
        if is_word {
            if let Some(parts) = lexicon::expand_contraction(&token.normal) {
                current.extend(parts.iter().map(|part| Token::new(part)));
                continue;
            }
        } else {
            token.tag(Tag::Punctuation);
        }
        let ends_sentence = !is_word
            && matches!(piece, "." | "?" | "!" | "\u{2026}")
            && !(piece == "." && follows_abbreviation(&current));

        current.push(token);
        if ends_sentence {
            flush(&mut sentences, &mut current);
        }
    }
    flush(&mut sentences, &mut current);
    sentences
}

/// Keeps only sentences with at least one word.
fn flush(sentences: &mut Vec<Vec<Token>>, current: &mut Vec<Token>) {
    let tokens = std::mem::take(current);
    if tokens.iter().any(Token::is_word) {
        sentences.push(tokens);
    }
}

fn follows_abbreviation(tokens: &[Token]) -> bool {
    tokens
        .last()
        .map_or(false, |token| ABBREVIATIONS.contains(&token.normal.as_str()))
}

fn tag_sentence(mut tokens: Vec<Token>) -> Sentence {
    let mut previous: Option<usize> = None;
    for index in 0..tokens.len() {
        if !tokens[index].is_word() {
            continue;
        }
        let after_noun_marker = previous.map_or(false, |p| {
            tokens[p].has(Tag::Determiner) || tokens[p].has(Tag::Preposition)
        });
        tag_word(&mut tokens[index], after_noun_marker);
        previous = Some(index);
    }

    unmark_do_support(&mut tokens);
    mark_imperative(&mut tokens);
    let is_question = is_question(&tokens);
    Sentence { tokens, is_question }
}

fn tag_word(token: &mut Token, after_noun_marker: bool) {
    let word = token.normal.clone();
    let word = word.as_str();

    if lexicon::is_negation(word) {
        token.tag(Tag::Negative);
    }
    if MODALS.contains(&word) {
        token.tag(Tag::Modal);
        return;
    }
    if SUBJECT_PRONOUNS.contains(&word) {
        token.tag(Tag::Pronoun);
        return;
    }
    if DETERMINERS.contains(&word) {
        token.tag(Tag::Determiner);
        return;
    }
    if PREPOSITIONS.contains(&word) {
        token.tag(Tag::Preposition);
        return;
    }
    if QUESTION_WORDS.contains(&word) {
        token.tag(Tag::QuestionWord);
        return;
    }
    // "the list", "for example": a noun slot
    if after_noun_marker {
        return;
    }

    let lemma = lexicon::lemma(word);
    if lexicon::is_irregular_form(word) || lexicon::is_verb(&lemma) {
        token.lemma = lemma;
        token.tag(Tag::Verb);
    }
}

/// "do" in "do not ..." is an auxiliary, not the sentence's verb.
fn unmark_do_support(tokens: &mut [Token]) {
    let words: Vec<usize> = word_indices(tokens);
    for pair in words.windows(2) {
        let (aux, next) = (pair[0], pair[1]);
        if matches!(tokens[aux].normal.as_str(), "do" | "does" | "did") && tokens[next].normal == "not" {
            let token = &mut tokens[aux];
            token.untag(Tag::Verb);
            token.lemma = token.normal.clone();
        }
    }
}

fn word_indices(tokens: &[Token]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_word())
        .map(|(index, _)| index)
        .collect()
}

fn mark_imperative(tokens: &mut [Token]) {
    let words = word_indices(tokens);

    let mut at = 0;
    while at < words.len() && LEADING_ADVERBS.contains(&tokens[words[at]].normal.as_str()) {
        at += 1;
    }
    let Some(&lead) = words.get(at) else {
        return;
    };

    let verb_at = match tokens[lead].normal.as_str() {
        "dont" | "never" => at + 1,
        "do" if words.get(at + 1).map_or(false, |&i| tokens[i].normal == "not") => at + 2,
        _ => at,
    };
    let Some(&candidate) = words.get(verb_at) else {
        return;
    };
    if !lexicon::is_verb(&tokens[candidate].normal) && !reads_as_command(tokens, candidate) {
        return;
    }

    // "Do you ...", "Have they ...", "Be it ..." open questions, not commands.
    if matches!(tokens[candidate].normal.as_str(), "do" | "have" | "be") {
        let subject_follows = words
            .get(verb_at + 1)
            .map_or(false, |&i| tokens[i].has(Tag::Pronoun));
        if subject_follows {
            return;
        }
    }

    let verb = &mut tokens[candidate];
    verb.lemma = verb.normal.clone();
    verb.tag(Tag::Verb);
    verb.tag(Tag::Imperative);
}

/// "Calculate the totals", "Ping them": an untagged word directly followed by
/// a determiner or pronoun.
fn reads_as_command(tokens: &[Token], at: usize) -> bool {
    let word = &tokens[at];
    if !word.tags.is_empty() || !lexicon::may_be_base_verb(&word.normal) {
        return false;
    }
    tokens.get(at + 1).map_or(false, |next| {
        next.has(Tag::Determiner)
            || next.has(Tag::Pronoun)
            || OBJECT_PRONOUNS.contains(&next.normal.as_str())
    })
}

fn is_question(tokens: &[Token]) -> bool {
    let mut terminated = false;
    for token in tokens.iter().rev().take_while(|token| !token.is_word()) {
        match token.text.as_str() {
            "?" => return true,
            "." | "!" | "\u{2026}" => terminated = true,
            _ => {}
        }
    }
    if terminated {
        return false;
    }

    let mut words = tokens.iter().filter(|token| token.is_word());
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => {
            let is_aux = |token: &Token| {
                token.has(Tag::Modal) || AUXILIARIES.contains(&token.normal.as_str())
            };
            (first.has(Tag::QuestionWord) && is_aux(second))
                || (is_aux(first) && second.has(Tag::Pronoun))
        }
        _ => false,
    }
}
