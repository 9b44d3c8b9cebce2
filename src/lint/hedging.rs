use super::catalog::HEDGING_PHRASES;
use crate::nlp::ParsedDocument;

/// One message per hedging phrase found in the document, in catalog order.
pub fn detect(doc: &ParsedDocument) -> Vec<String> {
    HEDGING_PHRASES
        .iter()
        .filter(|phrase| doc.has_phrase(phrase))
        .map(|phrase| message(phrase))
        .collect()
}

pub fn message(phrase: &str) -> String {
    format!("Avoid vague language like \"{}\".", phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EnglishToolkit, NlpToolkit};

    fn detect_in(text: &str) -> Vec<String> {
        detect(&EnglishToolkit::new().parse(text))
    }

    #[test]
    fn flags_each_distinct_phrase_once() {
        let issues = detect_in("Basically it is basically fine. It is sort of done, basically.");
        assert_eq!(issues, vec![message("basically"), message("sort of")]);
    }

    #[test]
    fn matches_case_insensitively_on_word_boundaries() {
        assert_eq!(detect_in("PERHAPS."), vec![message("perhaps")]);
        assert!(detect_in("Justify the canvas rather").contains(&message("rather")));
        assert!(!detect_in("Justify the canvas.").contains(&message("just")));
        assert!(!detect_in("Justify the canvas.").contains(&message("can")));
    }

    #[test]
    fn negative_contractions_still_hedge() {
        assert_eq!(detect_in("You cannot exceed a page."), vec![message("can")]);
        assert_eq!(detect_in("It shouldn\u{2019}t rhyme."), vec![message("should")]);
    }

    #[test]
    fn precise_text_has_no_hedging() {
        assert!(detect_in("Return a JSON array of three strings.").is_empty());
        assert!(detect_in("").is_empty());
    }
}
