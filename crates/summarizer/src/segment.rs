use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Sentence-ending punctuation followed by a whitespace run
fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence boundary regex"))
}

/// Split text into sentences
///
/// A boundary is a whitespace run directly preceded by `.`, `!` or `?`.
/// The punctuation stays with the sentence, the whitespace is dropped.
/// Runs such as `?!` split once, after the last mark.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in boundary_regex().find_iter(text) {
        // The punctuation mark is a single ASCII byte
        let end = boundary.start() + 1;
        push_sentence(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    debug!("Split text into {} sentences", sentences.len());

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() {
        sentences.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("First one. Second one! Third one? Fourth.");
        assert_eq!(
            sentences,
            vec!["First one.", "Second one!", "Third one?", "Fourth."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(split_sentences("hello world"), vec!["hello world"]);
        assert_eq!(split_sentences("  padded text \n"), vec!["padded text"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_run_splits_once() {
        assert_eq!(split_sentences("Wow!!! Really?"), vec!["Wow!!!", "Really?"]);
        assert_eq!(split_sentences("What?! No way."), vec!["What?!", "No way."]);
    }

    #[test]
    fn test_whitespace_run_is_one_boundary() {
        let sentences = split_sentences("One.\n\n  Two.\tThree.");
        assert_eq!(sentences, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        assert_eq!(
            split_sentences("Version 1.2 shipped.Then e.g.this"),
            vec!["Version 1.2 shipped.Then e.g.this"]
        );
    }

    #[test]
    fn test_whitespace_before_punctuation_does_not_split() {
        assert_eq!(split_sentences("Wait . and see"), vec!["Wait .", "and see"]);
        assert_eq!(split_sentences("Wait ,and see"), vec!["Wait ,and see"]);
    }

    #[test]
    fn test_non_ascii_text_kept_verbatim() {
        let sentences = split_sentences("Café au lait. Über alles!");
        assert_eq!(sentences, vec!["Café au lait.", "Über alles!"]);
    }
}
