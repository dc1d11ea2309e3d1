use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Common English words ignored when counting keywords
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "of", "a", "for", "on", "with",
    "as", "by", "at", "it", "this", "that", "from", "be", "are", "an",
];

/// Words up to this length never count as keywords
const MAX_SHORT_WORD_LEN: usize = 2;

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z']+").expect("word regex"))
}

/// Extract words from text
///
/// The text is lowercased first, then every maximal run of ASCII letters
/// and apostrophes is a word. Other characters only separate words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check if a word is in the stop-word list
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Check if a (lowercased) word counts toward keyword frequency
pub fn is_keyword(word: &str) -> bool {
    word.len() > MAX_SHORT_WORD_LEN && !is_stop_word(word)
}

/// Keyword occurrence counts over a whole text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl KeywordFrequencyTable {
    /// Count the keywords of a text
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for word in tokenize(text) {
            if is_keyword(&word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        debug!("Built keyword table with {} distinct keywords", counts.len());

        Self { counts }
    }

    /// Occurrences of a word, 0 when it is not a keyword of the text
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of the counts of every word in `words`
    pub fn score<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words.iter().map(|w| self.count(w.as_ref())).sum()
    }
}
