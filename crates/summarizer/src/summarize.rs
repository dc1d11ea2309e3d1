use std::collections::HashSet;
use tracing::debug;

use crate::keywords::{tokenize, KeywordFrequencyTable};
use crate::segment::split_sentences;
use crate::types::{ScoredSentence, SummaryResult};

/// Number of leading sentences joined into the summary
pub const SUMMARY_SENTENCE_COUNT: usize = 2;

/// Number of top-scoring sentences picked as bullet points
pub const BULLET_POINT_COUNT: usize = 3;

/// Summarize text into a lead summary and keyword-ranked bullet points
///
/// Text without any sentence yields an empty result.
pub fn summarize(text: &str) -> SummaryResult {
    let sentences = split_sentences(text);

    if sentences.is_empty() {
        debug!("No sentences found, returning empty summary");
        return SummaryResult::default();
    }

    let summary = sentences
        .iter()
        .take(SUMMARY_SENTENCE_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let table = KeywordFrequencyTable::from_text(text);
    let scored = score_sentences(&sentences, &table);
    let bullet_points = select_bullet_points(&sentences, scored);

    debug!(
        "Selected {} bullet points from {} sentences",
        bullet_points.len(),
        sentences.len()
    );

    SummaryResult::new(summary, bullet_points)
}

/// Score every sentence by the keyword frequencies of its words
///
/// Sentence words are not filtered: stop words and short words simply
/// have no entry in the table and add 0.
pub fn score_sentences(sentences: &[String], table: &KeywordFrequencyTable) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence::new(sentence.as_str(), table.score(&tokenize(sentence))))
        .collect()
}

/// Pick the top-scoring sentence texts and emit them in input order
///
/// Membership is by text, so every occurrence of a selected text is
/// emitted, and duplicates within the top slots take fewer distinct values.
fn select_bullet_points(sentences: &[String], mut scored: Vec<ScoredSentence>) -> Vec<String> {
    // Stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let top: HashSet<&str> = scored
        .iter()
        .take(BULLET_POINT_COUNT)
        .map(|s| s.text.as_str())
        .collect();

    sentences
        .iter()
        .filter(|s| top.contains(s.as_str()))
        .cloned()
        .collect()
}
