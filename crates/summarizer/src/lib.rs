//! textdigest Summarizer
//!
//! Extractive summarization by keyword frequency: sentence segmentation,
//! sentence scoring and top-sentence selection. Pure functions, no I/O.

mod format;
mod keywords;
mod segment;
mod summarize;
mod types;

pub use format::{format_output, NO_BULLET_POINTS, NO_SUMMARY};
pub use keywords::{is_keyword, is_stop_word, tokenize, KeywordFrequencyTable, STOP_WORDS};
pub use segment::split_sentences;
pub use summarize::{score_sentences, summarize, BULLET_POINT_COUNT, SUMMARY_SENTENCE_COUNT};
pub use types::{ScoredSentence, SummaryResult};
