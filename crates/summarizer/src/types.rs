use serde::{Deserialize, Serialize};

/// A sentence paired with its keyword score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Sentence text
    pub text: String,

    /// Sum of keyword frequencies of the sentence's words
    pub score: usize,
}

impl ScoredSentence {
    /// Create a new scored sentence
    pub fn new(text: impl Into<String>, score: usize) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Summarization result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Lead summary (first sentences joined), empty when there is no text
    pub summary: String,

    /// Top-scoring sentences in input order
    pub bullet_points: Vec<String>,
}

impl SummaryResult {
    /// Create new summary result
    pub fn new(summary: String, bullet_points: Vec<String>) -> Self {
        Self {
            summary,
            bullet_points,
        }
    }

    /// True when neither a summary nor bullet points were produced
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.bullet_points.is_empty()
    }
}
