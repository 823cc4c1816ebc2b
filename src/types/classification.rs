use serde::{Deserialize, Serialize};

/// Score a single subject received for one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: usize,
}

/// The outcome of classifying one text, with the scores that produced it.
///
/// `scores` is in taxonomy declaration order, one entry per subject.
/// `subject` is either a taxonomy subject or [`GENERAL_SUBJECT`](crate::GENERAL_SUBJECT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub subject: String,
    pub scores: Vec<SubjectScore>,
}

impl Classification {
    /// Highest score across all subjects. Zero means the text fell back to General.
    pub fn top_score(&self) -> usize {
        self.scores.iter().map(|s| s.score).max().unwrap_or(0)
    }

    pub fn score_for(&self, subject: &str) -> Option<usize> {
        self.scores
            .iter()
            .find(|s| s.subject == subject)
            .map(|s| s.score)
    }
}
