use crate::classification::matching::count_whole_word;
use crate::taxonomy::SubjectEntry;

pub trait Scorer {
    /// Score one subject against text that has already been lowercased.
    fn score(&self, subject: &SubjectEntry, normalized_text: &str) -> usize;
}

/// Sum of whole-word occurrence counts over the subject's keywords.
///
/// Repeated keywords count every time they appear.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(&self, subject: &SubjectEntry, normalized_text: &str) -> usize {
        subject
            .keywords
            .iter()
            .map(|keyword| count_whole_word(normalized_text, keyword))
            .sum()
    }
}
