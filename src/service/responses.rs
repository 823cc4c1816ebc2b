use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::StudyItem;
use crate::types::identifiers::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardCreated {
    pub message: String,
    pub subject: String,
    pub flashcard_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectListing {
    pub subject: String,
    pub count: usize,
    pub flashcards: Vec<StudyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub count: usize,
    pub flashcards: Vec<StudyItem>,
}

/// A shuffled feed drawn across subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedListing {
    pub count: usize,
    pub flashcards: Vec<StudyItem>,
    /// Subjects that contributed at least one item, in taxonomy order.
    pub subjects_included: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subjects: Vec<String>,
    pub subject_counts: BTreeMap<String, usize>,
}
