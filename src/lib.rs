//! Deterministic keyword-frequency subject classifier for study flashcards.
//!
//! `subject-core` assigns each question/answer pair exactly one subject from
//! an ordered taxonomy by counting whole-word keyword hits. Classification is
//! pure: identical text and taxonomy always produce the same subject, with
//! ties going to the subject declared first. Around the classifier sit an
//! in-memory record store with verified snapshots and a thin request layer
//! that classifies on insert.

pub mod classification;
pub mod service;
pub mod store;
pub mod taxonomy;
pub mod types;

/// Subject returned when no taxonomy keyword matches.
pub const GENERAL_SUBJECT: &str = "General";

pub use classification::SubjectClassifier;
pub use taxonomy::Taxonomy;
