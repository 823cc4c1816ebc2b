use std::collections::BTreeSet;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ContentHash;
use crate::GENERAL_SUBJECT;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Taxonomy must declare at least one subject")]
    EmptyTaxonomy,
    #[error("Subject name must not be blank")]
    EmptySubjectName,
    #[error("Subject name is reserved: {0}")]
    ReservedSubjectName(String),
    #[error("Duplicate subject: {0}")]
    DuplicateSubject(String),
    #[error("Subject has no keywords: {0}")]
    NoKeywords(String),
    #[error("Subject has a blank keyword: {0}")]
    BlankKeyword(String),
    #[error("Taxonomy parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One subject and the keywords that vote for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered, immutable subject table.
///
/// Declaration order matters: when two subjects tie on score the one declared
/// first wins. Keywords are kept lowercased and trimmed so the classifier can
/// compare them against lowercased text directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    subjects: Vec<SubjectEntry>,
}

#[derive(Deserialize)]
struct RawTaxonomy {
    subjects: Vec<SubjectEntry>,
}

impl Taxonomy {
    /// Validate and normalize a list of subject entries.
    pub fn new(entries: Vec<SubjectEntry>) -> Result<Self, TaxonomyError> {
        if entries.is_empty() {
            return Err(TaxonomyError::EmptyTaxonomy);
        }

        let mut seen = BTreeSet::new();
        let mut subjects = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(TaxonomyError::EmptySubjectName);
            }
            if name.eq_ignore_ascii_case(GENERAL_SUBJECT) {
                return Err(TaxonomyError::ReservedSubjectName(name));
            }
            if !seen.insert(name.clone()) {
                return Err(TaxonomyError::DuplicateSubject(name));
            }
            if entry.keywords.is_empty() {
                return Err(TaxonomyError::NoKeywords(name));
            }

            let mut keywords = Vec::with_capacity(entry.keywords.len());
            for keyword in entry.keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(TaxonomyError::BlankKeyword(name));
                }
                keywords.push(keyword);
            }

            subjects.push(SubjectEntry { name, keywords });
        }

        Ok(Taxonomy { subjects })
    }

    /// Skips validation. Only for tables known to be well-formed at compile time.
    pub(crate) fn from_validated(subjects: Vec<SubjectEntry>) -> Self {
        Taxonomy { subjects }
    }

    /// Convenience constructor from `(subject, keywords)` pairs.
    pub fn from_pairs<S, K>(pairs: impl IntoIterator<Item = (S, Vec<K>)>) -> Result<Self, TaxonomyError>
    where
        S: Into<String>,
        K: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, keywords)| SubjectEntry {
                name: name.into(),
                keywords: keywords.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self::new(entries)
    }

    /// Parse `{"subjects": [{"name": ..., "keywords": [...]}, ...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let raw: RawTaxonomy = serde_json::from_str(json)?;
        Self::new(raw.subjects)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TaxonomyError> {
        let raw: RawTaxonomy = serde_json::from_reader(reader)?;
        Self::new(raw.subjects)
    }

    pub fn entries(&self) -> &[SubjectEntry] {
        &self.subjects
    }

    /// Subject names in declaration order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.name == subject)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Content hash of the canonical JSON form. Order-sensitive.
    pub fn version(&self) -> ContentHash {
        // Serializing plain strings and vecs cannot fail.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        ContentHash::from_content(&bytes)
    }
}

impl<'de> Deserialize<'de> for Taxonomy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawTaxonomy::deserialize(deserializer)?;
        Taxonomy::new(raw.subjects).map_err(serde::de::Error::custom)
    }
}
