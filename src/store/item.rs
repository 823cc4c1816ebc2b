use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::ItemId;

/// A persisted question/answer pair with its assigned subject.
///
/// Created once by the store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyItem {
    pub id: ItemId,
    #[serde(rename = "student_id")]
    pub owner: String,
    pub question: String,
    pub answer: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the store needs to create an item. The subject is already fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub owner: String,
    pub question: String,
    pub answer: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub subject: Option<String>,
    pub owner: Option<String>,
}

impl ItemFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn matches(&self, item: &StudyItem) -> bool {
        self.subject.as_deref().map_or(true, |s| item.subject == s)
            && self.owner.as_deref().map_or(true, |o| item.owner == o)
    }
}
