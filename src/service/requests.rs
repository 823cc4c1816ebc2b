use serde::{Deserialize, Serialize};

use crate::service::ServiceError;

/// Body of an add-flashcard request. Fields are optional so that a missing
/// field surfaces as [`ServiceError::MissingField`] instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateFlashcard {
    pub student_id: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl CreateFlashcard {
    pub fn new(
        student_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            student_id: Some(student_id.into()),
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

/// Query parameters shared by the listing operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub student_id: Option<String>,
}

impl ListParams {
    pub fn limit(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            student_id: None,
        }
    }

    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Build params from raw query-string values.
    pub fn parse(limit: Option<&str>, student_id: Option<&str>) -> Result<Self, ServiceError> {
        Ok(Self {
            limit: Self::parse_limit(limit)?,
            student_id: student_id
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }

    pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, ServiceError> {
        match raw {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ServiceError::InvalidLimit(raw.to_string())),
        }
    }
}

// Loaded next to the taxonomy; v0() pins the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Limit used when a request does not give one.
    pub default_limit: usize,
    /// Upper bound applied to newest-first listings.
    pub max_limit: usize,
}

impl ServiceConfig {
    pub fn v0() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::v0()
    }
}
