use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::classification::SubjectClassifier;
use crate::service::requests::{CreateFlashcard, ListParams, ServiceConfig};
use crate::service::responses::{
    FlashcardCreated, HealthStatus, Listing, MixedListing, SubjectListing, SubjectSummary,
};
use crate::service::ServiceError;
use crate::store::{ItemFilter, ItemStore, NewItem};
use crate::taxonomy::Taxonomy;
use crate::types::classification::Classification;

/// Request layer: validates input, classifies once per new item, and talks to
/// the record store.
#[derive(Debug)]
pub struct FlashcardService<S> {
    classifier: SubjectClassifier,
    store: S,
    config: ServiceConfig,
}

impl<S: ItemStore> FlashcardService<S> {
    pub fn new(taxonomy: Taxonomy, store: S, config: ServiceConfig) -> Self {
        Self {
            classifier: SubjectClassifier::new(taxonomy),
            store,
            config,
        }
    }

    /// Standard taxonomy and `ServiceConfig::v0()`.
    pub fn with_store(store: S) -> Self {
        Self::new(Taxonomy::standard(), store, ServiceConfig::v0())
    }

    pub fn classifier(&self) -> &SubjectClassifier {
        &self.classifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            message: "Smart Flashcard API is running".to_string(),
        }
    }

    pub fn add_flashcard(&mut self, request: CreateFlashcard) -> Result<FlashcardCreated, ServiceError> {
        let student_id = required(request.student_id, "student_id")?;
        let question = required(request.question, "question")?;
        let answer = required(request.answer, "answer")?;

        let combined = format!("{question} {answer}");
        let subject = self.classifier.classify(&combined).to_string();

        let item = self.store.create_item(NewItem {
            owner: student_id,
            question,
            answer,
            subject,
        })?;

        info!(id = %item.id, subject = %item.subject, "flashcard added");

        Ok(FlashcardCreated {
            message: "Flashcard added successfully".to_string(),
            subject: item.subject,
            flashcard_id: item.id,
        })
    }

    /// Newest items of one subject. Unknown subjects yield an empty listing.
    pub fn flashcards_by_subject(
        &self,
        subject: &str,
        params: &ListParams,
    ) -> Result<SubjectListing, ServiceError> {
        let limit = self.capped_limit(params)?;
        let filter = owner_filter(params).subject(subject);
        let flashcards = self.store.list_items(&filter, limit)?;

        Ok(SubjectListing {
            subject: subject.to_string(),
            count: flashcards.len(),
            flashcards,
        })
    }

    pub fn all_flashcards(&self, params: &ListParams) -> Result<Listing, ServiceError> {
        let limit = self.capped_limit(params)?;
        let flashcards = self.store.list_items(&owner_filter(params), limit)?;

        Ok(Listing {
            count: flashcards.len(),
            flashcards,
        })
    }

    /// Random items spread across taxonomy subjects.
    ///
    /// Each subject contributes up to `max(1, limit / subject_count)` items;
    /// the union is shuffled and truncated to `limit`. Items classified as
    /// General never appear here.
    pub fn mixed_flashcards<R: Rng + ?Sized>(
        &self,
        params: &ListParams,
        rng: &mut R,
    ) -> Result<MixedListing, ServiceError> {
        let limit = self.requested_limit(params)?;
        let taxonomy = self.classifier.taxonomy();
        let per_subject = (limit / taxonomy.len()).max(1);

        let mut flashcards = Vec::new();
        let mut subjects_included = Vec::new();

        for subject in taxonomy.subjects() {
            let filter = owner_filter(params).subject(subject);
            let subset = self.store.random_sample(&filter, per_subject, &mut *rng)?;
            if !subset.is_empty() {
                subjects_included.push(subject.to_string());
                flashcards.extend(subset);
            }
        }

        flashcards.shuffle(rng);
        flashcards.truncate(limit);

        debug!(limit, per_subject, returned = flashcards.len(), "mixed feed");

        Ok(MixedListing {
            count: flashcards.len(),
            flashcards,
            subjects_included,
        })
    }

    pub fn subjects(&self) -> Result<SubjectSummary, ServiceError> {
        let subject_counts = self.store.count_by_subject()?;
        let subjects = subject_counts.keys().cloned().collect();

        Ok(SubjectSummary {
            subjects,
            subject_counts,
        })
    }

    /// Run the classifier without touching the store.
    pub fn reclassify(&self, text: &str) -> Classification {
        self.classifier.explain(text)
    }

    fn requested_limit(&self, params: &ListParams) -> Result<usize, ServiceError> {
        match params.limit {
            None => Ok(self.config.default_limit),
            Some(limit) if limit < 1 => Err(ServiceError::InvalidLimit(limit.to_string())),
            Some(limit) => Ok(usize::try_from(limit).unwrap_or(usize::MAX)),
        }
    }

    fn capped_limit(&self, params: &ListParams) -> Result<usize, ServiceError> {
        Ok(self.requested_limit(params)?.min(self.config.max_limit))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::MissingField(field)),
    }
}

fn owner_filter(params: &ListParams) -> ItemFilter {
    match &params.student_id {
        Some(owner) => ItemFilter::all().owner(owner.clone()),
        None => ItemFilter::all(),
    }
}
