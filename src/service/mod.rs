pub mod flashcards;
pub mod requests;
pub mod responses;

use thiserror::Error;

use crate::store::StoreError;
pub use flashcards::FlashcardService;
pub use requests::{CreateFlashcard, ListParams, ServiceConfig};
pub use responses::{FlashcardCreated, HealthStatus, Listing, MixedListing, SubjectListing, SubjectSummary};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
