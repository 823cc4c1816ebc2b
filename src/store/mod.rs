pub mod item;
pub mod memory;
pub mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

pub use item::{ItemFilter, NewItem, StudyItem};
pub use memory::{ItemStore, MemoryItemStore};
pub use snapshot::{SnapshotManifest, SNAPSHOT_FORMAT_VERSION};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Snapshot integrity error: {0}")]
    Integrity(String),
}
