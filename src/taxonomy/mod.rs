pub mod standard;
pub mod taxonomy;

pub use taxonomy::{SubjectEntry, Taxonomy, TaxonomyError};
