pub mod classification;
pub mod identifiers;

pub use classification::{Classification, SubjectScore};
pub use identifiers::{ContentHash, ItemId};
