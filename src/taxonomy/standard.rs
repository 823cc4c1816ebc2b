use super::taxonomy::{SubjectEntry, Taxonomy};

/// The built-in subject table, in tie-break order.
const STANDARD_SUBJECTS: &[(&str, &[&str])] = &[
    (
        "Physics",
        &["force", "acceleration", "energy", "motion", "wave", "electricity", "gravity", "newton", "velocity"],
    ),
    (
        "Chemistry",
        &["atom", "molecule", "reaction", "acid", "base", "compound", "element", "periodic"],
    ),
    (
        "Biology",
        &["cell", "photosynthesis", "ecosystem", "dna", "evolution", "gene", "plant", "organism"],
    ),
    (
        "Mathematics",
        &["equation", "algebra", "calculus", "geometry", "statistics", "number", "integral"],
    ),
    (
        "History",
        &["war", "empire", "revolution", "ancient", "battle", "king", "historical", "colonial"],
    ),
    (
        "Geography",
        &["continent", "country", "mountain", "river", "ocean", "climate", "landform", "region"],
    ),
    (
        "Literature",
        &["novel", "poem", "author", "prose", "drama", "literary", "character", "metaphor"],
    ),
    (
        "Computer Science",
        &["programming", "algorithm", "data structure", "loop", "python", "variable", "array"],
    ),
];

impl Taxonomy {
    /// Physics, Chemistry, Biology, Mathematics, History, Geography,
    /// Literature, Computer Science.
    pub fn standard() -> Self {
        let subjects = STANDARD_SUBJECTS
            .iter()
            .map(|(name, keywords)| SubjectEntry {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();

        Self::from_validated(subjects)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
