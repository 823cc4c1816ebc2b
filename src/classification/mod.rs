pub mod matching;
pub mod scoring;

use std::borrow::Borrow;

use crate::taxonomy::Taxonomy;
use crate::types::classification::{Classification, SubjectScore};
use crate::GENERAL_SUBJECT;
pub use matching::count_whole_word;
pub use scoring::{KeywordScorer, Scorer};

/// Maps free text to exactly one subject.
///
/// Pure: no I/O and no interior state, so one instance can be shared freely
/// across threads. `T` is anything that yields a [`Taxonomy`], so callers can
/// hand in an owned table, a reference, or an `Arc`.
#[derive(Debug, Clone)]
pub struct SubjectClassifier<T = Taxonomy, S = KeywordScorer> {
    taxonomy: T,
    scorer: S,
}

impl Default for SubjectClassifier<Taxonomy, KeywordScorer> {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::standard(),
            scorer: KeywordScorer,
        }
    }
}

impl<T> SubjectClassifier<T, KeywordScorer>
where
    T: Borrow<Taxonomy>,
{
    pub fn new(taxonomy: T) -> Self {
        Self {
            taxonomy,
            scorer: KeywordScorer,
        }
    }
}

impl<T, S> SubjectClassifier<T, S>
where
    T: Borrow<Taxonomy>,
    S: Scorer,
{
    pub fn with_scorer(taxonomy: T, scorer: S) -> Self {
        Self { taxonomy, scorer }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy.borrow()
    }

    /// Per-subject scores for `text`, in taxonomy order.
    pub fn scores(&self, text: &str) -> Vec<usize> {
        let normalized = text.to_lowercase();
        self.taxonomy()
            .entries()
            .iter()
            .map(|subject| self.scorer.score(subject, &normalized))
            .collect()
    }

    /// The subject for `text`, or `"General"` when nothing matched.
    pub fn classify(&self, text: &str) -> &str {
        let scores = self.scores(text);
        match first_max(&scores) {
            Some(index) => self.taxonomy().entries()[index].name.as_str(),
            None => GENERAL_SUBJECT,
        }
    }

    /// Same decision as [`classify`](Self::classify), with the scores behind it.
    pub fn explain(&self, text: &str) -> Classification {
        let scores = self.scores(text);
        let winner = first_max(&scores);
        let entries = self.taxonomy().entries();

        let subject = match winner {
            Some(index) => entries[index].name.clone(),
            None => GENERAL_SUBJECT.to_string(),
        };

        Classification {
            subject,
            scores: entries
                .iter()
                .zip(scores)
                .map(|(entry, score)| SubjectScore {
                    subject: entry.name.clone(),
                    score,
                })
                .collect(),
        }
    }
}

/// Index of the first strictly maximal non-zero score.
///
/// Later entries replace the current best only with a strictly greater score,
/// so ties resolve to the earliest declared subject.
fn first_max(scores: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
