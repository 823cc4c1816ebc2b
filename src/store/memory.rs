use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::store::item::{ItemFilter, NewItem, StudyItem};
use crate::store::StoreError;
use crate::types::identifiers::ItemId;

/// The record store consumed by the request layer.
pub trait ItemStore {
    fn create_item(&mut self, item: NewItem) -> Result<StudyItem, StoreError>;

    /// Matching items, newest first, at most `limit` of them.
    fn list_items(&self, filter: &ItemFilter, limit: usize) -> Result<Vec<StudyItem>, StoreError>;

    /// Up to `count` distinct matching items chosen uniformly at random.
    fn random_sample<R: Rng + ?Sized>(
        &self,
        filter: &ItemFilter,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<StudyItem>, StoreError>;

    fn count_by_subject(&self) -> Result<BTreeMap<String, usize>, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Vector-backed store. Items are kept in insertion (id) order.
pub struct MemoryItemStore {
    pub(crate) items: Vec<StudyItem>,
    pub(crate) next_id: ItemId,
    clock: Clock,
}

impl std::fmt::Debug for MemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryItemStore")
            .field("items", &self.items.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Store whose `created_at` timestamps come from `clock`.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            items: Vec::new(),
            next_id: ItemId::new(1),
            clock: Box::new(clock),
        }
    }

    /// Rebuild a store from previously persisted items.
    pub(crate) fn from_items(mut items: Vec<StudyItem>) -> Self {
        items.sort_by_key(|item| item.id);
        let next_id = items
            .last()
            .map_or(ItemId::new(1), |item| item.id.next());

        let mut store = Self::new();
        store.items = items;
        store.next_id = next_id;
        store
    }

    pub fn items(&self) -> &[StudyItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&StudyItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|index| &self.items[index])
    }
}

/// Newest first: `created_at` descending, then id descending.
fn newest_first(a: &StudyItem, b: &StudyItem) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

impl ItemStore for MemoryItemStore {
    fn create_item(&mut self, item: NewItem) -> Result<StudyItem, StoreError> {
        let id = self.next_id;
        let created = StudyItem {
            id,
            owner: item.owner,
            question: item.question,
            answer: item.answer,
            subject: item.subject,
            created_at: (self.clock)(),
        };

        self.next_id = id.next();
        self.items.push(created.clone());

        debug!(id = %created.id, subject = %created.subject, "stored study item");
        Ok(created)
    }

    fn list_items(&self, filter: &ItemFilter, limit: usize) -> Result<Vec<StudyItem>, StoreError> {
        let mut matching: Vec<&StudyItem> = self.items.iter().filter(|item| filter.matches(item)).collect();
        matching.sort_by(|a, b| newest_first(a, b));

        Ok(matching.into_iter().take(limit).cloned().collect())
    }

    fn random_sample<R: Rng + ?Sized>(
        &self,
        filter: &ItemFilter,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<StudyItem>, StoreError> {
        let matching: Vec<&StudyItem> = self.items.iter().filter(|item| filter.matches(item)).collect();

        Ok(matching
            .choose_multiple(rng, count)
            .map(|item| (*item).clone())
            .collect())
    }

    fn count_by_subject(&self) -> Result<BTreeMap<String, usize>, StoreError> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.subject.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
