#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use subject_core::store::{MemoryItemStore, NewItem};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Store whose clock advances one second per created item.
pub fn ticking_store() -> MemoryItemStore {
    let tick = AtomicI64::new(0);
    MemoryItemStore::with_clock(move || base_time() + Duration::seconds(tick.fetch_add(1, Ordering::SeqCst)))
}

/// Store whose clock never moves.
pub fn frozen_store() -> MemoryItemStore {
    MemoryItemStore::with_clock(base_time)
}

pub fn new_item(owner: &str, question: &str, subject: &str) -> NewItem {
    NewItem {
        owner: owner.to_string(),
        question: question.to_string(),
        answer: format!("answer to {question}"),
        subject: subject.to_string(),
    }
}
