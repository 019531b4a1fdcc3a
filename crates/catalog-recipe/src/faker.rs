//! # Fake Data
//!
//! The catalog never invents ids, timestamps or category names itself; it asks a
//! [`DataGenerator`]. [`FakeData`] is the production implementation. Tests inject
//! deterministic generators through the same trait.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Department names handed out as category names.
const DEPARTMENTS: &[&str] = &[
    "Automotive",
    "Baby",
    "Beauty",
    "Books",
    "Clothing",
    "Computers",
    "Electronics",
    "Games",
    "Garden",
    "Grocery",
    "Health",
    "Home",
    "Industrial",
    "Jewelery",
    "Kids",
    "Movies",
    "Music",
    "Outdoors",
    "Shoes",
    "Sports",
    "Tools",
    "Toys",
];

/// How far back a "recent" timestamp may lie.
const RECENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Source of generated record data.
pub trait DataGenerator: Send + Sync {
    /// A fresh identifier. Must not repeat within the process.
    fn uuid(&self) -> String;

    /// A current or recent timestamp.
    fn recent(&self) -> DateTime<Utc>;

    /// A human-readable department name.
    fn department(&self) -> String;
}

/// Random data: v4 UUIDs, timestamps within the last day, department names from a fixed table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeData;

impl DataGenerator for FakeData {
    fn uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn recent(&self) -> DateTime<Utc> {
        let offset = rand::thread_rng().gen_range(0..RECENT_WINDOW_SECS);
        Utc::now() - Duration::seconds(offset)
    }

    fn department(&self) -> String {
        DEPARTMENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("General")
            .to_string()
    }
}

/// Deterministic data: numbered ids, one fixed timestamp, one department name.
///
/// Ids look like `{prefix}-1`, `{prefix}-2`, ... Useful wherever output must be
/// repeatable.
#[derive(Debug)]
pub struct SequenceData {
    prefix: String,
    next: AtomicU64,
    at: DateTime<Utc>,
    department: String,
}

impl SequenceData {
    pub fn new(
        prefix: impl Into<String>,
        at: DateTime<Utc>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
            at,
            department: department.into(),
        }
    }
}

impl DataGenerator for SequenceData {
    fn uuid(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }

    fn recent(&self) -> DateTime<Utc> {
        self.at
    }

    fn department(&self) -> String {
        self.department.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuids_are_unique_and_parse() {
        let ids: HashSet<String> = (0..100).map(|_| FakeData.uuid()).collect();
        assert_eq!(ids.len(), 100);
        for id in &ids {
            assert!(Uuid::parse_str(id).is_ok());
        }
    }

    #[test]
    fn test_recent_is_within_the_last_day() {
        let now = Utc::now();
        for _ in 0..50 {
            let ts = FakeData.recent();
            assert!(ts <= Utc::now());
            assert!(ts >= now - Duration::seconds(RECENT_WINDOW_SECS + 1));
        }
    }

    #[test]
    fn test_sequence_data_is_repeatable() {
        let at = Utc::now();
        let data = SequenceData::new("product", at, "Toys");
        assert_eq!(data.uuid(), "product-1");
        assert_eq!(data.uuid(), "product-2");
        assert_eq!(data.recent(), at);
        assert_eq!(data.department(), "Toys");
    }

    #[test]
    fn test_department_comes_from_table() {
        for _ in 0..50 {
            let name = FakeData.department();
            assert!(DEPARTMENTS.contains(&name.as_str()));
        }
    }
}
