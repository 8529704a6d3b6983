//! Store Invariant Tests
//!
//! - Ids are unique and strictly increasing
//! - Records come back from `list` verbatim and in insertion order
//! - The id counter stays consistent under concurrent creates

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::Utc;
use leadline::schema::{validate, LeadSubmissionInput};
use leadline::store::{LeadStore, MemoryLeadStore};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn input(name: &str) -> LeadSubmissionInput {
    validate(&json!({
        "name": name,
        "email": "broker@iso-partners.com",
        "phone": "5551234567"
    }))
    .unwrap()
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_ids_strictly_increasing() {
    let store = MemoryLeadStore::new();
    let ids: Vec<u64> = (0..50)
        .map(|i| store.create(input(&format!("Lead {}", i))).unwrap().id)
        .collect();

    assert_eq!(ids.first(), Some(&1));
    assert!(ids.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_timestamp_is_store_assigned() {
    let store = MemoryLeadStore::new();
    let before = Utc::now();
    let record = store.create(input("Jo")).unwrap();
    let after = Utc::now();

    assert!(record.submitted_at >= before);
    assert!(record.submitted_at <= after);
}

// =============================================================================
// Retrieval
// =============================================================================

#[test]
fn test_empty_store_lists_nothing() {
    let store = MemoryLeadStore::new();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_two_creates_listed_in_order() {
    let store = MemoryLeadStore::new();
    let first = store.create(input("Jo")).unwrap();
    let second = store.create(input("Al")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.list().unwrap(), vec![first, second]);
}

#[test]
fn test_created_record_round_trips() {
    let store = MemoryLeadStore::new();
    let mut details = input("Jo");
    details.project_details = Some("SBA 7(a), $850k".into());

    let created = store.create(details).unwrap();
    let listed = store.list().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].project_details.as_deref(), Some("SBA 7(a), $850k"));
}

/// Listing does not consume or alter records.
#[test]
fn test_list_is_repeatable() {
    let store = MemoryLeadStore::new();
    store.create(input("Jo")).unwrap();
    assert_eq!(store.list().unwrap(), store.list().unwrap());
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_creates_issue_unique_ids() {
    let store = Arc::new(MemoryLeadStore::new());
    let threads = 8;
    let per_thread = 100;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| store.create(input(&format!("T{} L{}", t, i))).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "id {} issued twice", id);
        }
    }

    let total = threads * per_thread;
    assert_eq!(seen.len(), total);
    assert_eq!(store.len().unwrap(), total);

    let listed: Vec<u64> = store.list().unwrap().iter().map(|r| r.id).collect();
    let expected: Vec<u64> = (1..=total as u64).collect();
    assert_eq!(listed, expected);
}
