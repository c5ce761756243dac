mod common;

use std::sync::Arc;

use common::{names, place};
use locsearch::recent::{RecentListManager, RemoveOutcome, SelectOutcome, DEFAULT_RECENT_KEY};
use locsearch::store::MemoryBlobStore;
use locsearch::LocationRecord;

fn manager_with(selected_oldest_first: &[&str]) -> RecentListManager {
    let mut manager = RecentListManager::open(Arc::new(MemoryBlobStore::new()), DEFAULT_RECENT_KEY);
    for name in selected_oldest_first {
        manager.select(place(name));
    }
    manager
}

#[test]
fn select_same_location_twice_keeps_single_entry() {
    let mut manager = manager_with(&[]);
    manager.select(place("x"));
    let before = manager.snapshot();

    assert_eq!(manager.select(place("x")), SelectOutcome::AlreadyMostRecent);
    assert_eq!(manager.snapshot(), before);
    assert_eq!(names(&manager.snapshot()), vec!["x"]);
}

#[test]
fn select_existing_moves_it_to_front() {
    // Selected c, b, a in that order, so the list reads [a, b, c].
    let mut manager = manager_with(&["c", "b", "a"]);
    assert_eq!(names(&manager.snapshot()), vec!["a", "b", "c"]);

    assert_eq!(
        manager.select(place("b")),
        SelectOutcome::MovedToFront { from: 1 }
    );
    assert_eq!(names(&manager.snapshot()), vec!["b", "a", "c"]);
}

#[test]
fn select_new_location_inserts_at_front() {
    let mut manager = manager_with(&["b", "a"]);
    assert_eq!(manager.select(place("c")), SelectOutcome::Inserted);
    assert_eq!(names(&manager.snapshot()), vec!["c", "a", "b"]);
}

#[test]
fn structurally_equal_records_from_different_lookups_dedup() {
    let mut manager = manager_with(&[]);
    let first = LocationRecord::new("Cafe 1", "addr", "cafe", 37.1, 127.1);
    let second = LocationRecord::new(
        String::from("Cafe 1"),
        String::from("addr"),
        String::from("cafe"),
        37.1,
        127.1,
    );

    manager.select(first);
    manager.select(place("other"));
    manager.select(second);

    assert_eq!(names(&manager.snapshot()), vec!["Cafe 1", "other"]);
}

#[test]
fn records_differing_only_in_coordinates_are_distinct() {
    let mut manager = manager_with(&[]);
    manager.select(LocationRecord::new("Cafe", "addr", "cafe", 1.0, 2.0));
    manager.select(LocationRecord::new("Cafe", "addr", "cafe", 1.0, 2.5));
    assert_eq!(manager.len(), 2);
}

#[test]
fn arbitrary_select_sequences_never_duplicate() {
    let pool = ["a", "b", "c", "d", "e", "f"];
    let mut manager = manager_with(&[]);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

    for _ in 0..500 {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let pick = pool[(seed >> 33) as usize % pool.len()];
        manager.select(place(pick));

        let snapshot = manager.snapshot();
        assert_eq!(snapshot[0], place(pick));
        for (i, entry) in snapshot.iter().enumerate() {
            assert!(
                !snapshot[i + 1..].contains(entry),
                "duplicate {} in {:?}",
                entry.name,
                names(&snapshot)
            );
        }
    }
    assert!(manager.len() <= pool.len());
}

#[test]
fn removing_only_entry_signals_empty() {
    let mut manager = manager_with(&["x"]);
    let outcome = manager.remove(&place("x"));

    assert_eq!(
        outcome,
        RemoveOutcome::Removed {
            index: 0,
            now_empty: true
        }
    );
    assert!(manager.snapshot().is_empty());
    assert!(!manager.is_strip_visible());
}

#[test]
fn removing_middle_entry_keeps_order() {
    let mut manager = manager_with(&["c", "b", "a"]);
    let outcome = manager.remove(&place("b"));

    assert_eq!(
        outcome,
        RemoveOutcome::Removed {
            index: 1,
            now_empty: false
        }
    );
    assert!(!outcome.now_empty());
    assert_eq!(names(&manager.snapshot()), vec!["a", "c"]);
}

#[test]
fn removing_absent_entry_is_noop() {
    let mut manager = manager_with(&["a"]);
    assert_eq!(manager.remove(&place("zz")), RemoveOutcome::NotFound);
    assert_eq!(names(&manager.snapshot()), vec!["a"]);
}

#[test]
fn find_by_name_looks_only_at_recent_entries() {
    let manager = manager_with(&["a", "b"]);
    assert_eq!(manager.find_by_name("a"), Some(&place("a")));
    assert!(manager.find_by_name("c").is_none());
}
