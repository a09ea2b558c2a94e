//! Student Store Invariant Tests
//!
//! - Student ids are unique at all times
//! - Insert / update / delete are all-or-nothing, including the file write
//! - Search and filter follow collection order
//! - A saved store reopens to the same collection

use std::fs;

use rosterdb::model::{Performance, StudentFields, StudentPatch, StudentRecord};
use rosterdb::store::{IdGenerator, IdStrategy, StoreError, StudentFilter, StudentStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(name: &str, age: u32, grade: &str, performance: Performance) -> StudentFields {
    StudentFields {
        name: name.to_string(),
        age,
        grade: grade.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        performance,
    }
}

fn insert(store: &mut StudentStore, f: StudentFields) -> String {
    let id = store.generate_student_id();
    store.add_student(StudentRecord::new(id.clone(), f)).unwrap();
    id
}

fn ids(records: &[&StudentRecord]) -> Vec<String> {
    records.iter().map(|r| r.student_id.clone()).collect()
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_round_trip() {
    let mut store = StudentStore::in_memory();
    let record = StudentRecord::new(
        "STU0100",
        fields("Alice Smith", 15, "10A", Performance::Excellent),
    );

    store.add_student(record.clone()).unwrap();
    assert_eq!(store.get_student("STU0100").unwrap(), &record);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut store = StudentStore::in_memory();
    let r1 = StudentRecord::new("STU0001", fields("Alice", 15, "10A", Performance::Good));
    let r2 = StudentRecord::new("STU0001", fields("Bob", 16, "11B", Performance::Average));

    store.add_student(r1.clone()).unwrap();
    let err = store.add_student(r2).unwrap_err();

    assert_eq!(err.code(), "ROSTER_DUPLICATE_ID");
    assert_eq!(store.get_all_students(), std::slice::from_ref(&r1));
}

#[test]
fn test_generated_ids_never_collide() {
    let mut store = StudentStore::with_id_generator(IdGenerator::new("STU", IdStrategy::Uuid));
    for i in 0..200 {
        insert(&mut store, fields(&format!("Student {}", i), 10, "4A", Performance::Good));
    }
    assert_eq!(store.len(), 200);
}

#[test]
fn test_delete_then_get_always_not_found() {
    for population in [1usize, 2, 10] {
        let mut store = StudentStore::in_memory();
        let created: Vec<String> = (0..population)
            .map(|i| insert(&mut store, fields(&format!("S {}", i), 12, "6A", Performance::Good)))
            .collect();

        let victim = &created[population / 2];
        store.delete_student(victim).unwrap();

        assert!(matches!(store.get_student(victim), Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), population - 1);
    }
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_filter_and_semantics() {
    let mut store = StudentStore::in_memory();
    insert(&mut store, fields("Ann", 10, "5A", Performance::Good));
    let middle = insert(&mut store, fields("Ben", 20, "5A", Performance::Good));
    insert(&mut store, fields("Cal", 30, "6B", Performance::Good));

    let found = store.filter_students(&StudentFilter::new().grade("5A").min_age(15));
    assert_eq!(ids(&found), vec![middle]);
}

#[test]
fn test_unset_filter_equals_get_all() {
    let mut store = StudentStore::in_memory();
    insert(&mut store, fields("Ann", 10, "5A", Performance::Good));
    insert(&mut store, fields("Ben", 20, "5A", Performance::Average));

    let all: Vec<&StudentRecord> = store.get_all_students().iter().collect();
    assert_eq!(store.filter_students(&StudentFilter::default()), all);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut store = StudentStore::in_memory();
    let alice = insert(&mut store, fields("Alice Smith", 15, "10A", Performance::Good));
    insert(&mut store, fields("Bob Jones", 15, "10A", Performance::Good));

    assert_eq!(ids(&store.search_students("smith")), vec![alice.clone()]);
    assert_eq!(ids(&store.search_students("ALICE")), vec![alice]);
    assert_eq!(store.search_students("").len(), 2);
}

#[test]
fn test_search_keeps_surrounding_whitespace() {
    let mut store = StudentStore::in_memory();
    let leading = insert(&mut store, fields("Smith Bob", 15, "10A", Performance::Good));
    let trailing = insert(&mut store, fields("Ann Smith", 15, "10A", Performance::Good));

    assert_eq!(ids(&store.search_students(" smith")), vec![trailing]);
    assert_eq!(ids(&store.search_students("smith ")), vec![leading]);
    assert_eq!(store.search_students("  ").len(), 2);
}

#[test]
fn test_update_only_named_fields() {
    let mut store = StudentStore::in_memory();
    let id = insert(&mut store, fields("Alice", 15, "10A", Performance::Good));
    let before = store.get_student(&id).unwrap().clone();

    store
        .update_student(
            &id,
            StudentPatch {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let after = store.get_student(&id).unwrap();
    assert_eq!(after.name, "New Name");
    assert_eq!(
        (after.age, &after.grade, &after.email, after.performance),
        (before.age, &before.grade, &before.email, before.performance)
    );
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_reopen_restores_collection_and_sequence() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("students.json");

    let (kept, deleted) = {
        let mut store = StudentStore::open(&path, IdGenerator::default()).unwrap();
        let a = insert(&mut store, fields("Alice", 15, "10A", Performance::Good));
        let b = insert(&mut store, fields("Bob", 16, "10B", Performance::Average));
        store.delete_student(&b).unwrap();
        (a, b)
    };

    let mut reopened = StudentStore::open(&path, IdGenerator::default()).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get_student(&kept).is_ok());

    let next = reopened.generate_student_id();
    assert_ne!(next, kept);
    assert_ne!(next, deleted);
}

#[test]
fn test_failed_write_rolls_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("students.json");

    let mut store = StudentStore::open(&path, IdGenerator::default()).unwrap();
    let id = insert(&mut store, fields("Alice", 15, "10A", Performance::Good));

    // A directory where the temp file should go makes every save fail
    fs::create_dir(tmp.path().join("students.json.tmp")).unwrap();

    let new_id = store.generate_student_id();
    let err = store
        .add_student(StudentRecord::new(new_id.clone(), fields("Bob", 16, "10B", Performance::Good)))
        .unwrap_err();
    assert_eq!(err.code(), "ROSTER_PERSISTENCE_FAILED");
    assert!(!store.contains(&new_id));

    assert!(store
        .update_student(
            &id,
            StudentPatch {
                age: Some(50),
                ..Default::default()
            }
        )
        .is_err());
    assert_eq!(store.get_student(&id).unwrap().age, 15);

    assert!(store.delete_student(&id).is_err());
    assert!(store.get_student(&id).is_ok());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_corrupted_file_refused() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("students.json");
    {
        let mut store = StudentStore::open(&path, IdGenerator::default()).unwrap();
        insert(&mut store, fields("Alice", 15, "10A", Performance::Good));
    }

    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("Alice", "Mallory")).unwrap();

    let err = StudentStore::open(&path, IdGenerator::default()).unwrap_err();
    assert_eq!(err.code(), "ROSTER_STORE_CORRUPTED");
}
