use crate::RecordStore;
use crate::tests::{ana, bruno};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_empty_store_when_append_then_formatted_record_stored() {
    // Given
    let mut store = RecordStore::new();

    // When
    let id = store.append(&ana());

    // Then
    assert_that!(store.len(), eq(1_usize));
    let record = store.get(id).unwrap();
    assert_eq!(record.name, "Ana");
    assert_eq!(record.phone, "(11) 98765-4321");
    assert_eq!(record.cpf, "123.456.789-01");
    assert_eq!(record.email, "ana@example.com");
}

#[test]
fn given_identical_fields_when_appended_twice_then_distinct_ids() {
    let mut store = RecordStore::new();

    let first = store.append(&ana());
    let second = store.append(&ana());

    assert_ne!(first, second);
    assert_that!(store.len(), eq(2_usize));
}

#[test]
fn given_removed_record_when_append_then_id_not_reused() {
    let mut store = RecordStore::new();
    let first = store.append(&ana());
    store.remove(first);

    let second = store.append(&ana());

    assert_ne!(first, second);
}

#[test]
fn given_three_records_when_replace_middle_then_position_kept() {
    // Given
    let mut store = RecordStore::new();
    let a = store.append(&ana());
    let b = store.append(&bruno());
    let c = store.append(&ana());

    // When
    let replaced = store.replace(b, &ana());

    // Then
    assert!(replaced);
    assert_that!(store.position(a), eq(Some(0_usize)));
    assert_that!(store.position(b), eq(Some(1_usize)));
    assert_that!(store.position(c), eq(Some(2_usize)));
    assert_eq!(store.get(b).unwrap().name, "Ana");
}

#[test]
fn given_unknown_id_when_replace_or_remove_then_nothing_changes() {
    let mut store = RecordStore::new();
    let a = store.append(&ana());
    store.remove(a);
    store.append(&bruno());

    assert!(!store.replace(a, &ana()));
    assert!(store.remove(a).is_none());
    assert_that!(store.len(), eq(1_usize));
}

#[test]
fn given_two_identical_records_when_remove_one_then_other_survives() {
    let mut store = RecordStore::new();
    let first = store.append(&ana());
    let second = store.append(&ana());

    let removed = store.remove(first).unwrap();

    assert_eq!(removed.id, first);
    assert!(store.contains(second));
    assert_that!(store.len(), eq(1_usize));
}
