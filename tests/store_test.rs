mod helpers;

use helpers::person;
use kith::directory::store::{PersonFilter, PersonStore};
use kith::directory::types::Gender::{Female, Male};
use kith::directory::Directory;

fn ages(store: &PersonStore, filter: &PersonFilter) -> Vec<u32> {
    store.filter(filter).iter().map(|p| p.age).collect()
}

#[test]
fn get_returns_every_seeded_record() {
    let directory = Directory::seeded().unwrap();
    let store = directory.store();
    assert!(!store.is_empty());
    for p in store.iter() {
        assert_eq!(store.get(p.id), Some(p));
    }
}

#[test]
fn get_misses_on_unknown_id() {
    let directory = Directory::seeded().unwrap();
    assert_eq!(directory.store().get(9999), None);
}

#[test]
fn empty_filter_returns_every_record_exactly_once() {
    let store = PersonStore::new(vec![
        person(1, "Ann", 19, Female),
        person(2, "Ben", 25, Male),
        person(3, "Cam", 30, Male),
    ]);
    let results = store.filter(&PersonFilter::default());
    let mut ids: Vec<u32> = results.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn inclusive_age_bounds_keep_the_boundaries() {
    let store = PersonStore::new(vec![
        person(1, "Ann", 19, Female),
        person(2, "Ben", 25, Male),
        person(3, "Cam", 30, Male),
        person(4, "Dee", 35, Female),
    ]);
    let filter = PersonFilter {
        min_age: Some(25),
        max_age: Some(30),
        ..Default::default()
    };
    assert_eq!(ages(&store, &filter), vec![25, 30]);
}

#[test]
fn exclusive_age_bounds_drop_the_boundaries() {
    let store = PersonStore::new(vec![
        person(1, "Ann", 25, Female),
        person(2, "Ben", 30, Male),
        person(3, "Cam", 35, Male),
    ]);
    let filter = PersonFilter {
        age_greater_than: Some(25),
        age_less_than: Some(35),
        ..Default::default()
    };
    assert_eq!(ages(&store, &filter), vec![30]);
}

#[test]
fn inclusive_and_exclusive_bounds_on_the_same_side_are_both_honored() {
    let store = PersonStore::new(vec![
        person(1, "Ann", 25, Female),
        person(2, "Ben", 26, Male),
        person(3, "Cam", 30, Male),
    ]);
    // age >= 25 AND age > 25
    let filter = PersonFilter {
        min_age: Some(25),
        age_greater_than: Some(25),
        ..Default::default()
    };
    assert_eq!(ages(&store, &filter), vec![26, 30]);
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let store = PersonStore::new(vec![
        person(1, "Alice", 30, Female),
        person(2, "Alicia", 28, Female),
        person(3, "Bob", 25, Male),
    ]);
    let filter = PersonFilter {
        name_contains: Some("ALI".into()),
        ..Default::default()
    };
    let names: Vec<_> = store.filter(&filter).iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Alice", "Alicia"]);
}

#[test]
fn email_match_is_case_insensitive_substring() {
    let directory = Directory::seeded().unwrap();
    let filter = PersonFilter {
        email_contains: Some("WILSON".into()),
        ..Default::default()
    };
    let results = directory.store().filter(&filter);
    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|p| p.email.to_lowercase().contains("wilson")));
}

#[test]
fn predicates_are_anded() {
    let store = PersonStore::new(vec![
        person(1, "Alice", 30, Female),
        person(2, "Alina", 40, Female),
        person(3, "Bob", 30, Male),
    ]);
    let filter = PersonFilter {
        name_contains: Some("al".into()),
        max_age: Some(35),
        ..Default::default()
    };
    let results = store.filter(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Alice");
}
