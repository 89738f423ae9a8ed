use super::common::*;
use crate::decision::domain::Direction;
use crate::decision::store::{InMemoryStore, ScoreLookup, ScoreStore, StoreError};

#[test]
fn upsert_criterion_replaces_by_name_and_keeps_position() {
    let mut store = InMemoryStore::new();
    assert!(store.upsert_criterion(criterion("Performance", 0.5, Direction::Benefit)));
    assert!(store.upsert_criterion(criterion("Cost", 0.5, Direction::Cost)));
    assert!(!store.upsert_criterion(criterion("Performance", 0.6, Direction::Benefit)));

    let criteria = store.criteria();
    assert_eq!(criteria.len(), 2);
    assert_eq!(criteria[0].name, "Performance");
    assert_eq!(criteria[0].weight, 0.6);
}

#[test]
fn set_score_requires_registered_framework_and_criterion() {
    let mut store = InMemoryStore::new();
    store.upsert_criterion(criterion("Performance", 1.0, Direction::Benefit));
    store.upsert_framework(framework("A"));

    assert_eq!(
        store.set_score("Missing", "Performance", 1.0),
        Err(StoreError::UnknownFramework("Missing".to_string()))
    );
    assert_eq!(
        store.set_score("A", "Missing", 1.0),
        Err(StoreError::UnknownCriterion("Missing".to_string()))
    );
    assert_eq!(store.set_score("A", "Performance", 1.0), Ok(()));
}

#[test]
fn set_score_keeps_at_most_one_value_per_pair() {
    let mut store = seeded_store();
    store.set_score("A", "Performance", 120.0).expect("rescore");
    assert_eq!(store.score("A", "Performance"), Some(120.0));
}

#[test]
fn missing_pairs_resolve_to_none() {
    let store = seeded_store();
    assert_eq!(store.score("A", "Unknown"), None);
    assert_eq!(store.score("Unknown", "Performance"), None);
}

#[test]
fn remove_framework_cascades_its_scores() {
    let mut store = seeded_store();
    store.remove_framework("A").expect("remove A");

    assert_eq!(store.frameworks().len(), 1);
    assert_eq!(store.score("A", "Performance"), None);
    assert_eq!(store.score("B", "Performance"), Some(50.0));

    assert_eq!(
        store.remove_framework("A"),
        Err(StoreError::UnknownFramework("A".to_string()))
    );
}

#[test]
fn remove_criterion_cascades_its_scores() {
    let mut store = seeded_store();
    store.remove_criterion("Cost").expect("remove Cost");

    assert_eq!(store.criteria().len(), 1);
    assert_eq!(store.score("A", "Cost"), None);
    assert_eq!(store.score("A", "Performance"), Some(100.0));
}

#[test]
fn reset_frameworks_keeps_criteria_definitions() {
    let mut store = seeded_store();
    store.reset_frameworks();

    assert!(store.frameworks().is_empty());
    assert_eq!(store.criteria().len(), 2);
    assert_eq!(store.score("A", "Performance"), None);
    assert!(!store.is_empty());
}

#[test]
fn blank_description_never_clobbers_an_existing_one() {
    let mut store = InMemoryStore::new();
    store.upsert_framework(framework("A"));
    store.upsert_framework(crate::decision::domain::Framework {
        name: "A".to_string(),
        description: String::new(),
    });

    assert_eq!(store.frameworks()[0].description, "A candidate");
}
