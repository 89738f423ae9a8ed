use std::io::Cursor;

use super::common::*;
use crate::decision::domain::Direction;
use crate::decision::ingest::{
    load_criteria, load_criteria_from_path, load_framework_data, load_scores, ImportError,
};
use crate::decision::store::{InMemoryStore, ScoreLookup, ScoreStore};

#[test]
fn criteria_file_populates_the_store() {
    let mut store = InMemoryStore::new();
    let report = load_criteria(
        &mut store,
        Cursor::new("name,weight,attribute\nPerformance,0.5,benefit\nCost,0.5,Cost\n"),
    )
    .expect("import succeeds");

    assert_eq!(report.rows_processed, 2);
    assert_eq!(report.criteria_upserted, 2);
    assert!(report.issues.is_empty());

    let criteria = store.criteria();
    assert_eq!(criteria[0].name, "Performance");
    assert_eq!(criteria[1].direction, Direction::Cost);
}

#[test]
fn criteria_rows_with_bad_values_are_skipped_and_reported() {
    let mut store = InMemoryStore::new();
    let csv = "name,weight,attribute\n\
               Performance,not-a-number,benefit\n\
               Scalability,1.5,benefit\n\
               Community,0.4,maximize\n\
               ,0.3,cost\n\
               Cost,0.6,cost\n";
    let report = load_criteria(&mut store, Cursor::new(csv)).expect("import succeeds");

    assert_eq!(report.rows_processed, 5);
    assert_eq!(report.criteria_upserted, 1);
    assert_eq!(report.issues.len(), 4);
    assert_eq!(store.criteria().len(), 1);
    assert_eq!(store.criteria()[0].name, "Cost");

    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message.contains("outside (0, 1]")));
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message.contains("benefit' or 'cost")));
    assert!(report.issues.iter().all(|issue| issue.line > 1));
}

#[test]
fn criteria_file_with_missing_columns_is_rejected() {
    let mut store = InMemoryStore::new();
    let error = load_criteria(&mut store, Cursor::new("name,weight\nPerformance,0.5\n"))
        .expect_err("missing attribute column");

    match error {
        ImportError::MissingColumns { columns } => assert_eq!(columns, vec!["attribute"]),
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn data_file_creates_frameworks_and_scores() {
    let mut store = InMemoryStore::new();
    load_criteria(
        &mut store,
        Cursor::new("name,weight,attribute\nPerformance,0.5,benefit\nCost,0.5,cost\n"),
    )
    .expect("criteria import");

    let csv = "framework,description,Performance (req/s),Cost\n\
               Actix,Actor based,8500,50\n\
               Axum,Tokio native,8200,25\n";
    let report = load_framework_data(&mut store, Cursor::new(csv)).expect("data import");

    assert_eq!(report.frameworks_created, 2);
    assert_eq!(report.scores_written, 4);
    assert!(report.issues.is_empty());
    assert_eq!(store.score("Actix", "Performance"), Some(8500.0));
    assert_eq!(store.frameworks()[1].description, "Tokio native");
}

#[test]
fn data_file_reports_unmatched_columns_once() {
    let mut store = InMemoryStore::new();
    load_criteria(
        &mut store,
        Cursor::new("name,weight,attribute\nPerformance,1.0,benefit\n"),
    )
    .expect("criteria import");

    let csv = "framework,Performance,Unknown Metric\nActix,10,3\nAxum,20,4\n";
    let report = load_framework_data(&mut store, Cursor::new(csv)).expect("data import");

    assert_eq!(report.scores_written, 2);
    let unmatched: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.message.contains("Unknown Metric"))
        .collect();
    assert_eq!(unmatched.len(), 1);
}

#[test]
fn data_file_skips_blank_cells_and_bad_numbers() {
    let mut store = InMemoryStore::new();
    load_criteria(
        &mut store,
        Cursor::new("name,weight,attribute\nPerformance,0.5,benefit\nCost,0.5,cost\n"),
    )
    .expect("criteria import");

    let csv = "framework,Performance,Cost\nActix,,fast\n";
    let report = load_framework_data(&mut store, Cursor::new(csv)).expect("data import");

    assert_eq!(report.frameworks_created, 1);
    assert_eq!(report.scores_written, 0);
    // The blank Performance cell is not an issue; the unparseable Cost is.
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].message.contains("fast"));
    assert_eq!(store.score("Actix", "Performance"), None);
}

#[test]
fn data_file_requires_a_framework_column() {
    let mut store = InMemoryStore::new();
    let error = load_framework_data(&mut store, Cursor::new("name,Performance\nActix,10\n"))
        .expect_err("missing framework column");

    match error {
        ImportError::MissingColumns { columns } => assert_eq!(columns, vec!["framework"]),
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn data_file_reports_blank_framework_names() {
    let mut store = InMemoryStore::new();
    load_criteria(
        &mut store,
        Cursor::new("name,weight,attribute\nPerformance,1.0,benefit\n"),
    )
    .expect("criteria import");

    let csv = "framework,Performance\n,10\nAxum,20\n";
    let report = load_framework_data(&mut store, Cursor::new(csv)).expect("data import");

    assert_eq!(report.frameworks_created, 1);
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message.contains("must not be blank")));
}

#[test]
fn scores_file_skips_unknown_references() {
    let mut store = seeded_store();
    let csv = "framework,criteria,value\n\
               A,Performance,90\n\
               Ghost,Performance,10\n\
               A,Ghost,10\n";
    let report = load_scores(&mut store, Cursor::new(csv)).expect("scores import");

    assert_eq!(report.scores_written, 1);
    assert_eq!(report.issues.len(), 2);
    assert_eq!(store.score("A", "Performance"), Some(90.0));
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message.contains("framework 'Ghost'")));
    assert!(report
        .issues
        .iter()
        .any(|issue| issue.message.contains("criterion 'Ghost'")));
}

#[test]
fn path_loader_propagates_io_errors() {
    let mut store = InMemoryStore::new();
    let error = load_criteria_from_path(&mut store, "./does-not-exist.csv")
        .expect_err("expected io error");

    match error {
        ImportError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
