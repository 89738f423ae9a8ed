//! Typed CSV ingestion feeding the catalog store.
//!
//! Three file shapes are accepted: criteria definitions, framework data
//! rows (one column per criterion), and standalone score triples. A
//! malformed row never aborts the batch: it is skipped and reported in the
//! returned [`ImportReport`], so by the time the engine runs every stored
//! score is a well-typed float.

mod records;
pub mod templates;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use super::domain::{Criterion, Direction, Framework};
use super::store::{InMemoryStore, ScoreStore};
use records::{CriterionRow, ScoreRow};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

/// One skipped row (or unusable column) and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportIssue {
    pub line: u64,
    pub message: String,
}

/// Outcome of one file import: applied counts plus per-row issues.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub rows_processed: usize,
    pub criteria_upserted: usize,
    pub frameworks_created: usize,
    pub scores_written: usize,
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    fn record_issue(&mut self, line: u64, message: String) {
        warn!(line, %message, "import row skipped");
        self.issues.push(ImportIssue { line, message });
    }
}

/// Load criteria definitions (`name,weight,attribute`), creating or
/// updating each by name.
pub fn load_criteria<R: Read>(
    store: &mut InMemoryStore,
    reader: R,
) -> Result<ImportReport, ImportError> {
    let mut csv_reader = trimmed_reader(reader);
    let headers = csv_reader.headers()?.clone();
    require_columns(&headers, &["name", "weight", "attribute"])?;

    let mut report = ImportReport::default();
    for result in csv_reader.records() {
        report.rows_processed += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                report.record_issue(error_line(&err), format!("unreadable row: {err}"));
                continue;
            }
        };
        let line = record_line(&record);

        let row: CriterionRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(err) => {
                report.record_issue(line, format!("invalid criteria row: {err}"));
                continue;
            }
        };

        if row.name.is_empty() {
            report.record_issue(line, "criterion name must not be blank".to_string());
            continue;
        }
        if !(row.weight > 0.0 && row.weight <= 1.0) {
            report.record_issue(
                line,
                format!("weight {} outside (0, 1] for '{}'", row.weight, row.name),
            );
            continue;
        }
        let direction = match Direction::parse(&row.attribute) {
            Ok(direction) => direction,
            Err(err) => {
                report.record_issue(line, err.to_string());
                continue;
            }
        };

        store.upsert_criterion(Criterion {
            name: row.name,
            weight: row.weight,
            direction,
        });
        report.criteria_upserted += 1;
    }

    Ok(report)
}

/// Load framework rows. The header must carry a `framework` column
/// (case-insensitive) and may carry a `description` column; every other
/// column is matched against the registered criteria, either by exact name
/// or with a unit suffix in parentheses (`Performance (req/s)`).
pub fn load_framework_data<R: Read>(
    store: &mut InMemoryStore,
    reader: R,
) -> Result<ImportReport, ImportError> {
    let mut csv_reader = trimmed_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let framework_idx = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case("framework"))
        .ok_or_else(|| ImportError::MissingColumns {
            columns: vec!["framework".to_string()],
        })?;
    let description_idx = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case("description"));

    let mut report = ImportReport::default();
    let criteria = store.criteria();
    let mut column_map: Vec<(usize, String)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == framework_idx || Some(idx) == description_idx {
            continue;
        }
        match match_criterion(header, &criteria) {
            Some(name) => column_map.push((idx, name.to_string())),
            None => report.record_issue(
                1,
                format!("column '{header}' does not match any registered criterion"),
            ),
        }
    }

    for result in csv_reader.records() {
        report.rows_processed += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                report.record_issue(error_line(&err), format!("unreadable row: {err}"));
                continue;
            }
        };
        let line = record_line(&record);

        let name = record.get(framework_idx).unwrap_or("");
        if name.is_empty() {
            report.record_issue(line, "framework name must not be blank".to_string());
            continue;
        }
        let description = description_idx
            .and_then(|idx| record.get(idx))
            .unwrap_or("")
            .to_string();

        if store.upsert_framework(Framework {
            name: name.to_string(),
            description,
        }) {
            report.frameworks_created += 1;
        }

        for (idx, criterion_name) in &column_map {
            let raw = record.get(*idx).unwrap_or("");
            if raw.is_empty() {
                // No recorded score; the engine resolves the pair to 0.
                continue;
            }
            match raw.parse::<f64>() {
                Ok(value) => match store.set_score(name, criterion_name, value) {
                    Ok(()) => report.scores_written += 1,
                    Err(err) => report.record_issue(line, err.to_string()),
                },
                Err(_) => report.record_issue(
                    line,
                    format!("invalid value '{raw}' for criterion '{criterion_name}'"),
                ),
            }
        }
    }

    Ok(report)
}

/// Load standalone score triples (`framework,criteria,value`). Rows that
/// reference an unregistered framework or criterion are skipped and
/// reported.
pub fn load_scores<R: Read>(
    store: &mut InMemoryStore,
    reader: R,
) -> Result<ImportReport, ImportError> {
    let mut csv_reader = trimmed_reader(reader);
    let headers = csv_reader.headers()?.clone();
    require_columns(&headers, &["framework", "criteria", "value"])?;

    let mut report = ImportReport::default();
    for result in csv_reader.records() {
        report.rows_processed += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                report.record_issue(error_line(&err), format!("unreadable row: {err}"));
                continue;
            }
        };
        let line = record_line(&record);

        let row: ScoreRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(err) => {
                report.record_issue(line, format!("invalid score row: {err}"));
                continue;
            }
        };

        match store.set_score(&row.framework, &row.criteria, row.value) {
            Ok(()) => report.scores_written += 1,
            Err(err) => report.record_issue(line, err.to_string()),
        }
    }

    Ok(report)
}

pub fn load_criteria_from_path<P: AsRef<Path>>(
    store: &mut InMemoryStore,
    path: P,
) -> Result<ImportReport, ImportError> {
    load_criteria(store, File::open(path)?)
}

pub fn load_framework_data_from_path<P: AsRef<Path>>(
    store: &mut InMemoryStore,
    path: P,
) -> Result<ImportReport, ImportError> {
    load_framework_data(store, File::open(path)?)
}

pub fn load_scores_from_path<P: AsRef<Path>>(
    store: &mut InMemoryStore,
    path: P,
) -> Result<ImportReport, ImportError> {
    load_scores(store, File::open(path)?)
}

fn trimmed_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn require_columns(headers: &csv::StringRecord, expected: &[&str]) -> Result<(), ImportError> {
    let missing: Vec<String> = expected
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns { columns: missing })
    }
}

/// Match a data-file header to a registered criterion: exact name, or the
/// name followed by a parenthesized unit annotation.
fn match_criterion<'a>(header: &str, criteria: &'a [Criterion]) -> Option<&'a str> {
    criteria
        .iter()
        .map(|criterion| criterion.name.as_str())
        .find(|name| {
            header == *name
                || header
                    .strip_prefix(*name)
                    .is_some_and(|rest| {
                        let rest = rest.trim_start();
                        rest.starts_with('(') && rest.ends_with(')')
                    })
        })
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}

fn error_line(err: &csv::Error) -> u64 {
    err.position().map_or(0, |position| position.line())
}
