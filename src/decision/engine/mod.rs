//! The Simple Additive Weighting computation.
//!
//! [`rank`] is a pure function over a snapshot of the catalog: it never
//! touches storage, holds no state between calls, and produces bit-identical
//! output for unchanged input. Callers supply the criteria and framework
//! sequences plus a [`ScoreLookup`]; absent scores resolve to a raw value
//! of 0.

mod normalize;

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Criterion, Framework};
use super::store::ScoreLookup;
use normalize::{column_extrema, normalize_cell, round4, ColumnExtrema};

/// Absolute tolerance applied to the criteria weight sum.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("criteria and framework data must both be present before ranking")]
    InsufficientData,
    #[error("criteria weights must sum to 1.0 (currently {total:.3})")]
    WeightsNotNormalized { total: f64 },
}

/// One framework row of a matrix; values follow the criteria input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub framework: String,
    pub values: Vec<f64>,
}

/// One ranking entry. `total_score` and every weighted score are rounded to
/// 4 decimal places; the total is accumulated unrounded before display
/// rounding is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub framework: String,
    pub total_score: f64,
    pub weighted_scores: BTreeMap<String, f64>,
}

/// Full result of one ranking run. Matrix rows stay in framework input
/// order; `ranking` is sorted descending by total score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingOutcome {
    pub decision_matrix: Vec<MatrixRow>,
    pub normalized_matrix: Vec<MatrixRow>,
    pub weighted_matrix: Vec<MatrixRow>,
    pub ranking: Vec<RankedEntry>,
}

impl RankingOutcome {
    /// The top-ranked framework. Always `Some` for an outcome produced by
    /// [`rank`], since validation rejects empty input.
    pub fn best(&self) -> Option<&RankedEntry> {
        self.ranking.first()
    }
}

/// Rank `frameworks` against `criteria` using Simple Additive Weighting.
///
/// Preconditions: both sequences must be non-empty and the criteria weights
/// must sum to 1.0 within [`WEIGHT_TOLERANCE`]. Either failure aborts the
/// run with a [`ValidationError`] before any matrix is built; there is no
/// partial result.
pub fn rank(
    criteria: &[Criterion],
    frameworks: &[Framework],
    scores: &dyn ScoreLookup,
) -> Result<RankingOutcome, ValidationError> {
    if criteria.is_empty() || frameworks.is_empty() {
        return Err(ValidationError::InsufficientData);
    }

    let total_weight: f64 = criteria.iter().map(|criterion| criterion.weight).sum();
    if (total_weight - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ValidationError::WeightsNotNormalized {
            total: total_weight,
        });
    }

    // Dense decision matrix; a missing (framework, criterion) score is 0.
    let raw_rows: Vec<Vec<f64>> = frameworks
        .iter()
        .map(|framework| {
            criteria
                .iter()
                .map(|criterion| {
                    scores
                        .score(&framework.name, &criterion.name)
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    let extrema: Vec<ColumnExtrema> = (0..criteria.len())
        .map(|column| {
            let values: Vec<f64> = raw_rows.iter().map(|row| row[column]).collect();
            column_extrema(&values)
        })
        .collect();

    let normalized_rows: Vec<Vec<f64>> = raw_rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(criteria.iter().zip(&extrema))
                .map(|(&raw, (criterion, &bounds))| {
                    normalize_cell(raw, criterion.direction, bounds)
                })
                .collect()
        })
        .collect();

    let mut ranking: Vec<RankedEntry> = frameworks
        .iter()
        .zip(&normalized_rows)
        .map(|(framework, row)| {
            let mut weighted_scores = BTreeMap::new();
            let mut total = 0.0;
            for (criterion, &normalized) in criteria.iter().zip(row) {
                let weighted = normalized * criterion.weight;
                weighted_scores.insert(criterion.name.clone(), round4(weighted));
                total += weighted;
            }
            RankedEntry {
                framework: framework.name.clone(),
                total_score: round4(total),
                weighted_scores,
            }
        })
        .collect();

    // Stable sort: frameworks with equal totals keep their input order.
    ranking.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    let decision_matrix = matrix(frameworks, &raw_rows, |value| value);
    let normalized_matrix = matrix(frameworks, &normalized_rows, round4);
    let weighted_matrix = frameworks
        .iter()
        .zip(&normalized_rows)
        .map(|(framework, row)| MatrixRow {
            framework: framework.name.clone(),
            values: criteria
                .iter()
                .zip(row)
                .map(|(criterion, &normalized)| round4(normalized * criterion.weight))
                .collect(),
        })
        .collect();

    Ok(RankingOutcome {
        decision_matrix,
        normalized_matrix,
        weighted_matrix,
        ranking,
    })
}

fn matrix(
    frameworks: &[Framework],
    rows: &[Vec<f64>],
    shape: impl Fn(f64) -> f64,
) -> Vec<MatrixRow> {
    frameworks
        .iter()
        .zip(rows)
        .map(|(framework, row)| MatrixRow {
            framework: framework.name.clone(),
            values: row.iter().map(|&value| shape(value)).collect(),
        })
        .collect()
}
