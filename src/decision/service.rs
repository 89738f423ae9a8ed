use std::io;
use std::sync::Arc;

use tracing::info;

use super::domain::CatalogSummary;
use super::engine::{self, RankingOutcome, ValidationError, WEIGHT_TOLERANCE};
use super::store::ScoreStore;

/// Facade over a catalog store: readiness summary, ranking, and CSV export.
///
/// Every call reads a fresh snapshot from the store, so concurrent callers
/// each rank a consistent view.
pub struct DecisionService<S> {
    store: Arc<S>,
}

impl<S: ScoreStore> DecisionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Catalog totals plus whether a ranking run would pass validation.
    pub fn summary(&self) -> CatalogSummary {
        let criteria = self.store.criteria();
        let frameworks = self.store.frameworks();
        let total_weight: f64 = criteria.iter().map(|criterion| criterion.weight).sum();
        let ready_to_rank = !criteria.is_empty()
            && !frameworks.is_empty()
            && (total_weight - 1.0).abs() <= WEIGHT_TOLERANCE;

        CatalogSummary {
            total_frameworks: frameworks.len(),
            total_criteria: criteria.len(),
            total_weight,
            ready_to_rank,
        }
    }

    /// Snapshot the catalog and run the ranking engine over it.
    pub fn calculate(&self) -> Result<RankingOutcome, ValidationError> {
        let criteria = self.store.criteria();
        let frameworks = self.store.frameworks();
        let outcome = engine::rank(&criteria, &frameworks, self.store.as_ref())?;

        if let Some(best) = outcome.best() {
            info!(
                framework = %best.framework,
                total_score = best.total_score,
                candidates = outcome.ranking.len(),
                "ranking complete"
            );
        }

        Ok(outcome)
    }

    /// Write the combined framework/score table as CSV: a `Framework` column
    /// followed by one column per criterion in store order. Missing scores
    /// are written as empty cells, not zeros.
    pub fn export_scores<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let criteria = self.store.criteria();
        let frameworks = self.store.frameworks();

        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = Vec::with_capacity(criteria.len() + 1);
        header.push("Framework".to_string());
        header.extend(criteria.iter().map(|criterion| criterion.name.clone()));
        csv_writer.write_record(&header)?;

        for framework in &frameworks {
            let mut row = Vec::with_capacity(criteria.len() + 1);
            row.push(framework.name.clone());
            for criterion in &criteria {
                row.push(match self.store.score(&framework.name, &criterion.name) {
                    Some(value) => value.to_string(),
                    None => String::new(),
                });
            }
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] io::Error),
}
