//! Criteria/framework catalog, CSV ingestion, and the SAW ranking engine.

pub mod domain;
pub mod engine;
pub mod ingest;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{CatalogSummary, Criterion, Direction, DirectionParseError, Framework};
pub use engine::{
    rank, MatrixRow, RankedEntry, RankingOutcome, ValidationError, WEIGHT_TOLERANCE,
};
pub use ingest::{ImportError, ImportIssue, ImportReport};
pub use service::{DecisionService, ExportError};
pub use store::{InMemoryStore, ScoreLookup, ScoreStore, StoreError};
