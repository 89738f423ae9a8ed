//! Simple Additive Weighting decision support for ranking framework
//! candidates.
//!
//! The [`decision`] module holds the whole pipeline: a catalog store for
//! criteria, frameworks, and scores, a typed CSV ingestion boundary that
//! populates it, and the pure ranking engine that turns a snapshot of the
//! catalog into decision/normalized/weighted matrices plus a descending
//! ranking.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
