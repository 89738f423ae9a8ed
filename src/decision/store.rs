use std::collections::BTreeMap;

use super::domain::{Criterion, Framework};

/// Score-resolution capability consumed by the ranking engine. Returning
/// `None` means no score was recorded for the pair; the engine resolves that
/// to a raw value of 0.
pub trait ScoreLookup {
    fn score(&self, framework: &str, criterion: &str) -> Option<f64>;
}

/// Resolver functions double as lookups so the engine can be exercised
/// without any store.
impl<F> ScoreLookup for F
where
    F: Fn(&str, &str) -> Option<f64>,
{
    fn score(&self, framework: &str, criterion: &str) -> Option<f64> {
        self(framework, criterion)
    }
}

/// Read-side snapshot of the catalog. The engine and service only ever
/// consume this view; mutation is an implementation concern of the concrete
/// store.
pub trait ScoreStore: ScoreLookup + Send + Sync {
    fn criteria(&self) -> Vec<Criterion>;
    fn frameworks(&self) -> Vec<Framework>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("framework '{0}' is not registered")]
    UnknownFramework(String),
    #[error("criterion '{0}' is not registered")]
    UnknownCriterion(String),
}

/// Insertion-ordered catalog of criteria, frameworks, and their scores.
///
/// Criteria and frameworks keep the order they were first registered in;
/// that order defines the column order of every matrix the engine emits and
/// the tie-break order of the ranking. At most one score exists per
/// (framework, criterion) pair.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    criteria: Vec<Criterion>,
    frameworks: Vec<Framework>,
    scores: BTreeMap<(String, String), f64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update a criterion by name. Updates keep the criterion's
    /// original position. Returns `true` when a new criterion was created.
    pub fn upsert_criterion(&mut self, criterion: Criterion) -> bool {
        match self
            .criteria
            .iter_mut()
            .find(|existing| existing.name == criterion.name)
        {
            Some(existing) => {
                *existing = criterion;
                false
            }
            None => {
                self.criteria.push(criterion);
                true
            }
        }
    }

    /// Remove a criterion and every score recorded against it.
    pub fn remove_criterion(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.criteria.len();
        self.criteria.retain(|criterion| criterion.name != name);
        if self.criteria.len() == before {
            return Err(StoreError::UnknownCriterion(name.to_string()));
        }
        self.scores.retain(|(_, criterion), _| criterion != name);
        Ok(())
    }

    /// Create a framework, or update its description when one is already
    /// registered under the name. A blank incoming description never
    /// clobbers an existing one. Returns `true` when a new framework was
    /// created.
    pub fn upsert_framework(&mut self, framework: Framework) -> bool {
        match self
            .frameworks
            .iter_mut()
            .find(|existing| existing.name == framework.name)
        {
            Some(existing) => {
                if !framework.description.is_empty() {
                    existing.description = framework.description;
                }
                false
            }
            None => {
                self.frameworks.push(framework);
                true
            }
        }
    }

    /// Remove a framework and every score recorded against it.
    pub fn remove_framework(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.frameworks.len();
        self.frameworks.retain(|framework| framework.name != name);
        if self.frameworks.len() == before {
            return Err(StoreError::UnknownFramework(name.to_string()));
        }
        self.scores.retain(|(framework, _), _| framework != name);
        Ok(())
    }

    /// Record the unique score for a (framework, criterion) pair, replacing
    /// any previous value. Both sides must already be registered.
    pub fn set_score(
        &mut self,
        framework: &str,
        criterion: &str,
        value: f64,
    ) -> Result<(), StoreError> {
        if !self.frameworks.iter().any(|fw| fw.name == framework) {
            return Err(StoreError::UnknownFramework(framework.to_string()));
        }
        if !self.criteria.iter().any(|c| c.name == criterion) {
            return Err(StoreError::UnknownCriterion(criterion.to_string()));
        }
        self.scores
            .insert((framework.to_string(), criterion.to_string()), value);
        Ok(())
    }

    /// Drop all frameworks and scores, keeping the criteria definitions.
    pub fn reset_frameworks(&mut self) {
        self.frameworks.clear();
        self.scores.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.frameworks.is_empty()
    }
}

impl ScoreLookup for InMemoryStore {
    fn score(&self, framework: &str, criterion: &str) -> Option<f64> {
        self.scores
            .get(&(framework.to_string(), criterion.to_string()))
            .copied()
    }
}

impl ScoreStore for InMemoryStore {
    fn criteria(&self) -> Vec<Criterion> {
        self.criteria.clone()
    }

    fn frameworks(&self) -> Vec<Framework> {
        self.frameworks.clone()
    }
}
