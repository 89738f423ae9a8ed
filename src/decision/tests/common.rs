use std::sync::Arc;

use crate::decision::domain::{Criterion, Direction, Framework};
use crate::decision::service::DecisionService;
use crate::decision::store::InMemoryStore;

pub(super) fn criterion(name: &str, weight: f64, direction: Direction) -> Criterion {
    Criterion {
        name: name.to_string(),
        weight,
        direction,
    }
}

pub(super) fn framework(name: &str) -> Framework {
    Framework {
        name: name.to_string(),
        description: format!("{name} candidate"),
    }
}

/// The two-candidate scenario used throughout: Performance (benefit) and
/// Cost (cost) at weight 0.5 each; A scores 100/50, B scores 50/25. Both
/// totals come out at 0.75, so the ranking is decided by input order.
pub(super) fn seeded_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    store.upsert_criterion(criterion("Performance", 0.5, Direction::Benefit));
    store.upsert_criterion(criterion("Cost", 0.5, Direction::Cost));
    store.upsert_framework(framework("A"));
    store.upsert_framework(framework("B"));
    store.set_score("A", "Performance", 100.0).expect("score A");
    store.set_score("A", "Cost", 50.0).expect("score A");
    store.set_score("B", "Performance", 50.0).expect("score B");
    store.set_score("B", "Cost", 25.0).expect("score B");
    store
}

pub(super) fn service(store: InMemoryStore) -> DecisionService<InMemoryStore> {
    DecisionService::new(Arc::new(store))
}
