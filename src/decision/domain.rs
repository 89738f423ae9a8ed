use serde::{Deserialize, Serialize};

/// Whether a higher or a lower raw value is preferable for a criterion.
///
/// Benefit columns normalize against the column maximum, cost columns
/// against the column minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Benefit,
    Cost,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Benefit => "benefit",
            Direction::Cost => "cost",
        }
    }

    /// Parse user-supplied attribute text. Input is trimmed and
    /// case-insensitive; anything other than `benefit`/`cost` is rejected.
    pub fn parse(raw: &str) -> Result<Self, DirectionParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(Direction::Benefit),
            "cost" => Ok(Direction::Cost),
            _ => Err(DirectionParseError(raw.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attribute must be 'benefit' or 'cost', got '{0}'")]
pub struct DirectionParseError(pub String);

/// A weighted decision criterion. Identity is the name, unique within a
/// catalog. Weights are expected in (0, 1]; the sum across all criteria is
/// validated at ranking time, the per-criterion range at the ingestion
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
}

/// A candidate under evaluation. The description is informational only and
/// never feeds the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub name: String,
    pub description: String,
}

/// Dashboard-style totals describing whether the catalog can be ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_frameworks: usize,
    pub total_criteria: usize,
    pub total_weight: f64,
    pub ready_to_rank: bool,
}
