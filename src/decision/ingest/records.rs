use serde::Deserialize;

/// Row of a criteria file (`name,weight,attribute`). The attribute text is
/// kept as a string so validation can name the offending value in the row
/// report.
#[derive(Debug, Deserialize)]
pub(crate) struct CriterionRow {
    pub(crate) name: String,
    pub(crate) weight: f64,
    pub(crate) attribute: String,
}

/// Row of a standalone scores file (`framework,criteria,value`).
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRow {
    pub(crate) framework: String,
    pub(crate) criteria: String,
    pub(crate) value: f64,
}
