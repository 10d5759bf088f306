use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How a dimension is rated on the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RatingKind {
    /// Numeric 0–3 severity rating.
    Severity,
    /// Stages-of-change selection (dimension 4).
    Readiness,
}

/// Defines the valid range for a severity rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

impl RatingRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One of the six ASAM assessment dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionDef {
    pub id: String,
    /// ASAM dimension number, 1–6.
    pub number: u8,
    pub name: String,
    pub kind: RatingKind,
    /// Valid rating range; absent for the readiness dimension.
    pub range: Option<RatingRange>,
    pub description: Option<String>,
}

/// A severity rating submitted from the assessment form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionRating {
    pub dimension_id: String,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub dimension_id: String,
    pub value: u8,
    pub expected_range: RatingRange,
    pub message: String,
}
