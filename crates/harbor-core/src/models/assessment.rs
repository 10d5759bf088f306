use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A completed ASAM multidimensional assessment for one client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsamAssessment {
    pub id: Uuid,
    pub client_name: String,
    pub date_administered: jiff::civil::Date,
    pub dimensions: AssessmentDimensions,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Severity ratings across the six ASAM dimensions.
///
/// The five numeric dimensions use a fixed 0–3 scale: 0 = none,
/// 1 = minimal, 2 = moderate, 3 = severe. Dimension 4 (readiness to
/// change) is a stage, not a severity. A `None` field means the clinician
/// has not rated that dimension yet.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDimensions {
    /// Dimension 1: acute intoxication and withdrawal potential.
    pub withdrawal_risk: Option<u8>,
    /// Dimension 2: biomedical conditions and complications.
    pub biomedical: Option<u8>,
    /// Dimension 3: emotional, behavioral, or cognitive conditions.
    pub emotional_behavioral: Option<u8>,
    /// Dimension 4: readiness to change.
    pub readiness: Option<ReadinessStage>,
    /// Dimension 5: relapse, continued use, or continued problem potential.
    pub relapse_potential: Option<u8>,
    /// Dimension 6: recovery/living environment.
    pub recovery_environment: Option<u8>,
}

/// Stages-of-change model for dimension 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReadinessStage {
    Precontemplation,
    Contemplation,
    Preparation,
    Action,
    Maintenance,
}

impl ReadinessStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Precontemplation => "precontemplation",
            Self::Contemplation => "contemplation",
            Self::Preparation => "preparation",
            Self::Action => "action",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for ReadinessStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precontemplation" => Ok(Self::Precontemplation),
            "contemplation" => Ok(Self::Contemplation),
            "preparation" => Ok(Self::Preparation),
            "action" => Ok(Self::Action),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(CoreError::InvalidReadinessStage(other.to_string())),
        }
    }
}

/// Clinical severity category for a 0–3 dimension rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    None,
    Minimal,
    Moderate,
    Severe,
}

impl Severity {
    /// Map a 0–3 rating onto its severity category. Values outside the
    /// scale have no category.
    pub fn from_rating(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Minimal),
            2 => Some(Self::Moderate),
            3 => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}
