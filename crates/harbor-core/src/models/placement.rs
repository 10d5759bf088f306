use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// ASAM continuum-of-care levels, from early intervention (0.5) through
/// medically managed intensive inpatient (4.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CareLevel {
    #[serde(rename = "0.5")]
    EarlyIntervention,
    #[serde(rename = "1.0")]
    Outpatient,
    #[serde(rename = "2.1")]
    IntensiveOutpatient,
    #[serde(rename = "2.5")]
    PartialHospitalization,
    #[serde(rename = "3.1")]
    LowIntensityResidential,
    #[serde(rename = "3.3")]
    PopulationSpecificResidential,
    #[serde(rename = "3.5")]
    HighIntensityResidential,
    #[serde(rename = "3.7")]
    MedicallyMonitored,
    #[serde(rename = "4.0")]
    MedicallyManaged,
}

impl CareLevel {
    pub const ALL: [CareLevel; 9] = [
        CareLevel::EarlyIntervention,
        CareLevel::Outpatient,
        CareLevel::IntensiveOutpatient,
        CareLevel::PartialHospitalization,
        CareLevel::LowIntensityResidential,
        CareLevel::PopulationSpecificResidential,
        CareLevel::HighIntensityResidential,
        CareLevel::MedicallyMonitored,
        CareLevel::MedicallyManaged,
    ];

    /// The ASAM code string for this level (e.g. "2.1").
    pub fn code(&self) -> &'static str {
        match self {
            Self::EarlyIntervention => "0.5",
            Self::Outpatient => "1.0",
            Self::IntensiveOutpatient => "2.1",
            Self::PartialHospitalization => "2.5",
            Self::LowIntensityResidential => "3.1",
            Self::PopulationSpecificResidential => "3.3",
            Self::HighIntensityResidential => "3.5",
            Self::MedicallyMonitored => "3.7",
            Self::MedicallyManaged => "4.0",
        }
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CareLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.code() == s)
            .ok_or_else(|| CoreError::InvalidCareLevel(s.to_string()))
    }
}

/// How firmly a suggestion follows from the assessed dimensions. Assigned
/// per decision rule, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A suggested level of care, produced for clinician review — never an
/// automatic placement decision.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelOfCareSuggestion {
    pub suggested_level: CareLevel,
    pub explanation: String,
    pub confidence: Confidence,
    /// Clinical drivers behind the suggestion, in the order they were
    /// weighed.
    pub factors: Vec<String>,
}
