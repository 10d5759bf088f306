//! harbor-placement
//!
//! ASAM level-of-care placement logic. Pure data and decision rules — no
//! storage or service dependency. Defines the six assessment dimensions,
//! the care-level lookup tables, and the level-of-care advisor.

pub mod advisor;
pub mod dimensions;
pub mod error;
pub mod levels;

use harbor_core::models::assessment::{AssessmentDimensions, Severity};

use dimensions::{DimensionDef, DimensionRating, RatingKind, RatingRange, ValidationError};
use error::PlacementError;

/// Return the six ASAM dimension definitions, in dimension order.
pub fn all_dimensions() -> &'static [DimensionDef] {
    static DIMENSIONS: std::sync::LazyLock<Vec<DimensionDef>> = std::sync::LazyLock::new(|| {
        let severity_range = RatingRange { min: 0, max: 3 };

        let severity = |id: &str, number: u8, name: &str, description: &str| DimensionDef {
            id: id.to_string(),
            number,
            name: name.to_string(),
            kind: RatingKind::Severity,
            range: Some(severity_range),
            description: Some(description.to_string()),
        };

        vec![
            severity(
                "withdrawal_risk",
                1,
                "Acute Intoxication and Withdrawal Potential",
                "Risk associated with the client's current level of intoxication \
                 and potential withdrawal severity",
            ),
            severity(
                "biomedical",
                2,
                "Biomedical Conditions and Complications",
                "Physical health conditions that may complicate treatment",
            ),
            severity(
                "emotional_behavioral",
                3,
                "Emotional, Behavioral, or Cognitive Conditions",
                "Psychiatric and cognitive conditions, including co-occurring \
                 mental health diagnoses",
            ),
            DimensionDef {
                id: "readiness".to_string(),
                number: 4,
                name: "Readiness to Change".to_string(),
                kind: RatingKind::Readiness,
                range: None,
                description: Some(
                    "Stage of change: precontemplation through maintenance".to_string(),
                ),
            },
            severity(
                "relapse_potential",
                5,
                "Relapse, Continued Use, or Continued Problem Potential",
                "Likelihood of relapse or continued use without structured support",
            ),
            severity(
                "recovery_environment",
                6,
                "Recovery/Living Environment",
                "Safety and supportiveness of the client's living situation",
            ),
        ]
    });
    &DIMENSIONS
}

/// Look up a dimension definition by ID.
pub fn get_dimension(id: &str) -> Option<&'static DimensionDef> {
    all_dimensions().iter().find(|d| d.id == id)
}

/// Validate submitted severity ratings against the dimension ranges.
/// Ratings for unknown dimension IDs are skipped here; use
/// [`check_ratings`] to reject them.
pub fn validate_ratings(ratings: &[DimensionRating]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for entry in ratings {
        if let Some(def) = get_dimension(&entry.dimension_id)
            && let Some(range) = def.range
            && !range.contains(entry.value)
        {
            errors.push(ValidationError {
                dimension_id: entry.dimension_id.clone(),
                value: entry.value,
                expected_range: range,
                message: format!(
                    "{}: rating {} is outside range [{}, {}]",
                    def.name, entry.value, range.min, range.max,
                ),
            });
        }
    }
    errors
}

/// Strict form of [`validate_ratings`]: rejects unknown dimension IDs and
/// returns the first range violation.
pub fn check_ratings(ratings: &[DimensionRating]) -> Result<(), PlacementError> {
    for entry in ratings {
        if get_dimension(&entry.dimension_id).is_none() {
            return Err(PlacementError::UnknownDimension(entry.dimension_id.clone()));
        }
    }
    match validate_ratings(ratings).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Format an assessment's dimensions as structured text for chart notes.
pub fn to_structured_input(dimensions: &AssessmentDimensions) -> String {
    let mut output = String::from("## ASAM Assessment\n\n");
    for def in all_dimensions() {
        let rendered = match def.number {
            1 => severity_line(dimensions.withdrawal_risk),
            2 => severity_line(dimensions.biomedical),
            3 => severity_line(dimensions.emotional_behavioral),
            4 => dimensions.readiness.map(|stage| stage.label().to_string()),
            5 => severity_line(dimensions.relapse_potential),
            6 => severity_line(dimensions.recovery_environment),
            _ => None,
        };
        let rendered = rendered.unwrap_or_else(|| "not rated".to_string());
        output.push_str(&format!("- Dimension {}, {}: {}\n", def.number, def.name, rendered));
    }
    output
}

fn severity_line(value: Option<u8>) -> Option<String> {
    let value = value?;
    match Severity::from_rating(value) {
        Some(severity) => Some(format!("{} ({})", severity.label(), value)),
        None => Some(format!("out of range ({value})")),
    }
}
