//! Level-of-care advisor.
//!
//! Derives a suggested ASAM level of care from a six-dimension assessment.
//! The rules form an ordered cascade from most to least clinically urgent;
//! the first matching rule wins. A client can satisfy several rules at
//! once, and safety requires resolving ties toward the higher level of
//! care, so the ordering is a contract — do not reorder the checks.

use harbor_core::models::assessment::{AssessmentDimensions, ReadinessStage};
use harbor_core::models::placement::{CareLevel, Confidence, LevelOfCareSuggestion};

/// Suggest a level of care for the given dimension ratings.
///
/// Returns `None` when any of dimensions 1, 2, 3, 5, or 6 is unrated —
/// there is no partial suggestion. Dimension 4 (readiness) is optional
/// and only consulted by the low-readiness rule. Pure and deterministic:
/// the same ratings always produce the same suggestion.
pub fn suggest(dimensions: &AssessmentDimensions) -> Option<LevelOfCareSuggestion> {
    let withdrawal = dimensions.withdrawal_risk?;
    let biomedical = dimensions.biomedical?;
    let emotional = dimensions.emotional_behavioral?;
    let relapse = dimensions.relapse_potential?;
    let environment = dimensions.recovery_environment?;

    let mut factors = Vec::new();

    // Severe withdrawal risk outranks everything else.
    if withdrawal == 3 {
        factors.push("Severe withdrawal risk requiring medical supervision".to_string());
        if biomedical == 3 {
            factors.push("Severe biomedical conditions requiring acute care".to_string());
            return Some(LevelOfCareSuggestion {
                suggested_level: CareLevel::MedicallyManaged,
                explanation: "Severe withdrawal risk combined with acute biomedical \
                              conditions requires medically managed intensive inpatient care."
                    .to_string(),
                confidence: Confidence::High,
                factors,
            });
        }
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::MedicallyMonitored,
            explanation: "Severe withdrawal risk requires medically monitored detoxification."
                .to_string(),
            confidence: Confidence::High,
            factors,
        });
    }

    if biomedical == 3 {
        factors.push("Severe biomedical conditions requiring medical management".to_string());
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::MedicallyMonitored,
            explanation: "Severe biomedical conditions require medically monitored \
                          intensive inpatient care."
                .to_string(),
            confidence: Confidence::High,
            factors,
        });
    }

    if emotional == 3 {
        factors.push("Severe emotional, behavioral, or cognitive conditions".to_string());
        if withdrawal >= 2 || biomedical >= 2 {
            factors.push("Concurrent withdrawal or biomedical concern".to_string());
            return Some(LevelOfCareSuggestion {
                suggested_level: CareLevel::MedicallyMonitored,
                explanation: "Severe psychiatric conditions with concurrent medical or \
                              withdrawal concerns require medically monitored care."
                    .to_string(),
                confidence: Confidence::High,
                factors,
            });
        }
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::HighIntensityResidential,
            explanation: "Severe psychiatric conditions indicate high-intensity \
                          residential treatment with psychiatric support."
                .to_string(),
            confidence: Confidence::High,
            factors,
        });
    }

    if relapse == 3 {
        factors.push("High relapse potential".to_string());
        if withdrawal >= 2 || biomedical >= 2 {
            factors.push("Concurrent withdrawal or biomedical concern".to_string());
            return Some(LevelOfCareSuggestion {
                suggested_level: CareLevel::LowIntensityResidential,
                explanation: "High relapse potential with concurrent medical or withdrawal \
                              needs indicates residential treatment."
                    .to_string(),
                confidence: Confidence::High,
                factors,
            });
        }
        if environment >= 2 {
            factors.push("Unsupportive recovery environment".to_string());
            return Some(LevelOfCareSuggestion {
                suggested_level: CareLevel::LowIntensityResidential,
                explanation: "High relapse potential in an unsupportive living environment \
                              indicates residential treatment."
                    .to_string(),
                confidence: Confidence::High,
                factors,
            });
        }
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::PartialHospitalization,
            explanation: "High relapse potential indicates partial hospitalization with \
                          daily structure."
                .to_string(),
            confidence: Confidence::Medium,
            factors,
        });
    }

    if environment == 3 {
        factors.push("Dangerous or unsupportive living environment".to_string());
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::LowIntensityResidential,
            explanation: "A dangerous living environment indicates low-intensity \
                          residential care to establish a stable recovery setting."
                .to_string(),
            confidence: Confidence::High,
            factors,
        });
    }

    let moderate_count = [withdrawal, biomedical, emotional, relapse, environment]
        .iter()
        .filter(|&&value| value == 2)
        .count();

    if moderate_count >= 3 {
        factors.push(format!("{moderate_count} dimensions at moderate severity"));
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::PartialHospitalization,
            explanation: "Multiple moderate-severity dimensions indicate partial \
                          hospitalization."
                .to_string(),
            confidence: Confidence::Medium,
            factors,
        });
    }

    if moderate_count >= 2 || relapse == 2 {
        if moderate_count >= 2 {
            factors.push(format!("{moderate_count} dimensions at moderate severity"));
        }
        if relapse == 2 {
            factors.push("Moderate relapse potential".to_string());
        }
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::IntensiveOutpatient,
            explanation: "Moderate severity indicates intensive outpatient treatment."
                .to_string(),
            confidence: Confidence::Medium,
            factors,
        });
    }

    let low_readiness = matches!(
        dimensions.readiness,
        Some(ReadinessStage::Precontemplation | ReadinessStage::Contemplation)
    );
    if low_readiness && moderate_count >= 1 {
        factors.push("Low readiness to change with a moderate concern".to_string());
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::IntensiveOutpatient,
            explanation: "Low readiness to change alongside a moderate concern indicates \
                          intensive outpatient treatment with motivational enhancement."
                .to_string(),
            confidence: Confidence::Medium,
            factors,
        });
    }

    let ratings = [withdrawal, biomedical, emotional, relapse, environment];
    if ratings.iter().all(|&value| value <= 1) {
        if ratings.iter().any(|&value| value == 1) {
            factors.push("Minimal severity across all dimensions".to_string());
            return Some(LevelOfCareSuggestion {
                suggested_level: CareLevel::Outpatient,
                explanation: "Minimal severity across all dimensions indicates standard \
                              outpatient services."
                    .to_string(),
                confidence: Confidence::High,
                factors,
            });
        }
        factors.push("No identified severity on any dimension".to_string());
        return Some(LevelOfCareSuggestion {
            suggested_level: CareLevel::EarlyIntervention,
            explanation: "No identified severity indicates early intervention services."
                .to_string(),
            confidence: Confidence::High,
            factors,
        });
    }

    factors.push("Mixed severity presentation".to_string());
    Some(LevelOfCareSuggestion {
        suggested_level: CareLevel::IntensiveOutpatient,
        explanation: "A mixed severity presentation without a dominant concern defaults \
                      to intensive outpatient treatment pending clinical review."
            .to_string(),
        confidence: Confidence::Low,
        factors,
    })
}
