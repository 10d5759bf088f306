use harbor_core::error::CoreError;
use harbor_core::models::assessment::{AsamAssessment, AssessmentDimensions, ReadinessStage, Severity};
use harbor_core::models::placement::{CareLevel, Confidence, LevelOfCareSuggestion};
use uuid::Uuid;

#[test]
fn care_levels_serialize_as_asam_codes() {
    assert_eq!(
        serde_json::to_string(&CareLevel::MedicallyMonitored).unwrap(),
        "\"3.7\""
    );
    let level: CareLevel = serde_json::from_str("\"2.1\"").unwrap();
    assert_eq!(level, CareLevel::IntensiveOutpatient);
}

#[test]
fn unknown_care_level_code_is_an_error() {
    let err = "2.2".parse::<CareLevel>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidCareLevel(code) if code == "2.2"));
}

#[test]
fn readiness_stage_parses_from_form_values() {
    assert_eq!(
        "precontemplation".parse::<ReadinessStage>().unwrap(),
        ReadinessStage::Precontemplation
    );
    assert!("Precontemplation".parse::<ReadinessStage>().is_err());
}

#[test]
fn severity_scale_is_fixed() {
    assert_eq!(Severity::from_rating(0), Some(Severity::None));
    assert_eq!(Severity::from_rating(1), Some(Severity::Minimal));
    assert_eq!(Severity::from_rating(2), Some(Severity::Moderate));
    assert_eq!(Severity::from_rating(3), Some(Severity::Severe));
    assert_eq!(Severity::from_rating(4), None);
    assert_eq!(Severity::Moderate.label(), "moderate");
}

#[test]
fn suggestion_json_shape_matches_the_frontend_contract() {
    let suggestion = LevelOfCareSuggestion {
        suggested_level: CareLevel::PartialHospitalization,
        explanation: "Multiple moderate-severity dimensions indicate partial hospitalization."
            .to_string(),
        confidence: Confidence::Medium,
        factors: vec!["3 dimensions at moderate severity".to_string()],
    };

    let json = serde_json::to_value(&suggestion).unwrap();
    assert_eq!(json["suggested_level"], "2.5");
    assert_eq!(json["confidence"], "medium");
    assert_eq!(json["factors"][0], "3 dimensions at moderate severity");
}

#[test]
fn assessment_round_trips_with_unrated_dimensions() {
    let now = jiff::Timestamp::now();
    let assessment = AsamAssessment {
        id: Uuid::new_v4(),
        client_name: "Test Client".to_string(),
        date_administered: jiff::civil::date(2026, 8, 12),
        dimensions: AssessmentDimensions {
            withdrawal_risk: Some(2),
            readiness: Some(ReadinessStage::Contemplation),
            ..Default::default()
        },
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let json = serde_json::to_string(&assessment).unwrap();
    let back: AsamAssessment = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, assessment.id);
    assert_eq!(back.dimensions.withdrawal_risk, Some(2));
    assert_eq!(back.dimensions.biomedical, None);
    assert_eq!(back.dimensions.readiness, Some(ReadinessStage::Contemplation));
}
