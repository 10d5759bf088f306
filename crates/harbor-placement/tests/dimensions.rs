use harbor_core::models::assessment::AssessmentDimensions;
use harbor_placement::dimensions::{DimensionRating, RatingKind};
use harbor_placement::error::PlacementError;
use harbor_placement::{all_dimensions, check_ratings, get_dimension, to_structured_input, validate_ratings};

#[test]
fn six_dimensions_in_asam_order() {
    let dimensions = all_dimensions();
    assert_eq!(dimensions.len(), 6);
    let numbers: Vec<u8> = dimensions.iter().map(|d| d.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn readiness_is_the_only_non_severity_dimension() {
    for def in all_dimensions() {
        if def.id == "readiness" {
            assert_eq!(def.kind, RatingKind::Readiness);
            assert!(def.range.is_none());
        } else {
            assert_eq!(def.kind, RatingKind::Severity);
            let range = def.range.unwrap();
            assert_eq!((range.min, range.max), (0, 3));
        }
    }
}

#[test]
fn dimension_definitions_serialize_for_the_form_api() {
    let def = get_dimension("withdrawal_risk").unwrap();
    let json = serde_json::to_value(def).unwrap();
    assert_eq!(json["number"], 1);
    assert_eq!(json["kind"], "severity");
    assert_eq!(json["range"]["max"], 3);
}

#[test]
fn lookup_by_id() {
    assert!(get_dimension("relapse_potential").is_some());
    assert!(get_dimension("asam_7").is_none());
}

#[test]
fn in_range_ratings_validate_cleanly() {
    let ratings = vec![
        DimensionRating {
            dimension_id: "withdrawal_risk".to_string(),
            value: 3,
        },
        DimensionRating {
            dimension_id: "recovery_environment".to_string(),
            value: 0,
        },
    ];
    assert!(validate_ratings(&ratings).is_empty());
    assert!(check_ratings(&ratings).is_ok());
}

#[test]
fn out_of_range_rating_is_reported() {
    let ratings = vec![DimensionRating {
        dimension_id: "biomedical".to_string(),
        value: 4,
    }];

    let errors = validate_ratings(&ratings);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].dimension_id, "biomedical");
    assert!(errors[0].message.contains("outside range [0, 3]"));

    assert!(matches!(
        check_ratings(&ratings),
        Err(PlacementError::Validation(_))
    ));
}

#[test]
fn unknown_dimension_is_rejected_by_check() {
    let ratings = vec![DimensionRating {
        dimension_id: "spiritual".to_string(),
        value: 1,
    }];
    assert!(validate_ratings(&ratings).is_empty());
    assert!(matches!(
        check_ratings(&ratings),
        Err(PlacementError::UnknownDimension(id)) if id == "spiritual"
    ));
}

#[test]
fn structured_input_lists_every_dimension() {
    let dimensions = AssessmentDimensions {
        withdrawal_risk: Some(2),
        biomedical: Some(0),
        emotional_behavioral: None,
        readiness: Some("contemplation".parse().unwrap()),
        relapse_potential: Some(3),
        recovery_environment: Some(1),
    };

    let block = to_structured_input(&dimensions);
    assert!(block.starts_with("## ASAM Assessment"));
    assert!(block.contains("Dimension 1, Acute Intoxication and Withdrawal Potential: moderate (2)"));
    assert!(block.contains("Dimension 2, Biomedical Conditions and Complications: none (0)"));
    assert!(block.contains("Dimension 3, Emotional, Behavioral, or Cognitive Conditions: not rated"));
    assert!(block.contains("Dimension 4, Readiness to Change: contemplation"));
    assert!(block.contains("Dimension 5, Relapse, Continued Use, or Continued Problem Potential: severe (3)"));
    assert!(block.contains("Dimension 6, Recovery/Living Environment: minimal (1)"));
}
