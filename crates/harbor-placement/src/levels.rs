use harbor_core::models::placement::CareLevel;

/// Fixed clinical description for each care level.
pub fn describe_level(level: CareLevel) -> &'static str {
    match level {
        CareLevel::EarlyIntervention => {
            "Early Intervention - education and screening for at-risk individuals"
        }
        CareLevel::Outpatient => {
            "Outpatient Services - fewer than 9 hours/week of recovery-focused services"
        }
        CareLevel::IntensiveOutpatient => {
            "Intensive Outpatient (IOP) - 9+ hours/week structured programming"
        }
        CareLevel::PartialHospitalization => {
            "Partial Hospitalization (PHP) - 20+ hours/week of structured programming"
        }
        CareLevel::LowIntensityResidential => {
            "Clinically Managed Low-Intensity Residential - 24-hour supportive living environment"
        }
        CareLevel::PopulationSpecificResidential => {
            "Clinically Managed Population-Specific High-Intensity Residential - \
             24-hour care adapted for cognitive or functional limitations"
        }
        CareLevel::HighIntensityResidential => {
            "Clinically Managed High-Intensity Residential - 24-hour structured \
             residential treatment"
        }
        CareLevel::MedicallyMonitored => {
            "Medically Monitored Intensive Inpatient - 24-hour nursing care with \
             physician availability"
        }
        CareLevel::MedicallyManaged => {
            "Medically Managed Intensive Inpatient - 24-hour physician-directed \
             hospital-based care"
        }
    }
}

/// Short placement tag shown next to a suggestion. Levels 0.5 and 1.0
/// imply no program placement and carry no badge.
pub fn badge_for_level(level: CareLevel) -> Option<&'static str> {
    match level {
        CareLevel::EarlyIntervention | CareLevel::Outpatient => None,
        CareLevel::IntensiveOutpatient => Some("IOP placement"),
        CareLevel::PartialHospitalization => Some("Day treatment"),
        CareLevel::LowIntensityResidential
        | CareLevel::PopulationSpecificResidential
        | CareLevel::HighIntensityResidential => Some("Residential placement"),
        CareLevel::MedicallyMonitored | CareLevel::MedicallyManaged => Some("External referral"),
    }
}

/// Whether a level exceeds this program's own capacity and requires an
/// external referral (3.7 and 4.0).
pub fn requires_referral(level: CareLevel) -> bool {
    matches!(
        level,
        CareLevel::MedicallyMonitored | CareLevel::MedicallyManaged
    )
}
