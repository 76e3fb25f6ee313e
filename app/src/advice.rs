// ==============================================================================
// advice.rs - Risk Factor and Recommendation Generation
// ==============================================================================
// Description: Assembles the explanatory factor list and ordered
//              recommendations for one disease assessment
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.1.0
// ==============================================================================

use crate::models::Disease;
use crate::relatedness::is_directly_related;

/// Diseases whose lowercase name contains one of these markers always list
/// family history as a contributing factor
const FAMILY_HISTORY_MARKERS: [&str; 5] =
    ["cancer", "diabetes", "cardiovascular", "alzheimer", "arthritis"];

/// Build the initial factor list from the patient's own conditions
///
/// Order: "Age" first, one "Existing diagnosis of X" per directly related
/// condition, then disease-category factors, then "Family history" where
/// applicable. Record-derived and evidence-based factors are merged in
/// later by the orchestrator.
pub fn extract_risk_factors(disease: Disease, conditions: &[String]) -> Vec<String> {
    // Age is always a factor
    let mut factors = vec!["Age".to_string()];

    for condition in conditions {
        if is_directly_related(condition, disease) {
            factors.push(format!("Existing diagnosis of {}", condition));
        }
    }

    let disease_name = disease.name().to_lowercase();
    if disease_name.contains("cardiovascular") {
        factors.push("Blood pressure".to_string());
        factors.push("Cholesterol levels".to_string());
    } else if disease_name.contains("diabetes") {
        factors.push("Weight".to_string());
        factors.push("Dietary habits".to_string());
    } else if disease_name.contains("cancer") {
        factors.push("Environmental factors".to_string());
    } else if disease_name.contains("alzheimer") {
        factors.push("Cognitive health".to_string());
    }

    if FAMILY_HISTORY_MARKERS.iter().any(|m| disease_name.contains(m)) {
        factors.push("Family history".to_string());
    }

    factors
}

/// Evidence-based factors merged into high-risk assessments (risk > 30)
pub fn evidence_based_factors(disease: Disease) -> &'static [&'static str] {
    match disease {
        Disease::Cardiovascular => {
            &["Family history", "Lifestyle factors", "Diet and exercise habits"]
        }
        Disease::Type2Diabetes => {
            &["Family history", "Weight management", "Physical activity level"]
        }
        Disease::BreastCancer => &["Family history", "Age", "Reproductive history"],
        Disease::ColorectalCancer => &["Family history", "Diet patterns", "Screening history"],
        Disease::Alzheimers => &["Family history", "Cognitive activity", "Social engagement"],
        Disease::Hypertension => &["Family history", "Sodium intake", "Stress levels"],
        Disease::Asthma => &["Family history", "Environmental exposures", "Allergies"],
        Disease::Depression => &["Family history", "Stress factors", "Previous episodes"],
        Disease::RheumatoidArthritis => &["Family history", "Environmental factors"],
        Disease::Osteoporosis => &["Family history", "Calcium intake", "Exercise patterns"],
    }
}

/// Generate ordered recommendations for a disease at the reported risk level
///
/// Order is significant: the generic provider line, then the risk-tier
/// block (tier lower bounds are inclusive), then the disease-specific
/// lifestyle pair where one is defined.
pub fn generate_recommendations(disease: Disease, risk_percentage: u8) -> Vec<String> {
    let mut recommendations = vec![format!(
        "Discuss your {} risk with your healthcare provider",
        disease.name()
    )];

    if risk_percentage >= 70 {
        recommendations.push(format!("Consider genetic testing for {}", disease.name()));
        recommendations.push("Schedule regular screenings with specialists".to_string());
    } else if risk_percentage >= 40 {
        recommendations
            .push("Consider preventive screenings earlier than standard guidelines".to_string());
        recommendations.push("Monitor symptoms that could be early indicators".to_string());
    } else {
        recommendations
            .push("Follow standard screening guidelines for your age and gender".to_string());
    }

    let disease_name = disease.name().to_lowercase();
    if disease_name.contains("cardiovascular") {
        recommendations.push("Monitor blood pressure and cholesterol regularly".to_string());
        recommendations.push(
            "Maintain heart-healthy diet rich in fruits, vegetables, and whole grains".to_string(),
        );
    } else if disease_name.contains("diabetes") {
        recommendations.push("Monitor blood sugar levels regularly".to_string());
        recommendations.push("Maintain a healthy diet and regular exercise routine".to_string());
    } else if disease_name.contains("cancer") {
        recommendations
            .push("Follow cancer screening guidelines appropriate for your age".to_string());
        recommendations.push("Minimize exposure to known carcinogens".to_string());
    } else if disease_name.contains("alzheimer") {
        recommendations.push("Engage in regular cognitive exercises".to_string());
        recommendations.push("Maintain social connections and mental stimulation".to_string());
    } else if disease_name.contains("hypertension") {
        recommendations.push("Monitor blood pressure regularly".to_string());
        recommendations.push("Reduce sodium intake and maintain healthy weight".to_string());
    } else if disease_name.contains("arthritis") {
        recommendations.push("Maintain joint mobility through appropriate exercise".to_string());
        recommendations.push("Consider anti-inflammatory diet options".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_start_with_age() {
        for disease in Disease::CATALOG {
            let factors = extract_risk_factors(disease, &[]);
            assert_eq!(factors[0], "Age", "{}", disease.name());
        }
    }

    #[test]
    fn test_existing_diagnosis_per_direct_condition() {
        let conditions = vec!["Heart Disease".to_string(), "Obesity".to_string()];
        let factors = extract_risk_factors(Disease::Cardiovascular, &conditions);

        // Direct condition listed, indirect one not
        assert!(factors.contains(&"Existing diagnosis of Heart Disease".to_string()));
        assert!(!factors.contains(&"Existing diagnosis of Obesity".to_string()));
    }

    #[test]
    fn test_disease_category_factors() {
        let cardio = extract_risk_factors(Disease::Cardiovascular, &[]);
        assert!(cardio.contains(&"Blood pressure".to_string()));
        assert!(cardio.contains(&"Cholesterol levels".to_string()));

        let diabetes = extract_risk_factors(Disease::Type2Diabetes, &[]);
        assert!(diabetes.contains(&"Weight".to_string()));
        assert!(diabetes.contains(&"Dietary habits".to_string()));

        let cancer = extract_risk_factors(Disease::BreastCancer, &[]);
        assert!(cancer.contains(&"Environmental factors".to_string()));

        let alzheimers = extract_risk_factors(Disease::Alzheimers, &[]);
        assert!(alzheimers.contains(&"Cognitive health".to_string()));
    }

    #[test]
    fn test_family_history_factor_subset() {
        for disease in [
            Disease::Cardiovascular,
            Disease::Type2Diabetes,
            Disease::BreastCancer,
            Disease::ColorectalCancer,
            Disease::Alzheimers,
            Disease::RheumatoidArthritis,
        ] {
            let factors = extract_risk_factors(disease, &[]);
            assert!(factors.contains(&"Family history".to_string()), "{}", disease.name());
        }

        for disease in [
            Disease::Hypertension,
            Disease::Asthma,
            Disease::Depression,
            Disease::Osteoporosis,
        ] {
            let factors = extract_risk_factors(disease, &[]);
            assert!(!factors.contains(&"Family history".to_string()), "{}", disease.name());
        }
    }

    #[test]
    fn test_evidence_based_factors_present_for_all() {
        for disease in Disease::CATALOG {
            let factors = evidence_based_factors(disease);
            assert!(!factors.is_empty());
            assert_eq!(factors[0], "Family history");
        }
    }

    #[test]
    fn test_recommendations_order_low_tier() {
        let recs = generate_recommendations(Disease::Cardiovascular, 20);

        assert_eq!(
            recs,
            vec![
                "Discuss your Cardiovascular Disease risk with your healthcare provider",
                "Follow standard screening guidelines for your age and gender",
                "Monitor blood pressure and cholesterol regularly",
                "Maintain heart-healthy diet rich in fruits, vegetables, and whole grains",
            ]
        );
    }

    #[test]
    fn test_recommendation_tier_bounds_inclusive() {
        // Exactly 40 selects the middle tier
        let recs = generate_recommendations(Disease::Depression, 40);
        assert_eq!(recs[1], "Consider preventive screenings earlier than standard guidelines");

        // Exactly 70 selects the high tier
        let recs = generate_recommendations(Disease::Depression, 70);
        assert_eq!(recs[1], "Consider genetic testing for Depression");

        // Just below a bound stays in the lower tier
        let recs = generate_recommendations(Disease::Depression, 39);
        assert_eq!(recs[1], "Follow standard screening guidelines for your age and gender");
        let recs = generate_recommendations(Disease::Depression, 69);
        assert_eq!(recs[1], "Consider preventive screenings earlier than standard guidelines");
    }

    #[test]
    fn test_no_disease_specific_block_for_some_diseases() {
        // Depression, asthma, and osteoporosis carry no lifestyle pair:
        // generic line + tier block only
        for disease in [Disease::Depression, Disease::Asthma, Disease::Osteoporosis] {
            let recs = generate_recommendations(disease, 20);
            assert_eq!(recs.len(), 2, "{}", disease.name());
        }
    }

    #[test]
    fn test_high_tier_names_disease() {
        let recs = generate_recommendations(Disease::BreastCancer, 85);
        assert_eq!(recs[1], "Consider genetic testing for Breast Cancer");
        assert_eq!(recs[2], "Schedule regular screenings with specialists");
        // Disease-specific pair follows the tier block
        assert_eq!(recs[3], "Follow cancer screening guidelines appropriate for your age");
    }
}
