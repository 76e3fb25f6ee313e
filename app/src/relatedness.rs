// ==============================================================================
// relatedness.rs - Condition/Disease Relatedness Classification
// ==============================================================================
// Description: Classifies free-text conditions as directly or indirectly
//              related to a catalog disease
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================
// Matching is deliberately heuristic: case-insensitive substring tests plus
// a small synonym table. Callers check direct relatedness first and only
// consult the indirect test when direct is false.
// ==============================================================================

use crate::models::Disease;

/// Check whether a condition names the disease itself
///
/// True when condition and disease name contain each other (either
/// direction, case-insensitive), or when a known synonym applies:
/// heart -> cardiovascular, sugar -> diabetes,
/// blood pressure -> cardiovascular/hypertension, dementia -> alzheimer.
pub fn is_directly_related(condition: &str, disease: Disease) -> bool {
    let condition = condition.to_lowercase();
    let disease_name = disease.name().to_lowercase();

    // Direct match either direction
    if condition.contains(&disease_name) || disease_name.contains(&condition) {
        return true;
    }

    // Synonym rules
    if condition.contains("heart") && disease_name.contains("cardiovascular") {
        return true;
    }
    if condition.contains("sugar") && disease_name.contains("diabetes") {
        return true;
    }
    if condition.contains("blood pressure")
        && (disease_name.contains("cardiovascular") || disease_name.contains("hypertension"))
    {
        return true;
    }
    if condition.contains("dementia") && disease_name.contains("alzheimer") {
        return true;
    }

    false
}

/// Check whether a condition is a known comorbidity of the disease
///
/// True when any of the disease's indirect keywords appears as a
/// case-insensitive substring of the condition.
pub fn is_indirectly_related(condition: &str, disease: Disease) -> bool {
    let condition = condition.to_lowercase();

    disease
        .indirect_keywords()
        .iter()
        .any(|keyword| condition.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_substring_both_directions() {
        // Condition contains disease name
        assert!(is_directly_related("Severe Hypertension", Disease::Hypertension));
        // Disease name contains condition
        assert!(is_directly_related("Diabetes", Disease::Type2Diabetes));
        // Case-insensitive
        assert!(is_directly_related("ASTHMA", Disease::Asthma));
    }

    #[test]
    fn test_direct_synonyms() {
        assert!(is_directly_related("Heart Disease", Disease::Cardiovascular));
        assert!(is_directly_related("Heart Attack", Disease::Cardiovascular));
        assert!(is_directly_related("High Sugar", Disease::Type2Diabetes));
        assert!(is_directly_related("High Blood Pressure", Disease::Cardiovascular));
        assert!(is_directly_related("High Blood Pressure", Disease::Hypertension));
        assert!(is_directly_related("Dementia", Disease::Alzheimers));
    }

    #[test]
    fn test_synonyms_do_not_leak_across_diseases() {
        assert!(!is_directly_related("Heart Disease", Disease::Type2Diabetes));
        assert!(!is_directly_related("High Sugar", Disease::Cardiovascular));
        assert!(!is_directly_related("Dementia", Disease::Depression));
    }

    #[test]
    fn test_unrelated_condition() {
        assert!(!is_directly_related("Broken Leg", Disease::Osteoporosis));
        assert!(!is_indirectly_related("Broken Leg", Disease::Osteoporosis));
    }

    #[test]
    fn test_indirect_keywords() {
        assert!(is_indirectly_related("Type 2 Diabetes", Disease::Cardiovascular));
        assert!(is_indirectly_related("Obesity", Disease::Cardiovascular));
        assert!(is_indirectly_related("High Cholesterol", Disease::Cardiovascular));
        assert!(is_indirectly_related("Colonic Polyps", Disease::ColorectalCancer));
        assert!(is_indirectly_related("Crohn's Disease", Disease::ColorectalCancer));
        assert!(is_indirectly_related("Anxiety Disorder", Disease::Depression));
        assert!(is_indirectly_related("Lupus", Disease::RheumatoidArthritis));
    }

    #[test]
    fn test_indirect_is_disease_specific() {
        // Obesity is a cardiovascular/diabetes comorbidity, not an asthma one
        assert!(is_indirectly_related("Obesity", Disease::Type2Diabetes));
        assert!(!is_indirectly_related("Obesity", Disease::Asthma));
    }
}
