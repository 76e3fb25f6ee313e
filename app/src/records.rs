// ==============================================================================
// records.rs - Patient Record Analysis
// ==============================================================================
// Description: Scans unstructured record entries for disease-associated
//              keywords and collects candidate risk factors per disease
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================
// Only the record description is scanned. Factor strings may repeat across
// records; de-duplication happens later when the factor lists are merged
// into the assessment, and the raw count feeds the base risk calculation.
// ==============================================================================

use std::collections::HashMap;

use crate::models::{Disease, MedicalRecord};

const CARDIOVASCULAR_TERMS: [&str; 4] = ["cholesterol", "blood pressure", "hypertension", "heart"];
const DIABETES_TERMS: [&str; 4] = ["glucose", "sugar", "a1c", "insulin"];
const CANCER_TERMS: [&str; 4] = ["tumor", "growth", "mass", "biopsy"];

/// Analyze patient records and return candidate risk factors keyed by disease
pub fn analyze_patient_records(records: &[MedicalRecord]) -> HashMap<Disease, Vec<String>> {
    let mut risk_factors: HashMap<Disease, Vec<String>> = HashMap::new();

    for record in records {
        let description = record.description.to_lowercase();

        // Cardiovascular indicators
        if CARDIOVASCULAR_TERMS.iter().any(|t| description.contains(t)) {
            let factors = risk_factors.entry(Disease::Cardiovascular).or_default();

            if description.contains("cholesterol") {
                factors.push("Cholesterol issues".to_string());
            }
            if description.contains("blood pressure") || description.contains("hypertension") {
                factors.push("Blood pressure issues".to_string());
            }
        }

        // Diabetes indicators
        if DIABETES_TERMS.iter().any(|t| description.contains(t)) {
            risk_factors
                .entry(Disease::Type2Diabetes)
                .or_default()
                .push("Blood sugar abnormalities".to_string());
        }

        // Cancer indicators apply to both cancer catalog entries
        if CANCER_TERMS.iter().any(|t| description.contains(t)) {
            for cancer in [Disease::BreastCancer, Disease::ColorectalCancer] {
                risk_factors
                    .entry(cancer)
                    .or_default()
                    .push("Previous suspicious findings".to_string());
            }
        }

        // Cognitive indicators
        if description.contains("cognitive") || description.contains("memory") {
            risk_factors
                .entry(Disease::Alzheimers)
                .or_default()
                .push("Cognitive concerns".to_string());
        }

        // Joint indicators
        if description.contains("joint") || description.contains("arthritis") {
            risk_factors
                .entry(Disease::RheumatoidArthritis)
                .or_default()
                .push("Joint issues".to_string());
        }

        // Bone indicators
        if description.contains("bone") || description.contains("density") {
            risk_factors
                .entry(Disease::Osteoporosis)
                .or_default()
                .push("Bone health concerns".to_string());
        }
    }

    risk_factors
}
