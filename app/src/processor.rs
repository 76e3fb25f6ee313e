// ==============================================================================
// processor.rs - Assessment Orchestration
// ==============================================================================
// Description: Drives the per-disease scoring pipeline and assembles the
//              ordered risk assessment list
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.1.0
// ==============================================================================

use std::collections::HashMap;

use tracing::{debug, info};

use crate::advice::{evidence_based_factors, extract_risk_factors, generate_recommendations};
use crate::models::{
    Disease, FamilyContribution, PatientInput, Relationship, Relative, RiskAssessment,
};
use crate::records::analyze_patient_records;
use crate::relatedness::{is_directly_related, is_indirectly_related};
use crate::scoring::{calculate_base_risk, clamp_risk, combine_risk, relationship_impact};

/// Evidence-based factors are merged in once combined risk passes this level
const EVIDENCE_FACTOR_THRESHOLD: f64 = 30.0;

/// Assess the patient against the full disease catalog
///
/// Pure function of its inputs: records are analyzed once, then each
/// catalog disease runs through base risk, family impact, combination,
/// and factor/recommendation assembly. The returned list always covers
/// the whole catalog, sorted by risk percentage descending (stable, so
/// ties keep catalog order).
pub fn assess(patient: &PatientInput, family_history: &[Relative]) -> Vec<RiskAssessment> {
    info!(
        "Assessing genetic risk: {} conditions, {} records, {} relatives",
        patient.conditions.len(),
        patient.records.len(),
        family_history.len()
    );

    let record_factors = analyze_patient_records(&patient.records);

    let mut assessments: Vec<RiskAssessment> = Disease::CATALOG
        .iter()
        .map(|&disease| assess_disease(disease, patient, family_history, &record_factors))
        .collect();

    // Stable sort keeps catalog order on ties
    assessments.sort_by(|a, b| b.risk_percentage.cmp(&a.risk_percentage));

    info!("Generated {} risk assessments", assessments.len());
    assessments
}

fn assess_disease(
    disease: Disease,
    patient: &PatientInput,
    family_history: &[Relative],
    record_factors: &HashMap<Disease, Vec<String>>,
) -> RiskAssessment {
    let base_risk = calculate_base_risk(disease, &patient.conditions, record_factors);

    let mut factors = extract_risk_factors(disease, &patient.conditions);

    // Merge record-derived factors, de-duplicating by value
    if let Some(record_derived) = record_factors.get(&disease) {
        for factor in record_derived {
            if !factors.contains(factor) {
                factors.push(factor.clone());
            }
        }
    }

    let (family_risk, contributions) = score_family_history(disease, family_history);

    let total_risk = combine_risk(base_risk, family_risk, disease);

    // High-risk assessments also list evidence-based factors
    if total_risk > EVIDENCE_FACTOR_THRESHOLD {
        for factor in evidence_based_factors(disease) {
            if !factors.iter().any(|f| f == factor) {
                factors.push((*factor).to_string());
            }
        }
    }

    // Combiner already bounds the value; re-clamp as the final guarantee
    // before reporting
    let total_risk = clamp_risk(total_risk);
    let risk_percentage = total_risk.round() as u8;

    debug!(
        "{}: base {:.1}, family {:.1}, total {}%",
        disease.name(),
        base_risk,
        family_risk,
        risk_percentage
    );

    RiskAssessment {
        disease_name: disease.name(),
        risk_percentage,
        factors,
        family_history_contribution: contributions,
        recommendations: generate_recommendations(disease, risk_percentage),
    }
}

/// Accumulate family risk and per-match contribution entries for a disease
///
/// Relatives with no conditions or an empty relationship string are
/// skipped entirely. A condition contributes only when it is directly or
/// indirectly related to the disease; the contribution entry carries the
/// rounded impact while the unrounded value feeds the sum.
fn score_family_history(
    disease: Disease,
    family_history: &[Relative],
) -> (f64, Vec<FamilyContribution>) {
    let mut family_risk = 0.0;
    let mut contributions = Vec::new();

    for relative in family_history {
        if relative.conditions.is_empty() || relative.relationship.is_empty() {
            continue;
        }

        let relationship_raw = relative.relationship.to_lowercase();
        let relationship = Relationship::parse(&relationship_raw);

        for condition in &relative.conditions {
            if is_directly_related(condition, disease) || is_indirectly_related(condition, disease)
            {
                let impact = relationship_impact(relationship, condition, disease);
                family_risk += impact;

                contributions.push(FamilyContribution {
                    user_id: relative.user_id.clone(),
                    condition: condition.clone(),
                    relationship: relationship_raw.clone(),
                    impact: impact.round() as i64,
                });
            }
        }
    }

    (family_risk, contributions)
}
