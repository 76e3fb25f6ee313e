// ==============================================================================
// scoring.rs - Risk Scoring Arithmetic
// ==============================================================================
// Description: Base risk accumulation, family impact scoring, and the
//              diminishing-returns risk combination
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.1.0
// ==============================================================================

use std::collections::HashMap;

use crate::models::{Disease, Relationship};
use crate::relatedness::{is_directly_related, is_indirectly_related};

/// Lower and upper bound for any reported risk percentage
pub const RISK_FLOOR: f64 = 5.0;
pub const RISK_CEILING: f64 = 95.0;

/// Calculate base risk from the patient's own conditions and record factors
///
/// Starts from the disease baseline, adds 15.0 per directly related
/// condition, 5.0 per indirectly related condition, and 3.0 per raw
/// record-derived factor. The result is uncapped; clamping happens in
/// `combine_risk`.
pub fn calculate_base_risk(
    disease: Disease,
    conditions: &[String],
    record_factors: &HashMap<Disease, Vec<String>>,
) -> f64 {
    let mut base_risk = disease.baseline_risk();

    for condition in conditions {
        if is_directly_related(condition, disease) {
            // Strong correlation with existing condition
            base_risk += 15.0;
        } else if is_indirectly_related(condition, disease) {
            // Indirect correlation
            base_risk += 5.0;
        }
    }

    if let Some(factors) = record_factors.get(&disease) {
        base_risk += factors.len() as f64 * 3.0;
    }

    base_risk
}

/// Score one relative's condition against a disease
///
/// Base relationship impact, scaled by relatedness (full for direct, x0.6
/// for indirect, x0.2 otherwise) and by genetic degree. The x0.2 branch is
/// unreachable when callers pre-filter by relatedness, but stays in place
/// so the function is total over its inputs.
pub fn relationship_impact(relationship: Relationship, condition: &str, disease: Disease) -> f64 {
    let mut impact = relationship.base_impact();

    if is_directly_related(condition, disease) {
        // Direct correlation, full impact
    } else if is_indirectly_related(condition, disease) {
        impact *= 0.6;
    } else {
        impact *= 0.2;
    }

    impact * relationship.degree_multiplier()
}

/// Combine base and family risk with the disease heritability weight
///
/// The family term is divided by `1 + base * 0.02` so family history
/// contributes less as the base risk grows, preventing additive blow-up
/// when both signals are already high. Result is clamped to [5, 95].
pub fn combine_risk(base_risk: f64, family_risk: f64, disease: Disease) -> f64 {
    let weighted_family_risk = family_risk * disease.family_history_weight();
    let total_risk = base_risk + weighted_family_risk / (1.0 + base_risk * 0.02);

    clamp_risk(total_risk)
}

/// Clamp a risk value to the reportable [5, 95] percentage range
pub fn clamp_risk(risk: f64) -> f64 {
    risk.clamp(RISK_FLOOR, RISK_CEILING)
}
