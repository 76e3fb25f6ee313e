// ==============================================================================
// models.rs - Risk Assessment Data Models
// ==============================================================================
// Description: Disease catalog, lookup tables, and request/result structures
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.1.0
// ==============================================================================

use serde::{Deserialize, Serialize};

/// Disease catalog for risk assessment
///
/// The catalog is closed: every per-disease table (baseline risk, family
/// history weight, indirect-relation keywords) is an exhaustive match on
/// this enum, so no "unknown disease" fallback can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disease {
    Cardiovascular,
    Type2Diabetes,
    BreastCancer,
    ColorectalCancer,
    Alzheimers,
    Hypertension,
    Asthma,
    Depression,
    RheumatoidArthritis,
    Osteoporosis,
}

impl Disease {
    /// Fixed assessment order. Result ordering falls back to this on ties.
    pub const CATALOG: [Disease; 10] = [
        Disease::Cardiovascular,
        Disease::Type2Diabetes,
        Disease::BreastCancer,
        Disease::ColorectalCancer,
        Disease::Alzheimers,
        Disease::Hypertension,
        Disease::Asthma,
        Disease::Depression,
        Disease::RheumatoidArthritis,
        Disease::Osteoporosis,
    ];

    /// Display name, also used for condition-name matching
    pub fn name(&self) -> &'static str {
        match self {
            Disease::Cardiovascular => "Cardiovascular Disease",
            Disease::Type2Diabetes => "Type 2 Diabetes",
            Disease::BreastCancer => "Breast Cancer",
            Disease::ColorectalCancer => "Colorectal Cancer",
            Disease::Alzheimers => "Alzheimer's Disease",
            Disease::Hypertension => "Hypertension",
            Disease::Asthma => "Asthma",
            Disease::Depression => "Depression",
            Disease::RheumatoidArthritis => "Rheumatoid Arthritis",
            Disease::Osteoporosis => "Osteoporosis",
        }
    }

    /// Baseline population risk percentage before any personal or family
    /// adjustment
    pub fn baseline_risk(&self) -> f64 {
        match self {
            Disease::Cardiovascular => 10.0,
            Disease::Type2Diabetes => 8.0,
            Disease::BreastCancer => 6.0,
            Disease::ColorectalCancer => 5.0,
            Disease::Alzheimers => 7.0,
            Disease::Hypertension => 12.0,
            Disease::Asthma => 6.0,
            Disease::Depression => 8.0,
            Disease::RheumatoidArthritis => 5.0,
            Disease::Osteoporosis => 7.0,
        }
    }

    /// Heritability weight applied to accumulated family risk
    pub fn family_history_weight(&self) -> f64 {
        match self {
            Disease::BreastCancer => 2.0,
            Disease::ColorectalCancer => 1.8,
            Disease::Alzheimers => 1.7,
            Disease::Type2Diabetes => 1.5,
            Disease::Cardiovascular => 1.5,
            Disease::RheumatoidArthritis => 1.3,
            Disease::Hypertension => 1.2,
            Disease::Osteoporosis => 1.2,
            Disease::Asthma => 1.1,
            Disease::Depression => 1.0,
        }
    }

    /// Comorbidity keywords marking a condition as indirectly related
    pub fn indirect_keywords(&self) -> &'static [&'static str] {
        match self {
            Disease::Cardiovascular => &["diabetes", "obesity", "kidney", "cholesterol"],
            Disease::Type2Diabetes => &["obesity", "cardiovascular", "hypertension"],
            Disease::BreastCancer => &["hormonal", "ovarian"],
            Disease::ColorectalCancer => &["polyps", "inflammatory bowel", "crohn", "colitis"],
            Disease::Alzheimers => &["cardiovascular", "diabetes", "depression"],
            Disease::Hypertension => &["kidney", "thyroid", "sleep apnea"],
            Disease::Asthma => &["allergies", "eczema", "respiratory"],
            Disease::Depression => &["anxiety", "bipolar", "sleep disorder"],
            Disease::RheumatoidArthritis => &["lupus", "psoriasis", "inflammatory"],
            Disease::Osteoporosis => &["hormonal", "celiac", "inflammatory"],
        }
    }
}

/// Family relationship of a relative to the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Sibling,
    Child,
    Grandparent,
    Grandchild,
    Spouse,
    Other,
}

impl Relationship {
    /// Parse a wire relationship string, case-insensitive.
    /// Unrecognized values map to `Other` (lowest impact), never an error.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "parent" => Relationship::Parent,
            "sibling" => Relationship::Sibling,
            "child" => Relationship::Child,
            "grandparent" => Relationship::Grandparent,
            "grandchild" => Relationship::Grandchild,
            "spouse" => Relationship::Spouse,
            _ => Relationship::Other,
        }
    }

    /// Base impact score contributed by one matching condition
    pub fn base_impact(&self) -> f64 {
        match self {
            Relationship::Parent => 15.0,
            Relationship::Sibling => 10.0,
            Relationship::Child => 8.0,
            Relationship::Grandparent => 6.0,
            Relationship::Grandchild => 5.0,
            Relationship::Spouse => 2.0,
            Relationship::Other => 1.0,
        }
    }

    /// Genetic-degree multiplier: first-degree relatives share the most
    /// genetic material, second-degree less, everyone else none assumed
    pub fn degree_multiplier(&self) -> f64 {
        match self {
            Relationship::Parent | Relationship::Sibling | Relationship::Child => 1.4,
            Relationship::Grandparent | Relationship::Grandchild => 1.2,
            Relationship::Spouse | Relationship::Other => 1.0,
        }
    }
}

/// One unstructured medical record entry.
///
/// Only `description` is scanned for keywords; `record_type` and `title`
/// are accepted on the wire but not inspected (current behavior).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalRecord {
    pub record_type: String,
    pub title: String,
    pub description: String,
}

/// Patient-side input: own conditions plus record entries.
/// Missing fields deserialize to empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    pub conditions: Vec<String>,
    pub records: Vec<MedicalRecord>,
}

/// One family-history entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relative {
    pub user_id: String,
    /// Raw relationship string, mapped through `Relationship::parse`
    pub relationship: String,
    pub conditions: Vec<String>,
}

/// One (relative, matching condition) pair contributing to family risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyContribution {
    pub user_id: String,
    pub condition: String,
    pub relationship: String,
    /// Rounded for display; the unrounded value feeds the risk sum
    pub impact: i64,
}

/// Per-disease assessment result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub disease_name: &'static str,
    /// Always within [5, 95]
    pub risk_percentage: u8,
    pub factors: Vec<String>,
    pub family_history_contribution: Vec<FamilyContribution>,
    pub recommendations: Vec<String>,
}
