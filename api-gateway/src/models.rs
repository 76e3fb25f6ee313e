// ==============================================================================
// models.rs - API Data Models
// ==============================================================================
// Description: Request/response models for the risk assessment API
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================

use chrono::{DateTime, Utc};
use risk_engine::{PatientInput, Relative};
use serde::{Deserialize, Serialize};

/// Risk assessment request body
///
/// Both keys are optional on the wire; absent keys behave as an empty
/// patient and an empty family history.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentRequest {
    pub patient_data: PatientInput,
    pub family_history: Vec<Relative>,
}

/// API information response
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_keys_default() {
        let request: AssessmentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.patient_data.conditions.is_empty());
        assert!(request.family_history.is_empty());
    }

    #[test]
    fn test_request_wire_format() {
        let body = r#"{
            "patientData": {
                "conditions": ["Asthma"],
                "records": [{"recordType": "lab", "title": "t", "description": "d"}]
            },
            "familyHistory": [{"userId": "u1", "relationship": "parent", "conditions": ["Asthma"]}]
        }"#;

        let request: AssessmentRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.patient_data.conditions, vec!["Asthma"]);
        assert_eq!(request.patient_data.records[0].record_type, "lab");
        assert_eq!(request.family_history[0].user_id, "u1");
    }
}
