// ==============================================================================
// validator.rs - Request Shape Validation (API Gateway)
// ==============================================================================
// Description: Validates request bodies at the API layer before they reach
//              the risk engine
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================
// The engine tolerates missing fields but assumes shape-valid input, so
// top-level types and collection sizes are checked here.
// ==============================================================================

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::AssessmentRequest;

// Collection size limits (enforced at validation layer)
const MAX_CONDITIONS: usize = 200;
const MAX_RECORDS: usize = 500;
const MAX_RELATIVES: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Top-level shape is wrong: body is not an object, `patientData` is
    /// not an object, `familyHistory` is not an array, or a nested field
    /// has the wrong type. Message matches the original API contract.
    #[error("Invalid input format")]
    InvalidShape,

    #[error("Too many {field}: {count} (max: {max})")]
    LimitExceeded {
        field: &'static str,
        count: usize,
        max: usize,
    },
}

/// Parse and validate a risk assessment request body
pub fn parse_request(body: Value) -> Result<AssessmentRequest, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::InvalidShape)?;

    // Explicit top-level type checks before deserialization, so a wrong
    // shape reports the contract error rather than a serde message
    if let Some(patient_data) = object.get("patientData") {
        if !patient_data.is_object() {
            return Err(ValidationError::InvalidShape);
        }
    }
    if let Some(family_history) = object.get("familyHistory") {
        if !family_history.is_array() {
            return Err(ValidationError::InvalidShape);
        }
    }

    let request: AssessmentRequest =
        serde_json::from_value(body).map_err(|_| ValidationError::InvalidShape)?;

    check_limit("conditions", request.patient_data.conditions.len(), MAX_CONDITIONS)?;
    check_limit("records", request.patient_data.records.len(), MAX_RECORDS)?;
    check_limit("relatives", request.family_history.len(), MAX_RELATIVES)?;
    for relative in &request.family_history {
        check_limit("relative conditions", relative.conditions.len(), MAX_CONDITIONS)?;
    }

    debug!(
        "Request validated: {} conditions, {} records, {} relatives",
        request.patient_data.conditions.len(),
        request.patient_data.records.len(),
        request.family_history.len()
    );

    Ok(request)
}

fn check_limit(field: &'static str, count: usize, max: usize) -> Result<(), ValidationError> {
    if count > max {
        return Err(ValidationError::LimitExceeded { field, count, max });
    }
    Ok(())
}
