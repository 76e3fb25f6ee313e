// ==============================================================================
// handlers.rs - API Request Handlers
// ==============================================================================
// Description: HTTP request handlers for the risk assessment API
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{error, info};

use risk_engine::RiskAssessment;

use crate::models::{ApiInfoResponse, ErrorResponse, HealthResponse};
use crate::validator::{self, ValidationError};

/// Root endpoint - API information
pub async fn root() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "Genetic Risk API Gateway",
        version: "1.0.0",
        endpoints: vec![
            "/api/health - Health check",
            "/api/risk-assessment - Assess genetic risk (POST)",
        ],
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: "1.0.0",
        timestamp: Utc::now(),
    })
}

/// Risk assessment endpoint
///
/// Validates the top-level request shape, runs the scoring pipeline, and
/// returns the full ordered assessment list.
pub async fn assess_risk(Json(body): Json<Value>) -> Result<Json<Vec<RiskAssessment>>, AppError> {
    info!("Received risk assessment request");

    let request = validator::parse_request(body)?;

    let assessments = risk_engine::assess(&request.patient_data, &request.family_history);

    Ok(Json(assessments))
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(ErrorResponse::new(error_message));
        (status, body).into_response()
    }
}
