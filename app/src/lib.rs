// ==============================================================================
// lib.rs - Risk Engine Library
// ==============================================================================
// Description: Library interface for genetic risk scoring modules
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================

pub mod models;
pub mod relatedness;
pub mod records;
pub mod scoring;
pub mod advice;
pub mod processor;

pub use models::{FamilyContribution, PatientInput, Relative, RiskAssessment};
pub use processor::assess;
