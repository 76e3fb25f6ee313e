// ==============================================================================
// main.rs - Risk API Gateway Entry Point
// ==============================================================================
// Description: Axum web server for the genetic risk assessment API
// Author: Matt Barham
// Created: 2025-12-04
// Modified: 2026-01-17
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};

mod handlers;
mod models;
mod validator;

#[tokio::main]
async fn main() -> Result<()> {
    let server_port = 5001;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("Starting Genetic Risk API Gateway v1.0.0");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Build router with all endpoints
    let app = build_router();

    // Bind server
    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    info!("API Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_router() -> Router {
    // API routes
    let api_routes = Router::new()
        // Risk assessment
        .route("/risk-assessment", post(handlers::assess_risk))
        // Health check
        .route("/health", get(handlers::health_check));

    // Origins are configured via CORS_ALLOWED_ORIGINS env var (comma-separated)
    let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let allowed_origins: Vec<_> = cors_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Combine all routes
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                // Request tracing
                .layer(TraceLayer::new_for_http())
                // Opaque 500 instead of a dropped connection if anything panics
                .layer(CatchPanicLayer::new())
                .layer(cors)
                // Assessment payloads are small structured JSON
                .layer(DefaultBodyLimit::max(2 * 1024 * 1024)),
        )
}
