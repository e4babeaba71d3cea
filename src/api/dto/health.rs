//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response with component status and feature flags.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
    pub features: FeatureFlags,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Validation stages that can be toggled by configuration.
#[derive(Debug, Serialize)]
pub struct FeatureFlags {
    pub dns_check: bool,
    pub liveness_check: bool,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
