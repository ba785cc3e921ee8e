//! Endpoint handlers.
//!
//! Each read handler makes one upstream call (or a short fixed loop for
//! quotas) and renders the result as text. Upstream failures become
//! `ApiError::UpstreamError` and surface as 502; they never kill the server.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::core::format;
use crate::domain::model::{QuotaIncreaseReceipt, QuotaIncreaseRequest};
use crate::utils::error::ApiError;
use crate::utils::validation::Validate;

/// GET /vpcs
pub async fn get_vpcs(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let vpcs = state.inventory.list_vpcs().await?;
    info!("listed {} VPCs", vpcs.len());
    Ok(format::render_vpcs(&vpcs))
}

/// GET /ec2s
pub async fn get_ec2s(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let instances = state.inventory.list_instances().await?;
    info!("listed {} EC2 instances", instances.len());
    Ok(format::render_instances(&instances))
}

/// GET /eks
pub async fn get_eks_clusters(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let clusters = state.inventory.list_clusters(state.max_clusters).await?;
    info!("listed {} EKS clusters", clusters.len());
    Ok(format::render_clusters(&clusters))
}

/// GET /quotas
///
/// One ListServiceQuotas call per configured service code, grouped in
/// configured order.
pub async fn get_quotas(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let mut groups = Vec::with_capacity(state.quota_services.len());
    for service_code in &state.quota_services {
        let quotas = state.quotas.list_service_quotas(service_code).await?;
        info!("listed {} quotas for {}", quotas.len(), service_code);
        groups.push((service_code.clone(), quotas));
    }
    Ok(format::render_quotas(&groups))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /health — always 200.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// POST /quota
///
/// Body is decoded by hand so malformed JSON maps to 400 rather than the
/// extractor's default 422.
pub async fn request_quota_increase(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<QuotaIncreaseReceipt>, ApiError> {
    let request: QuotaIncreaseRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::validation(format!("invalid request payload: {}", e)))?;
    request.validate()?;

    info!(
        "requesting quota increase: service={} quota={} desired={}",
        request.service_code, request.quota_code, request.desired_value
    );
    let receipt = state.quotas.request_increase(&request).await?;
    Ok(Json(receipt))
}
