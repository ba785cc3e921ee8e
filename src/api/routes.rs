//! HTTP route definitions.
//!
//! ```text
//! GET  /vpcs    - DescribeVpcs, formatted text
//! GET  /ec2s    - DescribeInstances, formatted text
//! GET  /eks     - ListClusters, formatted text
//! GET  /quotas  - ListServiceQuotas per configured service code
//! GET  /health  - liveness, JSON
//! POST /quota   - RequestServiceQuotaIncrease, JSON receipt
//! ```
//!
//! A known path hit with the wrong method gets the router's 405; unknown
//! paths get 404.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::api::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/vpcs", get(handlers::get_vpcs))
        .route("/ec2s", get(handlers::get_ec2s))
        .route("/eks", get(handlers::get_eks_clusters))
        .route("/quotas", get(handlers::get_quotas))
        .route("/health", get(handlers::get_health))
        .route("/quota", post(handlers::request_quota_increase))
        .with_state(state)
}
