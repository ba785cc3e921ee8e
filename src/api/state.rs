use std::sync::Arc;

use crate::domain::ports::{Inventory, Quotas};

/// Shared, read-only handler state. Handlers hold no mutable state; each
/// request goes straight to the cloud ports.
pub struct AppState {
    pub inventory: Arc<dyn Inventory>,
    pub quotas: Arc<dyn Quotas>,
    pub quota_services: Vec<String>,
    pub max_clusters: i32,
}

impl AppState {
    pub fn new(
        inventory: Arc<dyn Inventory>,
        quotas: Arc<dyn Quotas>,
        quota_services: Vec<String>,
        max_clusters: i32,
    ) -> Self {
        Self {
            inventory,
            quotas,
            quota_services,
            max_clusters,
        }
    }
}
