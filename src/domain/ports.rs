use crate::domain::model::{Ec2Instance, QuotaIncreaseReceipt, QuotaIncreaseRequest, ServiceQuota, Vpc};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view over the account's compute and network resources.
#[async_trait]
pub trait Inventory: Send + Sync {
    async fn list_vpcs(&self) -> Result<Vec<Vpc>>;
    async fn list_instances(&self) -> Result<Vec<Ec2Instance>>;
    async fn list_clusters(&self, max_results: i32) -> Result<Vec<String>>;
}

/// Service Quotas operations: one read, one write.
#[async_trait]
pub trait Quotas: Send + Sync {
    async fn list_service_quotas(&self, service_code: &str) -> Result<Vec<ServiceQuota>>;
    async fn request_increase(&self, request: &QuotaIncreaseRequest)
        -> Result<QuotaIncreaseReceipt>;
}
