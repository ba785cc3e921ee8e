//! AWS SDK adapter behind the `Inventory` and `Quotas` ports.
//!
//! One shared credential/region resolution at startup; three service clients
//! built from it. Every optional field the SDK models stays optional here.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::error::DisplayErrorContext;

use crate::config::Settings;
use crate::domain::model::{
    Ec2Instance, QuotaIncreaseReceipt, QuotaIncreaseRequest, ServiceQuota, Vpc,
};
use crate::domain::ports::{Inventory, Quotas};
use crate::utils::error::{ApiError, Result};

pub struct AwsCloud {
    ec2: aws_sdk_ec2::Client,
    eks: aws_sdk_eks::Client,
    quotas: aws_sdk_servicequotas::Client,
}

impl AwsCloud {
    /// Resolve credentials once (default chain, optionally a named profile)
    /// and build all service clients from the shared config.
    pub async fn from_settings(settings: &Settings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        Self::from_sdk_config(&sdk_config)
    }

    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            ec2: aws_sdk_ec2::Client::new(sdk_config),
            eks: aws_sdk_eks::Client::new(sdk_config),
            quotas: aws_sdk_servicequotas::Client::new(sdk_config),
        }
    }

    /// Build from pre-configured clients. Used by tests pointing individual
    /// clients at a mock endpoint.
    pub fn from_clients(
        ec2: aws_sdk_ec2::Client,
        eks: aws_sdk_eks::Client,
        quotas: aws_sdk_servicequotas::Client,
    ) -> Self {
        Self { ec2, eks, quotas }
    }
}

#[async_trait]
impl Inventory for AwsCloud {
    async fn list_vpcs(&self) -> Result<Vec<Vpc>> {
        let out = self
            .ec2
            .describe_vpcs()
            .dry_run(false)
            .send()
            .await
            .map_err(|e| ApiError::upstream("ec2", DisplayErrorContext(&e)))?;

        Ok(out
            .vpcs()
            .iter()
            .map(|v| Vpc {
                vpc_id: v.vpc_id().unwrap_or_default().to_string(),
                cidr_block: v.cidr_block().unwrap_or_default().to_string(),
            })
            .collect())
    }

    async fn list_instances(&self) -> Result<Vec<Ec2Instance>> {
        let out = self
            .ec2
            .describe_instances()
            .dry_run(false)
            .send()
            .await
            .map_err(|e| ApiError::upstream("ec2", DisplayErrorContext(&e)))?;

        let mut instances = Vec::new();
        for reservation in out.reservations() {
            for instance in reservation.instances() {
                instances.push(Ec2Instance {
                    instance_id: instance.instance_id().unwrap_or_default().to_string(),
                    instance_type: instance
                        .instance_type()
                        .map(|t| t.as_str().to_string())
                        .unwrap_or_default(),
                    public_ip: instance.public_ip_address().map(str::to_string),
                    vpc_id: instance.vpc_id().map(str::to_string),
                });
            }
        }
        Ok(instances)
    }

    async fn list_clusters(&self, max_results: i32) -> Result<Vec<String>> {
        let out = self
            .eks
            .list_clusters()
            .max_results(max_results)
            .send()
            .await
            .map_err(|e| ApiError::upstream("eks", DisplayErrorContext(&e)))?;

        Ok(out.clusters().to_vec())
    }
}

#[async_trait]
impl Quotas for AwsCloud {
    async fn list_service_quotas(&self, service_code: &str) -> Result<Vec<ServiceQuota>> {
        let out = self
            .quotas
            .list_service_quotas()
            .service_code(service_code)
            .send()
            .await
            .map_err(|e| ApiError::upstream("servicequotas", DisplayErrorContext(&e)))?;

        Ok(out
            .quotas()
            .iter()
            .map(|q| ServiceQuota {
                quota_name: q.quota_name().unwrap_or_default().to_string(),
                service_name: q.service_name().unwrap_or_default().to_string(),
                quota_code: q.quota_code().unwrap_or_default().to_string(),
                value: q.value().unwrap_or_default(),
            })
            .collect())
    }

    async fn request_increase(
        &self,
        request: &QuotaIncreaseRequest,
    ) -> Result<QuotaIncreaseReceipt> {
        let out = self
            .quotas
            .request_service_quota_increase()
            .service_code(&request.service_code)
            .quota_code(&request.quota_code)
            .desired_value(request.desired_value)
            .send()
            .await
            .map_err(|e| ApiError::upstream("servicequotas", DisplayErrorContext(&e)))?;

        let change = out.requested_quota();
        Ok(QuotaIncreaseReceipt {
            request_id: change.and_then(|c| c.id()).map(str::to_string),
            status: change
                .and_then(|c| c.status())
                .map(|s| s.as_str().to_string()),
            case_id: change.and_then(|c| c.case_id()).map(str::to_string),
            service_code: request.service_code.clone(),
            quota_code: request.quota_code.clone(),
            desired_value: request.desired_value,
        })
    }
}
