use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// A VPC as reported by DescribeVpcs. Identity fields only; AWS owns the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    pub vpc_id: String,
    pub cidr_block: String,
}

/// An EC2 instance as reported by DescribeInstances.
///
/// Public IP and VPC id are optional on the wire (stopped or private
/// instances have neither).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2Instance {
    pub instance_id: String,
    pub instance_type: String,
    pub public_ip: Option<String>,
    pub vpc_id: Option<String>,
}

/// One applied service quota from ListServiceQuotas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceQuota {
    pub quota_name: String,
    pub service_name: String,
    pub quota_code: String,
    pub value: f64,
}

/// Body of POST /quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaIncreaseRequest {
    pub desired_value: f64,
    pub quota_code: String,
    pub service_code: String,
}

impl Validate for QuotaIncreaseRequest {
    fn validate(&self) -> Result<()> {
        // catches zero, negatives, and NaN
        if self.desired_value.is_nan() || self.desired_value <= 0.0 {
            return Err(crate::utils::error::ApiError::validation(
                "desired_value must be greater than zero",
            ));
        }
        validate_non_empty_string("quota_code", &self.quota_code)?;
        validate_non_empty_string("service_code", &self.service_code)?;
        Ok(())
    }
}

/// What RequestServiceQuotaIncrease handed back, echoing the request fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaIncreaseReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    pub service_code: String,
    pub quota_code: String,
    pub desired_value: f64,
}
