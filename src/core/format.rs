//! Text rendering for the read endpoints.
//!
//! One blank-line-separated block per resource, `Key: value` lines. Absent
//! optional fields render as `-` so a private instance never breaks output.

use crate::domain::model::{Ec2Instance, ServiceQuota, Vpc};

pub fn render_vpcs(vpcs: &[Vpc]) -> String {
    if vpcs.is_empty() {
        return "No VPCs found.\n".to_string();
    }

    let mut out = String::new();
    for vpc in vpcs {
        out.push_str(&format!(
            "CidrBlock: {}\nVpcId: {}\n\n",
            vpc.cidr_block, vpc.vpc_id
        ));
    }
    out
}

pub fn render_instances(instances: &[Ec2Instance]) -> String {
    if instances.is_empty() {
        return "No EC2 instances found.\n".to_string();
    }

    let mut out = String::new();
    for instance in instances {
        out.push_str(&format!(
            "InstanceId: {}\nInstanceType: {}\nPublicIpAddress: {}\nVpcId: {}\n\n",
            instance.instance_id,
            instance.instance_type,
            instance.public_ip.as_deref().unwrap_or("-"),
            instance.vpc_id.as_deref().unwrap_or("-"),
        ));
    }
    out
}

pub fn render_clusters(clusters: &[String]) -> String {
    if clusters.is_empty() {
        return "There are no EKS clusters in this AWS account.\n".to_string();
    }

    let mut out = String::from("Clusters:\n");
    for name in clusters {
        out.push_str(&format!("  {}\n", name));
    }
    out
}

/// Quota blocks grouped under their service code, in configured order.
pub fn render_quotas(groups: &[(String, Vec<ServiceQuota>)]) -> String {
    let mut out = String::new();
    for (service_code, quotas) in groups {
        out.push_str(&format!("[{}]\n", service_code));
        if quotas.is_empty() {
            out.push_str("No quotas found.\n\n");
            continue;
        }
        for quota in quotas {
            out.push_str(&format!(
                "QuotaName: {}\nServiceName: {}\nQuotaCode: {}\nValue: {}\n\n",
                quota.quota_name, quota.service_name, quota.quota_code, quota.value
            ));
        }
    }
    out
}
