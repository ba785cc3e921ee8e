use std::sync::Arc;

use async_trait::async_trait;
use aws_inventory::domain::model::{
    Ec2Instance, QuotaIncreaseReceipt, QuotaIncreaseRequest, ServiceQuota, Vpc,
};
use aws_inventory::{create_router, ApiError, AppState, Inventory, Quotas, Result};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// In-memory stand-in for the AWS adapter. `fail == true` makes every call
/// behave like an unreachable upstream.
struct FakeCloud {
    fail: bool,
}

#[async_trait]
impl Inventory for FakeCloud {
    async fn list_vpcs(&self) -> Result<Vec<Vpc>> {
        if self.fail {
            return Err(ApiError::upstream("ec2", "connection refused"));
        }
        Ok(vec![
            Vpc {
                vpc_id: "vpc-0abc".to_string(),
                cidr_block: "10.0.0.0/16".to_string(),
            },
            Vpc {
                vpc_id: "vpc-0def".to_string(),
                cidr_block: "172.31.0.0/16".to_string(),
            },
        ])
    }

    async fn list_instances(&self) -> Result<Vec<Ec2Instance>> {
        if self.fail {
            return Err(ApiError::upstream("ec2", "connection refused"));
        }
        Ok(vec![Ec2Instance {
            instance_id: "i-0123456789".to_string(),
            instance_type: "t3.micro".to_string(),
            public_ip: None,
            vpc_id: Some("vpc-0abc".to_string()),
        }])
    }

    async fn list_clusters(&self, _max_results: i32) -> Result<Vec<String>> {
        if self.fail {
            return Err(ApiError::upstream("eks", "connection refused"));
        }
        Ok(vec![])
    }
}

#[async_trait]
impl Quotas for FakeCloud {
    async fn list_service_quotas(&self, service_code: &str) -> Result<Vec<ServiceQuota>> {
        if self.fail {
            return Err(ApiError::upstream("servicequotas", "connection refused"));
        }
        Ok(vec![ServiceQuota {
            quota_name: format!("{} quota", service_code),
            service_name: service_code.to_uppercase(),
            quota_code: "L-0000".to_string(),
            value: 5.0,
        }])
    }

    async fn request_increase(
        &self,
        request: &QuotaIncreaseRequest,
    ) -> Result<QuotaIncreaseReceipt> {
        if self.fail {
            return Err(ApiError::upstream("servicequotas", "connection refused"));
        }
        Ok(QuotaIncreaseReceipt {
            request_id: Some("req-1".to_string()),
            status: Some("PENDING".to_string()),
            case_id: None,
            service_code: request.service_code.clone(),
            quota_code: request.quota_code.clone(),
            desired_value: request.desired_value,
        })
    }
}

fn test_router(fail: bool) -> Router {
    let cloud = Arc::new(FakeCloud { fail });
    let state = Arc::new(AppState::new(
        cloud.clone(),
        cloud,
        vec!["vpc".to_string(), "ec2".to_string()],
        10,
    ));
    create_router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_vpcs_returns_formatted_text() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/vpcs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("CidrBlock: 10.0.0.0/16"));
    assert!(body.contains("VpcId: vpc-0def"));
}

#[tokio::test]
async fn test_ec2s_renders_missing_public_ip_as_dash() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/ec2s").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("InstanceId: i-0123456789"));
    assert!(body.contains("PublicIpAddress: -"));
}

#[tokio::test]
async fn test_eks_empty_account_message() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/eks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("no EKS clusters"));
}

#[tokio::test]
async fn test_quotas_grouped_by_configured_services() {
    let response = test_router(false)
        .oneshot(Request::builder().uri("/quotas").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let vpc_pos = body.find("[vpc]").unwrap();
    let ec2_pos = body.find("[ec2]").unwrap();
    assert!(vpc_pos < ec2_pos);
    assert!(body.contains("QuotaName: vpc quota"));
}

#[tokio::test]
async fn test_quota_increase_returns_receipt() {
    let body = serde_json::json!({
        "desired_value": 10.0,
        "quota_code": "L-F678F1CE",
        "service_code": "vpc"
    });

    let response = test_router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quota")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let receipt: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(receipt["status"], "PENDING");
    assert_eq!(receipt["quota_code"], "L-F678F1CE");
    assert_eq!(receipt["desired_value"], 10.0);
}

#[tokio::test]
async fn test_quota_increase_rejects_zero_desired_value() {
    let body = serde_json::json!({
        "desired_value": 0,
        "quota_code": "L-F678F1CE",
        "service_code": "vpc"
    });

    let response = test_router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quota")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quota_increase_rejects_missing_fields() {
    let body = serde_json::json!({ "desired_value": 10.0 });

    let response = test_router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quota")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quota_increase_rejects_malformed_json() {
    let response = test_router(false)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quota")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("error"));
}

#[tokio::test]
async fn test_method_gating_returns_405() {
    for (method, uri) in [
        ("POST", "/vpcs"),
        ("POST", "/ec2s"),
        ("DELETE", "/eks"),
        ("PUT", "/quotas"),
        ("POST", "/health"),
        ("GET", "/quota"),
    ] {
        let response = test_router(false)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {} should be 405",
            method,
            uri
        );
    }
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let response = test_router(false)
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_502() {
    for uri in ["/vpcs", "/ec2s", "/eks", "/quotas"] {
        let response = test_router(true)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_GATEWAY,
            "{} should be 502 when upstream is down",
            uri
        );
        let body = body_string(response).await;
        assert!(body.contains("error"));
    }
}

#[tokio::test]
async fn test_health_stays_up_when_upstream_is_down() {
    let response = test_router(true)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
