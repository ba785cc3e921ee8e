pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use file::FileConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "aws-inventory")]
#[command(about = "HTTP service exposing AWS inventory and service quota endpoints")]
pub struct CliConfig {
    #[arg(long, help = "Address to bind, defaults to 0.0.0.0")]
    pub host: Option<String>,

    #[arg(long, help = "Port to bind, defaults to 8080")]
    pub port: Option<u16>,

    #[arg(long, help = "Shared config profile for credential resolution")]
    pub profile: Option<String>,

    #[arg(long, help = "AWS region override")]
    pub region: Option<String>,

    #[arg(long, help = "AWS endpoint override (localstack, test targets)")]
    pub endpoint_url: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Service codes for GET /quotas")]
    pub quota_services: Vec<String>,

    #[arg(long, help = "Page bound for EKS ListClusters, defaults to 10")]
    pub max_clusters: Option<i32>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved runtime configuration: CLI over file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub quota_services: Vec<String>,
    pub max_clusters: i32,
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let server = file.server.unwrap_or_default();
        let aws = file.aws.unwrap_or_default();

        Ok(Settings {
            host: self
                .host
                .or(server.host)
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.or(server.port).unwrap_or(8080),
            profile: self.profile.or(aws.profile),
            region: self.region.or(aws.region),
            endpoint_url: self.endpoint_url.or(aws.endpoint_url),
            quota_services: if self.quota_services.is_empty() {
                aws.quota_services
                    .unwrap_or_else(|| vec!["vpc".to_string()])
            } else {
                self.quota_services
            },
            max_clusters: self.max_clusters.or(aws.max_clusters).unwrap_or(10),
            verbose: self.verbose,
        })
    }
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint)?;
        }
        if self.quota_services.is_empty() {
            return Err(crate::utils::error::ApiError::MissingConfigError {
                field: "quota_services".to_string(),
            });
        }
        for code in &self.quota_services {
            validate_non_empty_string("quota_services", code)?;
        }
        // EKS caps ListClusters maxResults at 100
        validate_range("max_clusters", self.max_clusters, 1, 100)?;
        Ok(())
    }
}
