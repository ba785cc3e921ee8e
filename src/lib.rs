pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::aws::AwsCloud;
pub use api::{routes::create_router, server::ApiServer, state::AppState};
pub use config::{CliConfig, Settings};
pub use domain::ports::{Inventory, Quotas};
pub use utils::error::{ApiError, Result};
