//! HTTP server: bind the configured address and serve the router.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::routes::create_router;
use crate::api::state::AppState;
use crate::utils::error::{ApiError, Result};

pub struct ApiServer {
    addr: String,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(addr: impl Into<String>, state: Arc<AppState>) -> Self {
        Self {
            addr: addr.into(),
            state,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub async fn run(&self) -> Result<()> {
        let app = create_router(self.state.clone());

        let addr: SocketAddr = self.addr.parse().map_err(|e| ApiError::ConfigError {
            message: format!("invalid bind address '{}': {}", self.addr, e),
        })?;
        let listener = TcpListener::bind(addr).await?;

        info!("Server running at http://{}/", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
