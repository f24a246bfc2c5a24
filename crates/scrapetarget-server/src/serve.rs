//! Process plumbing shared by both binaries.

use std::net::SocketAddr;

use axum::Router;
use scrapetarget_core::error::{Result, ScrapeTargetError};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` filter, `info` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

pub async fn serve(listen: SocketAddr, app: Router, service: &'static str) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| ScrapeTargetError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, service, "scrapetarget starting");
    axum::serve(listener, app)
        .await
        .map_err(|e| ScrapeTargetError::Internal(format!("server failed: {e}")))
}
