//! Auth-gated metrics target.
//!
//! - `GET /metrics` with Basic auth
//! - exposition carries the single `authenticated` gauge

use scrapetarget_core::error::Result;
use scrapetarget_server::{app_state::MetricsState, config, serve, services};

#[tokio::main]
async fn main() -> Result<()> {
    serve::init_tracing();

    let cfg = config::load_or_default(&config::config_path())?;
    let listen = cfg.metrics.listen_addr()?;

    let state = MetricsState::new(&cfg.metrics)?;
    let app = services::metrics::app(state, &cfg.metrics.path)?;

    serve::serve(listen, app, "metrics").await
}
