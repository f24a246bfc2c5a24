//! Shared state for the metrics target.
//!
//! `MetricsState::new` runs the one-time startup sequence and freezes the
//! registry. Nothing in here is mutated after it returns.

use std::sync::Arc;

use axum::http::HeaderValue;
use prometheus::Gauge;
use scrapetarget_core::auth::CredentialPair;
use scrapetarget_core::error::{Result, ScrapeTargetError};
use scrapetarget_core::metrics::{Registry, DEFAULT_COLLECTORS};

use crate::config::MetricsSection;

pub const AUTHENTICATED_GAUGE: &str = "authenticated";
const AUTHENTICATED_HELP: &str = "Set to 1 when the scrape request carried valid credentials";

#[derive(Clone)]
pub struct MetricsState {
    inner: Arc<MetricsStateInner>,
}

struct MetricsStateInner {
    registry: Registry,
    credentials: CredentialPair,
    challenge: HeaderValue,
}

impl MetricsState {
    /// Build the frozen registry and the credential check.
    pub fn new(cfg: &MetricsSection) -> Result<Self> {
        let registry = build_registry()?;
        let credentials = cfg.credentials()?;
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", cfg.realm))
            .map_err(|e| ScrapeTargetError::BadRequest(format!("invalid realm: {e}")))?;

        Ok(Self {
            inner: Arc::new(MetricsStateInner {
                registry,
                credentials,
                challenge,
            }),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn credentials(&self) -> &CredentialPair {
        &self.inner.credentials
    }

    /// `WWW-Authenticate` value sent with every 401.
    pub fn challenge(&self) -> &HeaderValue {
        &self.inner.challenge
    }
}

/// Startup sequence: defaults in, created series off, defaults out, then
/// the `authenticated` gauge set to 1.
pub fn build_registry() -> Result<Registry> {
    let mut registry = Registry::with_defaults()?;
    registry.disable_created_series();

    for id in DEFAULT_COLLECTORS {
        registry.unregister(id)?;
    }

    let gauge = Gauge::new(AUTHENTICATED_GAUGE, AUTHENTICATED_HELP)
        .map_err(|e| ScrapeTargetError::InvalidMetric(e.to_string()))?;
    gauge.set(1.0);
    registry.register(AUTHENTICATED_GAUGE, Box::new(gauge))?;

    tracing::debug!(collectors = ?registry.collector_ids(), "metrics registry ready");
    Ok(registry)
}
