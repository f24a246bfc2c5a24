//! Collector registry keyed by id.
//!
//! Wraps `prometheus::Registry` so collectors can be removed by the id they
//! were registered under. All mutation takes `&mut self`; once wrapped in
//! `Arc` the registry can only be read.

use std::sync::Arc;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, TextEncoder};

use crate::error::{Result, ScrapeTargetError};

use super::collectors::{platform_collector, process_collector, RuntimeCollector};

pub const PROCESS_COLLECTOR: &str = "process";
pub const PLATFORM_COLLECTOR: &str = "platform";
pub const RUNTIME_COLLECTOR: &str = "runtime";

/// Ids of the collectors installed by `Registry::with_defaults`.
pub const DEFAULT_COLLECTORS: [&str; 3] = [PROCESS_COLLECTOR, PLATFORM_COLLECTOR, RUNTIME_COLLECTOR];

/// Lets the same collector be handed to `register` and later `unregister`.
#[derive(Clone)]
struct Shared(Arc<dyn Collector>);

impl Collector for Shared {
    fn desc(&self) -> Vec<&Desc> {
        self.0.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.0.collect()
    }
}

fn map_prometheus(e: prometheus::Error) -> ScrapeTargetError {
    match e {
        prometheus::Error::AlreadyReg => {
            ScrapeTargetError::DuplicateMetric("descriptor already registered".into())
        }
        other => ScrapeTargetError::InvalidMetric(other.to_string()),
    }
}

pub struct Registry {
    inner: prometheus::Registry,
    entries: Vec<(String, Shared)>,
    emit_created: bool,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("collectors", &self.collector_ids())
            .field("emit_created", &self.emit_created)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            inner: prometheus::Registry::new(),
            entries: Vec::new(),
            emit_created: true,
        }
    }

    /// Registry preloaded with the process, platform and runtime collectors.
    pub fn with_defaults() -> Result<Self> {
        let mut reg = Self::new();
        reg.register(PROCESS_COLLECTOR, process_collector()?)?;
        reg.register(PLATFORM_COLLECTOR, platform_collector()?)?;
        reg.register(RUNTIME_COLLECTOR, Box::new(RuntimeCollector::new()?))?;
        Ok(reg)
    }

    /// Register a collector under `id`.
    ///
    /// Fails when `id` is taken or when one of the collector's descriptors
    /// is already registered.
    pub fn register(&mut self, id: &str, collector: Box<dyn Collector>) -> Result<()> {
        if self.entries.iter().any(|(e, _)| e == id) {
            return Err(ScrapeTargetError::DuplicateCollector(id.to_string()));
        }
        let shared = Shared(Arc::from(collector));
        self.inner
            .register(Box::new(shared.clone()))
            .map_err(map_prometheus)?;
        self.entries.push((id.to_string(), shared));
        Ok(())
    }

    /// Remove the collector registered under `id`.
    pub fn unregister(&mut self, id: &str) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .position(|(e, _)| e == id)
            .ok_or_else(|| ScrapeTargetError::UnknownCollector(id.to_string()))?;
        self.inner
            .unregister(Box::new(self.entries[pos].1.clone()))
            .map_err(map_prometheus)?;
        self.entries.remove(pos);
        tracing::debug!(collector = %id, "collector unregistered");
        Ok(())
    }

    /// Ids in registration order.
    pub fn collector_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Stop emitting `*_created` families.
    pub fn disable_created_series(&mut self) {
        self.emit_created = false;
    }

    pub fn emits_created_series(&self) -> bool {
        self.emit_created
    }

    /// Families sorted by name, as `prometheus::Registry::gather` returns them.
    pub fn gather(&self) -> Vec<MetricFamily> {
        let mut families = self.inner.gather();
        if !self.emit_created {
            families.retain(|f| !f.get_name().ends_with("_created"));
        }
        families
    }

    /// Render in Prometheus text exposition format.
    pub fn encode(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.gather(), &mut buf)
            .map_err(|e| ScrapeTargetError::Internal(format!("encode metrics failed: {e}")))?;
        String::from_utf8(buf)
            .map_err(|e| ScrapeTargetError::Internal(format!("metrics not utf-8: {e}")))
    }
}
