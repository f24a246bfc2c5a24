//! Default collectors installed by `Registry::with_defaults`.

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{IntGauge, IntGaugeVec, Opts};

use crate::error::{Result, ScrapeTargetError};

fn metric_err(e: prometheus::Error) -> ScrapeTargetError {
    ScrapeTargetError::InvalidMetric(e.to_string())
}

/// `process_*` metrics from the prometheus crate (Linux only).
#[cfg(target_os = "linux")]
pub fn process_collector() -> Result<Box<dyn Collector>> {
    Ok(Box::new(prometheus::process_collector::ProcessCollector::for_self()))
}

/// Elsewhere only the start time is known, taken when this is called.
#[cfg(not(target_os = "linux"))]
pub fn process_collector() -> Result<Box<dyn Collector>> {
    let g = prometheus::Gauge::new(
        "process_start_time_seconds",
        "Start time of the process since unix epoch in seconds.",
    )
    .map_err(metric_err)?;
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();
    g.set(now);
    Ok(Box::new(g))
}

/// `rust_info{arch,family,os} 1`.
pub fn platform_collector() -> Result<Box<dyn Collector>> {
    let info = IntGaugeVec::new(
        Opts::new("rust_info", "Rust platform information"),
        &["arch", "family", "os"],
    )
    .map_err(metric_err)?;
    info.with_label_values(&[
        std::env::consts::ARCH,
        std::env::consts::FAMILY,
        std::env::consts::OS,
    ])
    .set(1);
    Ok(Box::new(info))
}

/// Tokio runtime gauges, read at scrape time. Reports nothing when called
/// outside a runtime.
pub struct RuntimeCollector {
    workers: IntGauge,
    alive_tasks: IntGauge,
}

impl RuntimeCollector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            workers: IntGauge::new("tokio_runtime_workers", "Number of runtime worker threads.")
                .map_err(metric_err)?,
            alive_tasks: IntGauge::new("tokio_runtime_alive_tasks", "Number of alive runtime tasks.")
                .map_err(metric_err)?,
        })
    }
}

impl Collector for RuntimeCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.workers
            .desc()
            .into_iter()
            .chain(self.alive_tasks.desc())
            .collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return Vec::new();
        };
        let m = handle.metrics();
        self.workers.set(m.num_workers() as i64);
        self.alive_tasks.set(m.num_alive_tasks() as i64);

        let mut out = self.workers.collect();
        out.extend(self.alive_tasks.collect());
        out
    }
}
