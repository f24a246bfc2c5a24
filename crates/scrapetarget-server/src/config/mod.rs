//! Target config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use scrapetarget_core::error::{Result, ScrapeTargetError};

pub use schema::{GreeterSection, MetricsSection, TargetConfig};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SCRAPETARGET_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "scrapetarget.yaml";

/// Path from `SCRAPETARGET_CONFIG`, or `scrapetarget.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<TargetConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ScrapeTargetError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TargetConfig> {
    let cfg: TargetConfig = serde_yaml::from_str(s)
        .map_err(|e| ScrapeTargetError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like `load_from_file`, but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<TargetConfig> {
    if Path::new(path).exists() {
        return load_from_file(path);
    }
    tracing::info!(%path, "config file not found, using defaults");
    let cfg = TargetConfig::default();
    cfg.validate()?;
    Ok(cfg)
}
