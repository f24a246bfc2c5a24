use std::net::SocketAddr;

use serde::Deserialize;
use scrapetarget_core::auth::CredentialPair;
use scrapetarget_core::error::{Result, ScrapeTargetError};

use crate::router::validate_path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub greeter: GreeterSection,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            metrics: MetricsSection::default(),
            greeter: GreeterSection::default(),
        }
    }
}

impl TargetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScrapeTargetError::UnsupportedVersion);
        }
        self.metrics.validate()?;
        self.greeter.validate()?;
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_metrics_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub path: String,

    #[serde(default = "default_realm")]
    pub realm: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl std::fmt::Debug for MetricsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsSection")
            .field("listen", &self.listen)
            .field("path", &self.path)
            .field("realm", &self.realm)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            listen: default_metrics_listen(),
            path: default_metrics_path(),
            realm: default_realm(),
            username: default_username(),
            password: default_password(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        validate_path(&self.path)?;
        if self.realm.contains('"') {
            return Err(ScrapeTargetError::BadRequest(
                "metrics.realm must not contain '\"'".into(),
            ));
        }
        self.credentials()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_listen("metrics.listen", &self.listen)
    }

    pub fn credentials(&self) -> Result<CredentialPair> {
        CredentialPair::new(self.username.as_str(), self.password.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreeterSection {
    #[serde(default = "default_greeter_listen")]
    pub listen: String,
}

impl Default for GreeterSection {
    fn default() -> Self {
        Self {
            listen: default_greeter_listen(),
        }
    }
}

impl GreeterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_listen("greeter.listen", &self.listen)
    }
}

fn parse_listen(field: &str, s: &str) -> Result<SocketAddr> {
    s.parse()
        .map_err(|_| ScrapeTargetError::BadRequest(format!("{field} must be a valid SocketAddr")))
}

fn default_version() -> u32 {
    1
}
fn default_metrics_listen() -> String {
    "0.0.0.0:9123".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_realm() -> String {
    "Login Required".into()
}
fn default_username() -> String {
    "user".into()
}
fn default_password() -> String {
    "t0p$ecreT".into()
}
fn default_greeter_listen() -> String {
    "0.0.0.0:5000".into()
}
