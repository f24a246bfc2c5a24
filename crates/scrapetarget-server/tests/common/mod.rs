//! Spawns a service on an ephemeral local port for HTTP tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use reqwest::Client;
use tokio::net::TcpListener;

use scrapetarget_server::{app_state::MetricsState, config, services};

pub const USER: &str = "user";
pub const PASSWORD: &str = "t0p$ecreT";

pub struct TestApp {
    pub client: Client,
    pub base_url: String,
}

impl TestApp {
    pub async fn spawn(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr: SocketAddr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Metrics target built from the given YAML config.
    pub async fn metrics_with(yaml: &str) -> Self {
        let cfg = config::load_from_str(yaml).expect("valid config");
        let state = MetricsState::new(&cfg.metrics).expect("startup");
        let app = services::metrics::app(state, &cfg.metrics.path).expect("routes");
        Self::spawn(app).await
    }

    /// Metrics target with default config.
    pub async fn metrics() -> Self {
        Self::metrics_with("version: 1\n").await
    }

    pub async fn greeter() -> Self {
        Self::spawn(services::greeter::app().expect("routes")).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_as(&self, path: &str, user: &str, password: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .basic_auth(user, Some(password))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_with_header(&self, path: &str, authorization: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("authorization", authorization)
            .send()
            .await
            .expect("Failed to send request")
    }
}
