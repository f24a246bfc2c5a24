//! Explicit route tables.
//!
//! Each service lists its `(method, path, handler)` rows in a `RouteTable`,
//! which is then folded into an axum `Router`. Unknown paths fall through to
//! axum's 404, known paths with another method to its 405.

use axum::{
    handler::Handler,
    http::Method,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use scrapetarget_core::error::{Result, ScrapeTargetError};

/// Literal paths only: a leading `/`, no empty segments, and none of the
/// `*`, `:`, `{`, `}` markers axum's matcher treats as captures.
pub fn validate_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(ScrapeTargetError::BadRequest(format!(
            "route path must start with '/': {path}"
        )));
    }
    if path.contains(['*', ':', '{', '}']) {
        return Err(ScrapeTargetError::BadRequest(format!(
            "route path must be literal: {path}"
        )));
    }
    if path != "/" && path[1..].split('/').any(str::is_empty) {
        return Err(ScrapeTargetError::BadRequest(format!(
            "route path has an empty segment: {path}"
        )));
    }
    Ok(())
}

pub struct Route<S> {
    pub method: Method,
    pub path: String,
    handler: MethodRouter<S>,
}

pub struct RouteTable<S> {
    routes: Vec<Route<S>>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row. Rejects paths `validate_path` refuses, methods axum cannot
    /// route, and a second row for the same `(method, path)`.
    pub fn route<H, T>(mut self, method: Method, path: impl Into<String>, handler: H) -> Result<Self>
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let path = path.into();
        validate_path(&path)?;
        if self.routes.iter().any(|r| r.method == method && r.path == path) {
            return Err(ScrapeTargetError::BadRequest(format!(
                "duplicate route: {method} {path}"
            )));
        }
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|e| ScrapeTargetError::BadRequest(format!("{method} {path}: {e}")))?;

        self.routes.push(Route {
            method,
            path,
            handler: on(filter, handler),
        });
        Ok(self)
    }

    /// `(method, path)` rows in insertion order.
    pub fn entries(&self) -> Vec<(&Method, &str)> {
        self.routes.iter().map(|r| (&r.method, r.path.as_str())).collect()
    }

    pub fn into_router(self, state: S) -> Router {
        let mut router = Router::new();
        for r in self.routes {
            tracing::debug!(method = %r.method, path = %r.path, "route registered");
            router = router.route(&r.path, r.handler);
        }
        router.with_state(state)
    }
}
