//! Basic-Auth gated `/metrics`.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use scrapetarget_core::error::Result;

use crate::app_state::MetricsState;
use crate::router::RouteTable;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body of every 401.
pub const UNAUTHORIZED_BODY: &str =
    "Could not verify your access level for that URL.\nYou have to login with proper credentials";

pub fn routes(path: &str) -> Result<RouteTable<MetricsState>> {
    RouteTable::new().route(Method::GET, path, scrape)
}

pub fn app(state: MetricsState, path: &str) -> Result<Router> {
    Ok(routes(path)?.into_router(state))
}

pub async fn scrape(State(state): State<MetricsState>, headers: HeaderMap) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.credentials().check_header(auth) {
        tracing::debug!(code = e.client_code().as_str(), present = auth.is_some(), "scrape rejected");
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, state.challenge().clone())],
            UNAUTHORIZED_BODY,
        )
            .into_response();
    }

    match state.registry().encode() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
