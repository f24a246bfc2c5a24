//! Static `Hi` page.

use axum::{http::Method, response::Html, Router};
use scrapetarget_core::error::Result;

use crate::router::RouteTable;

pub fn routes() -> Result<RouteTable<()>> {
    RouteTable::new().route(Method::GET, "/", hi)
}

pub fn app() -> Result<Router> {
    Ok(routes()?.into_router(()))
}

pub async fn hi() -> Html<&'static str> {
    Html("Hi")
}
