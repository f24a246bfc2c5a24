//! scrapetarget server library.
//!
//! Wires config, the metrics registry and credential check into two small
//! axum services. Consumed by the binaries in `src/bin` and by the
//! integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod serve;
pub mod services;
