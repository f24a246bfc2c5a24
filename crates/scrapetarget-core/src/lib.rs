//! scrapetarget core: credentials, metrics registry, exposition and errors.
//!
//! Nothing here knows about HTTP routing; the server crate wires these
//! pieces into axum handlers.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible
//! paths surface as `ScrapeTargetError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod auth;
pub mod error;
pub mod metrics;

pub use error::{Result, ScrapeTargetError};
