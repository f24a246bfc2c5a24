//! The two scrape targets.

pub mod greeter;
pub mod metrics;
