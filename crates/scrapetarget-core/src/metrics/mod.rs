//! Owned Prometheus registry with named collectors.
//!
//! A `Registry` is built and mutated during startup only; afterwards it is
//! frozen behind `Arc` and read by the `/metrics` handler. There is no global
//! default registry.

pub mod collectors;
pub mod registry;

pub use collectors::{platform_collector, process_collector, RuntimeCollector};
pub use registry::{Registry, DEFAULT_COLLECTORS, PLATFORM_COLLECTOR, PROCESS_COLLECTOR, RUNTIME_COLLECTOR};
