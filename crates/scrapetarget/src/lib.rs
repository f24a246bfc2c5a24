//! Top-level facade crate for scrapetarget.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use scrapetarget_core::*;
}

pub mod server {
    pub use scrapetarget_server::*;
}
