//! Tracing/logging initialization for host processes.

pub mod tracing;

pub use tracing::init;
