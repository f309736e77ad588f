//! Tracing and logging setup shared by the stockroom binaries.

pub mod subscriber;

pub use subscriber::{DEFAULT_FILTER, LogFormat, init};
