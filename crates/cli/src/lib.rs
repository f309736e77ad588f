//! Command-line driver for the stockroom inventory tracker.

pub mod config;
pub mod demo;

pub use config::AppConfig;
pub use demo::{RunOutcome, run};
