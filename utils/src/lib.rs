//! Shared utilities for rbridge binaries.

pub mod logging;

pub use logging::{init_logging, LogFormat};
