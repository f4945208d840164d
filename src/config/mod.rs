//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, endpoints, default headers)
//! - The library [`Config`] struct and its environment-variable loader
//! - CLI option enums (log level/format)

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
