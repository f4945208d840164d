//! Initialization of shared resources.
//!
//! This module provides functions to initialize the HTTP client and the
//! logger. Both are driven by an explicit [`Config`](crate::config::Config);
//! nothing here reads process-global mutable state.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
