//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, probe, and input-validation
//!   failures)
//! - Categorization of transport errors into the probe-failure taxonomy
//!
//! Propagation policy: no error from an individual probe ever aborts the
//! aggregator, and the aggregator itself never fails. Only input-validation
//! errors and total external-dependency unavailability are surfaced to the
//! caller, always as data carried inside a result object.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, LookupError, ProbeFailure};
