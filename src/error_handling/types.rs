//! Error type definitions.
//!
//! This module defines all error types used throughout the crate. The
//! taxonomy distinguishes probe-level failures (recorded on probe results,
//! never propagated) from input-validation errors (returned as data to the
//! caller) and initialization failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::fetch::FetchError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A failure encountered while consulting one breach-intelligence source.
///
/// Probe failures never cross the aggregator boundary: they are rendered to a
/// string and stored on the failing probe's [`SourceProbeResult`], where they
/// remain visible for auditing. A 404 from a source is a legitimate negative
/// and is *not* one of these.
///
/// [`SourceProbeResult`]: crate::SourceProbeResult
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The source rejected the configured credential. Triggers the fallback
    /// path where one exists; never surfaced to the caller as a hard error.
    #[error("credential rejected by source")]
    AuthFailure,

    /// The source imposed throttling (HTTP 429). Recorded, not retried; the
    /// probe contributes zero records for this call.
    #[error("rate limit reached")]
    RateLimited,

    /// Timeout, DNS failure, connection reset, or any other transport-level
    /// problem, caught at the probe boundary.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The source answered but the payload could not be parsed.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The source answered with a status code outside its documented
    /// contract.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl From<FetchError> for ProbeFailure {
    fn from(e: FetchError) -> Self {
        ProbeFailure::NetworkFailure(e.to_string())
    }
}

/// Input-validation errors surfaced to the caller.
///
/// These are always returned as data (an error field inside a result object
/// or an `Err` value from a dispatch function); they never cross the public
/// boundary as a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The supplied tax ID failed the checksum validation.
    #[error("invalid tax id: {0}")]
    InvalidTaxId(String),

    /// The identifier kind string did not match any known kind.
    #[error("unrecognized identifier kind: {0}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_failure_display() {
        assert_eq!(
            ProbeFailure::RateLimited.to_string(),
            "rate limit reached"
        );
        assert_eq!(
            ProbeFailure::AuthFailure.to_string(),
            "credential rejected by source"
        );
        assert_eq!(
            ProbeFailure::NetworkFailure("connection refused".into()).to_string(),
            "network failure: connection refused"
        );
        assert_eq!(
            ProbeFailure::UnexpectedStatus(503).to_string(),
            "unexpected status 503"
        );
    }

    #[test]
    fn test_lookup_error_display() {
        assert_eq!(
            LookupError::UnknownKind("dna".into()).to_string(),
            "unrecognized identifier kind: dna"
        );
        assert!(LookupError::InvalidTaxId("123".into())
            .to_string()
            .contains("invalid tax id"));
    }

    #[test]
    fn test_probe_failure_from_fetch_error() {
        let failure = ProbeFailure::from(FetchError::Timeout);
        assert!(matches!(failure, ProbeFailure::NetworkFailure(_)));
        assert!(failure.to_string().contains("timed out"));
    }
}
