//! Error categorization.
//!
//! Maps `reqwest` transport errors onto the crate's [`FetchError`] taxonomy so
//! probes can record a uniform failure shape regardless of which layer failed.

use crate::fetch::FetchError;

/// Categorizes a `reqwest::Error` into a [`FetchError`].
///
/// This is the single place transport errors are classified; both the real
/// fetcher and the failure-recording paths go through it so timeouts,
/// connection failures, and everything else stay consistently labelled.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Transport(error.to_string())
    }
}

// Note: constructing real reqwest::Error instances requires live responses,
// so categorization is exercised end-to-end by the httptest integration
// tests in tests/breach_pipeline.rs rather than unit-tested here.
