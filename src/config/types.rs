//! Configuration types and CLI options.
//!
//! This module defines the library [`Config`] struct and the enums used for
//! command-line argument parsing.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_USER_AGENT, ENV_BREACH_API_KEY, ENV_INTELX_API_KEY, ENV_LEAKCHECK_API_KEY,
    ENV_REGISTRY_API_TOKEN, PROBE_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Credentials and tunables are passed explicitly into every client and probe
/// constructor; there is no process-wide mutable configuration. Construct one
/// programmatically, or read the recognized environment variables with
/// [`Config::from_env`].
///
/// # Examples
///
/// ```no_run
/// use osint_lookup::Config;
///
/// let config = Config {
///     breach_api_key: Some("key".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Breach-database API key. When present the authenticated probe path is
    /// used; when absent the probe falls back to the unauthenticated legacy
    /// endpoint (not a hard failure).
    pub breach_api_key: Option<String>,

    /// IntelX API key. Recognized but not consulted by any probe (see
    /// DESIGN.md before wiring a new integration).
    pub intelx_api_key: Option<String>,

    /// LeakCheck API key. Recognized but not consulted by any probe (see
    /// DESIGN.md before wiring a new integration).
    pub leakcheck_api_key: Option<String>,

    /// Optional bearer token enabling an authenticated tax-registry endpoint
    /// ahead of the public one.
    pub registry_api_token: Option<String>,

    /// Per-request timeout in seconds applied to every outbound call.
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breach_api_key: None,
            intelx_api_key: None,
            leakcheck_api_key: None,
            registry_api_token: None,
            timeout_seconds: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from the recognized environment variables.
    ///
    /// Unset or empty variables leave the corresponding option at its
    /// default. The binary loads `.env` via `dotenvy` before calling this.
    pub fn from_env() -> Self {
        Self {
            breach_api_key: env_non_empty(ENV_BREACH_API_KEY),
            intelx_api_key: env_non_empty(ENV_INTELX_API_KEY),
            leakcheck_api_key: env_non_empty(ENV_LEAKCHECK_API_KEY),
            registry_api_token: env_non_empty(ENV_REGISTRY_API_TOKEN),
            ..Default::default()
        }
    }
}

fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, PROBE_TIMEOUT_SECS);
        assert!(config.breach_api_key.is_none());
        assert!(config.intelx_api_key.is_none());
        assert!(config.leakcheck_api_key.is_none());
        assert!(config.registry_api_token.is_none());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_config_clone_is_independent() {
        let mut original = Config::default();
        let cloned = original.clone();
        original.breach_api_key = Some("key".into());
        assert!(cloned.breach_api_key.is_none());
    }
}
