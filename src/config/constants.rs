//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the crate,
//! including network timeouts, default request headers, and the fixed service
//! endpoints consulted by the live lookup flows.

/// Per-request timeout in seconds for every outbound probe and registry call.
///
/// All probe I/O is bounded by this value; a request that exceeds it is
/// treated like any other network failure (recorded on the probe result,
/// never retried).
pub const PROBE_TIMEOUT_SECS: u64 = 15;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via `Config::user_agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept header sent with every request.
pub const DEFAULT_ACCEPT: &str = "application/json, text/html, */*";

/// Default Accept-Language header sent with every request.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Authenticated breach-database endpoint (requires an API key header).
pub const BREACH_API_ENDPOINT: &str = "https://haveibeenpwned.com/api/v3/breachedaccount";

/// Unauthenticated legacy breach-database endpoint, used as a fallback when
/// no API key is configured or the authenticated attempt recorded an error.
pub const BREACH_LEGACY_ENDPOINT: &str = "https://haveibeenpwned.com/api/v2/breachedaccount";

/// Header carrying the breach-database API key.
pub const BREACH_API_KEY_HEADER: &str = "hibp-api-key";

/// Search-engine endpoint used by the indirect site-scoped probes.
pub const SEARCH_ENGINE_ENDPOINT: &str = "https://www.google.com/search";

/// Public tax-registry endpoint (no credential required).
pub const REGISTRY_PUBLIC_ENDPOINT: &str = "https://brasilapi.com.br/api/cpf/v1";

/// Environment variable holding the breach-database API key.
pub const ENV_BREACH_API_KEY: &str = "HIBP_API_KEY";

/// Environment variable holding the IntelX API key.
///
/// Declared but not consulted by any probe; see DESIGN.md.
pub const ENV_INTELX_API_KEY: &str = "INTELX_API_KEY";

/// Environment variable holding the LeakCheck API key.
///
/// Declared but not consulted by any probe; see DESIGN.md.
pub const ENV_LEAKCHECK_API_KEY: &str = "LEAKCHECK_API_KEY";

/// Environment variable holding an optional authenticated registry token.
pub const ENV_REGISTRY_API_TOKEN: &str = "REGISTRY_API_TOKEN";
