//! Small shared utilities: URL encoding and input cleanup.

/// Percent-encodes a string for safe embedding in a URL query component.
///
/// Uses form-urlencoding semantics (spaces become `+`), matching what the
/// third-party search services expect in their query parameters.
pub fn quote_plus(input: &str) -> String {
    url::form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

/// Strips every non-ASCII-digit character from the input.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
