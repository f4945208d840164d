//! Tax-ID checksum validation.
//!
//! Implements the standard two-check-digit weighted-sum-mod-11 algorithm for
//! the 11-digit national tax ID (CPF), plus the minimum-digit-count check for
//! judicial process numbers. Both are stateless pure functions.

use crate::utils::strip_non_digits;

/// Validates an 11-digit national tax ID.
///
/// The input may carry formatting (`529.982.247-25` and `52998224725` are
/// equivalent); all non-digit characters are stripped first. Rejects inputs
/// whose digit count differs from 11 and the known-invalid class of 11
/// identical digits, then verifies both check digits:
///
/// - digit 10 is the check over digits 1-9 with weights 10..2;
/// - digit 11 is the check over digits 1-10 with weights 11..2;
/// - each check digit is `0` when `sum % 11 < 2`, else `11 - sum % 11`.
pub fn validate_tax_id(input: &str) -> bool {
    let digits = strip_non_digits(input);
    if digits.len() != 11 {
        return false;
    }

    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    if values.iter().all(|&d| d == values[0]) {
        return false;
    }

    check_digit(&values[..9], 10) == values[9] && check_digit(&values[..10], 11) == values[10]
}

/// Computes one check digit over `digits` with the weight sequence starting
/// at `first_weight` and decreasing by one per position.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (first_weight - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Validates a judicial process number: at least 15 digits once formatting
/// is stripped.
pub fn validate_process_number(input: &str) -> bool {
    strip_non_digits(input).len() >= 15
}

/// Formats 11 bare tax-ID digits as `XXX.XXX.XXX-XX`.
///
/// Inputs that are not exactly 11 digits are returned unchanged.
pub fn format_tax_id(digits: &str) -> String {
    if digits.len() != 11 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}
