//! Weighted mod-11 check digit rules.
//!
//! Both registries append two check digits. The first is computed over the
//! body digits and the second over the body plus the first check digit.

use super::DocumentKind;
use super::error::DocumentError;

const MODULUS: u32 = 11;

/// Number of trailing check digits in every supported identifier.
pub(crate) const CHECK_DIGITS: usize = 2;

/// Computes one check digit from the digits preceding it.
pub(crate) type CheckDigitRule = fn(&[u8]) -> u8;

fn weighted_sum(digits: &[u8], weights: impl Iterator<Item = u32>) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

/// Narrow a value already reduced below ten.
fn as_digit(value: u32) -> u8 {
    u8::try_from(value).unwrap_or_default()
}

/// CPF rule: weights descend from `n + 1` to 2 over the `n` preceding digits,
/// and the digit is `((sum * 10) mod 11) mod 10`.
pub(crate) fn cpf_check_digit(preceding: &[u8]) -> u8 {
    let top = u32::try_from(preceding.len())
        .unwrap_or(u32::MAX)
        .saturating_add(1);
    let sum = weighted_sum(preceding, (2..=top).rev());
    as_digit((sum * 10).rem_euclid(MODULUS).rem_euclid(10))
}

/// CNPJ rule: weights cycle through 2..=9 starting at the rightmost digit;
/// a remainder below 2 yields 0, otherwise `11 - remainder`.
pub(crate) fn cnpj_check_digit(preceding: &[u8]) -> u8 {
    let count = u32::try_from(preceding.len()).unwrap_or(u32::MAX);
    let weights = (0..count).rev().map(|offset| 2 + offset.rem_euclid(8));
    let remainder = weighted_sum(preceding, weights).rem_euclid(MODULUS);
    if remainder < 2 {
        0
    } else {
        as_digit(MODULUS - remainder)
    }
}

fn is_single_repeated_digit(digits: &[u8]) -> bool {
    let first = digits.first();
    digits.iter().all(|digit| Some(digit) == first)
}

/// Check length, repeated-digit sequences and both check digits.
pub(crate) fn verify_check_digits(
    kind: DocumentKind,
    digits: &[u8],
    rule: CheckDigitRule,
) -> Result<(), DocumentError> {
    let expected = kind.digit_count();
    if digits.len() != expected {
        return Err(DocumentError::InvalidLength {
            kind,
            expected,
            actual: digits.len(),
        });
    }
    if is_single_repeated_digit(digits) {
        return Err(DocumentError::RepeatedDigits { kind });
    }

    for position in (expected - CHECK_DIGITS)..expected {
        let (preceding, rest) = digits.split_at(position);
        if rest.first() != Some(&rule(preceding)) {
            return Err(DocumentError::ChecksumMismatch { kind });
        }
    }
    Ok(())
}

/// Append both check digits to `base`.
pub(crate) fn append_check_digits(base: &[u8], rule: CheckDigitRule) -> Vec<u8> {
    let mut digits = Vec::with_capacity(base.len() + CHECK_DIGITS);
    digits.extend_from_slice(base);
    for _ in 0..CHECK_DIGITS {
        let next = rule(&digits);
        digits.push(next);
    }
    digits
}
