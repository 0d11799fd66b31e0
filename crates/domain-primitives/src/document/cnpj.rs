//! National registry of legal entities (CNPJ).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DocumentKind;
use super::checksum::{append_check_digits, cnpj_check_digit, verify_check_digits, CHECK_DIGITS};
use super::digits::{digit_string, normalize_digits, render};
use super::error::DocumentError;

const CNPJ_LEN: usize = 14;
const MASK: [(usize, char); 4] = [(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Validated CNPJ.
///
/// ## Invariants
/// - Exactly 14 digits.
/// - Not a single digit repeated fourteen times.
/// - Both check digits agree with the mod-11 rule.
///
/// # Examples
///
/// ```
/// use domain_primitives::document::Cnpj;
///
/// let cnpj = Cnpj::parse("11222333000181").expect("valid CNPJ");
/// assert_eq!(cnpj.masked(), "11.222.333/0001-81");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj([u8; CNPJ_LEN]);

impl Cnpj {
    /// Normalize and validate raw input, masked or not.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the digits fail validation.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        Self::from_digits(&normalize_digits(raw.as_ref()))
    }

    /// Validate already-normalized digit values.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the digits fail validation.
    pub fn from_digits(digits: &[u8]) -> Result<Self, DocumentError> {
        Self::validate_digits(digits)?;
        <[u8; CNPJ_LEN]>::try_from(digits)
            .map(Self)
            .map_err(|_| DocumentError::InvalidLength {
                kind: DocumentKind::Cnpj,
                expected: CNPJ_LEN,
                actual: digits.len(),
            })
    }

    /// Check digit values against the CNPJ rules without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidLength`], [`DocumentError::RepeatedDigits`]
    /// or [`DocumentError::ChecksumMismatch`].
    pub fn validate_digits(digits: &[u8]) -> Result<(), DocumentError> {
        verify_check_digits(DocumentKind::Cnpj, digits, cnpj_check_digit)
    }

    /// Return `true` when `raw` parses as a CNPJ.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Complete a twelve-digit base (company root plus branch) by computing
    /// its two check digits.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidLength`] when the base does not have
    /// twelve digits and [`DocumentError::RepeatedDigits`] when the
    /// completion is a single repeated digit.
    pub fn from_base(base: impl AsRef<str>) -> Result<Self, DocumentError> {
        let base = normalize_digits(base.as_ref());
        let expected = CNPJ_LEN - CHECK_DIGITS;
        if base.len() != expected {
            return Err(DocumentError::InvalidLength {
                kind: DocumentKind::Cnpj,
                expected,
                actual: base.len(),
            });
        }
        Self::from_digits(&append_check_digits(&base, cnpj_check_digit))
    }

    /// Digit values in order.
    #[must_use]
    pub const fn digits(&self) -> &[u8; CNPJ_LEN] {
        &self.0
    }

    /// Render with the conventional `00.000.000/0000-00` mask.
    #[must_use]
    pub fn masked(&self) -> String {
        render(&self.0, &MASK, |_| true)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digit_string(&self.0))
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
