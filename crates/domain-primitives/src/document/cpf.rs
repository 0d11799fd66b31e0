//! Individual taxpayer registry number (CPF).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DocumentKind;
use super::checksum::{append_check_digits, cpf_check_digit, verify_check_digits, CHECK_DIGITS};
use super::digits::{digit_string, normalize_digits, render};
use super::error::DocumentError;

const CPF_LEN: usize = 11;
const MASK: [(usize, char); 3] = [(3, '.'), (6, '.'), (9, '-')];

/// Validated CPF.
///
/// ## Invariants
/// - Exactly 11 digits.
/// - Not a single digit repeated eleven times.
/// - Both check digits agree with the mod-11 rule.
///
/// Serialises as the bare 11-digit string and re-validates on
/// deserialisation.
///
/// # Examples
///
/// ```
/// use domain_primitives::document::Cpf;
///
/// let cpf = Cpf::parse("529.982.247-25").expect("valid CPF");
/// assert_eq!(cpf.to_string(), "52998224725");
/// assert_eq!(cpf.masked(), "529.982.247-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
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
        <[u8; CPF_LEN]>::try_from(digits)
            .map(Self)
            .map_err(|_| DocumentError::InvalidLength {
                kind: DocumentKind::Cpf,
                expected: CPF_LEN,
                actual: digits.len(),
            })
    }

    /// Check digit values against the CPF rules without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidLength`], [`DocumentError::RepeatedDigits`]
    /// or [`DocumentError::ChecksumMismatch`].
    pub fn validate_digits(digits: &[u8]) -> Result<(), DocumentError> {
        verify_check_digits(DocumentKind::Cpf, digits, cpf_check_digit)
    }

    /// Return `true` when `raw` parses as a CPF.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Complete a nine-digit base by computing its two check digits.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidLength`] when the base does not have
    /// nine digits and [`DocumentError::RepeatedDigits`] for bases such as
    /// `111111111` whose completion is excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_primitives::document::Cpf;
    ///
    /// let cpf = Cpf::from_base("529982247").expect("valid base");
    /// assert_eq!(cpf.masked(), "529.982.247-25");
    /// ```
    pub fn from_base(base: impl AsRef<str>) -> Result<Self, DocumentError> {
        let base = normalize_digits(base.as_ref());
        let expected = CPF_LEN - CHECK_DIGITS;
        if base.len() != expected {
            return Err(DocumentError::InvalidLength {
                kind: DocumentKind::Cpf,
                expected,
                actual: base.len(),
            });
        }
        Self::from_digits(&append_check_digits(&base, cpf_check_digit))
    }

    /// Digit values in order.
    #[must_use]
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// Render with the conventional `000.000.000-00` mask.
    #[must_use]
    pub fn masked(&self) -> String {
        render(&self.0, &MASK, |_| true)
    }

    /// Render with the mask but only the middle six digits visible
    /// (`***.982.247-**`), for logs and receipts.
    #[must_use]
    pub fn redacted(&self) -> String {
        render(&self.0, &MASK, |index| (3..9).contains(&index))
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digit_string(&self.0))
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
