//! ISO 4217 style three-letter currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MoneyError;

const CODE_LEN: usize = 3;

/// Three-letter currency code, stored upper-case.
///
/// Any three ASCII letters are accepted; formatting conventions exist for a
/// fixed set of codes and everything else falls back to a generic layout.
///
/// # Examples
///
/// ```
/// use domain_primitives::money::CurrencyCode;
///
/// let code = CurrencyCode::new("brl").expect("valid code");
/// assert_eq!(code, CurrencyCode::BRL);
/// assert_eq!(code.as_str(), "BRL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; CODE_LEN]);

impl CurrencyCode {
    /// Brazilian real.
    pub const BRL: Self = Self(*b"BRL");
    /// United States dollar.
    pub const USD: Self = Self(*b"USD");
    /// Euro.
    pub const EUR: Self = Self(*b"EUR");
    /// Pound sterling.
    pub const GBP: Self = Self(*b"GBP");

    /// Validate and normalize a currency code.
    ///
    /// Surrounding whitespace is ignored and letters are upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrencyCode`] unless the input is exactly
    /// three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, MoneyError> {
        let raw = code.as_ref();
        let invalid = || MoneyError::InvalidCurrencyCode {
            code: raw.to_owned(),
        };
        let letters = <[u8; CODE_LEN]>::try_from(raw.trim().as_bytes()).map_err(|_| invalid())?;
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid());
        }
        Ok(Self(letters.map(|letter| letter.to_ascii_uppercase())))
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.as_str().to_owned()
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
