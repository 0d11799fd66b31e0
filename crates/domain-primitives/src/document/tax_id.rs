//! Identifier of either registry, chosen by digit count.

use std::fmt;

use super::DocumentKind;
use super::cnpj::Cnpj;
use super::cpf::Cpf;
use super::digits::normalize_digits;
use super::error::DocumentError;

/// A CPF or a CNPJ.
///
/// # Examples
///
/// ```
/// use domain_primitives::document::{DocumentKind, TaxId};
///
/// let id = TaxId::parse("11.222.333/0001-81").expect("valid CNPJ");
/// assert_eq!(id.kind(), DocumentKind::Cnpj);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxId {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Legal entity.
    Cnpj(Cnpj),
}

impl TaxId {
    /// Normalize `raw` and validate it as a CPF (11 digits) or a CNPJ
    /// (14 digits).
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnrecognisedLength`] for any other digit
    /// count, or the registry-specific validation error.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentError> {
        let digits = normalize_digits(raw.as_ref());
        match digits.len() {
            len if len == DocumentKind::Cpf.digit_count() => {
                Cpf::from_digits(&digits).map(Self::Cpf)
            }
            len if len == DocumentKind::Cnpj.digit_count() => {
                Cnpj::from_digits(&digits).map(Self::Cnpj)
            }
            actual => Err(DocumentError::UnrecognisedLength { actual }),
        }
    }

    /// Registry this identifier belongs to.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Render with the registry's conventional mask.
    #[must_use]
    pub fn masked(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.masked(),
            Self::Cnpj(cnpj) => cnpj.masked(),
        }
    }

    /// Render for logs: CPFs are redacted, CNPJs are public records and stay
    /// masked in full.
    #[must_use]
    pub fn redacted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.redacted(),
            Self::Cnpj(cnpj) => cnpj.masked(),
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(value: Cpf) -> Self {
        Self::Cpf(value)
    }
}

impl From<Cnpj> for TaxId {
    fn from(value: Cnpj) -> Self {
        Self::Cnpj(value)
    }
}
