//! Brazilian tax identifiers.
//!
//! Purpose: model the individual (CPF) and company (CNPJ) registry numbers
//! as immutable value objects that can only exist once their check digits
//! have been verified.
//!
//! Each identifier passes through three separate steps, each usable on its
//! own:
//!
//! - normalization: [`normalize_digits`] keeps the ASCII digits of the raw
//!   input and drops masks, spaces and any other character;
//! - validation: [`Cpf::validate_digits`] and [`Cnpj::validate_digits`]
//!   check length, repeated-digit sequences and both check digits;
//! - presentation: [`Cpf::masked`], [`Cpf::redacted`] and [`Cnpj::masked`]
//!   render the canonical digits for people.
//!
//! Public surface:
//! - [`Cpf`], [`Cnpj`] and [`TaxId`] value objects.
//! - [`DocumentError`], the single error type for every rejected identifier.

use std::fmt;

mod checksum;
mod cnpj;
mod cpf;
mod digits;
mod error;
mod tax_id;

pub use self::cnpj::Cnpj;
pub use self::cpf::Cpf;
pub use self::digits::normalize_digits;
pub use self::error::DocumentError;
pub use self::tax_id::TaxId;

/// Which registry an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Individual taxpayer registry number (11 digits).
    Cpf,
    /// National registry of legal entities (14 digits).
    Cnpj,
}

impl DocumentKind {
    /// Number of digits, check digits included, in a complete identifier.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Short upper-case label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
