//! Error type for rejected identifiers.

use thiserror::Error;

use super::DocumentKind;

/// Reasons an identifier was rejected.
///
/// Every variant means "this is not a valid identifier"; the variants only
/// exist so callers can tell the user what to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The input does not contain the expected number of digits.
    #[error("{kind} must have {expected} digits, found {actual}")]
    InvalidLength {
        /// Registry the input was checked against.
        kind: DocumentKind,
        /// Required number of digits.
        expected: usize,
        /// Digits found after normalization.
        actual: usize,
    },

    /// Every digit is the same, a pattern the registries never issue.
    #[error("{kind} must not consist of a single repeated digit")]
    RepeatedDigits {
        /// Registry the input was checked against.
        kind: DocumentKind,
    },

    /// At least one check digit does not match the computed value.
    #[error("{kind} check digits do not match")]
    ChecksumMismatch {
        /// Registry the input was checked against.
        kind: DocumentKind,
    },

    /// The digit count matches neither a CPF nor a CNPJ.
    #[error("expected 11 digits (CPF) or 14 digits (CNPJ), found {actual}")]
    UnrecognisedLength {
        /// Digits found after normalization.
        actual: usize,
    },
}

impl DocumentError {
    /// Registry the failed input was checked against, when one was chosen.
    #[must_use]
    pub const fn kind(&self) -> Option<DocumentKind> {
        match self {
            Self::InvalidLength { kind, .. }
            | Self::RepeatedDigits { kind }
            | Self::ChecksumMismatch { kind } => Some(*kind),
            Self::UnrecognisedLength { .. } => None,
        }
    }
}
