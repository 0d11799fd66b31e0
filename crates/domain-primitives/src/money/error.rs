//! Error type for money construction and arithmetic.

use thiserror::Error;

use super::currency::CurrencyCode;

/// Errors raised by [`Money`](super::Money) and [`CurrencyCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The amount, given or computed, is below zero.
    #[error("money amount must not be negative, got {amount} minor units")]
    NegativeAmount {
        /// Offending amount in minor units.
        amount: i64,
    },

    /// Two amounts in different currencies were combined.
    #[error("cannot combine {left} with {right}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        left: CurrencyCode,
        /// Currency of the argument.
        right: CurrencyCode,
    },

    /// The result does not fit in a signed 64-bit count of minor units.
    #[error("money amount exceeds the representable range")]
    Overflow,

    /// A major-unit amount could not be read.
    #[error("'{input}' is not a valid amount in major units")]
    InvalidMajorAmount {
        /// The rejected input.
        input: String,
    },

    /// A currency code is not three ASCII letters.
    #[error("'{code}' is not a three-letter currency code")]
    InvalidCurrencyCode {
        /// The rejected input.
        code: String,
    },

    /// An amount was split into an unusable number of parts.
    #[error("cannot split money into {parts} parts")]
    InvalidSplit {
        /// Requested number of parts.
        parts: usize,
    },
}
