//! Error types for the `primitives-check` command flow.

use thiserror::Error;

use crate::money::MoneyError;

/// Errors surfaced while running a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// An amount or currency supplied on the command line was rejected.
    #[error("money error: {source}")]
    Money {
        /// Underlying money error.
        #[from]
        #[source]
        source: MoneyError,
    },
    /// The configured default currency is malformed.
    #[error("invalid PRIMITIVES_DEFAULT_CURRENCY: {source}")]
    ConfiguredCurrency {
        /// Underlying money error.
        #[source]
        source: MoneyError,
    },
}
