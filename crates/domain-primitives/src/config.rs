//! Configuration for `primitives-check`, loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::money::{CurrencyCode, MoneyError};

/// Settings layered from configuration files and `PRIMITIVES_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRIMITIVES")]
pub struct PrimitivesSettings {
    /// Currency used when a command does not name one.
    pub default_currency: Option<String>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl PrimitivesSettings {
    /// Return the configured default currency, falling back to
    /// [`CurrencyCode::BRL`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrencyCode`] when the configured value
    /// is not a three-letter code.
    pub fn default_currency(&self) -> Result<CurrencyCode, MoneyError> {
        self.default_currency
            .as_deref()
            .map_or(Ok(CurrencyCode::BRL), CurrencyCode::new)
    }
}
