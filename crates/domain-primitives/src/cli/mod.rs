//! Command-line support for `primitives-check`.
//!
//! The binary parses arguments with [`CliArgs`] and hands the command to
//! [`run`], which returns a [`Report`] instead of printing. Tests exercise
//! the same path without spawning a process.

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::PrimitivesSettings;
use crate::document::TaxId;
use crate::money::{CurrencyCode, Money};

mod error;

pub use self::error::CliError;

/// `primitives-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "primitives-check",
    about = "Validate CPF/CNPJ numbers and work with fixed-point money amounts",
    version
)]
pub struct CliArgs {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate CPF or CNPJ numbers, masked or bare.
    Document {
        /// Identifiers to check; the registry is chosen by digit count.
        #[arg(required = true, value_name = "VALUE")]
        values: Vec<String>,
    },
    /// Format and combine money amounts given in major units.
    #[command(subcommand)]
    Money(MoneyCommand),
}

/// Money operations. Amounts are decimal strings such as `10.50` or `10,50`.
#[derive(Debug, Clone, Subcommand)]
pub enum MoneyCommand {
    /// Render one amount with its currency convention.
    Format {
        /// Amount in major units.
        amount: String,
        /// Currency code; defaults to the configured currency.
        #[arg(long, value_name = "CODE")]
        currency: Option<String>,
    },
    /// Add amounts of one currency.
    Sum {
        /// Amounts in major units.
        #[arg(required = true)]
        amounts: Vec<String>,
        /// Currency code; defaults to the configured currency.
        #[arg(long, value_name = "CODE")]
        currency: Option<String>,
    },
    /// Split an amount into equal parts without losing cents.
    Split {
        /// Amount in major units.
        amount: String,
        /// Number of parts.
        #[arg(long)]
        parts: usize,
        /// Currency code; defaults to the configured currency.
        #[arg(long, value_name = "CODE")]
        currency: Option<String>,
    },
}

/// Output of a command: lines for stdout and an overall verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    success: bool,
}

impl Report {
    fn succeeded(lines: Vec<String>) -> Self {
        Self {
            lines,
            success: true,
        }
    }

    /// Lines to print, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `false` when any input was rejected.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}

/// Execute `command` with `settings` supplying defaults.
///
/// Rejected identifiers are reported in the [`Report`]; money failures abort
/// the command.
///
/// # Errors
///
/// Returns [`CliError`] when an amount or currency is invalid or arithmetic
/// fails.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use domain_primitives::cli::{CliArgs, run};
/// use domain_primitives::config::PrimitivesSettings;
///
/// let args = CliArgs::try_parse_from(["primitives-check", "document", "529.982.247-25"])
///     .expect("parse args");
/// let settings = PrimitivesSettings { default_currency: None, json_logs: false };
/// let report = run(&args.command, &settings).expect("run");
///
/// assert!(report.is_success());
/// assert_eq!(report.lines(), ["valid CPF 529.982.247-25"]);
/// ```
pub fn run(command: &Command, settings: &PrimitivesSettings) -> Result<Report, CliError> {
    match command {
        Command::Document { values } => Ok(check_documents(values)),
        Command::Money(money) => run_money(money, settings),
    }
}

fn check_documents(values: &[String]) -> Report {
    let mut lines = Vec::with_capacity(values.len());
    let mut success = true;
    for value in values {
        match TaxId::parse(value) {
            Ok(id) => {
                debug!(kind = %id.kind(), id = %id.redacted(), "identifier accepted");
                lines.push(format!("valid {} {}", id.kind(), id.masked()));
            }
            Err(error) => {
                warn!(%error, "identifier rejected");
                lines.push(format!("invalid: {error}"));
                success = false;
            }
        }
    }
    Report { lines, success }
}

fn run_money(command: &MoneyCommand, settings: &PrimitivesSettings) -> Result<Report, CliError> {
    match command {
        MoneyCommand::Format { amount, currency } => {
            let currency = resolve_currency(currency.as_deref(), settings)?;
            let money = Money::parse_major(amount, currency)?;
            Ok(Report::succeeded(vec![money.format()]))
        }
        MoneyCommand::Sum { amounts, currency } => {
            let currency = resolve_currency(currency.as_deref(), settings)?;
            let total = amounts.iter().try_fold(Money::zero(currency), |total, amount| {
                total.add(Money::parse_major(amount, currency)?)
            })?;
            debug!(count = amounts.len(), total = total.amount(), "amounts summed");
            Ok(Report::succeeded(vec![total.format()]))
        }
        MoneyCommand::Split {
            amount,
            parts,
            currency,
        } => {
            let currency = resolve_currency(currency.as_deref(), settings)?;
            let shares = Money::parse_major(amount, currency)?.split(*parts)?;
            Ok(Report::succeeded(shares.iter().map(Money::format).collect()))
        }
    }
}

fn resolve_currency(
    flag: Option<&str>,
    settings: &PrimitivesSettings,
) -> Result<CurrencyCode, CliError> {
    match flag {
        Some(code) => Ok(CurrencyCode::new(code)?),
        None => settings
            .default_currency()
            .map_err(|source| CliError::ConfiguredCurrency { source }),
    }
}

#[cfg(test)]
mod tests;
