//! Presentation of minor-unit amounts.
//!
//! Formatting is a lookup from currency code to a fixed convention; the
//! arithmetic never depends on it.

use super::currency::CurrencyCode;

const MINOR_DIGITS: usize = 2;
const MINOR_PER_MAJOR: u64 = super::MINOR_PER_MAJOR.unsigned_abs();
const GROUP_SIZE: usize = 3;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `R$ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

/// Separators and symbol placement used to render an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConvention {
    /// Currency symbol, or the code itself when no symbol is known.
    pub symbol: String,
    /// Symbol placement.
    pub position: SymbolPosition,
    /// Separator between groups of three integer digits.
    pub thousands_separator: char,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
}

impl FormatConvention {
    /// Convention for `code`.
    ///
    /// | code  | example        |
    /// |-------|----------------|
    /// | BRL   | `R$ 1.234,56`  |
    /// | USD   | `$1,234.56`    |
    /// | EUR   | `1.234,56 €`   |
    /// | GBP   | `£1,234.56`    |
    /// | other | `CHF 1,234.56` |
    #[must_use]
    pub fn for_currency(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::BRL => Self::new("R$", SymbolPosition::PrefixSpaced, '.', ','),
            CurrencyCode::USD => Self::new("$", SymbolPosition::Prefix, ',', '.'),
            CurrencyCode::EUR => Self::new("€", SymbolPosition::SuffixSpaced, '.', ','),
            CurrencyCode::GBP => Self::new("£", SymbolPosition::Prefix, ',', '.'),
            other => Self::new(other.as_str(), SymbolPosition::PrefixSpaced, ',', '.'),
        }
    }

    fn new(
        symbol: &str,
        position: SymbolPosition,
        thousands_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            symbol: symbol.to_owned(),
            position,
            thousands_separator,
            decimal_separator,
        }
    }

    /// Render `minor_units` divided by 100 under this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_primitives::money::{CurrencyCode, FormatConvention};
    ///
    /// let brl = FormatConvention::for_currency(CurrencyCode::BRL);
    /// assert_eq!(brl.render(123_456), "R$ 1.234,56");
    /// ```
    #[must_use]
    pub fn render(&self, minor_units: i64) -> String {
        let magnitude = minor_units.unsigned_abs();
        let major = group_thousands(
            magnitude.div_euclid(MINOR_PER_MAJOR),
            self.thousands_separator,
        );
        let minor = magnitude.rem_euclid(MINOR_PER_MAJOR);
        let number = format!(
            "{major}{separator}{minor:0width$}",
            separator = self.decimal_separator,
            width = MINOR_DIGITS,
        );
        let sign = if minor_units < 0 { "-" } else { "" };
        let symbol = &self.symbol;
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPosition::PrefixSpaced => format!("{sign}{symbol} {number}"),
            SymbolPosition::SuffixSpaced => format!("{sign}{number} {symbol}"),
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len.div_euclid(GROUP_SIZE));
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index).rem_euclid(GROUP_SIZE) == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
