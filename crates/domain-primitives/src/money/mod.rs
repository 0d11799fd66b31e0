//! Fixed-point money.
//!
//! Purpose: represent currency amounts as an integer count of minor units
//! (cents) so that arithmetic never accumulates floating-point error.
//!
//! Public surface:
//! - [`Money`] — non-negative amount plus [`CurrencyCode`].
//! - [`FormatConvention`] — separators and symbol placement per currency.
//! - [`MoneyError`] — construction and arithmetic failures.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

mod currency;
mod error;
mod format;
mod parse;

pub use self::currency::CurrencyCode;
pub use self::error::MoneyError;
pub use self::format::{FormatConvention, SymbolPosition};

/// Scale between major units and minor units.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Amount of money in minor units of a single currency.
///
/// ## Invariants
/// - `amount >= 0`.
/// - Binary operations only combine values of the same currency.
///
/// Values are `Copy` and every operation returns a new value. Serialises as
/// `{"amount": <minor units>, "currency": "<code>"}` and re-checks the
/// invariants on deserialisation.
///
/// # Examples
///
/// ```
/// use domain_primitives::money::{CurrencyCode, Money};
///
/// let price = Money::from_float(10.50).expect("valid amount");
/// let shipping = Money::new(525, CurrencyCode::BRL).expect("valid amount");
/// let total = price.add(shipping).expect("same currency");
///
/// assert_eq!(total.amount(), 1575);
/// assert_eq!(total.format(), "R$ 15,75");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyDto", into = "MoneyDto")]
pub struct Money {
    amount: i64,
    currency: CurrencyCode,
}

impl Money {
    /// Build from an amount in minor units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NegativeAmount`] when `amount` is below zero.
    pub fn new(amount: i64, currency: CurrencyCode) -> Result<Self, MoneyError> {
        if amount < 0 {
            return Err(MoneyError::NegativeAmount { amount });
        }
        Ok(Self { amount, currency })
    }

    /// Zero in `currency`.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Build a [`CurrencyCode::BRL`] amount from major units, e.g. `99.90`.
    ///
    /// # Errors
    ///
    /// See [`Money::from_major`].
    pub fn from_float(major: f64) -> Result<Self, MoneyError> {
        Self::from_major(major, CurrencyCode::BRL)
    }

    /// Build from major units, scaling by 100 and rounding half away from
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidMajorAmount`] for NaN or infinite input,
    /// [`MoneyError::Overflow`] when the scaled value does not fit and
    /// [`MoneyError::NegativeAmount`] when it is below zero.
    pub fn from_major(major: f64, currency: CurrencyCode) -> Result<Self, MoneyError> {
        if !major.is_finite() {
            return Err(MoneyError::InvalidMajorAmount {
                input: major.to_string(),
            });
        }
        let amount = scale_to_minor_units(major).ok_or(MoneyError::Overflow)?;
        Self::new(amount, currency)
    }

    /// Parse a decimal string in major units without going through floating
    /// point: `"1234"`, `"1234.5"`, `"1234.56"` and `"1234,56"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidMajorAmount`] for signs, thousands
    /// separators, more than two fractional digits or any other shape, and
    /// [`MoneyError::Overflow`] when the value does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_primitives::money::{CurrencyCode, Money};
    ///
    /// let money = Money::parse_major("1234,56", CurrencyCode::BRL).expect("valid amount");
    /// assert_eq!(money.amount(), 123_456);
    /// ```
    pub fn parse_major(text: &str, currency: CurrencyCode) -> Result<Self, MoneyError> {
        Self::new(parse::parse_minor_units(text)?, currency)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency of the amount.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Return `true` when the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Sum of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for different currencies and
    /// [`MoneyError::Overflow`] when the sum does not fit.
    #[expect(
        clippy::should_implement_trait,
        reason = "addition is fallible, so `std::ops::Add` does not fit"
    )]
    pub fn add(self, other: Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }

    /// Difference of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for different currencies and
    /// [`MoneyError::NegativeAmount`] when `other` is larger than `self`.
    pub fn subtract(self, other: Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }

    /// Amount scaled by an integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NegativeAmount`] for a negative factor applied
    /// to a non-zero amount and [`MoneyError::Overflow`] when the product
    /// does not fit.
    pub fn multiply(self, factor: i64) -> Result<Self, MoneyError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }

    /// Split into `parts` amounts that add up exactly to `self`.
    ///
    /// The remainder is spread one minor unit at a time over the first
    /// parts, so no two parts differ by more than one minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidSplit`] when `parts` is zero, larger
    /// than `i64::MAX`, or more than can be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_primitives::money::{CurrencyCode, Money};
    ///
    /// let bill = Money::new(1_000, CurrencyCode::USD).expect("valid amount");
    /// let shares: Vec<i64> = bill
    ///     .split(3)
    ///     .expect("three parts")
    ///     .iter()
    ///     .map(Money::amount)
    ///     .collect();
    /// assert_eq!(shares, vec![334, 333, 333]);
    /// ```
    pub fn split(self, parts: usize) -> Result<Vec<Self>, MoneyError> {
        let count = i64::try_from(parts)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(MoneyError::InvalidSplit { parts })?;
        let mut shares = Vec::new();
        shares
            .try_reserve_exact(parts)
            .map_err(|_| MoneyError::InvalidSplit { parts })?;
        let share = self.amount.div_euclid(count);
        let remainder = self.amount.rem_euclid(count);
        shares.extend((0..count).map(|index| Self {
            amount: share + i64::from(index < remainder),
            currency: self.currency,
        }));
        Ok(shares)
    }

    /// Compare two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for different currencies.
    pub fn checked_cmp(self, other: Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Render with the currency's [`FormatConvention`].
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&FormatConvention::for_currency(self.currency))
    }

    /// Render with a caller-supplied convention.
    #[must_use]
    pub fn format_with(&self, convention: &FormatConvention) -> String {
        convention.render(self.amount)
    }

    fn ensure_same_currency(self, other: Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "major-unit floats are converted once, with an explicit range check"
)]
fn scale_to_minor_units(major: f64) -> Option<i64> {
    let scaled = (major * MINOR_PER_MAJOR as f64).round();
    // i64::MAX is not representable; the nearest f64 is 2^63, one past it.
    let upper = i64::MAX as f64;
    let lower = i64::MIN as f64;
    (scaled >= lower && scaled < upper).then_some(scaled as i64)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyDto {
    amount: i64,
    currency: String,
}

impl From<Money> for MoneyDto {
    fn from(value: Money) -> Self {
        Self {
            amount: value.amount,
            currency: value.currency.into(),
        }
    }
}

impl TryFrom<MoneyDto> for Money {
    type Error = MoneyError;

    fn try_from(value: MoneyDto) -> Result<Self, Self::Error> {
        Self::new(value.amount, CurrencyCode::new(value.currency)?)
    }
}
