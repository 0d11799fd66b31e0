//! Exact parsing of decimal major-unit strings.

use std::sync::OnceLock;

use regex::Regex;

use super::MINOR_PER_MAJOR;
use super::error::MoneyError;

static MAJOR_AMOUNT_RE: OnceLock<Regex> = OnceLock::new();

fn major_amount_regex() -> &'static Regex {
    MAJOR_AMOUNT_RE.get_or_init(|| {
        // Either separator is accepted for the fraction; grouping is not.
        let pattern = r"^(?P<major>[0-9]+)(?:[.,](?P<minor>[0-9]{1,2}))?$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("major amount regex failed to compile: {error}"))
    })
}

/// Parse `"1234"`, `"1234.5"` or `"1234,56"` into minor units.
pub(crate) fn parse_minor_units(text: &str) -> Result<i64, MoneyError> {
    let invalid = || MoneyError::InvalidMajorAmount {
        input: text.to_owned(),
    };
    let captures = major_amount_regex()
        .captures(text.trim())
        .ok_or_else(invalid)?;
    let major = captures
        .name("major")
        .ok_or_else(invalid)?
        .as_str()
        .parse::<i64>()
        .map_err(|_| MoneyError::Overflow)?;
    let minor = match captures.name("minor").map(|m| m.as_str()) {
        None => 0,
        Some(digits) if digits.len() == 1 => digits.parse::<i64>().map_err(|_| invalid())? * 10,
        Some(digits) => digits.parse::<i64>().map_err(|_| invalid())?,
    };
    major
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|scaled| scaled.checked_add(minor))
        .ok_or(MoneyError::Overflow)
}
