//! Tests for command parsing and execution.

use super::*;
use rstest::{fixture, rstest};

use crate::money::MoneyError;

#[fixture]
fn settings() -> PrimitivesSettings {
    PrimitivesSettings {
        default_currency: None,
        json_logs: false,
    }
}

fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("primitives-check").chain(args.iter().copied());
    CliArgs::try_parse_from(argv)
        .expect("arguments should parse")
        .command
}

#[rstest]
fn document_reports_each_value(settings: PrimitivesSettings) {
    let command = parse(&["document", "52998224725", "11.222.333/0001-81"]);
    let report = run(&command, &settings).expect("run");
    assert!(report.is_success());
    assert_eq!(
        report.lines(),
        ["valid CPF 529.982.247-25", "valid CNPJ 11.222.333/0001-81"]
    );
}

#[rstest]
fn document_flags_invalid_values(settings: PrimitivesSettings) {
    let command = parse(&["document", "52998224700", "11111111111", "123"]);
    let report = run(&command, &settings).expect("run");
    assert!(!report.is_success());
    assert_eq!(
        report.lines(),
        [
            "invalid: CPF check digits do not match",
            "invalid: CPF must not consist of a single repeated digit",
            "invalid: expected 11 digits (CPF) or 14 digits (CNPJ), found 3",
        ]
    );
}

#[test]
fn document_requires_a_value() {
    let result = CliArgs::try_parse_from(["primitives-check", "document"]);
    assert!(result.is_err());
}

#[rstest]
#[case(&["money", "format", "1234.56"], "R$ 1.234,56")]
#[case(&["money", "format", "1234.56", "--currency", "usd"], "$1,234.56")]
#[case(&["money", "sum", "10.50", "5.25"], "R$ 15,75")]
fn money_commands_render_results(
    settings: PrimitivesSettings,
    #[case] args: &[&str],
    #[case] expected: &str,
) {
    let report = run(&parse(args), &settings).expect("run");
    assert!(report.is_success());
    assert_eq!(report.lines(), [expected]);
}

#[rstest]
fn split_lists_every_share(settings: PrimitivesSettings) {
    let command = parse(&["money", "split", "10", "--parts", "3", "--currency", "GBP"]);
    let report = run(&command, &settings).expect("run");
    assert_eq!(report.lines(), ["£3.34", "£3.33", "£3.33"]);
}

#[test]
fn configured_currency_is_the_default() {
    let settings = PrimitivesSettings {
        default_currency: Some("EUR".to_owned()),
        json_logs: false,
    };
    let report = run(&parse(&["money", "format", "1000"]), &settings).expect("run");
    assert_eq!(report.lines(), ["1.000,00 €"]);
}

#[test]
fn malformed_configured_currency_is_reported() {
    let settings = PrimitivesSettings {
        default_currency: Some("euro".to_owned()),
        json_logs: false,
    };
    let err = run(&parse(&["money", "format", "1"]), &settings).expect_err("bad config");
    assert_eq!(
        err,
        CliError::ConfiguredCurrency {
            source: MoneyError::InvalidCurrencyCode {
                code: "euro".to_owned()
            }
        }
    );
}

#[rstest]
fn malformed_amount_is_reported(settings: PrimitivesSettings) {
    let err = run(&parse(&["money", "format", "12.345"]), &settings).expect_err("bad amount");
    assert_eq!(
        err.to_string(),
        "money error: '12.345' is not a valid amount in major units"
    );
}

#[rstest]
fn split_into_zero_parts_is_reported(settings: PrimitivesSettings) {
    let err = run(&parse(&["money", "split", "1", "--parts", "0"]), &settings)
        .expect_err("zero parts");
    assert_eq!(
        err,
        CliError::Money {
            source: MoneyError::InvalidSplit { parts: 0 }
        }
    );
}

#[rstest]
fn split_into_unallocatable_parts_is_reported(settings: PrimitivesSettings) {
    let command = parse(&["money", "split", "10", "--parts", "4611686018427387904"]);
    let err = run(&command, &settings).expect_err("too many parts");
    assert_eq!(
        err,
        CliError::Money {
            source: MoneyError::InvalidSplit { parts: 1_usize << 62 }
        }
    );
}
