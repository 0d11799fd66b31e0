//! Behavioural tests for fixed-point money.
//!
//! These tests exercise construction, arithmetic and formatting through
//! Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use domain_primitives::{CurrencyCode, Money, MoneyError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding operands and the latest operation result.
#[derive(Default, ScenarioState)]
struct World {
    first_major: Slot<f64>,
    second_major: Slot<f64>,
    first: Slot<Money>,
    second: Slot<Money>,
    result: Slot<Result<Money, MoneyError>>,
}

impl World {
    /// Operand from minor units when given, otherwise converted from major units.
    fn operand(money: &Slot<Money>, major: &Slot<f64>) -> Money {
        money.get().unwrap_or_else(|| {
            let value = major.get().expect("operand should be set");
            Money::from_float(value).expect("valid major amount")
        })
    }

    fn first(&self) -> Money {
        Self::operand(&self.first, &self.first_major)
    }

    fn second(&self) -> Money {
        Self::operand(&self.second, &self.second_major)
    }

    fn result(&self) -> Result<Money, MoneyError> {
        self.result.get().expect("operation result should be set")
    }
}

fn money(amount: i64, code: &str) -> Money {
    let currency = CurrencyCode::new(code).expect("valid currency code");
    Money::new(amount, currency).expect("valid amount")
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an amount of {major} in major units")]
fn an_amount_of_major_units(world: &World, major: f64) {
    world.first_major.set(major);
}

#[given("a second amount of {major} in major units")]
fn a_second_amount_of_major_units(world: &World, major: f64) {
    world.second_major.set(major);
}

#[given("a value of {amount} minor units of {code}")]
fn a_value_of_minor_units(world: &World, amount: i64, code: String) {
    world.first.set(money(amount, &code));
}

#[given("a second value of {amount} minor units of {code}")]
fn a_second_value_of_minor_units(world: &World, amount: i64, code: String) {
    world.second.set(money(amount, &code));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the amount is converted with the default currency")]
fn the_amount_is_converted(world: &World) {
    let major = world.first_major.get().expect("major amount should be set");
    world.result.set(Money::from_float(major));
}

#[when("the amounts are added")]
fn the_amounts_are_added(world: &World) {
    world.result.set(world.first().add(world.second()));
}

#[when("money is constructed with {amount} minor units of {code}")]
fn money_is_constructed(world: &World, amount: i64, code: String) {
    let result = CurrencyCode::new(&code).and_then(|currency| Money::new(amount, currency));
    world.result.set(result);
}

#[when("the money is multiplied by {factor}")]
fn the_money_is_multiplied(world: &World, factor: i64) {
    world.result.set(world.first().multiply(factor));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the money holds {amount} minor units of {code}")]
fn the_money_holds(world: &World, amount: i64, code: String) {
    let money = world.result().expect("operation should succeed");
    assert_eq!(money.amount(), amount);
    assert_eq!(money.currency().as_str(), code);
}

#[then("the original still holds {amount} minor units")]
fn the_original_still_holds(world: &World, amount: i64) {
    assert_eq!(world.first().amount(), amount);
}

#[then("the operation fails with a currency mismatch")]
fn the_operation_fails_with_a_currency_mismatch(world: &World) {
    match world.result() {
        Err(MoneyError::CurrencyMismatch { .. }) => {}
        other => panic!("Expected CurrencyMismatch, got: {other:?}"),
    }
}

#[then("the operation fails with a negative amount error")]
fn the_operation_fails_with_a_negative_amount_error(world: &World) {
    match world.result() {
        Err(MoneyError::NegativeAmount { .. }) => {}
        other => panic!("Expected NegativeAmount, got: {other:?}"),
    }
}

#[then("the formatted amount is {expected}")]
fn the_formatted_amount_is(world: &World, expected: String) {
    assert_eq!(world.first().format(), expected);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/money.feature",
    name = "Float input is stored as exact minor units"
)]
fn float_input_is_stored_as_exact_minor_units(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/money.feature",
    name = "Adding float-built amounts is exact"
)]
fn adding_float_built_amounts_is_exact(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/money.feature",
    name = "Mixed currencies cannot be added"
)]
fn mixed_currencies_cannot_be_added(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/money.feature",
    name = "Negative amounts cannot be constructed"
)]
fn negative_amounts_cannot_be_constructed(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/money.feature",
    name = "Multiplication leaves the original untouched"
)]
fn multiplication_leaves_the_original_untouched(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/money.feature",
    name = "Amounts are formatted with the currency convention"
)]
fn amounts_are_formatted_with_the_currency_convention(world: World) {
    let _ = world;
}
