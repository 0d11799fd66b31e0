//! Property-based tests for the domain primitives.
//!
//! ## Identifiers
//!
//! 1. **Repeated digits**: eleven (or fourteen) copies of one digit are never valid.
//! 2. **Completion**: any non-repeated base completed with `from_base` parses back.
//! 3. **Single-digit corruption**: changing one check digit is always detected.
//!
//! ## Money
//!
//! 4. **Non-negativity**: construction fails for every negative amount.
//! 5. **Currency guard**: mixed-currency arithmetic always fails.
//! 6. **Immutability**: `multiply` never changes the receiver.
//! 7. **Exact split**: parts sum to the whole and differ by at most one.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use domain_primitives::{Cnpj, Cpf, CurrencyCode, DocumentError, Money, MoneyError};
use proptest::prelude::*;

fn currency() -> impl Strategy<Value = CurrencyCode> {
    prop::array::uniform3(b'A'..=b'Z').prop_map(|letters| {
        let code: String = letters.iter().copied().map(char::from).collect();
        CurrencyCode::new(code).expect("three upper-case letters")
    })
}

fn digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0_u8..=9, len).prop_map(|values| {
        values
            .iter()
            .map(|digit| char::from(b'0' + digit))
            .collect::<String>()
    })
}

fn is_repeated(value: &str) -> bool {
    value.chars().all(|ch| Some(ch) == value.chars().next())
}

proptest! {
    #[test]
    fn prop_repeated_cpf_digits_are_rejected(digit in 0_u8..=9) {
        let raw = char::from(b'0' + digit).to_string().repeat(11);
        let result = Cpf::parse(&raw);
        prop_assert!(
            matches!(result, Err(DocumentError::RepeatedDigits { .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn prop_repeated_cnpj_digits_are_rejected(digit in 0_u8..=9) {
        let raw = char::from(b'0' + digit).to_string().repeat(14);
        let result = Cnpj::parse(&raw);
        prop_assert!(
            matches!(result, Err(DocumentError::RepeatedDigits { .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn prop_completed_cpf_bases_parse(base in digits(9)) {
        prop_assume!(!is_repeated(&base));
        let cpf = Cpf::from_base(&base).expect("completed base");
        prop_assert_eq!(Cpf::parse(cpf.masked()), Ok(cpf));
        prop_assert!(cpf.to_string().starts_with(&base));
    }

    #[test]
    fn prop_completed_cnpj_bases_parse(base in digits(12)) {
        prop_assume!(!is_repeated(&base));
        let cnpj = Cnpj::from_base(&base).expect("completed base");
        prop_assert_eq!(Cnpj::parse(cnpj.masked()), Ok(cnpj));
    }

    #[test]
    fn prop_altered_last_check_digit_is_detected(base in digits(9), shift in 1_u8..=9) {
        prop_assume!(!is_repeated(&base));
        let cpf = Cpf::from_base(&base).expect("completed base");
        let mut altered = *cpf.digits();
        if let Some(last) = altered.last_mut() {
            *last = (*last + shift).rem_euclid(10);
        }
        prop_assert!(Cpf::from_digits(&altered).is_err());
    }

    #[test]
    fn prop_negative_amounts_are_rejected(amount in i64::MIN..0, code in currency()) {
        prop_assert_eq!(
            Money::new(amount, code),
            Err(MoneyError::NegativeAmount { amount })
        );
    }

    #[test]
    fn prop_mixed_currencies_never_combine(
        left in currency(),
        right in currency(),
        a in 0_i64..1_000_000,
        b in 0_i64..1_000_000,
    ) {
        prop_assume!(left != right);
        let lhs = Money::new(a, left).expect("valid amount");
        let rhs = Money::new(b, right).expect("valid amount");
        let mismatch = MoneyError::CurrencyMismatch { left, right };
        prop_assert_eq!(lhs.add(rhs), Err(mismatch.clone()));
        prop_assert_eq!(lhs.subtract(rhs), Err(mismatch));
    }

    #[test]
    fn prop_multiply_leaves_receiver_unchanged(
        amount in 0_i64..=i64::MAX,
        factor in any::<i64>(),
        code in currency(),
    ) {
        let original = Money::new(amount, code).expect("valid amount");
        let before = original;
        let _product = original.multiply(factor);
        prop_assert_eq!(original, before);
        prop_assert_eq!(original.amount(), amount);
    }

    #[test]
    fn prop_split_is_exact(amount in 0_i64..10_000_000, parts in 1_usize..50) {
        let money = Money::new(amount, CurrencyCode::BRL).expect("valid amount");
        let shares = money.split(parts).expect("valid split");
        prop_assert_eq!(shares.len(), parts);

        let total: i64 = shares.iter().map(Money::amount).sum();
        prop_assert_eq!(total, amount);

        let max = shares.iter().map(Money::amount).max().unwrap_or_default();
        let min = shares.iter().map(Money::amount).min().unwrap_or_default();
        prop_assert!(max - min <= 1);
    }
}
