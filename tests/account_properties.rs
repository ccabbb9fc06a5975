//! Property tests for the balance rules of a single account and of transfers.

use proptest::prelude::*;
use rust_decimal::Decimal;
use twin_ledger::account::{Account, AccountError};

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|value| Decimal::new(value, 2))
}

/// Balances within a few units of the largest representable value.
fn near_limit() -> impl Strategy<Value = Decimal> {
    (0..1_000i64).prop_map(|below| Decimal::MAX - Decimal::new(below, 0))
}

fn account(name: &str, balance: Decimal) -> Account {
    Account::open(name, balance).unwrap()
}

proptest! {
    /// A positive deposit raises the balance by exactly the deposited amount.
    #[test]
    fn prop_deposit_adds_amount(
        balance in cents(0..1_000_000_000),
        amount in cents(1..1_000_000_000)
    ) {
        let mut acc = account("A", balance);
        let after = acc.deposit(amount).unwrap();
        prop_assert_eq!(after, balance + amount);
        prop_assert_eq!(acc.balance(), balance + amount);
    }

    /// Withdrawing more than the balance is rejected and changes nothing.
    #[test]
    fn prop_overdraw_is_rejected(
        balance in cents(0..1_000_000_000),
        excess in cents(1..1_000_000_000)
    ) {
        let mut acc = account("A", balance);
        let err = acc.withdraw(balance + excess).unwrap_err();
        let is_insufficient = matches!(err, AccountError::InsufficientBalance { .. });
        prop_assert!(is_insufficient);
        prop_assert_eq!(acc.balance(), balance);
    }

    /// Zero and negative amounts are rejected by every operation alike.
    #[test]
    fn prop_non_positive_amounts_are_rejected(
        balance in cents(0..1_000_000_000),
        amount in cents(-1_000_000_000..1)
    ) {
        let mut acc = account("A", balance);
        let mut other = account("B", balance);

        let is_invalid = |result: Result<_, AccountError>| {
            matches!(result, Err(AccountError::InvalidAmount { .. }))
        };
        prop_assert!(is_invalid(acc.deposit(amount).map(|_| ())));
        prop_assert!(is_invalid(acc.withdraw(amount).map(|_| ())));
        prop_assert!(is_invalid(acc.transfer(&mut other, amount).map(|_| ())));
        prop_assert_eq!(acc.balance(), balance);
        prop_assert_eq!(other.balance(), balance);
    }

    /// A transfer either moves funds while conserving the total, or leaves both
    /// accounts untouched.
    #[test]
    fn prop_transfer_conserves_total(
        source_balance in cents(0..1_000_000_000),
        destination_balance in cents(0..1_000_000_000),
        amount in cents(-1_000..2_000_000_000)
    ) {
        let mut source = account("A", source_balance);
        let mut destination = account("B", destination_balance);

        match source.transfer(&mut destination, amount) {
            Ok((source_after, destination_after)) => {
                prop_assert_eq!(source_after + destination_after, source_balance + destination_balance);
                prop_assert_eq!(source_after, source_balance - amount);
                prop_assert!(source_after >= Decimal::ZERO);
            }
            Err(_) => {
                prop_assert_eq!(source.balance(), source_balance);
                prop_assert_eq!(destination.balance(), destination_balance);
            }
        }
    }

    /// Credits near the numeric limit either land exactly or are rejected
    /// without touching either account.
    #[test]
    fn prop_credit_near_limit_never_partially_applies(
        destination_balance in near_limit(),
        source_balance in cents(1..1_000_000_000),
        amount in cents(1..1_000_000_000)
    ) {
        let mut depositor = account("A", destination_balance);
        match depositor.deposit(amount) {
            Ok(after) => prop_assert_eq!(after, destination_balance + amount),
            Err(err) => {
                let is_overflow = matches!(err, AccountError::BalanceOverflow { .. });
                prop_assert!(is_overflow);
                prop_assert_eq!(depositor.balance(), destination_balance);
            }
        }

        let mut source = account("S", source_balance);
        let mut destination = account("D", destination_balance);
        if source.transfer(&mut destination, amount).is_err() {
            prop_assert_eq!(source.balance(), source_balance);
            prop_assert_eq!(destination.balance(), destination_balance);
        }
    }
}
