use std::io::Write;

use anyhow::Result;

use crate::{
    account::{Account, AccountError},
    command::{AccountSlot, OperationKind},
    processor::{ProcessError, Receipt},
};

use super::config::SessionConfig;

pub const INVALID_OPTION_MESSAGE: &str = "Invalid option. Please try again.";

pub fn print_menu<W: Write>(output: &mut W, config: &SessionConfig) -> Result<()> {
    let first = config.account_name(AccountSlot::First);
    let second = config.account_name(AccountSlot::Second);
    writeln!(output)?;
    writeln!(output, "Options:")?;
    writeln!(output, "1. Deposit into {first}")?;
    writeln!(output, "2. Withdraw from {first}")?;
    writeln!(output, "3. Transfer from {first} to {second}")?;
    writeln!(output, "4. Deposit into {second}")?;
    writeln!(output, "5. Withdraw from {second}")?;
    writeln!(output, "6. Transfer from {second} to {first}")?;
    writeln!(output, "7. Exit")?;
    Ok(())
}

pub fn opening_balance_prompt(config: &SessionConfig, slot: AccountSlot) -> String {
    format!(
        "Enter the opening balance for {}: {}",
        config.account_name(slot),
        config.currency_symbol
    )
}

pub fn amount_prompt(config: &SessionConfig, kind: OperationKind, source: AccountSlot) -> String {
    let name = config.account_name(source);
    let symbol = &config.currency_symbol;
    match kind {
        OperationKind::Deposit => format!("Enter the amount to deposit into {name}: {symbol}"),
        OperationKind::Withdraw => format!("Enter the amount to withdraw from {name}: {symbol}"),
        OperationKind::Transfer => format!(
            "Enter the amount to transfer from {name} to {}: {symbol}",
            config.account_name(source.other())
        ),
    }
}

pub fn print_receipt<W: Write>(
    output: &mut W,
    config: &SessionConfig,
    receipt: &Receipt,
) -> Result<()> {
    match receipt {
        Receipt::Deposited {
            account,
            amount,
            balance,
        } => writeln!(
            output,
            "Deposit of {} made into {account}. New balance: {}",
            config.money(*amount),
            config.money(*balance)
        )?,
        Receipt::Withdrawn {
            account,
            amount,
            balance,
        } => writeln!(
            output,
            "Withdrawal of {} made from {account}. New balance: {}",
            config.money(*amount),
            config.money(*balance)
        )?,
        Receipt::Transferred {
            source,
            destination,
            amount,
            source_balance,
            destination_balance,
        } => writeln!(
            output,
            "Transfer of {} from {source} to {destination} completed. \
             New balance of {source}: {}. New balance of {destination}: {}",
            config.money(*amount),
            config.money(*source_balance),
            config.money(*destination_balance)
        )?,
    }
    Ok(())
}

pub fn print_rejection<W: Write>(output: &mut W, err: &ProcessError) -> Result<()> {
    let account = &err.account;
    let message = match (err.operation.kind, &err.source) {
        (OperationKind::Transfer, AccountError::BalanceOverflow { .. }) => {
            "The resulting balance would be too large. Transfer not performed.".to_owned()
        }
        (_, AccountError::BalanceOverflow { .. }) => {
            "The resulting balance would be too large. Operation not performed.".to_owned()
        }
        (OperationKind::Deposit, _) => "Invalid deposit amount. Operation not performed.".to_owned(),
        (OperationKind::Withdraw, AccountError::InsufficientBalance { .. }) => {
            format!("Insufficient balance in {account}. Operation not performed.")
        }
        (OperationKind::Withdraw, _) => {
            "Invalid withdrawal amount. Operation not performed.".to_owned()
        }
        (OperationKind::Transfer, AccountError::InsufficientBalance { .. }) => {
            format!("Insufficient balance in {account}. Transfer not performed.")
        }
        (OperationKind::Transfer, _) => {
            "Invalid transfer amount. Transfer not performed.".to_owned()
        }
    };
    writeln!(output, "{message}")?;
    Ok(())
}

pub fn print_final_balances<'a, W: Write>(
    output: &mut W,
    config: &SessionConfig,
    accounts: impl Iterator<Item = &'a Account>,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Final balances:")?;
    for acc in accounts {
        writeln!(output, "{}: {}", acc.name(), config.money(acc.balance()))?;
    }
    Ok(())
}
