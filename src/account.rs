use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::command::{AccountAction, AccountCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
    TransferredOut,
    TransferredIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> AccountEventKind {
        self.kind
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{action:?} amount must be greater than zero, got {amount}")]
    InvalidAmount {
        action: AccountAction,
        amount: Decimal,
    },
    #[error("Insufficient balance for {action:?}: requested {requested}, available {available}")]
    InsufficientBalance {
        action: AccountAction,
        requested: Decimal,
        available: Decimal,
    },
    #[error("Opening balance must not be negative, got {amount}")]
    NegativeOpeningBalance { amount: Decimal },
    #[error("{action:?} of {amount} would overflow the balance of {balance}")]
    BalanceOverflow {
        action: AccountAction,
        amount: Decimal,
        balance: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    balance: Decimal,
}

impl Account {
    pub fn open(name: impl Into<String>, opening_balance: Decimal) -> Result<Self, AccountError> {
        if opening_balance < Decimal::zero() {
            return Err(AccountError::NegativeOpeningBalance {
                amount: opening_balance,
            });
        }
        Ok(Self {
            name: name.into(),
            balance: opening_balance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Events produced by [`Account::handle_command`] always fit the balance.
    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited | AccountEventKind::TransferredIn => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn | AccountEventKind::TransferredOut => {
                self.balance -= event.amount;
            }
        }
    }

    pub fn handle_command(&self, command: AccountCommand) -> Result<AccountEvent, AccountError> {
        let AccountCommand { action, amount } = command;
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount { action, amount });
        }

        let kind = match action {
            AccountAction::Deposit | AccountAction::TransferIn
                if self.balance.checked_add(amount).is_none() =>
            {
                return Err(AccountError::BalanceOverflow {
                    action,
                    amount,
                    balance: self.balance,
                });
            }
            AccountAction::Deposit => AccountEventKind::Deposited,
            AccountAction::TransferIn => AccountEventKind::TransferredIn,
            AccountAction::Withdraw | AccountAction::TransferOut if amount > self.balance => {
                return Err(AccountError::InsufficientBalance {
                    action,
                    requested: amount,
                    available: self.balance,
                });
            }
            AccountAction::Withdraw => AccountEventKind::Withdrawn,
            AccountAction::TransferOut => AccountEventKind::TransferredOut,
        };
        Ok(AccountEvent { amount, kind })
    }

    /// Returns the balance after the deposit.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle_command(AccountCommand {
            action: AccountAction::Deposit,
            amount,
        })?;
        self.apply(&evt);
        Ok(self.balance)
    }

    /// Returns the balance after the withdrawal.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle_command(AccountCommand {
            action: AccountAction::Withdraw,
            amount,
        })?;
        self.apply(&evt);
        Ok(self.balance)
    }

    /// Moves `amount` into `destination` and returns both resulting balances,
    /// source first. Both sides are validated before either is applied, so a
    /// rejection leaves both accounts untouched.
    pub fn transfer(
        &mut self,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(Decimal, Decimal), AccountError> {
        let debit = self.handle_command(AccountCommand {
            action: AccountAction::TransferOut,
            amount,
        })?;
        let credit = destination.handle_command(AccountCommand {
            action: AccountAction::TransferIn,
            amount,
        })?;
        self.apply(&debit);
        destination.apply(&credit);
        Ok((self.balance, destination.balance))
    }
}
