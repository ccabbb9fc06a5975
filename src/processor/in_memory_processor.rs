use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::Account,
    command::{AccountSlot, Operation, OperationKind},
};

use super::{OperationProcessor, ProcessError, Receipt};

#[derive(Debug)]
pub struct InMemoryProcessor {
    accounts: [Account; 2],
    journal: Vec<Operation>,
}

impl InMemoryProcessor {
    pub fn new(first: Account, second: Account) -> Self {
        Self {
            accounts: [first, second],
            journal: Vec::new(),
        }
    }

    /// Rebuilds a processor by running `journal` over the opening accounts.
    pub fn replay(
        first: Account,
        second: Account,
        journal: impl IntoIterator<Item = Operation>,
    ) -> Result<Self, ProcessError> {
        let mut processor = Self::new(first, second);
        for operation in journal {
            processor.process(operation)?;
        }
        Ok(processor)
    }

    pub fn account(&self, slot: AccountSlot) -> &Account {
        &self.accounts[slot.index()]
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Operations applied so far, in order. Rejected operations are not recorded.
    pub fn journal(&self) -> &[Operation] {
        &self.journal
    }

    /// Sum of both balances, `None` when it exceeds [`Decimal::MAX`].
    pub fn total_balance(&self) -> Option<Decimal> {
        self.accounts
            .iter()
            .try_fold(Decimal::ZERO, |total, acc| total.checked_add(acc.balance()))
    }
}

fn split_accounts(accounts: &mut [Account; 2], source: AccountSlot) -> (&mut Account, &mut Account) {
    let [first, second] = accounts;
    match source {
        AccountSlot::First => (first, second),
        AccountSlot::Second => (second, first),
    }
}

impl OperationProcessor for InMemoryProcessor {
    fn process(&mut self, operation: Operation) -> Result<Receipt, ProcessError> {
        let (source, destination) = split_accounts(&mut self.accounts, operation.source);
        let amount = operation.amount;
        let outcome = match operation.kind {
            OperationKind::Deposit => source.deposit(amount).map(|balance| Receipt::Deposited {
                account: source.name().to_owned(),
                amount,
                balance,
            }),
            OperationKind::Withdraw => source.withdraw(amount).map(|balance| Receipt::Withdrawn {
                account: source.name().to_owned(),
                amount,
                balance,
            }),
            OperationKind::Transfer => source.transfer(destination, amount).map(
                |(source_balance, destination_balance)| Receipt::Transferred {
                    source: source.name().to_owned(),
                    destination: destination.name().to_owned(),
                    amount,
                    source_balance,
                    destination_balance,
                },
            ),
        };

        match outcome {
            Ok(receipt) => {
                debug!(?operation, ?receipt, "operation applied");
                self.journal.push(operation);
                Ok(receipt)
            }
            Err(err) => {
                debug!(?operation, %err, "operation rejected");
                Err(ProcessError {
                    operation,
                    account: self.account(operation.source).name().to_owned(),
                    source: err,
                })
            }
        }
    }
}
