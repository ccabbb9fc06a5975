use rust_decimal::Decimal;
use thiserror::Error;

use crate::{account::AccountError, command::Operation};

pub mod in_memory_processor;

#[derive(Debug, Error)]
#[error("{:?} from {account} rejected: {source}", .operation.kind)]
pub struct ProcessError {
    pub operation: Operation,
    pub account: String,
    #[source]
    pub source: AccountError,
}

/// Outcome of an applied operation, with the balances it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Deposited {
        account: String,
        amount: Decimal,
        balance: Decimal,
    },
    Withdrawn {
        account: String,
        amount: Decimal,
        balance: Decimal,
    },
    Transferred {
        source: String,
        destination: String,
        amount: Decimal,
        source_balance: Decimal,
        destination_balance: Decimal,
    },
}

pub trait OperationProcessor {
    fn process(&mut self, operation: Operation) -> Result<Receipt, ProcessError>;
}
