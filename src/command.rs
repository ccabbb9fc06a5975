use rust_decimal::Decimal;
use thiserror::Error;

/// Which of the two session accounts an operation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountSlot {
    First,
    Second,
}

impl AccountSlot {
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdraw,
    Transfer,
}

/// A single balance-changing request as the user issued it.
/// For transfers the destination is always the other slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub source: AccountSlot,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation {
        kind: OperationKind,
        source: AccountSlot,
    },
    Exit,
}

/// What an account is asked to validate before an event is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountCommand {
    pub action: AccountAction,
    pub amount: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown menu option `{option}`, expected a number from 1 to 7")]
    UnknownOption { option: String },
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let choice = match raw.trim() {
            "1" => Self::operation(OperationKind::Deposit, AccountSlot::First),
            "2" => Self::operation(OperationKind::Withdraw, AccountSlot::First),
            "3" => Self::operation(OperationKind::Transfer, AccountSlot::First),
            "4" => Self::operation(OperationKind::Deposit, AccountSlot::Second),
            "5" => Self::operation(OperationKind::Withdraw, AccountSlot::Second),
            "6" => Self::operation(OperationKind::Transfer, AccountSlot::Second),
            "7" => Self::Exit,
            other => {
                return Err(CommandError::UnknownOption {
                    option: other.to_owned(),
                });
            }
        };
        Ok(choice)
    }

    fn operation(kind: OperationKind, source: AccountSlot) -> Self {
        Self::Operation { kind, source }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", OperationKind::Deposit, AccountSlot::First)]
    #[case("2", OperationKind::Withdraw, AccountSlot::First)]
    #[case("3", OperationKind::Transfer, AccountSlot::First)]
    #[case("4", OperationKind::Deposit, AccountSlot::Second)]
    #[case("5", OperationKind::Withdraw, AccountSlot::Second)]
    #[case(" 6\n", OperationKind::Transfer, AccountSlot::Second)]
    fn parse_operation_choices(
        #[case] raw: &str,
        #[case] kind: OperationKind,
        #[case] source: AccountSlot,
    ) {
        assert_eq!(
            MenuChoice::parse(raw).unwrap(),
            MenuChoice::Operation { kind, source }
        );
    }

    #[test]
    fn parse_exit_choice() {
        assert_eq!(MenuChoice::parse("7\r\n").unwrap(), MenuChoice::Exit);
    }

    #[rstest]
    #[case("0")]
    #[case("8")]
    #[case("")]
    #[case("one")]
    #[case("1.0")]
    fn reject_unknown_choices(#[case] raw: &str) {
        let err = MenuChoice::parse(raw).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownOption {
                option: raw.trim().to_owned()
            }
        );
    }

    #[test]
    fn slots_point_at_each_other() {
        assert_eq!(AccountSlot::First.other(), AccountSlot::Second);
        assert_eq!(AccountSlot::Second.other(), AccountSlot::First);
        assert_eq!(AccountSlot::First.index(), 0);
        assert_eq!(AccountSlot::Second.index(), 1);
    }
}
