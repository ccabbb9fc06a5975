//! Console dialogue around [`crate::processor`]: opening balances, the option
//! menu and the final balance report.

use std::io::{BufRead, Write};

use crate::{
    account::Account,
    command::{AccountSlot, MenuChoice, Operation},
    processor::{OperationProcessor, in_memory_processor::InMemoryProcessor},
};
use anyhow::Result;
use config::SessionConfig;
use console::Console;
use printer::{
    INVALID_OPTION_MESSAGE, amount_prompt, opening_balance_prompt, print_final_balances,
    print_menu, print_receipt, print_rejection,
};
use tracing::{debug, info};
pub mod config;
pub mod console;
pub mod printer;

pub const MENU_PROMPT: &str = "Choose an option (1-7): ";

pub struct Session<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: SessionConfig,
}

impl<'w, R, W> Session<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs until the exit option is chosen or input is exhausted.
    pub fn run(self) -> Result<()> {
        let Self {
            input,
            output,
            config,
        } = self;
        let mut console = Console::new(input, output);
        info!("session started");

        let Some(first) = open_account(&mut console, &config, AccountSlot::First)? else {
            info!("input exhausted before accounts were opened");
            return Ok(());
        };
        let Some(second) = open_account(&mut console, &config, AccountSlot::Second)? else {
            info!("input exhausted before accounts were opened");
            return Ok(());
        };
        let mut processor = InMemoryProcessor::new(first, second);

        loop {
            print_menu(console.output(), &config)?;
            let Some(line) = console.read_line(MENU_PROMPT)? else {
                break;
            };
            let (kind, source) = match MenuChoice::parse(&line) {
                Ok(MenuChoice::Operation { kind, source }) => (kind, source),
                Ok(MenuChoice::Exit) => break,
                Err(err) => {
                    debug!(%err, "menu choice rejected");
                    writeln!(console.output(), "{INVALID_OPTION_MESSAGE}")?;
                    continue;
                }
            };

            let Some(amount) = console.read_amount(&amount_prompt(&config, kind, source))? else {
                break;
            };
            match processor.process(Operation {
                kind,
                source,
                amount,
            }) {
                Ok(receipt) => print_receipt(console.output(), &config, &receipt)?,
                Err(err) => print_rejection(console.output(), &err)?,
            }
        }

        print_final_balances(console.output(), &config, processor.accounts())?;
        info!(
            operations = processor.journal().len(),
            total = ?processor.total_balance(),
            "session finished"
        );
        Ok(())
    }
}

/// Prompts until a non-negative opening balance is entered.
fn open_account<R, W>(
    console: &mut Console<'_, R, W>,
    config: &SessionConfig,
    slot: AccountSlot,
) -> Result<Option<Account>>
where
    R: BufRead,
    W: Write,
{
    let prompt = opening_balance_prompt(config, slot);
    while let Some(amount) = console.read_amount(&prompt)? {
        match Account::open(config.account_name(slot), amount) {
            Ok(account) => return Ok(Some(account)),
            Err(err) => {
                debug!(%err, "opening balance rejected");
                writeln!(console.output(), "The opening balance cannot be negative.")?;
            }
        }
    }
    Ok(None)
}
