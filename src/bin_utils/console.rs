use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::debug;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid numeric value.";

/// Parses a user supplied amount. Accepts plain and scientific notation,
/// surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Line oriented prompt/answer dialogue over any reader and writer.
pub struct Console<'w, R, W: 'w> {
    input: R,
    output: &'w mut W,
}

impl<'w, R, W> Console<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn new(input: R, output: &'w mut W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut *self.output
    }

    /// Prints `prompt` and reads one line. Returns `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("input exhausted");
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Keeps prompting until a number is entered. Returns `None` once input is exhausted.
    pub fn read_amount(&mut self, prompt: &str) -> Result<Option<Decimal>> {
        while let Some(line) = self.read_line(prompt)? {
            if let Some(amount) = parse_amount(&line) {
                return Ok(Some(amount));
            }
            debug!(input = line.trim(), "malformed amount");
            writeln!(self.output, "{INVALID_NUMBER_MESSAGE}")?;
        }
        Ok(None)
    }
}
