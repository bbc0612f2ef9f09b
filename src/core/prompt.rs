/// Line-oriented prompts on top of a buffered reader
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{Result, bail};
use thiserror::Error;
use tracing::debug;

use crate::core::terminal::TerminalContext;

/// Rejected setup input. The message is shown to the user before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { value: i32, min: u8, max: u8 },
}

/// Parse one line as a 32-bit integer inside `range`. Anything wider is not a number.
pub fn parse_bounded(line: &str, range: &RangeInclusive<u8>) -> Result<u8, InputError> {
    let value: i32 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    match u8::try_from(value) {
        Ok(v) if range.contains(&v) => Ok(v),
        _ => Err(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        }),
    }
}

/// Read one line, without its terminator. End of input is an error: nothing
/// else can arrive to satisfy the prompt.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        bail!("input closed");
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Keep asking until the answer parses and falls inside `range`.
pub fn read_bounded<R: BufRead, W: Write>(
    input: &mut R,
    ctx: &mut TerminalContext<W>,
    prompt: &str,
    range: RangeInclusive<u8>,
) -> Result<u8> {
    loop {
        ctx.print(prompt)?;
        ctx.flush()?;
        let line = read_line(input)?;
        match parse_bounded(&line, &range) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(input = %line, error = %e, "rejected setup input");
                ctx.print_line(&e.to_string())?;
            }
        }
    }
}
