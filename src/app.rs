use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::input;
use crate::report::{Report, PROMPT};

/// Prompts, reads two integers and writes the report.
/// Two zeros end the run right after the prompt.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    write!(writer, "{}", PROMPT)?;
    writer.flush().context("[App]: Failed to flush prompt")?;

    let (num1, num2): (i32, i32) = input::read_pair(&mut reader)?;

    if num1 == 0 && num2 == 0 {
        debug!("[App]: both inputs are zero, nothing to report");
        return Ok(());
    }

    let report = Report::new(num1, num2)?;
    write!(writer, "{}", report)?;
    writer.flush()?;
    Ok(())
}
