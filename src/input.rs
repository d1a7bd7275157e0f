use anyhow::{Context, Error, Result};
use std::io::BufRead;
use std::str::FromStr;
use tracing::debug;

/// Reads two whitespace-separated integers, which may span several lines.
/// Tokens after the second one are left unread on their line and ignored.
pub fn read_pair<T, R>(reader: &mut R) -> Result<(T, T)>
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
{
    let mut values = Vec::with_capacity(2);
    let mut line = String::new();

    while values.len() < 2 {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("[Input]: Failed to read from input")?;
        if read == 0 {
            return Err(Error::msg(format!(
                "[Input]: Expected two integers, got {}",
                values.len()
            )));
        }

        for token in line.split_whitespace().take(2 - values.len()) {
            let value = token
                .parse::<T>()
                .with_context(|| format!("[Input]: '{}' is not an integer", token))?;
            values.push(value);
        }
    }

    debug!("[Input]: read ({}, {})", values[0], values[1]);
    Ok((values[0], values[1]))
}
