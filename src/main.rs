use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

mod app;
mod input;
mod numbers;
mod report;

#[cfg(test)]
mod tests;

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(stdin.lock(), stdout.lock())
}
