use anyhow::Result;
use clap::Parser;
use invidx::{run, Cli};
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdout carries query results only
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
