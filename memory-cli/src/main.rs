//! convo CLI: print transcript, chat format or rephrase prompt for a conversation snapshot.

use anyhow::Result;
use clap::Parser;
use memory::MemoryConfig;
use memory_cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file = std::env::var("LOG_FILE").ok();
    init_tracing(log_file.as_deref())?;

    let cli = Cli::parse();
    let config = MemoryConfig::load()?;
    tracing::debug!(command = ?cli.command, "Running command");

    let output = run(cli, config)?;
    println!("{}", output);
    Ok(())
}
