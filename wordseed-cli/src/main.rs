//! wordseed - generate, check and stretch BIP-39 mnemonics from the terminal.

mod commands;
mod config;
pub mod qr;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "wordseed=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = config::load_vocabulary(cli.wordlist.as_deref())?;
    match cli.command {
        Commands::Generate(cmd) => cmd.execute(&vocabulary)?,
        Commands::Encode(cmd) => cmd.execute(&vocabulary)?,
        Commands::Decode(cmd) => cmd.execute(&vocabulary)?,
        Commands::Validate(cmd) => cmd.execute(&vocabulary)?,
        Commands::Expand(cmd) => cmd.execute(&vocabulary)?,
        Commands::Seed(cmd) => cmd.execute(&vocabulary)?,
    }
    Ok(())
}
