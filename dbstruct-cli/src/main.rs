//! dbstruct CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{DumpCommand, GenerateCommand};

#[derive(Parser)]
#[command(name = "dbstruct")]
#[command(version)]
#[command(about = "Generate Go structs from MySQL and PostgreSQL schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go structs (and optionally an HTML report)
    Generate(GenerateCommand),
    /// Save the raw schema as a JSON snapshot
    Dump(DumpCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => cmd.execute().await?,
        Commands::Dump(cmd) => cmd.execute().await?,
    }

    Ok(())
}
