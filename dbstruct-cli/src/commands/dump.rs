//! Schema snapshot command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dbstruct::catalog::{self, SnapshotCatalog};
use dbstruct_cli_lib::ConnectionArgs;

use super::start_spinner;

/// Write the raw table metadata to a JSON snapshot
#[derive(Debug, Args)]
pub struct DumpCommand {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Snapshot file to write
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

impl DumpCommand {
    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        let config = self.connection.load(&self.connection.overrides())?;

        let _guard = dbstruct::observability::scoped(config.verbose);
        let options = config.into_options().context("Invalid configuration")?;

        let spinner = start_spinner("Reading table metadata...")?;
        let tables = match catalog::connect(&options).await {
            Ok(catalog) => catalog.fetch_tables().await,
            Err(err) => Err(err),
        };
        spinner.finish_and_clear();
        let tables = tables.context("Failed to read table metadata")?;

        SnapshotCatalog::write_snapshot(&self.output, &tables)
            .await
            .with_context(|| format!("Failed to write snapshot {}", self.output.display()))?;

        println!(
            "{} {} {} to {}",
            style("✓").green().bold(),
            style("Dumped").green().bold(),
            style(format!("{} tables", tables.len())).bold(),
            style(self.output.display()).cyan()
        );
        Ok(())
    }
}
