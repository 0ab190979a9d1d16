//! Go struct generation command

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use console::style;
use dbstruct::catalog::{self, SnapshotCatalog};
use dbstruct::generate::{self, Summary};
use dbstruct::Options;
use dbstruct_cli_lib::{ConnectionArgs, OutputArgs};

use super::start_spinner;

/// Generate Go structs from the database schema
#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Read tables from a JSON snapshot written by `dbstruct dump`
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        let mut overrides = self.connection.overrides();
        self.output.apply(&mut overrides);
        let config = self.connection.load(&overrides)?;

        let _guard = dbstruct::observability::scoped(config.verbose);
        let options = config.into_options().context("Invalid configuration")?;

        if options.model_dir.is_none() && options.html_file.is_none() {
            println!(
                "{} nothing will be written, pass {} or {}",
                style("warning:").yellow().bold(),
                style("--model-dir").cyan(),
                style("--html").cyan()
            );
        }

        let summary = self.run(&options).await?;
        print_summary(&options, &summary);
        Ok(())
    }

    async fn run(&self, options: &Options) -> Result<Summary> {
        let generated_at = Local::now().naive_local();

        if let Some(path) = &self.snapshot {
            tracing::debug!(path = %path.display(), "Using schema snapshot");
            let catalog = SnapshotCatalog::new(path, options.dialect);
            return generate::run_with(options, &catalog, generated_at)
                .await
                .with_context(|| format!("Failed to generate from snapshot {}", path.display()));
        }

        let spinner = start_spinner("Connecting to database...")?;
        let catalog = catalog::connect(options).await;
        spinner.finish_and_clear();
        let catalog = catalog.context("Failed to connect to database")?;

        let spinner = start_spinner("Reading table metadata...")?;
        let summary = generate::run_with(options, catalog.as_ref(), generated_at).await;
        spinner.finish_and_clear();
        summary.context("Failed to generate structs")
    }
}

fn print_summary(options: &Options, summary: &Summary) {
    println!(
        "{} {} {} for package {}",
        style("✓").green().bold(),
        style("Generated").green().bold(),
        style(format!("{} tables", summary.tables)).bold(),
        style(&options.package_name).cyan()
    );

    for file in &summary.files {
        println!(
            "  {} {} {}",
            style("+").green(),
            style(file.path.display()).cyan(),
            style(format!("({})", file.description)).dim()
        );
    }

    if let Some(report) = &summary.report {
        println!(
            "  {} {} {}",
            style("+").green(),
            style(report.display()).cyan(),
            style("(HTML report)").dim()
        );
    }
}
