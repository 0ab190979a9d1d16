//! CLI command implementations

pub mod dump;
pub mod generate;

pub use dump::DumpCommand;
pub use generate::GenerateCommand;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Steady spinner shown while the catalog is queried
fn start_spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}
