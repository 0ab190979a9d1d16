//! End-to-end generation run
//!
//! Fetch, build, render, lay out, then write. Every file is computed before
//! anything touches the filesystem, so a mapping failure leaves the model
//! directory untouched.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::catalog::{self, Catalog};
use crate::config::Options;
use crate::emit::{self, GeneratedFile};
use crate::error::{Error, Result};
use crate::{report, schema};

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of tables generated
    pub tables: usize,
    /// Go files written, with paths including the model directory
    pub files: Vec<GeneratedFile>,
    /// HTML report written, if requested
    pub report: Option<PathBuf>,
}

/// Connect to the configured database and run generation
pub async fn run(options: &Options) -> Result<Summary> {
    let catalog = catalog::connect(options).await?;
    run_with(options, catalog.as_ref(), Local::now().naive_local()).await
}

/// Run generation against an already opened catalog
///
/// `generated_at` is stamped into file headers and the report; identical
/// input and timestamp produce byte-identical output.
pub async fn run_with(
    options: &Options,
    catalog: &dyn Catalog,
    generated_at: NaiveDateTime,
) -> Result<Summary> {
    tracing::info!(dialect = %catalog.dialect(), "Reading table metadata");
    let raw_tables = catalog.fetch_tables().await?;

    let tables = schema::build(options, raw_tables)?;
    let rendered = emit::render_all(options, &tables);

    let report_html = match options.html_file {
        Some(_) => Some(report::render(&rendered, generated_at)?),
        None => None,
    };
    let files = match options.model_dir {
        Some(_) => emit::layout(options, &rendered, generated_at)?,
        None => Vec::new(),
    };

    let mut summary = Summary {
        tables: tables.len(),
        ..Summary::default()
    };

    if let (Some(path), Some(html)) = (&options.html_file, report_html) {
        tokio::fs::write(path, html)
            .await
            .map_err(|source| Error::io(path, source))?;
        tracing::info!(path = %path.display(), "Wrote HTML report");
        summary.report = Some(path.clone());
    }

    if let Some(dir) = &options.model_dir {
        summary.files = write_files(dir, files).await?;
    }

    tracing::info!(tables = summary.tables, files = summary.files.len(), "Generation finished");
    Ok(summary)
}

/// Write files below `dir`, creating it when absent
///
/// Existing files are overwritten. Returns the files with their full paths.
pub async fn write_files(dir: &Path, files: Vec<GeneratedFile>) -> Result<Vec<GeneratedFile>> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| Error::io(dir, source))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.path);
        tokio::fs::write(&path, &file.content)
            .await
            .map_err(|source| Error::io(&path, source))?;
        tracing::debug!(path = %path.display(), "Wrote file");
        written.push(GeneratedFile { path, ..file });
    }
    Ok(written)
}
