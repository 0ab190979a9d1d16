//! dbstruct: generate Go struct declarations from a live database schema
//!
//! The crate reads table and column metadata from a MySQL or PostgreSQL
//! catalog, normalizes it into a dialect-independent [`Table`] model and
//! renders one Go struct per table, optionally with `gorm` and `json` struct
//! tags and a `TableName()` accessor. An HTML report of the same model can be
//! written alongside the Go sources.
//!
//! # Pipeline
//!
//! 1. [`catalog::Catalog::fetch_tables`] returns raw per-dialect metadata
//! 2. [`schema::build`] filters tables and maps column types
//! 3. [`emit::render_all`] renders every table to Go source
//! 4. [`emit::layout`] assembles the rendered tables into files
//! 5. [`report::render`] optionally renders the HTML report
//!
//! [`generate::run`] drives all of the above from an [`Options`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dbstruct::config::Config;
//!
//! # async fn example() -> dbstruct::Result<()> {
//! let options = Config::load(None)?.into_options()?;
//! let summary = dbstruct::generate::run(&options).await?;
//! println!("generated {} tables", summary.tables);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod observability;
pub mod report;
pub mod schema;

pub use config::Options;
pub use error::{Error, Result};
pub use schema::{Dialect, Field, Filter, GoType, Table};
