//! Database catalog access
//!
//! A [`Catalog`] returns raw per-dialect table metadata. The schema builder
//! turns it into the dialect-independent model; nothing in this module knows
//! about filters or Go types.

mod mysql;
mod postgres;
mod snapshot;

pub use mysql::MySqlCatalog;
pub use postgres::PostgresCatalog;
pub use snapshot::SnapshotCatalog;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Options;
use crate::error::Result;
use crate::schema::Dialect;

/// Raw table metadata as returned by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Table name
    pub name: String,
    /// Table comment, empty when absent
    #[serde(default)]
    pub comment: String,
    /// Columns in ordinal order
    pub columns: Vec<RawColumn>,
}

/// Raw column metadata as returned by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    /// Column name
    pub name: String,
    /// Dialect type string, e.g. `varchar(255)` or `character varying(64)`
    pub raw_type: String,
    /// Whether the column accepts NULL
    #[serde(default)]
    pub nullable: bool,
    /// Default expression
    #[serde(default)]
    pub default: Option<String>,
    /// Key role, `PRI` for primary key columns
    #[serde(default)]
    pub key: String,
    /// Column comment, empty when absent
    #[serde(default)]
    pub comment: String,
}

/// Source of raw table metadata
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Dialect of the returned type strings
    fn dialect(&self) -> Dialect;

    /// Fetch every table with its columns
    async fn fetch_tables(&self) -> Result<Vec<RawTable>>;
}

/// Connect to the database described by the options
pub async fn connect(options: &Options) -> Result<Box<dyn Catalog>> {
    match options.dialect {
        Dialect::MySql => Ok(Box::new(MySqlCatalog::connect(&options.dsn).await?)),
        Dialect::Postgres => Ok(Box::new(
            PostgresCatalog::connect(&options.dsn, options.schema_name()).await?,
        )),
    }
}
