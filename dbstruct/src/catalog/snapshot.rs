use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{Catalog, RawTable};
use crate::error::{Error, Result};
use crate::schema::Dialect;

/// Catalog backed by a JSON dump of raw tables
///
/// The file holds the `Vec<RawTable>` a live catalog returned, as written by
/// [`write_snapshot`](SnapshotCatalog::write_snapshot). Type strings are
/// interpreted with the configured dialect.
#[derive(Debug, Clone)]
pub struct SnapshotCatalog {
    path: PathBuf,
    dialect: Dialect,
}

impl SnapshotCatalog {
    /// Read tables from `path`, mapping types with `dialect`
    pub fn new(path: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            path: path.into(),
            dialect,
        }
    }

    /// Serialize raw tables to `path` as pretty-printed JSON
    pub async fn write_snapshot(path: &Path, tables: &[RawTable]) -> Result<()> {
        let json = serde_json::to_string_pretty(tables)?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| Error::io(path, source))
    }
}

#[async_trait]
impl Catalog for SnapshotCatalog {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn fetch_tables(&self) -> Result<Vec<RawTable>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| Error::io(&self.path, source))?;
        let tables: Vec<RawTable> = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), tables = tables.len(), "Loaded schema snapshot");
        Ok(tables)
    }
}
