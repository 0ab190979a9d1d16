//! Raw catalog metadata to [`Table`] model
//!
//! Building is all-or-nothing: the first column whose type has no mapping
//! aborts the build, so no caller ever writes a struct with a guessed type.

use crate::catalog::{RawColumn, RawTable};
use crate::config::Options;
use crate::error::{Error, Result};

use super::filter::{select, Selection};
use super::types::{map_type, Dialect};
use super::{Field, Table};

/// Assemble the table model from raw catalog tables
///
/// Tables are filtered with [`select`], keeping catalog order; columns keep
/// their ordinal order. Empty defaults and comments become `None`.
pub fn build(options: &Options, raw_tables: Vec<RawTable>) -> Result<Vec<Table>> {
    let mut tables = Vec::with_capacity(raw_tables.len());

    for raw in raw_tables {
        let prefix = match select(&raw.name, &options.filters, &options.exclude) {
            Selection::Selected { prefix } => prefix,
            Selection::Skipped => {
                tracing::debug!(table = %raw.name, "Skipping table");
                continue;
            }
        };

        let fields = raw
            .columns
            .into_iter()
            .map(|column| build_field(options.dialect, &raw.name, column))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(table = %raw.name, prefix = %prefix, fields = fields.len(), "Selected table");

        tables.push(Table {
            name: raw.name,
            prefix,
            comment: non_empty(raw.comment),
            fields,
        });
    }

    Ok(tables)
}

fn build_field(dialect: Dialect, table: &str, column: RawColumn) -> Result<Field> {
    let go_type = map_type(dialect, &column.raw_type).map_err(|source| Error::TypeMapping {
        table: table.to_string(),
        column: column.name.clone(),
        source,
    })?;

    Ok(Field {
        name: column.name,
        raw_type: column.raw_type,
        go_type,
        nullable: column.nullable,
        default: column.default.and_then(non_empty),
        key: column.key,
        comment: non_empty(column.comment),
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
