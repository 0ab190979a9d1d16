use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{Catalog, RawColumn, RawTable};
use crate::error::Result;
use crate::schema::{Dialect, PRIMARY_KEY};

const TABLES_QUERY: &str = "\
SELECT c.relname::text, COALESCE(obj_description(c.oid, 'pg_class'), '')::text \
FROM pg_catalog.pg_class c \
JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
WHERE c.relkind IN ('r', 'p') AND n.nspname = $1 \
ORDER BY c.relname";

const COLUMNS_QUERY: &str = "\
SELECT a.attname::text, \
format_type(a.atttypid, a.atttypmod)::text, \
NOT a.attnotnull, \
pg_get_expr(d.adbin, d.adrelid)::text, \
EXISTS (SELECT 1 FROM pg_catalog.pg_index i \
WHERE i.indrelid = a.attrelid AND i.indisprimary AND a.attnum = ANY(i.indkey)), \
COALESCE(col_description(a.attrelid, a.attnum), '')::text \
FROM pg_catalog.pg_attribute a \
JOIN pg_catalog.pg_class c ON c.oid = a.attrelid \
JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
LEFT JOIN pg_catalog.pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum \
WHERE n.nspname = $1 AND c.relname = $2 AND a.attnum > 0 AND NOT a.attisdropped \
ORDER BY a.attnum";

type ColumnRow = (String, String, bool, Option<String>, bool, String);

/// Catalog reader for one PostgreSQL schema
pub struct PostgresCatalog {
    pool: PgPool,
    schema: String,
}

impl PostgresCatalog {
    /// Open a single-connection pool and target `schema`
    pub async fn connect(dsn: &str, schema: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(dsn)
            .await?;
        Ok(Self {
            pool,
            schema: schema.to_string(),
        })
    }
}

#[async_trait]
impl Catalog for PostgresCatalog {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn fetch_tables(&self) -> Result<Vec<RawTable>> {
        let tables: Vec<(String, String)> = sqlx::query_as(TABLES_QUERY)
            .bind(&self.schema)
            .fetch_all(&self.pool)
            .await?;

        let mut raw_tables = Vec::with_capacity(tables.len());
        for (name, comment) in tables {
            let rows: Vec<ColumnRow> = sqlx::query_as(COLUMNS_QUERY)
                .bind(&self.schema)
                .bind(&name)
                .fetch_all(&self.pool)
                .await?;

            tracing::debug!(
                schema = %self.schema,
                table = %name,
                columns = rows.len(),
                "Read PostgreSQL table"
            );

            let columns = rows
                .into_iter()
                .map(|(name, raw_type, nullable, default, primary, comment)| RawColumn {
                    name,
                    raw_type,
                    nullable,
                    default,
                    key: if primary {
                        PRIMARY_KEY.to_string()
                    } else {
                        String::new()
                    },
                    comment,
                })
                .collect();

            raw_tables.push(RawTable {
                name,
                comment,
                columns,
            });
        }

        Ok(raw_tables)
    }
}
