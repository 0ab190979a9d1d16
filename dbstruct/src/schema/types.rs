//! Column type mapping
//!
//! Each dialect keeps its own raw-type vocabulary as a static lookup table.
//! All tables converge on the same [`GoType`] enumeration so the emitter never
//! needs to know which database a column came from.
//!
//! # MySQL
//!
//! | raw type                                   | Go type              |
//! |--------------------------------------------|----------------------|
//! | `tinyint`                                  | `int8` / `uint8`     |
//! | `smallint`                                 | `int16` / `uint16`   |
//! | `mediumint`, `int`, `integer`              | `int32` / `uint32`   |
//! | `bigint`                                   | `int64` / `uint64`   |
//! | `float`                                    | `float32`            |
//! | `double`, `real`, `decimal`, `numeric`     | `float64`            |
//! | `char`, `varchar`, `*text`, `enum`, `json` | `string`             |
//! | `binary`, `varbinary`, `*blob`             | `[]byte`             |
//! | `date`, `datetime`, `timestamp`            | `time.Time`          |
//!
//! # PostgreSQL
//!
//! | raw type                                   | Go type              |
//! |--------------------------------------------|----------------------|
//! | `smallint`, `smallserial`                  | `int16`              |
//! | `integer`, `serial`                        | `int32`              |
//! | `bigint`, `bigserial`                      | `int64`              |
//! | `real`                                     | `float32`            |
//! | `double precision`, `numeric`, `money`     | `float64`            |
//! | `boolean`                                  | `bool`               |
//! | `character varying`, `text`, `uuid`, ...   | `string`             |
//! | `bytea`                                    | `[]byte`             |
//! | `date`, `timestamp [with time zone]`       | `time.Time`          |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL and MariaDB
    #[serde(rename = "mysql")]
    MySql,
    /// PostgreSQL
    #[serde(rename = "postgresql", alias = "postgres")]
    Postgres,
}

impl Dialect {
    /// Configuration name of the dialect
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgresql",
        }
    }

    const fn rules(self) -> &'static phf::Map<&'static str, TypeRule> {
        match self {
            Self::MySql => &MYSQL_TYPES,
            Self::Postgres => &POSTGRES_TYPES,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::Postgres),
            other => Err(Error::UnsupportedDialect(other.to_string())),
        }
    }
}

/// Canonical Go type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoType {
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `string`
    String,
    /// `[]byte`
    Bytes,
    /// `time.Time`
    Time,
    /// `bool`
    Bool,
}

impl GoType {
    /// Go spelling of the type
    #[must_use]
    pub const fn as_go(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "[]byte",
            Self::Time => "time.Time",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_go())
    }
}

/// No mapping rule exists for a raw column type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {dialect} column type '{raw_type}'")]
pub struct UnsupportedType {
    /// Dialect whose table was consulted
    pub dialect: Dialect,
    /// Raw type as reported by the catalog
    pub raw_type: String,
}

/// Mapping rule for one raw type name
#[derive(Debug, Clone, Copy)]
struct TypeRule {
    signed: GoType,
    unsigned: Option<GoType>,
}

const fn same(go_type: GoType) -> TypeRule {
    TypeRule {
        signed: go_type,
        unsigned: None,
    }
}

const fn int(signed: GoType, unsigned: GoType) -> TypeRule {
    TypeRule {
        signed,
        unsigned: Some(unsigned),
    }
}

static MYSQL_TYPES: phf::Map<&'static str, TypeRule> = phf::phf_map! {
    "tinyint" => int(GoType::Int8, GoType::Uint8),
    "smallint" => int(GoType::Int16, GoType::Uint16),
    "mediumint" => int(GoType::Int32, GoType::Uint32),
    "int" => int(GoType::Int32, GoType::Uint32),
    "integer" => int(GoType::Int32, GoType::Uint32),
    "bigint" => int(GoType::Int64, GoType::Uint64),
    "bit" => same(GoType::Uint64),
    "bool" => same(GoType::Bool),
    "boolean" => same(GoType::Bool),
    "year" => same(GoType::Int16),
    "float" => same(GoType::Float32),
    "double" => same(GoType::Float64),
    "double precision" => same(GoType::Float64),
    "real" => same(GoType::Float64),
    "decimal" => same(GoType::Float64),
    "dec" => same(GoType::Float64),
    "numeric" => same(GoType::Float64),
    "fixed" => same(GoType::Float64),
    "char" => same(GoType::String),
    "varchar" => same(GoType::String),
    "tinytext" => same(GoType::String),
    "text" => same(GoType::String),
    "mediumtext" => same(GoType::String),
    "longtext" => same(GoType::String),
    "enum" => same(GoType::String),
    "set" => same(GoType::String),
    "json" => same(GoType::String),
    "time" => same(GoType::String),
    "binary" => same(GoType::Bytes),
    "varbinary" => same(GoType::Bytes),
    "tinyblob" => same(GoType::Bytes),
    "blob" => same(GoType::Bytes),
    "mediumblob" => same(GoType::Bytes),
    "longblob" => same(GoType::Bytes),
    "date" => same(GoType::Time),
    "datetime" => same(GoType::Time),
    "timestamp" => same(GoType::Time),
};

static POSTGRES_TYPES: phf::Map<&'static str, TypeRule> = phf::phf_map! {
    "smallint" => same(GoType::Int16),
    "int2" => same(GoType::Int16),
    "smallserial" => same(GoType::Int16),
    "serial2" => same(GoType::Int16),
    "integer" => same(GoType::Int32),
    "int" => same(GoType::Int32),
    "int4" => same(GoType::Int32),
    "serial" => same(GoType::Int32),
    "serial4" => same(GoType::Int32),
    "bigint" => same(GoType::Int64),
    "int8" => same(GoType::Int64),
    "bigserial" => same(GoType::Int64),
    "serial8" => same(GoType::Int64),
    "real" => same(GoType::Float32),
    "float4" => same(GoType::Float32),
    "double precision" => same(GoType::Float64),
    "float8" => same(GoType::Float64),
    "numeric" => same(GoType::Float64),
    "decimal" => same(GoType::Float64),
    "money" => same(GoType::Float64),
    "boolean" => same(GoType::Bool),
    "bool" => same(GoType::Bool),
    "character varying" => same(GoType::String),
    "varchar" => same(GoType::String),
    "character" => same(GoType::String),
    "char" => same(GoType::String),
    "bpchar" => same(GoType::String),
    "text" => same(GoType::String),
    "citext" => same(GoType::String),
    "uuid" => same(GoType::String),
    "json" => same(GoType::String),
    "jsonb" => same(GoType::String),
    "xml" => same(GoType::String),
    "inet" => same(GoType::String),
    "cidr" => same(GoType::String),
    "macaddr" => same(GoType::String),
    "interval" => same(GoType::String),
    "time" => same(GoType::String),
    "time without time zone" => same(GoType::String),
    "time with time zone" => same(GoType::String),
    "timetz" => same(GoType::String),
    "bytea" => same(GoType::Bytes),
    "date" => same(GoType::Time),
    "timestamp" => same(GoType::Time),
    "timestamp without time zone" => same(GoType::Time),
    "timestamp with time zone" => same(GoType::Time),
    "timestamptz" => same(GoType::Time),
};

/// Map a raw column type to its canonical Go type
///
/// The raw type is normalized before lookup: case is folded, parenthesized
/// parameters (`varchar(255)`, `decimal(10,2)`, `enum('a','b')`) are dropped
/// and the MySQL `unsigned`/`zerofill` attributes select the unsigned rule.
///
/// # Examples
///
/// ```
/// # use dbstruct::schema::{map_type, Dialect, GoType};
/// assert_eq!(map_type(Dialect::MySql, "int(10) unsigned").unwrap(), GoType::Uint32);
/// assert_eq!(map_type(Dialect::Postgres, "character varying(64)").unwrap(), GoType::String);
/// assert!(map_type(Dialect::MySql, "geometry").is_err());
/// ```
pub fn map_type(dialect: Dialect, raw_type: &str) -> Result<GoType, UnsupportedType> {
    let (name, unsigned) = normalize(dialect, raw_type);
    let rule = dialect.rules().get(name.as_str()).ok_or_else(|| UnsupportedType {
        dialect,
        raw_type: raw_type.to_string(),
    })?;

    match (unsigned, rule.unsigned) {
        (true, Some(go_type)) => Ok(go_type),
        _ => Ok(rule.signed),
    }
}

/// Fold a raw type into its lookup key and signedness hint
///
/// Sign and zero-fill modifiers are MySQL syntax and only dropped there.
fn normalize(dialect: Dialect, raw_type: &str) -> (String, bool) {
    let lowered = raw_type.to_ascii_lowercase();

    let mut stripped = String::with_capacity(lowered.len());
    let mut depth = 0usize;
    for c in lowered.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    let mut unsigned = false;
    let words: Vec<&str> = stripped
        .split_whitespace()
        .filter(|word| match *word {
            _ if dialect != Dialect::MySql => true,
            "unsigned" => {
                unsigned = true;
                false
            }
            "signed" | "zerofill" => false,
            _ => true,
        })
        .collect();

    (words.join(" "), unsigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
    }

    #[test]
    fn test_dialect_from_str_unsupported() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedDialect(name) if name == "oracle"));
    }

    #[test]
    fn test_mysql_integers() {
        let cases = [
            ("tinyint(4)", GoType::Int8),
            ("tinyint(3) unsigned", GoType::Uint8),
            ("smallint(6)", GoType::Int16),
            ("smallint(5) unsigned", GoType::Uint16),
            ("mediumint(9)", GoType::Int32),
            ("int(11)", GoType::Int32),
            ("int(10) unsigned zerofill", GoType::Uint32),
            ("integer", GoType::Int32),
            ("bigint(20)", GoType::Int64),
            ("bigint(20) unsigned", GoType::Uint64),
            ("BIGINT UNSIGNED", GoType::Uint64),
            ("bit(1)", GoType::Uint64),
            ("year(4)", GoType::Int16),
        ];
        for (raw, expected) in cases {
            assert_eq!(map_type(Dialect::MySql, raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_mysql_non_integers() {
        let cases = [
            ("float", GoType::Float32),
            ("float unsigned", GoType::Float32),
            ("double", GoType::Float64),
            ("decimal(10,2)", GoType::Float64),
            ("varchar(255)", GoType::String),
            ("char(36)", GoType::String),
            ("longtext", GoType::String),
            ("enum('draft','published')", GoType::String),
            ("set('a','b')", GoType::String),
            ("json", GoType::String),
            ("time", GoType::String),
            ("blob", GoType::Bytes),
            ("varbinary(16)", GoType::Bytes),
            ("date", GoType::Time),
            ("datetime(3)", GoType::Time),
            ("timestamp", GoType::Time),
            ("boolean", GoType::Bool),
        ];
        for (raw, expected) in cases {
            assert_eq!(map_type(Dialect::MySql, raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_postgres_types() {
        let cases = [
            ("smallint", GoType::Int16),
            ("integer", GoType::Int32),
            ("bigint", GoType::Int64),
            ("bigserial", GoType::Int64),
            ("real", GoType::Float32),
            ("double precision", GoType::Float64),
            ("numeric(12,4)", GoType::Float64),
            ("boolean", GoType::Bool),
            ("character varying(64)", GoType::String),
            ("character(2)", GoType::String),
            ("text", GoType::String),
            ("uuid", GoType::String),
            ("jsonb", GoType::String),
            ("bytea", GoType::Bytes),
            ("date", GoType::Time),
            ("timestamp without time zone", GoType::Time),
            ("timestamp(6) with time zone", GoType::Time),
            ("time without time zone", GoType::String),
        ];
        for (raw, expected) in cases {
            assert_eq!(map_type(Dialect::Postgres, raw).unwrap(), expected, "{raw}");
        }
    }

    fn assert_table(dialect: Dialect, expected: &[(&str, GoType)]) {
        assert_eq!(expected.len(), dialect.rules().len(), "{dialect} table size");
        for (raw, go_type) in expected {
            assert_eq!(map_type(dialect, raw).unwrap(), *go_type, "{dialect} {raw}");
        }
    }

    #[test]
    fn test_every_mysql_entry() {
        use GoType::{Bool, Bytes, Float32, Float64, Int16, Int32, Int64, Int8, String, Time, Uint64};
        assert_table(
            Dialect::MySql,
            &[
                ("tinyint", Int8),
                ("smallint", Int16),
                ("mediumint", Int32),
                ("int", Int32),
                ("integer", Int32),
                ("bigint", Int64),
                ("bit", Uint64),
                ("bool", Bool),
                ("boolean", Bool),
                ("year", Int16),
                ("float", Float32),
                ("double", Float64),
                ("double precision", Float64),
                ("real", Float64),
                ("decimal", Float64),
                ("dec", Float64),
                ("numeric", Float64),
                ("fixed", Float64),
                ("char", String),
                ("varchar", String),
                ("tinytext", String),
                ("text", String),
                ("mediumtext", String),
                ("longtext", String),
                ("enum", String),
                ("set", String),
                ("json", String),
                ("time", String),
                ("binary", Bytes),
                ("varbinary", Bytes),
                ("tinyblob", Bytes),
                ("blob", Bytes),
                ("mediumblob", Bytes),
                ("longblob", Bytes),
                ("date", Time),
                ("datetime", Time),
                ("timestamp", Time),
            ],
        );
    }

    #[test]
    fn test_every_postgres_entry() {
        use GoType::{Bool, Bytes, Float32, Float64, Int16, Int32, Int64, String, Time};
        assert_table(
            Dialect::Postgres,
            &[
                ("smallint", Int16),
                ("int2", Int16),
                ("smallserial", Int16),
                ("serial2", Int16),
                ("integer", Int32),
                ("int", Int32),
                ("int4", Int32),
                ("serial", Int32),
                ("serial4", Int32),
                ("bigint", Int64),
                ("int8", Int64),
                ("bigserial", Int64),
                ("serial8", Int64),
                ("real", Float32),
                ("float4", Float32),
                ("double precision", Float64),
                ("float8", Float64),
                ("numeric", Float64),
                ("decimal", Float64),
                ("money", Float64),
                ("boolean", Bool),
                ("bool", Bool),
                ("character varying", String),
                ("varchar", String),
                ("character", String),
                ("char", String),
                ("bpchar", String),
                ("text", String),
                ("citext", String),
                ("uuid", String),
                ("json", String),
                ("jsonb", String),
                ("xml", String),
                ("inet", String),
                ("cidr", String),
                ("macaddr", String),
                ("interval", String),
                ("time", String),
                ("time without time zone", String),
                ("time with time zone", String),
                ("timetz", String),
                ("bytea", Bytes),
                ("date", Time),
                ("timestamp", Time),
                ("timestamp without time zone", Time),
                ("timestamp with time zone", Time),
                ("timestamptz", Time),
            ],
        );
    }

    #[test]
    fn test_unsupported_type() {
        let err = map_type(Dialect::MySql, "geometry").unwrap_err();
        assert_eq!(err.dialect, Dialect::MySql);
        assert_eq!(err.raw_type, "geometry");

        assert!(map_type(Dialect::Postgres, "tinyint").is_err());
        assert!(map_type(Dialect::Postgres, "integer[]").is_err());
        assert!(map_type(Dialect::MySql, "").is_err());
    }

    #[test]
    fn test_sign_modifiers_are_mysql_only() {
        let err = map_type(Dialect::Postgres, "integer unsigned").unwrap_err();
        assert_eq!(err.dialect, Dialect::Postgres);
        assert_eq!(err.raw_type, "integer unsigned");
        assert!(map_type(Dialect::Postgres, "bigint zerofill").is_err());
        assert!(map_type(Dialect::Postgres, "signed integer").is_err());

        assert_eq!(map_type(Dialect::MySql, "int(10) unsigned zerofill").unwrap(), GoType::Uint32);
        assert_eq!(map_type(Dialect::MySql, "bigint signed").unwrap(), GoType::Int64);
    }

    #[test]
    fn test_go_spelling() {
        assert_eq!(GoType::Bytes.to_string(), "[]byte");
        assert_eq!(GoType::Time.to_string(), "time.Time");
        assert_eq!(GoType::Uint64.to_string(), "uint64");
    }
}
