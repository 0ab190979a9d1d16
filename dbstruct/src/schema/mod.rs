//! Dialect-independent table model
//!
//! Raw catalog rows are turned into [`Table`] and [`Field`] values by
//! [`build`]. Once built the model is read-only: the emitter and the report
//! only borrow it.

pub mod builder;
pub mod filter;
pub mod naming;
pub mod types;

pub use builder::build;
pub use filter::{select, Filter, Selection};
pub use naming::{camel_case, one_line, title_case};
pub use types::{map_type, Dialect, GoType, UnsupportedType};

use serde::Serialize;

/// Key role the catalog reports for primary key columns
pub const PRIMARY_KEY: &str = "PRI";

/// One selected database table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Raw table name as stored in the database
    pub name: String,
    /// Prefix contributed by the matching filter, empty when none matched
    pub prefix: String,
    /// Table comment, if the catalog has one
    pub comment: Option<String>,
    /// Columns in catalog order
    pub fields: Vec<Field>,
}

impl Table {
    /// Table name with the filter prefix stripped
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(&self.name)
    }

    /// Name of the generated struct
    ///
    /// ```
    /// # use dbstruct::Table;
    /// let table = Table {
    ///     name: "t_order_item".to_string(),
    ///     prefix: "t_".to_string(),
    ///     comment: None,
    ///     fields: vec![],
    /// };
    /// assert_eq!(table.struct_name(), "OrderItem");
    /// ```
    #[must_use]
    pub fn struct_name(&self) -> String {
        title_case(self.base_name())
    }

    /// Whether any column renders as `time.Time`
    #[must_use]
    pub fn uses_time(&self) -> bool {
        self.fields.iter().any(|f| f.go_type == GoType::Time)
    }
}

/// One column of a [`Table`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Raw column name
    pub name: String,
    /// Column type as reported by the dialect, e.g. `int(11) unsigned`
    pub raw_type: String,
    /// Canonical Go type the column maps to
    pub go_type: GoType,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Default value literal
    pub default: Option<String>,
    /// Key role, `PRI` for primary key columns
    pub key: String,
    /// Column comment
    pub comment: Option<String>,
}

impl Field {
    /// Whether the column is part of the primary key
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.key == PRIMARY_KEY
    }
}
