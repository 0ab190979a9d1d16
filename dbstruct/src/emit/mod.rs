//! Go struct emitter
//!
//! Renders one [`Table`] into a Go declaration:
//!
//! ```go
//! // Order table: t_order
//! // customer orders
//! type Order struct {
//! 	Id     uint64  `gorm:"column:id;type:bigint(20) unsigned;not null;primary_key" json:"id"`
//! 	Status int8    `gorm:"column:status;type:tinyint(4);default:0;not null" json:"status"` // order status
//! 	Note   *string `gorm:"column:note;type:varchar(255)" json:"note"`
//! }
//!
//! // TableName set table of t_order, ref document see https://gorm.io/docs/conventions.html
//! func (Order) TableName() string {
//! 	return "t_order"
//! }
//! ```
//!
//! The emitter only produces text per table; [`layout()`] decides how the
//! declarations are grouped into files.

pub mod align;
pub mod layout;
pub mod tags;

pub use layout::{layout, GeneratedFile};

use std::fmt::Write as _;

use crate::config::Options;
use crate::schema::{one_line, title_case, Field, Table};

/// gorm v2 naming conventions document
pub const GORM_CONVENTIONS_URL: &str = "https://gorm.io/docs/conventions.html";

/// gorm v1 naming conventions document
pub const GORM_V1_CONVENTIONS_URL: &str = "https://v1.gorm.io/docs/conventions.html";

/// A table together with its generated declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable<'a> {
    /// Source table
    pub table: &'a Table,
    /// Name of the generated struct
    pub struct_name: String,
    /// Go source of the declaration, without a trailing newline
    pub source: String,
}

/// Render every table, keeping order
#[must_use]
pub fn render_all<'a>(options: &Options, tables: &'a [Table]) -> Vec<RenderedTable<'a>> {
    tracing::info!(tables = tables.len(), "Generating Go struct code");
    tables.iter().map(|table| render(options, table)).collect()
}

/// Render one table to a Go declaration
#[must_use]
pub fn render<'a>(options: &Options, table: &'a Table) -> RenderedTable<'a> {
    let struct_name = table.struct_name();
    let mut out = String::new();

    let _ = writeln!(out, "// {struct_name} table: {}", table.name);
    if let Some(comment) = table.comment.as_deref().map(one_line).filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "// {comment}");
    }

    let _ = writeln!(out, "type {struct_name} struct {{");
    let rows: Vec<Vec<String>> = table
        .fields
        .iter()
        .map(|field| field_cells(options, field))
        .collect();
    for line in align::align(&rows) {
        let _ = writeln!(out, "\t{line}");
    }
    out.push('}');

    if !table.prefix.is_empty() {
        let url = if options.gorm_v1 {
            GORM_V1_CONVENTIONS_URL
        } else {
            GORM_CONVENTIONS_URL
        };
        let _ = write!(
            out,
            "\n\n// TableName set table of {name}, ref document see {url}\n\
             func ({struct_name}) TableName() string {{\n\
             \treturn {literal}\n\
             }}",
            name = table.name,
            literal = go_quote(&table.name),
        );
    }

    tracing::debug!(table = %table.name, struct_name = %struct_name, "Rendered table");

    RenderedTable {
        table,
        struct_name,
        source: out,
    }
}

/// Cells of one struct field line: name, type, optional tag, optional comment
fn field_cells(options: &Options, field: &Field) -> Vec<String> {
    let mut cells = vec![title_case(&field.name), go_field_type(field)];
    if let Some(tag) = tags::struct_tag(options, field) {
        cells.push(tag);
    }
    if let Some(comment) = field.comment.as_deref().map(one_line).filter(|c| !c.is_empty()) {
        cells.push(format!("// {comment}"));
    }
    cells
}

/// Go type of a field, a pointer when the column is nullable
#[must_use]
pub fn go_field_type(field: &Field) -> String {
    if field.nullable {
        format!("*{}", field.go_type.as_go())
    } else {
        field.go_type.as_go().to_string()
    }
}

/// Quote a string as a Go interpreted string literal
///
/// ```
/// # use dbstruct::emit::go_quote;
/// assert_eq!(go_quote(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(go_quote("a\nb"), r#""a\nb""#);
/// ```
#[must_use]
pub fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
