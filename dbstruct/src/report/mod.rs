//! HTML report of the generated structs
//!
//! One self-contained page listing every table with its columns and the Go
//! code generated for it. Template and stylesheet are compiled into the
//! binary; every value is HTML-escaped.

use chrono::NaiveDateTime;
use handlebars::Handlebars;
use serde::Serialize;

use crate::emit::{go_field_type, RenderedTable};
use crate::error::Result;

const REPORT_TEMPLATE_NAME: &str = "report";
const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");
const REPORT_STYLE: &str = include_str!("../../templates/report.css");

#[derive(Serialize)]
struct ReportContext<'a> {
    table_count: usize,
    date: String,
    style: &'static str,
    tables: Vec<TableContext<'a>>,
}

#[derive(Serialize)]
struct TableContext<'a> {
    name: &'a str,
    struct_name: &'a str,
    comment: Option<&'a str>,
    fields: Vec<FieldContext<'a>>,
    code: &'a str,
}

#[derive(Serialize)]
struct FieldContext<'a> {
    name: &'a str,
    raw_type: &'a str,
    go_type: String,
    nullable: bool,
    default: Option<&'a str>,
    key: &'a str,
    comment: Option<&'a str>,
}

/// Render the report page
pub fn render(rendered: &[RenderedTable<'_>], generated_at: NaiveDateTime) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;

    let context = ReportContext {
        table_count: rendered.len(),
        date: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        style: REPORT_STYLE,
        tables: rendered.iter().map(table_context).collect(),
    };

    Ok(handlebars.render(REPORT_TEMPLATE_NAME, &context)?)
}

fn table_context<'a>(rendered: &'a RenderedTable<'_>) -> TableContext<'a> {
    let table = rendered.table;
    TableContext {
        name: &table.name,
        struct_name: &rendered.struct_name,
        comment: table.comment.as_deref(),
        fields: table
            .fields
            .iter()
            .map(|field| FieldContext {
                name: &field.name,
                raw_type: &field.raw_type,
                go_type: go_field_type(field),
                nullable: field.nullable,
                default: field.default.as_deref(),
                key: &field.key,
                comment: field.comment.as_deref(),
            })
            .collect(),
        code: &rendered.source,
    }
}
