//! Grouping rendered declarations into Go source files

use std::path::PathBuf;

use chrono::NaiveDateTime;
use handlebars::Handlebars;
use serde_json::json;

use crate::config::Options;
use crate::error::Result;

use super::RenderedTable;

/// File written in single-file mode
pub const SINGLE_FILE_NAME: &str = "model.go";

const GO_FILE_TEMPLATE_NAME: &str = "go_file";

const GO_FILE_TEMPLATE: &str = "// {{header}}\n\npackage {{package}}\n{{imports}}{{body}}";

const TIME_IMPORT: &str = "\nimport \"time\"\n";

/// A generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the model directory
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Header comment line, without the leading `//`
#[must_use]
pub fn header_comment(generated_at: NaiveDateTime) -> String {
    format!(
        "code generated by dbstruct @{}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Lay rendered tables out into files
///
/// Single-file mode yields one `model.go`, even without tables; otherwise
/// every table gets `<base_name>.go`, or `<table_name>.go` when the prefix
/// is the whole name. Nothing is written here.
pub fn layout(
    options: &Options,
    rendered: &[RenderedTable<'_>],
    generated_at: NaiveDateTime,
) -> Result<Vec<GeneratedFile>> {
    let template = GoFileTemplate::new(&options.package_name, header_comment(generated_at))?;

    if options.single_file {
        let content = template.render(rendered)?;
        return Ok(vec![GeneratedFile {
            path: PathBuf::from(SINGLE_FILE_NAME),
            content,
            description: format!("{} structs", rendered.len()),
        }]);
    }

    rendered
        .iter()
        .map(|table| {
            let stem = match table.table.base_name() {
                "" => table.table.name.as_str(),
                base => base,
            };
            Ok(GeneratedFile {
                path: PathBuf::from(format!("{stem}.go")),
                content: template.render(std::slice::from_ref(table))?,
                description: format!("struct {}", table.struct_name),
            })
        })
        .collect()
}

struct GoFileTemplate {
    handlebars: Handlebars<'static>,
    package: String,
    header: String,
}

impl GoFileTemplate {
    fn new(package: &str, header: String) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(GO_FILE_TEMPLATE_NAME, GO_FILE_TEMPLATE)?;

        Ok(Self {
            handlebars,
            package: package.to_string(),
            header,
        })
    }

    fn render(&self, tables: &[RenderedTable<'_>]) -> Result<String> {
        let uses_time = tables.iter().any(|t| t.table.uses_time());
        let body = if tables.is_empty() {
            String::new()
        } else {
            let declarations = tables
                .iter()
                .map(|t| t.source.as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("\n{declarations}\n")
        };

        let context = json!({
            "header": self.header,
            "package": self.package,
            "imports": if uses_time { TIME_IMPORT } else { "" },
            "body": body,
        });

        Ok(self.handlebars.render(GO_FILE_TEMPLATE_NAME, &context)?)
    }
}
