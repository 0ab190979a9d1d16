//! Struct tag assembly
//!
//! Tags are produced by two ordered rule lists: [`TAG_RULES`] decides which
//! tag keys a field carries, [`GORM_FRAGMENTS`] decides what goes into the
//! `gorm` tag value. Evaluation order is the output order, so tags are stable
//! across runs.

use crate::config::Options;
use crate::schema::{camel_case, Field};

use super::go_quote;

/// One struct tag key
pub struct TagRule {
    /// Tag key, e.g. `gorm`
    pub key: &'static str,
    /// Whether the options ask for this tag
    pub enabled: fn(&Options) -> bool,
    /// Tag value for a field
    pub render: fn(&Field) -> String,
}

/// One `;`-separated piece of the `gorm` tag
pub struct Fragment {
    /// Whether the field carries this piece
    pub applies: fn(&Field) -> bool,
    /// Rendered piece
    pub render: fn(&Field) -> String,
}

/// Tag keys in output order
pub const TAG_RULES: [TagRule; 2] = [
    TagRule {
        key: "gorm",
        enabled: gorm_enabled,
        render: gorm_tag,
    },
    TagRule {
        key: "json",
        enabled: json_enabled,
        render: json_tag,
    },
];

/// `gorm` tag pieces in output order
pub const GORM_FRAGMENTS: [Fragment; 5] = [
    Fragment {
        applies: always,
        render: column_fragment,
    },
    Fragment {
        applies: always,
        render: type_fragment,
    },
    Fragment {
        applies: has_default,
        render: default_fragment,
    },
    Fragment {
        applies: not_nullable,
        render: not_null_fragment,
    },
    Fragment {
        applies: Field::is_primary_key,
        render: primary_key_fragment,
    },
];

/// Render the full struct tag literal for a field, if any tag is enabled
///
/// The literal is a raw string (`` `gorm:"..." json:"..."` ``) unless a
/// value contains a backtick, in which case it is an interpreted string.
#[must_use]
pub fn struct_tag(options: &Options, field: &Field) -> Option<String> {
    let parts: Vec<String> = TAG_RULES
        .iter()
        .filter(|rule| (rule.enabled)(options))
        .map(|rule| format!("{}:{}", rule.key, go_quote(&(rule.render)(field))))
        .collect();

    if parts.is_empty() {
        return None;
    }

    let tag = parts.join(" ");
    if tag.contains('`') {
        Some(go_quote(&tag))
    } else {
        Some(format!("`{tag}`"))
    }
}

/// `gorm` tag value, e.g. `column:id;type:int;not null;primary_key`
#[must_use]
pub fn gorm_tag(field: &Field) -> String {
    GORM_FRAGMENTS
        .iter()
        .filter(|fragment| (fragment.applies)(field))
        .map(|fragment| (fragment.render)(field))
        .collect::<Vec<_>>()
        .join(";")
}

/// `json` tag value: the camel-cased column name
#[must_use]
pub fn json_tag(field: &Field) -> String {
    camel_case(&field.name)
}

const fn gorm_enabled(options: &Options) -> bool {
    options.gen_gorm_tag
}

const fn json_enabled(options: &Options) -> bool {
    options.gen_json_tag
}

const fn always(_: &Field) -> bool {
    true
}

const fn has_default(field: &Field) -> bool {
    field.default.is_some()
}

const fn not_nullable(field: &Field) -> bool {
    !field.nullable
}

fn column_fragment(field: &Field) -> String {
    format!("column:{}", field.name)
}

fn type_fragment(field: &Field) -> String {
    format!("type:{}", field.raw_type)
}

fn default_fragment(field: &Field) -> String {
    format!("default:{}", field.default.as_deref().unwrap_or_default())
}

fn not_null_fragment(_: &Field) -> String {
    "not null".to_string()
}

fn primary_key_fragment(_: &Field) -> String {
    "primary_key".to_string()
}
