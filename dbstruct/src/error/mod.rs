//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::UnsupportedType;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Generation error type
#[derive(Debug, Error)]
pub enum Error {
    /// Requested dialect is neither MySQL nor PostgreSQL
    #[error("unsupported database type: '{0}' (expected mysql or postgresql)")]
    UnsupportedDialect(String),

    /// A column type has no mapping rule
    #[error("table `{table}`, column `{column}`: {source}")]
    TypeMapping {
        /// Table holding the column
        table: String,
        /// Offending column
        column: String,
        /// Underlying mapping failure
        #[source]
        source: UnsupportedType,
    },

    /// Filter pattern is not a valid regular expression
    #[error("invalid table name pattern '{pattern}': {source}")]
    InvalidFilterPattern {
        /// Pattern as configured
        pattern: String,
        /// Regex compile error
        #[source]
        source: regex::Error,
    },

    /// Directory creation or file write failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog query or connection failure
    #[error("Database error: {0}")]
    Catalog(#[from] sqlx::Error),

    /// Schema snapshot could not be read or written
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl Error {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}
