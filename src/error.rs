//! Error taxonomy for the scaffolding pipeline.
//!
//! Validation failures halt before any file is written. Filesystem failures
//! are surfaced per artifact; earlier writes are kept (generation is not
//! atomic and performs no rollback).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by configuration loading, entity validation, template
/// rendering, and artifact persistence.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Entity name is not a usable identifier.
    #[error("invalid entity name `{name}`: expected a non-empty alphanumeric token starting with a letter")]
    EntityName {
        /// The rejected name as supplied by the operator.
        name: String,
    },

    /// An attribute token did not split into a `name:type` pair.
    #[error("invalid attribute `{token}`: expected `name:type` with non-empty name and type")]
    Attribute {
        /// The offending token from the attribute list.
        token: String,
    },

    /// The same field name appeared twice in one attribute list.
    #[error("duplicate field `{name}` in attribute list")]
    DuplicateField {
        /// The repeated field name.
        name: String,
    },

    /// An attribute declared a type outside the supported set.
    #[error("unknown field type `{token}` (supported: string, text, integer, float, boolean, date, number)")]
    UnknownType {
        /// The unrecognized type token.
        token: String,
    },

    /// A template failed to compile at registration time.
    #[error("invalid template `{name}`")]
    TemplateParse {
        /// Registry name of the template.
        name: &'static str,
        /// Underlying handlebars error.
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A registered template failed to render.
    #[error("failed to render template `{name}`")]
    TemplateRender {
        /// Registry name of the template.
        name: String,
        /// Underlying handlebars error.
        #[source]
        source: handlebars::RenderError,
    },

    /// A destination directory could not be created.
    #[error("failed to create directory `{path}`")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write `{path}`")]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The project has no persisted configuration yet.
    #[error("no backforge.toml found in this directory; run `backforge init` first")]
    ConfigMissing,

    /// The persisted configuration exists but does not parse.
    #[error("backforge.toml is not valid")]
    ConfigInvalid {
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl ScaffoldError {
    /// Whether this error came from input validation (nothing was written).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EntityName { .. }
                | Self::Attribute { .. }
                | Self::DuplicateField { .. }
                | Self::UnknownType { .. }
        )
    }
}
