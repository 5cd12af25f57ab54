//! backforge CLI library
//!
//! Scaffolds backend source artifacts (models, controllers, routes) for a
//! project backed by either a relational database (ORM path) or a document
//! database (ODM path). The database choice is made once at `init` time and
//! persisted in `backforge.toml`; every later `scaffold` invocation reads it
//! back and selects the matching template family.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod scaffold;
pub mod templates;

pub use config::ProjectConfig;
pub use error::ScaffoldError;
pub use scaffold::{ArtifactKind, EntitySpec, FieldDefinition, FieldType, GeneratedArtifact, ScaffoldGenerator};

/// Database engine a project was initialized against.
///
/// Persisted in `backforge.toml` as an explicit structured field. The
/// document/relational split is derived from it; scaffolding never probes
/// raw configuration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseChoice {
    /// `MySQL` via an ORM (default)
    #[default]
    Mysql,
    /// `PostgreSQL` via an ORM
    Postgres,
    /// `SQLite` via an ORM
    Sqlite,
    /// `MongoDB` via an ODM
    Mongodb,
}

impl DatabaseChoice {
    /// The template-family branch this engine scaffolds for.
    #[must_use]
    pub const fn kind(self) -> DatabaseKind {
        match self {
            Self::Mysql | Self::Postgres | Self::Sqlite => DatabaseKind::Relational,
            Self::Mongodb => DatabaseKind::Document,
        }
    }

    /// Lowercase engine name, as stored in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Mongodb => "mongodb",
        }
    }
}

/// Which of the two code-generation branches applies to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// ORM-backed SQL database; model files come from the migration step.
    Relational,
    /// Schema-on-write document database; a model file is generated.
    Document,
}
