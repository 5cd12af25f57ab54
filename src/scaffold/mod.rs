//! Entity scaffolding: spec parsing and artifact generation.

pub mod entity;
pub mod generator;

pub use entity::{EntitySpec, FieldDefinition, FieldType};
pub use generator::{ArtifactKind, GeneratedArtifact, ScaffoldGenerator};
