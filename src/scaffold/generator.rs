//! Entity scaffold generator.
//!
//! Turns a validated [`EntitySpec`] plus the project's database kind into a
//! deterministic set of generated source artifacts. Rendering is pure;
//! persistence is a separate step so the two can be tested independently.
//! Writes are not transactional: a failure stops the run and earlier
//! artifacts stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use super::entity::EntitySpec;
use crate::error::ScaffoldError;
use crate::templates::TemplateSet;
use crate::DatabaseKind;

/// What a generated artifact is, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Document-path schema module
    Model,
    /// Request handlers
    Controller,
    /// Router wiring
    Route,
}

impl ArtifactKind {
    /// Human-readable label for status output.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Route => "routes",
        }
    }
}

/// One rendered file, not yet persisted.
#[derive(Debug)]
pub struct GeneratedArtifact {
    /// Artifact kind, for reporting.
    pub kind: ArtifactKind,
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Full rendered file content.
    pub content: String,
}

impl GeneratedArtifact {
    /// Persist this artifact under `root`, creating the destination
    /// directory if absent and unconditionally overwriting any existing
    /// file at the same path.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::CreateDir`] or [`ScaffoldError::WriteFile`]
    /// on filesystem failure. Artifacts written before a failing one are
    /// left in place.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf, ScaffoldError> {
        let full_path = root.join(&self.path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&full_path, &self.content).map_err(|source| ScaffoldError::WriteFile {
            path: full_path.clone(),
            source,
        })?;

        Ok(full_path)
    }
}

/// Scaffold generator for one entity.
#[derive(Debug)]
pub struct ScaffoldGenerator {
    spec: EntitySpec,
    templates: TemplateSet,
}

impl ScaffoldGenerator {
    /// Parse the operator's input and compile the template registry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad entity name or attribute list;
    /// nothing has been written when this fails.
    pub fn new(name: &str, attributes: &str) -> Result<Self, ScaffoldError> {
        let spec = EntitySpec::parse(name, attributes)?;
        let templates = TemplateSet::new()?;

        Ok(Self { spec, templates })
    }

    /// The validated entity specification.
    #[must_use]
    pub const fn spec(&self) -> &EntitySpec {
        &self.spec
    }

    /// Render the artifact set for the given branch.
    ///
    /// Auth entities (`user`/`users`) always receive the authentication
    /// template family; `gate_routes` only decides whether CRUD routes sit
    /// behind the auth middleware. The document path additionally emits a
    /// model artifact; the relational path assumes the model comes from the
    /// external migration step. Output is a pure function of the inputs:
    /// rendering twice yields byte-identical content.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateRender`] if a template fails to
    /// render.
    pub fn generate(
        &self,
        db: DatabaseKind,
        gate_routes: bool,
    ) -> Result<Vec<GeneratedArtifact>, ScaffoldError> {
        let is_auth_entity = self.spec.is_auth_entity();
        let context = self.context(gate_routes);
        let stem = self.spec.camel();

        let mut artifacts = Vec::new();

        if db == DatabaseKind::Document {
            artifacts.push(GeneratedArtifact {
                kind: ArtifactKind::Model,
                path: PathBuf::from(format!("models/{stem}.js")),
                content: self.templates.render("model_document", &context)?,
            });
        }

        let controller_template = match (db, is_auth_entity) {
            (DatabaseKind::Relational, true) => "controller_auth_relational",
            (DatabaseKind::Relational, false) => "controller_crud_relational",
            (DatabaseKind::Document, true) => "controller_auth_document",
            (DatabaseKind::Document, false) => "controller_crud_document",
        };
        artifacts.push(GeneratedArtifact {
            kind: ArtifactKind::Controller,
            path: PathBuf::from(format!("controllers/{stem}Controller.js")),
            content: self.templates.render(controller_template, &context)?,
        });

        let routes_template = if is_auth_entity { "routes_auth" } else { "routes_crud" };
        artifacts.push(GeneratedArtifact {
            kind: ArtifactKind::Route,
            path: PathBuf::from(format!("routes/{stem}Routes.js")),
            content: self.templates.render(routes_template, &context)?,
        });

        Ok(artifacts)
    }

    /// Template context shared by every artifact of one invocation.
    fn context(&self, gate_routes: bool) -> serde_json::Value {
        let fields: Vec<_> = self
            .spec
            .fields()
            .iter()
            .map(|field| {
                json!({
                    "name": field.name,
                    "schema_type": field.field_type.schema_token(),
                })
            })
            .collect();

        json!({
            "entity": self.spec.pascal(),
            "entity_camel": self.spec.camel(),
            "auth": gate_routes,
            "fields": fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(artifacts: &[GeneratedArtifact]) -> Vec<String> {
        artifacts.iter().map(|a| a.path.display().to_string()).collect()
    }

    #[test]
    fn test_relational_auth_artifacts() {
        let generator = ScaffoldGenerator::new("User", "name:string,email:string,password:string").unwrap();
        let artifacts = generator.generate(DatabaseKind::Relational, false).unwrap();

        assert_eq!(
            paths(&artifacts),
            ["controllers/userController.js", "routes/userRoutes.js"]
        );
        assert!(artifacts[0].content.contains("exports.login"));
        assert!(artifacts[0].content.contains("bcrypt.hash"));
        assert!(artifacts[0].content.contains("User.findOne({ where: { email } })"));
        assert!(artifacts[1].content.contains("router.post('/register', userController.create);"));
        assert!(artifacts[1].content.contains("router.get('/profile', authenticateJWT, userController.getProfile);"));
    }

    #[test]
    fn test_relational_crud_artifacts() {
        let generator = ScaffoldGenerator::new("Product", "title:string,price:float").unwrap();
        let artifacts = generator.generate(DatabaseKind::Relational, false).unwrap();

        assert_eq!(
            paths(&artifacts),
            ["controllers/productController.js", "routes/productRoutes.js"]
        );
        for method in ["create", "getAll", "getById", "update", "delete"] {
            assert!(
                artifacts[0].content.contains(&format!("exports.{method}")),
                "controller should define {method}"
            );
        }
        assert!(!artifacts[1].content.contains("authenticateJWT"));
    }

    #[test]
    fn test_document_auth_artifacts() {
        let generator = ScaffoldGenerator::new("User", "name:string,email:string,password:string").unwrap();
        let artifacts = generator.generate(DatabaseKind::Document, false).unwrap();

        assert_eq!(
            paths(&artifacts),
            [
                "models/user.js",
                "controllers/userController.js",
                "routes/userRoutes.js"
            ]
        );
        assert!(artifacts[0].content.contains("name: { type: String, required: true },"));
        assert!(artifacts[1].content.contains("new User(req.body)"));
        assert!(artifacts[2].content.contains("router.post('/login', userController.login);"));
    }

    #[test]
    fn test_document_crud_gated_routes() {
        let generator = ScaffoldGenerator::new("Order", "total:float,placed:date").unwrap();
        let artifacts = generator.generate(DatabaseKind::Document, true).unwrap();

        assert_eq!(artifacts.len(), 3);
        let routes = &artifacts[2].content;
        assert!(routes.contains("const authenticateJWT = require('../middleware/auth');"));
        assert!(routes.contains("router.post('/', authenticateJWT, orderController.create);"));
        assert!(routes.contains("router.delete('/:id', authenticateJWT, orderController.delete);"));
    }

    #[test]
    fn test_auth_entity_overrides_flag() {
        let generator = ScaffoldGenerator::new("users", "email:string,password:string").unwrap();
        let artifacts = generator.generate(DatabaseKind::Relational, false).unwrap();

        assert!(artifacts[0].content.contains("exports.getProfile"));
        assert!(artifacts[1].content.contains("/register"));
    }

    #[test]
    fn test_field_order_preserved_in_model() {
        let generator = ScaffoldGenerator::new("Thing", "zeta:string,alpha:integer,mid:boolean").unwrap();
        let artifacts = generator.generate(DatabaseKind::Document, false).unwrap();

        let model = &artifacts[0].content;
        let zeta = model.find("zeta:").unwrap();
        let alpha = model.find("alpha:").unwrap();
        let mid = model.find("mid:").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert!(model.contains("alpha: { type: Integer, required: true },"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = ScaffoldGenerator::new("Product", "title:string,price:float").unwrap();
        let first = generator.generate(DatabaseKind::Document, true).unwrap();
        let second = generator.generate(DatabaseKind::Document, true).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_camel_file_stems() {
        let generator = ScaffoldGenerator::new("OrderItem", "qty:integer").unwrap();
        let artifacts = generator.generate(DatabaseKind::Document, false).unwrap();

        assert_eq!(
            paths(&artifacts),
            [
                "models/orderItem.js",
                "controllers/orderItemController.js",
                "routes/orderItemRoutes.js"
            ]
        );
    }

    #[test]
    fn test_validation_happens_before_generation() {
        assert!(ScaffoldGenerator::new("Product", "title:").is_err());
        assert!(ScaffoldGenerator::new("", "title:string").is_err());
    }
}
