//! Generated-source templates and the registry that renders them.
//!
//! Template bodies live as string constants, one family per module. All of
//! them render JavaScript, so HTML escaping is disabled.

use handlebars::Handlebars;

use crate::error::ScaffoldError;

pub mod controllers;
pub mod models;
pub mod project;
pub mod routes;

pub use controllers::*;
pub use models::MODEL_DOCUMENT;
pub use project::*;
pub use routes::{ROUTES_AUTH, ROUTES_CRUD};

/// All templates the scaffold generator renders, keyed by name.
const SCAFFOLD_TEMPLATES: &[(&str, &str)] = &[
    ("controller_auth_relational", CONTROLLER_AUTH_RELATIONAL),
    ("controller_auth_document", CONTROLLER_AUTH_DOCUMENT),
    ("controller_crud_relational", CONTROLLER_CRUD_RELATIONAL),
    ("controller_crud_document", CONTROLLER_CRUD_DOCUMENT),
    ("routes_auth", ROUTES_AUTH),
    ("routes_crud", ROUTES_CRUD),
    ("model_document", MODEL_DOCUMENT),
];

/// Pre-compiled template registry.
#[derive(Debug)]
pub struct TemplateSet {
    handlebars: Handlebars<'static>,
}

impl TemplateSet {
    /// Compile and register every scaffold template.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateParse`] if any template body fails
    /// to compile.
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut handlebars = Handlebars::new();

        // Generated output is code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, body) in SCAFFOLD_TEMPLATES {
            handlebars
                .register_template_string(name, *body)
                .map_err(|source| ScaffoldError::TemplateParse {
                    name,
                    source: Box::new(source),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Render a registered template against a context value.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateRender`] when rendering fails.
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, ScaffoldError> {
        self.handlebars
            .render(name, context)
            .map_err(|source| ScaffoldError::TemplateRender {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_compile() {
        assert!(TemplateSet::new().is_ok());
    }

    #[test]
    fn test_render_model() {
        let templates = TemplateSet::new().unwrap();
        let context = json!({
            "entity": "User",
            "entity_camel": "user",
            "fields": [
                {"name": "name", "schema_type": "String"},
                {"name": "email", "schema_type": "String"},
            ],
        });

        let rendered = templates.render("model_document", &context).unwrap();
        assert!(rendered.contains("const UserSchema = new Schema({"));
        assert!(rendered.contains("name: { type: String, required: true },"));
        assert!(rendered.contains("email: { type: String, required: true }\n"));
        assert!(rendered.contains("module.exports = mongoose.model('User', UserSchema);"));
    }

    #[test]
    fn test_render_unknown_template() {
        let templates = TemplateSet::new().unwrap();
        let result = templates.render("nonexistent", &json!({}));
        assert!(matches!(result, Err(ScaffoldError::TemplateRender { .. })));
    }
}
