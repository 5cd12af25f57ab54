//! Entity specification parsing and validation.
//!
//! An entity is named by a single alphanumeric token and carries an ordered,
//! non-empty list of `name:type` attribute pairs. Validation happens here,
//! before any rendering or filesystem work.

use convert_case::{Case, Casing};

use crate::error::ScaffoldError;

/// Attribute types accepted in an attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Short string column
    String,
    /// Unbounded text column
    Text,
    /// Integer column
    Integer,
    /// Floating-point column
    Float,
    /// Boolean column
    Boolean,
    /// Date column
    Date,
    /// Generic numeric column (document path)
    Number,
}

impl FieldType {
    /// Parse a declared type token.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownType`] for tokens outside the
    /// supported set, naming the offending token.
    pub fn parse(token: &str) -> Result<Self, ScaffoldError> {
        match token.to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "number" => Ok(Self::Number),
            _ => Err(ScaffoldError::UnknownType {
                token: token.to_string(),
            }),
        }
    }

    /// Canonical lowercase token for this type.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Number => "number",
        }
    }

    /// Document-schema type token: the declared token with its first letter
    /// upper-cased (`string` -> `String`, `date` -> `Date`).
    #[must_use]
    pub fn schema_token(self) -> String {
        let token = self.token();
        let mut chars = token.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    }
}

/// One parsed `name:type` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name exactly as declared.
    pub name: String,
    /// Declared field type.
    pub field_type: FieldType,
}

impl FieldDefinition {
    /// Parse a single `name:type` token.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Attribute`] when the token does not split
    /// into two non-empty halves, and [`ScaffoldError::UnknownType`] when
    /// the type half is unsupported.
    pub fn parse(token: &str) -> Result<Self, ScaffoldError> {
        let trimmed = token.trim();
        let Some((name, type_token)) = trimmed.split_once(':') else {
            return Err(ScaffoldError::Attribute {
                token: trimmed.to_string(),
            });
        };

        let name = name.trim();
        let type_token = type_token.trim();
        if name.is_empty() || type_token.is_empty() {
            return Err(ScaffoldError::Attribute {
                token: trimmed.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            field_type: FieldType::parse(type_token)?,
        })
    }
}

/// A named entity with its ordered attribute list.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    name: String,
    fields: Vec<FieldDefinition>,
}

impl EntitySpec {
    /// Parse and validate an entity from operator input.
    ///
    /// The name is normalized to PascalCase; attribute order is preserved
    /// exactly as declared.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unusable name, a malformed or
    /// empty attribute list, a duplicate field name, or an unknown type.
    pub fn parse(name: &str, attributes: &str) -> Result<Self, ScaffoldError> {
        let name = name.trim();
        let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScaffoldError::EntityName {
                name: name.to_string(),
            });
        }

        if attributes.trim().is_empty() {
            return Err(ScaffoldError::Attribute {
                token: attributes.trim().to_string(),
            });
        }

        let fields = attributes
            .split(',')
            .map(FieldDefinition::parse)
            .collect::<Result<Vec<_>, _>>()?;

        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|seen| seen.name == field.name) {
                return Err(ScaffoldError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_case(Case::Pascal),
            fields,
        })
    }

    /// PascalCase entity name, for type references in generated code.
    #[must_use]
    pub fn pascal(&self) -> &str {
        &self.name
    }

    /// lowerCamelCase entity name, for variable and file-stem references.
    #[must_use]
    pub fn camel(&self) -> String {
        self.name.to_case(Case::Camel)
    }

    /// Ordered attribute list.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Whether this entity receives authentication-flavored endpoints.
    ///
    /// The naming convention wins over any explicit answer: `user` and
    /// `users` (any casing) are always auth entities.
    #[must_use]
    pub fn is_auth_entity(&self) -> bool {
        let lower = self.name.to_lowercase();
        lower == "user" || lower == "users"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity() {
        let spec = EntitySpec::parse("Product", "title:string,price:float").unwrap();
        assert_eq!(spec.pascal(), "Product");
        assert_eq!(spec.camel(), "product");
        assert_eq!(spec.fields().len(), 2);
        assert_eq!(spec.fields()[0].name, "title");
        assert_eq!(spec.fields()[0].field_type, FieldType::String);
        assert_eq!(spec.fields()[1].field_type, FieldType::Float);
    }

    #[test]
    fn test_name_normalization() {
        let spec = EntitySpec::parse("orderItem", "qty:integer").unwrap();
        assert_eq!(spec.pascal(), "OrderItem");
        assert_eq!(spec.camel(), "orderItem");
    }

    #[test]
    fn test_field_order_preserved() {
        let spec = EntitySpec::parse("Post", "b:string,a:text,c:date").unwrap();
        let names: Vec<_> = spec.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "9Lives", "My-Entity", "my entity", "café"] {
            let result = EntitySpec::parse(name, "title:string");
            assert!(
                matches!(result, Err(ScaffoldError::EntityName { .. })),
                "name should be rejected: {name:?}"
            );
        }
    }

    #[test]
    fn test_malformed_attributes() {
        for attrs in ["name:", ":string", "name", "", "name:string,:text"] {
            let result = EntitySpec::parse("Product", attrs);
            assert!(
                matches!(result, Err(ScaffoldError::Attribute { .. })),
                "attributes should be rejected: {attrs:?}"
            );
        }
    }

    #[test]
    fn test_attribute_error_names_token() {
        let err = EntitySpec::parse("Product", "title:string,price:").unwrap_err();
        assert!(err.to_string().contains("price:"));
    }

    #[test]
    fn test_unknown_type() {
        let err = EntitySpec::parse("Product", "title:varchar").unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownType { ref token } if token == "varchar"));
    }

    #[test]
    fn test_duplicate_field() {
        let err = EntitySpec::parse("Product", "title:string,title:text").unwrap_err();
        assert!(matches!(err, ScaffoldError::DuplicateField { ref name } if name == "title"));
    }

    #[test]
    fn test_auth_entity_convention() {
        for name in ["user", "User", "USERS", "users"] {
            let spec = EntitySpec::parse(name, "email:string").unwrap();
            assert!(spec.is_auth_entity(), "should be auth entity: {name}");
        }
        let spec = EntitySpec::parse("Account", "email:string").unwrap();
        assert!(!spec.is_auth_entity());
    }

    #[test]
    fn test_schema_tokens() {
        assert_eq!(FieldType::String.schema_token(), "String");
        assert_eq!(FieldType::Integer.schema_token(), "Integer");
        assert_eq!(FieldType::Date.schema_token(), "Date");
        assert_eq!(FieldType::Boolean.schema_token(), "Boolean");
    }
}
