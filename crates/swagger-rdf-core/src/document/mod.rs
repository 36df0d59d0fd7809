//! Typed, read-only views over a Swagger 2.0 document.
//!
//! The raw tree is checked section by section. Optional fields are `Option`s;
//! a known key holding the wrong kind of value is an `UnexpectedShape` error
//! naming the section it was found in.

mod loader;
mod ordered;
mod value;

pub use loader::{load_file, parse_str, SourceFormat};
pub use ordered::OrderedMap;
pub use value::{Scalar, SecurityValue};

use crate::error::ConvertError;
use crate::namespace::method_token;
use crate::vocab::is_http_method;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

/// A document entry from the top-level `tags` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub description: Option<Scalar>,
}

/// One path and its operations.
#[derive(Debug, Clone)]
pub struct PathItem {
    pub path: String,
    pub operations: Vec<Operation>,
}

/// One HTTP-method handler under a path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Normalized method token (`get`, `post`, ...).
    #[serde(skip)]
    pub method: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<Scalar>,
    #[serde(default)]
    pub description: Option<Scalar>,
    #[serde(default)]
    pub consumes: Option<Vec<String>>,
    #[serde(default)]
    pub produces: Option<Vec<String>>,
    #[serde(default)]
    pub operation_id: Option<Scalar>,
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
}

/// Scheme name to required scopes.
pub type SecurityRequirement = OrderedMap<Vec<String>>;

/// A named entry of `securityDefinitions`.
#[derive(Debug, Clone)]
pub struct SecurityDefinition {
    pub name: String,
    pub properties: OrderedMap<SecurityValue>,
}

/// A named entry of `definitions`. Only property names are kept.
#[derive(Debug, Clone)]
pub struct Definition {
    pub name: String,
    pub properties: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct DefinitionBody {
    #[serde(default)]
    properties: Option<OrderedMap<IgnoredAny>>,
}

/// The sections of an API description the mapping engine reads.
#[derive(Debug, Clone, Default)]
pub struct SwaggerDocument {
    pub tags: Vec<Tag>,
    pub schemes: Vec<String>,
    pub paths: Vec<PathItem>,
    pub security_definitions: Vec<SecurityDefinition>,
    pub definitions: Vec<Definition>,
}

impl SwaggerDocument {
    /// Build the typed view from a parsed tree.
    ///
    /// Fails with `MissingRequiredSection` when `paths` is absent or null.
    pub fn from_value(root: &Value) -> Result<Self, ConvertError> {
        let root = root
            .as_object()
            .ok_or_else(|| ConvertError::unexpected_shape("document", "expected an object"))?;

        let paths = root
            .get("paths")
            .filter(|v| !v.is_null())
            .ok_or(ConvertError::MissingRequiredSection("paths"))?;

        Ok(Self {
            tags: optional_section(root.get("tags"), "tags")?.unwrap_or_default(),
            schemes: optional_section(root.get("schemes"), "schemes")?.unwrap_or_default(),
            paths: parse_paths(paths)?,
            security_definitions: parse_security_definitions(root.get("securityDefinitions"))?,
            definitions: parse_definitions(root.get("definitions"))?,
        })
    }

    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.iter().map(|p| p.operations.len()).sum()
    }
}

fn section<'a, T: Deserialize<'a>>(value: &'a Value, location: &str) -> Result<T, ConvertError> {
    T::deserialize(value).map_err(|e| ConvertError::unexpected_shape(location, e))
}

/// Absent and `null` sections both read as `None`.
fn optional_section<'a, T: Deserialize<'a>>(
    value: Option<&'a Value>,
    location: &str,
) -> Result<Option<T>, ConvertError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => section(v, location).map(Some),
    }
}

fn parse_paths(value: &Value) -> Result<Vec<PathItem>, ConvertError> {
    let raw: OrderedMap<Value> = section(value, "paths")?;
    let mut items = Vec::with_capacity(raw.len());

    for (path, item) in raw.iter() {
        let location = format!("paths.{}", path);
        let children: OrderedMap<Value> = section(item, &location)?;

        let mut operations = Vec::new();
        for (key, body) in children.iter() {
            let method = match method_token(key) {
                Ok(method) if is_http_method(&method) => method,
                Ok(_) => {
                    tracing::debug!(path, key, "skipping non-operation path item key");
                    continue;
                }
                Err(e) => {
                    tracing::debug!(path, key, error = %e, "skipping unreadable path item key");
                    continue;
                }
            };
            let mut operation: Operation = section(body, &format!("{}.{}", location, key))?;
            operation.method = method;
            operations.push(operation);
        }

        items.push(PathItem {
            path: path.to_string(),
            operations,
        });
    }

    Ok(items)
}

fn parse_security_definitions(
    value: Option<&Value>,
) -> Result<Vec<SecurityDefinition>, ConvertError> {
    let Some(raw) = optional_section::<OrderedMap<Value>>(value, "securityDefinitions")? else {
        return Ok(Vec::new());
    };

    raw.iter()
        .map(|(name, body)| {
            let properties = section(body, &format!("securityDefinitions.{}", name))?;
            Ok(SecurityDefinition {
                name: name.to_string(),
                properties,
            })
        })
        .collect()
}

fn parse_definitions(value: Option<&Value>) -> Result<Vec<Definition>, ConvertError> {
    let Some(raw) = optional_section::<OrderedMap<Value>>(value, "definitions")? else {
        return Ok(Vec::new());
    };

    raw.iter()
        .map(|(name, body)| {
            let body: DefinitionBody = section(body, &format!("definitions.{}", name))?;
            Ok(Definition {
                name: name.to_string(),
                properties: body
                    .properties
                    .map(|props| props.keys().map(str::to_string).collect()),
            })
        })
        .collect()
}
