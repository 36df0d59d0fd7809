//! Swagger/OpenAPI 2.0 to RDF conversion.
//!
//! A document is loaded into a tree, viewed through typed section models,
//! mapped into a [`Graph`] and serialized as Turtle:
//!
//! ```ignore
//! use swagger_rdf_core::{Converter, turtle};
//!
//! let graph = Converter::default().convert_file("swagger.json".as_ref())?;
//! println!("{}", turtle::to_turtle(&graph)?);
//! ```
//!
//! Every conversion owns its graph; a [`Converter`] holds only immutable
//! namespace configuration and can be shared freely.

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod namespace;
pub mod turtle;
pub mod vocab;

pub use config::{Config, ConfigError, NamespaceConfig, OutputConfig};
pub use context::ContextBuilder;
pub use document::{SourceFormat, SwaggerDocument};
pub use error::ConvertError;
pub use graph::{Graph, LiteralNode, Node, Triple, UriNode};
pub use namespace::Namespace;
pub use turtle::{to_turtle, write_turtle, write_turtle_file};

use serde_json::Value;
use std::path::Path;

/// Converts documents into graphs under one namespace.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    ns: Namespace,
}

impl Converter {
    pub fn new(config: &NamespaceConfig) -> Self {
        Self {
            ns: Namespace::new(config),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.namespace)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Map an already-parsed tree.
    pub fn convert_value(&self, value: &Value) -> Result<Graph, ConvertError> {
        let doc = SwaggerDocument::from_value(value)?;
        tracing::debug!(
            paths = doc.paths.len(),
            operations = doc.operation_count(),
            "converting document"
        );
        mapping::map_document(&doc, &self.ns)
    }

    /// Parse and map raw text.
    pub fn convert_str(&self, text: &str, format: SourceFormat) -> Result<Graph, ConvertError> {
        self.convert_value(&document::parse_str(text, format)?)
    }

    /// Read, parse and map a file. YAML is detected by extension.
    pub fn convert_file(&self, path: &Path) -> Result<Graph, ConvertError> {
        self.convert_value(&document::load_file(path)?)
    }
}
