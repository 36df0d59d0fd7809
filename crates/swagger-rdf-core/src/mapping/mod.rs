//! Document-to-graph mapping.
//!
//! Each top-level section is mapped independently into one shared [`Graph`]:
//!
//! 1. `tags` - tag resources with name and description
//! 2. `schemes` - scheme resources
//! 3. `paths` - operations and their optional fields
//! 4. `securityDefinitions` - definitions, properties and nested properties
//! 5. `definitions` - model property resources
//! 6. the two context triples
//!
//! Section order only changes serialization order, never the triple set.
//! Any error aborts the whole run and the partially built graph is dropped.

mod paths;
mod schemas;

use crate::context::ContextBuilder;
use crate::document::{Scalar, SwaggerDocument, Tag};
use crate::error::ConvertError;
use crate::graph::{Graph, LiteralNode, Node, UriNode};
use crate::namespace::Namespace;
use crate::vocab::{Class, Predicate};

/// Map a document into a fresh graph.
pub fn map_document(doc: &SwaggerDocument, ns: &Namespace) -> Result<Graph, ConvertError> {
    Mapper::new(ns).run(doc)
}

/// Single-use traversal state: one namespace, one graph.
pub struct Mapper<'a> {
    ns: &'a Namespace,
    graph: Graph,
}

impl<'a> Mapper<'a> {
    pub fn new(ns: &'a Namespace) -> Self {
        let mut graph = Graph::new();
        for (prefix, iri) in ns.prefixes() {
            graph.add_prefix(prefix, iri);
        }
        Self { ns, graph }
    }

    pub fn run(mut self, doc: &SwaggerDocument) -> Result<Graph, ConvertError> {
        self.section("tags", |m| m.map_tags(&doc.tags))?;
        self.section("schemes", |m| m.map_schemes(&doc.schemes))?;
        self.section("paths", |m| m.map_paths(&doc.paths))?;
        self.section("securityDefinitions", |m| {
            m.map_security_definitions(&doc.security_definitions)
        })?;
        self.section("definitions", |m| m.map_definitions(&doc.definitions))?;
        self.section("context", |m| ContextBuilder::new(m.ns).build(&mut m.graph))?;

        Ok(self.graph)
    }

    fn section(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> Result<(), ConvertError>,
    ) -> Result<(), ConvertError> {
        let before = self.graph.len();
        f(self)?;
        tracing::debug!(section = name, triples = self.graph.len() - before, "mapped section");
        Ok(())
    }

    fn assert(
        &mut self,
        subject: &UriNode,
        predicate: Predicate,
        object: impl Into<Node>,
    ) -> Result<(), ConvertError> {
        let predicate = self.ns.predicate(predicate)?;
        self.graph.assert_triple(subject, &predicate, object);
        Ok(())
    }

    fn assert_class(
        &mut self,
        subject: &UriNode,
        predicate: Predicate,
        class: Class,
    ) -> Result<(), ConvertError> {
        let class = self.ns.class(class)?;
        self.assert(subject, predicate, class)
    }

    fn map_tags(&mut self, tags: &[Tag]) -> Result<(), ConvertError> {
        for tag in tags {
            let Some(name) = &tag.name else {
                continue;
            };
            let tag_uri = self.ns.tag(name.as_str())?;

            self.assert_class(&tag_uri, Predicate::IsTag, Class::Tag)?;
            self.assert(&tag_uri, Predicate::HasName, literal(name))?;
            if let Some(description) = &tag.description {
                self.assert(&tag_uri, Predicate::HasDescription, literal(description))?;
            }
        }
        Ok(())
    }

    fn map_schemes(&mut self, schemes: &[String]) -> Result<(), ConvertError> {
        for scheme in schemes {
            let scheme_uri = self.ns.scheme(scheme)?;
            self.assert_class(&scheme_uri, Predicate::IsScheme, Class::Scheme)?;
            self.assert(&scheme_uri, Predicate::HasName, LiteralNode::new(scheme))?;
        }
        Ok(())
    }
}

fn literal(value: &Scalar) -> LiteralNode {
    LiteralNode::new(value.as_str())
}

/// `Some` only for present, non-empty values.
fn non_empty(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: serde_json::Value) -> Result<Graph, ConvertError> {
        let doc = SwaggerDocument::from_value(&value)?;
        map_document(&doc, &Namespace::default())
    }

    fn has(graph: &Graph, s: &str, p: &str, o: &str) -> bool {
        graph.iter().any(|t| {
            t.subject.as_str() == s
                && t.predicate.as_str() == p
                && match &t.object {
                    Node::Uri(u) => u.as_str() == o,
                    Node::Literal(l) => l.value() == o,
                }
        })
    }

    #[test]
    fn test_tags_with_and_without_description() {
        let graph = convert(json!({
            "tags": [
                { "name": "pet", "description": "Everything about pets" },
                { "name": "store" },
                { "description": "nameless" }
            ],
            "paths": {}
        }))
        .unwrap();

        let pet = "http://example.org/tag/pet";
        assert!(has(&graph, pet, "http://example.org/IsTag", "http://example.org/Tag"));
        assert!(has(&graph, pet, "http://example.org/HasName", "pet"));
        assert!(has(&graph, pet, "http://example.org/HasDescription", "Everything about pets"));

        let store = "http://example.org/tag/store";
        assert!(!graph
            .iter()
            .any(|t| t.subject.as_str() == store && t.predicate.as_str().ends_with("HasDescription")));

        // 3 + 2 tag triples, 2 context triples
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn test_schemes_keep_original_case_name() {
        let graph = convert(json!({ "schemes": ["HTTPS", "http"], "paths": {} })).unwrap();

        let https = "http://example.org/scheme/https";
        assert!(has(&graph, https, "http://example.org/IsScheme", "http://example.org/Scheme"));
        assert!(has(&graph, https, "http://example.org/HasName", "HTTPS"));
        assert!(has(&graph, "http://example.org/scheme/http", "http://example.org/HasName", "http"));
    }

    #[test]
    fn test_scheme_must_be_string() {
        let err = convert(json!({ "schemes": [1], "paths": {} })).unwrap_err();
        assert_eq!(err.kind(), "UnexpectedShape");
    }

    #[test]
    fn test_malformed_tag_name_aborts() {
        let err = convert(json!({ "tags": [{ "name": "pet store" }], "paths": {} })).unwrap_err();
        assert_eq!(err.kind(), "MalformedIdentifier");
    }
}
