//! Turtle output.
//!
//! Triples are written in graph order; IRIs under a bound prefix are
//! abbreviated where the local part allows it.

use crate::error::ConvertError;
use crate::graph::{Graph, LiteralTag, Node, Triple};
use oxrdf::{Literal, NamedNode, Term};
use oxttl::TurtleSerializer;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serialize `graph` into `writer`, returning the writer.
pub fn write_turtle<W: Write>(graph: &Graph, writer: W) -> Result<W, ConvertError> {
    let mut serializer = TurtleSerializer::new();
    for (prefix, iri) in graph.prefixes() {
        serializer = serializer
            .with_prefix(prefix.as_str(), iri.as_str())
            .map_err(|e| ConvertError::malformed_identifier(iri.as_str(), e))?;
    }

    let mut writer = serializer.for_writer(writer);
    for triple in graph.iter() {
        writer
            .serialize_triple(&to_oxrdf(triple)?)
            .map_err(|e| ConvertError::Serialization(e.to_string()))?;
    }
    writer
        .finish()
        .map_err(|e| ConvertError::Serialization(e.to_string()))
}

/// Serialize `graph` into an in-memory string.
pub fn to_turtle(graph: &Graph) -> Result<String, ConvertError> {
    let bytes = write_turtle(graph, Vec::new())?;
    String::from_utf8(bytes).map_err(|e| ConvertError::Serialization(e.to_string()))
}

/// Serialize `graph` into a file, replacing it if it exists.
///
/// The file is only touched once serialization has succeeded.
pub fn write_turtle_file(graph: &Graph, path: &Path) -> Result<(), ConvertError> {
    let text = to_turtle(graph)?;
    fs::write(path, text).map_err(|e| ConvertError::io(path, e))
}

fn to_oxrdf(triple: &Triple) -> Result<oxrdf::Triple, ConvertError> {
    // UriNode values were validated on construction.
    let subject = NamedNode::new_unchecked(triple.subject.as_str());
    let predicate = NamedNode::new_unchecked(triple.predicate.as_str());
    let object: Term = match &triple.object {
        Node::Uri(u) => NamedNode::new_unchecked(u.as_str()).into(),
        Node::Literal(l) => match l.tag() {
            None => Literal::new_simple_literal(l.value()).into(),
            Some(LiteralTag::Language(lang)) => {
                Literal::new_language_tagged_literal(l.value(), lang.as_ref())
                    .map_err(|e| ConvertError::Serialization(format!("language tag '{}': {}", lang, e)))?
                    .into()
            }
            Some(LiteralTag::Datatype(dt)) => {
                Literal::new_typed_literal(l.value(), NamedNode::new_unchecked(dt.as_str())).into()
            }
        },
    };
    Ok(oxrdf::Triple::new(subject, predicate, object))
}
