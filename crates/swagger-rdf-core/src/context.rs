//! Context provenance triples.
//!
//! Publishes the document-key to predicate table as one JSON literal attached
//! to a context resource. The table is metadata: the mapping engine picks its
//! predicates directly from [`Predicate`](crate::vocab::Predicate).

use crate::error::ConvertError;
use crate::graph::{Graph, LiteralNode, UriNode};
use crate::namespace::Namespace;
use crate::vocab::{self, CONTEXT_KEYS};
use serde_json::{Map, Value};

pub struct ContextBuilder<'a> {
    ns: &'a Namespace,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(ns: &'a Namespace) -> Self {
        Self { ns }
    }

    /// Document key to predicate IRI, in table order.
    pub fn mapping(&self) -> Result<Map<String, Value>, ConvertError> {
        CONTEXT_KEYS
            .iter()
            .map(|(key, predicate)| {
                let iri = self.ns.predicate(*predicate)?;
                Ok((key.to_string(), Value::String(iri.as_str().to_string())))
            })
            .collect()
    }

    /// The mapping serialized as compact JSON.
    pub fn literal(&self) -> Result<String, ConvertError> {
        serde_json::to_string(&self.mapping()?)
            .map_err(|e| ConvertError::Serialization(e.to_string()))
    }

    /// Assert `(context, rdf:value, mapping)` and `(context, rdf:type, jsonld:Context)`.
    ///
    /// The predicates are fixed IRIs; prefix bindings in `graph` do not
    /// affect them.
    pub fn build(&self, graph: &mut Graph) -> Result<(), ConvertError> {
        let context = self.ns.context()?;
        let rdf_value = UriNode::new(format!("{}value", vocab::RDF_NS))?;
        let rdf_type = UriNode::new(format!("{}type", vocab::RDF_NS))?;
        let jsonld_context = UriNode::new(format!("{}Context", vocab::JSONLD_NS))?;

        graph.assert_triple(&context, &rdf_value, LiteralNode::new(self.literal()?));
        graph.assert_triple(&context, &rdf_type, jsonld_context);
        tracing::trace!(context = context.as_str(), "asserted context triples");
        Ok(())
    }
}
