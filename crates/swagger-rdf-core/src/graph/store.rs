//! Insertion-ordered triple set.

use super::node::{LiteralNode, Node, Triple, UriNode};
use crate::error::ConvertError;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A set of triples plus a prefix table.
///
/// Re-asserting a triple is a no-op. Enumeration follows first-assertion
/// order. Node strings are interned, so equal nodes share one allocation.
/// The prefix table is used to expand `prefix:local` names and by the
/// serializer; it never influences which triples are asserted.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    index: HashSet<Triple>,
    strings: HashSet<Arc<str>>,
    prefixes: BTreeMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`, replacing any previous binding.
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// Assert a triple. Returns `false` if it was already present.
    pub fn assert(&mut self, triple: Triple) -> bool {
        if self.index.contains(&triple) {
            return false;
        }

        let triple = Triple {
            subject: self.intern_uri(&triple.subject),
            predicate: self.intern_uri(&triple.predicate),
            object: match &triple.object {
                Node::Uri(u) => Node::Uri(self.intern_uri(u)),
                Node::Literal(l) => Node::Literal(self.intern_literal(l)),
            },
        };
        self.index.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Assert a triple from its parts.
    pub fn assert_triple(
        &mut self,
        subject: &UriNode,
        predicate: &UriNode,
        object: impl Into<Node>,
    ) -> bool {
        self.assert(Triple::new(subject.clone(), predicate.clone(), object))
    }

    /// All triples in first-assertion order.
    pub fn all(&self) -> &[Triple] {
        &self.triples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Expand a `prefix:local` name against the prefix table.
    pub fn resolve(&self, prefixed: &str) -> Result<UriNode, ConvertError> {
        let (prefix, local) = prefixed.split_once(':').ok_or_else(|| {
            ConvertError::malformed_identifier(prefixed, "expected a prefix:local name")
        })?;
        let namespace = self.prefixes.get(prefix).ok_or_else(|| {
            ConvertError::malformed_identifier(prefixed, format!("unknown prefix '{}'", prefix))
        })?;
        UriNode::new(format!("{}{}", namespace, local))
    }

    fn intern(&mut self, s: &Arc<str>) -> Arc<str> {
        if let Some(existing) = self.strings.get(s) {
            return Arc::clone(existing);
        }
        self.strings.insert(Arc::clone(s));
        Arc::clone(s)
    }

    fn intern_uri(&mut self, node: &UriNode) -> UriNode {
        UriNode::from_arc(self.intern(node.arc()))
    }

    fn intern_literal(&mut self, node: &LiteralNode) -> LiteralNode {
        node.with_value_arc(self.intern(node.value_arc()))
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
