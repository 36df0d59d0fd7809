//! Node and triple values.
//!
//! A [`UriNode`] can only be built from a well-formed absolute IRI, so every
//! triple that reaches the graph has a valid subject and predicate.

use crate::error::ConvertError;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// URI NODE
// =============================================================================

/// A resource identified by an absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UriNode(Arc<str>);

impl UriNode {
    /// Create a URI node, failing with `MalformedIdentifier` if `iri` is not
    /// a well-formed absolute IRI.
    ///
    /// Nested property identifiers are built by appending `#name` to an
    /// identifier that already has a fragment. Any `#` after the first is
    /// stored percent-encoded as `%23`, so `a#b#c` becomes `a#b%23c`.
    pub fn new(iri: impl Into<String>) -> Result<Self, ConvertError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(ConvertError::malformed_identifier(iri, "empty identifier"));
        }

        let checked = match iri.split_once('#') {
            Some((head, fragment)) if fragment.contains('#') => {
                format!("{}#{}", head, fragment.replace('#', "%23"))
            }
            _ => iri.clone(),
        };
        let node = oxrdf::NamedNode::new(checked)
            .map_err(|e| ConvertError::malformed_identifier(iri.as_str(), e))?;

        Ok(Self(Arc::from(node.into_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn arc(&self) -> &Arc<str> {
        &self.0
    }

    pub(crate) fn from_arc(iri: Arc<str>) -> Self {
        Self(iri)
    }
}

impl fmt::Display for UriNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

// =============================================================================
// LITERAL NODE
// =============================================================================

/// Language tag or datatype attached to a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralTag {
    Language(Arc<str>),
    Datatype(UriNode),
}

/// A literal value. Plain literals carry no tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiteralNode {
    value: Arc<str>,
    tag: Option<LiteralTag>,
}

impl LiteralNode {
    /// A plain string literal.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            tag: None,
        }
    }

    /// A literal with a language tag (e.g. `en`).
    pub fn with_language(value: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            tag: Some(LiteralTag::Language(Arc::from(language.as_ref()))),
        }
    }

    /// A literal with an explicit datatype.
    pub fn typed(value: impl AsRef<str>, datatype: UriNode) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            tag: Some(LiteralTag::Datatype(datatype)),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tag(&self) -> Option<&LiteralTag> {
        self.tag.as_ref()
    }

    pub(crate) fn value_arc(&self) -> &Arc<str> {
        &self.value
    }

    pub(crate) fn with_value_arc(&self, value: Arc<str>) -> Self {
        Self {
            value,
            tag: self.tag.clone(),
        }
    }
}

impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value.as_ref())?;
        match &self.tag {
            Some(LiteralTag::Language(lang)) => write!(f, "@{}", lang),
            Some(LiteralTag::Datatype(dt)) => write!(f, "^^{}", dt),
            None => Ok(()),
        }
    }
}

// =============================================================================
// NODE / TRIPLE
// =============================================================================

/// Any value that can occupy the object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Uri(UriNode),
    Literal(LiteralNode),
}

impl Node {
    pub fn as_uri(&self) -> Option<&UriNode> {
        match self {
            Self::Uri(u) => Some(u),
            Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralNode> {
        match self {
            Self::Literal(l) => Some(l),
            Self::Uri(_) => None,
        }
    }
}

impl From<UriNode> for Node {
    fn from(node: UriNode) -> Self {
        Node::Uri(node)
    }
}

impl From<LiteralNode> for Node {
    fn from(node: LiteralNode) -> Self {
        Node::Literal(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(u) => u.fmt(f),
            Self::Literal(l) => l.fmt(f),
        }
    }
}

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub subject: UriNode,
    pub predicate: UriNode,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: UriNode, predicate: UriNode, object: impl Into<Node>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_node_accepts_absolute_iri() {
        let node = UriNode::new("http://example.org//pets/_id_#get").unwrap();
        assert_eq!(node.as_str(), "http://example.org//pets/_id_#get");
    }

    #[test]
    fn test_uri_node_allows_nested_fragment() {
        let node = UriNode::new("http://example.org/securityDefinition/oauth#scopes#read").unwrap();
        assert_eq!(
            node.as_str(),
            "http://example.org/securityDefinition/oauth#scopes%23read"
        );
    }

    #[test]
    fn test_uri_node_rejects_whitespace() {
        let err = UriNode::new("http://example.org/tag/pet store").unwrap_err();
        assert_eq!(err.kind(), "MalformedIdentifier");
    }

    #[test]
    fn test_uri_node_rejects_relative_and_empty() {
        assert!(UriNode::new("pets").is_err());
        assert!(UriNode::new("").is_err());
    }

    #[test]
    fn test_uri_node_rejects_control_characters() {
        assert!(UriNode::new("http://example.org/a\u{7}b").is_err());
    }

    #[test]
    fn test_node_equality_by_variant_and_content() {
        let uri: Node = UriNode::new("http://example.org/a").unwrap().into();
        let lit: Node = LiteralNode::new("http://example.org/a").into();
        assert_ne!(uri, lit);
        assert_eq!(lit, Node::from(LiteralNode::new("http://example.org/a")));
        assert_ne!(
            LiteralNode::new("chat"),
            LiteralNode::with_language("chat", "fr")
        );
    }

    #[test]
    fn test_triple_display() {
        let t = Triple::new(
            UriNode::new("http://example.org/s").unwrap(),
            UriNode::new("http://example.org/p").unwrap(),
            LiteralNode::new("say \"hi\""),
        );
        assert_eq!(
            t.to_string(),
            "<http://example.org/s> <http://example.org/p> \"say \\\"hi\\\"\" ."
        );
    }
}
