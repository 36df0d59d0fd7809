//! Vocabulary for the API graph.
//!
//! Predicates and classes live under the configured base namespace, so
//! `Predicate::HasName` becomes `<base>HasName`. The document-key table that
//! the context builder publishes is defined here next to the predicates it
//! names, so the two cannot drift apart.

/// RDF syntax namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDF_PREFIX: &str = "rdf";

/// JSON-LD vocabulary namespace.
pub const JSONLD_NS: &str = "http://www.w3.org/ns/json-ld#";
pub const JSONLD_PREFIX: &str = "jsonld";

/// Local name of the context resource under the base namespace.
pub const CONTEXT_LOCAL_NAME: &str = "context";

/// Relations asserted by the mapping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    IsTag,
    HasName,
    HasDescription,
    IsScheme,
    HasPath,
    IsPathTag,
    HasSummary,
    Consumes,
    Produces,
    HasOperationId,
    HasSecurity,
    SecurityScope,
    IsMethodType,
    IsSecurityDefinition,
    HasType,
    HasValue,
    IsDefinition,
    HasProperty,
}

impl Predicate {
    pub fn local_name(&self) -> &'static str {
        match self {
            Self::IsTag => "IsTag",
            Self::HasName => "HasName",
            Self::HasDescription => "HasDescription",
            Self::IsScheme => "IsScheme",
            Self::HasPath => "HasPath",
            Self::IsPathTag => "IsPathTag",
            Self::HasSummary => "HasSummary",
            Self::Consumes => "Consumes",
            Self::Produces => "Produces",
            Self::HasOperationId => "HasOperationId",
            Self::HasSecurity => "HasSecurity",
            Self::SecurityScope => "SecurityScope",
            Self::IsMethodType => "IsMethodType",
            Self::IsSecurityDefinition => "IsSecurityDefinition",
            Self::HasType => "HasType",
            Self::HasValue => "HasValue",
            Self::IsDefinition => "IsDefinition",
            Self::HasProperty => "HasProperty",
        }
    }
}

/// Classes used as objects of typing relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Tag,
    Scheme,
    SecurityDefinition,
    SecurityDefinitionProperty,
    Property,
}

impl Class {
    pub fn local_name(&self) -> &'static str {
        match self {
            Self::Tag => "Tag",
            Self::Scheme => "Scheme",
            Self::SecurityDefinition => "SecurityDefinition",
            Self::SecurityDefinitionProperty => "SecurityDefinitionProperty",
            Self::Property => "Property",
        }
    }
}

/// Document keys and the predicate each one is mapped to.
///
/// Published verbatim as the context literal. Order is the serialization order.
pub const CONTEXT_KEYS: &[(&str, Predicate)] = &[
    ("tags", Predicate::IsPathTag),
    ("schemes", Predicate::IsScheme),
    ("paths", Predicate::HasPath),
    ("summary", Predicate::HasSummary),
    ("description", Predicate::HasDescription),
    ("get", Predicate::IsMethodType),
    ("post", Predicate::IsMethodType),
    ("delete", Predicate::IsMethodType),
    ("consumes", Predicate::Consumes),
    ("produces", Predicate::Produces),
    ("operationId", Predicate::HasOperationId),
    ("security", Predicate::HasSecurity),
    ("scopes", Predicate::SecurityScope),
    ("definitions", Predicate::IsDefinition),
    ("securityDefinitions", Predicate::IsSecurityDefinition),
    ("type", Predicate::HasType),
    ("properties", Predicate::HasProperty),
    ("name", Predicate::HasName),
];

/// HTTP methods recognized as operations under a path item.
pub const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

pub fn is_http_method(token: &str) -> bool {
    HTTP_METHODS.contains(&token)
}
