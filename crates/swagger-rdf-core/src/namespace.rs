//! Resource identifier synthesis.
//!
//! All identifiers are built from one configured base URI:
//!
//! | Entity                       | Identifier                                   |
//! |------------------------------|----------------------------------------------|
//! | path                         | `base + path` with `{`/`}` replaced by `_`   |
//! | operation                    | `pathURI#lower(unescape(method))`            |
//! | tag                          | `base + "tag/" + name`                       |
//! | scheme                       | `base + "scheme/" + lower(name)`             |
//! | security definition          | `base + "securityDefinition/" + name`        |
//! | model definition             | `base + "definition/" + name`                |
//! | member (property, nested)    | `parentURI#name` (`%23name` under a fragment)|

use crate::config::{NamespaceConfig, RESERVED_PREFIXES};
use crate::error::ConvertError;
use crate::graph::UriNode;
use crate::vocab::{self, Class, Predicate};

/// Stateless identifier builder bound to one base URI.
#[derive(Debug, Clone)]
pub struct Namespace {
    base: String,
    prefix: String,
    extra_prefixes: Vec<(String, String)>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(&NamespaceConfig::default())
    }
}

impl Namespace {
    pub fn new(config: &NamespaceConfig) -> Self {
        Self {
            base: config.base_uri.clone(),
            prefix: config.prefix.clone(),
            extra_prefixes: config
                .extra_prefixes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Prefix bindings for the output graph: `rdf`, `jsonld`, the base prefix,
    /// then any configured extras. Configured bindings never replace `rdf` or
    /// `jsonld`.
    pub fn prefixes(&self) -> Vec<(String, String)> {
        let mut prefixes = vec![
            (vocab::RDF_PREFIX.to_string(), vocab::RDF_NS.to_string()),
            (vocab::JSONLD_PREFIX.to_string(), vocab::JSONLD_NS.to_string()),
        ];
        let configured = std::iter::once((self.prefix.clone(), self.base.clone()))
            .chain(self.extra_prefixes.iter().cloned())
            .filter(|(name, _)| !RESERVED_PREFIXES.contains(&name.as_str()));
        prefixes.extend(configured);
        prefixes
    }

    fn under_base(&self, local: &str) -> Result<UriNode, ConvertError> {
        UriNode::new(format!("{}{}", self.base, local))
    }

    /// Path resource. Template braces become underscores.
    pub fn path(&self, path: &str) -> Result<UriNode, ConvertError> {
        self.under_base(&path.replace(['{', '}'], "_"))
    }

    /// Operation resource for an already-normalized method token.
    pub fn operation(&self, path: &UriNode, token: &str) -> Result<UriNode, ConvertError> {
        self.member(path, token)
    }

    /// Resource naming the HTTP method itself (`ex:get`).
    pub fn method(&self, token: &str) -> Result<UriNode, ConvertError> {
        self.under_base(token)
    }

    /// Tag resource as declared in the top-level `tags` section.
    pub fn tag(&self, name: &str) -> Result<UriNode, ConvertError> {
        self.under_base(&format!("tag/{}", name))
    }

    /// Tag resource as referenced from an operation's `tags` array.
    pub fn path_tag(&self, name: &str) -> Result<UriNode, ConvertError> {
        self.under_base(name)
    }

    pub fn scheme(&self, name: &str) -> Result<UriNode, ConvertError> {
        self.under_base(&format!("scheme/{}", name.to_lowercase()))
    }

    pub fn security_definition(&self, name: &str) -> Result<UriNode, ConvertError> {
        self.under_base(&format!("securityDefinition/{}", name))
    }

    pub fn definition(&self, name: &str) -> Result<UriNode, ConvertError> {
        self.under_base(&format!("definition/{}", name))
    }

    /// `parent#name`, used for operations and every kind of property. When the
    /// parent already has a fragment the separator is stored as `%23`.
    pub fn member(&self, parent: &UriNode, name: &str) -> Result<UriNode, ConvertError> {
        UriNode::new(format!("{}#{}", parent.as_str(), name))
    }

    pub fn context(&self) -> Result<UriNode, ConvertError> {
        self.under_base(vocab::CONTEXT_LOCAL_NAME)
    }

    pub fn predicate(&self, predicate: Predicate) -> Result<UriNode, ConvertError> {
        self.under_base(predicate.local_name())
    }

    pub fn class(&self, class: Class) -> Result<UriNode, ConvertError> {
        self.under_base(class.local_name())
    }
}

/// Normalized method token for a raw path-item key: one unescape pass, then
/// lowercase.
pub fn method_token(key: &str) -> Result<String, ConvertError> {
    Ok(unescape(key)?.to_lowercase())
}

/// Resolve backslash escape sequences left in a raw key.
///
/// Unknown escapes yield the escaped character itself. A trailing backslash or
/// a short/non-hex `\x`/`\u` escape is a malformed identifier.
pub fn unescape(raw: &str) -> Result<String, ConvertError> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = chars
            .next()
            .ok_or_else(|| ConvertError::malformed_identifier(raw, "trailing backslash"))?;
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            'a' => out.push('\u{07}'),
            'e' => out.push('\u{1B}'),
            '0' => out.push('\0'),
            'x' => out.push(hex_escape(raw, &mut chars, 2)?),
            'u' => out.push(hex_escape(raw, &mut chars, 4)?),
            other => out.push(other),
        }
    }
    Ok(out)
}

fn hex_escape(
    raw: &str,
    chars: &mut std::str::Chars<'_>,
    width: usize,
) -> Result<char, ConvertError> {
    let digits: String = chars.by_ref().take(width).collect();
    if digits.len() != width {
        return Err(ConvertError::malformed_identifier(raw, "truncated escape sequence"));
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            ConvertError::malformed_identifier(raw, format!("invalid escape '{}'", digits))
        })
}
