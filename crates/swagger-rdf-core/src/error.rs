//! Conversion error types.
//!
//! Every variant is fatal for the whole run: a document that cannot be fully
//! mapped produces no graph at all.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a document into a graph.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("The specified file does not exist: {}", path.display())]
    MissingInputFile { path: PathBuf },

    /// IO error while reading input or writing output.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input text is not a valid document tree.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// A section required for conversion is absent.
    #[error("Missing required section '{0}'")]
    MissingRequiredSection(&'static str),

    /// A synthesized identifier is not a well-formed IRI.
    #[error("Malformed identifier <{iri}>: {message}")]
    MalformedIdentifier { iri: String, message: String },

    /// A known key holds a value of the wrong kind.
    #[error("Unexpected shape at {location}: {message}")]
    UnexpectedShape { location: String, message: String },

    /// The graph could not be written out.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_identifier(iri: impl Into<String>, message: impl ToString) -> Self {
        ConvertError::MalformedIdentifier {
            iri: iri.into(),
            message: message.to_string(),
        }
    }

    pub fn unexpected_shape(location: impl Into<String>, message: impl ToString) -> Self {
        ConvertError::UnexpectedShape {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Name of the failure kind, used as the tag of the diagnostic line.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInputFile { .. } => "MissingInputFile",
            Self::Io { .. } => "Io",
            Self::MalformedJson(_) => "MalformedJson",
            Self::MissingRequiredSection(_) => "MissingRequiredSection",
            Self::MalformedIdentifier { .. } => "MalformedIdentifier",
            Self::UnexpectedShape { .. } => "UnexpectedShape",
            Self::Serialization(_) => "Serialization",
        }
    }
}
