//! Default values for swagger-rdf configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Namespace Defaults
// ============================================================================

/// Base URI every synthesized resource identifier is built from.
pub const DEFAULT_BASE_URI: &str = "http://example.org/";

/// Prefix bound to the base URI in serialized output.
pub const DEFAULT_BASE_PREFIX: &str = "ex";

/// Prefixes bound to the fixed RDF and JSON-LD vocabularies.
pub const RESERVED_PREFIXES: &[&str] = &[crate::vocab::RDF_PREFIX, crate::vocab::JSONLD_PREFIX];

// ============================================================================
// Output Defaults
// ============================================================================

/// Input file read when no path is given and the prompt is skipped.
pub const DEFAULT_INPUT_FILE: &str = "swagger.json";

/// Notice printed after the serialized graph.
pub const DEFAULT_COMPLETION_NOTICE: &str = "Conversion done.";

// ============================================================================
// Config Locations
// ============================================================================

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "swagger-rdf.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "swagger-rdf";

/// File name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Environment Overrides
// ============================================================================

pub const ENV_BASE_URI: &str = "SWAGGER_RDF_BASE_URI";
pub const ENV_PREFIX: &str = "SWAGGER_RDF_PREFIX";
pub const ENV_OUTPUT: &str = "SWAGGER_RDF_OUTPUT";
