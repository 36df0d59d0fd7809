//! Raw text to document tree.

use crate::error::ConvertError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Source syntax of an API description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    #[default]
    Json,
    Yaml,
}

impl SourceFormat {
    /// Guess the format from a file extension. Anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse raw text into a tree.
pub fn parse_str(text: &str, format: SourceFormat) -> Result<Value, ConvertError> {
    match format {
        SourceFormat::Json => {
            serde_json::from_str(text).map_err(|e| ConvertError::MalformedJson(e.to_string()))
        }
        SourceFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ConvertError::MalformedJson(format!("YAML: {}", e))),
    }
}

/// Read and parse a file.
pub fn load_file(path: &Path) -> Result<Value, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded input document");

    parse_str(&text, SourceFormat::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("api.yaml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("api.YML")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("swagger.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("swagger")), SourceFormat::Json);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_str("{ \"paths\": ", SourceFormat::Json).unwrap_err();
        assert_eq!(err.kind(), "MalformedJson");
    }

    #[test]
    fn test_yaml_parses_to_same_tree() {
        let yaml = "paths:\n  /pets:\n    get:\n      summary: List\n";
        let json = r#"{"paths": {"/pets": {"get": {"summary": "List"}}}}"#;
        assert_eq!(
            parse_str(yaml, SourceFormat::Yaml).unwrap(),
            parse_str(json, SourceFormat::Json).unwrap()
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("/definitely/not/here/swagger.json")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInputFile { .. }));
    }
}
