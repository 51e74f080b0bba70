use super::format::InputFormat;
use super::raw::RawDocument;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parsing error for '{path}': {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Input document '{path}' is empty")]
    EmptyDocument { path: String },
}

/// Reads and parses an input file, picking the syntax from its extension.
pub fn read_document(path: &Path) -> Result<RawDocument, ReadError> {
    debug!("Reading input document from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| ReadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_document(
        &content,
        InputFormat::from_path(path),
        &path.to_string_lossy(),
    )
}

/// Parses an input document from memory. `origin` names the source in error messages.
pub fn parse_document(
    content: &str,
    format: InputFormat,
    origin: &str,
) -> Result<RawDocument, ReadError> {
    if is_blank(content) {
        return Err(ReadError::EmptyDocument {
            path: origin.to_string(),
        });
    }
    match format {
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| ReadError::Yaml {
            path: origin.to_string(),
            source: e,
        }),
        InputFormat::Toml => toml::from_str(content).map_err(|e| ReadError::Toml {
            path: origin.to_string(),
            source: e,
        }),
    }
}

fn is_blank(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}
