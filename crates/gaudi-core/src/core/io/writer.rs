use super::format::InputFormat;
use crate::core::models::document::InputDocument;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Renders the normalized document, with every default spelled out.
pub fn render_document(
    document: &InputDocument,
    format: InputFormat,
) -> Result<String, WriteError> {
    match format {
        InputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        InputFormat::Toml => Ok(toml::to_string_pretty(document)?),
    }
}

pub fn write_document(
    document: &InputDocument,
    path: &Path,
    format: InputFormat,
) -> Result<(), WriteError> {
    let rendered = render_document(document, format)?;
    debug!("Writing {} document to {:?}", format, path);
    std::fs::write(path, rendered).map_err(|e| WriteError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
